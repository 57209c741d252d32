use std::sync::Arc;

use async_trait::async_trait;

use crate::gateway::{Result, form::FormBody, headers::form_headers, mask};

/// Sends one form-encoded POST and returns the decoded JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_form(&self, url: &str, body: &FormBody) -> Result<serde_json::Value>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::new();
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, body: &FormBody) -> Result<serde_json::Value> {
        tracing::debug!(%url, data = %mask::secure_serializable(body), "Gateway API request");
        let res = self
            .client
            .post(url)
            .headers(form_headers())
            .form(body)
            .send()
            .await?;
        let status = res.status();
        let response = res.json::<serde_json::Value>().await?;
        tracing::debug!(
            %status,
            data = %mask::secure_value(&response),
            "Gateway API response"
        );
        Ok(response)
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post_form(&self, url: &str, body: &FormBody) -> Result<serde_json::Value> {
        (**self).post_form(url, body).await
    }
}
