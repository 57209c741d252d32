use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Header set sent with every gateway request.
pub fn form_headers() -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
    map
}
