//! The crate is split in 2 modules:
//!
//! - [gateway] (ZenoPay API client, request building and validation)
//! - [result] (the `{ success, message }` shape every call returns)
#![doc = include_str!("../README.md")]

/// ZenoPay gateway integration
///
/// Types and methods to create payment orders and query their status.
pub mod gateway;
pub mod result;

pub use gateway::{
    Credentials, ZenoPay,
    error::{GatewayError, ValidationError},
    payin::PaymentRequest,
    status::OrderStatusRequest,
    transport::{HttpTransport, Transport},
};
pub use result::RequestResult;
