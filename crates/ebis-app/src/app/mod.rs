//! Application use cases

pub mod encode_service;

pub use encode_service::{build_record, EncodedDelivery};
