//! Application service layer for ebis-karekod
//!
//! Wires the pure domain encoder to its consumers: configuration, the QR
//! ("karekod") renderer, and PNG/base64 export.

pub mod app;
pub mod config;
pub mod export;
pub mod qr;

pub use app::encode_service::AssembledRecord;
pub use app::{build_record, EncodedDelivery};
pub use config::Config;
