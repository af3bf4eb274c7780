//! Domain layer for EBİS delivery records
//!
//! Contains the 17-field delivery record model mandated by the EBİS
//! (Elektronik Beton İzleme Sistemi) standard and the pure encoding
//! services that turn a record into its GS-delimited wire string.

pub mod model;
pub mod service;

pub use model::{DeliveryRecord, DensityClass, Field, FieldLocks};
pub use service::{encode, encode_for_display, format_dispatch_date, EBIS_HEADER, GS, GS_DISPLAY};
