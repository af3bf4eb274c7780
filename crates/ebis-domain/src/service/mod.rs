//! Domain services

pub mod encoder;

pub use encoder::{encode, encode_for_display, format_dispatch_date, EBIS_HEADER, GS, GS_DISPLAY};
