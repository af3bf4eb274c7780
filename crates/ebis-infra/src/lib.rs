//! Infrastructure layer for ebis-karekod

pub mod csv_loader;

pub use csv_loader::{load_delivery_records, CsvLoaderError};
