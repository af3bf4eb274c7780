//! Domain model types

pub mod density;
pub mod locks;
pub mod record;

pub use density::DensityClass;
pub use locks::FieldLocks;
pub use record::{DeliveryRecord, Field};
