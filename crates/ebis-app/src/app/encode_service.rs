//! Record assembly and encoding use case
//!
//! Builds a record from a preset (or the standard's example defaults) plus
//! per-field overrides, honoring the preset's field locks, then runs both
//! encoder variants.

use ebis_domain::{encode, encode_for_display, DeliveryRecord, Field, FieldLocks};
use ebis_store::Preset;
use ebis_types::Result;
use serde::Serialize;

/// Result of assembling overrides onto a base record
pub struct AssembledRecord {
    pub record: DeliveryRecord,
    /// Overrides that were refused because the field is locked
    pub skipped: Vec<Field>,
}

/// Build a record from an optional preset and field overrides
///
/// Without a preset the base is [`DeliveryRecord::default`] with no locks.
/// Overrides targeting a locked field are skipped and reported, not
/// applied.
pub fn build_record(
    preset: Option<&Preset>,
    overrides: &[(Field, String)],
) -> Result<AssembledRecord> {
    let (mut record, locks) = match preset {
        Some(p) => (p.record.clone(), p.locks.clone()),
        None => (DeliveryRecord::default(), FieldLocks::new()),
    };

    let mut skipped = Vec::new();
    for (field, value) in overrides {
        if !record.apply(&locks, *field, value)? {
            skipped.push(*field);
        }
    }

    Ok(AssembledRecord { record, skipped })
}

/// A record together with both encoder outputs
#[derive(Debug, Clone, Serialize)]
pub struct EncodedDelivery {
    pub record: DeliveryRecord,
    /// Wire string with real GS bytes; feed this to the karekod renderer
    pub raw: String,
    /// Preview string with `<GS>` tokens; never scannable
    pub display: String,
}

impl EncodedDelivery {
    pub fn new(record: DeliveryRecord) -> Result<Self> {
        let raw = encode(&record)?;
        let display = encode_for_display(&record)?;
        Ok(Self { record, raw, display })
    }
}
