//! EBİS wire-format encoder
//!
//! Serializes a [`DeliveryRecord`] into the 17-segment, GS-delimited string
//! that the standard mandates for the karekod payload. Encoding is a pure
//! function of the record; the same record always yields the same string,
//! which is what makes the generated karekod reproducible.

use chrono::NaiveDateTime;
use ebis_types::{Error, Result};

use crate::model::DeliveryRecord;

/// Group Separator, ASCII 29: the field delimiter mandated by the standard
pub const GS: char = '\u{1d}';

/// Visible stand-in for [`GS`] in the human-readable preview
pub const GS_DISPLAY: &str = "<GS>";

/// Wire position 1: constant format identifier and version tag
pub const EBIS_HEADER: &str = "E1";

/// Date-time input formats accepted for the dispatch date
///
/// The first is what the HTML `datetime-local` widget of the original tool
/// produced; the last matches the dotted notation printed on paper waybills.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%d.%m.%Y %H:%M"];

/// Reformat the dispatch date into the standard's `YYYYAAGGSSDD` form:
/// 4-digit year, then zero-padded month, day, hour and minute, 12 digits
/// with no separators.
///
/// An empty input yields an empty segment. A non-empty input that matches
/// none of the accepted formats is a hard error; the standard leaves this
/// case undefined and silently emitting garbage would end up inside a
/// scannable karekod.
pub fn format_dispatch_date(raw: &str) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(String::new());
    }

    for format in DATE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt.format("%Y%m%d%H%M").to_string());
        }
    }

    Err(Error::InvalidDispatchDate(raw.to_string()))
}

/// Encode a record into the raw wire string
///
/// The 17 segments are joined by a single [`GS`] byte, with no leading or
/// trailing separator. Apart from the dispatch date every field is emitted
/// verbatim; empty fields produce empty segments, never an error.
pub fn encode(record: &DeliveryRecord) -> Result<String> {
    // position 5 joins its two sub-values with a literal slash; when both
    // are blank the whole segment stays blank
    let amounts = if record.amount_current.is_empty() && record.amount_total.is_empty() {
        String::new()
    } else {
        format!("{}/{}", record.amount_current, record.amount_total)
    };

    let segments = [
        EBIS_HEADER.to_string(),                // 1. header
        record.waybill_series.clone(),          // 2. waybill series
        record.tax_number.clone(),              // 3. tax number
        format_dispatch_date(&record.dispatch_date)?, // 4. dispatch date
        amounts,                                // 5. amount/total
        record.strength_class.clone(),          // 6. strength
        record.development_ratio.clone(),       // 7. 7/28 ratio
        record.slump_class.clone(),             // 8. slump
        record
            .density_class
            .map(|d| d.code().to_string())
            .unwrap_or_default(),               // 9. density
        record.chloride_class.clone(),          // 10. chloride
        record.max_aggregate_size.clone(),      // 11. Dmax
        record.water_cement_ratio.clone(),      // 12. w/c ratio
        record.license_plate.clone(),           // 13. plate
        record.cement_type.clone(),             // 14. cement
        record.chemical_admixture.clone(),      // 15. chemical admixture
        record.mineral_admixture.clone(),       // 16. mineral admixture
        record.fibers.clone(),                  // 17. fibers
    ];

    Ok(segments.join(&GS.to_string()))
}

/// Encode a record for human inspection
///
/// Same as [`encode`] with every GS byte replaced by the visible `<GS>`
/// token. Never feed this variant to the karekod renderer.
pub fn encode_for_display(record: &DeliveryRecord) -> Result<String> {
    Ok(encode(record)?.replace(GS, GS_DISPLAY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeliveryRecord, Field};

    #[test]
    fn date_reformats_iso_input() {
        assert_eq!(format_dispatch_date("2019-09-25T13:30").unwrap(), "201909251330");
    }

    #[test]
    fn date_accepts_seconds_and_dotted_forms() {
        assert_eq!(
            format_dispatch_date("2019-09-25T13:30:42").unwrap(),
            "201909251330"
        );
        assert_eq!(
            format_dispatch_date("25.09.2019 13:30").unwrap(),
            "201909251330"
        );
    }

    #[test]
    fn date_zero_pads_components() {
        assert_eq!(format_dispatch_date("2024-01-05T07:08").unwrap(), "202401050708");
    }

    #[test]
    fn empty_date_yields_empty_segment() {
        assert_eq!(format_dispatch_date("").unwrap(), "");
        assert_eq!(format_dispatch_date("   ").unwrap(), "");
    }

    #[test]
    fn garbage_date_is_an_error() {
        assert!(format_dispatch_date("not a date").is_err());
        assert!(format_dispatch_date("2019-13-45T99:99").is_err());
    }

    #[test]
    fn encode_contains_sixteen_separators() {
        let raw = encode(&DeliveryRecord::default()).unwrap();
        assert_eq!(raw.chars().filter(|&c| c == GS).count(), 16);
    }

    #[test]
    fn encode_is_deterministic() {
        let record = DeliveryRecord::default();
        assert_eq!(encode(&record).unwrap(), encode(&record).unwrap());
    }

    #[test]
    fn amount_segment_joins_with_slash() {
        let record = DeliveryRecord::default();
        let raw = encode(&record).unwrap();
        let segments: Vec<&str> = raw.split(GS).collect();
        assert_eq!(segments[4], "12/60");
    }

    #[test]
    fn display_replaces_every_separator() {
        let record = DeliveryRecord::default();
        let raw = encode(&record).unwrap();
        let display = encode_for_display(&record).unwrap();

        assert_eq!(display, raw.replace(GS, GS_DISPLAY));
        assert!(!display.contains(GS));
        assert_eq!(display.matches(GS_DISPLAY).count(), 16);
    }

    #[test]
    fn empty_record_is_header_plus_sixteen_separators() {
        let raw = encode(&DeliveryRecord::empty()).unwrap();

        let mut expected = EBIS_HEADER.to_string();
        expected.extend(std::iter::repeat(GS).take(16));
        assert_eq!(raw, expected);
    }

    #[test]
    fn half_filled_amount_still_emits_slash() {
        let mut record = DeliveryRecord::empty();
        record.set(Field::AmountCurrent, "12").unwrap();

        let raw = encode(&record).unwrap();
        let segments: Vec<&str> = raw.split(GS).collect();
        assert_eq!(segments[4], "12/");
    }

    #[test]
    fn encode_propagates_bad_date() {
        let mut record = DeliveryRecord::default();
        record.set(Field::DispatchDate, "whenever").unwrap();
        assert!(encode(&record).is_err());
    }
}
