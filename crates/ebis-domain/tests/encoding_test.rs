//! End-to-end encoding tests against the standard's worked example

use ebis_domain::{encode, encode_for_display, DeliveryRecord, Field, FieldLocks, GS};

/// Display string for the page-11 example record, segment by segment
const EXAMPLE_DISPLAY: &str = "E1<GS>A123456<GS>0123456789<GS>201909251330<GS>12/60\
<GS>C50<GS>0,7<GS>S3<GS>N<GS>CL 0,2<GS>22,4<GS>0,41<GS>06EBS01<GS>CEM II/A-S 42,5 N\
<GS>YAPICHEM DEGASET AX 4117<GS>ÖĞÜTÜLMÜŞ GRANÜLE Y. F. CÜRUFU<GS>-";

#[test]
fn default_record_matches_standard_example() {
    let display = encode_for_display(&DeliveryRecord::default()).unwrap();
    assert_eq!(display, EXAMPLE_DISPLAY);
}

#[test]
fn raw_and_display_agree_segment_by_segment() {
    let record = DeliveryRecord::default();
    let raw = encode(&record).unwrap();
    let display = encode_for_display(&record).unwrap();

    let raw_segments: Vec<&str> = raw.split(GS).collect();
    let display_segments: Vec<&str> = display.split("<GS>").collect();
    assert_eq!(raw_segments, display_segments);
    assert_eq!(raw_segments.len(), 17);
}

#[test]
fn display_starts_and_ends_as_documented() {
    let display = encode_for_display(&DeliveryRecord::default()).unwrap();
    assert!(display.starts_with("E1<GS>A123456<GS>0123456789<GS>201909251330<GS>12/60<GS>"));
    assert!(display.ends_with("<GS>-"));
}

#[test]
fn raw_string_has_no_framing() {
    let raw = encode(&DeliveryRecord::default()).unwrap();
    assert!(!raw.starts_with(GS));
    assert!(!raw.ends_with(GS));
}

#[test]
fn locked_preset_fields_survive_a_new_waybill() {
    // typical plant flow: tax number and mix constants are locked, only the
    // waybill-specific fields change between shipments
    let mut record = DeliveryRecord::default();
    let mut locks = FieldLocks::new();
    locks.lock(Field::TaxNumber);
    locks.lock(Field::CementType);

    record.apply(&locks, Field::WaybillSeries, "A123457").unwrap();
    record.apply(&locks, Field::TaxNumber, "1111111111").unwrap();

    let display = encode_for_display(&record).unwrap();
    assert!(display.contains("A123457<GS>0123456789"));
    assert!(display.contains("CEM II/A-S 42,5 N"));
}
