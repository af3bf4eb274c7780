//! Export of rendered karekods
//!
//! Mirrors the two consumers of the original tool: a PNG download named
//! after the waybill series and a base64 payload for pasting elsewhere.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use ebis_types::Result;
use std::path::{Path, PathBuf};

use crate::qr::{self, QrImage};

/// File name for a waybill's karekod PNG, e.g. `EBIS_Karekod_A123456.png`
///
/// Path separators in the series are flattened so the name stays a plain
/// file name.
pub fn qr_file_name(waybill_series: &str) -> String {
    let series: String = waybill_series
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("EBIS_Karekod_{series}.png")
}

/// Write the karekod PNG into `dir`, returning the file path
pub fn write_png(image: &QrImage, dir: &Path, waybill_series: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(qr_file_name(waybill_series));
    image.save(&path)?;
    Ok(path)
}

/// PNG as a `data:image/png;base64,...` payload
pub fn base64_data_url(image: &QrImage) -> Result<String> {
    let bytes = qr::png_bytes(image)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
}
