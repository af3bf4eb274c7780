//! Output formatting module

use crate::commands::BatchEntry;
use ebis_app::EncodedDelivery;
use ebis_domain::Field;
use ebis_store::{Preset, PresetStore};
use ebis_types::{OutputFormat, Result};
use serde::Serialize;
use std::path::Path;

/// JSON report for a single encoded delivery
#[derive(Serialize)]
struct EncodeReport<'a> {
    #[serde(flatten)]
    encoded: &'a EncodedDelivery,
    #[serde(skip_serializing_if = "Option::is_none")]
    qr_path: Option<&'a Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base64: Option<&'a str>,
}

pub fn print_encoded(
    format: OutputFormat,
    encoded: &EncodedDelivery,
    qr_path: Option<&Path>,
    base64: Option<&str>,
) -> Result<()> {
    if format == OutputFormat::Json {
        let report = EncodeReport {
            encoded,
            qr_path,
            base64,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\nEBİS Karekod Payload");
    println!("====================");
    println!("{}", encoded.display);

    println!();
    for field in Field::ALL {
        println!("{:<26} {}", field.label(), encoded.record.get(field));
    }

    if let Some(path) = qr_path {
        println!("\nSaved karekod: {}", path.display());
    }
    if let Some(url) = base64 {
        println!("\nBase64 payload:");
        println!("{}", url);
    }

    Ok(())
}

pub fn print_batch(format: OutputFormat, entries: &[BatchEntry], dir: &Path) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    let failed: Vec<&BatchEntry> = entries.iter().filter(|e| e.error.is_some()).collect();

    println!("\nBatch Result");
    println!("============");
    println!("Encoded:   {}", entries.len() - failed.len());
    println!("Failed:    {}", failed.len());
    println!("Output:    {}", dir.display());

    for entry in &failed {
        println!(
            "  {} - {}",
            entry.waybill_series,
            entry.error.as_deref().unwrap_or("unknown error")
        );
    }

    Ok(())
}

pub fn print_preset_list(format: OutputFormat, store: &PresetStore) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&store.names())?);
        return Ok(());
    }

    if store.count() == 0 {
        println!("No presets saved.");
        return Ok(());
    }

    println!("\nPresets");
    println!("=======");
    for name in store.names() {
        if let Ok(preset) = store.get(name) {
            println!(
                "{:<20} {:<8} {} locked",
                name,
                preset.record.strength_class,
                preset.locks.len()
            );
        }
    }

    Ok(())
}

pub fn print_preset(format: OutputFormat, name: &str, preset: &Preset) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(preset)?);
        return Ok(());
    }

    println!("\nPreset '{}'", name);
    println!("========");
    for field in Field::ALL {
        let lock_mark = if preset.locks.is_locked(field) { "*" } else { " " };
        println!("{} {:<26} {}", lock_mark, field.label(), preset.record.get(field));
    }
    if !preset.locks.is_empty() {
        println!("\n* locked field");
    }

    Ok(())
}

pub fn print_fields(format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let fields: Vec<_> = Field::ALL
            .iter()
            .map(|f| serde_json::json!({ "key": f.key(), "label": f.label() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    println!("\nFields (wire order)");
    println!("===================");
    for field in Field::ALL {
        println!("{:<22} {}", field.key(), field.label());
    }

    Ok(())
}
