//! Command handlers

use crate::cli::{Cli, Commands, ConfigCommands, FieldArgs, PresetCommands};
use crate::output;
use ebis_app::{build_record, export, qr, Config, EncodedDelivery};
use ebis_domain::{Field, FieldLocks};
use ebis_infra::load_delivery_records;
use ebis_store::{Preset, PresetStore};
use ebis_types::{Error, OutputFormat, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Encode {
            preset,
            fields,
            raw,
            qr,
            qr_dir,
            base64,
        } => cmd_encode(&config, format, preset, fields, raw, qr, qr_dir, base64),
        Commands::Batch { csv, out_dir } => cmd_batch(&config, format, csv, out_dir),
        Commands::Preset { command } => cmd_preset(format, command),
        Commands::Config { command } => cmd_config(command),
        Commands::Fields => output::print_fields(format),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_encode(
    config: &Config,
    format: OutputFormat,
    preset_name: Option<String>,
    fields: FieldArgs,
    raw_only: bool,
    qr_path: Option<PathBuf>,
    qr_dir: Option<PathBuf>,
    base64: bool,
) -> Result<()> {
    let preset = match preset_name {
        Some(name) => {
            let store = PresetStore::open(Config::preset_dir()?)?;
            Some(store.get(&name)?.clone())
        }
        None => None,
    };

    let assembled = build_record(preset.as_ref(), &fields.overrides())?;
    for field in &assembled.skipped {
        eprintln!(
            "Warning: {} is locked by the preset, override ignored",
            field.key()
        );
    }

    let encoded = EncodedDelivery::new(assembled.record)?;

    // render once, only when some QR output was actually requested
    let image = if qr_path.is_some() || qr_dir.is_some() || base64 {
        Some(qr::render(&encoded.raw, config.qr_size)?)
    } else {
        None
    };

    let mut written: Option<PathBuf> = None;
    if let Some(ref image) = image {
        if let Some(ref path) = qr_path {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            image.save(path)?;
            written = Some(path.clone());
        }
        if let Some(ref dir) = qr_dir {
            written = Some(export::write_png(image, dir, &encoded.record.waybill_series)?);
        }
    }

    let data_url = match (base64, &image) {
        (true, Some(image)) => Some(export::base64_data_url(image)?),
        _ => None,
    };

    if raw_only {
        // machine consumers get exactly the wire string, nothing else
        println!("{}", encoded.raw);
        return Ok(());
    }

    output::print_encoded(format, &encoded, written.as_deref(), data_url.as_deref())
}

/// Outcome of one batch row
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub waybill_series: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn cmd_batch(
    config: &Config,
    format: OutputFormat,
    csv: PathBuf,
    out_dir: Option<PathBuf>,
) -> Result<()> {
    let records = load_delivery_records(&csv)?;
    let dir = out_dir
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut entries = Vec::new();
    for record in records {
        let series = record.waybill_series.clone();
        pb.set_message(series.clone());

        let result = EncodedDelivery::new(record)
            .and_then(|encoded| qr::render(&encoded.raw, config.qr_size))
            .and_then(|image| export::write_png(&image, &dir, &series));

        let entry = match result {
            Ok(path) => BatchEntry {
                waybill_series: series,
                path: Some(path),
                error: None,
            },
            Err(e) => BatchEntry {
                waybill_series: series,
                path: None,
                error: Some(e.to_string()),
            },
        };
        entries.push(entry);
        pb.inc(1);
    }
    pb.finish_and_clear();

    output::print_batch(format, &entries, &dir)
}

fn cmd_preset(format: OutputFormat, command: PresetCommands) -> Result<()> {
    let mut store = PresetStore::open(Config::preset_dir()?)?;

    match command {
        PresetCommands::Save { name, fields, locks } => {
            let assembled = build_record(None, &fields.overrides())?;

            let mut field_locks = FieldLocks::new();
            for key in &locks {
                let field =
                    Field::from_key(key).ok_or_else(|| Error::UnknownField(key.clone()))?;
                field_locks.lock(field);
            }

            let locked = field_locks.len();
            store.save(
                &name,
                Preset {
                    record: assembled.record,
                    locks: field_locks,
                },
            )?;
            println!("Saved preset '{}' ({} locked)", name, locked);
            Ok(())
        }
        PresetCommands::List => output::print_preset_list(format, &store),
        PresetCommands::Show { name } => {
            let preset = store.get(&name)?;
            output::print_preset(format, &name, preset)
        }
        PresetCommands::Delete { name } => {
            if store.remove(&name)? {
                println!("Deleted preset '{}'", name);
                Ok(())
            } else {
                Err(Error::PresetNotFound(name))
            }
        }
    }
}

fn cmd_config(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = Config::load()?;
            println!("Config file: {}", Config::config_path()?.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load()?;
            config.set_value(&key, &value)?;
            config.save()?;
            println!("Set {} = {}", key, value);
            Ok(())
        }
    }
}
