//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use ebis_domain::Field;
use ebis_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ebis-karekod")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "EBİS karekod generator for concrete delivery waybills")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode one delivery record and optionally render its karekod
    Encode {
        /// Start from a saved preset instead of the standard's example record
        #[arg(long)]
        preset: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,

        /// Print only the raw wire string (real GS bytes), e.g. for piping
        /// into another renderer
        #[arg(long)]
        raw: bool,

        /// Write the karekod PNG to this exact path
        #[arg(long)]
        qr: Option<PathBuf>,

        /// Write the karekod PNG into this directory using the
        /// EBIS_Karekod_<series>.png naming convention
        #[arg(long)]
        qr_dir: Option<PathBuf>,

        /// Print the PNG as a data:image/png;base64 payload
        #[arg(long)]
        base64: bool,
    },

    /// Encode every row of a CSV export, one karekod PNG per waybill
    Batch {
        /// Path to the CSV file
        csv: PathBuf,

        /// Output directory for the PNGs (config output_dir or . by default)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Manage saved record presets
    Preset {
        #[command(subcommand)]
        command: PresetCommands,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// List the record fields with their CLI keys and waybill labels
    Fields,
}

#[derive(Subcommand)]
pub enum PresetCommands {
    /// Save a preset built from the example record plus field overrides
    Save {
        /// Preset name
        name: String,

        #[command(flatten)]
        fields: FieldArgs,

        /// Lock a field by key (repeatable), e.g. --lock tax_number
        #[arg(long = "lock", value_name = "FIELD")]
        locks: Vec<String>,
    },

    /// List saved presets
    List,

    /// Show one preset
    Show {
        /// Preset name
        name: String,
    },

    /// Delete a preset
    Delete {
        /// Preset name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,

    /// Set a configuration value (output_format, qr_size, output_dir)
    Set {
        key: String,
        value: String,
    },
}

/// Per-field override flags shared by `encode` and `preset save`
#[derive(Args)]
pub struct FieldArgs {
    /// Waybill series number
    #[arg(long)]
    pub series: Option<String>,

    /// Producer tax number
    #[arg(long)]
    pub tax: Option<String>,

    /// Dispatch date and time, e.g. 2019-09-25T13:30 or "25.09.2019 13:30"
    #[arg(long)]
    pub date: Option<String>,

    /// Amount on this waybill, m³
    #[arg(long)]
    pub amount: Option<String>,

    /// Cumulative ordered amount, m³
    #[arg(long)]
    pub total: Option<String>,

    /// Strength class, e.g. C50
    #[arg(long)]
    pub strength: Option<String>,

    /// 7/28-day development ratio
    #[arg(long)]
    pub ratio: Option<String>,

    /// Slump class, e.g. S3
    #[arg(long)]
    pub slump: Option<String>,

    /// Density class: N, H or A
    #[arg(long)]
    pub density: Option<String>,

    /// Chloride content class
    #[arg(long)]
    pub chloride: Option<String>,

    /// Maximum aggregate size (Dmax)
    #[arg(long)]
    pub dmax: Option<String>,

    /// Water/cement ratio
    #[arg(long)]
    pub wc: Option<String>,

    /// Vehicle license plate
    #[arg(long)]
    pub plate: Option<String>,

    /// Cement type
    #[arg(long)]
    pub cement: Option<String>,

    /// Chemical admixture
    #[arg(long)]
    pub chemical: Option<String>,

    /// Mineral admixture
    #[arg(long)]
    pub mineral: Option<String>,

    /// Fiber description
    #[arg(long)]
    pub fibers: Option<String>,
}

impl FieldArgs {
    /// Collect the given flags as (field, value) overrides in wire order
    pub fn overrides(&self) -> Vec<(Field, String)> {
        let flags = [
            (Field::WaybillSeries, &self.series),
            (Field::TaxNumber, &self.tax),
            (Field::DispatchDate, &self.date),
            (Field::AmountCurrent, &self.amount),
            (Field::AmountTotal, &self.total),
            (Field::StrengthClass, &self.strength),
            (Field::DevelopmentRatio, &self.ratio),
            (Field::SlumpClass, &self.slump),
            (Field::DensityClass, &self.density),
            (Field::ChlorideClass, &self.chloride),
            (Field::MaxAggregateSize, &self.dmax),
            (Field::WaterCementRatio, &self.wc),
            (Field::LicensePlate, &self.plate),
            (Field::CementType, &self.cement),
            (Field::ChemicalAdmixture, &self.chemical),
            (Field::MineralAdmixture, &self.mineral),
            (Field::Fibers, &self.fibers),
        ];

        flags
            .into_iter()
            .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
            .collect()
    }
}
