//! Delivery record model
//!
//! One `DeliveryRecord` describes a single concrete shipment: the waybill
//! identity, dispatch time, mix specification and vehicle data that the
//! EBİS standard packs into one 17-segment karekod payload.

use ebis_types::Result;
use serde::{Deserialize, Serialize};

use super::density::DensityClass;
use super::locks::FieldLocks;

/// Identifier for each mutable field of a [`DeliveryRecord`]
///
/// Wire position 1 (the constant `E1` header) is emitted by the encoder and
/// has no field. Position 5 is composed of the two amount sub-values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    WaybillSeries,
    TaxNumber,
    DispatchDate,
    AmountCurrent,
    AmountTotal,
    StrengthClass,
    DevelopmentRatio,
    SlumpClass,
    DensityClass,
    ChlorideClass,
    MaxAggregateSize,
    WaterCementRatio,
    LicensePlate,
    CementType,
    ChemicalAdmixture,
    MineralAdmixture,
    Fibers,
}

impl Field {
    /// All fields in wire order
    pub const ALL: [Field; 17] = [
        Field::WaybillSeries,
        Field::TaxNumber,
        Field::DispatchDate,
        Field::AmountCurrent,
        Field::AmountTotal,
        Field::StrengthClass,
        Field::DevelopmentRatio,
        Field::SlumpClass,
        Field::DensityClass,
        Field::ChlorideClass,
        Field::MaxAggregateSize,
        Field::WaterCementRatio,
        Field::LicensePlate,
        Field::CementType,
        Field::ChemicalAdmixture,
        Field::MineralAdmixture,
        Field::Fibers,
    ];

    /// Stable snake_case key, used by CLI flags and preset files
    pub fn key(&self) -> &'static str {
        match self {
            Field::WaybillSeries => "waybill_series",
            Field::TaxNumber => "tax_number",
            Field::DispatchDate => "dispatch_date",
            Field::AmountCurrent => "amount_current",
            Field::AmountTotal => "amount_total",
            Field::StrengthClass => "strength_class",
            Field::DevelopmentRatio => "development_ratio",
            Field::SlumpClass => "slump_class",
            Field::DensityClass => "density_class",
            Field::ChlorideClass => "chloride_class",
            Field::MaxAggregateSize => "max_aggregate_size",
            Field::WaterCementRatio => "water_cement_ratio",
            Field::LicensePlate => "license_plate",
            Field::CementType => "cement_type",
            Field::ChemicalAdmixture => "chemical_admixture",
            Field::MineralAdmixture => "mineral_admixture",
            Field::Fibers => "fibers",
        }
    }

    /// Human-readable label as printed on the Turkish waybill form
    pub fn label(&self) -> &'static str {
        match self {
            Field::WaybillSeries => "İrsaliye Seri No",
            Field::TaxNumber => "Vergi No",
            Field::DispatchDate => "Sevk Tarihi ve Saati",
            Field::AmountCurrent => "Beton Miktarı (İrsaliye)",
            Field::AmountTotal => "Beton Miktarı (Toplam)",
            Field::StrengthClass => "Dayanım Sınıfı",
            Field::DevelopmentRatio => "7/28 Gün Gelişim Oranı",
            Field::SlumpClass => "Kıvam Sınıfı",
            Field::DensityClass => "Yoğunluk Sınıfı",
            Field::ChlorideClass => "Klorür İçeriği Sınıfı",
            Field::MaxAggregateSize => "Dmax",
            Field::WaterCementRatio => "Su/Çimento Oranı",
            Field::LicensePlate => "Araç Plaka No",
            Field::CementType => "Çimento Tipi",
            Field::ChemicalAdmixture => "Kimyasal Katkı",
            Field::MineralAdmixture => "Mineral Katkı",
            Field::Fibers => "Lifler",
        }
    }

    /// Look up a field by its snake_case key
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.key() == key)
    }
}

/// One concrete shipment, as entered on the delivery waybill
///
/// All fields are free-form text at this level except the density class,
/// which the standard restricts to three single-letter codes. Validation
/// beyond that belongs to the consumers, not the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Waybill series number (İrsaliye Seri No)
    pub waybill_series: String,
    /// Producer tax number (Vergi No)
    pub tax_number: String,
    /// Dispatch date and time, ISO-style local string (e.g. `2019-09-25T13:30`)
    pub dispatch_date: String,
    /// Concrete amount on this waybill, m³
    pub amount_current: String,
    /// Cumulative ordered amount, m³
    pub amount_total: String,
    /// Strength class (e.g. `C50`)
    pub strength_class: String,
    /// 7/28-day strength development ratio
    pub development_ratio: String,
    /// Slump / consistency class (e.g. `S3`)
    pub slump_class: String,
    /// Density class code, empty segment when unset
    pub density_class: Option<DensityClass>,
    /// Chloride content class (e.g. `CL 0,2`)
    pub chloride_class: String,
    /// Maximum aggregate grain size, Dmax
    pub max_aggregate_size: String,
    /// Water/cement ratio
    pub water_cement_ratio: String,
    /// Vehicle license plate
    pub license_plate: String,
    /// Cement type (e.g. `CEM II/A-S 42,5 N`)
    pub cement_type: String,
    /// Chemical admixture description
    pub chemical_admixture: String,
    /// Mineral admixture description
    pub mineral_admixture: String,
    /// Fiber description, `-` when none
    pub fibers: String,
}

impl Default for DeliveryRecord {
    /// The worked example from page 11 of the standard
    fn default() -> Self {
        Self {
            waybill_series: "A123456".to_string(),
            tax_number: "0123456789".to_string(),
            dispatch_date: "2019-09-25T13:30".to_string(),
            amount_current: "12".to_string(),
            amount_total: "60".to_string(),
            strength_class: "C50".to_string(),
            development_ratio: "0,7".to_string(),
            slump_class: "S3".to_string(),
            density_class: Some(DensityClass::Normal),
            chloride_class: "CL 0,2".to_string(),
            max_aggregate_size: "22,4".to_string(),
            water_cement_ratio: "0,41".to_string(),
            license_plate: "06EBS01".to_string(),
            cement_type: "CEM II/A-S 42,5 N".to_string(),
            chemical_admixture: "YAPICHEM DEGASET AX 4117".to_string(),
            mineral_admixture: "ÖĞÜTÜLMÜŞ GRANÜLE Y. F. CÜRUFU".to_string(),
            fibers: "-".to_string(),
        }
    }
}

impl DeliveryRecord {
    /// An empty record (every field blank)
    pub fn empty() -> Self {
        Self {
            waybill_series: String::new(),
            tax_number: String::new(),
            dispatch_date: String::new(),
            amount_current: String::new(),
            amount_total: String::new(),
            strength_class: String::new(),
            development_ratio: String::new(),
            slump_class: String::new(),
            density_class: None,
            chloride_class: String::new(),
            max_aggregate_size: String::new(),
            water_cement_ratio: String::new(),
            license_plate: String::new(),
            cement_type: String::new(),
            chemical_admixture: String::new(),
            mineral_admixture: String::new(),
            fibers: String::new(),
        }
    }

    /// Current value of a field as text
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::WaybillSeries => self.waybill_series.clone(),
            Field::TaxNumber => self.tax_number.clone(),
            Field::DispatchDate => self.dispatch_date.clone(),
            Field::AmountCurrent => self.amount_current.clone(),
            Field::AmountTotal => self.amount_total.clone(),
            Field::StrengthClass => self.strength_class.clone(),
            Field::DevelopmentRatio => self.development_ratio.clone(),
            Field::SlumpClass => self.slump_class.clone(),
            Field::DensityClass => self
                .density_class
                .map(|d| d.code().to_string())
                .unwrap_or_default(),
            Field::ChlorideClass => self.chloride_class.clone(),
            Field::MaxAggregateSize => self.max_aggregate_size.clone(),
            Field::WaterCementRatio => self.water_cement_ratio.clone(),
            Field::LicensePlate => self.license_plate.clone(),
            Field::CementType => self.cement_type.clone(),
            Field::ChemicalAdmixture => self.chemical_admixture.clone(),
            Field::MineralAdmixture => self.mineral_admixture.clone(),
            Field::Fibers => self.fibers.clone(),
        }
    }

    /// Set a field from text
    ///
    /// Only the density class can reject a value; every other field is
    /// stored verbatim.
    pub fn set(&mut self, field: Field, value: &str) -> Result<()> {
        match field {
            Field::WaybillSeries => self.waybill_series = value.to_string(),
            Field::TaxNumber => self.tax_number = value.to_string(),
            Field::DispatchDate => self.dispatch_date = value.to_string(),
            Field::AmountCurrent => self.amount_current = value.to_string(),
            Field::AmountTotal => self.amount_total = value.to_string(),
            Field::StrengthClass => self.strength_class = value.to_string(),
            Field::DevelopmentRatio => self.development_ratio = value.to_string(),
            Field::SlumpClass => self.slump_class = value.to_string(),
            Field::DensityClass => {
                self.density_class = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                }
            }
            Field::ChlorideClass => self.chloride_class = value.to_string(),
            Field::MaxAggregateSize => self.max_aggregate_size = value.to_string(),
            Field::WaterCementRatio => self.water_cement_ratio = value.to_string(),
            Field::LicensePlate => self.license_plate = value.to_string(),
            Field::CementType => self.cement_type = value.to_string(),
            Field::ChemicalAdmixture => self.chemical_admixture = value.to_string(),
            Field::MineralAdmixture => self.mineral_admixture = value.to_string(),
            Field::Fibers => self.fibers = value.to_string(),
        }
        Ok(())
    }

    /// Set a field unless it is locked
    ///
    /// Returns whether the value was applied. Locked fields keep their
    /// current value.
    pub fn apply(&mut self, locks: &FieldLocks, field: Field, value: &str) -> Result<bool> {
        if locks.is_locked(field) {
            return Ok(false);
        }
        self.set(field, value)?;
        Ok(true)
    }
}
