use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::{CiiBoundaries, FuelType, VesselClass};

/// All regulatory constant tables the calculators are parameterized by.
/// Loaded once from host configuration at startup and read-only afterwards;
/// the defaults carry the currently published values so schedule updates are
/// a configuration change, not a code change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegulatorySchedules {
    pub emission_factors: EmissionFactors,
    pub cii: CiiSchedule,
    pub ets: EtsSchedule,
}

/// Grams CO2 emitted per gram of fuel burned, per fuel type. Fuel types
/// without an entry convert with factor 0 and silently contribute nothing.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct EmissionFactors(HashMap<FuelType, f64>);

impl EmissionFactors {
    pub fn new(factors: HashMap<FuelType, f64>) -> Self {
        Self(factors)
    }

    pub fn factor(&self, fuel: FuelType) -> f64 {
        self.0.get(&fuel).copied().unwrap_or(0.0)
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self(HashMap::from([
            (FuelType::Mgo, 3.206),
            (FuelType::Lfo, 3.151),
            (FuelType::Hfo, 3.114),
            (FuelType::Lng, 2.75),
            (FuelType::VlsfoAd, 3.151),
            (FuelType::VlsfoEk, 3.114),
            (FuelType::VlsfoXb, 3.206),
            (FuelType::LpgPp, 3.0),
            (FuelType::LpgBt, 3.03),
            (FuelType::BioFuel, 2.8),
        ]))
    }
}

/// Baseline constants for one vessel class: `baseline_2019 = capped_dwt ^
/// exponent * factor`, with the DWT capped for bulk carriers.
#[derive(Debug, Clone, Deserialize)]
pub struct CiiClassConstants {
    pub factor: f64,
    pub exponent: f64,
    pub dwt_cap: Option<f64>,
    pub boundaries: CiiBoundaries,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CiiSchedule {
    /// Year-indexed reduction factors applied to the 2019 baseline. Queries
    /// past the last entry clamp to it; years before the first entry are
    /// undefined.
    pub reduction_factors: BTreeMap<i32, f64>,
    pub tanker_like: CiiClassConstants,
    pub bulk_carrier: CiiClassConstants,
}

impl CiiSchedule {
    pub fn reduction_factor(&self, year: i32) -> Option<f64> {
        self.reduction_factors
            .range(..=year)
            .next_back()
            .map(|(_, factor)| *factor)
    }

    /// `None` for vessel classes without defined baseline constants, for
    /// which required CII and category are not applicable.
    pub fn class_constants(&self, class: VesselClass) -> Option<&CiiClassConstants> {
        match class {
            VesselClass::TankerLike => Some(&self.tanker_like),
            VesselClass::BulkCarrier => Some(&self.bulk_carrier),
            VesselClass::Other => None,
        }
    }
}

impl Default for CiiSchedule {
    fn default() -> Self {
        Self {
            reduction_factors: BTreeMap::from([
                (2019, 1.0),
                (2020, 0.99),
                (2021, 0.98),
                (2022, 0.97),
                (2023, 0.95),
                (2024, 0.93),
                (2025, 0.91),
                (2026, 0.89),
            ]),
            tanker_like: CiiClassConstants {
                factor: 5247.0,
                exponent: -0.61,
                dwt_cap: None,
                boundaries: CiiBoundaries {
                    a: 0.82,
                    b: 0.93,
                    c: 1.08,
                    d: 1.28,
                },
            },
            bulk_carrier: CiiClassConstants {
                factor: 4745.0,
                exponent: -0.622,
                dwt_cap: Some(279_000.0),
                boundaries: CiiBoundaries {
                    a: 0.86,
                    b: 0.94,
                    c: 1.06,
                    d: 1.18,
                },
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EtsSchedule {
    /// EUA price per tonne of regulated CO2. The production price schedule
    /// is owned by the host configuration; this default is the flat
    /// provisional value.
    pub carbon_price: f64,
    /// Year-indexed phase-in fractions; queries past the last entry clamp to
    /// it, years before the first entry phase in nothing.
    pub phase_in: BTreeMap<i32, f64>,
}

impl EtsSchedule {
    pub fn phase_in_fraction(&self, year: i32) -> f64 {
        self.phase_in
            .range(..=year)
            .next_back()
            .map(|(_, fraction)| *fraction)
            .unwrap_or(0.0)
    }
}

impl Default for EtsSchedule {
    fn default() -> Self {
        Self {
            carbon_price: 85.0,
            phase_in: BTreeMap::from([(2023, 1.0 / 3.0), (2024, 2.0 / 3.0), (2025, 1.0)]),
        }
    }
}
