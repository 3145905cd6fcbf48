use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::EmissionFactors;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FuelType {
    Mgo,
    Lfo,
    Hfo,
    Lng,
    VlsfoAd,
    VlsfoEk,
    VlsfoXb,
    LpgPp,
    LpgBt,
    BioFuel,
}

/// Fuel masses in tonnes per fuel type, recorded once on a CII trip and
/// immutable afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelQuantities {
    pub mgo: f64,
    pub lfo: f64,
    pub hfo: f64,
    pub lng: f64,
    pub vlsfo_ad: f64,
    pub vlsfo_ek: f64,
    pub vlsfo_xb: f64,
    pub lpg_pp: f64,
    pub lpg_bt: f64,
    pub bio_fuel: f64,
}

impl FuelQuantities {
    pub fn get(&self, fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Mgo => self.mgo,
            FuelType::Lfo => self.lfo,
            FuelType::Hfo => self.hfo,
            FuelType::Lng => self.lng,
            FuelType::VlsfoAd => self.vlsfo_ad,
            FuelType::VlsfoEk => self.vlsfo_ek,
            FuelType::VlsfoXb => self.vlsfo_xb,
            FuelType::LpgPp => self.lpg_pp,
            FuelType::LpgBt => self.lpg_bt,
            FuelType::BioFuel => self.bio_fuel,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FuelType, f64)> + '_ {
        FuelType::iter().map(|fuel| (fuel, self.get(fuel)))
    }

    /// Total CO2 in tonnes from all fuels burned.
    pub fn emissions(&self, factors: &EmissionFactors) -> f64 {
        self.iter()
            .map(|(fuel, mass)| mass * factors.factor(fuel))
            .sum()
    }
}

impl std::ops::AddAssign for FuelQuantities {
    fn add_assign(&mut self, rhs: Self) {
        self.mgo += rhs.mgo;
        self.lfo += rhs.lfo;
        self.hfo += rhs.hfo;
        self.lng += rhs.lng;
        self.vlsfo_ad += rhs.vlsfo_ad;
        self.vlsfo_ek += rhs.vlsfo_ek;
        self.vlsfo_xb += rhs.vlsfo_xb;
        self.lpg_pp += rhs.lpg_pp;
        self.lpg_bt += rhs.lpg_bt;
        self.bio_fuel += rhs.bio_fuel;
    }
}
