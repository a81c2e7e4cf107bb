//! Categorical inputs that select a table row or cell.
//!
//! Each category's [`key`](MotorPoles::key) is the column or map key used
//! for it in parameter files.

use serde::{Deserialize, Serialize};

// =============================================================================
// MOTOR POLES
// =============================================================================

/// Number of poles of an electric motor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum MotorPoles {
    /// 2 poles.
    #[serde(rename = "poles_2")]
    Poles2,
    /// 4 poles.
    #[serde(rename = "poles_4")]
    Poles4,
    /// 6 poles.
    #[serde(rename = "poles_6")]
    Poles6,
    /// 8 poles.
    #[default]
    #[serde(rename = "poles_8")]
    Poles8,
}

impl MotorPoles {
    /// All pole counts.
    pub const ALL: [Self; 4] = [Self::Poles2, Self::Poles4, Self::Poles6, Self::Poles8];

    /// Returns the table column name.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Poles2 => "poles_2",
            Self::Poles4 => "poles_4",
            Self::Poles6 => "poles_6",
            Self::Poles8 => "poles_8",
        }
    }

    /// Returns the number of poles.
    pub fn count(&self) -> u32 {
        match self {
            Self::Poles2 => 2,
            Self::Poles4 => 4,
            Self::Poles6 => 6,
            Self::Poles8 => 8,
        }
    }

    /// Parses a column name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == s)
    }
}

// =============================================================================
// AIR CONDITIONER TYPE
// =============================================================================

/// Air conditioner product class, as registered for minimum energy
/// performance standards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum AcType {
    /// Wall mounted, unitary, and double duct.
    #[serde(rename = "type_1")]
    Type1,
    /// Portable, unitary, and double duct.
    #[serde(rename = "type_2")]
    Type2,
    /// Wall mounted, unitary, and single duct.
    #[serde(rename = "type_3")]
    Type3,
    /// Portable, unitary, and single duct.
    #[serde(rename = "type_4")]
    Type4,
    /// Air to air unitary, ducted or non-ducted, excluding types 1 to 4.
    #[serde(rename = "type_5")]
    Type5,
    /// Air to air single split system, non-ducted.
    #[default]
    #[serde(rename = "type_6")]
    Type6,
    /// Air to air single split system, ducted.
    #[serde(rename = "type_7")]
    Type7,
    /// Single split outdoor units for a non-ducted system.
    #[serde(rename = "type_8")]
    Type8,
    /// Single split outdoor units for a ducted system.
    #[serde(rename = "type_9")]
    Type9,
    /// Multi-split outdoor units.
    #[serde(rename = "type_10")]
    Type10,
}

impl AcType {
    /// All product classes.
    pub const ALL: [Self; 10] = [
        Self::Type1,
        Self::Type2,
        Self::Type3,
        Self::Type4,
        Self::Type5,
        Self::Type6,
        Self::Type7,
        Self::Type8,
        Self::Type9,
        Self::Type10,
    ];

    /// Returns the table key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Type1 => "type_1",
            Self::Type2 => "type_2",
            Self::Type3 => "type_3",
            Self::Type4 => "type_4",
            Self::Type5 => "type_5",
            Self::Type6 => "type_6",
            Self::Type7 => "type_7",
            Self::Type8 => "type_8",
            Self::Type9 => "type_9",
            Self::Type10 => "type_10",
        }
    }

    /// Returns the registered product class description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Type1 => "Wall mounted, unitary, and double duct",
            Self::Type2 => "Portable, unitary, and double duct",
            Self::Type3 => "Wall mounted, unitary, and single duct",
            Self::Type4 => "Portable, unitary, and single duct",
            Self::Type5 => "Air to air unitary, ducted or non-ducted, excluding classes 1 to 4",
            Self::Type6 => "Air to air single split system, non-ducted",
            Self::Type7 => "Air to air single split system, ducted",
            Self::Type8 => "Air to air single split outdoor units, for a non-ducted system",
            Self::Type9 => "Air to air single split outdoor units, for a ducted system",
            Self::Type10 => "Air to air multi-split outdoor units",
        }
    }

    /// Parses a table key.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == s)
    }
}

// =============================================================================
// INSTALLATION TYPE
// =============================================================================

/// Whether equipment is newly installed or replaces existing equipment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum InstallationType {
    /// Installation of a new product.
    #[default]
    New,
    /// Replacement of an old product.
    Replacement,
}

impl InstallationType {
    /// Both installation types.
    pub const ALL: [Self; 2] = [Self::New, Self::Replacement];

    /// Returns the table key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Replacement => "replacement",
        }
    }

    /// Parses a table key.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == s)
    }
}

// =============================================================================
// CAPACITY BAND
// =============================================================================

/// Rated capacity band of an air conditioner, in kW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CapacityBand {
    /// Below 4 kW.
    #[serde(rename = "less_than_4")]
    LessThan4,
    /// From 4 kW up to 10 kW.
    #[serde(rename = "between_4_and_10")]
    Between4And10,
    /// From 10 kW up to 39 kW.
    #[serde(rename = "between_10_and_39")]
    Between10And39,
    /// From 39 kW up to 65 kW.
    #[serde(rename = "between_39_and_65")]
    Between39And65,
    /// 65 kW and above.
    #[serde(rename = "more_than_65")]
    MoreThan65,
}

impl CapacityBand {
    /// All bands, smallest first.
    pub const ALL: [Self; 5] = [
        Self::LessThan4,
        Self::Between4And10,
        Self::Between10And39,
        Self::Between39And65,
        Self::MoreThan65,
    ];

    /// Lower edges of every band but the first, in kW.
    pub const THRESHOLDS: [f64; 4] = [4.0, 10.0, 39.0, 65.0];

    /// Returns the table key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::LessThan4 => "less_than_4",
            Self::Between4And10 => "between_4_and_10",
            Self::Between10And39 => "between_10_and_39",
            Self::Between39And65 => "between_39_and_65",
            Self::MoreThan65 => "more_than_65",
        }
    }

    /// Parses a table key.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == s)
    }
}

// =============================================================================
// CLIMATE ZONE
// =============================================================================

/// Climate zone of the installation site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ClimateZone {
    /// Hot zone.
    Hot,
    /// Average zone.
    #[default]
    Average,
    /// Cold zone.
    Cold,
}

impl ClimateZone {
    /// All zones.
    pub const ALL: [Self; 3] = [Self::Hot, Self::Average, Self::Cold];

    /// Returns the table key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Average => "average",
            Self::Cold => "cold",
        }
    }

    /// Parses a table key.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|z| z.key() == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_serde_names() {
        for poles in MotorPoles::ALL {
            let json = serde_json::to_string(&poles).unwrap();
            assert_eq!(json, format!("\"{}\"", poles.key()));
        }
        for ac in AcType::ALL {
            let json = serde_json::to_string(&ac).unwrap();
            assert_eq!(json, format!("\"{}\"", ac.key()));
        }
        for band in CapacityBand::ALL {
            let json = serde_json::to_string(&band).unwrap();
            assert_eq!(json, format!("\"{}\"", band.key()));
        }
        for installation in InstallationType::ALL {
            let json = serde_json::to_string(&installation).unwrap();
            assert_eq!(json, format!("\"{}\"", installation.key()));
        }
        for zone in ClimateZone::ALL {
            let json = serde_json::to_string(&zone).unwrap();
            assert_eq!(json, format!("\"{}\"", zone.key()));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(MotorPoles::parse("poles_6"), Some(MotorPoles::Poles6));
        assert_eq!(MotorPoles::parse("poles_3"), None);
        assert_eq!(AcType::parse("type_10"), Some(AcType::Type10));
        assert_eq!(CapacityBand::parse("between_39_and_65"), Some(CapacityBand::Between39And65));
        assert_eq!(InstallationType::parse("replacement"), Some(InstallationType::Replacement));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(MotorPoles::default(), MotorPoles::Poles8);
        assert_eq!(AcType::default(), AcType::Type6);
        assert_eq!(InstallationType::default(), InstallationType::New);
        assert_eq!(MotorPoles::Poles4.count(), 4);
    }

    #[test]
    fn test_band_order() {
        let mut bands = CapacityBand::ALL;
        bands.reverse();
        bands.sort();
        assert_eq!(bands, CapacityBand::ALL);
        assert_eq!(CapacityBand::THRESHOLDS.len() + 1, CapacityBand::ALL.len());
    }
}
