//! Category enums and their pricing constants
//!
//! Each category maps to a fixed constant via an exhaustive match with an
//! explicit fallback variant. Label parsing is total: unrecognized labels
//! resolve to the fallback, never to an error, so pricing always produces a
//! result.
//!
//! Labels are the German form vocabulary of the quoting sheet (Büro, Fliesen,
//! unterhalt, ...); variant names are English.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::rates;

/// Room category, drives the base cleaning minutes per m²
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    /// Büro
    Office,
    /// Bad
    Bathroom,
    /// Küche
    Kitchen,
    /// Flur
    Hallway,
    /// Wohnraum
    LivingSpace,
    /// Treppenhaus
    Stairwell,
    /// Sonstiges
    #[serde(other)]
    Other,
}

impl RoomType {
    /// Parse a form label; unknown labels resolve to [`RoomType::Other`]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Büro" => Self::Office,
            "Bad" => Self::Bathroom,
            "Küche" => Self::Kitchen,
            "Flur" => Self::Hallway,
            "Wohnraum" => Self::LivingSpace,
            "Treppenhaus" => Self::Stairwell,
            _ => Self::Other,
        }
    }

    /// Base cleaning minutes per m² at soil multiplier 1.0× and floor
    /// multiplier 1.0×
    pub fn base_minutes_per_m2(&self) -> f64 {
        match self {
            Self::Office => 1.2,
            Self::Bathroom => 2.5,
            Self::Kitchen => 2.2,
            Self::Hallway => 0.8,
            Self::LivingSpace => 1.0,
            Self::Stairwell => 1.5,
            Self::Other => rates::BASE_MIN_FALLBACK,
        }
    }
}

impl Default for RoomType {
    fn default() -> Self {
        Self::Other
    }
}

/// Floor covering category, drives a time multiplier on the area term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloorCovering {
    /// Fliesen
    Tile,
    /// Teppich
    Carpet,
    /// Parkett
    Parquet,
    /// PVC
    Vinyl,
    /// Naturstein
    NaturalStone,
    /// Unrecognized covering, multiplier 1.0×
    #[serde(other)]
    Other,
}

impl FloorCovering {
    /// Parse a form label; unknown labels resolve to [`FloorCovering::Other`]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Fliesen" => Self::Tile,
            "Teppich" => Self::Carpet,
            "Parkett" => Self::Parquet,
            "PVC" => Self::Vinyl,
            "Naturstein" => Self::NaturalStone,
            _ => Self::Other,
        }
    }

    /// Time multiplier applied to the area-proportional cleaning term
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Tile => 1.0,
            Self::Carpet => 1.3,
            Self::Parquet => 1.1,
            Self::Vinyl => 1.0,
            Self::NaturalStone => 1.4,
            Self::Other => rates::FLOOR_MUL_FALLBACK,
        }
    }
}

impl Default for FloorCovering {
    fn default() -> Self {
        Self::Other
    }
}

/// Soil level: ordinal cleaning-difficulty grade, S1 lightest to S5 heaviest
///
/// Multipliers increase monotonically across grades; a dirtier surface takes
/// proportionally longer regardless of room type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SoilGrade {
    S1,
    S2,
    S3,
    S4,
    S5,
}

impl SoilGrade {
    /// All grades in ascending difficulty order
    pub const ALL: [SoilGrade; 5] = [Self::S1, Self::S2, Self::S3, Self::S4, Self::S5];

    /// Parse a form label; unknown labels resolve to the 1.0× grade S2
    pub fn from_label(label: &str) -> Self {
        match label {
            "S1" => Self::S1,
            "S2" => Self::S2,
            "S3" => Self::S3,
            "S4" => Self::S4,
            "S5" => Self::S5,
            _ => Self::S2,
        }
    }

    /// Time multiplier applied to the area-proportional cleaning term
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::S1 => 0.8,
            Self::S2 => 1.0,
            Self::S3 => 1.3,
            Self::S4 => 1.7,
            Self::S5 => 2.2,
        }
    }
}

impl Default for SoilGrade {
    fn default() -> Self {
        Self::S2
    }
}

impl fmt::Display for SoilGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::S1 => write!(f, "S1"),
            Self::S2 => write!(f, "S2"),
            Self::S3 => write!(f, "S3"),
            Self::S4 => write!(f, "S4"),
            Self::S5 => write!(f, "S5"),
        }
    }
}

/// Cleaning type, drives the hourly labor rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleaningType {
    /// unterhalt: recurring maintenance cleaning
    Maintenance,
    /// sonder: one-off special/deep cleaning
    Special,
    /// Unrecognized type, billed at the fallback rate
    #[serde(other)]
    Other,
}

impl CleaningType {
    /// Parse a form label; unknown labels resolve to [`CleaningType::Other`]
    pub fn from_label(label: &str) -> Self {
        match label {
            "unterhalt" => Self::Maintenance,
            "sonder" => Self::Special,
            _ => Self::Other,
        }
    }

    /// Hourly labor rate
    pub fn hourly_rate(&self) -> f64 {
        match self {
            Self::Maintenance => rates::HOURLY_MAINTENANCE,
            Self::Special => rates::HOURLY_SPECIAL,
            Self::Other => rates::HOURLY_FALLBACK,
        }
    }
}

impl Default for CleaningType {
    fn default() -> Self {
        Self::Maintenance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_type_labels() {
        assert_eq!(RoomType::from_label("Küche"), RoomType::Kitchen);
        assert_eq!(RoomType::from_label("Bad"), RoomType::Bathroom);
        assert_eq!(RoomType::from_label("Wintergarten"), RoomType::Other);
        assert_eq!(RoomType::from_label(""), RoomType::Other);
    }

    #[test]
    fn test_base_minutes_table() {
        assert_eq!(RoomType::Kitchen.base_minutes_per_m2(), 2.2);
        assert_eq!(RoomType::Bathroom.base_minutes_per_m2(), 2.5);
        assert_eq!(RoomType::Hallway.base_minutes_per_m2(), 0.8);
        // Fallback matches the documented default
        assert_eq!(RoomType::Other.base_minutes_per_m2(), 1.2);
    }

    #[test]
    fn test_floor_multiplier_table() {
        assert_eq!(FloorCovering::from_label("Fliesen"), FloorCovering::Tile);
        assert_eq!(FloorCovering::Tile.multiplier(), 1.0);
        assert_eq!(FloorCovering::Carpet.multiplier(), 1.3);
        assert_eq!(FloorCovering::NaturalStone.multiplier(), 1.4);
        assert_eq!(FloorCovering::from_label("Linoleum").multiplier(), 1.0);
    }

    #[test]
    fn test_soil_grades_monotonic() {
        let muls: Vec<f64> = SoilGrade::ALL.iter().map(|g| g.multiplier()).collect();
        assert!(muls.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_soil_grade_ordering() {
        assert!(SoilGrade::S1 < SoilGrade::S2);
        assert!(SoilGrade::S4 < SoilGrade::S5);
        assert_eq!(SoilGrade::from_label("S9"), SoilGrade::S2);
        assert_eq!(SoilGrade::from_label("S9").multiplier(), 1.0);
    }

    #[test]
    fn test_hourly_rates() {
        assert_eq!(CleaningType::from_label("unterhalt").hourly_rate(), 35.0);
        assert_eq!(CleaningType::from_label("sonder").hourly_rate(), 60.0);
        assert_eq!(CleaningType::from_label("grundreinigung").hourly_rate(), 35.0);
    }

    #[test]
    fn test_soil_grade_display() {
        assert_eq!(SoilGrade::S3.to_string(), "S3");
    }
}
