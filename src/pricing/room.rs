//! Per-room time and cost calculation
//!
//! Implements the linear additive time model and the cost-plus price stack:
//! - Floor and soil multipliers scale the area-proportional term only
//! - Windows, special tasks, setup, travel, and parking are additive
//! - Profit margin stacks on top of overhead, not on raw cost
//! - VAT is applied to the net price
//!
//! The calculator is pure, deterministic, and total: invalid numeric inputs
//! clamp to 0 (divisors floor at 1) and category lookups fall back to their
//! documented defaults, so a result is always produced.

use serde::{Deserialize, Serialize};

use super::categories::{CleaningType, FloorCovering, RoomType, SoilGrade};
use crate::constants::rates;

/// Per-room physical and contract-category parameters
///
/// Fields omitted from a JSON form resolve to their defaults; a partial room
/// still prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomInput {
    /// Floor area in m²
    pub area_m2: f64,
    /// Room category, drives base minutes per m²
    pub room_type: RoomType,
    /// Floor covering, drives a time multiplier
    pub floor: FloorCovering,
    /// Soil level grade, drives a time multiplier
    pub soil: SoilGrade,
    /// Window area to clean in m²
    pub window_area_m2: f64,
    /// Cleaning minutes per m² of window area
    pub window_min_per_m2: f64,
    /// Flat special-task minutes
    pub special_min: f64,
    /// Extra setup minutes on top of the contract base setup
    pub setup_extra_min: f64,
    /// Cleaning type, drives the hourly rate
    pub cleaning_type: CleaningType,
}

impl Default for RoomInput {
    fn default() -> Self {
        Self {
            area_m2: 0.0,
            room_type: RoomType::default(),
            floor: FloorCovering::default(),
            soil: SoilGrade::default(),
            window_area_m2: 0.0,
            window_min_per_m2: 0.0,
            special_min: 0.0,
            setup_extra_min: 0.0,
            cleaning_type: CleaningType::default(),
        }
    }
}

/// Contract-level parameters shared across all rooms of a quote
///
/// Fields omitted from a JSON form resolve to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractParams {
    /// Overhead rate as a fraction (0.10 = 10%)
    pub overhead_rate: f64,
    /// Profit margin as a fraction, applied on cost plus overhead
    pub profit_rate: f64,
    /// VAT rate as a fraction
    pub vat_rate: f64,
    /// Material cost per m² of floor area
    pub material_per_m2: f64,
    /// Flat machine/equipment fee per room
    pub machine_fee: f64,
    /// Base setup minutes per room
    pub setup_min: f64,
    /// One-way travel distance in km
    pub distance_km: f64,
    /// Average travel speed in km/h, floored at 1
    pub travel_speed_kmh: f64,
    /// Parking minutes per room
    pub parking_min: f64,
    /// Team size, floored at 1
    pub team_size: u32,
}

impl Default for ContractParams {
    fn default() -> Self {
        Self {
            overhead_rate: rates::DEFAULT_OVERHEAD_RATE,
            profit_rate: rates::DEFAULT_PROFIT_RATE,
            vat_rate: rates::DEFAULT_VAT_RATE,
            material_per_m2: 0.0,
            machine_fee: 0.0,
            setup_min: 0.0,
            distance_km: 0.0,
            travel_speed_kmh: rates::DEFAULT_TRAVEL_SPEED_KMH,
            parking_min: 0.0,
            team_size: 1,
        }
    }
}

/// Time and cost breakdown for a single room
///
/// A pure derivation with no independent identity: recomputed from scratch on
/// every input change, never partially updated. Unrounded; display rounding
/// is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomResult {
    /// Total time in minutes including setup, travel, and parking
    pub time_min: f64,
    /// Labor cost
    pub labor_cost: f64,
    /// Material cost
    pub material_cost: f64,
    /// Overhead amount
    pub overhead: f64,
    /// Profit amount
    pub profit: f64,
    /// Net price before tax
    pub net: f64,
    /// VAT amount
    pub vat: f64,
    /// Gross price including tax
    pub gross: f64,
}

/// Clamp a quantity to be non-negative; NaN resolves to 0
fn quantity(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.max(0.0)
    }
}

/// Calculate the time and cost breakdown for one room.
///
/// Pure and total: never errors. Negative or NaN quantities are treated as 0
/// and the travel speed is floored at 1 km/h to avoid division by zero.
///
/// # Arguments
///
/// * `room` - Per-room physical and category parameters
/// * `contract` - Contract-level rates and site parameters
///
/// # Example
///
/// ```
/// use clean_quote::{calc_room, ContractParams, RoomInput, RoomType, SoilGrade};
///
/// let room = RoomInput {
///     area_m2: 20.0,
///     room_type: RoomType::Kitchen,
///     soil: SoilGrade::S3,
///     ..RoomInput::default()
/// };
/// let result = calc_room(&room, &ContractParams::default());
/// assert!(result.gross > result.net);
/// ```
pub fn calc_room(room: &RoomInput, contract: &ContractParams) -> RoomResult {
    let hourly = room.cleaning_type.hourly_rate();
    let base = room.room_type.base_minutes_per_m2();
    let floor_mul = room.floor.multiplier();
    let soil_mul = room.soil.multiplier();

    let area = quantity(room.area_m2);
    let speed = quantity(contract.travel_speed_kmh).max(1.0);

    // Round trip, converted from hours to minutes
    let travel_min = (quantity(contract.distance_km) * 2.0 / speed) * 60.0;

    let time_min = area * base * floor_mul * soil_mul
        + quantity(room.window_area_m2) * quantity(room.window_min_per_m2)
        + quantity(room.special_min)
        + (quantity(contract.setup_min) + quantity(room.setup_extra_min))
        + travel_min
        + quantity(contract.parking_min);

    let labor_cost = (time_min / 60.0) * hourly;
    let material_cost = area * quantity(contract.material_per_m2) + quantity(contract.machine_fee);
    let overhead = (labor_cost + material_cost) * quantity(contract.overhead_rate);
    let profit = (labor_cost + material_cost + overhead) * quantity(contract.profit_rate);
    let net = labor_cost + material_cost + overhead + profit;
    let vat = net * quantity(contract.vat_rate);
    let gross = net + vat;

    RoomResult {
        time_min,
        labor_cost,
        material_cost,
        overhead,
        profit,
        net,
        vat,
        gross,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_contract() -> ContractParams {
        ContractParams {
            overhead_rate: 0.10,
            profit_rate: 0.15,
            vat_rate: 0.19,
            material_per_m2: 0.0,
            machine_fee: 0.0,
            setup_min: 0.0,
            distance_km: 0.0,
            travel_speed_kmh: 35.0,
            parking_min: 0.0,
            team_size: 1,
        }
    }

    #[test]
    fn test_zero_room_prices_to_zero() {
        // No unconditional fixed fee may leak into an empty room
        let result = calc_room(&RoomInput::default(), &empty_contract());
        assert_eq!(result.time_min, 0.0);
        assert_eq!(result.net, 0.0);
        assert_eq!(result.gross, 0.0);
    }

    #[test]
    fn test_kitchen_tile_s3_scenario() {
        // 20 m² Küche, Fliesen, S3: 20 × 2.2 × 1.0 × 1.3 = 57.2 min
        let room = RoomInput {
            area_m2: 20.0,
            room_type: RoomType::from_label("Küche"),
            floor: FloorCovering::from_label("Fliesen"),
            soil: SoilGrade::S3,
            cleaning_type: CleaningType::Maintenance,
            ..RoomInput::default()
        };
        let result = calc_room(&room, &empty_contract());

        assert!((result.time_min - 57.2).abs() < 1e-9);
        assert!((result.labor_cost - 57.2 / 60.0 * 35.0).abs() < 1e-9);
        assert_eq!(result.material_cost, 0.0);
        assert!((result.overhead - result.labor_cost * 0.10).abs() < 1e-9);
        assert!((result.profit - (result.labor_cost + result.overhead) * 0.15).abs() < 1e-9);
        assert!((result.net - 42.1449).abs() < 1e-3);
        assert!((result.vat - 8.0075).abs() < 1e-3);
        assert!((result.gross - 50.1524).abs() < 1e-3);
    }

    #[test]
    fn test_monotonic_in_area() {
        let contract = empty_contract();
        let mut last = f64::NEG_INFINITY;
        for area in [0.0, 5.0, 20.0, 100.0] {
            let room = RoomInput {
                area_m2: area,
                ..RoomInput::default()
            };
            let result = calc_room(&room, &contract);
            assert!(result.net >= last);
            last = result.net;
        }
    }

    #[test]
    fn test_monotonic_in_soil_grade() {
        let contract = empty_contract();
        let mut last_time = f64::NEG_INFINITY;
        let mut last_net = f64::NEG_INFINITY;
        for soil in SoilGrade::ALL {
            let room = RoomInput {
                area_m2: 30.0,
                soil,
                ..RoomInput::default()
            };
            let result = calc_room(&room, &contract);
            assert!(result.time_min >= last_time);
            assert!(result.net >= last_net);
            last_time = result.time_min;
            last_net = result.net;
        }
    }

    #[test]
    fn test_multipliers_do_not_scale_additive_terms() {
        // Windows, setup, travel, and parking are flat terms; only the area
        // term responds to the soil grade
        let contract = ContractParams {
            setup_min: 15.0,
            distance_km: 10.0,
            travel_speed_kmh: 40.0,
            parking_min: 5.0,
            ..empty_contract()
        };
        let base = RoomInput {
            window_area_m2: 4.0,
            window_min_per_m2: 3.0,
            special_min: 10.0,
            setup_extra_min: 5.0,
            soil: SoilGrade::S1,
            ..RoomInput::default()
        };
        let dirty = RoomInput {
            soil: SoilGrade::S5,
            ..base.clone()
        };

        let a = calc_room(&base, &contract);
        let b = calc_room(&dirty, &contract);
        // Zero area: soil grade must not change anything
        assert_eq!(a.time_min, b.time_min);

        let travel = 10.0 * 2.0 / 40.0 * 60.0;
        let expected = 4.0 * 3.0 + 10.0 + (15.0 + 5.0) + travel + 5.0;
        assert!((a.time_min - expected).abs() < 1e-9);
    }

    #[test]
    fn test_travel_time_round_trip() {
        let contract = ContractParams {
            distance_km: 35.0,
            travel_speed_kmh: 35.0,
            ..empty_contract()
        };
        let result = calc_room(&RoomInput::default(), &contract);
        // 35 km each way at 35 km/h: 2 hours
        assert!((result.time_min - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_speed_floors_at_one() {
        let contract = ContractParams {
            distance_km: 1.0,
            travel_speed_kmh: 0.0,
            ..empty_contract()
        };
        let result = calc_room(&RoomInput::default(), &contract);
        assert!(result.time_min.is_finite());
        assert!((result.time_min - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_and_nan_inputs_clamp_to_zero() {
        let room = RoomInput {
            area_m2: -10.0,
            window_area_m2: f64::NAN,
            special_min: -3.0,
            ..RoomInput::default()
        };
        let result = calc_room(&room, &empty_contract());
        assert_eq!(result.time_min, 0.0);
        assert_eq!(result.gross, 0.0);
    }

    #[test]
    fn test_partial_room_json_defaults_missing_fields() {
        // A form that only filled in the area still parses and prices
        let room: RoomInput = serde_json::from_str(r#"{"area_m2": 20.0}"#).unwrap();
        let expected = RoomInput {
            area_m2: 20.0,
            ..RoomInput::default()
        };
        assert_eq!(room, expected);

        let result = calc_room(&room, &empty_contract());
        assert!(result.gross > 0.0);
    }

    #[test]
    fn test_partial_contract_json_defaults_missing_fields() {
        let contract: ContractParams =
            serde_json::from_str(r#"{"distance_km": 12.0, "team_size": 3}"#).unwrap();
        assert_eq!(contract.distance_km, 12.0);
        assert_eq!(contract.team_size, 3);
        assert_eq!(contract.overhead_rate, 0.10);
        assert_eq!(contract.vat_rate, 0.19);
        assert_eq!(contract.travel_speed_kmh, 35.0);

        let empty: ContractParams = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ContractParams::default());
    }

    #[test]
    fn test_profit_stacks_on_overhead() {
        let room = RoomInput {
            area_m2: 50.0,
            ..RoomInput::default()
        };
        let contract = ContractParams {
            material_per_m2: 0.2,
            machine_fee: 10.0,
            ..empty_contract()
        };
        let result = calc_room(&room, &contract);
        let cost = result.labor_cost + result.material_cost;
        assert!((result.overhead - cost * 0.10).abs() < 1e-9);
        assert!((result.profit - (cost + result.overhead) * 0.15).abs() < 1e-9);
        assert!(
            (result.net - (cost + result.overhead + result.profit)).abs() < 1e-9
        );
    }
}
