//! Quote aggregation across rooms
//!
//! Sums per-room results into overall totals and derives the team-adjusted
//! completion time. Summation is order-invariant; rooms carry no weighting.

use serde::{Deserialize, Serialize};

use super::room::RoomResult;

/// Aggregate totals for a multi-room quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteTotals {
    /// Sum of net prices
    pub net: f64,
    /// Sum of VAT amounts
    pub vat: f64,
    /// Sum of gross prices
    pub gross: f64,
    /// Sum of room times in minutes
    pub time_min: f64,
    /// Team-adjusted completion time in hours
    ///
    /// `None` when the total time is zero: "no work entered" is distinct from
    /// an instantaneous job.
    pub finish_hours: Option<f64>,
    /// Team size the finish time was computed with, floored at 1
    pub team_size: u32,
}

/// Aggregate per-room results into quote totals.
///
/// Total function: never errors. Room order is irrelevant and a team size of
/// zero is treated as one worker.
pub fn aggregate(rooms: &[RoomResult], team_size: u32) -> QuoteTotals {
    let team = team_size.max(1);

    let mut net = 0.0;
    let mut vat = 0.0;
    let mut gross = 0.0;
    let mut time_min = 0.0;
    for room in rooms {
        net += room.net;
        vat += room.vat;
        gross += room.gross;
        time_min += room.time_min;
    }

    QuoteTotals {
        net,
        vat,
        gross,
        time_min,
        finish_hours: finish_hours(time_min, team),
        team_size: team,
    }
}

/// Team-adjusted completion time in hours for a span of work minutes.
///
/// Returns `None` for zero (or negative) work, signaling "nothing entered"
/// rather than an instantaneous job.
pub fn finish_hours(time_min: f64, team_size: u32) -> Option<f64> {
    if time_min > 0.0 {
        Some(time_min / 60.0 / f64::from(team_size.max(1)))
    } else {
        None
    }
}
