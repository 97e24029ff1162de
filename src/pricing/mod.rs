//! Pricing and time estimation module
//!
//! This module converts per-room physical and contract parameters into labor
//! time, a cost breakdown, and a tax-inclusive price, and aggregates per-room
//! results into an overall quote.

pub mod categories;
pub mod quote;
pub mod room;

pub use categories::{CleaningType, FloorCovering, RoomType, SoilGrade};
pub use quote::{aggregate, QuoteTotals};
pub use room::{calc_room, ContractParams, RoomInput, RoomResult};
