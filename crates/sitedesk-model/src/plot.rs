//! Plot inventory

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlotStatus {
    Available,
    Booked,
    Sold,
}

impl PlotStatus {
    pub const ALL: [PlotStatus; 3] = [PlotStatus::Available, PlotStatus::Booked, PlotStatus::Sold];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PlotStatus::Available => "Available",
            PlotStatus::Booked => "Booked",
            PlotStatus::Sold => "Sold",
        }
    }
}

impl fmt::Display for PlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlotStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlotStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ModelError::unknown("plot status", s))
    }
}

/// One plot on the site layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    /// Layout id, e.g. `A-01`
    pub id: String,
    /// Area in sq. ft.
    pub size: u32,
    pub status: PlotStatus,
    pub price_per_sq_ft: f64,
    /// Lead id of the buyer
    pub buyer_id: Option<u32>,
    pub broker_id: Option<u32>,
    #[serde(default)]
    pub is_corner: bool,
    #[serde(default)]
    pub is_park_facing: bool,
}

impl Plot {
    /// List price in INR
    #[inline]
    #[must_use]
    pub fn price(&self) -> f64 {
        f64::from(self.size) * self.price_per_sq_ft
    }
}
