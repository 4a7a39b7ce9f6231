//! Sales pipeline records

use crate::error::ModelError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pipeline stage of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeadStatus {
    #[serde(rename = "New Lead")]
    NewLead,
    Contacted,
    #[serde(rename = "Site Visit Scheduled")]
    SiteVisitScheduled,
    Negotiation,
    Booked,
    Converted,
    Lost,
}

impl LeadStatus {
    /// Pipeline columns in board order
    pub const ALL: [LeadStatus; 7] = [
        LeadStatus::NewLead,
        LeadStatus::Contacted,
        LeadStatus::SiteVisitScheduled,
        LeadStatus::Negotiation,
        LeadStatus::Booked,
        LeadStatus::Converted,
        LeadStatus::Lost,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::NewLead => "New Lead",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::SiteVisitScheduled => "Site Visit Scheduled",
            LeadStatus::Negotiation => "Negotiation",
            LeadStatus::Booked => "Booked",
            LeadStatus::Converted => "Converted",
            LeadStatus::Lost => "Lost",
        }
    }

    /// Still counted in the open pipeline value
    #[inline]
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, LeadStatus::Converted | LeadStatus::Lost)
    }

    /// Stages at which the lead holds plots
    #[inline]
    #[must_use]
    pub const fn holds_plots(&self) -> bool {
        matches!(self, LeadStatus::Booked | LeadStatus::Converted)
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ModelError::unknown("lead status", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Call,
    Email,
    Meeting,
    Note,
}

/// Interaction logged against a lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub date: NaiveDate,
    pub notes: String,
    pub agent: String,
}

/// Prospective buyer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: u32,
    pub name: String,
    pub status: LeadStatus,
    pub source: String,
    pub last_contacted: NaiveDate,
    pub interest: String,
    /// Deal value in INR
    pub value: f64,
    pub broker_id: Option<u32>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}
