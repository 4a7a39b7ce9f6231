//! Channel partner records

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BrokerStatus {
    #[default]
    Active,
    Inactive,
}

impl BrokerStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BrokerStatus::Active => "Active",
            BrokerStatus::Inactive => "Inactive",
        }
    }
}

/// RERA-registered broker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Broker {
    pub id: u32,
    pub name: String,
    pub rera_no: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub status: BrokerStatus,
    /// Commission in percent
    pub commission_rate: f64,
    pub deals_closed: u32,
    /// Business brought in, INR
    pub total_business: f64,
}

/// Form input for a new broker; deal counters start at zero
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerDraft {
    pub name: String,
    pub rera_no: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub status: BrokerStatus,
    pub commission_rate: f64,
}

impl BrokerDraft {
    /// Materialize with the assigned id
    #[must_use]
    pub fn into_broker(self, id: u32) -> Broker {
        Broker {
            id,
            name: self.name,
            rera_no: self.rera_no,
            contact_person: self.contact_person,
            phone: self.phone,
            email: self.email,
            status: self.status,
            commission_rate: self.commission_rate,
            deals_closed: 0,
            total_business: 0.0,
        }
    }
}
