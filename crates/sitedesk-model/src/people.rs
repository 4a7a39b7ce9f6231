//! Employees and internal messages

use crate::finance::Department;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EmploymentStatus {
    #[default]
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Terminated,
}

impl EmploymentStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::Active => "Active",
            EmploymentStatus::OnLeave => "On Leave",
            EmploymentStatus::Terminated => "Terminated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// e.g. `EMP-001`
    pub id: String,
    pub name: String,
    pub photo_url: String,
    /// Job title
    pub role: String,
    pub department: Department,
    pub email: String,
    pub phone: String,
    pub hire_date: NaiveDate,
    /// Monthly salary, INR
    pub salary: u64,
    pub status: EmploymentStatus,
}

/// Direct message between two employees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    /// Whether the message belongs to the conversation between `a` and `b`
    #[must_use]
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.sender_id == a && self.receiver_id == b) || (self.sender_id == b && self.receiver_id == a)
    }
}
