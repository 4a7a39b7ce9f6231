//! Budget, revenue and cash-flow records

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Owning department of a cost line or employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Management,
    Engineering,
    Sales,
    #[serde(rename = "HR & Admin")]
    HrAdmin,
    #[serde(rename = "Site Operations")]
    SiteOperations,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Management,
        Department::Engineering,
        Department::Sales,
        Department::HrAdmin,
        Department::SiteOperations,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Department::Management => "Management",
            Department::Engineering => "Engineering",
            Department::Sales => "Sales",
            Department::HrAdmin => "HR & Admin",
            Department::SiteOperations => "Site Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ModelError::unknown("department", s))
    }
}

/// Budget line from the bill of quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCategory {
    pub name: String,
    /// Budgeted value, INR
    pub budget: f64,
    /// Actual spend, INR
    pub actual: f64,
    pub department: Department,
}

impl CostCategory {
    #[inline]
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.budget - self.actual
    }

    /// Spend as a percentage of budget, zero for an unbudgeted line
    #[inline]
    #[must_use]
    pub fn utilization(&self) -> f64 {
        if self.budget > 0.0 {
            self.actual / self.budget * 100.0
        } else {
            0.0
        }
    }
}

/// Pricing tier for plot sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTier {
    pub name: String,
    pub sold_sq_ft: f64,
    pub target_sq_ft: f64,
    pub price_per_sq_ft: f64,
}

impl SalesTier {
    #[inline]
    #[must_use]
    pub fn revenue(&self) -> f64 {
        self.sold_sq_ft * self.price_per_sq_ft
    }

    #[inline]
    #[must_use]
    pub fn potential_revenue(&self) -> f64 {
        self.target_sq_ft * self.price_per_sq_ft
    }

    /// Sold share of target, percent
    #[inline]
    #[must_use]
    pub fn completion(&self) -> f64 {
        if self.target_sq_ft > 0.0 {
            self.sold_sq_ft / self.target_sq_ft * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingSource {
    pub name: String,
    /// Share in percent
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    /// Period label, e.g. `Q1 '26`
    pub period: String,
    pub outflow: f64,
    pub inflow: f64,
}

impl CashFlowPoint {
    #[inline]
    #[must_use]
    pub fn net(&self) -> f64 {
        self.inflow - self.outflow
    }
}
