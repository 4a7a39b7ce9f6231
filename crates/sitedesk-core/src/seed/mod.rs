//! Built-in demo datasets
//!
//! The bundled JSON under `data/` is compiled into the binary. Plots are
//! generated from the size matrix in [`plots`].

mod datasets;
mod plots;
mod site;

pub use datasets::{
    brokers, cash_flow, cost_breakdown, document_folders, employees, funding_sources,
    inventory, leads, messages, notifications, sales_tiers,
};
pub use plots::{plots, PLOT_MATRIX};
pub use site::{progress_reports, project_timeline, site_progress, work_catalog};

use crate::error::{DashboardError, Result};
use serde::de::DeserializeOwned;

/// Parse one bundled dataset
pub(crate) fn parse<T: DeserializeOwned>(dataset: &'static str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| DashboardError::Seed { dataset, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_json_names_the_dataset() {
        let err = parse::<Vec<u32>>("leads", "[1, \"two\"]").unwrap_err();
        assert!(matches!(err, DashboardError::Seed { dataset: "leads", .. }));
        assert!(err.to_string().contains("leads"));
    }
}
