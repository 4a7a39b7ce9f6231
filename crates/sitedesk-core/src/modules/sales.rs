//! Plot sales and site layout
//!
//! Buyer and broker names live in the CRM and broker modules; plot
//! searches and exports resolve them through [`Names`].

use super::brokers::BrokerDirectory;
use super::crm::SalesPipeline;
use crate::export::format::{crore, grouped, percent, share};
use crate::export::report::{GOLD, SLATE, TEAL};
use crate::export::{CsvField, CsvTable, ExportFile, ReportDocument, ReportTable, TableStyle};
use chrono::NaiveDate;
use sitedesk_model::{Plot, PlotStatus, SalesTier};
use sitedesk_store::RecordStore;
use std::collections::BTreeSet;

/// Download name of the plot list
pub const PLOTS_CSV: &str = "plot-inventory.csv";
/// Download name of the sales report
pub const SALES_REPORT: &str = "triivanta-gold-sales-report.pdf";
/// Sellable area of the layout in sq.ft.
pub const TOTAL_PLOTTED_AREA_SQFT: f64 = 139_230.0;

/// Name lookups for plot buyers and brokers
#[derive(Debug, Clone, Copy)]
pub struct Names<'a> {
    pub leads: &'a SalesPipeline,
    pub brokers: &'a BrokerDirectory,
}

impl<'a> Names<'a> {
    #[must_use]
    pub fn buyer(&self, plot: &Plot) -> Option<&'a str> {
        plot.buyer_id
            .and_then(|id| self.leads.get(id))
            .map(|lead| lead.name.as_str())
    }

    #[must_use]
    pub fn broker(&self, plot: &Plot) -> Option<&'a str> {
        self.brokers.name_of(plot.broker_id)
    }
}

/// Site layout filter; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotFilter {
    pub status: Option<PlotStatus>,
    pub size: Option<u32>,
    pub corner_only: bool,
    pub park_facing_only: bool,
    /// Case-insensitive match on plot id, buyer or broker name
    pub search: String,
}

impl PlotFilter {
    #[must_use]
    pub fn with_status(mut self, status: PlotStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    fn matches(&self, plot: &Plot, names: &Names<'_>) -> bool {
        if self.status.is_some_and(|status| status != plot.status)
            || self.size.is_some_and(|size| size != plot.size)
            || (self.corner_only && !plot.is_corner)
            || (self.park_facing_only && !plot.is_park_facing)
        {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let hit = |text: Option<&str>| text.is_some_and(|t| t.to_lowercase().contains(&needle));
        hit(Some(plot.id.as_str())) || hit(names.buyer(plot)) || hit(names.broker(plot))
    }
}

/// Plots and pricing tiers
#[derive(Debug, Default)]
pub struct SalesDesk {
    plots: RecordStore<Plot>,
    tiers: Vec<SalesTier>,
}

impl SalesDesk {
    /// # Errors
    /// If two plots share an id.
    pub fn new(plots: Vec<Plot>, tiers: Vec<SalesTier>) -> crate::Result<Self> {
        Ok(Self {
            plots: RecordStore::with_records(plots)?,
            tiers,
        })
    }

    #[must_use]
    pub fn plots(&self) -> &[Plot] {
        self.plots.as_slice()
    }

    #[must_use]
    pub fn tiers(&self) -> &[SalesTier] {
        &self.tiers
    }

    #[must_use]
    pub fn filter(&self, filter: &PlotFilter, names: &Names<'_>) -> Vec<&Plot> {
        self.plots
            .iter()
            .filter(|plot| filter.matches(plot, names))
            .collect()
    }

    /// Plot sizes on the layout, smallest first
    #[must_use]
    pub fn sizes(&self) -> Vec<u32> {
        let sizes: BTreeSet<u32> = self.plots.iter().map(|plot| plot.size).collect();
        sizes.into_iter().collect()
    }

    /// Plot count per status in [`PlotStatus::ALL`] order
    #[must_use]
    pub fn status_counts(&self) -> [(PlotStatus, usize); 3] {
        PlotStatus::ALL.map(|status| {
            let count = self.plots.iter().filter(|p| p.status == status).count();
            (status, count)
        })
    }

    #[must_use]
    pub fn sold_area(&self) -> f64 {
        self.tiers.iter().map(|tier| tier.sold_sq_ft).sum()
    }

    /// Revenue booked so far across tiers
    #[must_use]
    pub fn revenue(&self) -> f64 {
        self.tiers.iter().map(SalesTier::revenue).sum()
    }

    /// Revenue if every tier sells its target
    #[must_use]
    pub fn potential_revenue(&self) -> f64 {
        self.tiers.iter().map(SalesTier::potential_revenue).sum()
    }

    /// Sold share of the plotted area, percent
    #[must_use]
    pub fn sold_share(&self) -> f64 {
        share(self.sold_area(), TOTAL_PLOTTED_AREA_SQFT)
    }

    /// Spreadsheet of the plots matching `filter`
    #[must_use]
    pub fn export_csv(&self, filter: &PlotFilter, names: &Names<'_>) -> ExportFile {
        let mut table = CsvTable::new([
            "Plot ID",
            "Size (sq.ft.)",
            "Status",
            "Price (INR)",
            "Buyer",
            "Broker",
        ]);
        for plot in self.filter(filter, names) {
            table.push_row(vec![
                CsvField::plain(&plot.id),
                CsvField::plain(plot.size),
                CsvField::plain(plot.status),
                CsvField::plain(plot.price()),
                CsvField::quoted_or_empty(names.buyer(plot)),
                CsvField::quoted_or_empty(names.broker(plot)),
            ]);
        }
        table.into_file(PLOTS_CSV)
    }

    /// Sales KPIs, tier progress and plot status mix
    #[must_use]
    pub fn report(&self, project: &str, today: NaiveDate) -> ReportDocument {
        let kpis = ReportTable::new(["Key Sales Metric", "Value"], TableStyle::Striped, GOLD)
            .row([
                "Total Area Sold".to_string(),
                format!(
                    "{} sq.ft. ({})",
                    grouped(self.sold_area()),
                    percent(self.sold_share(), 1)
                ),
            ])
            .row(["Current Revenue Generated".to_string(), crore(self.revenue())])
            .row(["Total Potential Revenue".to_string(), crore(self.potential_revenue())]);

        let tiers = self.tiers.iter().fold(
            ReportTable::new(
                ["Sales Tier", "Progress", "Completion", "Revenue"],
                TableStyle::Grid,
                TEAL,
            ),
            |table, tier| {
                table.row([
                    tier.name.clone(),
                    format!(
                        "{} / {} sq.ft.",
                        grouped(tier.sold_sq_ft),
                        grouped(tier.target_sq_ft)
                    ),
                    percent(tier.completion(), 0),
                    crore(tier.revenue()),
                ])
            },
        );

        let total = self.plots.len();
        let statuses = self.status_counts().into_iter().fold(
            ReportTable::new(
                ["Status", "Number of Plots", "% of Total"],
                TableStyle::Striped,
                SLATE,
            ),
            |table, (status, count)| {
                table.row([
                    status.to_string(),
                    count.to_string(),
                    percent(share(count as f64, total as f64), 1),
                ])
            },
        );

        ReportDocument::new(SALES_REPORT, format!("{project} - Sales Report"), today)
            .table(kpis)
            .table(tiers)
            .table(statuses)
    }

    /// Store, for subscriptions
    pub fn store_mut(&mut self) -> &mut RecordStore<Plot> {
        &mut self.plots
    }
}
