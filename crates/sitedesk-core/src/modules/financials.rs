//! Budget, spend and projected returns

use super::sales::SalesDesk;
use crate::error::{DashboardError, Result};
use crate::export::format::{compact, crore, percent};
use crate::export::report::{GOLD, SLATE};
use crate::export::{CsvField, CsvTable, ExportFile, ReportDocument, ReportTable, TableStyle};
use crate::forms::parse_or_zero;
use chrono::NaiveDate;
use sitedesk_model::{CashFlowPoint, CostCategory, Department, FundingSource};
use sitedesk_store::RecordStore;
use tracing::info;

/// Download name of the cost sheet
pub const COSTS_CSV: &str = "cost-analysis.csv";
/// Download name of the financial report
pub const FINANCIAL_REPORT: &str = "financial-summary.pdf";

/// Headline figures, all in rupees except the margin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialSummary {
    pub total_budget: f64,
    pub actual_spend: f64,
    /// Revenue from area sold so far
    pub revenue: f64,
    /// Revenue if every tier sells out
    pub potential_revenue: f64,
    /// Potential revenue less total budget
    pub projected_profit: f64,
    /// Projected profit over potential revenue, percent; zero without revenue
    pub profit_margin: f64,
}

/// Cost breakdown with funding and cash flow
#[derive(Debug, Default)]
pub struct Financials {
    costs: RecordStore<CostCategory>,
    funding: Vec<FundingSource>,
    cash_flow: Vec<CashFlowPoint>,
}

impl Financials {
    /// # Errors
    /// If two cost categories share a name.
    pub fn new(
        costs: Vec<CostCategory>,
        funding: Vec<FundingSource>,
        cash_flow: Vec<CashFlowPoint>,
    ) -> Result<Self> {
        Ok(Self {
            costs: RecordStore::with_records(costs)?,
            funding,
            cash_flow,
        })
    }

    #[must_use]
    pub fn costs(&self) -> &[CostCategory] {
        self.costs.as_slice()
    }

    #[must_use]
    pub fn funding(&self) -> &[FundingSource] {
        &self.funding
    }

    #[must_use]
    pub fn cash_flow(&self) -> &[CashFlowPoint] {
        &self.cash_flow
    }

    /// Costs belonging to one department
    pub fn by_department(&self, department: Department) -> impl Iterator<Item = &CostCategory> {
        self.costs.iter().filter(move |c| c.department == department)
    }

    /// Overwrite a category's budget and spend from form input
    ///
    /// Unparsable amounts read as zero.
    ///
    /// # Errors
    /// [`DashboardError::NotFound`] for an unknown category.
    pub fn edit_cost(&mut self, name: &str, budget: &str, actual: &str) -> Result<()> {
        let (budget, actual): (f64, f64) = (parse_or_zero(budget), parse_or_zero(actual));
        if !self.costs.update(&name.to_string(), |cost| {
            cost.budget = budget;
            cost.actual = actual;
        }) {
            return Err(DashboardError::not_found("cost category", name));
        }
        info!(category = name, budget, actual, "cost category edited");
        Ok(())
    }

    #[must_use]
    pub fn total_budget(&self) -> f64 {
        self.costs.iter().map(|c| c.budget).sum()
    }

    #[must_use]
    pub fn actual_spend(&self) -> f64 {
        self.costs.iter().map(|c| c.actual).sum()
    }

    #[must_use]
    pub fn summary(&self, sales: &SalesDesk) -> FinancialSummary {
        let total_budget = self.total_budget();
        let potential_revenue = sales.potential_revenue();
        let projected_profit = potential_revenue - total_budget;
        FinancialSummary {
            total_budget,
            actual_spend: self.actual_spend(),
            revenue: sales.revenue(),
            potential_revenue,
            projected_profit,
            profit_margin: if potential_revenue > 0.0 {
                projected_profit / potential_revenue * 100.0
            } else {
                0.0
            },
        }
    }

    #[must_use]
    pub fn export_csv(&self) -> ExportFile {
        let mut table = CsvTable::new([
            "Category",
            "Department",
            "Budget (INR)",
            "Actual Spend (INR)",
            "Utilization (%)",
            "Variance (INR)",
        ]);
        for cost in self.costs.iter() {
            table.push_row(vec![
                CsvField::quoted(cost.name.as_str()),
                CsvField::plain(cost.department),
                CsvField::plain(cost.budget),
                CsvField::plain(cost.actual),
                CsvField::plain(format!("{:.2}", cost.utilization())),
                CsvField::plain(cost.variance()),
            ]);
        }
        table.into_file(COSTS_CSV)
    }

    #[must_use]
    pub fn report(&self, sales: &SalesDesk, project: &str, today: NaiveDate) -> ReportDocument {
        let summary = self.summary(sales);
        let kpis = ReportTable::new(
            ["Key Performance Indicator", "Value"],
            TableStyle::Striped,
            GOLD,
        )
        .row(["Total Budget".to_string(), crore(summary.total_budget)])
        .row(["Actual Spend".to_string(), crore(summary.actual_spend)])
        .row(["Revenue Generated".to_string(), crore(summary.revenue)])
        .row(["Projected Profit".to_string(), crore(summary.projected_profit)])
        .row(["Profit Margin".to_string(), percent(summary.profit_margin, 1)]);

        let costs = self.costs.iter().fold(
            ReportTable::new(
                ["Category", "Department", "Budget", "Actual Spend", "Variance"],
                TableStyle::Grid,
                SLATE,
            ),
            |table, cost| {
                table.row([
                    cost.name.clone(),
                    cost.department.to_string(),
                    compact(cost.budget),
                    compact(cost.actual),
                    compact(cost.variance()),
                ])
            },
        );

        ReportDocument::new(FINANCIAL_REPORT, format!("{project} - Financial Summary"), today)
            .table(kpis)
            .table(costs)
    }

    /// Store, for subscriptions
    pub fn store_mut(&mut self) -> &mut RecordStore<CostCategory> {
        &mut self.costs
    }
}
