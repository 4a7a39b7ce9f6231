//! The dashboard facade
//!
//! [`Dashboard`] owns every module together with the role session and the
//! theme preference. Modules are reached through accessor pairs
//! (`sales()` / `sales_mut()`); operations that combine modules, such as
//! exports that resolve buyer and broker names, live here.

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::export::format::{compact, grouped, percent, share};
use crate::export::report::{GOLD, SLATE};
use crate::export::{ExportFile, ReportDocument, ReportTable, TableStyle};
use crate::modules::brokers::BrokerDirectory;
use crate::modules::crm::{plots_by_buyer, SalesPipeline};
use crate::modules::documents::DocumentLibrary;
use crate::modules::employees::Staff;
use crate::modules::financials::Financials;
use crate::modules::inventory::InventoryBook;
use crate::modules::messaging::{Conversation, Messenger};
use crate::modules::progress_summary::WorkProgressSummary;
use crate::modules::sales::{Names, PlotFilter, SalesDesk};
use crate::notifications::NotificationCenter;
use crate::preferences::{MemoryPreferences, PreferenceStore, ThemePreferences};
use crate::seed;
use crate::session::RoleSession;
use chrono::{NaiveDate, Utc};
use sitedesk_model::{Broker, Theme, UserRole, View};
use sitedesk_store::{ProgressReportStore, SiteProgress};
use std::collections::HashMap;
use tracing::info;

/// Download name of the dashboard report
pub const DASHBOARD_REPORT: &str = "triivanta-gold-dashboard-report.pdf";
/// Site area shown in the project metrics
pub const PROJECT_AREA_ACRES: f64 = 7.5;
/// Planned build duration
pub const PROJECT_DURATION_MONTHS: u32 = 18;

/// Everything the dashboard shows
#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    session: RoleSession,
    theme: ThemePreferences,
    notifications: NotificationCenter,
    site: SiteProgress,
    pipeline: SalesPipeline,
    brokers: BrokerDirectory,
    sales: SalesDesk,
    financials: Financials,
    inventory: InventoryBook,
    staff: Staff,
    messenger: Messenger,
    documents: DocumentLibrary,
}

impl Dashboard {
    /// Dashboard with empty records
    ///
    /// The work catalog and project timeline are the bundled ones, with no
    /// reports submitted yet.
    ///
    /// # Errors
    /// If the bundled catalog or timeline fails to load.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let site = SiteProgress::new(
            seed::work_catalog()?,
            ProgressReportStore::new(),
            seed::project_timeline()?,
        )?;
        Ok(Self {
            session: RoleSession::new(config.initial_role),
            theme: ThemePreferences::load(MemoryPreferences::new(), config.default_theme),
            notifications: NotificationCenter::new(Vec::new())?,
            site,
            pipeline: SalesPipeline::new(Vec::new())?,
            brokers: BrokerDirectory::new(Vec::new())?,
            sales: SalesDesk::new(Vec::new(), Vec::new())?,
            financials: Financials::default(),
            inventory: InventoryBook::new(Vec::new())?,
            staff: Staff::new(Vec::new())?,
            messenger: Messenger::new(Vec::new(), config.current_user.clone())?,
            documents: DocumentLibrary::new(Vec::new())?,
            config,
        })
    }

    /// Dashboard loaded with the bundled demo data
    ///
    /// # Errors
    /// If a bundled dataset fails to load.
    pub fn seeded(config: DashboardConfig) -> Result<Self> {
        let dashboard = Self {
            session: RoleSession::new(config.initial_role),
            theme: ThemePreferences::load(MemoryPreferences::new(), config.default_theme),
            notifications: NotificationCenter::new(seed::notifications()?)?,
            site: seed::site_progress()?,
            pipeline: SalesPipeline::new(seed::leads()?)?,
            brokers: BrokerDirectory::new(seed::brokers()?)?,
            sales: SalesDesk::new(seed::plots(), seed::sales_tiers()?)?,
            financials: Financials::new(
                seed::cost_breakdown()?,
                seed::funding_sources()?,
                seed::cash_flow()?,
            )?,
            inventory: InventoryBook::new(seed::inventory()?)?,
            staff: Staff::new(seed::employees()?)?,
            messenger: Messenger::new(seed::messages()?, config.current_user.clone())?,
            documents: DocumentLibrary::new(seed::document_folders()?)?,
            config,
        };
        info!(
            project = %dashboard.config.project_name,
            role = %dashboard.session.role(),
            plots = dashboard.sales.plots().len(),
            reports = dashboard.site.reports().len(),
            "dashboard seeded"
        );
        Ok(dashboard)
    }

    /// Back the theme preference with `store`
    ///
    /// The stored theme wins over the configured default.
    #[must_use]
    pub fn with_preferences(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.theme = ThemePreferences::load(store, self.config.default_theme);
        self
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// The dashboard's notion of today
    #[inline]
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.config.today()
    }

    #[inline]
    #[must_use]
    pub fn session(&self) -> &RoleSession {
        &self.session
    }

    #[inline]
    #[must_use]
    pub fn role(&self) -> UserRole {
        self.session.role()
    }

    #[inline]
    #[must_use]
    pub fn current_view(&self) -> View {
        self.session.current_view()
    }

    /// Change role; returns the view now shown
    pub fn switch_role(&mut self, role: UserRole) -> View {
        let view = self.session.switch_role(role);
        info!(role = %role, view = %view, "role switched");
        view
    }

    /// # Errors
    /// [`DashboardError::ViewHidden`] if the active role does not list `view`.
    pub fn navigate(&mut self, view: View) -> Result<()> {
        self.session.navigate(view)
    }

    #[inline]
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Switch light/dark and persist the choice
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    #[must_use]
    pub fn preferences(&self) -> &ThemePreferences {
        &self.theme
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    /// Reports and timeline
    #[must_use]
    pub fn site(&self) -> &SiteProgress {
        &self.site
    }

    pub fn site_mut(&mut self) -> &mut SiteProgress {
        &mut self.site
    }

    #[must_use]
    pub fn pipeline(&self) -> &SalesPipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut SalesPipeline {
        &mut self.pipeline
    }

    #[must_use]
    pub fn brokers(&self) -> &BrokerDirectory {
        &self.brokers
    }

    pub fn brokers_mut(&mut self) -> &mut BrokerDirectory {
        &mut self.brokers
    }

    #[must_use]
    pub fn sales(&self) -> &SalesDesk {
        &self.sales
    }

    pub fn sales_mut(&mut self) -> &mut SalesDesk {
        &mut self.sales
    }

    #[must_use]
    pub fn financials(&self) -> &Financials {
        &self.financials
    }

    pub fn financials_mut(&mut self) -> &mut Financials {
        &mut self.financials
    }

    #[must_use]
    pub fn inventory(&self) -> &InventoryBook {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut InventoryBook {
        &mut self.inventory
    }

    #[must_use]
    pub fn staff(&self) -> &Staff {
        &self.staff
    }

    pub fn staff_mut(&mut self) -> &mut Staff {
        &mut self.staff
    }

    #[must_use]
    pub fn messenger(&self) -> &Messenger {
        &self.messenger
    }

    pub fn messenger_mut(&mut self) -> &mut Messenger {
        &mut self.messenger
    }

    #[must_use]
    pub fn documents(&self) -> &DocumentLibrary {
        &self.documents
    }

    pub fn documents_mut(&mut self) -> &mut DocumentLibrary {
        &mut self.documents
    }

    /// Buyer and broker name lookups for plot tables
    #[must_use]
    pub fn names(&self) -> Names<'_> {
        Names {
            leads: &self.pipeline,
            brokers: &self.brokers,
        }
    }

    /// Plot ids per buyer lead
    #[must_use]
    pub fn plots_by_buyer(&self) -> HashMap<u32, Vec<&str>> {
        plots_by_buyer(self.sales.plots())
    }

    /// Top performers, as many as configured
    #[must_use]
    pub fn top_brokers(&self) -> Vec<&Broker> {
        self.brokers.top(self.config.top_brokers)
    }

    /// Conversations of the signed-in user
    #[must_use]
    pub fn conversations(&self) -> Vec<Conversation<'_>> {
        self.messenger.conversations(&self.staff)
    }

    /// Send as the signed-in user, stamped now
    ///
    /// # Errors
    /// [`DashboardError::EmptyMessage`] for blank text.
    pub fn send_message(&mut self, partner: &str, text: &str) -> Result<String> {
        self.messenger.send(partner, text, Utc::now())
    }

    /// Category completion from the latest report
    #[must_use]
    pub fn work_progress(&self) -> Option<WorkProgressSummary> {
        WorkProgressSummary::latest(&self.site)
    }

    #[must_use]
    pub fn export_brokers_csv(&self) -> ExportFile {
        self.brokers.export_csv()
    }

    /// Plot inventory limited to `filter`
    #[must_use]
    pub fn export_plots_csv(&self, filter: &PlotFilter) -> ExportFile {
        self.sales.export_csv(filter, &self.names())
    }

    #[must_use]
    pub fn export_costs_csv(&self) -> ExportFile {
        self.financials.export_csv()
    }

    #[must_use]
    pub fn sales_report(&self) -> ReportDocument {
        self.sales.report(&self.config.project_name, self.today())
    }

    #[must_use]
    pub fn financial_report(&self) -> ReportDocument {
        self.financials
            .report(&self.sales, &self.config.project_name, self.today())
    }

    /// Project overview report
    ///
    /// # Errors
    /// [`DashboardError::ExportHidden`] unless the role is CEO or Project
    /// Manager.
    pub fn dashboard_report(&self) -> Result<ReportDocument> {
        let role = self.role();
        if !role.can_export_dashboard() {
            return Err(DashboardError::ExportHidden {
                role,
                report: "dashboard",
            });
        }

        let budget = self.financials.total_budget();
        let spend = self.financials.actual_spend();
        let metrics = ReportTable::new(["Project Metric", "Value"], TableStyle::Striped, GOLD)
            .row(["Total Project Cost".to_string(), compact(budget)])
            .row(["Total Plots".to_string(), self.sales.plots().len().to_string()])
            .row(["Project Area".to_string(), format!("{PROJECT_AREA_ACRES} Acres")])
            .row([
                "Project Duration".to_string(),
                format!("{PROJECT_DURATION_MONTHS} Months"),
            ]);

        let summary = ReportTable::new(["Summary Item", "Value"], TableStyle::Grid, SLATE)
            .row([
                "Budget Utilization".to_string(),
                format!("{} ({})", percent(share(spend, budget), 1), compact(spend)),
            ])
            .row([
                "Plot Sales (by Area)".to_string(),
                format!(
                    "{} ({} sq.ft.)",
                    percent(self.sales.sold_share(), 1),
                    grouped(self.sales.sold_area())
                ),
            ])
            .row([
                "Total Revenue Generated".to_string(),
                compact(self.sales.revenue()),
            ]);

        let tiers = self.sales.tiers().iter().fold(
            ReportTable::new(["Sales Tier", "Progress", "Revenue"], TableStyle::Striped, GOLD),
            |table, tier| {
                table.row([
                    tier.name.clone(),
                    format!(
                        "{} / {} sq.ft.",
                        grouped(tier.sold_sq_ft),
                        grouped(tier.target_sq_ft)
                    ),
                    compact(tier.revenue()),
                ])
            },
        );

        info!(role = %role, "dashboard report generated");
        Ok(ReportDocument::new(
            DASHBOARD_REPORT,
            format!("{} - Dashboard Report", self.config.project_name),
            self.today(),
        )
        .table(metrics)
        .table(summary)
        .table(tiers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn demo() -> Dashboard {
        Dashboard::seeded(DashboardConfig::demo()).unwrap()
    }

    #[test]
    fn blank_dashboard_has_catalog_but_no_records() {
        let dashboard = Dashboard::new(DashboardConfig::demo()).unwrap();
        assert!(dashboard.sales().plots().is_empty());
        assert!(dashboard.work_progress().is_none());
        assert_eq!(dashboard.site().catalog().len(), 29);
        assert_eq!(dashboard.site().phases().len(), 4);
    }

    #[test]
    fn dashboard_report_tables() {
        let report = demo().dashboard_report().unwrap();
        assert_eq!(report.file_name, DASHBOARD_REPORT);
        assert_eq!(report.title, "TRIIVANTA GOLD - Dashboard Report");
        assert_eq!(report.generated_line(), "Report generated on: 2/15/2026");

        assert_eq!(
            report.tables[0].body,
            [
                ["Total Project Cost", "₹22.95 Cr"],
                ["Total Plots", "81"],
                ["Project Area", "7.5 Acres"],
                ["Project Duration", "18 Months"],
            ]
        );
        assert_eq!(
            report.tables[1].body,
            [
                ["Budget Utilization", "82.3% (₹18.89 Cr)"],
                ["Plot Sales (by Area)", "86.2% (120,000 sq.ft.)"],
                ["Total Revenue Generated", "₹30.75 Cr"],
            ]
        );
        assert_eq!(report.tables[1].style, TableStyle::Grid);
        assert_eq!(
            report.tables[2].body[2],
            ["Standard Tier", "15,000 / 60,000 sq.ft.", "₹4.50 Cr"]
        );
    }

    #[test]
    fn dashboard_report_is_role_gated() {
        let mut dashboard = demo();
        dashboard.switch_role(UserRole::ProjectManager);
        assert!(dashboard.dashboard_report().is_ok());

        dashboard.switch_role(UserRole::Hr);
        let err = dashboard.dashboard_report().unwrap_err();
        assert!(matches!(
            err,
            DashboardError::ExportHidden {
                role: UserRole::Hr,
                ..
            }
        ));
    }

    #[test]
    fn top_brokers_follow_config() {
        let mut config = DashboardConfig::demo();
        config.top_brokers = 2;
        let dashboard = Dashboard::seeded(config).unwrap();
        let ids: Vec<u32> = dashboard.top_brokers().iter().map(|b| b.id).collect();
        assert_eq!(ids, [4, 2]);
    }
}
