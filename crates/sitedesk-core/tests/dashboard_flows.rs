//! End-to-end flows over the seeded dashboard

use pretty_assertions::assert_eq;
use sitedesk_core::modules::sales::PlotFilter;
use sitedesk_core::preferences::THEME_KEY;
use sitedesk_core::{Dashboard, DashboardConfig, DashboardError, PreferenceStore};
use sitedesk_model::{Checkable, PlotStatus, ProjectPhase, Theme, UserRole, View};
use sitedesk_test_utils::fixtures::date;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

fn demo() -> Dashboard {
    Dashboard::seeded(DashboardConfig::demo()).unwrap()
}

fn completed_details(phases: &[ProjectPhase]) -> Vec<String> {
    phases
        .iter()
        .flat_map(ProjectPhase::details)
        .filter(|detail| detail.is_completed())
        .map(|detail| detail.id().to_string())
        .collect()
}

/// Preference storage the test can inspect after handing it over
#[derive(Clone, Default)]
struct SharedPreferences(Rc<RefCell<HashMap<String, String>>>);

impl PreferenceStore for SharedPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[test]
fn seed_loads_every_module() {
    let dashboard = demo();
    assert_eq!(dashboard.sales().plots().len(), 81);
    assert_eq!(dashboard.pipeline().leads().len(), 7);
    assert_eq!(dashboard.site().reports().len(), 2);
    assert_eq!(dashboard.notifications().unread_count(), 5);
    assert_eq!(dashboard.today(), date(15));
    assert_eq!(dashboard.role(), UserRole::Ceo);
    assert_eq!(dashboard.current_view(), View::Dashboard);
}

#[test]
fn timeline_follows_latest_seed_report() {
    let dashboard = demo();
    let site = dashboard.site();
    assert_eq!(site.catalog().unknown_ids(site.phases()).len(), 19);
    assert_eq!(completed_details(site.phases()), vec!["infrastructure-0"]);
}

#[test]
fn new_report_moves_timeline_and_summary() {
    let mut dashboard = demo();
    let today = dashboard.today();
    let draft = dashboard
        .site()
        .new_draft(today)
        .completing(["infrastructure-0", "infrastructure-1", "landscaping-0"]);
    let (id, outcome) = dashboard.site_mut().submit_report(draft).unwrap();

    assert!(outcome.is_applied());
    assert_eq!(dashboard.site().latest_report().unwrap().id, id);
    assert_eq!(
        completed_details(dashboard.site().phases()),
        vec!["infrastructure-0", "infrastructure-1", "landscaping-0"]
    );

    let summary = dashboard.work_progress().unwrap();
    assert_eq!(summary.report_date, date(15));
    assert_eq!(summary.overall(), (3, 29));
    assert_eq!(summary.categories[0].completed, 0);
    assert_eq!(summary.categories[1].completed, 2);
}

#[test]
fn role_switch_keeps_or_resets_view() {
    let mut dashboard = demo();
    dashboard.navigate(View::Inventory).unwrap();

    assert_eq!(dashboard.switch_role(UserRole::StoreManager), View::Inventory);
    assert_eq!(dashboard.switch_role(UserRole::Hr), View::Dashboard);

    let err = dashboard.navigate(View::Financials).unwrap_err();
    assert!(matches!(
        err,
        DashboardError::ViewHidden {
            role: UserRole::Hr,
            view: View::Financials,
        }
    ));
    assert_eq!(dashboard.current_view(), View::Dashboard);
    assert!(dashboard.dashboard_report().is_err());
}

#[test]
fn config_role_decides_landing_view() {
    let config = DashboardConfig::demo().with_role(UserRole::StoreManager);
    let dashboard = Dashboard::seeded(config).unwrap();
    assert_eq!(dashboard.current_view(), View::Inventory);
    assert_eq!(
        dashboard.session().visible_views(),
        [View::Inventory, View::Messaging]
    );
}

#[test]
fn theme_preference_is_restored_and_persisted() {
    let mut prefs = SharedPreferences::default();
    prefs.set(THEME_KEY, "light");

    let mut dashboard = demo().with_preferences(prefs.clone());
    assert_eq!(dashboard.theme(), Theme::Light);

    assert_eq!(dashboard.toggle_theme(), Theme::Dark);
    assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("dark"));

    let reopened = demo().with_preferences(prefs);
    assert_eq!(reopened.theme(), Theme::Dark);
}

#[test]
fn default_theme_comes_from_config() {
    let config = DashboardConfig::demo().with_theme(Theme::Light);
    let prefs = SharedPreferences::default();
    let dashboard = Dashboard::seeded(config).unwrap().with_preferences(prefs.clone());
    assert_eq!(dashboard.theme(), Theme::Light);
    assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn exports_carry_download_names() {
    let dashboard = demo();

    let costs = dashboard.export_costs_csv();
    assert_eq!(costs.file_name, "cost-analysis.csv");
    assert!(costs
        .contents
        .starts_with("Category,Department,Budget (INR),Actual Spend (INR),Utilization (%),Variance (INR)\n\"Land Acquisition\","));

    let sold = dashboard.export_plots_csv(&PlotFilter::default().with_status(PlotStatus::Sold));
    assert_eq!(sold.file_name, "plot-inventory.csv");
    assert_eq!(sold.contents.lines().count(), 1 + 38);

    let brokers = dashboard.export_brokers_csv();
    assert_eq!(brokers.file_name, "brokers-list.csv");

    let report = dashboard.financial_report();
    assert_eq!(report.file_name, "financial-summary.pdf");
    assert!(report.render_text().starts_with("TRIIVANTA GOLD - "));

    let sales = dashboard.sales_report().to_text_file();
    assert_eq!(sales.file_name, "triivanta-gold-sales-report.pdf");
    assert!(sales.contents.contains("Report generated on: 2/15/2026"));
}

#[test]
fn stock_never_goes_negative() {
    let mut dashboard = demo();
    let inventory = dashboard.inventory_mut();
    assert_eq!(inventory.update_stock("INV-002", -4).unwrap(), 11);
    assert_eq!(inventory.update_stock("INV-002", -40).unwrap(), 0);
    assert_eq!(inventory.update_stock("INV-002", 7).unwrap(), 7);
    assert!(inventory.update_stock("INV-404", 1).unwrap_err().is_not_found());
}

#[test]
fn messaging_round_trip() {
    let mut dashboard = demo();
    let before = dashboard.messenger().thread("EMP-002").len();

    let err = dashboard.send_message("EMP-002", "   ").unwrap_err();
    assert!(matches!(err, DashboardError::EmptyMessage));

    let id = dashboard
        .send_message("EMP-002", "  Drainage inspection at 4pm  ")
        .unwrap();
    let thread = dashboard.messenger().thread("EMP-002");
    assert_eq!(thread.len(), before + 1);
    let sent = thread.last().unwrap();
    assert_eq!(sent.id, id);
    assert_eq!(sent.text, "Drainage inspection at 4pm");

    let rows = dashboard.conversations();
    assert_eq!(rows[0].partner.id, "EMP-002");
    assert_eq!(rows[0].unread, 0);
}
