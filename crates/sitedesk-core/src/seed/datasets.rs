use super::parse;
use crate::error::Result;
use sitedesk_model::{
    Broker, CashFlowPoint, CostCategory, DocumentFolder, Employee, FundingSource, InventoryItem,
    Lead, Message, Notification, SalesTier,
};

macro_rules! dataset {
    ($(#[$doc:meta])* $name:ident -> $ty:ty, $file:literal) => {
        $(#[$doc])*
        ///
        /// # Errors
        /// If the bundled JSON does not parse.
        pub fn $name() -> Result<Vec<$ty>> {
            parse(stringify!($name), include_str!(concat!("../../data/", $file)))
        }
    };
}

dataset!(
    /// Sales pipeline leads
    leads -> Lead, "leads.json"
);
dataset!(
    /// Registered brokers
    brokers -> Broker, "brokers.json"
);
dataset!(
    /// Budget and actual spend per cost category
    cost_breakdown -> CostCategory, "costs.json"
);
dataset!(
    /// Pricing tiers with sold and target area
    sales_tiers -> SalesTier, "tiers.json"
);
dataset!(
    /// Capital mix in percent
    funding_sources -> FundingSource, "funding.json"
);
dataset!(
    /// Quarterly cash flow forecast
    cash_flow -> CashFlowPoint, "cash_flow.json"
);
dataset!(
    /// Material stock
    inventory -> InventoryItem, "inventory.json"
);
dataset!(
    /// Staff roster
    employees -> Employee, "employees.json"
);
dataset!(
    /// Chat history
    messages -> Message, "messages.json"
);
dataset!(
    /// Document folders
    document_folders -> DocumentFolder, "documents.json"
);
dataset!(
    /// Header notifications
    notifications -> Notification, "notifications.json"
);

#[cfg(test)]
mod tests {
    use super::*;
    use sitedesk_model::{BrokerStatus, EmploymentStatus, LeadStatus};

    #[test]
    fn every_dataset_loads() {
        assert_eq!(leads().unwrap().len(), 7);
        assert_eq!(brokers().unwrap().len(), 4);
        assert_eq!(cost_breakdown().unwrap().len(), 13);
        assert_eq!(sales_tiers().unwrap().len(), 3);
        assert_eq!(funding_sources().unwrap().len(), 2);
        assert_eq!(cash_flow().unwrap().len(), 5);
        assert_eq!(inventory().unwrap().len(), 5);
        assert_eq!(employees().unwrap().len(), 5);
        assert_eq!(messages().unwrap().len(), 8);
        assert_eq!(document_folders().unwrap().len(), 3);
        assert_eq!(notifications().unwrap().len(), 6);
    }

    #[test]
    fn optional_fields_default() {
        let leads = leads().unwrap();
        assert_eq!(leads[1].status, LeadStatus::NewLead);
        assert_eq!(leads[1].broker_id, Some(2));
        assert!(leads[1].activities.is_empty());
        assert_eq!(leads[4].broker_id, None);

        let folders = document_folders().unwrap();
        assert_eq!(folders[0].documents[1].linked_to, None);
    }

    #[test]
    fn enum_labels_parse() {
        assert_eq!(brokers().unwrap()[2].status, BrokerStatus::Inactive);
        assert_eq!(employees().unwrap()[2].status, EmploymentStatus::OnLeave);
    }

    #[test]
    fn budget_totals() {
        let costs = cost_breakdown().unwrap();
        let budget: f64 = costs.iter().map(|c| c.budget).sum();
        let actual: f64 = costs.iter().map(|c| c.actual).sum();
        assert!((budget - 229_500_000.0).abs() < 1.0);
        assert!((actual - 188_900_000.0).abs() < 1.0);
    }
}
