//! Broker directory

use crate::error::{require, DashboardError, Result};
use crate::export::{CsvField, CsvTable, ExportFile};
use sitedesk_model::{Broker, BrokerDraft, BrokerStatus};
use sitedesk_store::RecordStore;
use std::cmp::Ordering;
use tracing::info;

/// Download name of the broker list
pub const BROKERS_CSV: &str = "brokers-list.csv";

/// Headline broker figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrokerStats {
    pub total: usize,
    pub active: usize,
    /// Business brought in across all brokers, in rupees
    pub total_business: f64,
}

/// Registered brokers in registration order
#[derive(Debug, Default)]
pub struct BrokerDirectory {
    brokers: RecordStore<Broker>,
}

impl BrokerDirectory {
    /// # Errors
    /// If two brokers share an id.
    pub fn new(brokers: Vec<Broker>) -> Result<Self> {
        Ok(Self {
            brokers: RecordStore::with_records(brokers)?,
        })
    }

    #[must_use]
    pub fn brokers(&self) -> &[Broker] {
        self.brokers.as_slice()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Broker> {
        self.brokers.get(&id)
    }

    /// Broker name for an optional id
    #[must_use]
    pub fn name_of(&self, id: Option<u32>) -> Option<&str> {
        id.and_then(|id| self.get(id)).map(|broker| broker.name.as_str())
    }

    /// Register a broker with the next id and no deals yet
    ///
    /// # Errors
    /// [`DashboardError::MissingField`] when the name is blank.
    pub fn add(&mut self, draft: BrokerDraft) -> Result<u32> {
        require("broker", "name", &draft.name)?;
        let id = self.brokers.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        self.brokers.insert(draft.into_broker(id))?;
        info!(broker = id, "broker registered");
        Ok(id)
    }

    /// Change a broker's status
    ///
    /// # Errors
    /// [`DashboardError::NotFound`] for an unknown broker.
    pub fn set_status(&mut self, id: u32, status: BrokerStatus) -> Result<()> {
        if self.brokers.update(&id, |broker| broker.status = status) {
            Ok(())
        } else {
            Err(DashboardError::not_found("broker", id))
        }
    }

    #[must_use]
    pub fn stats(&self) -> BrokerStats {
        BrokerStats {
            total: self.brokers.len(),
            active: self
                .brokers
                .iter()
                .filter(|b| b.status == BrokerStatus::Active)
                .count(),
            total_business: self.brokers.iter().map(|b| b.total_business).sum(),
        }
    }

    /// The `n` brokers with the most business, highest first
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&Broker> {
        let mut ranked: Vec<&Broker> = self.brokers.iter().collect();
        ranked.sort_by(|a, b| {
            b.total_business
                .partial_cmp(&a.total_business)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }

    /// Spreadsheet of every broker
    #[must_use]
    pub fn export_csv(&self) -> ExportFile {
        let mut table = CsvTable::new([
            "Name",
            "RERA No",
            "Contact Person",
            "Phone",
            "Email",
            "Status",
            "Deals Closed",
            "Total Business (INR)",
            "Commission Rate (%)",
        ]);
        for broker in self.brokers.iter() {
            table.push_row(vec![
                CsvField::quoted(broker.name.as_str()),
                CsvField::plain(&broker.rera_no),
                CsvField::quoted(broker.contact_person.as_str()),
                CsvField::plain(&broker.phone),
                CsvField::plain(&broker.email),
                CsvField::plain(broker.status.as_str()),
                CsvField::plain(broker.deals_closed),
                CsvField::plain(broker.total_business),
                CsvField::plain(broker.commission_rate),
            ]);
        }
        table.into_file(BROKERS_CSV)
    }

    /// Store, for subscriptions
    pub fn store_mut(&mut self) -> &mut RecordStore<Broker> {
        &mut self.brokers
    }
}
