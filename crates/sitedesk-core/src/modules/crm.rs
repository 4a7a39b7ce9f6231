//! Lead pipeline

use crate::error::{require, DashboardError, Result};
use crate::forms::{parse_optional_id, parse_or_zero};
use chrono::NaiveDate;
use sitedesk_model::{Activity, ActivityKind, Lead, LeadStatus, Plot};
use sitedesk_store::RecordStore;
use std::collections::HashMap;
use tracing::{debug, info};

/// Raw "add lead" form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub interest: String,
    /// Potential value in rupees, as typed
    pub value: String,
    pub source: String,
    /// Broker id, blank for a direct lead
    pub broker_id: String,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            interest: String::new(),
            value: String::new(),
            source: "Website".to_string(),
            broker_id: String::new(),
        }
    }
}

/// Leads, newest first
#[derive(Debug, Default)]
pub struct SalesPipeline {
    leads: RecordStore<Lead>,
}

impl SalesPipeline {
    /// # Errors
    /// If two leads share an id.
    pub fn new(leads: Vec<Lead>) -> Result<Self> {
        Ok(Self {
            leads: RecordStore::with_records(leads)?,
        })
    }

    #[must_use]
    pub fn leads(&self) -> &[Lead] {
        self.leads.as_slice()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Lead> {
        self.leads.get(&id)
    }

    fn next_id(&self) -> u32 {
        self.leads.iter().map(|lead| lead.id).max().unwrap_or(0) + 1
    }

    /// Add a lead from the form, at the front of the list
    ///
    /// The lead starts as `New Lead`, contacted `today`. An unparsable
    /// value reads as zero.
    ///
    /// # Errors
    /// [`DashboardError::MissingField`] when name, interest or value is blank.
    pub fn add_lead(&mut self, form: LeadForm, today: NaiveDate) -> Result<u32> {
        require("lead", "name", &form.name)?;
        require("lead", "interest", &form.interest)?;
        require("lead", "value", &form.value)?;

        let id = self.next_id();
        self.leads.prepend(Lead {
            id,
            name: form.name.trim().to_string(),
            status: LeadStatus::NewLead,
            source: form.source,
            last_contacted: today,
            interest: form.interest.trim().to_string(),
            value: parse_or_zero(&form.value),
            broker_id: parse_optional_id(&form.broker_id),
            activities: Vec::new(),
        })?;
        info!(lead = id, "lead added");
        Ok(id)
    }

    /// Move a lead to another pipeline column
    ///
    /// # Errors
    /// [`DashboardError::NotFound`] for an unknown lead.
    pub fn move_lead(&mut self, id: u32, status: LeadStatus) -> Result<()> {
        if !self.leads.update(&id, |lead| lead.status = status) {
            return Err(DashboardError::not_found("lead", id));
        }
        debug!(lead = id, status = %status, "lead moved");
        Ok(())
    }

    /// Append an activity and bump the last-contacted date
    ///
    /// # Errors
    /// [`DashboardError::NotFound`] for an unknown lead.
    pub fn log_activity(
        &mut self,
        id: u32,
        kind: ActivityKind,
        date: NaiveDate,
        notes: &str,
        agent: &str,
    ) -> Result<()> {
        let updated = self.leads.update(&id, |lead| {
            let activity_id = format!("act-{}-{}", lead.id, lead.activities.len() + 1);
            lead.activities.push(Activity {
                id: activity_id,
                kind,
                date,
                notes: notes.trim().to_string(),
                agent: agent.to_string(),
            });
            lead.last_contacted = lead.last_contacted.max(date);
        });
        if updated {
            Ok(())
        } else {
            Err(DashboardError::not_found("lead", id))
        }
    }

    /// Pipeline columns in status order
    #[must_use]
    pub fn columns(&self) -> Vec<(LeadStatus, Vec<&Lead>)> {
        LeadStatus::ALL
            .into_iter()
            .map(|status| {
                let leads = self.leads.iter().filter(|lead| lead.status == status).collect();
                (status, leads)
            })
            .collect()
    }

    /// Value of leads still in play (not converted or lost)
    #[must_use]
    pub fn open_value(&self) -> f64 {
        self.leads
            .iter()
            .filter(|lead| lead.status.is_open())
            .map(|lead| lead.value)
            .sum()
    }

    /// Store, for subscriptions
    pub fn store_mut(&mut self) -> &mut RecordStore<Lead> {
        &mut self.leads
    }
}

/// Plot ids held by each buyer id, in layout order
#[must_use]
pub fn plots_by_buyer(plots: &[Plot]) -> HashMap<u32, Vec<&str>> {
    let mut map: HashMap<u32, Vec<&str>> = HashMap::new();
    for plot in plots {
        if let Some(buyer) = plot.buyer_id {
            map.entry(buyer).or_default().push(plot.id.as_str());
        }
    }
    map
}

/// Plots shown on a lead's card: only once the lead has booked or converted
#[must_use]
pub fn plots_held<'m, 'p>(lead: &Lead, by_buyer: &'m HashMap<u32, Vec<&'p str>>) -> &'m [&'p str] {
    if !lead.status.holds_plots() {
        return &[];
    }
    by_buyer.get(&lead.id).map(Vec::as_slice).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use pretty_assertions::assert_eq;
    use sitedesk_test_utils::fixtures::date;

    fn pipeline() -> SalesPipeline {
        SalesPipeline::new(seed::leads().unwrap()).unwrap()
    }

    fn form(value: &str) -> LeadForm {
        LeadForm {
            name: "Kavya Rao".into(),
            interest: "Corner plot".into(),
            value: value.into(),
            broker_id: "4".into(),
            ..LeadForm::default()
        }
    }

    #[test]
    fn new_lead_goes_first_with_next_id() {
        let mut pipeline = pipeline();
        let id = pipeline.add_lead(form("6500000"), date(15)).unwrap();
        assert_eq!(id, 8);

        let lead = &pipeline.leads()[0];
        assert_eq!(lead.id, 8);
        assert_eq!(lead.status, LeadStatus::NewLead);
        assert_eq!(lead.last_contacted, date(15));
        assert_eq!(lead.broker_id, Some(4));
        assert_eq!(lead.source, "Website");
        assert!((lead.value - 6_500_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unparsable_value_is_zero() {
        let mut pipeline = SalesPipeline::default();
        let id = pipeline.add_lead(form("lots"), date(15)).unwrap();
        assert_eq!(id, 1);
        assert_eq!(pipeline.get(1).unwrap().value, 0.0);
    }

    #[test]
    fn blank_fields_rejected() {
        let mut pipeline = pipeline();
        let err = pipeline.add_lead(form(" "), date(15)).unwrap_err();
        assert!(matches!(err, DashboardError::MissingField { field: "value", .. }));
        assert_eq!(pipeline.leads().len(), 7);
    }

    #[test]
    fn open_value_skips_closed_leads() {
        let mut pipeline = pipeline();
        assert!((pipeline.open_value() - 38_500_000.0).abs() < 1.0);

        pipeline.move_lead(2, LeadStatus::Lost).unwrap();
        assert!((pipeline.open_value() - 34_000_000.0).abs() < 1.0);
        assert!(pipeline.move_lead(99, LeadStatus::Lost).unwrap_err().is_not_found());
    }

    #[test]
    fn columns_follow_status_order() {
        let pipeline = pipeline();
        let columns = pipeline.columns();
        assert_eq!(columns.len(), 7);
        assert_eq!(columns[0].0, LeadStatus::NewLead);
        assert_eq!(columns[0].1.len(), 1);
        assert!(columns.iter().all(|(_, leads)| leads.len() == 1));
    }

    #[test]
    fn activity_log_appends() {
        let mut pipeline = pipeline();
        pipeline
            .log_activity(1, ActivityKind::Meeting, date(16), " Site walk ", "Ria")
            .unwrap();
        let lead = pipeline.get(1).unwrap();
        assert_eq!(lead.activities.len(), 2);
        assert_eq!(lead.activities[1].notes, "Site walk");
        assert_eq!(lead.last_contacted, date(16));
    }

    #[test]
    fn held_plots_need_a_booking() {
        let plots = seed::plots();
        let by_buyer = plots_by_buyer(&plots);
        let pipeline = pipeline();

        let booked = pipeline.get(5).unwrap();
        assert_eq!(plots_held(booked, &by_buyer).len(), 24);
        let converted = pipeline.get(6).unwrap();
        assert_eq!(plots_held(converted, &by_buyer).len(), 38);
        let contacted = pipeline.get(1).unwrap();
        assert!(plots_held(contacted, &by_buyer).is_empty());
    }
}
