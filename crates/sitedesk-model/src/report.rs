//! Daily progress reports (DPR)
//!
//! A report is a dated snapshot of the full work checklist plus site
//! details (weather, manpower, materials, equipment) that reconciliation
//! ignores.

use crate::checklist::WorkProgress;
use crate::error::ModelError;
use crate::id::ItemId;
use crate::inventory::Unit;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Progress report identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    /// Generate a fresh `dpr-<ulid>` id
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("dpr-{}", Ulid::new()))
    }

    /// Wrap an existing id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Weather on site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Weather {
    /// Clear skies
    #[default]
    Sunny,
    /// Overcast
    Cloudy,
    /// Rain
    Rainy,
    /// Strong wind
    Windy,
}

impl Weather {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Weather::Sunny => "Sunny",
            Weather::Cloudy => "Cloudy",
            Weather::Rainy => "Rainy",
            Weather::Windy => "Windy",
        }
    }
}

impl FromStr for Weather {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sunny" => Ok(Weather::Sunny),
            "Cloudy" => Ok(Weather::Cloudy),
            "Rainy" => Ok(Weather::Rainy),
            "Windy" => Ok(Weather::Windy),
            other => Err(ModelError::unknown("weather", other)),
        }
    }
}

/// Headcount on site for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manpower {
    /// Supervisors present
    pub supervisors: u32,
    /// Skilled workers present
    pub skilled_workers: u32,
    /// Unskilled workers present
    pub unskilled_workers: u32,
}

impl Manpower {
    /// Total headcount
    #[inline]
    #[must_use]
    pub fn total(&self) -> u32 {
        self.supervisors
            .saturating_add(self.skilled_workers)
            .saturating_add(self.unskilled_workers)
    }
}

/// Material drawn from inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialUsage {
    /// Inventory item id (e.g. `INV-001`)
    pub item_id: String,
    /// Quantity consumed
    pub quantity: f64,
    /// Unit of the quantity
    pub unit: Unit,
}

/// Machinery hours logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentUsage {
    /// Equipment name
    pub equipment_name: String,
    /// Hours used
    pub hours: f64,
}

/// One submitted daily progress report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    /// Report id
    pub id: ReportId,
    /// Calendar date the report covers
    pub date: NaiveDate,
    /// Weather on site
    pub weather: Weather,
    /// Headcount
    pub manpower: Manpower,
    /// Full checklist snapshot
    pub work_progress: Vec<WorkProgress>,
    /// Materials consumed
    pub materials_consumed: Vec<MaterialUsage>,
    /// Equipment used
    pub equipment_used: Vec<EquipmentUsage>,
    /// Free-text hindrances
    pub hindrances: String,
    /// Name of the submitter
    pub submitted_by: String,
}

impl ProgressReport {
    /// Ids marked complete in this report
    #[must_use]
    pub fn completed_ids(&self) -> HashSet<ItemId> {
        self.work_progress
            .iter()
            .filter(|item| item.completed)
            .map(|item| item.id.clone())
            .collect()
    }

    /// Completed and total checklist counts
    #[must_use]
    pub fn checklist_progress(&self) -> (usize, usize) {
        let done = self.work_progress.iter().filter(|item| item.completed).count();
        (done, self.work_progress.len())
    }

    /// Apply a patch, replacing every field the patch carries
    pub fn apply(&mut self, patch: ReportPatch) {
        let ReportPatch {
            date,
            weather,
            manpower,
            work_progress,
            materials_consumed,
            equipment_used,
            hindrances,
        } = patch;

        if let Some(date) = date {
            self.date = date;
        }
        if let Some(weather) = weather {
            self.weather = weather;
        }
        if let Some(manpower) = manpower {
            self.manpower = manpower;
        }
        if let Some(work_progress) = work_progress {
            self.work_progress = work_progress;
        }
        if let Some(materials) = materials_consumed {
            self.materials_consumed = materials;
        }
        if let Some(equipment) = equipment_used {
            self.equipment_used = equipment;
        }
        if let Some(hindrances) = hindrances {
            self.hindrances = hindrances;
        }
    }
}

/// Form state for a new report
///
/// The date is optional so that a missing date can be reported as a
/// required-field failure instead of being impossible to express.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    /// Report date
    pub date: Option<NaiveDate>,
    /// Weather on site
    pub weather: Weather,
    /// Headcount
    pub manpower: Manpower,
    /// Checklist snapshot
    pub work_progress: Vec<WorkProgress>,
    /// Materials consumed
    pub materials_consumed: Vec<MaterialUsage>,
    /// Equipment used
    pub equipment_used: Vec<EquipmentUsage>,
    /// Free-text hindrances
    pub hindrances: String,
    /// Submitter name
    pub submitted_by: String,
}

impl ReportDraft {
    /// Draft for `date` starting from a checklist template
    #[must_use]
    pub fn new(date: NaiveDate, work_progress: Vec<WorkProgress>) -> Self {
        Self {
            date: Some(date),
            work_progress,
            ..Self::default()
        }
    }

    /// Set weather
    #[inline]
    #[must_use]
    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = weather;
        self
    }

    /// Set manpower
    #[inline]
    #[must_use]
    pub fn with_manpower(mut self, manpower: Manpower) -> Self {
        self.manpower = manpower;
        self
    }

    /// Set submitter
    #[inline]
    #[must_use]
    pub fn with_submitter(mut self, name: impl Into<String>) -> Self {
        self.submitted_by = name.into();
        self
    }

    /// Set hindrances
    #[inline]
    #[must_use]
    pub fn with_hindrances(mut self, text: impl Into<String>) -> Self {
        self.hindrances = text.into();
        self
    }

    /// Flip one checklist item by id; unknown ids are ignored
    pub fn toggle(&mut self, id: &ItemId) {
        if let Some(item) = self.work_progress.iter_mut().find(|item| &item.id == id) {
            item.toggle();
        }
    }

    /// Mark the given ids complete
    #[must_use]
    pub fn completing<'a>(mut self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        let ids: HashSet<&str> = ids.into_iter().collect();
        for item in &mut self.work_progress {
            if ids.contains(item.id.as_str()) {
                item.completed = true;
            }
        }
        self
    }

    /// Add a material line
    pub fn add_material(&mut self, usage: MaterialUsage) {
        self.materials_consumed.push(usage);
    }

    /// Remove a material line by position
    pub fn remove_material(&mut self, index: usize) {
        if index < self.materials_consumed.len() {
            self.materials_consumed.remove(index);
        }
    }

    /// Add an equipment line
    pub fn add_equipment(&mut self, usage: EquipmentUsage) {
        self.equipment_used.push(usage);
    }

    /// Remove an equipment line by position
    pub fn remove_equipment(&mut self, index: usize) {
        if index < self.equipment_used.len() {
            self.equipment_used.remove(index);
        }
    }

    /// Turn the draft into a report with the given id
    ///
    /// Returns `None` when the draft has no date.
    #[must_use]
    pub fn into_report(self, id: ReportId) -> Option<ProgressReport> {
        Some(ProgressReport {
            id,
            date: self.date?,
            weather: self.weather,
            manpower: self.manpower,
            work_progress: self.work_progress,
            materials_consumed: self.materials_consumed,
            equipment_used: self.equipment_used,
            hindrances: self.hindrances,
            submitted_by: self.submitted_by,
        })
    }

    /// Draft prefilled from an existing report
    #[must_use]
    pub fn from_report(report: &ProgressReport) -> Self {
        Self {
            date: Some(report.date),
            weather: report.weather,
            manpower: report.manpower,
            work_progress: report.work_progress.clone(),
            materials_consumed: report.materials_consumed.clone(),
            equipment_used: report.equipment_used.clone(),
            hindrances: report.hindrances.clone(),
            submitted_by: report.submitted_by.clone(),
        }
    }

    /// Patch that replaces every editable field with this draft's values
    #[must_use]
    pub fn into_patch(self) -> ReportPatch {
        ReportPatch {
            date: self.date,
            weather: Some(self.weather),
            manpower: Some(self.manpower),
            work_progress: Some(self.work_progress),
            materials_consumed: Some(self.materials_consumed),
            equipment_used: Some(self.equipment_used),
            hindrances: Some(self.hindrances),
        }
    }
}

/// Edit to an existing report; `None` fields are left as they are
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPatch {
    /// New date
    pub date: Option<NaiveDate>,
    /// New weather
    pub weather: Option<Weather>,
    /// New manpower
    pub manpower: Option<Manpower>,
    /// New checklist snapshot
    pub work_progress: Option<Vec<WorkProgress>>,
    /// New materials list
    pub materials_consumed: Option<Vec<MaterialUsage>>,
    /// New equipment list
    pub equipment_used: Option<Vec<EquipmentUsage>>,
    /// New hindrances text
    pub hindrances: Option<String>,
}

impl ReportPatch {
    /// Patch that only replaces the checklist
    #[must_use]
    pub fn checklist(work_progress: Vec<WorkProgress>) -> Self {
        Self {
            work_progress: Some(work_progress),
            ..Self::default()
        }
    }

    /// Patch that only moves the report date
    #[must_use]
    pub fn date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    fn checklist() -> Vec<WorkProgress> {
        vec![
            WorkProgress::new("infrastructure-0", "Road Base Course", "Infrastructure", false),
            WorkProgress::new("infrastructure-1", "Roadside Curbing", "Infrastructure", false),
        ]
    }

    #[test]
    fn draft_without_date_is_rejected() {
        let draft = ReportDraft::default();
        assert!(draft.into_report(ReportId::new("dpr-x")).is_none());
    }

    #[test]
    fn draft_completing_marks_ids() {
        let draft = ReportDraft::new(day(14), checklist()).completing(["infrastructure-1"]);
        let report = draft.into_report(ReportId::new("dpr-1")).unwrap();
        let ids = report.completed_ids();
        assert_eq!(ids.len(), 1);
        assert!(ids.contains(&ItemId::new("infrastructure-1")));
        assert_eq!(report.checklist_progress(), (1, 2));
    }

    #[test]
    fn patch_replaces_only_present_fields() {
        let mut report = ReportDraft::new(day(13), checklist())
            .with_weather(Weather::Rainy)
            .with_hindrances("water logging")
            .into_report(ReportId::new("dpr-2"))
            .unwrap();

        report.apply(ReportPatch::date(day(15)));

        assert_eq!(report.date, day(15));
        assert_eq!(report.weather, Weather::Rainy);
        assert_eq!(report.hindrances, "water logging");
    }

    #[test]
    fn generated_ids_are_prefixed() {
        let id = ReportId::generate();
        assert!(id.as_str().starts_with("dpr-"));
        assert_ne!(id, ReportId::generate());
    }

    #[test]
    fn material_lines_removed_by_position() {
        let mut draft = ReportDraft::new(day(14), Vec::new());
        draft.add_material(MaterialUsage {
            item_id: "INV-001".into(),
            quantity: 50.0,
            unit: Unit::Bags,
        });
        draft.remove_material(3);
        assert_eq!(draft.materials_consumed.len(), 1);
        draft.remove_material(0);
        assert!(draft.materials_consumed.is_empty());
    }

    #[test]
    fn weather_parses_labels() {
        assert_eq!("Windy".parse::<Weather>().unwrap(), Weather::Windy);
        assert!("Foggy".parse::<Weather>().is_err());
    }
}
