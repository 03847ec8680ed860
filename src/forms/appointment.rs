use std::collections::BTreeSet;

use chrono::NaiveTime;

use crate::catalog::{self, CategoryGroup};
use crate::errors::AppError;
use crate::models::{AppointmentPayload, AppointmentRecord, NailTech, Service};

// `Submitted` is terminal; a failed submit drops back to `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Draft,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Ok,
    /// Short slot stacked with many services. The caller must get an explicit
    /// user confirmation before submitting; declining just abandons the save.
    NeedsConfirmation {
        duration_minutes: i64,
        service_count: usize,
    },
}

/// Draft of an appointment being created or edited. The service selection is
/// kept consistent with the selected technician's eligible set: changing
/// technician prunes anything no longer offered.
#[derive(Debug, Clone)]
pub struct AppointmentForm {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    nail_tech_id: Option<i64>,
    service_ids: BTreeSet<i64>,
    phase: FormPhase,
}

impl AppointmentForm {
    pub fn new() -> Self {
        Self {
            client_name: String::new(),
            client_email: String::new(),
            client_phone: String::new(),
            date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            start_time: String::new(),
            end_time: String::new(),
            nail_tech_id: None,
            service_ids: BTreeSet::new(),
            phase: FormPhase::Draft,
        }
    }

    /// Draft prefilled from an existing record. Nested fields win over the
    /// flattened ones; blank nested values fall back.
    pub fn hydrate(record: &AppointmentRecord) -> Self {
        let client = record.client.clone().unwrap_or_default();

        let mut service_ids = match &record.services {
            Some(refs) => catalog::object_list_ids(refs),
            None => record
                .service_ids
                .as_deref()
                .map(catalog::scalar_ids)
                .unwrap_or_default(),
        };
        // the edit path treats id 0 as absent
        service_ids.remove(&0);

        Self {
            client_name: first_filled(client.name.as_deref(), record.client_name.as_deref()),
            client_email: first_filled(client.email.as_deref(), record.client_email.as_deref()),
            client_phone: first_filled(client.phone.as_deref(), record.client_phone.as_deref()),
            date: record.date.clone().unwrap_or_default(),
            start_time: record.start_time.clone().unwrap_or_default(),
            end_time: record.end_time.clone().unwrap_or_default(),
            nail_tech_id: record
                .nail_tech
                .as_ref()
                .and_then(|t| t.id)
                .or(record.nail_tech_id),
            service_ids,
            phase: FormPhase::Draft,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn nail_tech_id(&self) -> Option<i64> {
        self.nail_tech_id
    }

    pub fn service_ids(&self) -> &BTreeSet<i64> {
        &self.service_ids
    }

    // `None` means no technician is selected and everything is allowed; an id
    // with no match in the roster yields the empty set.
    pub fn eligible_ids(&self, roster: &[NailTech]) -> Option<BTreeSet<i64>> {
        let id = self.nail_tech_id?;
        Some(catalog::normalize_eligibility(
            roster.iter().find(|t| t.id == id),
        ))
    }

    pub fn selectable_services(
        &self,
        roster: &[NailTech],
        services: &[Service],
    ) -> Vec<CategoryGroup> {
        catalog::filter_and_group(services, self.eligible_ids(roster).as_ref())
    }

    pub fn select_technician(&mut self, id: Option<i64>, roster: &[NailTech]) {
        self.nail_tech_id = id;
        if let Some(allowed) = self.eligible_ids(roster) {
            self.service_ids.retain(|sid| allowed.contains(sid));
        }
    }

    // wholesale replacement: the picker reports the full selection each time
    pub fn select_services(&mut self, ids: impl IntoIterator<Item = i64>) {
        self.service_ids = ids.into_iter().collect();
    }

    pub fn validate(&self) -> Result<Validation, AppError> {
        if self.client_name.trim().is_empty() {
            return Err(AppError::MissingRequiredField("clientName"));
        }
        if self.date.trim().is_empty() {
            return Err(AppError::MissingRequiredField("date"));
        }
        if self.start_time.trim().is_empty() {
            return Err(AppError::MissingRequiredField("startTime"));
        }
        if self.end_time.trim().is_empty() {
            return Err(AppError::MissingRequiredField("endTime"));
        }
        if self.service_ids.is_empty() {
            return Err(AppError::NoServiceSelected);
        }

        if let Some(duration_minutes) = diff_minutes(&self.start_time, &self.end_time) {
            if duration_minutes <= 60 && self.service_ids.len() > 3 {
                return Ok(Validation::NeedsConfirmation {
                    duration_minutes,
                    service_count: self.service_ids.len(),
                });
            }
        }

        Ok(Validation::Ok)
    }

    pub fn serialize(&self) -> AppointmentPayload {
        AppointmentPayload {
            client_name: self.client_name.trim().to_string(),
            client_email: self.client_email.trim().to_string(),
            client_phone: self.client_phone.trim().to_string(),
            date: self.date.trim().to_string(),
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            nail_tech_id: self.nail_tech_id,
            service_ids: self.service_ids.iter().copied().collect(),
        }
    }

    /// Moves the form into `Submitting` and yields the wire payload. Yields
    /// nothing while a submission is in flight or after one succeeded, so a
    /// double click cannot produce a second request.
    pub fn begin_submit(&mut self) -> Option<AppointmentPayload> {
        if self.phase != FormPhase::Draft {
            return None;
        }
        self.phase = FormPhase::Submitting;
        Some(self.serialize())
    }

    pub fn mark_submitted(&mut self) {
        self.phase = FormPhase::Submitted;
    }

    pub fn mark_failed(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Draft;
        }
    }
}

impl Default for AppointmentForm {
    fn default() -> Self {
        Self::new()
    }
}

fn first_filled(nested: Option<&str>, flat: Option<&str>) -> String {
    nested
        .filter(|s| !s.is_empty())
        .or_else(|| flat.filter(|s| !s.is_empty()))
        .unwrap_or_default()
        .to_string()
}

// Naive clock difference in minutes; not date-aware, so an end time past
// midnight comes out negative. `None` when either time does not parse.
fn diff_minutes(start: &str, end: &str) -> Option<i64> {
    let start = NaiveTime::parse_from_str(start, "%H:%M").ok()?;
    let end = NaiveTime::parse_from_str(end, "%H:%M").ok()?;
    Some((end - start).num_minutes())
}
