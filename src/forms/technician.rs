use std::collections::{BTreeSet, HashSet};

use chrono::Weekday;

use crate::catalog::{self, CategoryGroup};
use crate::errors::AppError;
use crate::models::{NailTech, ServiceIdRef, TechnicianPayload};

/// Canonical display and persistence order for availability days.
pub const DAY_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Draft of a technician profile under create or edit.
#[derive(Debug, Clone, Default)]
pub struct TechnicianForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    available_days: HashSet<Weekday>,
    service_ids: BTreeSet<i64>,
}

impl TechnicianForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from an existing record: availability JSON parsed defensively,
    /// service selection as the union of both assignment encodings.
    pub fn hydrate(tech: &NailTech) -> Self {
        Self {
            name: tech.name.clone(),
            email: tech.email.clone().unwrap_or_default(),
            phone: tech.phone.clone().unwrap_or_default(),
            available_days: parse_availability(tech.availability_json.as_deref()),
            service_ids: catalog::hydrated_ids_union(tech),
        }
    }

    pub fn service_ids(&self) -> &BTreeSet<i64> {
        &self.service_ids
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.service_ids.contains(&id)
    }

    pub fn is_available(&self, day: Weekday) -> bool {
        self.available_days.contains(&day)
    }

    // canonical Monday..Sunday order, however the days were toggled
    pub fn ordered_days(&self) -> Vec<Weekday> {
        DAY_ORDER
            .into_iter()
            .filter(|d| self.available_days.contains(d))
            .collect()
    }

    pub fn toggle_service(&mut self, id: i64) {
        if !self.service_ids.remove(&id) {
            self.service_ids.insert(id);
        }
    }

    /// Bulk toggle for one category: clears it only when every service in it
    /// is already selected, otherwise selects all of it. A partially selected
    /// category fills in, never clears.
    pub fn toggle_category(&mut self, group: &CategoryGroup) {
        let all: Vec<i64> = group.services.iter().map(|s| s.id).collect();
        let fully_selected =
            !all.is_empty() && all.iter().all(|id| self.service_ids.contains(id));

        if fully_selected {
            for id in &all {
                self.service_ids.remove(id);
            }
        } else {
            self.service_ids.extend(all);
        }
    }

    pub fn toggle_day(&mut self, day: Weekday) {
        if !self.available_days.remove(&day) {
            self.available_days.insert(day);
        }
    }

    /// Wire payload for create/update: availability as a canonical-ordered
    /// JSON array of day names, services in both backend encodings at once.
    pub fn serialize(&self) -> Result<TechnicianPayload, AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::MissingRequiredField("name"));
        }

        let days: Vec<&str> = self.ordered_days().into_iter().map(day_name).collect();
        let service_ids: Vec<i64> = self.service_ids.iter().copied().collect();

        Ok(TechnicianPayload {
            name: name.to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            availability_json: serde_json::json!(days).to_string(),
            services: service_ids.iter().map(|&id| ServiceIdRef { id }).collect(),
            service_ids,
        })
    }
}

fn parse_availability(raw: Option<&str>) -> HashSet<Weekday> {
    let Some(raw) = raw else {
        return HashSet::new();
    };
    match parse_availability_strict(raw) {
        Ok(days) => days,
        Err(err) => {
            tracing::warn!("recovering from unreadable availability: {err}");
            HashSet::new()
        }
    }
}

// Unknown day names drop; non-array or invalid JSON is an error the hydration
// path recovers from.
pub(crate) fn parse_availability_strict(raw: &str) -> Result<HashSet<Weekday>, AppError> {
    let names: Vec<String> =
        serde_json::from_str(raw).map_err(|e| AppError::MalformedRecord(e.to_string()))?;
    Ok(names.iter().filter_map(|n| n.trim().parse().ok()).collect())
}
