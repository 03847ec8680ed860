//! Page-level load and save policies.
//!
//! Reads degrade to an empty view with a logged diagnostic; the page renders
//! with whatever arrived. Writes surface their failure to the user and leave
//! the draft intact so the save can be retried.

use crate::api::SalonBackend;
use crate::auth::Role;
use crate::errors::AppError;
use crate::forms::{AppointmentForm, TechnicianForm, Validation};
use crate::models::{NailTech, SalesRow, Service};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Validation wants an explicit user confirmation first; nothing was sent.
    ConfirmationRequired,
    /// A submission was already in flight or finished; nothing was sent.
    Ignored,
}

pub async fn load_nail_techs(api: &dyn SalonBackend) -> Vec<NailTech> {
    match api.list_nail_techs().await {
        Ok(techs) => techs,
        Err(err) => {
            tracing::error!("error loading nail techs: {err:#}");
            Vec::new()
        }
    }
}

pub async fn load_services(api: &dyn SalonBackend) -> Vec<Service> {
    match api.list_services().await {
        Ok(services) => services,
        Err(err) => {
            tracing::error!("error loading services: {err:#}");
            Vec::new()
        }
    }
}

// Viewers get an access-denied message, not an empty table.
pub async fn load_daily_report(
    api: &dyn SalonBackend,
    role: Role,
) -> Result<Vec<SalesRow>, AppError> {
    if !role.capabilities().view_report {
        return Err(AppError::Unauthorized);
    }
    match api.daily_sales_report().await {
        Ok(rows) => Ok(rows),
        Err(err) => {
            tracing::error!("error loading sales report: {err:#}");
            Ok(Vec::new())
        }
    }
}

pub async fn save_technician(
    api: &dyn SalonBackend,
    form: &TechnicianForm,
    editing: Option<i64>,
) -> Result<(), AppError> {
    let payload = form.serialize()?;
    let result = match editing {
        Some(id) => api.update_nail_tech(id, &payload).await,
        None => api.create_nail_tech(&payload).await,
    };
    result.map_err(AppError::Network)
}

pub async fn delete_technician(api: &dyn SalonBackend, id: i64) -> Result<(), AppError> {
    api.delete_nail_tech(id).await.map_err(AppError::Network)
}

/// Validates and submits an appointment draft, driving the form's phase
/// machine. `confirmed_short_slot` is the user's answer to the short-slot
/// prompt; declining abandons the save without error.
pub async fn save_appointment(
    api: &dyn SalonBackend,
    form: &mut AppointmentForm,
    editing: Option<i64>,
    confirmed_short_slot: bool,
) -> Result<SaveOutcome, AppError> {
    if let Validation::NeedsConfirmation { .. } = form.validate()? {
        if !confirmed_short_slot {
            return Ok(SaveOutcome::ConfirmationRequired);
        }
    }

    let Some(payload) = form.begin_submit() else {
        return Ok(SaveOutcome::Ignored);
    };

    let result = match editing {
        Some(id) => api.update_appointment(id, &payload).await,
        None => api.create_appointment(&payload).await,
    };

    match result {
        Ok(()) => {
            form.mark_submitted();
            Ok(SaveOutcome::Saved)
        }
        Err(err) => {
            form.mark_failed();
            Err(AppError::Network(err))
        }
    }
}
