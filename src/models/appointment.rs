use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::nailtech::ServiceRef;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TechRef {
    #[serde(default)]
    pub id: Option<i64>,
}

/// An appointment as returned by the backend for editing. Older records carry
/// flattened client fields, newer ones nest them; both are accepted and the
/// nested shape wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    #[serde(default)]
    pub client: Option<ClientRef>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub client_phone: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub nail_tech: Option<TechRef>,
    #[serde(default)]
    pub nail_tech_id: Option<i64>,
    #[serde(default)]
    pub services: Option<Vec<ServiceRef>>,
    #[serde(default)]
    pub service_ids: Option<Vec<Value>>,
}

/// Exact shape handed to the appointment create/update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub nail_tech_id: Option<i64>,
    pub service_ids: Vec<i64>,
}
