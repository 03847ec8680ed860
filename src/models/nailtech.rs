use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a technician's `services` relation. Producers disagree on the
/// shape: some send `{"id": 3}` objects, some send bare ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceRef {
    Entry { id: Option<Value> },
    Bare(Value),
}

/// The `serviceIds` relation: a list of scalars, or a single comma-separated
/// string like `"1, 2,3"`. Anything else is carried along and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdList {
    Ids(Vec<Value>),
    Csv(String),
    Other(Value),
}

/// The `services` relation: an array in either element shape. Any other value
/// is carried along and reads as no assignment, so one drifted record cannot
/// poison a whole roster response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceList {
    Refs(Vec<ServiceRef>),
    Other(Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NailTech {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// JSON-encoded list of weekday names, parsed defensively on hydration.
    #[serde(default)]
    pub availability_json: Option<String>,
    #[serde(default)]
    pub services: Option<ServiceList>,
    #[serde(default)]
    pub service_ids: Option<IdList>,
}

/// Technician create/update shape: the service selection goes out in both
/// encodings at once so either backend schema can consume it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub availability_json: String,
    pub service_ids: Vec<i64>,
    pub services: Vec<ServiceIdRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceIdRef {
    pub id: i64,
}
