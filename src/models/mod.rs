pub mod appointment;
pub mod nailtech;
pub mod report;
pub mod service;

pub use appointment::{AppointmentPayload, AppointmentRecord, ClientRef, TechRef};
pub use nailtech::{IdList, NailTech, ServiceIdRef, ServiceList, ServiceRef, TechnicianPayload};
pub use report::SalesRow;
pub use service::Service;
