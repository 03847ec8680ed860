pub mod appointment;
pub mod technician;

pub use appointment::{AppointmentForm, FormPhase, Validation};
pub use technician::TechnicianForm;
