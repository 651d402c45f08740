pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{AmbulanceRequest, AmbulanceStatus, EmergencyContact, EmergencyError, HELPLINES};
pub use router::emergency_routes;
pub use services::DispatchService;
