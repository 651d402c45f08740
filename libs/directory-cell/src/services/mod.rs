pub mod hospital;
pub mod search;

pub use hospital::{HospitalFilter, HospitalSearchService};
pub use search::DoctorSearchService;
