pub mod filter;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use filter::filter_appointments;
pub use models::{
    Appointment, AppointmentError, AppointmentFilter, AppointmentStatus, ConsultationMode,
};
pub use router::appointment_routes;
pub use services::BookingService;
