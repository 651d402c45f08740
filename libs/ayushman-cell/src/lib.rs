pub mod gateway;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use gateway::{CardGateway, MockCardGateway};
pub use models::{AyushmanCard, AyushmanError, CardStatus, VerificationRecord, VerificationStatus};
pub use router::ayushman_routes;
pub use services::VerificationService;
