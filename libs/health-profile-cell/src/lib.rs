pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    EmergencySummary, HealthProfile, ProfileError, ShareCode, UpsertHealthProfileRequest,
    BLOOD_GROUPS,
};
pub use router::health_profile_routes;
pub use services::{HealthProfileService, ShareTokenService};
