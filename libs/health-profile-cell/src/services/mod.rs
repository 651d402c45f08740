pub mod profile;
pub mod share;

pub use profile::HealthProfileService;
pub use share::ShareTokenService;
