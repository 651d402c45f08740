pub mod error;
pub mod location;

pub use error::ApiError;
pub use location::Location;
