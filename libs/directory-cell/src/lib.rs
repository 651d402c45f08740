pub mod engine;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod router;
pub mod seed;
pub mod services;

// Re-export the pieces other cells lean on
pub use engine::{filter, FilterResult};
pub use models::{Doctor, DirectoryError, Hospital, SearchFilters, SortBy};
pub use registry::CareRegistry;
pub use router::directory_routes;
