//! Application services (use-case orchestrators).

pub mod generate_service;
pub mod inspect_service;
pub mod lifecycle_service;
pub mod setup_service;

pub use generate_service::GenerateService;
pub use inspect_service::InspectService;
pub use lifecycle_service::LifecycleService;
pub use setup_service::SetupService;
