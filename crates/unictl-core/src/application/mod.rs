//! Application layer: orchestration of the deployment use cases.
//!
//! Services wire domain logic to the outside world through ports. This
//! layer decides *when* elevation happens and *which* script runs; the
//! domain decides what the scripts contain.

pub mod context;
pub mod elevation;
pub mod error;
pub mod ports;
pub mod services;
pub mod unit_template;

pub use context::RunId;
pub use elevation::with_elevation;
pub use error::ApplicationError;
pub use services::{GenerateService, InspectService, LifecycleService, SetupService};
