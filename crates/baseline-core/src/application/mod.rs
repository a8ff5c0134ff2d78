//! Application layer: use cases, ports, and setting resolution.
//!
//! Depends inward on `crate::domain` and outward on nothing concrete.

pub mod error;
pub mod ports;
pub mod properties;
pub mod resolver;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ApplicationError;
pub use properties::Properties;
pub use resolver::{is_truthy, Channel, ConfigResolver, SettingSpec};
pub use services::{
    BuildCachePlan, EnvironmentReport, EnvironmentService, HeaderService, PublishPlan,
    PublishService,
};
