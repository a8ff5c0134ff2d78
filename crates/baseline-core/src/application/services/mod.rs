//! Application services: one per use case family.
//!
//! Services own their ports as boxed trait objects and are wired at the
//! composition root. They contain orchestration only; rules live in
//! `crate::domain`.

pub mod environment_service;
pub mod header_service;
pub mod publish_service;

pub use environment_service::{
    BuildCachePlan, CacheCredentials, EnvironmentReport, EnvironmentService, LocalCacheSettings,
    RemoteCacheSettings,
};
pub use header_service::HeaderService;
pub use publish_service::{
    CredentialSource, PlannedPublication, PublishCredentials, PublishPlan, PublishService,
};
