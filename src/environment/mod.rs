//! Build environment access.
//!
//! Providers read their variables through an [`EnvSource`] so tests can
//! substitute a fixed map for the process environment.

pub mod audit;
pub mod detection;
pub mod source;

pub use audit::{audit_env, AuditReport, AuditTarget};
pub use detection::{DetectedProvider, ProviderDetector, ProviderKind};
pub use source::{
    is_env_flag_true, parse_optional_int, read_env, read_optional, EnvSource, MapEnv, ProcessEnv,
};
