//! Typed configuration for the governance kernel's ambient surface: replay
//! guard tuning, fusion weights, decision thresholds, swarm quarantine
//! consensus, and agent lifecycle timing (spec.md §6). Also carries the
//! crate-wide tracing bootstrap used by anything with a process entry
//! point.

pub mod config;
pub mod env;
pub mod schema;

pub use config::load_config;
pub use env::apply_env_overrides;
pub use schema::{
    AgentLifecycleConfig, Config, ConfigError, ConfigResult, FusionWeights, ReplayConfig, StoreKind,
    SwarmQuarantineConfig, Thresholds,
};

/// Initializes the global `tracing` subscriber with target, thread ID, and
/// level reporting, honoring `RUST_LOG` for filtering. Call once from a
/// process entry point; library code should never call this.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("governance kernel configuration initialized");
}
