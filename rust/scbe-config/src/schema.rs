//! The typed configuration surface: everything spec.md §6 names as
//! environment/config knobs, with the defaults it specifies.

use serde::{Deserialize, Serialize};

/// `(provider, request_id)` replay guard tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayConfig {
    #[serde(default = "default_replay_ttl_seconds")]
    pub ttl_seconds: u64,
    #[serde(default)]
    pub store: StoreKind,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self { ttl_seconds: default_replay_ttl_seconds(), store: StoreKind::default() }
    }
}

fn default_replay_ttl_seconds() -> u64 {
    60
}

/// Which `scbe_replay::ReplayStore` backend to construct.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum StoreKind {
    #[default]
    Memory,
    Kv {
        endpoint: String,
    },
}

/// Trust fusion weights: `trust = w_h*s_H + w_s*s_S + w_g*s_G`. Must sum to
/// 1 within floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionWeights {
    #[serde(default = "default_w_h")]
    pub w_h: f64,
    #[serde(default = "default_w_s")]
    pub w_s: f64,
    #[serde(default = "default_w_g")]
    pub w_g: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self { w_h: default_w_h(), w_s: default_w_s(), w_g: default_w_g() }
    }
}

fn default_w_h() -> f64 {
    0.4
}
fn default_w_s() -> f64 {
    0.35
}
fn default_w_g() -> f64 {
    0.25
}

/// Fused-trust action-classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_quarantine_threshold")]
    pub quarantine: f64,
    #[serde(default = "default_allow_threshold")]
    pub allow: f64,
    #[serde(default = "default_memory_write_threshold")]
    pub memory_write: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            quarantine: default_quarantine_threshold(),
            allow: default_allow_threshold(),
            memory_write: default_memory_write_threshold(),
        }
    }
}

fn default_quarantine_threshold() -> f64 {
    0.3
}
fn default_allow_threshold() -> f64 {
    0.7
}
fn default_memory_write_threshold() -> f64 {
    0.7
}

/// Swarm-level quarantine consensus: an agent is quarantined once at least
/// `neighbor_count` neighbors each report suspicion at or above
/// `suspicion_threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwarmQuarantineConfig {
    #[serde(default = "default_quarantine_neighbors")]
    pub neighbor_count: u32,
    #[serde(default = "default_quarantine_suspicion")]
    pub suspicion_threshold: u32,
}

impl Default for SwarmQuarantineConfig {
    fn default() -> Self {
        Self { neighbor_count: default_quarantine_neighbors(), suspicion_threshold: default_quarantine_suspicion() }
    }
}

fn default_quarantine_neighbors() -> u32 {
    3
}
fn default_quarantine_suspicion() -> u32 {
    3
}

/// Agent lifecycle timing: heartbeat cadence, silence timeout, coherence
/// decay rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentLifecycleConfig {
    #[serde(default = "default_heartbeat_interval_secs")]
    pub heartbeat_interval_secs: u64,
    #[serde(default = "default_agent_timeout_secs")]
    pub agent_timeout_secs: u64,
    #[serde(default = "default_coherence_decay_rate")]
    pub coherence_decay_rate: f64,
}

impl Default for AgentLifecycleConfig {
    fn default() -> Self {
        Self {
            heartbeat_interval_secs: default_heartbeat_interval_secs(),
            agent_timeout_secs: default_agent_timeout_secs(),
            coherence_decay_rate: default_coherence_decay_rate(),
        }
    }
}

fn default_heartbeat_interval_secs() -> u64 {
    5
}
fn default_agent_timeout_secs() -> u64 {
    15
}
fn default_coherence_decay_rate() -> f64 {
    0.001
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub replay: ReplayConfig,
    #[serde(default)]
    pub fusion_weights: FusionWeights,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub swarm_quarantine: SwarmQuarantineConfig,
    #[serde(default)]
    pub agent_lifecycle: AgentLifecycleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            replay: ReplayConfig::default(),
            fusion_weights: FusionWeights::default(),
            thresholds: Thresholds::default(),
            swarm_quarantine: SwarmQuarantineConfig::default(),
            agent_lifecycle: AgentLifecycleConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {value}")]
    InvalidEnvValue { key: String, value: String },
    #[error("validation failed: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Fusion weights must sum to 1 (within floating-point tolerance), and
/// thresholds/rates must fall in sane ranges.
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    let sum = config.fusion_weights.w_h + config.fusion_weights.w_s + config.fusion_weights.w_g;
    if (sum - 1.0).abs() > 1e-9 {
        return Err(ConfigError::Validation(format!("fusion weights must sum to 1.0, got {sum}")));
    }

    if config.thresholds.quarantine < 0.0 || config.thresholds.quarantine > 1.0 {
        return Err(ConfigError::Validation("quarantine threshold must be in [0, 1]".to_string()));
    }
    if config.thresholds.allow < 0.0 || config.thresholds.allow > 1.0 {
        return Err(ConfigError::Validation("allow threshold must be in [0, 1]".to_string()));
    }
    if config.thresholds.allow < config.thresholds.quarantine {
        return Err(ConfigError::Validation("allow threshold must be >= quarantine threshold".to_string()));
    }

    if let StoreKind::Kv { endpoint } = &config.replay.store {
        if endpoint.trim().is_empty() {
            return Err(ConfigError::Validation("kv replay store requires a non-empty endpoint".to_string()));
        }
    }

    Ok(())
}
