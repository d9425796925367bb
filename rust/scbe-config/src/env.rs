//! Environment-variable overrides, applied after the file is loaded and
//! before validation — env always wins over file, file always wins over
//! defaults.

use std::env;

use crate::schema::{Config, ConfigError, ConfigResult, StoreKind};

fn parse_env<T: std::str::FromStr>(key: &str) -> ConfigResult<Option<T>> {
    match env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvValue { key: key.to_string(), value }),
        Err(_) => Ok(None),
    }
}

/// Applies `SCBE_*` overrides to `config` in place.
pub fn apply_env_overrides(config: &mut Config) -> ConfigResult<()> {
    if let Some(v) = parse_env::<u64>("SCBE_REPLAY_TTL_SECONDS")? {
        config.replay.ttl_seconds = v;
    }
    if let Ok(kind) = env::var("SCBE_REPLAY_STORE_KIND") {
        match kind.to_lowercase().as_str() {
            "memory" => config.replay.store = StoreKind::Memory,
            "kv" => {
                let endpoint = env::var("SCBE_REPLAY_STORE_ENDPOINT").unwrap_or_default();
                config.replay.store = StoreKind::Kv { endpoint };
            }
            other => return Err(ConfigError::InvalidEnvValue { key: "SCBE_REPLAY_STORE_KIND".to_string(), value: other.to_string() }),
        }
    }

    if let Some(v) = parse_env::<f64>("SCBE_FUSION_W_H")? {
        config.fusion_weights.w_h = v;
    }
    if let Some(v) = parse_env::<f64>("SCBE_FUSION_W_S")? {
        config.fusion_weights.w_s = v;
    }
    if let Some(v) = parse_env::<f64>("SCBE_FUSION_W_G")? {
        config.fusion_weights.w_g = v;
    }

    if let Some(v) = parse_env::<f64>("SCBE_THRESHOLD_QUARANTINE")? {
        config.thresholds.quarantine = v;
    }
    if let Some(v) = parse_env::<f64>("SCBE_THRESHOLD_ALLOW")? {
        config.thresholds.allow = v;
    }
    if let Some(v) = parse_env::<f64>("SCBE_THRESHOLD_MEMORY_WRITE")? {
        config.thresholds.memory_write = v;
    }

    if let Some(v) = parse_env::<u32>("SCBE_SWARM_QUARANTINE_NEIGHBORS")? {
        config.swarm_quarantine.neighbor_count = v;
    }
    if let Some(v) = parse_env::<u32>("SCBE_SWARM_QUARANTINE_SUSPICION")? {
        config.swarm_quarantine.suspicion_threshold = v;
    }

    if let Some(v) = parse_env::<u64>("SCBE_HEARTBEAT_INTERVAL_SECS")? {
        config.agent_lifecycle.heartbeat_interval_secs = v;
    }
    if let Some(v) = parse_env::<u64>("SCBE_AGENT_TIMEOUT_SECS")? {
        config.agent_lifecycle.agent_timeout_secs = v;
    }
    if let Some(v) = parse_env::<f64>("SCBE_COHERENCE_DECAY_RATE")? {
        config.agent_lifecycle.coherence_decay_rate = v;
    }

    Ok(())
}
