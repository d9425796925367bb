//! Topic naming: `scbe.<tier>.<tongue>.<event_suffix>`.

use std::fmt;

use scbe_mnemonic::Tongue;

use crate::error::{BusError, BusResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Public,
    Private,
    Hidden,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Public => "public",
            Tier::Private => "private",
            Tier::Hidden => "hidden",
        }
    }

    pub fn from_str(s: &str) -> Option<Tier> {
        match s {
            "public" => Some(Tier::Public),
            "private" => Some(Tier::Private),
            "hidden" => Some(Tier::Hidden),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub tier: Tier,
    pub tongue: Tongue,
    pub event_suffix: String,
}

impl Topic {
    pub fn new(tier: Tier, tongue: Tongue, event_suffix: impl Into<String>) -> Self {
        Self { tier, tongue, event_suffix: event_suffix.into() }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scbe.{}.{}.{}", self.tier.as_str(), self.tongue.code().to_lowercase(), self.event_suffix)
    }
}

/// Parses `scbe.<tier>.<tongue>.<event_suffix>`. `event_suffix` may itself
/// contain dots, so it is everything after the third segment.
pub fn parse_topic(s: &str) -> BusResult<Topic> {
    let mut parts = s.splitn(4, '.');
    let prefix = parts.next().unwrap_or("");
    let tier_str = parts.next().unwrap_or("");
    let tongue_str = parts.next().unwrap_or("");
    let event_suffix = parts.next();

    if prefix != "scbe" {
        return Err(BusError::InvalidTopic(s.to_string()));
    }
    let tier = Tier::from_str(tier_str).ok_or_else(|| BusError::InvalidTopic(s.to_string()))?;
    let tongue = Tongue::from_code(&tongue_str.to_uppercase()).ok_or_else(|| BusError::InvalidTopic(s.to_string()))?;
    let event_suffix = event_suffix.ok_or_else(|| BusError::InvalidTopic(s.to_string()))?;

    Ok(Topic::new(tier, tongue, event_suffix))
}

/// `pattern` is either an exact topic (`scbe.public.ko.heartbeat`) or a
/// tier wildcard (`scbe.public.*`), matching every tongue/event under that
/// tier.
pub fn topic_matches(topic: &str, pattern: &str) -> bool {
    if let Some(tier_prefix) = pattern.strip_suffix(".*") {
        let expected = format!("{tier_prefix}.");
        return topic.starts_with(&expected);
    }
    topic == pattern
}
