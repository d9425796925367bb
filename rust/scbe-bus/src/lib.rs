//! Topic-addressed publish/subscribe event bus.
//!
//! - `topic`: `scbe.<tier>.<tongue>.<event_suffix>` naming and wildcard
//!   matching
//! - `message`: the wire `Message` shape and tongue-bound signing
//! - `bus`: the `EventBus` contract
//! - `mock`: an in-memory backend that exactly matches the contract, for
//!   tests and in-process deployments

pub mod bus;
pub mod error;
pub mod message;
pub mod mock;
pub mod topic;

pub use bus::EventBus;
pub use error::{BusError, BusResult};
pub use message::{decode_signed, encode_signed, sign_message, verify_signed_message, Message, SignedMessage};
pub use mock::{InMemoryEventBus, DEFAULT_SUBSCRIBER_CAPACITY};
pub use topic::{parse_topic, topic_matches, Tier, Topic};
