//! The publish/subscribe contract every bus backend implements.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::BusResult;
use crate::message::Message;

#[async_trait]
pub trait EventBus: Send + Sync {
    async fn publish(&self, message: Message) -> BusResult<()>;

    /// Subscribes to an exact topic or a tier wildcard
    /// (`scbe.<tier>.*`). Returns a channel that receives every future
    /// message matching `pattern`; messages published before the call
    /// are not replayed.
    async fn subscribe(&self, pattern: &str) -> BusResult<mpsc::Receiver<Message>>;
}
