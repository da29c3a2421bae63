use tokio::sync::broadcast;

use tally_data::Transaction;

/// Typed application events. Components signal each other through
/// a [Dispatcher] instead of a string keyed global broadcast.
#[derive(Debug, Clone)]
pub enum Event {
    /// A new entry was appended to the ledger.
    TransactionAdded(Transaction),
    /// A settlement handoff arrived via deep link.
    TransferRequested { amount: i64, sender: String },
    /// The transfer flow was dismissed.
    TransferDismissed,
}

/// Fan-out dispatcher for [Event]s, one per application.
pub struct Dispatcher {
    sender: broadcast::Sender<Event>,
}

impl Dispatcher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Dispatcher { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Emit an event to all current subscribers. Returns the number
    /// of subscribers reached; an event without listeners is dropped.
    pub fn emit(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::new(16)
    }
}
