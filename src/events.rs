use std::sync::mpsc::{self, Receiver, Sender};

use crate::error::TransportError;
use crate::types::LookupMode;

/// Notifications published by [`ShareeModel`](crate::ShareeModel).
///
/// Every setter raises its changed event only when the value actually
/// changed. `ListAboutToReset` and `ListReset` bracket each wholesale
/// replacement of the committed list; observers must not read rows between
/// the two.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    QueryChanged(String),
    TargetIsFolderChanged(bool),
    LookupModeChanged(LookupMode),
    AccountChanged,
    BlacklistChanged,
    BusyChanged(bool),
    ListAboutToReset,
    ListReset,
    ResultsReady,
    ErrorOccurred(TransportError),
}

/// Fans model events out to any number of channel subscribers.
///
/// Subscribers whose receiving end has been dropped are pruned on the next
/// emit.
#[derive(Default)]
pub(crate) struct EventHub {
    subscribers: Vec<Sender<ModelEvent>>,
}

impl EventHub {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn subscribe(&mut self) -> Receiver<ModelEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub(crate) fn emit(&mut self, event: ModelEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
