use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use serde_json::Value;

use crate::error::TransportError;
use crate::types::SearchRequest;

/// Remote lookup endpoint, the one external collaborator of this crate.
///
/// Implementations are invoked on a worker thread, one call per issued
/// lookup, and may block for as long as the transport needs. Transport
/// timeouts are their responsibility.
pub trait ShareeSearch: Send + Sync {
    /// Execute one lookup and return the raw reply document.
    fn search(&self, request: &SearchRequest) -> Result<Value, TransportError>;
}

pub(crate) type FetchReply = Result<Value, TransportError>;

/// Tracks in-flight remote lookups and the busy lifecycle.
///
/// Replies land on a long-lived channel drained by the host loop, so
/// completion handling always runs on the thread owning the model. A new
/// lookup never cancels an outstanding one: replies apply in arrival order,
/// and a slow stale reply can overwrite a newer one. Known trade-off,
/// inherited deliberately.
pub(crate) struct FetchOrchestrator {
    reply_tx: Sender<FetchReply>,
    reply_rx: Receiver<FetchReply>,
    busy: bool,
}

impl FetchOrchestrator {
    pub(crate) fn new() -> Self {
        let (reply_tx, reply_rx) = mpsc::channel();
        Self {
            reply_tx,
            reply_rx,
            busy: false,
        }
    }

    pub(crate) fn busy(&self) -> bool {
        self.busy
    }

    /// Spawn one lookup on a worker thread.
    pub(crate) fn issue(&mut self, backend: Arc<dyn ShareeSearch>, request: SearchRequest) {
        self.busy = true;
        let tx = self.reply_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(backend.search(&request));
        });
    }

    /// Take the next completed reply, if any, without blocking.
    pub(crate) fn try_recv(&mut self) -> Option<FetchReply> {
        match self.reply_rx.try_recv() {
            Ok(reply) => {
                self.busy = false;
                Some(reply)
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}
