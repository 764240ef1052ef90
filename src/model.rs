use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::debounce::{DebounceController, QUIESCENCE_WINDOW};
use crate::events::{EventHub, ModelEvent};
use crate::fetch::{FetchOrchestrator, ShareeSearch};
use crate::parser::parse_sharees;
use crate::store::{ListStore, RoleValue};
use crate::types::{Blacklist, LookupMode, SearchRequest, ShareItemType, Sharee};

/// Debounced recipient lookup model a sharing dialog binds to.
///
/// The host owns the model on its event loop thread and drives it by calling
/// [`tick`](Self::tick) regularly. A query edit arms the quiescence window;
/// once it elapses one remote lookup is issued, and its reply is parsed,
/// filtered against the blacklist, and committed to the row store under the
/// reset protocol. Observers follow along through [`subscribe`](Self::subscribe).
pub struct ShareeModel {
    query: String,
    target_is_folder: bool,
    lookup_mode: LookupMode,
    account: Option<Arc<dyn ShareeSearch>>,
    blacklist: Blacklist,
    debounce: DebounceController,
    fetch: FetchOrchestrator,
    store: ListStore,
    events: EventHub,
}

impl ShareeModel {
    #[must_use]
    pub fn new() -> Self {
        Self::with_quiescence_window(QUIESCENCE_WINDOW)
    }

    /// Build a model with a custom quiescence window. Production code wants
    /// [`ShareeModel::new`]; tests shrink the window to keep runs fast.
    #[must_use]
    pub fn with_quiescence_window(window: Duration) -> Self {
        Self {
            query: String::new(),
            target_is_folder: false,
            lookup_mode: LookupMode::default(),
            account: None,
            blacklist: Blacklist::new(),
            debounce: DebounceController::new(window),
            fetch: FetchOrchestrator::new(),
            store: ListStore::default(),
            events: EventHub::new(),
        }
    }

    /// Register an observer. Events queue on the returned channel until read.
    pub fn subscribe(&mut self) -> Receiver<ModelEvent> {
        self.events.subscribe()
    }

    // ------------------------------ setters ------------------------------

    /// Update the search text and restart the quiescence window. No-op when
    /// the text is unchanged.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        self.query = query;
        self.events.emit(ModelEvent::QueryChanged(self.query.clone()));
        self.debounce.note_change(Instant::now());
    }

    pub fn set_target_is_folder(&mut self, target_is_folder: bool) {
        if target_is_folder == self.target_is_folder {
            return;
        }
        self.target_is_folder = target_is_folder;
        self.events
            .emit(ModelEvent::TargetIsFolderChanged(target_is_folder));
    }

    pub fn set_lookup_mode(&mut self, lookup_mode: LookupMode) {
        if lookup_mode == self.lookup_mode {
            return;
        }
        self.lookup_mode = lookup_mode;
        self.events.emit(ModelEvent::LookupModeChanged(lookup_mode));
    }

    /// Attach (or detach) the account connection lookups go through.
    /// Unchanged handles, compared by identity, are a no-op.
    pub fn set_account(&mut self, account: Option<Arc<dyn ShareeSearch>>) {
        let unchanged = match (&self.account, &account) {
            (None, None) => true,
            (Some(current), Some(next)) => Arc::ptr_eq(current, next),
            _ => false,
        };
        if unchanged {
            return;
        }
        self.account = account;
        self.events.emit(ModelEvent::AccountChanged);
    }

    /// Replace the set of recipients already shared with.
    pub fn set_blacklist(&mut self, blacklist: Blacklist) {
        if blacklist == self.blacklist {
            return;
        }
        self.blacklist = blacklist;
        self.events.emit(ModelEvent::BlacklistChanged);
    }

    // ---------------------------- read surface ----------------------------

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn target_is_folder(&self) -> bool {
        self.target_is_folder
    }

    #[must_use]
    pub fn lookup_mode(&self) -> LookupMode {
        self.lookup_mode
    }

    /// True while a lookup has been issued whose reply has not been pumped.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.fetch.busy()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.store.row_count()
    }

    /// Read one field of one committed row; see the `ROLE_` constants.
    #[must_use]
    pub fn read(&self, index: usize, role: &str) -> Option<RoleValue> {
        self.store.read(index, role)
    }

    /// The committed list as a slice, in lookup order.
    #[must_use]
    pub fn sharees(&self) -> &[Sharee] {
        self.store.sharees()
    }

    // ----------------------------- loop pump -----------------------------

    /// Drive debounce expiry and reply handling. Call from the host loop.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// [`tick`](Self::tick) with an explicit clock, for deterministic tests.
    pub fn tick_at(&mut self, now: Instant) {
        if self.debounce.poll(now) {
            self.trigger_lookup();
        }
        self.pump_replies();
    }

    fn trigger_lookup(&mut self) {
        let account = match &self.account {
            Some(account) if !self.query.is_empty() => Arc::clone(account),
            _ => {
                log::info!("not fetching sharees for query {:?}", self.query);
                return;
            }
        };

        let item_type = if self.target_is_folder {
            ShareItemType::Folder
        } else {
            ShareItemType::File
        };
        let request = SearchRequest::new(
            self.query.clone(),
            item_type,
            self.lookup_mode == LookupMode::GlobalSearch,
        );

        self.events.emit(ModelEvent::BusyChanged(true));
        self.fetch.issue(account, request);
    }

    fn pump_replies(&mut self) {
        while let Some(reply) = self.fetch.try_recv() {
            self.events.emit(ModelEvent::BusyChanged(false));
            match reply {
                Ok(document) => self.commit(&document),
                Err(error) => self.events.emit(ModelEvent::ErrorOccurred(error)),
            }
        }
    }

    fn commit(&mut self, document: &Value) {
        let sharees = parse_sharees(document, &self.blacklist);
        log::info!(
            "sharee lookup for {:?} produced {} candidates",
            self.query,
            sharees.len()
        );

        self.events.emit(ModelEvent::ListAboutToReset);
        self.store.replace(sharees);
        self.events.emit(ModelEvent::ListReset);
        self.events.emit(ModelEvent::ResultsReady);
    }
}

impl Default for ShareeModel {
    fn default() -> Self {
        Self::new()
    }
}
