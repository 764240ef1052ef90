//! Debounced recipient lookup for file and folder sharing dialogs.
//!
//! The crate turns free-text input into a deduplicated, ordered list of
//! shareable recipients (users, groups, email addresses, remote accounts,
//! circles, rooms). Query edits are debounced, one remote lookup runs per
//! quiescence period through the [`ShareeSearch`] trait, the categorized
//! reply is flattened and filtered against a [`Blacklist`], and the result
//! lands in a row store the presentation layer reads through
//! [`ShareeModel::read`]. Everything observable is published as
//! [`ModelEvent`]s.

mod debounce;
mod error;
mod events;
mod fetch;
mod model;
mod parser;
mod store;
mod types;

pub use debounce::QUIESCENCE_WINDOW;
pub use error::TransportError;
pub use events::ModelEvent;
pub use fetch::ShareeSearch;
pub use model::ShareeModel;
pub use store::{
    ROLE_AUTO_COMPLETE_MATCH_TEXT, ROLE_DISPLAY_TEXT, ROLE_SHAREE_PAYLOAD, RoleValue,
};
pub use types::{
    Blacklist, LookupMode, SHAREE_PAGE, SHAREE_PAGE_SIZE, SearchRequest, ShareItemType, Sharee,
    ShareeType,
};
