//! Types shared across the lookup pipeline and the read surface.

mod blacklist;
mod request;
mod sharee;

pub use blacklist::Blacklist;
pub use request::{LookupMode, SHAREE_PAGE, SHAREE_PAGE_SIZE, SearchRequest, ShareItemType};
pub use sharee::{Sharee, ShareeType};
