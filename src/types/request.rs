use serde::Serialize;

/// Whether lookup is restricted to locally known recipients or may also
/// consult the global/federated directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupMode {
    #[default]
    LocalOnly,
    GlobalSearch,
}

/// Kind of item being shared, as the remote endpoint spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareItemType {
    File,
    Folder,
}

impl ShareItemType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

/// Only the first page of results is ever requested.
pub const SHAREE_PAGE: u32 = 1;
/// Fixed page size for a lookup.
pub const SHAREE_PAGE_SIZE: u32 = 50;

/// Parameters of one remote sharee lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub item_type: ShareItemType,
    pub page: u32,
    pub per_page: u32,
    pub lookup_global: bool,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>, item_type: ShareItemType, lookup_global: bool) -> Self {
        Self {
            query: query.into(),
            item_type,
            page: SHAREE_PAGE,
            per_page: SHAREE_PAGE_SIZE,
            lookup_global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_uses_fixed_paging() {
        let request = SearchRequest::new("ann", ShareItemType::Folder, true);
        assert_eq!(request.page, 1);
        assert_eq!(request.per_page, 50);
        assert_eq!(request.item_type.as_str(), "folder");
        assert!(request.lookup_global);
    }

    #[test]
    fn item_type_serializes_as_the_endpoint_expects() {
        assert_eq!(
            serde_json::to_string(&ShareItemType::File).unwrap(),
            "\"file\""
        );
        assert_eq!(
            serde_json::to_string(&ShareItemType::Folder).unwrap(),
            "\"folder\""
        );
    }
}
