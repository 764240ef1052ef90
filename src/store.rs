use crate::types::Sharee;

/// Role key for the user-visible row text.
pub const ROLE_DISPLAY_TEXT: &str = "displayText";
/// Role key for the auto-completer match text; never shown to the user.
pub const ROLE_AUTO_COMPLETE_MATCH_TEXT: &str = "autoCompleteMatchText";
/// Role key for the full [`Sharee`] payload.
pub const ROLE_SHAREE_PAYLOAD: &str = "shareePayload";

/// Value handed back from a role-based row read.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleValue {
    Text(String),
    Sharee(Sharee),
}

/// The committed result list the presentation layer binds to.
///
/// Contents change only through [`replace`](Self::replace); the model wraps
/// every replacement in the about-to-reset / reset notification pair so
/// observers never see a half-updated list.
#[derive(Debug, Default)]
pub(crate) struct ListStore {
    sharees: Vec<Sharee>,
}

impl ListStore {
    pub(crate) fn row_count(&self) -> usize {
        self.sharees.len()
    }

    /// Read one field of one row. Out-of-range indices and unknown roles
    /// yield `None`; an unknown role is additionally logged.
    pub(crate) fn read(&self, index: usize, role: &str) -> Option<RoleValue> {
        let sharee = self.sharees.get(index)?;
        match role {
            ROLE_DISPLAY_TEXT => Some(RoleValue::Text(sharee.display_text())),
            ROLE_AUTO_COMPLETE_MATCH_TEXT => {
                Some(RoleValue::Text(sharee.auto_complete_match_text()))
            }
            ROLE_SHAREE_PAYLOAD => Some(RoleValue::Sharee(sharee.clone())),
            _ => {
                log::warn!("unknown sharee list role {role:?}, returning no value");
                None
            }
        }
    }

    pub(crate) fn sharees(&self) -> &[Sharee] {
        &self.sharees
    }

    pub(crate) fn replace(&mut self, sharees: Vec<Sharee>) {
        self.sharees = sharees;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShareeType;

    fn store_with_ann() -> ListStore {
        let mut store = ListStore::default();
        store.replace(vec![Sharee::new(
            ShareeType::User,
            "u1",
            "Ann A",
            Some("Org X".into()),
        )]);
        store
    }

    #[test]
    fn row_count_tracks_the_committed_list() {
        let mut store = ListStore::default();
        assert_eq!(store.row_count(), 0);

        store.replace(vec![Sharee::new(ShareeType::Group, "g1", "Group", None)]);
        assert_eq!(store.row_count(), 1);

        store.replace(Vec::new());
        assert_eq!(store.row_count(), 0);
    }

    #[test]
    fn read_display_text_composes_additional_info() {
        let store = store_with_ann();
        assert_eq!(
            store.read(0, ROLE_DISPLAY_TEXT),
            Some(RoleValue::Text("Ann A (Org X)".into()))
        );
    }

    #[test]
    fn read_auto_complete_text_uses_the_identifier() {
        let store = store_with_ann();
        assert_eq!(
            store.read(0, ROLE_AUTO_COMPLETE_MATCH_TEXT),
            Some(RoleValue::Text("Ann A (u1)".into()))
        );
    }

    #[test]
    fn read_payload_returns_the_sharee() {
        let store = store_with_ann();
        match store.read(0, ROLE_SHAREE_PAYLOAD) {
            Some(RoleValue::Sharee(sharee)) => assert_eq!(sharee.share_with(), "u1"),
            other => panic!("expected sharee payload, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_index_reads_nothing() {
        let store = store_with_ann();
        assert_eq!(store.read(1, ROLE_DISPLAY_TEXT), None);
        assert_eq!(store.read(usize::MAX, ROLE_DISPLAY_TEXT), None);
    }

    #[test]
    fn unknown_role_reads_nothing() {
        let store = store_with_ann();
        assert_eq!(store.read(0, "color"), None);
    }
}
