use std::collections::HashSet;

use super::ShareeType;

/// Recipients the target item is already shared with.
///
/// Candidates matching an entry on `(type, identifier)` are dropped from
/// lookup results. Keyed as a set so each candidate costs one hash lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<(ShareeType, String)>,
}

impl Blacklist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sharee_type: ShareeType, share_with: impl Into<String>) {
        self.entries.insert((sharee_type, share_with.into()));
    }

    #[must_use]
    pub fn contains(&self, sharee_type: ShareeType, share_with: &str) -> bool {
        self.entries.contains(&(sharee_type, share_with.to_owned()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ShareeType, String)> for Blacklist {
    fn from_iter<I: IntoIterator<Item = (ShareeType, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_matches_on_type_and_identifier() {
        let mut blacklist = Blacklist::new();
        blacklist.insert(ShareeType::User, "u1");

        assert!(blacklist.contains(ShareeType::User, "u1"));
        assert!(!blacklist.contains(ShareeType::Group, "u1"));
        assert!(!blacklist.contains(ShareeType::User, "u2"));
    }

    #[test]
    fn collects_from_pairs() {
        let blacklist: Blacklist = [(ShareeType::Email, "a@b.c".to_string())]
            .into_iter()
            .collect();
        assert_eq!(blacklist.len(), 1);
        assert!(blacklist.contains(ShareeType::Email, "a@b.c"));
    }
}
