//! Flattens the categorized lookup reply into an ordered recipient list.

use serde::Deserialize;
use serde_json::Value;

use crate::types::{Blacklist, Sharee, ShareeType};

/// Category keys of the reply document, in the order results are flattened.
pub(crate) const SHAREE_CATEGORIES: [&str; 6] =
    ["users", "groups", "emails", "remotes", "circles", "rooms"];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSharee {
    label: String,
    value: RawShareeValue,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawShareeValue {
    #[serde(rename = "shareWith")]
    share_with: String,
    #[serde(rename = "shareType")]
    share_type: i64,
    #[serde(rename = "shareWithAdditionalInfo")]
    additional_info: String,
}

/// Flatten a reply document into the committed candidate order.
///
/// The general block's categories come first, then the exact-match block's,
/// each in [`SHAREE_CATEGORIES`] order with payload order preserved inside a
/// category. Recipients found in `blacklist` are dropped. A missing or
/// wrongly-typed category is an empty category; nothing here is fatal.
/// Duplicates across categories are intentionally kept — only the blacklist
/// filters.
pub(crate) fn parse_sharees(document: &Value, blacklist: &Blacklist) -> Vec<Sharee> {
    let mut sharees = Vec::new();

    let Some(data) = document.get("ocs").and_then(|ocs| ocs.get("data")) else {
        log::warn!("sharee reply is missing the ocs data envelope");
        return sharees;
    };

    append_categories(data, blacklist, &mut sharees);
    if let Some(exact) = data.get("exact") {
        append_categories(exact, blacklist, &mut sharees);
    }

    sharees
}

fn append_categories(block: &Value, blacklist: &Blacklist, out: &mut Vec<Sharee>) {
    for category in SHAREE_CATEGORIES {
        let Some(entries) = block.get(category).and_then(Value::as_array) else {
            continue;
        };

        for entry in entries {
            let Some(sharee) = parse_sharee(entry) else {
                continue;
            };
            if blacklist.contains(sharee.sharee_type(), sharee.share_with()) {
                continue;
            }
            out.push(sharee);
        }
    }
}

fn parse_sharee(entry: &Value) -> Option<Sharee> {
    let raw: RawSharee = match serde_json::from_value(entry.clone()) {
        Ok(raw) => raw,
        Err(error) => {
            log::warn!("skipping malformed sharee entry: {error}");
            return None;
        }
    };

    let Some(sharee_type) = ShareeType::from_code(raw.value.share_type) else {
        log::warn!(
            "skipping sharee {:?} with unknown share type code {}",
            raw.value.share_with,
            raw.value.share_type
        );
        return None;
    };

    // Sharee::new treats an empty additional-info string as absent.
    Some(Sharee::new(
        sharee_type,
        raw.value.share_with,
        raw.label,
        Some(raw.value.additional_info),
    ))
}
