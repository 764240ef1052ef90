/// Kind of recipient a lookup result refers to.
///
/// The discriminants follow the numeric share-type codes used by the remote
/// endpoint, which is why the sequence has gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareeType {
    User,
    Group,
    Email,
    Remote,
    Circle,
    Room,
}

impl ShareeType {
    /// Map a wire code to a recipient kind. Unknown codes yield `None`.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::User),
            1 => Some(Self::Group),
            4 => Some(Self::Email),
            6 => Some(Self::Remote),
            7 => Some(Self::Circle),
            10 => Some(Self::Room),
            _ => None,
        }
    }

    /// The wire code the remote endpoint uses for this kind.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::User => 0,
            Self::Group => 1,
            Self::Email => 4,
            Self::Remote => 6,
            Self::Circle => 7,
            Self::Room => 10,
        }
    }
}

/// A single shareable recipient candidate returned by lookup.
///
/// Immutable once constructed; the committed result list holds these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sharee {
    sharee_type: ShareeType,
    share_with: String,
    display_name: String,
    additional_info: Option<String>,
}

impl Sharee {
    #[must_use]
    pub fn new(
        sharee_type: ShareeType,
        share_with: impl Into<String>,
        display_name: impl Into<String>,
        additional_info: Option<String>,
    ) -> Self {
        Self {
            sharee_type,
            share_with: share_with.into(),
            display_name: display_name.into(),
            additional_info: additional_info.filter(|info| !info.is_empty()),
        }
    }

    #[must_use]
    pub fn sharee_type(&self) -> ShareeType {
        self.sharee_type
    }

    /// The identifier the share would be addressed to.
    #[must_use]
    pub fn share_with(&self) -> &str {
        &self.share_with
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn additional_info(&self) -> Option<&str> {
        self.additional_info.as_deref()
    }

    /// Text shown to the user: the display name, qualified with the
    /// additional info when the endpoint supplied one.
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.additional_info {
            Some(info) => format!("{} ({info})", self.display_name),
            None => self.display_name.clone(),
        }
    }

    /// Text the auto-completer matches against. Always carries the
    /// identifier; never shown to the user.
    #[must_use]
    pub fn auto_complete_match_text(&self) -> String {
        format!("{} ({})", self.display_name, self.share_with)
    }
}
