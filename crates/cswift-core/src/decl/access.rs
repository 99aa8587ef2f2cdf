use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AccessLevel
// ---------------------------------------------------------------------------

/// Swift access control level.
///
/// Visibility order is `private < fileprivate < internal < public`, with
/// `open` ranked the same as `public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Private,
    FilePrivate,
    Internal,
    Public,
    Open,
}

impl AccessLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::FilePrivate => "fileprivate",
            Self::Internal => "internal",
            Self::Public => "public",
            Self::Open => "open",
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Self::Private => 0,
            Self::FilePrivate => 1,
            Self::Internal => 2,
            Self::Public | Self::Open => 3,
        }
    }

    #[must_use]
    pub const fn is_more_visible(self, other: Self) -> bool {
        self.rank() > other.rank()
    }

    /// The less visible of the two; `self` on a tie.
    #[must_use]
    pub const fn less_visible(self, other: Self) -> Self {
        if other.rank() < self.rank() { other } else { self }
    }

    /// Effective access of a member as seen from outside its type.
    #[must_use]
    pub const fn resolve_member_outside(type_access: Option<Self>, member_access: Option<Self>) -> Self {
        match (type_access, member_access) {
            (None, None) => Self::Internal,
            (Some(level), None) | (None, Some(level)) => level,
            (Some(ty), Some(member)) => ty.less_visible(member),
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
