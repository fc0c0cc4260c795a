use std::fmt;

use crate::geo::MapPoint;

/// Identifier of a social media post.
///
/// Post ids exceed the integer precision of JSON numbers in the browser
/// and are therefore kept as their decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PostId(String);

impl PostId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PostId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for PostId {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl From<u64> for PostId {
    fn from(from: u64) -> Self {
        Self(from.to_string())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The social media post a location has been extracted from.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostSource {
    pub post_id   : PostId,
    pub author    : String,
    /// Cached text of the post at the time it was collected.
    pub full_text : Option<String>,
}

/// A location on the map that somebody asked for help at.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub pos     : MapPoint,
    pub address : String,
    pub source  : PostSource,
}
