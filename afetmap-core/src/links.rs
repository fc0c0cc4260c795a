//! URLs of external services the drawer links to.

use afetmap_entities::{geo::MapPoint, location::PostId};

const GOOGLE_MAPS_URL: &str = "https://www.google.com/maps";
const GOOGLE_MAPS_ZOOM: u8 = 22;
const TWITTER_URL: &str = "https://twitter.com";
const TWITFRAME_URL: &str = "https://twitframe.com/show";

/// Google Maps centered on the given point.
#[must_use]
pub fn view_url(pos: MapPoint) -> String {
    format!("{GOOGLE_MAPS_URL}/@{pos},{GOOGLE_MAPS_ZOOM}z")
}

/// Google Maps directions from the current position of the user to the given point.
#[must_use]
pub fn directions_url(pos: MapPoint) -> String {
    format!("{GOOGLE_MAPS_URL}?saddr=My+Location&daddr={pos}")
}

/// Twitter resolves the author of a status by its id,
/// so a placeholder user name is sufficient.
#[must_use]
pub fn source_post_url(post_id: &PostId) -> String {
    format!("{TWITTER_URL}/anyuser/status/{post_id}")
}

#[must_use]
pub fn embed_url(author: &str, post_id: &PostId) -> String {
    format!("{TWITFRAME_URL}?url={TWITTER_URL}/{author}/status/{post_id}&conversation=none")
}

/// Destinations that can be opened in a new browser tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    View,
    Directions,
    SourcePost,
}

impl LinkKind {
    #[must_use]
    pub fn url(self, location: &afetmap_entities::location::Location) -> String {
        match self {
            Self::View => view_url(location.pos),
            Self::Directions => directions_url(location.pos),
            Self::SourcePost => source_post_url(&location.source.post_id),
        }
    }
}
