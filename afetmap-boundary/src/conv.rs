use afetmap_entities as e;
use thiserror::Error;

use super::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid geometry: {0}")]
    Geometry(#[from] e::geo::CoordError),
    #[error("missing post id")]
    MissingPostId,
}

impl From<e::geo::MapPoint> for LatLng {
    fn from(from: e::geo::MapPoint) -> Self {
        Self {
            lat: from.lat(),
            lng: from.lng(),
        }
    }
}

impl TryFrom<LatLng> for e::geo::MapPoint {
    type Error = Error;
    fn try_from(from: LatLng) -> Result<Self, Self::Error> {
        let LatLng { lat, lng } = from;
        Ok(Self::try_from_lat_lng_deg(lat, lng)?)
    }
}

impl From<TweetId> for e::location::PostId {
    fn from(from: TweetId) -> Self {
        match from {
            TweetId::Text(id) => id.into(),
            TweetId::Number(id) => id.into(),
        }
    }
}

impl From<e::location::PostId> for TweetId {
    fn from(from: e::location::PostId) -> Self {
        Self::Text(from.as_str().to_owned())
    }
}

impl TryFrom<Source> for e::location::PostSource {
    type Error = Error;
    fn try_from(from: Source) -> Result<Self, Self::Error> {
        let Source {
            tweet_id,
            name,
            full_text,
        } = from;
        let post_id = e::location::PostId::from(tweet_id);
        if post_id.as_str().trim().is_empty() {
            return Err(Error::MissingPostId);
        }
        let full_text = full_text.filter(|text| !text.trim().is_empty());
        Ok(Self {
            post_id,
            author: name,
            full_text,
        })
    }
}

impl From<e::location::PostSource> for Source {
    fn from(from: e::location::PostSource) -> Self {
        let e::location::PostSource {
            post_id,
            author,
            full_text,
        } = from;
        Self {
            tweet_id: post_id.into(),
            name: author,
            full_text,
        }
    }
}

impl TryFrom<LocationRecord> for e::location::Location {
    type Error = Error;
    fn try_from(from: LocationRecord) -> Result<Self, Self::Error> {
        let LocationRecord {
            geometry,
            formatted_address,
            source,
        } = from;
        Ok(Self {
            pos: geometry.location.try_into()?,
            address: formatted_address,
            source: source.try_into()?,
        })
    }
}

impl From<e::location::Location> for LocationRecord {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            pos,
            address,
            source,
        } = from;
        Self {
            geometry: Geometry {
                location: pos.into(),
            },
            formatted_address: address,
            source: source.into(),
        }
    }
}
