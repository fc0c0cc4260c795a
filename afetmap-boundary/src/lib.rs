//! # afetmap-boundary
//!
//! The JSON records as they are kept in the map selection store.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
pub mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Geometry {
    pub location: LatLng,
}

/// Post ids are delivered either as string or as (lossy) JSON number.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub enum TweetId {
    Text(String),
    Number(u64),
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Source {
    pub tweet_id  : TweetId,
    #[serde(default)]
    pub name      : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct LocationRecord {
    pub geometry          : Geometry,
    pub formatted_address : String,
    pub source            : Source,
}
