pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::location_builder::*;

pub mod location_builder {

    use super::*;
    use crate::{geo::*, location::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = pos;
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.location.address = address.into();
            self
        }
        pub fn post_id(mut self, id: impl Into<PostId>) -> Self {
            self.location.source.post_id = id.into();
            self
        }
        pub fn author(mut self, author: &str) -> Self {
            self.location.source.author = author.into();
            self
        }
        pub fn full_text(mut self, text: Option<&str>) -> Self {
            self.location.source.full_text = text.map(Into::into);
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> LocationBuild {
            LocationBuild {
                location: Location {
                    pos: MapPoint::from_lat_lng_deg(37.0, 37.0),
                    address: "Kahramanmaraş, Türkiye".into(),
                    source: PostSource {
                        post_id: "1622524471512424448".into(),
                        author: "anyuser".into(),
                        full_text: None,
                    },
                },
            }
        }
    }
}
