//! View model of the drawer panel.

use afetmap_entities::{location::Location, need::Need};

use crate::{
    coords::format_dms,
    labels::Labels,
    links::{self, LinkKind},
    DrawerConfig,
};

/// The side of the screen the drawer slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Bottom,
}

impl Anchor {
    #[must_use]
    pub fn for_viewport_width(viewport_width: f64, breakpoint: f64) -> Self {
        if viewport_width > breakpoint {
            Self::Left
        } else {
            Self::Bottom
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelWidth {
    Px(u32),
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub anchor: Anchor,
    pub width: PanelWidth,
}

impl Layout {
    #[must_use]
    pub fn for_viewport_width(viewport_width: f64, config: &DrawerConfig) -> Self {
        let anchor = Anchor::for_viewport_width(viewport_width, config.breakpoint_px);
        let width = match anchor {
            Anchor::Left => PanelWidth::Px(config.panel_width_px),
            Anchor::Bottom => PanelWidth::Full,
        };
        Self { anchor, width }
    }

    #[must_use]
    pub fn css_width(&self) -> String {
        match self.width {
            PanelWidth::Px(px) => format!("{px}px"),
            PanelWidth::Full => "100%".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
}

/// A button that opens the location in Google Maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapsButton {
    pub label: &'static str,
    pub link: LinkKind,
    pub tone: Tone,
}

#[must_use]
pub const fn maps_buttons(labels: &'static Labels) -> [MapsButton; 2] {
    [
        MapsButton {
            label: labels.open_in_maps,
            link: LinkKind::View,
            tone: Tone::Primary,
        },
        MapsButton {
            label: labels.get_directions,
            link: LinkKind::Directions,
            tone: Tone::Secondary,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub address: String,
    pub coordinates: String,
    pub maps_buttons: [MapsButton; 2],
    /// Shown in the read-only field and copied to the clipboard.
    pub view_url: String,
    pub source_url: String,
    pub embed_url: String,
    /// Cached text of the source post, empty if unknown.
    pub saved_text: String,
    pub needs: Vec<(Need, &'static str)>,
    pub layout: Layout,
    pub labels: &'static Labels,
}

impl Panel {
    /// Returns `None` if nothing is selected.
    #[must_use]
    pub fn build(
        location: Option<&Location>,
        viewport_width: f64,
        config: &DrawerConfig,
    ) -> Option<Self> {
        let location = location?;
        let Location {
            pos,
            address,
            source,
        } = location;
        let labels = Labels::for_language(config.language);
        Some(Self {
            address: address.clone(),
            coordinates: format_dms(*pos),
            maps_buttons: maps_buttons(labels),
            view_url: links::view_url(*pos),
            source_url: links::source_post_url(&source.post_id),
            embed_url: links::embed_url(&source.author, &source.post_id),
            saved_text: source.full_text.clone().unwrap_or_default(),
            needs: Need::all().map(|need| (need, labels.need(need))).collect(),
            layout: Layout::for_viewport_width(viewport_width, config),
            labels,
        })
    }
}
