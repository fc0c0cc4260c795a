//! Ephemeral UI state of the drawer and the effects it triggers.

use afetmap_entities::location::Location;

use crate::links::{self, LinkKind};

/// Write text into the system clipboard.
///
/// Fire and forget: failures are the concern of the implementation.
pub trait Clipboard {
    fn write_text(&self, text: &str);
}

/// Open a URL in a new browser tab.
pub trait NewTab {
    fn open_in_new_tab(&self, url: &str);
}

/// What the help content section displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceView {
    /// The cached text of the source post.
    SavedText,
    /// The post embedded from the external viewer.
    Embed,
}

/// A transient notification.
///
/// Every notification gets a new generation so that the timer
/// of an older notification does not close a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snackbar {
    open: bool,
    generation: u64,
}

impl Snackbar {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    fn show(&mut self) -> u64 {
        self.generation += 1;
        self.open = true;
        self.generation
    }

    /// Returns `true` if the snackbar has been closed.
    fn dismiss(&mut self, generation: u64) -> bool {
        if !self.open || generation != self.generation {
            return false;
        }
        self.open = false;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawerState {
    show_saved_data: bool,
    snackbar: Snackbar,
}

impl DrawerState {
    #[must_use]
    pub const fn show_saved_data(&self) -> bool {
        self.show_saved_data
    }

    #[must_use]
    pub const fn source_view(&self) -> SourceView {
        if self.show_saved_data {
            SourceView::SavedText
        } else {
            SourceView::Embed
        }
    }

    pub fn toggle_saved_data(&mut self) {
        self.show_saved_data = !self.show_saved_data;
        log::debug!("Show {:?} of the source post", self.source_view());
    }

    #[must_use]
    pub const fn snackbar(&self) -> Snackbar {
        self.snackbar
    }

    /// Copy the Google Maps URL of the location and notify the user.
    ///
    /// Returns the generation of the notification.
    pub fn copy_view_url<C>(&mut self, location: &Location, clipboard: &C) -> u64
    where
        C: Clipboard + ?Sized,
    {
        let url = links::view_url(location.pos);
        log::debug!("Copy {url} to clipboard");
        clipboard.write_text(&url);
        self.snackbar.show()
    }

    /// Close the notification unless it has been replaced by a newer one.
    pub fn dismiss_snackbar(&mut self, generation: u64) -> bool {
        self.snackbar.dismiss(generation)
    }
}

/// Whether a key pressed anywhere in the window closes the drawer.
#[must_use]
pub fn closes_on_key(is_open: bool, key: &str) -> bool {
    is_open && key == "Escape"
}

pub fn open_link<T>(kind: LinkKind, location: &Location, tab: &T)
where
    T: NewTab + ?Sized,
{
    let url = kind.url(location);
    log::debug!("Open {kind:?} link {url}");
    tab.open_in_new_tab(&url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use afetmap_entities::{builders::*, geo::MapPoint};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl Clipboard for Recorder {
        fn write_text(&self, text: &str) {
            self.calls.borrow_mut().push(text.to_owned());
        }
    }

    impl NewTab for Recorder {
        fn open_in_new_tab(&self, url: &str) {
            self.calls.borrow_mut().push(url.to_owned());
        }
    }

    fn location() -> Location {
        Location::build()
            .pos(MapPoint::from_lat_lng_deg(36.2021, 36.1604))
            .post_id("17")
            .finish()
    }

    #[test]
    fn embed_is_shown_initially() {
        let state = DrawerState::default();
        assert!(!state.show_saved_data());
        assert_eq!(state.source_view(), SourceView::Embed);
        assert!(!state.snackbar().is_open());
    }

    #[test]
    fn toggle_swaps_source_views() {
        let mut state = DrawerState::default();
        state.toggle_saved_data();
        assert_eq!(state.source_view(), SourceView::SavedText);
        state.toggle_saved_data();
        assert_eq!(state.source_view(), SourceView::Embed);
    }

    #[test]
    fn copy_writes_clipboard_and_notifies_once() {
        let clipboard = Recorder::default();
        let mut state = DrawerState::default();
        let generation = state.copy_view_url(&location(), &clipboard);
        assert_eq!(
            *clipboard.calls.borrow(),
            ["https://www.google.com/maps/@36.2021,36.1604,22z"]
        );
        assert!(state.snackbar().is_open());
        assert_eq!(generation, 1);
        assert_eq!(state.snackbar().generation(), 1);
    }

    #[test]
    fn every_copy_notifies_again() {
        let clipboard = Recorder::default();
        let mut state = DrawerState::default();
        let first = state.copy_view_url(&location(), &clipboard);
        assert!(state.dismiss_snackbar(first));
        assert!(!state.snackbar().is_open());
        let second = state.copy_view_url(&location(), &clipboard);
        assert_eq!(second, first + 1);
        assert!(state.snackbar().is_open());
        assert_eq!(clipboard.calls.borrow().len(), 2);
    }

    #[test]
    fn stale_dismiss_keeps_newer_notification_open() {
        let clipboard = Recorder::default();
        let mut state = DrawerState::default();
        let first = state.copy_view_url(&location(), &clipboard);
        let second = state.copy_view_url(&location(), &clipboard);
        assert!(!state.dismiss_snackbar(first));
        assert!(state.snackbar().is_open());
        assert!(state.dismiss_snackbar(second));
        assert!(!state.dismiss_snackbar(second));
    }

    #[test]
    fn escape_closes_open_drawer_only() {
        assert!(closes_on_key(true, "Escape"));
        assert!(!closes_on_key(false, "Escape"));
        assert!(!closes_on_key(true, "Enter"));
        assert!(!closes_on_key(true, "a"));
    }

    #[test]
    fn open_links_in_new_tab() {
        let tab = Recorder::default();
        let location = location();
        open_link(LinkKind::View, &location, &tab);
        open_link(LinkKind::Directions, &location, &tab);
        open_link(LinkKind::SourcePost, &location, &tab);
        assert_eq!(
            *tab.calls.borrow(),
            [
                "https://www.google.com/maps/@36.2021,36.1604,22z",
                "https://www.google.com/maps?saddr=My+Location&daddr=36.2021,36.1604",
                "https://twitter.com/anyuser/status/17",
            ]
        );
    }
}
