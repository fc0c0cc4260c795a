use leptos::*;

use afetmap_core::entities::location::Location;

/// Selection state shared between the map and the drawer.
#[derive(Debug, Clone, Copy)]
pub struct MapStore {
    drawer_open: RwSignal<bool>,
    drawer_data: RwSignal<Option<Location>>,
}

impl MapStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            drawer_open: RwSignal::new(false),
            drawer_data: RwSignal::new(None),
        }
    }

    #[must_use]
    pub fn is_drawer_open(&self) -> Signal<bool> {
        self.drawer_open.into()
    }

    #[must_use]
    pub fn drawer_data(&self) -> Signal<Option<Location>> {
        self.drawer_data.into()
    }

    /// Show the given location in the drawer.
    pub fn select(&self, location: Location) {
        log::debug!("Select location at {}", location.pos);
        self.drawer_data.set(Some(location));
        self.drawer_open.set(true);
    }

    /// The selected location is kept when the drawer is closed
    /// so that it does not disappear while sliding out.
    pub fn toggle_drawer(&self) {
        self.drawer_open.update(|open| *open = !*open);
    }
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new()
    }
}
