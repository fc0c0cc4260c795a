use leptos::*;

use afetmap_boundary::LocationRecord;
use afetmap_core::{entities::location::Location, DrawerConfig};

mod browser;
mod components;
mod hooks;
mod store;

use components::*;

pub use self::store::MapStore;

const DEMO_LOCATIONS: &str = include_str!("../demo-locations.json");

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let store = MapStore::new();
    let config = DrawerConfig {
        language: browser::preferred_language(),
        ..Default::default()
    };

    let locations = load_demo_locations().unwrap_or_else(|err| {
        log::error!("Unable to load demo locations: {err}");
        Vec::new()
    });
    log::debug!("Loaded {} demo locations", locations.len());

    view! {
      <main class="container mx-auto p-6">
        <h1 class="mb-4 text-2xl font-bold">"afetmap"</h1>
        <MarkerList locations store />
        <Drawer store config />
      </main>
    }
}

fn load_demo_locations() -> anyhow::Result<Vec<Location>> {
    let records: Vec<LocationRecord> = serde_json::from_str(DEMO_LOCATIONS)?;
    let locations: Vec<Location> = records
        .into_iter()
        .map(Location::try_from)
        .collect::<Result<_, _>>()?;
    Ok(locations)
}
