use leptos::*;

use afetmap_core::entities::location::Location;

use crate::store::MapStore;

/// Stand-in for the map: every location is listed as a clickable marker.
#[component]
pub fn MarkerList(locations: Vec<Location>, store: MapStore) -> impl IntoView {
    view! {
      <ul class="divide-y divide-gray-200">
        { locations
            .into_iter()
            .map(|location| {
                let title = location.address.clone();
                let coords = location.pos.to_string();
                view! {
                  <li class="py-3">
                    <button
                      class="text-left hover:text-gray-600"
                      on:click = move |_| store.select(location.clone())
                    >
                      <div class="font-bold">{ title }</div>
                      <div class="text-sm text-gray-500">{ coords }</div>
                    </button>
                  </li>
                }
            })
            .collect_view()
        }
      </ul>
    }
}
