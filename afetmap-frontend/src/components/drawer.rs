use leptos::{ev, *};

use afetmap_core::{
    drawer::{closes_on_key, open_link, DrawerState, SourceView},
    links::LinkKind,
    panel::{Anchor, Layout, MapsButton, Panel, Tone},
    DrawerConfig,
};

use crate::{browser::Browser, components::Snackbar, hooks::use_window_size, store::MapStore};

/// Details of the selected location.
#[component]
pub fn Drawer(store: MapStore, config: DrawerConfig) -> impl IntoView {
    // -- signals -- //

    let size = use_window_size();
    let state = RwSignal::new(DrawerState::default());
    let notification = Memo::new(move |_| state.with(DrawerState::snackbar));
    let layout = Memo::new(move |_| Layout::for_viewport_width(size.get().width, &config));
    let panel = Memo::new(move |_| {
        let width = size.get().width;
        store
            .drawer_data()
            .with(|location| Panel::build(location.as_ref(), width, &config))
    });
    let is_open = store.is_drawer_open();

    let labels = afetmap_core::labels::Labels::for_language(config.language);

    // -- callbacks -- //

    let on_close = move || store.toggle_drawer();

    let on_copy = move || {
        store.drawer_data().with_untracked(|location| {
            let Some(location) = location else {
                log::warn!("Nothing to copy: no location selected");
                return;
            };
            state.update(|s| {
                s.copy_view_url(location, &Browser);
            });
        });
    };

    // Focus may still be on the marker that opened the drawer.
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if closes_on_key(is_open.get_untracked(), &ev.key()) {
            on_close();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
      <div>
        <Snackbar
          notification = notification.into()
          message = labels.address_copied
          auto_hide = config.snackbar_auto_hide
          on_close = move |generation| state.update(|s| {
              s.dismiss_snackbar(generation);
          })
        />
        <Show when=move || is_open.get()>
          <div class="fixed inset-0 z-40 bg-black/50" on:click=move |_| on_close()></div>
        </Show>
        <aside
          class = move || drawer_class(layout.get().anchor, is_open.get())
          style:width = move || layout.get().css_width()
          role = "presentation"
          data-anchor = move || layout.get().anchor.as_str()
        >
          { move || panel.get().map(|panel| view! {
              <PanelContent panel store state on_close on_copy />
            })
          }
        </aside>
      </div>
    }
}

#[component]
fn PanelContent<C, P>(
    panel: Panel,
    store: MapStore,
    state: RwSignal<DrawerState>,
    on_close: C,
    on_copy: P,
) -> impl IntoView
where
    C: Fn() + 'static + Copy,
    P: Fn() + 'static + Copy,
{
    let Panel {
        address,
        coordinates,
        maps_buttons,
        view_url,
        embed_url,
        saved_text,
        needs,
        labels,
        ..
    } = panel;

    view! {
      <div class="relative flex h-full flex-col overflow-hidden p-4">
        <div class="flex-1 space-y-6 overflow-y-auto">
          <div>
            <h3 class="pr-8 text-lg font-semibold text-gray-900" style="max-width: 45ch">{ address }</h3>
            <p class="mt-1 text-sm text-gray-500">{ coordinates }</p>
          </div>

          <div class="flex flex-wrap gap-2">
            { maps_buttons
                .into_iter()
                .map(|button| view! { <MapsLinkButton button store /> })
                .collect_view()
            }
          </div>

          <div>
            <input
              type = "text"
              readonly
              class = "w-full border-b border-gray-300 bg-transparent py-1 text-sm text-gray-700 focus:outline-none"
              prop:value = view_url
            />
            <div class="mt-2 flex gap-2">
              <button
                class = "flex-1 rounded border border-blue-600 px-3 py-1 text-sm text-blue-600 hover:bg-blue-50"
                on:click = move |_| on_copy()
              >
                { labels.copy }
              </button>
              <button
                class = "flex-1 rounded border border-purple-600 px-3 py-1 text-sm text-purple-600 hover:bg-purple-50"
                on:click = move |_| open_selected(store, LinkKind::SourcePost)
              >
                { labels.source } " ↗"
              </button>
            </div>
          </div>

          <section class="border-t border-gray-200 pt-4">
            <h4 class="font-medium text-gray-900">{ labels.needs }</h4>
            <ul class="mt-2 flex flex-wrap gap-2">
              { needs
                  .into_iter()
                  .map(|(need, label)| view! {
                    <li
                      class="rounded bg-gray-100 px-2 py-1 text-xs uppercase text-gray-600"
                      data-need = need.as_ref().to_owned()
                    >
                      { label }
                    </li>
                  })
                  .collect_view()
              }
            </ul>
          </section>

          <section class="border-t border-gray-200 pt-4">
            <div class="flex items-center justify-between">
              <h4 class="font-medium text-gray-900">{ labels.help_content }</h4>
              <label class="flex cursor-pointer items-center gap-2 text-sm text-gray-600">
                <span>{ labels.show_saved_data }</span>
                <input
                  type = "checkbox"
                  role = "switch"
                  prop:checked = move || state.with(DrawerState::show_saved_data)
                  on:change = move |_| state.update(DrawerState::toggle_saved_data)
                />
              </label>
            </div>
            { move || match state.with(DrawerState::source_view) {
                SourceView::SavedText => view! {
                  <p class="mt-2 whitespace-pre-line text-sm text-gray-700">{ saved_text.clone() }</p>
                }.into_view(),
                SourceView::Embed => view! {
                  <div class="mt-2">
                    <iframe class="w-full" style="border: 0; min-height: 24rem" src = embed_url.clone()></iframe>
                  </div>
                }.into_view(),
              }
            }
          </section>
        </div>
        <button
          class = "absolute right-2 top-2 p-2 text-gray-500 hover:text-gray-900"
          aria-label = labels.close
          on:click = move |_| on_close()
        >
          "✕"
        </button>
      </div>
    }
}

#[component]
fn MapsLinkButton(button: MapsButton, store: MapStore) -> impl IntoView {
    let MapsButton { label, link, tone } = button;
    let class = match tone {
        Tone::Primary => "rounded bg-blue-600 px-4 py-2 text-sm font-medium uppercase text-white shadow hover:bg-blue-700",
        Tone::Secondary => "rounded bg-purple-600 px-4 py-2 text-sm font-medium uppercase text-white shadow hover:bg-purple-700",
    };
    view! {
      <button class = class on:click = move |_| open_selected(store, link)>
        { label } " ↗"
      </button>
    }
}

fn open_selected(store: MapStore, kind: LinkKind) {
    store.drawer_data().with_untracked(|location| match location {
        Some(location) => open_link(kind, location, &Browser),
        None => log::warn!("Unable to open {kind:?} link: no location selected"),
    });
}

const fn drawer_class(anchor: Anchor, open: bool) -> &'static str {
    match (anchor, open) {
        (Anchor::Left, true) => "fixed inset-y-0 left-0 z-50 bg-white shadow-xl transition-transform duration-300 translate-x-0",
        (Anchor::Left, false) => "fixed inset-y-0 left-0 z-50 bg-white shadow-xl transition-transform duration-300 -translate-x-full",
        (Anchor::Bottom, true) => "fixed inset-x-0 bottom-0 z-50 max-h-[85vh] bg-white shadow-xl transition-transform duration-300 translate-y-0",
        (Anchor::Bottom, false) => "fixed inset-x-0 bottom-0 z-50 max-h-[85vh] bg-white shadow-xl transition-transform duration-300 translate-y-full",
    }
}
