use std::time::Duration;

use leptos::*;

use afetmap_core::drawer::Snackbar as Notification;

/// A transient message at the bottom of the screen.
///
/// `on_close` receives the generation of the notification that expired.
#[component]
pub fn Snackbar<F>(
    notification: Signal<Notification>,
    message: &'static str,
    auto_hide: Duration,
    on_close: F,
) -> impl IntoView
where
    F: Fn(u64) + 'static + Copy,
{
    Effect::new(move |_| {
        let current = notification.get();
        if current.is_open() {
            let generation = current.generation();
            set_timeout(move || on_close(generation), auto_hide);
        }
    });

    view! {
      <Show when=move || notification.get().is_open()>
        <div
          role="status"
          class="fixed bottom-6 left-1/2 z-[60] -translate-x-1/2 rounded bg-gray-800 px-4 py-3 text-sm text-white shadow-lg"
          on:click=move |_| on_close(notification.get_untracked().generation())
        >
          { message }
        </div>
      </Show>
    }
}
