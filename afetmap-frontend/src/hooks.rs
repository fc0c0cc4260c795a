use leptos::{ev, *};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

/// The inner size of the browser window, updated on every resize.
#[must_use]
pub fn use_window_size() -> Signal<WindowSize> {
    let size = RwSignal::new(current_window_size());
    let handle = window_event_listener(ev::resize, move |_| {
        size.set(current_window_size());
    });
    on_cleanup(move || handle.remove());
    size.into()
}

fn current_window_size() -> WindowSize {
    let window = window();
    let px = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
    };
    WindowSize {
        width: px(window.inner_width()),
        height: px(window.inner_height()),
    }
}
