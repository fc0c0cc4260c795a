//! Side effects against the browser.

use anyhow::anyhow;
use leptos::window;
use wasm_bindgen_futures::JsFuture;

use afetmap_core::{
    drawer::{Clipboard, NewTab},
    labels::Language,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Browser;

impl Clipboard for Browser {
    fn write_text(&self, text: &str) {
        let text = text.to_owned();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = copy_to_clipboard(&text).await {
                log::warn!("Unable to copy to clipboard: {err}");
            }
        });
    }
}

impl NewTab for Browser {
    fn open_in_new_tab(&self, url: &str) {
        if let Err(err) = open_in_new_tab(url) {
            log::warn!("Unable to open {url}: {err}");
        }
    }
}

/// Falls back to the default language if the browser prefers an unsupported one.
pub fn preferred_language() -> Language {
    window()
        .navigator()
        .language()
        .and_then(|lang| lang.parse().ok())
        .unwrap_or_default()
}

async fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let clipboard = window().navigator().clipboard();
    let promise = clipboard.write_text(text);
    JsFuture::from(promise).await.map_err(js_error)?;
    Ok(())
}

fn open_in_new_tab(url: &str) -> anyhow::Result<()> {
    let opened = window()
        .open_with_url_and_target(url, "_blank")
        .map_err(js_error)?;
    if opened.is_none() {
        return Err(anyhow!("popup blocked"));
    }
    Ok(())
}

fn js_error(err: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow!(err
        .as_string()
        .unwrap_or_else(|| "unknown JS error".to_string()))
}
