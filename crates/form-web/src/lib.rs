#![cfg(target_arch = "wasm32")]
use form_core::{ToggleError, GLOBAL_TOGGLE_FN};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;

use dom::WebDocument;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("form-web starting");

    if let Err(e) = install_global_toggle() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

// Inline markup calls `toggle_visibility('panel')` as a plain global.
fn install_global_toggle() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let closure =
        Closure::wrap(Box::new(move |id: JsValue| toggle_visibility(id)) as Box<dyn FnMut(JsValue)>);
    let installed = js_sys::Reflect::set(
        &window,
        &JsValue::from_str(GLOBAL_TOGGLE_FN),
        closure.as_ref(),
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !installed {
        anyhow::bail!("window.{} is not writable", GLOBAL_TOGGLE_FN);
    }
    closure.forget();
    log::info!("window.{} installed", GLOBAL_TOGGLE_FN);
    Ok(())
}

/// Id string for a value passed from markup: strings as-is, numbers the way
/// `String(n)` formats them. Anything else has no id.
fn element_id(value: &JsValue) -> Option<String> {
    if let Some(s) = value.as_string() {
        return Some(s);
    }
    let n = value.as_f64()?;
    js_sys::Number::from(n).to_string(10).ok().map(String::from)
}

/// Flip the element with this id between `display: block` and `display: none`.
///
/// Never throws into the page: a missing element is logged and ignored.
#[wasm_bindgen]
pub fn toggle_visibility(id: JsValue) {
    let Some(id) = element_id(&id) else {
        log::warn!("[toggle] id {:?} is not a string; ignoring", id);
        return;
    };
    let Some(doc) = WebDocument::current() else {
        log::error!("[toggle] no document");
        return;
    };
    if let Err(e) = form_core::toggle_visibility(&doc, &id) {
        report(&id, e);
    }
}

/// `Some(true)` when the element's inline display is `block`, `None` when absent.
#[wasm_bindgen]
pub fn is_visible(id: &str) -> Option<bool> {
    let doc = WebDocument::current()?;
    match form_core::visibility_of(&doc, id) {
        Ok(v) => Some(v.is_shown()),
        Err(e) => {
            if !e.is_not_found() {
                log::error!("[toggle] {}", e);
            }
            None
        }
    }
}

// Successful toggles are already logged by form_core.
fn report(id: &str, err: ToggleError) {
    match err {
        e @ ToggleError::NotFound(_) => log::warn!("[toggle] {}; ignoring", e),
        e => log::error!("[toggle] #{}: {}", id, e),
    }
}
