use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Copy text with `navigator.clipboard.writeText`.
///
/// Looked up through `Reflect` so the crate does not need web-sys's unstable
/// clipboard bindings. Resolves once the browser has accepted or refused the
/// write.
pub async fn copy_text(text: &str) -> Result<(), String> {
    let navigator = gloo::utils::window().navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| "clipboard unavailable".to_string())?;
    if clipboard.is_undefined() {
        return Err("clipboard unavailable".to_string());
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|_| "clipboard.writeText unavailable".to_string())?
        .dyn_into::<Function>()
        .map_err(|_| "clipboard.writeText is not a function".to_string())?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("copy failed: {:?}", e))?
        .dyn_into::<Promise>()
        .map_err(|_| "clipboard.writeText did not return a promise".to_string())?;
    settle(promise).await
}

async fn settle(promise: Promise) -> Result<(), String> {
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("copy failed: {:?}", e))
}
