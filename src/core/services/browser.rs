use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::console;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "No window available".to_string())
}

pub fn alert(message: &str) {
    if let Ok(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// Blocking prompt. `None` when cancelled.
pub fn prompt(message: &str) -> Option<String> {
    window()
        .ok()
        .and_then(|w| w.prompt_with_message(message).ok().flatten())
}

pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| format!("Failed to open {}: {:?}", url, e))?;
    Ok(())
}

/// Offer `bytes` to the user as a file download.
pub fn download_bytes(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    let document = window()?
        .document()
        .ok_or_else(|| "No document available".to_string())?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Failed to create link: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.style().set_property("display", "none");

    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
        anchor.click();
        anchor.remove();
    } else {
        anchor.click();
    }

    let _ = Url::revoke_object_url(&url);
    console::log(&format!("Downloaded {} ({} bytes)", filename, bytes.len()));
    Ok(())
}
