// Console logging. In the browser this goes to the devtools console; off-wasm
// (unit tests, tooling) the same messages become tracing events.

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(message: &str) {
    tracing::info!(target: "devplan_ui", "{}", message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(message: &str) {
    tracing::error!(target: "devplan_ui", "{}", message);
}
