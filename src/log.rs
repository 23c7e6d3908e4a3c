//! Developer Console Diagnostics
//!
//! `[TAG] message` lines in the browser console; stderr when running natively.

#[cfg(target_arch = "wasm32")]
pub fn info(tag: &str, msg: &str) {
    web_sys::console::log_1(&format!("[{}] {}", tag, msg).into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(tag: &str, msg: &str) {
    web_sys::console::warn_1(&format!("[{}] {}", tag, msg).into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(tag: &str, msg: &str) {
    web_sys::console::error_1(&format!("[{}] {}", tag, msg).into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(tag: &str, msg: &str) {
    eprintln!("[{}] {}", tag, msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(tag: &str, msg: &str) {
    eprintln!("[{}] WARN {}", tag, msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(tag: &str, msg: &str) {
    eprintln!("[{}] ERROR {}", tag, msg);
}
