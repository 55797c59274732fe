// src/utils.rs
use web_sys::window;

/// Full page reload, the only recovery offered for load failures.
pub fn reload_page() {
    if let Some(window) = window() {
        if let Err(e) = window.location().reload() {
            log::error!("Reload failed: {:?}", e);
        }
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
