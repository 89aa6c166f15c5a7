//! Console Logger
//!
//! Routes the `log` facade to the browser console through `console_log`.

use log::Level;

/// Debug builds log everything, release builds warnings only
fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Warn
    }
}

pub fn init_logger() {
    // a second init leaves the installed logger in place
    if let Err(err) = console_log::init_with_level(log_level()) {
        web_sys::console::warn_1(&format!("console logger not installed: {}", err).into());
    }
}
