//! Cart Drawer Entry Point

mod commands;
mod dom;
mod drawer;
mod events;
mod intl;
mod logger;

use any_spawner::Executor;

fn main() {
    console_error_panic_hook::set_once();
    logger::init_logger();
    if let Err(err) = Executor::init_wasm_bindgen() {
        log::warn!("task executor already set: {:?}", err);
    }
    drawer::init_when_ready();
}
