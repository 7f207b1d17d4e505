//! TodoMVC Frontend Entry Point

mod app;
mod components;
mod context;
mod location;
mod logger;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
