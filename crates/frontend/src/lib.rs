//! my-awesome-demo - Yew WASM Frontend
//!
//! A single page with a click counter and two routed views.

mod app;
mod components;
mod counter;
mod pages;

pub use app::{App, AppShell, Route};
pub use counter::{Counter, CounterAction};

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("starting {}", web_types::APP_NAME);

    yew::Renderer::<App>::new().render();
}
