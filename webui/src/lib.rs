mod bridge;
mod config;
mod dialog;
mod dropdown;
mod forms;
mod presenter;
mod transport;
mod utils;

use std::rc::Rc;

use formkit::HookRegistry;
use log::{error, info, warn};
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlFormElement;

pub use config::PageConfig;
pub use forms::BindError;
pub use presenter::DomPresenter;
pub use transport::FetchTransport;

/// Boots the page: runs registered initializers, synchronizes dropdowns and
/// binds ajax forms. Later calls do nothing.
#[wasm_bindgen]
pub fn boot() {
    let Some(mut initializers) = bridge::take_initializers() else {
        warn!("Page already booted");
        return;
    };

    let (config, config_error) = match PageConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    if let Some(e) = config_error {
        error!("Could not load page configuration, using defaults: {}", e);
    }

    initializers.run();
    start(Rc::new(config), &bridge::take_registry());
}

/// Synchronizes dropdowns and binds forms using hooks from `registry`.
pub fn start(config: Rc<PageConfig>, registry: &HookRegistry<HtmlFormElement>) {
    let dropdowns = dropdown::setup_dropdowns(&config);
    let forms = forms::bind_forms(&config, registry);
    info!("Page ready: {} dropdowns, {} ajax forms", dropdowns, forms);
}
