#![cfg(target_arch = "wasm32")]
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod dom;
mod modal;

use config::ModalConfig;
use modal::{wire_triggers, ModalController};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let config = ModalConfig::default();
    console_error_panic_hook::set_once();
    console_log::init_with_level(config.log_level).ok();
    log::info!("login-modal starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let ready_doc = document.clone();
    dom::on_content_loaded(&document, move || {
        if let Err(e) = init(&ready_doc, &config) {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Wire the modal on `document`. Returns `Ok(false)` when an earlier call
/// already did.
fn init(document: &web::Document, config: &ModalConfig) -> anyhow::Result<bool> {
    let root = document
        .get_element_by_id(config.root_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", config.root_id))?;

    // Bindings live for the page; a second run would double every listener.
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(false);
    }

    let controller = ModalController::new(root, config.hidden_class);
    // Start closed even if the markup forgot the marker.
    controller.close();

    let bound = wire_triggers(
        document,
        &config.open_trigger_ids,
        config.close_trigger_id,
        |el, event| dom::bind_click(&el, &controller, event),
    );
    dom::bind_backdrop(&controller);

    log::info!(
        "[modal] #{} wired with {} of {} triggers",
        config.root_id,
        bound,
        config.open_trigger_ids.len() + 1
    );
    Ok(true)
}
