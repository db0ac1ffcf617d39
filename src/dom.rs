use crate::modal::{ModalController, ModalEvent, TriggerLookup, VisibilityMarker};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

impl VisibilityMarker for web::Element {
    #[inline]
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    #[inline]
    fn add_class(&self, class: &str) {
        _ = self.class_list().add_1(class);
    }

    #[inline]
    fn remove_class(&self, class: &str) {
        _ = self.class_list().remove_1(class);
    }
}

impl TriggerLookup for web::Document {
    type Element = web::Element;

    #[inline]
    fn find(&self, id: &str) -> Option<web::Element> {
        self.get_element_by_id(id)
    }
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Run `f` once the document structure is parsed. Runs immediately when the
/// page is already past the `loading` state.
pub fn on_content_loaded(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &opts,
    );
}

/// True when the click landed on `root` itself rather than inside it.
#[inline]
pub fn is_backdrop_click(ev: &web::MouseEvent, root: &web::Element) -> bool {
    ev.target()
        .is_some_and(|target| js_sys::Object::is(target.as_ref(), root.as_ref()))
}

/// Route clicks on `el` to `controller` as `event`.
pub fn bind_click(
    el: &web::Element,
    controller: &ModalController<web::Element>,
    event: ModalEvent,
) {
    let controller = controller.clone();
    let closure = Closure::wrap(Box::new(move || {
        controller.handle(event);
    }) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Close the modal on clicks that hit its backdrop.
pub fn bind_backdrop(controller: &ModalController<web::Element>) {
    let root = controller.root().clone();
    let controller = controller.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let on_backdrop = is_backdrop_click(&ev, controller.root());
        controller.handle(ModalEvent::RootClick { on_backdrop });
    }) as Box<dyn FnMut(_)>);
    _ = root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
