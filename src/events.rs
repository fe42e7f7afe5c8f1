use heart_core::Signal;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Subscribe `handler` to `signal` on `target` for the life of the page.
pub fn listen(
    target: &web::EventTarget,
    signal: Signal,
    mut handler: impl FnMut(web::Event) + 'static,
) -> Result<(), JsValue> {
    let closure =
        Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    target.add_event_listener_with_callback(signal.event_name(), closure.as_ref().unchecked_ref())?;
    closure.forget();
    log::debug!("[signal] {:?} subscribed", signal);
    Ok(())
}

/// Subscribe a handler that runs at most once and then deregisters itself.
///
/// Registered with the `once` listener option and removed explicitly on first
/// dispatch, so rapid repeated events cannot run it twice.
pub fn listen_once(
    target: &web::EventTarget,
    signal: Signal,
    handler: impl FnOnce(web::Event) + 'static,
) -> Result<(), JsValue> {
    let handler = RefCell::new(Some(handler));
    let registered: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
    let registered_inner = registered.clone();
    let target_inner = target.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(f) = registered_inner.borrow_mut().take() {
            _ = target_inner.remove_event_listener_with_callback(signal.event_name(), &f);
        }
        if let Some(h) = handler.borrow_mut().take() {
            h(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);

    let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        signal.event_name(),
        &function,
        &options,
    )?;
    *registered.borrow_mut() = Some(function);
    closure.forget();
    log::debug!("[signal] {:?} subscribed once", signal);
    Ok(())
}
