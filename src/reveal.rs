use crate::dom;
use heart_core::{class_selector, RevealConfig, RevealTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe every reveal section once; flag each the first time it enters.
pub fn wire_scroll_reveal(document: &web::Document, config: &RevealConfig) -> anyhow::Result<()> {
    let sections: Rc<Vec<web::Element>> =
        Rc::new(dom::query_all(document, &class_selector(config.sections))?);
    if sections.is_empty() {
        log::warn!("[reveal] no sections to observe");
        return Ok(());
    }

    let tracker = RefCell::new(RevealTracker::new());
    let revealed_class = config.revealed_class;
    let sections_cb = sections.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = sections_cb.iter().position(|s| *s == target) else {
                    continue;
                };
                if !tracker.borrow_mut().observe(index, entry.is_intersecting()) {
                    continue;
                }
                if let Err(e) = target.class_list().add_1(revealed_class) {
                    log::warn!("[reveal] section {}: {:?}", index, e);
                }
                observer.unobserve(&target);
                log::debug!("[reveal] section {} revealed", index);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(config.root_margin);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {e:?}"))?;
    callback.forget();

    for section in sections.iter() {
        observer.observe(section);
    }
    log::info!("[reveal] observing {} sections", sections.len());
    Ok(())
}
