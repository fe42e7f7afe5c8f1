use anyhow::{anyhow, Context};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up `#id` and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|el| anyhow!("#{id} has unexpected type <{}>", el.tag_name()))
}

/// All elements matching `selector`, in document order.
pub fn query_all<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<Vec<T>> {
    if selector.is_empty() {
        return Ok(Vec::new());
    }
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow!("querySelectorAll({selector}): {e:?}"))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Run `f` once after `delay`. Timers are not cancellable.
pub fn schedule(delay: Duration, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
    {
        log::error!("setTimeout error: {:?}", e);
    }
}

/// Match the canvas backing store to the viewport.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width((width as u32).max(1));
        canvas.set_height((height as u32).max(1));
    }
}

pub fn inject_stylesheet(document: &web::Document, css: &str) -> anyhow::Result<()> {
    let head = document.head().context("document has no <head>")?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow!("create <style>: {e:?}"))?;
    style.set_text_content(Some(css));
    head.append_child(&style)
        .map_err(|e| anyhow!("append <style>: {e:?}"))?;
    Ok(())
}

pub fn set_inline_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("style {}={} failed: {:?}", property, value, e);
    }
}
