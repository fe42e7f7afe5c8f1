#![cfg(target_arch = "wasm32")]
use heart_core::{reveal_stylesheet, AnimationContext, PageConfig, Signal};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod dom;
mod events;
mod frame;
mod render;
mod reveal;
mod transition;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> anyhow::Result<()> {
    dom::sync_canvas_to_viewport(canvas);
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let canvas_resize = canvas.clone();
    events::listen(&window, Signal::Resize, move |_| {
        dom::sync_canvas_to_viewport(&canvas_resize);
    })
    .map_err(|e| anyhow::anyhow!("subscribe {:?}: {:?}", Signal::Resize, e))
}

fn start_particles(canvas: web::HtmlCanvasElement, config: &PageConfig) -> anyhow::Result<()> {
    let surface = render::CanvasSurface::new(&canvas)?;
    let animation = AnimationContext::new(
        config.particles.clone(),
        render::canvas_bounds(&canvas),
        StdRng::from_entropy(),
    );
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        animation,
        canvas,
        surface,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn start_audio(document: &web::Document, config: &PageConfig) -> anyhow::Result<()> {
    let audio_el: web::HtmlAudioElement = dom::element_by_id(document, config.ids.audio)?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no <body>"))?;
    audio::schedule_autoplay(audio_el.clone(), &config.audio);
    audio::wire_first_interaction_volume(&body, audio_el, &config.audio)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let config = Rc::new(PageConfig::default());
    config.validate()?;

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let css = reveal_stylesheet(config.reveal.sections, config.reveal.revealed_class);
    if let Err(e) = dom::inject_stylesheet(&document, &css) {
        log::error!("stylesheet: {:?}", e);
    }

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, config.ids.canvas)?;
    wire_canvas_resize(&canvas)?;
    start_particles(canvas, &config)?;

    transition::wire_enter_button(transition::TransitionWiring {
        document: document.clone(),
        landing: dom::element_by_id(&document, config.ids.landing)?,
        main: dom::element_by_id(&document, config.ids.main)?,
        button: dom::element_by_id(&document, config.ids.enter_button)?,
        config: config.clone(),
    })?;

    if let Err(e) = reveal::wire_scroll_reveal(&document, &config.reveal) {
        log::error!("scroll reveal: {:?}", e);
    }

    // The page works without music.
    if let Err(e) = start_audio(&document, &config) {
        log::warn!("audio: {:?}", e);
    }

    Ok(())
}
