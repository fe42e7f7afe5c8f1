use crate::dom;
use crate::events;
use heart_core::{class_selector, PageConfig, PageTransition, Signal, TransitionStep};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct TransitionWiring {
    pub document: web::Document,
    pub landing: web::HtmlElement,
    pub main: web::HtmlElement,
    pub button: web::HtmlElement,
    pub config: Rc<PageConfig>,
}

pub fn wire_enter_button(w: TransitionWiring) -> anyhow::Result<()> {
    let gate = Rc::new(RefCell::new(PageTransition::new(w.config.transition)));
    let button = w.button.clone();
    events::listen(&button, Signal::Activate, move |_| {
        let Some(plan) = gate.borrow_mut().activate() else {
            log::debug!("[transition] already activated");
            return;
        };
        let selector = class_selector(w.config.entrance_sections);
        let sections = match dom::query_all::<web::HtmlElement>(&w.document, &selector) {
            Ok(s) => Rc::new(s),
            Err(e) => {
                log::error!("[transition] {:?}", e);
                Rc::new(Vec::new())
            }
        };
        log::info!("[transition] activated, {} sections to cascade", sections.len());
        for scheduled in plan.steps(sections.len()) {
            if scheduled.at.is_zero() {
                run_step(&w, &sections, scheduled.step);
                continue;
            }
            let w = w.clone();
            let sections = sections.clone();
            dom::schedule(scheduled.at, move || run_step(&w, &sections, scheduled.step));
        }
    })
    .map_err(|e| anyhow::anyhow!("subscribe {:?}: {:?}", Signal::Activate, e))
}

fn run_step(w: &TransitionWiring, sections: &[web::HtmlElement], step: TransitionStep) {
    match step {
        TransitionStep::FadeOutLanding => dom::set_inline_style(&w.landing, "opacity", "0"),
        TransitionStep::SwapViews => swap_views(w),
        TransitionStep::EnterSection(i) => {
            if let Some(section) = sections.get(i) {
                dom::set_inline_style(section, "animation", w.config.entrance_animation);
            }
        }
    }
}

fn swap_views(w: &TransitionWiring) {
    let hidden = w.config.hidden_class;
    if let Err(e) = w.landing.class_list().add_1(hidden) {
        log::warn!("hide landing: {:?}", e);
    }
    if let Err(e) = w.main.class_list().remove_1(hidden) {
        log::warn!("show main: {:?}", e);
    }
    log::info!("[transition] main view shown");
}
