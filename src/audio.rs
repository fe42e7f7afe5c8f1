use crate::dom;
use crate::events;
use heart_core::{AudioPolicy, Signal, VolumeGate};
use std::cell::RefCell;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Try to start the music after the autoplay delay. Failure is logged only.
pub fn schedule_autoplay(audio: web::HtmlAudioElement, policy: &AudioPolicy) {
    dom::schedule(policy.autoplay_delay, move || {
        let promise = match audio.play() {
            Ok(p) => p,
            Err(e) => {
                log::info!("Autoplay prevented by browser: {:?}", e);
                return;
            }
        };
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => log::info!("[audio] playing"),
                Err(e) => log::info!("Autoplay prevented by browser: {:?}", e),
            }
        });
    });
}

/// Lower the volume on the first click anywhere in `body`.
pub fn wire_first_interaction_volume(
    body: &web::HtmlElement,
    audio: web::HtmlAudioElement,
    policy: &AudioPolicy,
) -> anyhow::Result<()> {
    let gate = RefCell::new(VolumeGate::new(policy));
    events::listen_once(body, Signal::FirstInteraction, move |_| {
        if let Some(volume) = gate.borrow_mut().on_interaction() {
            audio.set_volume(volume);
            log::info!("[audio] volume set to {}", volume);
        }
    })
    .map_err(|e| anyhow::anyhow!("subscribe {:?}: {:?}", Signal::FirstInteraction, e))
}
