//! The DOM events the page subscribes to, one responsibility each.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Window resized: match the canvas backing size to the viewport.
    Resize,
    /// Enter button activated: run the landing-to-main transition.
    Activate,
    /// First click anywhere on the page: lower the music volume.
    FirstInteraction,
}

impl Signal {
    pub const ALL: [Signal; 3] = [Signal::Resize, Signal::Activate, Signal::FirstInteraction];

    pub fn event_name(self) -> &'static str {
        match self {
            Signal::Resize => "resize",
            Signal::Activate | Signal::FirstInteraction => "click",
        }
    }

    /// Whether the subscription removes itself after the first event.
    pub fn is_one_shot(self) -> bool {
        matches!(self, Signal::FirstInteraction)
    }
}
