use crate::embed::EmbedTarget;
use crate::player::PlayerHandle;
use crate::provider::Provider;

/// Position of a slot in the session layout. At most one slot is Main at
/// any time; every other slot is a muted Minor thumbnail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotRole {
    Main,
    Minor,
}

/// What a slot actually renders. Controllable providers get a player
/// handle (pending until the vendor is ready), Facebook gets a static
/// frame with no control surface, and a failed embed keeps its slot with
/// the failure message.
pub enum SlotSurface {
    Player(PlayerHandle),
    Frame { frame_url: String },
    Failed(String),
}

/// A single accepted video and its place in the session. Slots are
/// append-only: indices come from a counter that never repeats a value,
/// even when the embed later fails.
pub struct Slot {
    pub index: usize,
    pub provider: Provider,
    pub role: SlotRole,
    pub surface: SlotSurface,
    pub hovered: bool,
    pub label: String,
}

impl Slot {
    /// New slot for an accepted embed target. Every newly placed slot
    /// takes the main screen; layout demotes the previous main.
    pub fn new(index: usize, target: &EmbedTarget, surface: SlotSurface) -> Self {
        Slot {
            index,
            provider: target.provider(),
            role: SlotRole::Main,
            surface,
            hovered: false,
            label: target.label(),
        }
    }

    pub fn is_main(&self) -> bool {
        self.role == SlotRole::Main
    }

    pub fn handle(&self) -> Option<&PlayerHandle> {
        match &self.surface {
            SlotSurface::Player(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn handle_mut(&mut self) -> Option<&mut PlayerHandle> {
        match &mut self.surface {
            SlotSurface::Player(handle) => Some(handle),
            _ => None,
        }
    }
}

/// Application state: the watch session plus UI chrome.
pub struct App {
    pub slots: Vec<Slot>,
    pub next_slot: usize,
    pub prompt: Option<String>,
    pub error: Option<String>,
    pub status: String,
}

impl Default for App {
    fn default() -> Self {
        App {
            slots: Vec::new(),
            next_slot: 0,
            prompt: None,
            error: None,
            status: "Press + to add a video from YouTube, Twitch or Facebook".to_string(),
        }
    }
}

impl App {
    pub fn main_slot(&self) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.is_main())
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|slot| slot.index == index)
    }
}
