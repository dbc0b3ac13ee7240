//! Vendor player handles.
//!
//! A handle is recorded under its slot as soon as the embed is dispatched,
//! before the vendor has produced anything playable. Mute state set while
//! the vendor is still initializing is latched and applied by the
//! single-shot ready fulfillment, so the ready choreography (full volume,
//! unmuted, playing) only takes effect if the slot still holds the main
//! screen by then.

use iced_video_player::Video;

use crate::provider::Provider;

/// Control surface over one vendor player. Capability set: mute, unmute,
/// set-muted. Only YouTube and Twitch slots carry one; Facebook embeds
/// have no control surface by design.
pub struct PlayerHandle {
    provider: Provider,
    video: Option<Video>,
    muted: bool,
}

impl PlayerHandle {
    pub fn new(provider: Provider) -> Self {
        PlayerHandle {
            provider,
            video: None,
            muted: false,
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// The playable widget source, once the vendor is ready.
    pub fn video(&self) -> Option<&Video> {
        self.video.as_ref()
    }

    pub fn mute(&mut self) {
        self.set_muted(true);
    }

    pub fn unmute(&mut self) {
        self.set_muted(false);
    }

    /// Set the desired mute state: applied immediately when the vendor
    /// player exists, latched for fulfillment otherwise.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(video) = &mut self.video {
            apply_mute(video, muted);
        }
    }

    /// One-shot ready fulfillment: adopt the vendor player, apply the
    /// latched mute state and start playback. A repeated ready event is
    /// ignored.
    pub fn fulfill(&mut self, mut video: Video) {
        if self.video.is_some() {
            log::warn!("{} player ready fired twice, ignoring", self.provider);
            return;
        }
        apply_mute(&mut video, self.muted);
        video.set_paused(false);
        self.video = Some(video);
        log::info!("{} player ready (muted: {})", self.provider, self.muted);
    }
}

/// Mute pairs volume with the muted flag so unmuting always comes back at
/// full volume.
fn apply_mute(video: &mut Video, muted: bool) {
    if muted {
        video.set_volume(0.0);
        video.set_muted(true);
    } else {
        video.set_volume(1.0);
        video.set_muted(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_handles_start_unmuted_and_pending() {
        let handle = PlayerHandle::new(Provider::Youtube);
        assert!(!handle.muted());
        assert!(handle.video().is_none());
    }

    #[test]
    fn mute_latches_while_pending() {
        let mut handle = PlayerHandle::new(Provider::Twitch);
        handle.mute();
        assert!(handle.muted());
        assert!(handle.video().is_none());

        handle.unmute();
        assert!(!handle.muted());
    }

    #[test]
    fn set_muted_mirrors_mute_and_unmute() {
        let mut handle = PlayerHandle::new(Provider::Youtube);
        handle.set_muted(true);
        assert!(handle.muted());
        handle.set_muted(false);
        assert!(!handle.muted());
    }
}
