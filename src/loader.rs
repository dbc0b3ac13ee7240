use iced::Task;
use iced_video_player::Video;

use crate::embed::{self, EmbedTarget};
use crate::layout;
use crate::message::Message;
use crate::player::PlayerHandle;
use crate::provider;
use crate::resolver::{self, ResolvedStream};
use crate::state::{App, Slot, SlotRole, SlotSurface};

/// Accept a pasted url: classify the provider, reserve the next slot
/// index and dispatch the embed. Urls with no recognized provider go
/// through `reject_url` instead and leave the session untouched.
pub fn accept_url(app: &mut App, url: &str) -> Task<Message> {
    let Some(provider) = provider::classify(url) else {
        reject_url(app, url);
        return Task::none();
    };

    app.error = None;
    let index = app.next_slot;
    app.next_slot += 1;

    match embed::build(provider, url) {
        Ok(target) => {
            let label = target.label();
            let player_url = target.player_url().map(str::to_string);
            let surface = match &target {
                EmbedTarget::Youtube { .. } | EmbedTarget::Twitch { .. } => {
                    SlotSurface::Player(PlayerHandle::new(provider))
                }
                EmbedTarget::Facebook { frame_url } => SlotSurface::Frame {
                    frame_url: frame_url.clone(),
                },
            };
            layout::place_new_slot(app, Slot::new(index, &target, surface));

            match player_url {
                Some(player_url) => {
                    app.status = format!("Loading {}...", label);
                    Task::perform(resolver::resolve_stream(player_url), move |result| {
                        Message::EmbedResolved(index, result.map_err(|e| e.to_string()))
                    })
                }
                None => {
                    app.status = format!("Added {}", label);
                    Task::none()
                }
            }
        }
        Err(e) => {
            // The slot is still created: indices are never reused, and the
            // failure stays visible where the video would have been.
            log::error!("{} embed failed for {}: {}", provider, url, e);
            let message = e.to_string();
            layout::place_new_slot(
                app,
                Slot {
                    index,
                    provider,
                    role: SlotRole::Main,
                    surface: SlotSurface::Failed(message.clone()),
                    hovered: false,
                    label: format!("{} (failed)", provider),
                },
            );
            app.status = format!("Could not embed {} video: {}", provider, message);
            Task::none()
        }
    }
}

/// Record a rejected url. No slot is created and the counter keeps its
/// value; the next accepted url gets the index this one did not take.
pub fn reject_url(app: &mut App, url: &str) {
    log::warn!("rejected url with no recognized provider: {}", url);
    app.error = Some("Invalid video url".to_string());
}

/// Hand a resolved stream to its slot's player handle. The handle applies
/// whatever mute state the layout latched while the resolver was running.
pub fn fulfill_embed(app: &mut App, index: usize, stream: ResolvedStream) {
    let stream_url = match url::Url::parse(&stream.stream_url) {
        Ok(parsed) => parsed,
        Err(e) => {
            fail_embed(app, index, format!("unusable stream url: {}", e));
            return;
        }
    };

    match Video::new(&stream_url) {
        Ok(video) => {
            let label = match app.slot_mut(index) {
                Some(slot) => {
                    if let Some(title) = stream.title {
                        slot.label = title;
                    }
                    match slot.handle_mut() {
                        Some(handle) => {
                            handle.fulfill(video);
                            slot.label.clone()
                        }
                        None => {
                            log::warn!("resolved stream for slot {} without a player", index);
                            return;
                        }
                    }
                }
                None => {
                    log::warn!("resolved stream for unknown slot {}", index);
                    return;
                }
            };
            app.status = format!("Playing {}", label);
        }
        Err(e) => {
            fail_embed(app, index, format!("failed to open stream: {}", e));
        }
    }
}

/// Mark a slot's embed as failed. The slot keeps its place in the layout
/// with the failure message where the video would have been.
pub fn fail_embed(app: &mut App, index: usize, error: String) {
    log::error!("embed for slot {} failed: {}", index, error);
    if let Some(slot) = app.slot_mut(index) {
        slot.surface = SlotSurface::Failed(error.clone());
    }
    app.status = format!("Embed failed: {}", error);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept(app: &mut App, url: &str) {
        let _ = accept_url(app, url);
    }

    #[test]
    fn accepted_urls_take_consecutive_indices() {
        let mut app = App::default();
        accept(&mut app, "https://www.twitch.tv/channel_one");
        accept(&mut app, "https://www.facebook.com/someone/videos/123/");

        assert_eq!(app.next_slot, 2);
        let indices: Vec<usize> = app.slots.iter().map(|slot| slot.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn unsupported_url_leaves_the_session_untouched() {
        let mut app = App::default();
        accept(&mut app, "https://example.com/video");

        assert!(app.slots.is_empty());
        assert_eq!(app.next_slot, 0);
        assert_eq!(app.error.as_deref(), Some("Invalid video url"));

        accept(&mut app, "https://www.twitch.tv/channel_one");
        assert_eq!(app.slots[0].index, 0);
        assert!(app.error.is_none());
    }

    #[test]
    fn new_accept_demotes_the_previous_main() {
        let mut app = App::default();
        accept(&mut app, "https://www.twitch.tv/channel_one");
        accept(&mut app, "https://www.twitch.tv/channel_two");

        assert_eq!(app.slots[0].role, SlotRole::Minor);
        assert!(app.slots[0].handle().unwrap().muted());
        assert!(app.slots[1].is_main());
    }

    #[test]
    fn facebook_embeds_get_a_frame_and_no_player() {
        let mut app = App::default();
        accept(&mut app, "https://www.facebook.com/someone/videos/123/");

        let slot = &app.slots[0];
        assert!(slot.handle().is_none());
        assert!(matches!(slot.surface, SlotSurface::Frame { .. }));
    }

    #[test]
    fn unextractable_youtube_id_still_consumes_a_slot() {
        let mut app = App::default();
        accept(&mut app, "https://www.youtube.com/feed/subscriptions");

        assert_eq!(app.next_slot, 1);
        assert!(matches!(app.slots[0].surface, SlotSurface::Failed(_)));
        accept(&mut app, "https://www.twitch.tv/channel_one");
        assert_eq!(app.slots[1].index, 1);
    }

    #[test]
    fn failed_embed_still_demotes_the_previous_main() {
        let mut app = App::default();
        accept(&mut app, "https://www.twitch.tv/channel_one");
        accept(&mut app, "https://www.youtube.com/feed/subscriptions");

        assert_eq!(app.slots[0].role, SlotRole::Minor);
        assert!(app.slots[0].handle().unwrap().muted());
        assert!(app.slots[1].is_main());
        assert!(matches!(app.slots[1].surface, SlotSurface::Failed(_)));
    }

    #[test]
    fn fail_embed_keeps_the_slot_in_place() {
        let mut app = App::default();
        accept(&mut app, "https://www.twitch.tv/channel_one");

        fail_embed(&mut app, 0, "resolver exploded".to_string());

        assert_eq!(app.slots.len(), 1);
        assert!(app.slots[0].is_main());
        match &app.slots[0].surface {
            SlotSurface::Failed(message) => assert_eq!(message, "resolver exploded"),
            _ => panic!("expected a failed surface"),
        }
    }

    #[test]
    fn fail_embed_for_unknown_slot_only_touches_status() {
        let mut app = App::default();
        fail_embed(&mut app, 9, "too late".to_string());
        assert!(app.slots.is_empty());
        assert!(app.status.contains("too late"));
    }
}
