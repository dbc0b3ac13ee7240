use crate::state::{App, Slot, SlotRole};

/// Demote whichever slot currently holds the main screen to a muted
/// minor. With no main slot this does nothing.
pub fn demote_current_main(app: &mut App) {
    if let Some(slot) = app.slots.iter_mut().find(|slot| slot.is_main()) {
        slot.role = SlotRole::Minor;
        if let Some(handle) = slot.handle_mut() {
            handle.mute();
        }
        log::debug!("slot {} demoted to minor", slot.index);
    }
}

/// Promote a minor slot to the main screen: the current main is demoted
/// and muted, the target is unmuted. Promoting the slot that already
/// holds the main screen, or an unknown index, does nothing.
pub fn promote_slot(app: &mut App, index: usize) {
    let Some(target) = app.slots.iter().find(|slot| slot.index == index) else {
        log::warn!("promote requested for unknown slot {}", index);
        return;
    };
    if target.is_main() {
        return;
    }

    demote_current_main(app);

    if let Some(slot) = app.slot_mut(index) {
        slot.role = SlotRole::Main;
        if let Some(handle) = slot.handle_mut() {
            handle.unmute();
        }
        log::info!("slot {} promoted to main", index);
    }
}

/// Place a newly accepted slot: it takes the main screen and the previous
/// main becomes a muted minor.
pub fn place_new_slot(app: &mut App, slot: Slot) {
    demote_current_main(app);
    log::info!(
        "slot {} placed as main ({}), total_slots={}",
        slot.index,
        slot.label,
        app.slots.len() + 1
    );
    app.slots.push(slot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed;
    use crate::player::PlayerHandle;
    use crate::provider::Provider;
    use crate::state::SlotSurface;

    fn twitch_slot(index: usize) -> Slot {
        let target = embed::build(Provider::Twitch, "https://www.twitch.tv/somechannel").unwrap();
        Slot::new(
            index,
            &target,
            SlotSurface::Player(PlayerHandle::new(Provider::Twitch)),
        )
    }

    fn facebook_slot(index: usize) -> Slot {
        let target = embed::build(
            Provider::Facebook,
            "https://www.facebook.com/someone/videos/123/",
        )
        .unwrap();
        let frame_url = match &target {
            embed::EmbedTarget::Facebook { frame_url } => frame_url.clone(),
            _ => unreachable!(),
        };
        Slot::new(index, &target, SlotSurface::Frame { frame_url })
    }

    fn main_indices(app: &App) -> Vec<usize> {
        app.slots
            .iter()
            .filter(|slot| slot.is_main())
            .map(|slot| slot.index)
            .collect()
    }

    #[test]
    fn first_slot_takes_the_main_screen() {
        let mut app = App::default();
        place_new_slot(&mut app, twitch_slot(0));
        assert_eq!(main_indices(&app), vec![0]);
    }

    #[test]
    fn new_slot_demotes_and_mutes_previous_main() {
        let mut app = App::default();
        place_new_slot(&mut app, twitch_slot(0));
        place_new_slot(&mut app, twitch_slot(1));

        assert_eq!(main_indices(&app), vec![1]);
        assert_eq!(app.slots[0].role, SlotRole::Minor);
        assert!(app.slots[0].handle().unwrap().muted());
        assert!(!app.slots[1].handle().unwrap().muted());
    }

    #[test]
    fn promote_swaps_roles_and_mute_states() {
        let mut app = App::default();
        place_new_slot(&mut app, twitch_slot(0));
        place_new_slot(&mut app, twitch_slot(1));

        promote_slot(&mut app, 0);

        assert_eq!(main_indices(&app), vec![0]);
        assert!(!app.slots[0].handle().unwrap().muted());
        assert_eq!(app.slots[1].role, SlotRole::Minor);
        assert!(app.slots[1].handle().unwrap().muted());
    }

    #[test]
    fn promoting_the_current_main_changes_nothing() {
        let mut app = App::default();
        place_new_slot(&mut app, twitch_slot(0));
        place_new_slot(&mut app, twitch_slot(1));

        promote_slot(&mut app, 1);

        assert_eq!(main_indices(&app), vec![1]);
        assert!(!app.slots[1].handle().unwrap().muted());
    }

    #[test]
    fn promoting_an_unknown_index_changes_nothing() {
        let mut app = App::default();
        place_new_slot(&mut app, twitch_slot(0));

        promote_slot(&mut app, 7);

        assert_eq!(main_indices(&app), vec![0]);
    }

    #[test]
    fn demote_without_a_main_is_a_no_op() {
        let mut app = App::default();
        place_new_slot(&mut app, twitch_slot(0));
        app.slots[0].role = SlotRole::Minor;

        demote_current_main(&mut app);

        assert!(main_indices(&app).is_empty());
    }

    #[test]
    fn facebook_slots_move_between_roles_without_a_handle() {
        let mut app = App::default();
        place_new_slot(&mut app, facebook_slot(0));
        place_new_slot(&mut app, twitch_slot(1));

        assert_eq!(app.slots[0].role, SlotRole::Minor);
        assert!(app.slots[0].handle().is_none());

        promote_slot(&mut app, 0);
        assert_eq!(main_indices(&app), vec![0]);
        assert!(app.slots[1].handle().unwrap().muted());
    }

    #[test]
    fn at_most_one_main_after_any_sequence() {
        let mut app = App::default();
        place_new_slot(&mut app, twitch_slot(0));
        place_new_slot(&mut app, facebook_slot(1));
        place_new_slot(&mut app, twitch_slot(2));
        promote_slot(&mut app, 1);
        promote_slot(&mut app, 0);
        promote_slot(&mut app, 0);

        assert_eq!(main_indices(&app).len(), 1);
    }
}
