use iced::widget::{
    button, center, column, container, mouse_area, row, stack, text, text_input,
};
use iced::{alignment, Color, Element, Length, Theme};
use iced_video_player::VideoPlayer;

use crate::message::Message;
use crate::provider;
use crate::state::{App, Slot, SlotSurface};

/// Render the main view.
pub fn render_main_view(app: &App) -> Element<'_, Message> {
    let base: Element<'_, Message> = if app.slots.is_empty() {
        render_empty_state(app)
    } else {
        render_session(app)
    };

    match &app.prompt {
        Some(value) => stack![base, render_url_prompt(value)].into(),
        None => base,
    }
}

/// The pre-session screen with the big add button.
fn render_empty_state(app: &App) -> Element<'_, Message> {
    let mut content = column![
        text("Matinee").size(48),
        text("Watch YouTube, Twitch and Facebook videos together").size(16),
        button(text("[+ Add Video]").size(18))
            .padding(10)
            .on_press(Message::OpenPrompt),
        text("or press + and paste a video url").size(12),
    ]
    .spacing(20)
    .align_x(alignment::Horizontal::Center);

    if let Some(error) = &app.error {
        content = content.push(text(error.clone()).size(14).color(Color::from_rgb8(255, 100, 100)));
    }
    content = content.push(text(app.status.clone()).size(12));

    center(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The running session: main screen on top, minor thumbnails in a strip
/// underneath, status bar at the bottom.
fn render_session(app: &App) -> Element<'_, Message> {
    let main_view: Element<'_, Message> = match app.main_slot() {
        Some(slot) => create_main_cell(slot),
        None => center(text("Click a thumbnail to pick the main video").size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let minors: Vec<Element<'_, Message>> = app
        .slots
        .iter()
        .filter(|slot| !slot.is_main())
        .map(create_minor_cell)
        .collect();

    let mut layers = column![main_view]
        .spacing(5)
        .width(Length::Fill)
        .height(Length::Fill);

    if !minors.is_empty() {
        layers = layers.push(
            row(minors)
                .spacing(5)
                .width(Length::Fill)
                .height(Length::Fixed(150.0)),
        );
    }

    if let Some(error) = &app.error {
        layers = layers.push(render_error_strip(error));
    }

    layers.push(render_controls_bar(app)).into()
}

/// Create the main screen cell. No promote affordance here, hovering only
/// shows the caption overlay.
fn create_main_cell(slot: &Slot) -> Element<'_, Message> {
    let mut stack_content = stack![render_surface(slot)];
    if slot.hovered {
        stack_content = stack_content.push(build_slot_overlay(slot, None));
    }

    mouse_area(stack_content)
        .on_enter(Message::SlotHoverChanged(slot.index, true))
        .on_exit(Message::SlotHoverChanged(slot.index, false))
        .into()
}

/// Create a minor thumbnail cell. Clicking it promotes the slot to the
/// main screen.
fn create_minor_cell(slot: &Slot) -> Element<'_, Message> {
    let mut stack_content = stack![render_surface(slot)];
    if slot.hovered {
        stack_content = stack_content.push(build_slot_overlay(slot, Some("click to watch")));
    }

    mouse_area(stack_content)
        .on_enter(Message::SlotHoverChanged(slot.index, true))
        .on_exit(Message::SlotHoverChanged(slot.index, false))
        .on_press(Message::Promote(slot.index))
        .into()
}

/// Render what a slot currently shows: the player once the stream is up,
/// otherwise a waiting, frame or failure card.
fn render_surface(slot: &Slot) -> Element<'_, Message> {
    match &slot.surface {
        SlotSurface::Player(handle) => match handle.video() {
            Some(video) => container(
                VideoPlayer::new(video).on_end_of_stream(Message::PlaybackEnded(slot.index)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
            None => placeholder_cell(format!("Waiting for {} player...", handle.provider())),
        },
        SlotSurface::Frame { frame_url } => {
            let mut card = column![
                text(slot.provider.tag()).size(16),
                text(frame_url.clone()).size(11),
            ]
            .spacing(8)
            .align_x(alignment::Horizontal::Center);
            if !slot.provider.has_playback_control() {
                card = card.push(text("embedded frame, no playback control").size(11));
            }
            center(card).width(Length::Fill).height(Length::Fill).into()
        }
        SlotSurface::Failed(message) => center(
            column![
                text("Embed failed").size(16),
                text(message.clone())
                    .size(11)
                    .color(Color::from_rgb8(255, 100, 100)),
            ]
            .spacing(8)
            .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
    }
}

fn placeholder_cell(message: String) -> Element<'static, Message> {
    center(text(message).size(14))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Build the hover overlay for a slot: label and provider on top, mute
/// state and the promote hint at the bottom.
fn build_slot_overlay<'a>(slot: &'a Slot, hint: Option<&'static str>) -> Element<'a, Message> {
    let muted = slot.handle().map(|handle| handle.muted()).unwrap_or(false);

    let mut bottom = row![]
        .spacing(10)
        .align_y(alignment::Vertical::Center)
        .padding(10);
    if muted {
        bottom = bottom.push(text("muted").size(12).color(Color::WHITE));
    }
    if let Some(hint) = hint {
        bottom = bottom.push(text(hint).size(12).color(Color::WHITE));
    }

    container(column![
        row![
            text(format!("#{} {}", slot.index, slot.label))
                .size(14)
                .color(Color::WHITE),
            container("").width(Length::Fill),
            text(slot.provider.tag()).size(12).color(Color::WHITE),
        ]
        .padding(10),
        container("").height(Length::Fill),
        bottom,
    ])
    .style(|_theme: &Theme| container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.7).into()),
        ..Default::default()
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// A thin error strip between the session and the status bar. The session
/// itself stays interactive underneath.
fn render_error_strip(error: &str) -> Element<'_, Message> {
    container(text(format!("Error: {}", error)).size(14).color(Color::WHITE))
        .padding(8)
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgba(0.5, 0.1, 0.1, 0.9).into()),
            ..Default::default()
        })
        .into()
}

/// The modal url prompt. It sits on a dimmed backdrop over the whole
/// window and owns the keyboard until submitted or dismissed.
fn render_url_prompt(value: &str) -> Element<'_, Message> {
    let mut form = column![
        text("Add a video").size(20),
        text_input("Paste a YouTube, Twitch or Facebook url", value)
            .id(text_input::Id::new("url-prompt"))
            .on_input(Message::PromptInput)
            .on_submit(Message::PromptSubmitted)
            .padding(10)
            .size(16)
            .width(Length::Fixed(520.0)),
    ]
    .spacing(15);

    if !value.trim().is_empty() && !provider::is_valid(value) {
        form = form.push(
            text("That url is not from YouTube, Twitch or Facebook")
                .size(12)
                .color(Color::from_rgb8(255, 100, 100)),
        );
    }

    let card = container(
        form.push(
            row![
                button(text("[Add]").size(14))
                    .on_press(Message::PromptSubmitted)
                    .padding(8),
                button(text("[Cancel]").size(14))
                    .on_press(Message::PromptCancelled)
                    .padding(8),
            ]
            .spacing(10),
        ),
    )
    .padding(20)
    .style(|_theme: &Theme| container::Style {
        background: Some(Color::from_rgb8(28, 28, 30).into()),
        ..Default::default()
    });

    center(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.7).into()),
            ..Default::default()
        })
        .into()
}

/// Render the bottom status bar.
fn render_controls_bar(app: &App) -> Element<'_, Message> {
    let count = app.slots.len();
    let count_text = format!("{} video{}", count, if count == 1 { "" } else { "s" });

    container(
        row![
            text(app.status.clone()).size(12),
            container("").width(Length::Fill),
            text(count_text).size(12),
            button(text("[+ Add]").size(14))
                .on_press(Message::OpenPrompt)
                .padding(5),
        ]
        .spacing(10)
        .align_y(alignment::Vertical::Center),
    )
    .padding(5)
    .width(Length::Fill)
    .into()
}
