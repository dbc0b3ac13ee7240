use iced::event;
use iced::keyboard::{self, Key, key::Named};
use iced::widget::text_input;
use iced::{Element, Subscription, Task};

use crate::layout;
use crate::loader;
use crate::message::Message;
use crate::provider;
use crate::state::App;
use crate::ui;

impl App {
    /// Handle UI messages and state updates.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenPrompt => self.open_prompt(),
            Message::PromptInput(value) => {
                if let Some(prompt) = &mut self.prompt {
                    *prompt = value;
                }
                Task::none()
            }
            Message::PromptSubmitted => {
                let Some(input) = self.prompt.take() else {
                    return Task::none();
                };
                let url = input.trim().to_string();
                if url.is_empty() {
                    return Task::none();
                }
                if !provider::is_valid(&url) {
                    loader::reject_url(self, &url);
                    rfd::MessageDialog::new()
                        .set_level(rfd::MessageLevel::Error)
                        .set_title("Matinee")
                        .set_description("Invalid video url")
                        .show();
                    return Task::none();
                }
                loader::accept_url(self, &url)
            }
            Message::PromptCancelled => {
                self.prompt = None;
                Task::none()
            }
            Message::Promote(index) => {
                layout::promote_slot(self, index);
                Task::none()
            }
            Message::EmbedResolved(index, result) => {
                match result {
                    Ok(stream) => loader::fulfill_embed(self, index, stream),
                    Err(error) => loader::fail_embed(self, index, error),
                }
                Task::none()
            }
            Message::SlotHoverChanged(index, hovered) => {
                if let Some(slot) = self.slot_mut(index) {
                    slot.hovered = hovered;
                }
                Task::none()
            }
            Message::PlaybackEnded(index) => {
                log::info!("slot {} reached end of stream", index);
                let label = self
                    .slots
                    .iter()
                    .find(|slot| slot.index == index)
                    .map(|slot| slot.label.clone());
                if let Some(label) = label {
                    self.status = format!("Finished {}", label);
                }
                Task::none()
            }
            Message::EventOccurred(event) => self.handle_event(event),
        }
    }

    fn open_prompt(&mut self) -> Task<Message> {
        self.prompt = Some(String::new());
        text_input::focus(text_input::Id::new("url-prompt"))
    }

    /// Keyboard handling. `+` opens the url prompt; while the prompt is
    /// up it owns the keyboard and only Escape is acted on here.
    fn handle_event(&mut self, event: iced::Event) -> Task<Message> {
        let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
        else {
            return Task::none();
        };

        if self.prompt.is_some() {
            if matches!(key, Key::Named(Named::Escape)) {
                self.prompt = None;
            }
            return Task::none();
        }

        match &key {
            Key::Character(c) if c.as_str() == "+" => self.open_prompt(),
            _ => {
                if modifiers.control() {
                    log::debug!("key combination ctrl + {:?}", key);
                } else {
                    log::debug!("key pressed {:?}", key);
                }
                Task::none()
            }
        }
    }

    /// Subscribe to events.
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen().map(Message::EventOccurred)
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        ui::render_main_view(self)
    }
}
