use iced::Event;

use crate::resolver::ResolvedStream;

#[derive(Clone, Debug)]
pub enum Message {
    OpenPrompt,
    PromptInput(String),
    PromptSubmitted,
    PromptCancelled,
    Promote(usize),
    EmbedResolved(usize, Result<ResolvedStream, String>), // slot index, stream or error
    SlotHoverChanged(usize, bool),
    PlaybackEnded(usize),
    EventOccurred(Event),
}
