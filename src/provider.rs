use std::fmt;

/// The three supported video providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Youtube,
    Twitch,
    Facebook,
}

impl Provider {
    /// Short lowercase tag used in logs and cell captions.
    pub fn tag(self) -> &'static str {
        match self {
            Provider::Youtube => "youtube",
            Provider::Twitch => "twitch",
            Provider::Facebook => "facebook",
        }
    }

    /// Whether this provider's player exposes mute/volume control.
    /// Facebook embeds are static frames with no control surface.
    pub fn has_playback_control(self) -> bool {
        !matches!(self, Provider::Facebook)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Classify a pasted URL into a provider.
///
/// Substring containment against the known domains, first match wins in
/// fixed priority order: YouTube, then Twitch, then Facebook. A string
/// containing markers for more than one provider classifies as the first.
pub fn classify(url: &str) -> Option<Provider> {
    if url.contains("youtube.com") || url.contains("youtu.be") {
        return Some(Provider::Youtube);
    }
    if url.contains("twitch.tv") {
        return Some(Provider::Twitch);
    }
    if url.contains("facebook.com") {
        return Some(Provider::Facebook);
    }
    None
}

/// Whether a pasted URL belongs to any supported provider.
pub fn is_valid(url: &str) -> bool {
    classify(url).is_some()
}
