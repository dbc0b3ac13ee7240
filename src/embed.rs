//! Provider-specific embed construction.
//!
//! Each accepted URL is turned into exactly one embed target: the piece of
//! data the vendor player is instantiated with. YouTube needs an
//! 11-character video id, Twitch a channel name, Facebook a static frame
//! URL. Nothing here touches the network.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::provider::Provider;

/// Matches the three standard YouTube URL shapes (`watch?v=`, `youtu.be/`,
/// `/embed/`) followed by an exactly 11-character video id.
static YOUTUBE_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:watch\?v=|youtu\.be/|/embed/)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)").unwrap()
});

const FACEBOOK_PLUGIN_ENDPOINT: &str = "https://www.facebook.com/plugins/video.php";

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("no 11-character video id in url: {0}")]
    VideoIdNotFound(String),
    #[error("no channel name in url: {0}")]
    ChannelNotFound(String),
    #[error("no stream resolver found; install yt-dlp or set MATINEE_YTDLP")]
    ResolverMissing,
    #[error("resolver failed: {0}")]
    ResolverFailed(String),
    #[error("resolver returned no playable stream url")]
    NoStreamUrl,
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// What the vendor player for one slot is asked to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedTarget {
    /// YouTube video, played via its canonical watch URL.
    Youtube { video_id: String, watch_url: String },
    /// Twitch channel, played via the channel URL.
    Twitch { channel: String, channel_url: String },
    /// Facebook video-plugin frame; static, no playable stream of ours.
    Facebook { frame_url: String },
}

impl EmbedTarget {
    pub fn provider(&self) -> Provider {
        match self {
            EmbedTarget::Youtube { .. } => Provider::Youtube,
            EmbedTarget::Twitch { .. } => Provider::Twitch,
            EmbedTarget::Facebook { .. } => Provider::Facebook,
        }
    }

    /// URL handed to the stream resolver, for providers that have one.
    pub fn player_url(&self) -> Option<&str> {
        match self {
            EmbedTarget::Youtube { watch_url, .. } => Some(watch_url),
            EmbedTarget::Twitch { channel_url, .. } => Some(channel_url),
            EmbedTarget::Facebook { .. } => None,
        }
    }

    /// Short caption for cells, the status line and logs.
    pub fn label(&self) -> String {
        match self {
            EmbedTarget::Youtube { video_id, .. } => format!("youtube · {video_id}"),
            EmbedTarget::Twitch { channel, .. } => format!("twitch · {channel}"),
            EmbedTarget::Facebook { .. } => "facebook · external frame".to_string(),
        }
    }
}

/// Build the embed target for an already-classified URL.
pub fn build(provider: Provider, url: &str) -> Result<EmbedTarget, EmbedError> {
    match provider {
        Provider::Youtube => {
            let video_id = extract_youtube_id(url)
                .ok_or_else(|| EmbedError::VideoIdNotFound(url.to_string()))?;
            let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
            Ok(EmbedTarget::Youtube { video_id, watch_url })
        }
        Provider::Twitch => {
            let channel = extract_twitch_channel(url)
                .ok_or_else(|| EmbedError::ChannelNotFound(url.to_string()))?;
            let channel_url = format!("https://www.twitch.tv/{channel}");
            Ok(EmbedTarget::Twitch { channel, channel_url })
        }
        Provider::Facebook => Ok(EmbedTarget::Facebook {
            frame_url: facebook_frame_url(url),
        }),
    }
}

/// Extract the 11-character video id from a YouTube URL, or None if the
/// URL matches none of the standard shapes.
pub fn extract_youtube_id(url: &str) -> Option<String> {
    YOUTUBE_ID_REGEX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
}

/// Extract the channel name: the path segment after the URL's last `/`,
/// with query and fragment stripped first.
pub fn extract_twitch_channel(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let channel = path.rsplit('/').next().unwrap_or("");
    if channel.is_empty() {
        None
    } else {
        Some(channel.to_string())
    }
}

/// Build the static frame URL: the Facebook video-plugin endpoint with the
/// original URL as an encoded `href` parameter.
pub fn facebook_frame_url(url: &str) -> String {
    Url::parse_with_params(FACEBOOK_PLUGIN_ENDPOINT, &[("href", url)])
        .map(|u| u.to_string())
        .unwrap_or_else(|_| format!("{FACEBOOK_PLUGIN_ENDPOINT}?href={url}"))
}
