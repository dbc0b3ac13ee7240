//! Stream resolution through yt-dlp.
//!
//! YouTube and Twitch pages are not directly playable, so we shell out to
//! yt-dlp (or youtube-dl) to turn the page url into a muxed stream url
//! the playback pipeline can open.

use std::process::Stdio;

use serde::Deserialize;
use tokio::process::Command;

use crate::embed::EmbedError;

/// A playable stream for one embed, as reported by the resolver.
#[derive(Clone, Debug)]
pub struct ResolvedStream {
    pub stream_url: String,
    pub title: Option<String>,
}

#[derive(Deserialize)]
struct ResolverOutput {
    url: Option<String>,
    title: Option<String>,
    #[serde(default)]
    formats: Vec<ResolverFormat>,
}

#[derive(Deserialize)]
struct ResolverFormat {
    url: Option<String>,
}

/// Resolve a provider page url into a playable stream url.
pub async fn resolve_stream(player_url: String) -> Result<ResolvedStream, EmbedError> {
    let resolver = find_resolver().await.ok_or(EmbedError::ResolverMissing)?;

    log::debug!("resolving {} with {}", player_url, resolver);
    let output = Command::new(&resolver)
        .args(["-j", "--no-playlist", "-f", "best"])
        .arg(&player_url)
        .stdin(Stdio::null())
        .output()
        .await?;

    if !output.status.success() {
        return Err(EmbedError::ResolverFailed(resolver_error(&output.stderr)));
    }

    parse_resolver_output(&output.stdout)
}

/// Find a working resolver executable. MATINEE_YTDLP overrides the search,
/// otherwise yt-dlp is preferred with youtube-dl as a fallback.
pub async fn find_resolver() -> Option<String> {
    if let Ok(path) = std::env::var("MATINEE_YTDLP") {
        if probe_resolver(&path).await {
            return Some(path);
        }
        log::warn!("MATINEE_YTDLP is set to {} but it does not run", path);
    }

    if probe_resolver("yt-dlp").await {
        return Some("yt-dlp".to_string());
    }

    if probe_resolver("youtube-dl").await {
        log::info!("yt-dlp not found, falling back to youtube-dl");
        return Some("youtube-dl".to_string());
    }

    None
}

async fn probe_resolver(bin: &str) -> bool {
    Command::new(bin)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|status| status.success())
        .unwrap_or(false)
}

fn parse_resolver_output(stdout: &[u8]) -> Result<ResolvedStream, EmbedError> {
    let parsed: ResolverOutput = serde_json::from_slice(stdout)?;

    // Prefer the top-level url; older resolvers only fill in formats.
    let stream_url = parsed
        .url
        .or_else(|| parsed.formats.into_iter().find_map(|format| format.url))
        .ok_or(EmbedError::NoStreamUrl)?;

    Ok(ResolvedStream {
        stream_url,
        title: parsed.title,
    })
}

/// yt-dlp mixes warnings into stderr; surface the ERROR line when there is
/// one.
fn resolver_error(stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    stderr
        .lines()
        .find(|line| line.starts_with("ERROR"))
        .or_else(|| stderr.lines().find(|line| !line.trim().is_empty()))
        .unwrap_or("resolver exited with an error")
        .to_string()
}
