//! Transcript Acquisition
//!
//! Video-platform integration lives behind two collaborator seams: a resolver
//! that looks up an existing transcript for a URL, and a remote transcriber
//! consulted only when no transcript exists. The crate owns the URL-to-video-id
//! parsing those collaborators share.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::Regex;
use url::Url;

use crate::constants::video::VIDEO_ID_LEN;
use crate::types::{EthoscanError, Result};

/// Outcome of resolving a video URL: the platform video id, plus the existing
/// transcript when one is already available.
#[derive(Debug, Clone)]
pub struct ResolvedTranscript {
    pub transcript: Option<String>,
    pub video_id: String,
}

/// Looks up an existing transcript for a video URL.
#[async_trait]
pub trait TranscriptResolver: Send + Sync {
    /// Fails with `InvalidUrl` when no platform video id can be extracted.
    async fn resolve(&self, url: &str) -> Result<ResolvedTranscript>;
}

/// Produces a transcript for a video that has none.
#[async_trait]
pub trait RemoteTranscriber: Send + Sync {
    async fn transcribe(&self, video_id: &str) -> Result<String>;
}

pub type SharedResolver = Arc<dyn TranscriptResolver + Send + Sync>;
pub type SharedTranscriber = Arc<dyn RemoteTranscriber + Send + Sync>;

// =============================================================================
// Video Id Parsing
// =============================================================================

/// Fallback for strings the URL parser rejects; the capture must be a full
/// 11-character video id.
static VIDEO_ID_FALLBACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|/v/|/u/\w/|embed/|watch\?v=|&v=)([^#&?/]*)").expect("static regex")
});

/// Extract the platform video id from the URL formats users paste.
pub fn extract_video_id(url: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(url) {
        match parsed.host_str() {
            Some("youtu.be") => {
                let id = parsed.path().trim_start_matches('/');
                if !id.is_empty() {
                    return Some(id.to_string());
                }
            }
            Some(host) if host.contains("youtube.com") => {
                if let Some((_, id)) = parsed.query_pairs().find(|(key, _)| key == "v")
                    && !id.is_empty()
                {
                    return Some(id.into_owned());
                }
            }
            _ => {}
        }
    }

    VIDEO_ID_FALLBACK
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .filter(|id| id.len() == VIDEO_ID_LEN)
        .map(String::from)
}

// =============================================================================
// Transcript Store
// =============================================================================

/// In-memory transcript resolver backed by a video-id lookup table.
///
/// Acts as the crate's concrete resolver: an embedding application seeds it
/// with transcripts it already holds, and misses fall through to the remote
/// transcriber.
#[derive(Debug, Clone, Default)]
pub struct TranscriptStore {
    transcripts: HashMap<String, String>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a known transcript for a video id.
    pub fn insert(&mut self, video_id: impl Into<String>, transcript: impl Into<String>) {
        self.transcripts.insert(video_id.into(), transcript.into());
    }

    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }
}

#[async_trait]
impl TranscriptResolver for TranscriptStore {
    async fn resolve(&self, url: &str) -> Result<ResolvedTranscript> {
        let video_id = extract_video_id(url).ok_or_else(|| {
            EthoscanError::InvalidUrl(format!(
                "no video identifier could be extracted from '{}'",
                url
            ))
        })?;

        Ok(ResolvedTranscript {
            transcript: self.transcripts.get(&video_id).cloned(),
            video_id,
        })
    }
}
