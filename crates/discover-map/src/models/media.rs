//! Media attached to content items.

use serde::{Deserialize, Serialize};

/// Kind of media file attached to a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    /// Anything the popup does not know how to embed
    #[serde(other)]
    Unknown,
}

impl MediaKind {
    /// Infer the kind from a filename extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" => Some(Self::Image),
            "mp4" | "mov" | "avi" => Some(Self::Video),
            "mp3" | "wav" => Some(Self::Audio),
            _ => None,
        }
    }
}

/// A media reference: filename under the uploads directory plus its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Media<'a> {
    pub filename: &'a str,
    pub kind: MediaKind,
}

impl Media<'_> {
    /// Public path of uploaded files.
    pub const UPLOADS_PATH: &'static str = "/static/uploads";

    /// URL the browser loads the file from.
    pub fn url(&self) -> String {
        format!("{}/{}", Self::UPLOADS_PATH, self.filename)
    }
}
