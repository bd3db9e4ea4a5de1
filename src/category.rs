// Categorization rule: a file name's suffix decides its category.
// Matching is case-sensitive and does no normalization besides what the
// caller already trimmed.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the five fixed labels a record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Image,
    Music,
    Video,
    Document,
    Other,
}

const IMAGE_EXTS: &[&str] = &[".jpg", ".png", ".jpeg"];
const MUSIC_EXTS: &[&str] = &[".mp3", ".wav"];
const VIDEO_EXTS: &[&str] = &[".mp4", ".avi", ".mov"];
const DOCUMENT_EXTS: &[&str] = &[".pdf", ".docx", ".txt"];

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Image,
        Category::Music,
        Category::Video,
        Category::Document,
        Category::Other,
    ];

    /// Label as written to the store and the summary report.
    pub fn label(self) -> &'static str {
        match self {
            Category::Image => "Image",
            Category::Music => "Music",
            Category::Video => "Video",
            Category::Document => "Document",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category label {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Decide the category of `name` from its extension.
pub fn detect_category(name: &str) -> Category {
    let has_any = |exts: &[&str]| exts.iter().any(|ext| name.ends_with(ext));
    if has_any(IMAGE_EXTS) {
        Category::Image
    } else if has_any(MUSIC_EXTS) {
        Category::Music
    } else if has_any(VIDEO_EXTS) {
        Category::Video
    } else if has_any(DOCUMENT_EXTS) {
        Category::Document
    } else {
        Category::Other
    }
}
