//! Curated catalog of instructional videos.
//!
//! Static reference content: entries are compiled in and only filtered.
//! Tag and level labels are translation keys; resolving them to display
//! text is left to the localization layer.

mod catalog;
pub mod duration;
pub mod writer;

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A human-facing label: a lookup key for the translation catalogs plus the
/// text shown when no translation exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranslationKey {
    pub key: &'static str,
    pub default: &'static str,
}

impl TranslationKey {
    /// A label whose source-language text doubles as its key
    pub const fn untranslated(text: &'static str) -> Self {
        Self {
            key: text,
            default: text,
        }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default)
    }
}

/// Declared tag vocabulary
pub const VIDEO_TAGS: &[TranslationKey] = &[
    TranslationKey::untranslated("Howto"),
    TranslationKey::untranslated("Introduction"),
    TranslationKey::untranslated("Opening"),
    TranslationKey::untranslated("Middlegame"),
    TranslationKey::untranslated("Endgame"),
    TranslationKey::untranslated("Fundamentals"),
    TranslationKey::untranslated("Tactics"),
    TranslationKey::untranslated("Puzzle"),
    TranslationKey::untranslated("Janggi"),
    TranslationKey::untranslated("Xiangqi"),
    TranslationKey::untranslated("Makruk"),
    TranslationKey::untranslated("Shogi"),
    TranslationKey::untranslated("S-Chess"),
    TranslationKey::untranslated("Capablanca"),
    TranslationKey::untranslated("Placement"),
    TranslationKey::untranslated("Duck"),
    TranslationKey::untranslated("Match"),
    TranslationKey::untranslated("Tournament"),
    TranslationKey::untranslated("Hu Ronghua"),
    TranslationKey::untranslated("Yoshiharu Habu"),
];

/// Intended audience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoTarget {
    Beginner,
    Intermediate,
    Advanced,
}

impl VideoTarget {
    pub fn all() -> [VideoTarget; 3] {
        [
            VideoTarget::Beginner,
            VideoTarget::Intermediate,
            VideoTarget::Advanced,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            VideoTarget::Beginner => "beginner",
            VideoTarget::Intermediate => "intermediate",
            VideoTarget::Advanced => "advanced",
        }
    }

    pub fn translation_key(&self) -> TranslationKey {
        TranslationKey::untranslated(self.name())
    }
}

impl fmt::Display for VideoTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for VideoTarget {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| RegistryError::UnknownVideoTarget(s.to_string()))
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    /// Video id on the hosting platform
    pub id: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    /// Ordered tags, expected to come from `VIDEO_TAGS`
    pub tags: &'static [&'static str],
    pub target: VideoTarget,
    /// `m:ss` or `h:mm:ss`
    pub duration: &'static str,
}

impl Video {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|&t| t == tag)
    }

    pub fn duration_secs(&self) -> Result<u32> {
        duration::parse_duration(self.duration)
    }
}

/// Read-only view over a list of videos
#[derive(Debug, Clone, Copy)]
pub struct VideoCatalog {
    videos: &'static [Video],
}

impl Default for VideoCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl VideoCatalog {
    pub fn builtin() -> Self {
        Self::new(catalog::VIDEOS)
    }

    pub fn new(videos: &'static [Video]) -> Self {
        Self { videos }
    }

    /// All entries in catalog order
    pub fn videos(&self) -> &'static [Video] {
        self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn tags(&self) -> &'static [TranslationKey] {
        VIDEO_TAGS
    }

    pub fn get(&self, id: &str) -> Option<&'static Video> {
        self.videos.iter().find(|v| v.id == id)
    }

    /// Entries carrying `tag`, in catalog order. Unknown tags match nothing.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&'static Video> {
        self.videos.iter().filter(|v| v.has_tag(tag)).collect()
    }

    pub fn filter_by_target(&self, target: VideoTarget) -> Vec<&'static Video> {
        self.videos.iter().filter(|v| v.target == target).collect()
    }

    pub fn is_declared_tag(tag: &str) -> bool {
        VIDEO_TAGS.iter().any(|t| t.key == tag)
    }

    /// Tags used by some entry but missing from the vocabulary, first-seen
    /// order. Advisory: callers decide whether to warn.
    pub fn undeclared_tags(&self) -> Vec<&'static str> {
        let mut undeclared: Vec<&'static str> = Vec::new();
        for video in self.videos {
            for &tag in video.tags {
                if !Self::is_declared_tag(tag) && !undeclared.contains(&tag) {
                    log::warn!("Video {} uses undeclared tag '{}'", video.id, tag);
                    undeclared.push(tag);
                }
            }
        }
        undeclared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[Video] = &[
        Video {
            id: "a",
            title: "Bughouse basics",
            author: "Someone",
            tags: &["Howto", "Bughouse"],
            target: VideoTarget::Beginner,
            duration: "10:00",
        },
        Video {
            id: "b",
            title: "Janggi openings",
            author: "Someone",
            tags: &["Janggi", "Opening", "Bughouse"],
            target: VideoTarget::Advanced,
            duration: "1:00:00",
        },
    ];

    #[test]
    fn test_builtin_catalog() {
        let catalog = VideoCatalog::builtin();
        assert_eq!(catalog.len(), 55);
        assert_eq!(catalog.videos()[0].id, "BqvYsPAufB8");
        assert_eq!(catalog.get("Vyc4Llxgke8").unwrap().tags, &["Introduction"]);
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_filter_by_tag_keeps_order() {
        let catalog = VideoCatalog::builtin();
        let xiangqi = catalog.filter_by_tag("Xiangqi");
        assert_eq!(xiangqi.len(), 8);
        assert!(xiangqi.iter().all(|v| v.has_tag("Xiangqi")));

        let positions: Vec<usize> = xiangqi
            .iter()
            .map(|v| catalog.videos().iter().position(|c| c.id == v.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_filter_by_unknown_tag_is_empty() {
        let catalog = VideoCatalog::builtin();
        assert!(catalog.filter_by_tag("Bughouse").is_empty());
        assert!(catalog.filter_by_tag("xiangqi").is_empty());
    }

    #[test]
    fn test_filter_by_target() {
        let catalog = VideoCatalog::builtin();
        assert_eq!(catalog.filter_by_target(VideoTarget::Beginner).len(), 47);
        assert_eq!(catalog.filter_by_target(VideoTarget::Intermediate).len(), 7);
        let advanced = catalog.filter_by_target(VideoTarget::Advanced);
        assert_eq!(advanced.len(), 1);
        assert_eq!(advanced[0].target, VideoTarget::Advanced);
    }

    #[test]
    fn test_builtin_tags_are_declared() {
        let catalog = VideoCatalog::builtin();
        assert!(catalog.undeclared_tags().is_empty());
        assert_eq!(catalog.tags().len(), 20);
    }

    #[test]
    fn test_undeclared_tags_reported_once() {
        let catalog = VideoCatalog::new(SAMPLE);
        assert_eq!(catalog.undeclared_tags(), vec!["Bughouse"]);
        // Advisory only: entries are still filterable by it
        assert_eq!(catalog.filter_by_tag("Bughouse").len(), 2);
    }

    #[test]
    fn test_builtin_durations_parse() {
        for video in VideoCatalog::builtin().videos() {
            assert!(video.duration_secs().is_ok(), "bad duration on {}", video.id);
        }
        assert_eq!(SAMPLE[1].duration_secs().unwrap(), 3600);
    }

    #[test]
    fn test_target_parsing() {
        assert_eq!("beginner".parse::<VideoTarget>().unwrap(), VideoTarget::Beginner);
        assert_eq!("advanced".parse::<VideoTarget>().unwrap(), VideoTarget::Advanced);
        assert!(matches!(
            "expert".parse::<VideoTarget>(),
            Err(RegistryError::UnknownVideoTarget(_))
        ));
        assert_eq!(VideoTarget::Intermediate.translation_key().default, "intermediate");
    }
}
