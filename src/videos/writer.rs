//! CSV export of catalog entries

use super::{Video, VideoTarget};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Flat row layout: tags joined with `;`
#[derive(Debug, Serialize)]
struct VideoRow<'a> {
    id: &'a str,
    title: &'a str,
    author: &'a str,
    tags: String,
    target: VideoTarget,
    duration: &'a str,
    /// Empty when the duration string is malformed
    duration_secs: Option<u32>,
}

impl<'a> From<&'a Video> for VideoRow<'a> {
    fn from(video: &'a Video) -> Self {
        Self {
            id: video.id,
            title: video.title,
            author: video.author,
            tags: video.tags.join(";"),
            target: video.target,
            duration: video.duration,
            duration_secs: video.duration_secs().ok(),
        }
    }
}

/// Write videos as CSV with a header row
pub fn write_videos<W: Write>(videos: &[&Video], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for video in videos {
        csv.serialize(VideoRow::from(*video))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write videos to a CSV file
pub fn write_videos_csv(videos: &[&Video], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_videos(videos, file)?;
    log::info!("Wrote {} videos to {}", videos.len(), path.display());
    Ok(())
}
