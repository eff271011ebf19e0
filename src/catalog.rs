//! The declarative catalog: channels and the clips they play.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Top-level catalog structure as declared in the JSON source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub channels: Vec<CatalogChannel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogChannel {
    pub name: String,
    pub videos: Vec<CatalogVideo>,
}

/// One declared clip: a video id plus the section of it to play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogVideo {
    pub id: String,
    #[serde(default)]
    pub section_start: i64,
    #[serde(default)]
    pub section_end: i64,
}

impl CatalogVideo {
    /// Both bounds at zero means "unspecified, play the full video" and
    /// triggers a duration lookup against the metadata provider.
    pub fn needs_resolution(&self) -> bool {
        self.section_start == 0 && self.section_end == 0
    }
}

impl Catalog {
    /// Read and decode a catalog JSON file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        let catalog = serde_json::from_reader(BufReader::new(file))?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_catalog() {
        let json = r#"{
            "channels": [
                {
                    "name": "Retro",
                    "videos": [
                        {"id": "v1", "section_start": 10, "section_end": 50},
                        {"id": "v2"}
                    ]
                }
            ]
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.channels.len(), 1);
        let videos = &catalog.channels[0].videos;
        assert!(!videos[0].needs_resolution());
        assert!(videos[1].needs_resolution());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/videos.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("videos.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_explicit_start_with_zero_end_still_needs_nothing() {
        // Only the both-zero combination signals "use full length".
        let video = CatalogVideo {
            id: "v1".to_string(),
            section_start: 30,
            section_end: 0,
        };
        assert!(!video.needs_resolution());
    }
}
