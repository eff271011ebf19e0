use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub section_start: i64,
    pub section_end: i64,
}

/// "Channel X includes clip Y"; many-to-many.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelVideo {
    pub channel_id: i64,
    pub video_id: String,
}

/// Row counts across the three tables, for post-run summaries and tests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoreCounts {
    pub channels: i64,
    pub videos: i64,
    pub links: i64,
}
