pub mod models;


use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension, Transaction};

use crate::catalog::{Catalog, CatalogVideo};
use crate::error::Error;
use crate::provider::DurationProvider;
use crate::resolver::resolve_section_end;

pub use models::*;

/// Terminal outcome of a population run. Errors roll the store back to its
/// pre-run state and surface as `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The store already held channels; nothing was written.
    Skipped,
    /// The catalog was committed.
    Populated,
}

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open (or create) the store and ensure the schema exists. Schema
    /// failure is fatal to startup; there is no degraded mode.
    pub fn new(db_path: &Path) -> Result<Self, Error> {
        let conn = Connection::open(db_path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            PRAGMA foreign_keys=ON;
        ",
        )
        .map_err(|e| Error::Schema(e.to_string()))?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        db.init_schema()?;

        Ok(db)
    }

    /// Create the three tables and the membership index. Safe to run on
    /// every startup.
    fn init_schema(&self) -> Result<(), Error> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS channels (
                id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                UNIQUE(name)
            );

            CREATE TABLE IF NOT EXISTS videos (
                id TEXT NOT NULL PRIMARY KEY,
                section_start INTEGER NOT NULL,
                section_end INTEGER NOT NULL,
                CHECK (section_end > section_start)
            );

            CREATE TABLE IF NOT EXISTS channel_videos (
                channel_id INTEGER NOT NULL,
                video_id TEXT NOT NULL,
                FOREIGN KEY(channel_id) REFERENCES channels(id) ON DELETE CASCADE,
                FOREIGN KEY(video_id) REFERENCES videos(id) ON DELETE CASCADE,
                UNIQUE(channel_id, video_id)
            );

            CREATE INDEX IF NOT EXISTS idx_channel_videos_membership
                ON channel_videos(channel_id, video_id);
        "#,
        )
        .map_err(|e| Error::Schema(e.to_string()))?;

        Ok(())
    }

    // =========================================================================
    // Reconciliation
    // =========================================================================

    /// Reconcile the catalog into the store.
    ///
    /// Without `full_scan`, a store that already holds at least one channel
    /// is left untouched ([`Outcome::Skipped`]). With `full_scan`, all three
    /// tables are emptied (and their id sequences reset) before population
    /// runs unconditionally.
    ///
    /// All writes for a run happen inside one transaction: any failure,
    /// including a provider or duration-parse failure mid-catalog, rolls
    /// back everything. Channels and videos are insert-or-fetch, never
    /// updated; the first writer for a given name or id wins.
    pub fn populate<P: DurationProvider>(
        &self,
        catalog: &Catalog,
        provider: &P,
        full_scan: bool,
    ) -> Result<Outcome, Error> {
        let mut conn = self.conn.lock().unwrap();

        if full_scan {
            tracing::info!("full scan enabled, deleting all persisted data");
            conn.execute_batch(
                "
                DELETE FROM channel_videos;
                DELETE FROM videos;
                DELETE FROM channels;
                DELETE FROM sqlite_sequence
                    WHERE name IN ('channels', 'videos', 'channel_videos');
                VACUUM;
            ",
            )?;
        } else {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM channels LIMIT 1)",
                [],
                |row| row.get(0),
            )?;
            if exists {
                tracing::info!("store already populated, skipping");
                return Ok(Outcome::Skipped);
            }
        }

        let tx = conn.transaction()?;

        for channel in &catalog.channels {
            if channel.videos.is_empty() {
                tracing::warn!("channel {} has no videos, skipping", channel.name);
                continue;
            }

            let channel_id = insert_or_get_channel_id(&tx, &channel.name)?;

            for video in &channel.videos {
                let video = resolve_section_end(video, provider)?;
                let video_id = insert_or_get_video_id(&tx, &video)?;

                tx.execute(
                    "INSERT OR IGNORE INTO channel_videos (channel_id, video_id)
                     VALUES (?1, ?2)",
                    params![channel_id, video_id],
                )?;
            }
        }

        tx.commit()?;
        tracing::info!("catalog committed");

        Ok(Outcome::Populated)
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn channel_id_by_name(&self, name: &str) -> Result<Option<i64>, Error> {
        let conn = self.conn.lock().unwrap();
        let id = conn
            .query_row(
                "SELECT id FROM channels WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    pub fn video_by_id(&self, id: &str) -> Result<Option<Video>, Error> {
        let conn = self.conn.lock().unwrap();
        let video = conn
            .query_row(
                "SELECT id, section_start, section_end FROM videos WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Video {
                        id: row.get(0)?,
                        section_start: row.get(1)?,
                        section_end: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(video)
    }

    pub fn association_exists(&self, channel_id: i64, video_id: &str) -> Result<bool, Error> {
        let conn = self.conn.lock().unwrap();
        let exists: bool = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM channel_videos WHERE channel_id = ?1 AND video_id = ?2
            )",
            params![channel_id, video_id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    pub fn counts(&self) -> Result<StoreCounts, Error> {
        let conn = self.conn.lock().unwrap();
        let channels: i64 = conn.query_row("SELECT COUNT(*) FROM channels", [], |r| r.get(0))?;
        let videos: i64 = conn.query_row("SELECT COUNT(*) FROM videos", [], |r| r.get(0))?;
        let links: i64 = conn.query_row("SELECT COUNT(*) FROM channel_videos", [], |r| r.get(0))?;
        Ok(StoreCounts {
            channels,
            videos,
            links,
        })
    }
}

/// Insert a channel by name, or fetch the surrogate key of the existing
/// row. Both statements run in the caller's transaction, so the pattern is
/// race-free within a run.
fn insert_or_get_channel_id(tx: &Transaction<'_>, name: &str) -> Result<i64, Error> {
    let inserted = tx.execute(
        "INSERT INTO channels (name) VALUES (?1) ON CONFLICT(name) DO NOTHING",
        params![name],
    )?;

    if inserted > 0 {
        return Ok(tx.last_insert_rowid());
    }

    let id = tx.query_row(
        "SELECT id FROM channels WHERE name = ?1",
        params![name],
        |row| row.get(0),
    )?;
    Ok(id)
}

/// Insert a video, or leave the existing row untouched. A conflicting id
/// is ignored (first writer wins); a CHECK violation on the section bounds
/// is not ignored and aborts the run.
fn insert_or_get_video_id(tx: &Transaction<'_>, video: &CatalogVideo) -> Result<String, Error> {
    let inserted = tx.execute(
        "INSERT INTO videos (id, section_start, section_end)
         VALUES (?1, ?2, ?3) ON CONFLICT(id) DO NOTHING",
        params![video.id, video.section_start, video.section_end],
    )?;

    if inserted > 0 {
        return Ok(video.id.clone());
    }

    let id = tx.query_row(
        "SELECT id FROM videos WHERE id = ?1",
        params![video.id],
        |row| row.get(0),
    )?;
    Ok(id)
}
