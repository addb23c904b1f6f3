//! # Report writers
//!
//! Serialize a final [`TrackStats`] into the three summary artifacts of a run.
//!
//! Formats
//! -----------------
//! **Summary** ([`write_stats`]) – a header and one line of counts:
//! ```text
//! !num_total_tracks num_true_tracks    num_false_tracks    num_found_objects
//! 5 3 2 2
//! ```
//!
//! **Per-image histogram** ([`write_image_histogram`]) – one row per starting image,
//! ascending by image id:
//! ```text
//! !obsHistId  nTracks_startinghere nTrueTracks_startinghere nFalseTracks_startinghere
//! 85679 4 3 1
//! ```
//!
//! **Found objects** ([`write_found_objects`]) – one object id per line, unordered.
//!
//! [`ReportPaths`] bundles the three destinations and writes them in one call.
use std::{
    fs::File,
    io::{BufWriter, Write},
};

use camino::{Utf8Path, Utf8PathBuf};

use crate::{tracks::TrackStats, trackstats_errors::TrackStatsError};

pub const STATS_HEADER: &str =
    "!num_total_tracks num_true_tracks    num_false_tracks    num_found_objects";

pub const IMAGE_HISTOGRAM_HEADER: &str =
    "!obsHistId  nTracks_startinghere nTrueTracks_startinghere nFalseTracks_startinghere";

pub fn write_stats<W: Write>(stats: &TrackStats, out: &mut W) -> Result<(), TrackStatsError> {
    writeln!(out, "{STATS_HEADER}")?;
    writeln!(
        out,
        "{} {} {} {}",
        stats.total(),
        stats.true_count(),
        stats.false_count(),
        stats.found_objects().len()
    )?;
    Ok(())
}

pub fn write_image_histogram<W: Write>(
    stats: &TrackStats,
    out: &mut W,
) -> Result<(), TrackStatsError> {
    writeln!(out, "{IMAGE_HISTOGRAM_HEADER}")?;
    for (image_id, counts) in stats.image_counts() {
        writeln!(
            out,
            "{image_id} {} {} {}",
            counts.total(),
            counts.true_tracks,
            counts.false_tracks
        )?;
    }
    Ok(())
}

pub fn write_found_objects<W: Write>(
    stats: &TrackStats,
    out: &mut W,
) -> Result<(), TrackStatsError> {
    for object_id in stats.found_objects() {
        writeln!(out, "{object_id}")?;
    }
    Ok(())
}

/// Create `path` and fill it with `write`, flushing before returning.
pub fn write_to_file<F>(path: &Utf8Path, write: F) -> Result<(), TrackStatsError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), TrackStatsError>,
{
    let mut out = BufWriter::new(File::create(path)?);
    write(&mut out)?;
    out.flush()?;
    Ok(())
}

/// Destinations of the three summary artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub stats: Utf8PathBuf,
    pub image_histogram: Utf8PathBuf,
    pub found_objects: Utf8PathBuf,
}

impl ReportPaths {
    /// Create and fill the three files, in order.
    ///
    /// Return
    /// ----------
    /// * The path that could not be written together with its error, so the caller
    ///   can name the failing output.
    pub fn write_all(&self, stats: &TrackStats) -> Result<(), (&Utf8Path, TrackStatsError)> {
        write_to_file(&self.stats, |out| write_stats(stats, out))
            .map_err(|e| (self.stats.as_path(), e))?;
        write_to_file(&self.image_histogram, |out| {
            write_image_histogram(stats, out)
        })
        .map_err(|e| (self.image_histogram.as_path(), e))?;
        write_to_file(&self.found_objects, |out| write_found_objects(stats, out))
            .map_err(|e| (self.found_objects.as_path(), e))?;
        Ok(())
    }
}
