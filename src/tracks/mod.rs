//! # Tracks: resolution, classification and aggregation
//!
//! A **track** is one line of a linkTracklets output file: the whitespace-separated
//! diaIds the linker claims belong to a single moving object. This module turns such a
//! line into a [`TrackClassification`] and folds classifications into [`TrackStats`].
//!
//! Modules
//! -----------------
//! * [`aggregate`] – The fold accumulator ([`TrackStats`], [`ImageCounts`]).
//! * [`track_analyzer`] – Streaming driver reading a track file line by line.
//!
//! Classification rule
//! -----------------
//! A track is **true** iff all of its detections share one object id and that id is not
//! the noise sentinel. Mixed objects, pure noise, and noise mixed with a real object are
//! all **false**.
//!
//! Starting image
//! -----------------
//! The image of the earliest detection. Detections are scanned in line order and the
//! running minimum is only replaced by a *strictly* earlier epoch, so on ties the
//! detection appearing first on the line wins. Changing this comparison changes which
//! image a track is attributed to.
use itertools::Itertools;
use smallvec::SmallVec;

use crate::{
    catalog::Catalog,
    constants::{DetectionId, ImageId, Observations},
    observations::Observation,
    trackstats_errors::TrackStatsError,
};

pub mod aggregate;
pub mod track_analyzer;

pub use aggregate::{ImageCounts, TrackStats};

/// Parse the diaIds of a track line, keeping line order; empty for a blank line.
pub fn parse_track_line(
    line: &str,
    line_number: usize,
) -> Result<SmallVec<[DetectionId; 8]>, TrackStatsError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<DetectionId>().map_err(|_| TrackStatsError::ParseTrack {
                line: line_number,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Resolve every diaId of a track line against the catalog, keeping line order.
///
/// Arguments
/// -----------------
/// * `catalog` – Detection lookup table.
/// * `line` – Raw track line.
/// * `line_number` – 1-based position of the line, used in errors.
///
/// Return
/// ----------
/// * The resolved detections (empty for a blank line), or
///   [`TrackStatsError::ParseTrack`] for a non-integer token, or
///   [`TrackStatsError::UnknownDetection`] for an id absent from the catalog.
pub fn resolve_track<'a>(
    catalog: &'a Catalog,
    line: &str,
    line_number: usize,
) -> Result<Observations<'a>, TrackStatsError> {
    parse_track_line(line, line_number)?
        .into_iter()
        .map(|detection_id| {
            catalog
                .get(detection_id)
                .ok_or(TrackStatsError::UnknownDetection {
                    line: line_number,
                    detection_id,
                })
        })
        .collect()
}

/// Image of the earliest detection; ties keep the first detection in line order.
pub fn starting_image(observations: &[&Observation]) -> Option<ImageId> {
    let (first, rest) = observations.split_first()?;
    let mut earliest = *first;
    for obs in rest {
        if obs.time < earliest.time {
            earliest = *obs;
        }
    }
    Some(earliest.image_id)
}

/// Object id shared by every detection of a true track, `None` for a false track.
pub fn found_object<'a>(
    observations: &[&'a Observation],
    noise_object_id: &str,
) -> Option<&'a str> {
    observations
        .iter()
        .copied()
        .map(|obs| obs.object_id.as_str())
        .all_equal_value()
        .ok()
        .filter(|object_id| *object_id != noise_object_id)
}

/// Outcome of classifying a single track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackClassification<'a> {
    /// Object the track recovers; set only for true tracks.
    pub found_object: Option<&'a str>,
    /// Image the track starts in.
    pub starting_image: ImageId,
}

impl<'a> TrackClassification<'a> {
    /// Classify a resolved track; `None` when the track holds no detection.
    pub fn classify(observations: &[&'a Observation], noise_object_id: &str) -> Option<Self> {
        Some(TrackClassification {
            starting_image: starting_image(observations)?,
            found_object: found_object(observations, noise_object_id),
        })
    }

    pub fn is_true(&self) -> bool {
        self.found_object.is_some()
    }
}
