//! # Track statistics accumulator
//!
//! [`TrackStats`] is the state of the single-pass fold over a track file. Each track
//! mutates it exactly once through [`TrackStats::record`]:
//!
//! * the global true/false counter,
//! * the [`ImageCounts`] slot of the track's starting image (created at `(0, 0)` on first use),
//! * the set of found objects when the track is true.
//!
//! Invariants
//! -----------------
//! * `true_count() + false_count() == total()` is the number of recorded tracks.
//! * The per-image totals sum to `total()`.
//! * `found_objects()` never holds the noise sentinel (only true tracks feed it).
//!
//! Apart from the tie-break inside a single track, every counter is independent of
//! track order, so two partial accumulators can be combined with [`TrackStats::merge`].
use std::collections::hash_map::Entry;

use itertools::Itertools;

use crate::{
    constants::{FastHashMap, FastHashSet, ImageId},
    tracks::TrackClassification,
};

/// True/false tracks starting in one image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageCounts {
    pub true_tracks: u64,
    pub false_tracks: u64,
}

impl ImageCounts {
    pub fn total(&self) -> u64 {
        self.true_tracks + self.false_tracks
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackStats {
    true_count: u64,
    false_count: u64,
    per_image: FastHashMap<ImageId, ImageCounts>,
    found_objects: FastHashSet<String>,
}

impl TrackStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one classified track into the statistics.
    pub fn record(&mut self, outcome: &TrackClassification<'_>) {
        let slot = self.per_image.entry(outcome.starting_image).or_default();

        match outcome.found_object {
            Some(object_id) => {
                self.true_count += 1;
                slot.true_tracks += 1;
                // allocate only for objects not seen yet
                if !self.found_objects.contains(object_id) {
                    self.found_objects.insert(object_id.to_owned());
                }
            }
            None => {
                self.false_count += 1;
                slot.false_tracks += 1;
            }
        }
    }

    /// Combine the statistics of another, disjoint, set of tracks into `self`.
    pub fn merge(&mut self, other: TrackStats) {
        self.true_count += other.true_count;
        self.false_count += other.false_count;

        for (image_id, counts) in other.per_image {
            match self.per_image.entry(image_id) {
                Entry::Occupied(mut entry) => {
                    let slot = entry.get_mut();
                    slot.true_tracks += counts.true_tracks;
                    slot.false_tracks += counts.false_tracks;
                }
                Entry::Vacant(entry) => {
                    entry.insert(counts);
                }
            }
        }

        self.found_objects.extend(other.found_objects);
    }

    pub fn total(&self) -> u64 {
        self.true_count + self.false_count
    }

    pub fn true_count(&self) -> u64 {
        self.true_count
    }

    pub fn false_count(&self) -> u64 {
        self.false_count
    }

    /// Objects with at least one true track, in no particular order.
    pub fn found_objects(&self) -> &FastHashSet<String> {
        &self.found_objects
    }

    /// Counts for one starting image, if any track started there.
    pub fn image(&self, image_id: ImageId) -> Option<ImageCounts> {
        self.per_image.get(&image_id).copied()
    }

    /// Per-image counts sorted by ascending image id.
    pub fn image_counts(&self) -> impl Iterator<Item = (ImageId, ImageCounts)> + '_ {
        self.per_image
            .iter()
            .map(|(image_id, counts)| (*image_id, *counts))
            .sorted_unstable_by_key(|(image_id, _)| *image_id)
    }
}
