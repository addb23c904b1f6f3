//! # Constants and type definitions for trackstats
//!
//! This module centralizes the **type aliases** and **default values** shared by the
//! catalog loader, the track classifier and the report writers.
//!
//! ## Overview
//!
//! - Identifier aliases for detections (diaSources) and images (obsHistIds)
//! - The default object id marking a detection as noise
//! - The small inline container holding the resolved detections of one track
//! - `ahash`-backed map and set aliases used by the catalog and the aggregates

use std::collections::{HashMap, HashSet};

use ahash::RandomState;
use smallvec::SmallVec;

use crate::observations::Observation;

// -------------------------------------------------------------------------------------------------
// Defaults
// -------------------------------------------------------------------------------------------------

/// Object id carried by a diaSource that is not attributable to a real object.
pub const DEFAULT_NOISE_OBJECT_ID: &str = "-1";

/// Number of tracks between two progress updates.
pub const PROGRESS_STRIDE: u64 = 100_000;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Modified Julian Date (days)
pub type MJD = f64;

/// Unique identifier of a detection (diaId)
pub type DetectionId = i64;

/// Identifier of the exposure a detection was made in (obsHistId)
pub type ImageId = i64;

/// Detections of a single track, resolved against the catalog, in line order.
///
/// The inline capacity covers typical linkTracklets tracks.
pub type Observations<'a> = SmallVec<[&'a Observation; 8]>;

/// `HashMap` using [`ahash`](https://docs.rs/ahash) for fast integer keys.
pub type FastHashMap<K, V> = HashMap<K, V, RandomState>;

/// `HashSet` counterpart of [`FastHashMap`].
pub type FastHashSet<T> = HashSet<T, RandomState>;
