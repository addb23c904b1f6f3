//! # Detection catalog
//!
//! In-memory lookup table from diaId to [`Observation`]. The [`Catalog`] is built once,
//! fully, before any track is classified (a track may reference any detection), and is
//! only read afterwards.
//!
//! Modules
//! -----------------
//! * [`detection_reader`] – Line parser for the detection dump and its [`ParseDumpError`](detection_reader::ParseDumpError).
//!
//! Quick-Start
//! -----------------
//! ```rust
//! use trackstats::catalog::Catalog;
//!
//! let dump = "1 53371.10 S001 85679\n2 53371.14 S001 85680\n";
//! let catalog = Catalog::from_reader(dump.as_bytes()).unwrap();
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.get(2).unwrap().image_id, 85680);
//! ```
use std::{fs::File, io::BufRead, io::BufReader};

use camino::Utf8Path;
use hifitime::Epoch;
use log::info;

use crate::{
    constants::{DetectionId, FastHashMap, MJD},
    observations::Observation,
    trackstats_errors::TrackStatsError,
};

pub mod detection_reader;

/// Lookup table of every detection of a run, keyed by diaId.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    detections: FastHashMap<DetectionId, Observation>,
}

impl Catalog {
    /// Load a detection dump from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, TrackStatsError> {
        detection_reader::read_dump(reader)
    }

    /// Load a detection dump from disk.
    ///
    /// Logs the number of detections and the covered MJD span once loaded.
    pub fn from_path(path: &Utf8Path) -> Result<Self, TrackStatsError> {
        let file = File::open(path)?;
        let catalog = Self::from_reader(BufReader::new(file))?;

        match catalog.time_span() {
            Some((first, last)) => info!(
                "Loaded {} detections from {path} ({} .. {})",
                catalog.len(),
                Epoch::from_mjd_utc(first),
                Epoch::from_mjd_utc(last)
            ),
            None => info!("Loaded an empty detection dump from {path}"),
        }
        Ok(catalog)
    }

    /// Insert a detection, returning the record it replaced if the diaId was already known.
    pub fn insert(&mut self, observation: Observation) -> Option<Observation> {
        self.detections.insert(observation.detection_id, observation)
    }

    pub fn get(&self, detection_id: DetectionId) -> Option<&Observation> {
        self.detections.get(&detection_id)
    }

    pub fn len(&self) -> usize {
        self.detections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    /// Iterate over the detections, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.detections.values()
    }

    /// Earliest and latest observation epoch of the catalog, `None` when empty.
    pub fn time_span(&self) -> Option<(MJD, MJD)> {
        self.iter().fold(None, |span, obs| match span {
            None => Some((obs.time, obs.time)),
            Some((first, last)) => Some((first.min(obs.time), last.max(obs.time))),
        })
    }
}

impl FromIterator<Observation> for Catalog {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        let mut catalog = Catalog::default();
        for observation in iter {
            catalog.insert(observation);
        }
        catalog
    }
}

#[cfg(test)]
mod catalog_test {
    use super::*;

    #[test]
    fn test_lookup_and_span() {
        let catalog: Catalog = [
            Observation::new(1, 10.5, "OBJ1", 100),
            Observation::new(2, 9.25, "OBJ1", 101),
            Observation::new(3, 11.0, "-1", 102),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(3).unwrap().object_id, "-1");
        assert!(catalog.get(4).is_none());
        assert_eq!(catalog.time_span(), Some((9.25, 11.0)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_reader("".as_bytes()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.time_span(), None);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Catalog::from_path(Utf8Path::new("does/not/exist.dump")).unwrap_err();
        assert!(matches!(err, TrackStatsError::IoError(_)));
    }
}
