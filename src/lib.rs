//! # trackstats
//!
//! Evaluate the output of the linkTracklets linker: given the dump of every diaSource of
//! a run and the tracks the linker produced, decide which tracks are **true** (all
//! detections from one real object) and which are **false**, in a single streaming pass.
//!
//! Data flow
//! -----------------
//! [`Catalog`](catalog::Catalog) (loaded fully first) →
//! [`TrackAnalyzer`](tracks::track_analyzer::TrackAnalyzer) (one pass over the tracks,
//! true tracks copied to a sink) → [`TrackStats`](tracks::TrackStats) →
//! [`report`] writers.
//!
//! ```rust
//! use trackstats::prelude::*;
//!
//! let dump = "1 10.0 OBJ1 100\n2 10.5 OBJ1 101\n3 10.5 -1 101\n";
//! let catalog = Catalog::from_reader(dump.as_bytes()).unwrap();
//! let config = AnalysisConfig::default();
//!
//! let stats = TrackAnalyzer::new(&catalog, &config)
//!     .analyze("1 2\n2 3\n".as_bytes())
//!     .unwrap();
//! assert_eq!((stats.true_count(), stats.false_count()), (1, 1));
//! assert_eq!(stats.image(100).unwrap().true_tracks, 1);
//! ```
pub mod catalog;
pub mod config;
pub mod constants;
pub mod observations;
mod progress_bar;
pub mod report;
pub mod tracks;
pub mod trackstats_errors;

pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::config::AnalysisConfig;
    pub use crate::constants::{DetectionId, ImageId, DEFAULT_NOISE_OBJECT_ID, MJD};
    pub use crate::observations::Observation;
    pub use crate::tracks::{
        track_analyzer::TrackAnalyzer, ImageCounts, TrackClassification, TrackStats,
    };
    pub use crate::trackstats_errors::TrackStatsError;
}
