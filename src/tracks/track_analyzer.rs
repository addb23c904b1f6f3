//! # Streaming track analysis
//!
//! [`TrackAnalyzer`] makes one pass over a track file, classifying every line against
//! a [`Catalog`] and folding the result into [`TrackStats`]. Only the catalog and the
//! accumulator are held in memory: the track file is read line by line into a reused
//! buffer, so it may be far larger than the catalog.
//!
//! True tracks can be copied to a sink as they are found ([`TrackAnalyzer::analyze_with_sink`]),
//! trimmed and newline-terminated, in input order.
//!
//! ## Error Handling
//! -----------------
//! The first non-integer token ([`TrackStatsError::ParseTrack`]) or unknown diaId
//! ([`TrackStatsError::UnknownDetection`]) aborts the pass. Whatever was already written
//! to the sink stays there.
use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use log::{debug, info};

use crate::{
    catalog::Catalog,
    config::AnalysisConfig,
    progress_bar::{fmt_dur, TrackProgress},
    tracks::{resolve_track, TrackClassification, TrackStats},
    trackstats_errors::TrackStatsError,
};

/// Classifier bound to a catalog and a configuration.
#[derive(Debug, Clone, Copy)]
pub struct TrackAnalyzer<'a> {
    catalog: &'a Catalog,
    config: &'a AnalysisConfig,
}

impl<'a> TrackAnalyzer<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a AnalysisConfig) -> Self {
        TrackAnalyzer { catalog, config }
    }

    /// Classify a single track line; `Ok(None)` for a blank line.
    pub fn classify_line(
        &self,
        line: &str,
        line_number: usize,
    ) -> Result<Option<TrackClassification<'a>>, TrackStatsError> {
        let observations = resolve_track(self.catalog, line, line_number)?;
        Ok(TrackClassification::classify(
            &observations,
            self.config.noise_object_id(),
        ))
    }

    /// Fold a whole track stream, discarding true tracks.
    pub fn analyze<R: BufRead>(&self, reader: R) -> Result<TrackStats, TrackStatsError> {
        self.analyze_with_sink(reader, &mut io::sink())
    }

    /// Fold a whole track stream, writing every true track to `true_tracks`.
    ///
    /// Arguments
    /// -----------------
    /// * `reader` – Track file, one track per line.
    /// * `true_tracks` – Receives each true line, trimmed, followed by `'\n'`.
    ///
    /// Return
    /// ----------
    /// * The final [`TrackStats`], or the first error met. Blank lines are skipped and
    ///   not counted.
    pub fn analyze_with_sink<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        true_tracks: &mut W,
    ) -> Result<TrackStats, TrackStatsError> {
        let start = Instant::now();
        let progress = TrackProgress::new();

        let mut stats = TrackStats::new();
        let mut line = String::new();
        let mut line_number = 0;

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            line_number += 1;

            let Some(outcome) = self.classify_line(&line, line_number)? else {
                debug!("Skipping blank line {line_number} of the track file");
                continue;
            };

            stats.record(&outcome);
            if outcome.is_true() {
                writeln!(true_tracks, "{}", line.trim())?;
            }
            progress.update(stats.total());
        }

        progress.finish();
        info!(
            "Analyzed {} tracks ({} true, {} false) in {}",
            stats.total(),
            stats.true_count(),
            stats.false_count(),
            fmt_dur(start.elapsed())
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod track_analyzer_test {
    use super::*;
    use crate::observations::Observation;

    fn catalog() -> Catalog {
        [
            Observation::new(1, 10.0, "OBJ1", 100),
            Observation::new(2, 10.5, "OBJ1", 101),
            Observation::new(3, 11.0, "OBJ1", 102),
            Observation::new(4, 12.0, "OBJ2", 103),
            Observation::new(5, 12.5, "-1", 104),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_true_tracks_passthrough_in_order() {
        let catalog = catalog();
        let config = AnalysisConfig::default();
        let analyzer = TrackAnalyzer::new(&catalog, &config);

        let tracks = "  1 2 3  \n4 5\n\n2\t3\n4\n";
        let mut sink = Vec::new();
        let stats = analyzer
            .analyze_with_sink(tracks.as_bytes(), &mut sink)
            .unwrap();

        assert_eq!(String::from_utf8(sink).unwrap(), "1 2 3\n2\t3\n4\n");
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.true_count(), 3);
        assert_eq!(stats.false_count(), 1);
        assert_eq!(stats.found_objects().len(), 2);
    }

    #[test]
    fn test_last_line_without_newline() {
        let catalog = catalog();
        let config = AnalysisConfig::default();
        let stats = TrackAnalyzer::new(&catalog, &config)
            .analyze("1 2\n3".as_bytes())
            .unwrap();
        assert_eq!(stats.total(), 2);
        assert_eq!(stats.image(102).unwrap().true_tracks, 1);
    }

    #[test]
    fn test_unknown_detection_aborts_and_keeps_written_lines() {
        let catalog = catalog();
        let config = AnalysisConfig::default();
        let mut sink = Vec::new();
        let err = TrackAnalyzer::new(&catalog, &config)
            .analyze_with_sink("1 2\n\n3 77\n4\n".as_bytes(), &mut sink)
            .unwrap_err();

        assert_eq!(
            err,
            TrackStatsError::UnknownDetection {
                line: 3,
                detection_id: 77
            }
        );
        assert_eq!(sink, b"1 2\n");
    }

    #[test]
    fn test_empty_track_file() {
        let catalog = catalog();
        let config = AnalysisConfig::default();
        let stats = TrackAnalyzer::new(&catalog, &config)
            .analyze("".as_bytes())
            .unwrap();
        assert_eq!(stats, TrackStats::new());
    }
}
