//! # Detection dump reader
//!
//! Parses the diaSource dump produced alongside a linkTracklets run into
//! [`Observation`]s. Each record sits on its own line as four whitespace-separated fields:
//!
//! ```text
//! diaId  expMjd  ssmId  obsHistId
//! 1      53371.1 S0001  85679
//! 2      53371.1 -1     85679
//! ```
//!
//! * `diaId` and `obsHistId` are integers, `expMjd` is a float in **MJD**.
//! * `ssmId` is kept as an opaque string; the noise sentinel is only interpreted by
//!   the classifier.
//!
//! ## Error Handling
//! -----------------
//! Line-level failures are described by [`ParseDumpError`] and wrapped into
//! [`TrackStatsError::ParseDump`] together with the 1-based line number. The first
//! malformed record aborts the load: any entry may be referenced by a later track,
//! so a partial catalog is never returned.
use std::io::BufRead;

use itertools::Itertools;
use log::{debug, warn};
use thiserror::Error;

use crate::{
    catalog::Catalog, constants::MJD, observations::Observation,
    trackstats_errors::TrackStatsError,
};

/// Line-level parsing errors for the detection dump.
///
/// Variants
/// -----------------
/// * `WrongFieldCount` – The line does not hold exactly four fields; payload is the count found.
/// * `InvalidDetectionId` – The first field is not an integer.
/// * `InvalidTime` – The second field is not a finite float.
/// * `InvalidImageId` – The fourth field is not an integer.
#[derive(Error, Debug, PartialEq)]
pub enum ParseDumpError {
    #[error("expected 4 fields, found {0}")]
    WrongFieldCount(usize),
    #[error("invalid detection id: {0}")]
    InvalidDetectionId(String),
    #[error("invalid observation time: {0}")]
    InvalidTime(String),
    #[error("invalid image id: {0}")]
    InvalidImageId(String),
}

/// Parse one dump line into an [`Observation`].
pub(crate) fn from_dump_line(line: &str) -> Result<Observation, ParseDumpError> {
    let Some((dia_id, exp_mjd, ssm_id, obs_hist_id)) = line.split_whitespace().collect_tuple()
    else {
        return Err(ParseDumpError::WrongFieldCount(
            line.split_whitespace().count(),
        ));
    };

    let detection_id = dia_id
        .parse()
        .map_err(|_| ParseDumpError::InvalidDetectionId(dia_id.to_string()))?;
    let time = exp_mjd
        .parse::<MJD>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or_else(|| ParseDumpError::InvalidTime(exp_mjd.to_string()))?;
    let image_id = obs_hist_id
        .parse()
        .map_err(|_| ParseDumpError::InvalidImageId(obs_hist_id.to_string()))?;

    Ok(Observation::new(detection_id, time, ssm_id, image_id))
}

/// Read a whole dump into a [`Catalog`].
///
/// Blank lines are skipped. A diaId listed twice keeps its last record.
pub(crate) fn read_dump<R: BufRead>(reader: R) -> Result<Catalog, TrackStatsError> {
    let mut catalog = Catalog::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            debug!("Skipping blank line {} of the detection dump", idx + 1);
            continue;
        }

        let observation = from_dump_line(&line).map_err(|source| TrackStatsError::ParseDump {
            line: idx + 1,
            source,
        })?;

        if let Some(previous) = catalog.insert(observation) {
            warn!(
                "Detection {} redefined at line {}; keeping the later record",
                previous.detection_id,
                idx + 1
            );
        }
    }

    Ok(catalog)
}

#[cfg(test)]
mod detection_reader_test {
    use super::*;

    #[test]
    fn test_from_dump_line_valid() {
        let obs = from_dump_line("42  53371.125\tS1000abc 85679").unwrap();
        assert_eq!(obs, Observation::new(42, 53371.125, "S1000abc", 85679));
    }

    #[test]
    fn test_from_dump_line_keeps_noise_as_plain_string() {
        let obs = from_dump_line("7 10.0 -1 3").unwrap();
        assert_eq!(obs.object_id, "-1");
    }

    #[test]
    fn test_from_dump_line_wrong_field_count() {
        assert_eq!(
            from_dump_line("1 10.0 OBJ1"),
            Err(ParseDumpError::WrongFieldCount(3))
        );
        assert_eq!(
            from_dump_line("1 10.0 OBJ1 100 extra"),
            Err(ParseDumpError::WrongFieldCount(5))
        );
    }

    #[test]
    fn test_from_dump_line_non_numeric_fields() {
        assert_eq!(
            from_dump_line("x1 10.0 OBJ1 100"),
            Err(ParseDumpError::InvalidDetectionId("x1".into()))
        );
        assert_eq!(
            from_dump_line("1 ten OBJ1 100"),
            Err(ParseDumpError::InvalidTime("ten".into()))
        );
        assert_eq!(
            from_dump_line("1 10.0 OBJ1 100.5"),
            Err(ParseDumpError::InvalidImageId("100.5".into()))
        );
    }

    #[test]
    fn test_from_dump_line_rejects_non_finite_time() {
        for time in ["nan", "NaN", "inf", "-inf", "infinity"] {
            assert_eq!(
                from_dump_line(&format!("1 {time} OBJ1 100")),
                Err(ParseDumpError::InvalidTime(time.into()))
            );
        }
    }

    #[test]
    fn test_read_dump_reports_line_number() {
        let dump = "1 10.0 OBJ1 100\n\n2 10.5 OBJ1\n";
        let err = read_dump(dump.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            TrackStatsError::ParseDump {
                line: 3,
                source: ParseDumpError::WrongFieldCount(3),
            }
        );
    }

    #[test]
    fn test_read_dump_skips_blank_lines_and_overwrites_duplicates() {
        let dump = "1 10.0 OBJ1 100\n   \n2 10.5 OBJ1 101\n1 9.0 OBJ9 99\n";
        let catalog = read_dump(dump.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1), Some(&Observation::new(1, 9.0, "OBJ9", 99)));
    }
}
