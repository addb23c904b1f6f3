use thiserror::Error;

use crate::catalog::detection_reader::ParseDumpError;
use crate::constants::DetectionId;

/// Every failure is fatal for the run: there is no partial catalog or partial
/// classification worth keeping. Line numbers are 1-based.
#[derive(Error, Debug)]
pub enum TrackStatsError {
    #[error("Error parsing the detection dump at line {line}: {source}")]
    ParseDump {
        line: usize,
        #[source]
        source: ParseDumpError,
    },

    #[error("Error parsing track at line {line}: invalid detection id {token:?}")]
    ParseTrack { line: usize, token: String },

    #[error("Track at line {line} references detection {detection_id} absent from the catalog")]
    UnknownDetection {
        line: usize,
        detection_id: DetectionId,
    },

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(String),
}

impl PartialEq for TrackStatsError {
    fn eq(&self, other: &Self) -> bool {
        use TrackStatsError::*;
        match (self, other) {
            (
                ParseDump {
                    line: l1,
                    source: s1,
                },
                ParseDump {
                    line: l2,
                    source: s2,
                },
            ) => l1 == l2 && s1 == s2,
            (ParseTrack { line: l1, token: t1 }, ParseTrack { line: l2, token: t2 }) => {
                l1 == l2 && t1 == t2
            }
            (
                UnknownDetection {
                    line: l1,
                    detection_id: d1,
                },
                UnknownDetection {
                    line: l2,
                    detection_id: d2,
                },
            ) => l1 == l2 && d1 == d2,
            (InvalidConfig(a), InvalidConfig(b)) => a == b,

            // io::Error is not comparable: equal when the variant matches
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
