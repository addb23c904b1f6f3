#![allow(dead_code)]
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use trackstats::prelude::*;

/// Detection dump shared by the scenario tests.
///
/// * 1..=3: OBJ1, times 10.0/10.5/11.0, images 100/101/102
/// * 4: OBJ2, 5: noise
/// * 6, 7: noise
/// * 8, 9: OBJ3 observed at the same epoch in images 200 and 201
pub const SCENARIO_DUMP: &str = "\
1 10.0 OBJ1 100
2 10.5 OBJ1 101
3 11.0 OBJ1 102
4 12.0 OBJ2 103
5 12.0 -1 104
6 13.0 -1 105
7 13.5 -1 106
8 5.0 OBJ3 200
9 5.0 OBJ3 201
";

pub fn scenario_catalog() -> Catalog {
    Catalog::from_reader(SCENARIO_DUMP.as_bytes()).unwrap()
}

/// Run the analyzer over `tracks`, returning the stats and the true-track passthrough.
pub fn analyze(catalog: &Catalog, tracks: &str) -> Result<(TrackStats, String), TrackStatsError> {
    let config = AnalysisConfig::default();
    let mut sink = Vec::new();
    let stats =
        TrackAnalyzer::new(catalog, &config).analyze_with_sink(tracks.as_bytes(), &mut sink)?;
    Ok((stats, String::from_utf8(sink).unwrap()))
}

/// A temporary directory holding the inputs and outputs of one run.
pub struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        Workspace { _dir: dir, root }
    }

    pub fn write(&self, name: &str, content: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub fn read(&self, name: &str) -> String {
        read(&self.path(name))
    }
}

pub fn read(path: &Utf8Path) -> String {
    fs::read_to_string(path).unwrap()
}
