use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    time::Instant,
};

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{error::ErrorKind, Parser};
use flexi_logger::Logger;
use log::info;

use trackstats::{prelude::*, report::ReportPaths};

/// Count true and false linkTracklets tracks, per starting image, and list the found objects.
#[derive(Parser, Debug)]
#[command(name = "trackstats", version)]
struct Args {
    /// Detection dump, one `diaId expMjd ssmId obsHistId` record per line
    dia_data_dump: Utf8PathBuf,
    /// linkTracklets output, one track (whitespace-separated diaIds) per line
    tracks_file: Utf8PathBuf,
    stats_out_file: Utf8PathBuf,
    obs_hist_counts_out_file: Utf8PathBuf,
    found_objects_out_file: Utf8PathBuf,
    true_tracks_out_file: Utf8PathBuf,
    /// Object id of diaSources not attributable to a real object
    #[arg(long, value_name = "ID", default_value = DEFAULT_NOISE_OBJECT_ID)]
    noise_id: String,
    /// Log specification; RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            print!("{}", err.render());
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let args = parse_args();
    let _logger = Logger::try_with_env_or_str(&args.log_level)?
        .log_to_stderr()
        .start()?;

    let config = AnalysisConfig::builder()
        .noise_object_id(args.noise_id.as_str())
        .build()?;

    info!("Reading diaSource info from {}", args.dia_data_dump);
    info!("Reading tracks from {}", args.tracks_file);
    info!("Printing basic track stats to {}", args.stats_out_file);
    info!("Printing per-image track stats to {}", args.obs_hist_counts_out_file);
    info!("Printing names of found objects to {}", args.found_objects_out_file);
    info!("Printing true tracks to {}", args.true_tracks_out_file);

    let start = Instant::now();
    let catalog = Catalog::from_path(&args.dia_data_dump)
        .with_context(|| format!("Could not load detection dump {}", args.dia_data_dump))?;

    let tracks = File::open(&args.tracks_file)
        .with_context(|| format!("Could not open track file {}", args.tracks_file))?;
    let mut true_tracks = BufWriter::new(
        File::create(&args.true_tracks_out_file)
            .with_context(|| format!("Could not create {}", args.true_tracks_out_file))?,
    );

    let stats = TrackAnalyzer::new(&catalog, &config)
        .analyze_with_sink(BufReader::new(tracks), &mut true_tracks)
        .with_context(|| format!("Could not analyze track file {}", args.tracks_file))?;
    true_tracks
        .flush()
        .with_context(|| format!("Could not write {}", args.true_tracks_out_file))?;

    let reports = ReportPaths {
        stats: args.stats_out_file,
        image_histogram: args.obs_hist_counts_out_file,
        found_objects: args.found_objects_out_file,
    };
    reports.write_all(&stats).map_err(|(path, err)| {
        anyhow::Error::new(err).context(format!("Could not write {path}"))
    })?;

    info!(
        "Analysis done: {} tracks, {} found objects, output written in {:.2?}",
        stats.total(),
        stats.found_objects().len(),
        start.elapsed()
    );
    Ok(())
}
