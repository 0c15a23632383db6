//! nn-tour CLI: fetch locations, build a nearest-neighbor tour, render a map.

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::{error, info, LevelFilter};

use nn_tour::distance::DistanceMatrix;
use nn_tour::evaluation::TourEvaluator;
use nn_tour::logging::{self, LogConfig};
use nn_tour::models::Tour;
use nn_tour::provider::{LocationProvider, PayloadLocationProvider, RandomLocationProvider};
use nn_tour::render::{HtmlMapRenderer, MapRenderer};
use nn_tour::{nearest_neighbor_tour, Result, TourError};

#[derive(Parser, Debug)]
#[command(name = "nn-tour")]
#[command(about = "Build a nearest-neighbor tour over geographic points")]
#[command(version)]
struct Cli {
    /// Number of locations to fetch
    #[arg(short = 'n', long, default_value = "10")]
    count: usize,

    /// Where locations come from
    #[arg(long, value_enum, default_value_t = Source::Random)]
    source: Source,

    /// Payload file for `--source payload` ("-" reads stdin)
    #[arg(short, long, required_if_eq("source", "payload"))]
    input: Option<PathBuf>,

    /// Seed for `--source random`
    #[arg(long, default_value = "42")]
    seed: u64,

    /// HTML map output file
    #[arg(short, long, default_value = "map.html")]
    output: PathBuf,

    /// Skip writing the map
    #[arg(long)]
    no_map: bool,

    /// Print the tour as JSON
    #[arg(long)]
    json: bool,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Prefix log lines with a millisecond timestamp
    #[arg(long)]
    log_timestamp: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Source {
    Random,
    Payload,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Settings for one run, resolved from the command line.
#[derive(Debug, Clone)]
struct RunConfig {
    count: usize,
    source: SourceConfig,
    /// `None` skips the map.
    map_output: Option<PathBuf>,
    json: bool,
    log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SourceConfig {
    Random { seed: u64 },
    PayloadStdin,
    PayloadFile(PathBuf),
}

impl RunConfig {
    fn from_cli(cli: Cli) -> Result<Self> {
        let source = match cli.source {
            Source::Random => SourceConfig::Random { seed: cli.seed },
            Source::Payload => match cli.input {
                Some(path) if path.as_os_str() == "-" => SourceConfig::PayloadStdin,
                Some(path) => SourceConfig::PayloadFile(path),
                None => {
                    return Err(TourError::invalid_payload(
                        "--input is required with --source payload",
                    ))
                }
            },
        };
        Ok(Self {
            count: cli.count,
            source,
            map_output: (!cli.no_map).then_some(cli.output),
            json: cli.json,
            log: LogConfig {
                level: cli.log_level.to_filter(),
                timestamp: cli.log_timestamp,
            },
        })
    }
}

fn main() {
    let config = match RunConfig::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init_logger(config.log) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let mut out = BufWriter::new(io::stdout().lock());
    if let Err(e) = run(&config, io::stdin().lock(), &mut out) {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run<R: Read, W: Write>(config: &RunConfig, stdin: R, out: &mut W) -> Result<()> {
    let now = Instant::now();

    let provider = build_provider(&config.source, stdin)?;
    let points = provider.fetch_locations(config.count)?;
    info!("fetched {} locations", points.len());

    let distances = DistanceMatrix::from_points(&points);
    let tour = nearest_neighbor_tour(&points, &distances)?;

    let summary = TourEvaluator::new(&distances).summarize(&tour);
    info!(
        "tour: cities={} length={:.4} time={:.3}s",
        summary.num_cities,
        summary.total_distance,
        now.elapsed().as_secs_f32()
    );
    if let Some(leg) = summary.longest_leg {
        info!(
            "longest leg: {} -> {} ({:.4})",
            points[leg.from].name(),
            points[leg.to].name(),
            leg.distance
        );
    }

    print_tour(out, &tour, config.json)?;

    if let Some(path) = &config.map_output {
        HtmlMapRenderer::new(path).render(tour.points())?;
    }

    Ok(())
}

fn build_provider<R: Read>(source: &SourceConfig, stdin: R) -> Result<Box<dyn LocationProvider>> {
    Ok(match source {
        SourceConfig::Random { seed } => Box::new(RandomLocationProvider::new(*seed)),
        SourceConfig::PayloadStdin => Box::new(PayloadLocationProvider::from_reader(stdin)?),
        SourceConfig::PayloadFile(path) => Box::new(PayloadLocationProvider::from_path(path)?),
    })
}

/// Writes the tour as `name,lat,lon` lines, or as pretty JSON.
fn print_tour<W: Write>(out: &mut W, tour: &Tour, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, tour)?;
        writeln!(out)?;
    } else {
        for p in tour {
            writeln!(out, "{},{},{}", p.name(), p.lat(), p.lon())?;
        }
    }
    out.flush()?;
    Ok(())
}
