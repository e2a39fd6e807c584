use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexsnap::{
    timed, ApothemSource, Orientation, SnapConfig, Snapper, WorldPosition,
};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::{File as FsFile, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for snapping positions onto a hex grid. Reads one `x y z` position per
/// line (separated by whitespace and/or commas), snaps each one, and writes
/// out the snapped positions in the same order. Blank lines and lines starting
/// with `#` are skipped.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexsnap")]
struct Opt {
    /// Path to a config file that defines how positions are snapped.
    /// Supported formats: JSON, TOML. Flags below override values from the
    /// file.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// File to read positions from. Reads stdin if not given
    #[structopt(short, long)]
    input: Option<PathBuf>,

    /// File to write snapped positions to. Writes to stdout if not given
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format to output positions in. Supported formats:
    ///
    /// csv - One `x,y,z` line per position
    ///
    /// json - A single JSON array of `{"x", "y", "z"}` objects
    #[structopt(short = "f", long, default_value = "csv")]
    format: OutputFormat,

    /// The `x` component of the objects' local scale. Only used when the
    /// grid size comes from the scale (the default)
    #[structopt(long, default_value = "1.0")]
    scale: f64,

    /// Hexagon orientation: point_top or flat_top
    #[structopt(long)]
    orientation: Option<Orientation>,

    /// Use a fixed grid apothem instead of taking it from the scale
    #[structopt(long)]
    apothem: Option<f64>,

    /// Disable snapping on the x/z plane
    #[structopt(long)]
    no_planar: bool,

    /// Enable vertical (y) snapping
    #[structopt(long)]
    vertical: bool,

    /// Interval for vertical snapping. Implies --vertical
    #[structopt(long)]
    vertical_interval: Option<f64>,

    /// The logging level to use. Logs go to stdout, so anything chattier than
    /// `warn` will be mixed in with the output unless --output is given. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for `--format`!
    /// Comma-separated coordinates, one position per line
    Csv,
    /// A JSON array of position objects
    Json,
}

fn load_config(config_path: &Path) -> anyhow::Result<SnapConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Apply command line overrides on top of a loaded (or default) config
fn apply_overrides(mut config: SnapConfig, opt: &Opt) -> SnapConfig {
    if let Some(orientation) = opt.orientation {
        config.orientation = orientation;
    }
    if let Some(apothem) = opt.apothem {
        config.apothem_source = ApothemSource::Custom;
        config.custom_apothem = apothem;
    }
    if opt.no_planar {
        config.planar_snap_enabled = false;
    }
    if opt.vertical {
        config.vertical_snap_enabled = true;
    }
    if let Some(interval) = opt.vertical_interval {
        config.vertical_snap_enabled = true;
        config.vertical_interval = interval;
    }
    config
}

/// Parse one line of input into a position. Returns `None` for lines that
/// should be skipped.
fn parse_position(line: &str) -> anyhow::Result<Option<WorldPosition>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let components = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("invalid coordinate {:?}", s))
        })
        .collect::<anyhow::Result<Vec<f64>>>()?;
    match *components.as_slice() {
        [x, y, z] => Ok(Some(WorldPosition::new(x, y, z))),
        _ => bail!("expected 3 coordinates, got {}", components.len()),
    }
}

/// Snap every position in the input, in order
fn snap_all(
    snapper: &Snapper,
    input: impl BufRead,
    scale: f64,
) -> anyhow::Result<Vec<WorldPosition>> {
    let mut snapped = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line_num = i + 1;
        let line = line.context("error reading input")?;
        if let Some(position) = parse_position(&line)
            .with_context(|| format!("error parsing line {}", line_num))?
        {
            let position = snapper
                .snap(position, scale)
                .with_context(|| format!("error snapping line {}", line_num))?;
            snapped.push(position);
        }
    }
    Ok(snapped)
}

fn write_output(
    mut output: impl Write,
    format: OutputFormat,
    positions: &[WorldPosition],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => {
            for position in positions {
                let WorldPosition { x, y, z } = position;
                writeln!(output, "{},{},{}", x, y, z)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut output, positions)?;
            writeln!(output)?;
        }
    }
    output.flush()?;
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => SnapConfig::default(),
    };
    let snapper = Snapper::new(apply_overrides(config, &opt))
        .context("invalid snap config")?;

    let input: Box<dyn BufRead> = match &opt.input {
        Some(input_path) => Box::new(BufReader::new(
            FsFile::open(input_path).with_context(|| {
                format!("error opening input file {:?}", input_path)
            })?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let snapped = timed!(
        "Snapping positions",
        log::Level::Info,
        snap_all(&snapper, input, opt.scale)
    )?;
    info!("Snapped {} positions", snapped.len());

    match &opt.output {
        Some(output_path) => {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(output_path)
                .with_context(|| {
                    format!("error opening output file {:?}", output_path)
                })?;
            write_output(file, opt.format, &snapped).with_context(|| {
                format!("error writing to file {:?}", output_path)
            })
        }
        None => write_output(io::stdout().lock(), opt.format, &snapped)
            .context("error writing output"),
    }
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
