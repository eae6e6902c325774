use clap::Parser;
use log::{debug, LevelFilter};
use mp4vtt::subtitles::{extract_cues, open_local_cue_track, ExtractOptions};
use mp4vtt::{list_tracks, ExtractError, ExtractResult, ReaderOptions};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Extract WebVTT cues from an MP4 text track
///
/// Writes the cues of the first `wvtt`/`svtt` text track (or the track given
/// with -t) as a WebVTT file.
#[derive(Parser, Debug)]
#[command(name = "mp4vttextract")]
#[command(version)]
struct Cli {
    /// 1-based index of the track to extract (must be a WebVTT text track)
    #[arg(short, long, value_name = "TRACK", value_parser = clap::value_parser!(u32).range(1..))]
    track: Option<u32>,

    /// Print the tracks of IN_FILE and exit
    #[arg(short, long)]
    list_tracks: bool,

    /// With --list-tracks, print the track list as JSON
    #[arg(long, requires = "list_tracks")]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Input MP4 file
    #[arg(value_name = "IN_FILE")]
    input: PathBuf,

    /// Output file; standard output when omitted
    #[arg(value_name = "OUT_FILE")]
    output: Option<PathBuf>,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// The reader stays quiet until -vv.
    fn reader_options(&self) -> ReaderOptions {
        let log_level = if self.verbose >= 2 {
            self.log_level()
        } else {
            LevelFilter::Off
        };
        ReaderOptions { log_level }
    }
}

fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn print_tracks(cli: &Cli) -> ExtractResult<()> {
    let tracks = list_tracks(&cli.input, cli.reader_options())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &tracks).map_err(io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }
    for track in tracks {
        writeln!(
            out,
            "{}\tid={}\t{}\t{}\t{} samples\ttimescale={}\tduration={}\t{}",
            track.index,
            track.track_id,
            track.handler_type,
            track.sample_entry.as_deref().unwrap_or("-"),
            track.sample_count,
            track.timescale,
            track.duration,
            track.language.as_deref().unwrap_or("und")
        )?;
    }
    Ok(())
}

fn run(cli: &Cli) -> ExtractResult<()> {
    if cli.list_tracks {
        return print_tracks(cli);
    }

    let options = ExtractOptions {
        track: cli.track,
        reader: cli.reader_options(),
    };
    let (mut reader, track) = open_local_cue_track(&cli.input, &options)?;

    // Only touch OUT_FILE once the input is known to be usable.
    match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExtractError::Output(io::Error::new(
                    e.kind(),
                    format!("cannot create {}: {}", path.display(), e),
                ))
            })?;
            extract_cues(&mut reader, &track, BufWriter::new(file))?;
        }
        None => {
            let stdout = io::stdout();
            extract_cues(&mut reader, &track, BufWriter::new(stdout.lock()))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(ExtractError::Usage(e.kind().to_string()).exit_code());
        }
    };

    init_logging(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("extraction failed: {:?}", e);
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
