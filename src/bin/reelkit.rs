use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "reelkit", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in presets with their lengths.
    List,
    /// Print the resolved state of one frame as JSON.
    Frame(FrameArgs),
    /// Print a fingerprint per frame.
    Digest(DigestArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Source {
    /// Built-in preset name (see `list`).
    #[arg(long)]
    preset: Option<String>,

    /// Input reel JSON.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: Source,

    /// Global frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DigestArgs {
    #[command(flatten)]
    source: Source,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the reel length.
    #[arg(long)]
    end: Option<u64>,

    /// Evaluate frames on the rayon pool.
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::List => cmd_list(),
        Command::Frame(args) => cmd_frame(args),
        Command::Digest(args) => cmd_digest(args),
    }
}

fn read_reel_json(path: &Path) -> anyhow::Result<reelkit::ReelConfig> {
    let f = File::open(path).with_context(|| format!("open reel '{}'", path.display()))?;
    let r = BufReader::new(f);
    let cfg: reelkit::ReelConfig =
        serde_json::from_reader(r).with_context(|| "parse reel JSON")?;
    Ok(cfg)
}

fn load(source: &Source) -> anyhow::Result<reelkit::Reel> {
    let cfg = match (&source.preset, &source.in_path) {
        (Some(name), _) => reelkit::preset(name).with_context(|| {
            format!(
                "unknown preset '{name}' (known: {})",
                reelkit::preset_names().join(", ")
            )
        })?,
        (None, Some(path)) => read_reel_json(path)?,
        (None, None) => anyhow::bail!("either --preset or --in is required"),
    };
    Ok(cfg.build()?)
}

fn cmd_list() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for name in reelkit::preset_names() {
        let Some(cfg) = reelkit::preset(name) else {
            continue;
        };
        writeln!(
            out,
            "{name}\t{} frames\t{} scene(s)",
            cfg.total_frames(),
            cfg.scenes.len()
        )?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let reel = load(&args.source)?;
    let state = reelkit::Evaluator::eval_frame(&reel, reelkit::FrameIndex(args.frame))?;
    let json = serde_json::to_string_pretty(&state).context("serialize frame state")?;

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&path, json)
                .with_context(|| format!("write frame json '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_digest(args: DigestArgs) -> anyhow::Result<()> {
    let reel = load(&args.source)?;
    let end = args.end.unwrap_or(reel.total_frames());
    let range = reelkit::FrameRange::new(reelkit::FrameIndex(args.start), reelkit::FrameIndex(end))?;
    let threading = if args.parallel {
        reelkit::Threading::Parallel
    } else {
        reelkit::Threading::Sequential
    };

    let states = reelkit::Evaluator::eval_range(&reel, range, threading)?;
    let mut out = std::io::stdout().lock();
    for state in &states {
        writeln!(
            out,
            "{}\t{}\t{}",
            state.frame.0,
            state.scene_id,
            reelkit::fingerprint_frame(state)
        )?;
    }
    Ok(())
}
