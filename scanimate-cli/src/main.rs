use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scanimate", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interleave the frames of one directory into a base image (and optional grille mask).
    Base(BaseArgs),
    /// Run every job of a JSON manifest, in parallel.
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct BaseArgs {
    /// Folder containing frames.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Recurse into subfolders.
    #[arg(long)]
    recursive: bool,

    /// Comma-separated extensions to include (default: common raster formats).
    #[arg(long)]
    exts: Option<String>,

    /// Strip / visible slit size in pixels.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    slice: i64,

    /// Strip direction: vertical (left-right slide) or horizontal (up-down slide).
    #[arg(long, value_enum, default_value_t = DirectionChoice::Vertical)]
    direction: DirectionChoice,

    /// How to reconcile frames of different sizes.
    #[arg(long, value_enum, default_value_t = ResizeChoice::Strict)]
    resize: ResizeChoice,

    /// Output path for the interleaved base.
    #[arg(long, default_value = scanimate::DEFAULT_BASE_OUTPUT)]
    out_base: PathBuf,

    /// Also export the periodic grille mask (RGBA) to this path.
    #[arg(long)]
    out_mask: Option<PathBuf>,

    /// Write the base as RGB (alpha dropped).
    #[arg(long)]
    force_rgb: bool,

    /// Composite the base onto a solid white background (RGB output).
    #[arg(long)]
    white_bg: bool,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Job manifest JSON (`{ "jobs": [...] }`); relative paths resolve against its folder.
    #[arg(long)]
    manifest: PathBuf,

    /// Worker threads (default: one per core).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionChoice {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ResizeChoice {
    Strict,
    First,
    Min,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Base(args) => cmd_base(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn job_from_args(args: BaseArgs) -> anyhow::Result<scanimate::ScanJob> {
    let strip_width = scanimate::StripWidth::new(args.slice)?;
    let direction = match args.direction {
        DirectionChoice::Vertical => scanimate::Direction::Vertical,
        DirectionChoice::Horizontal => scanimate::Direction::Horizontal,
    };
    let resize = match args.resize {
        ResizeChoice::Strict => scanimate::ResizeStrategy::Strict,
        ResizeChoice::First => scanimate::ResizeStrategy::First,
        ResizeChoice::Min => scanimate::ResizeStrategy::Min,
    };

    Ok(scanimate::ScanJob {
        frame_dir: args.dir,
        recursive: args.recursive,
        extensions: args
            .exts
            .as_deref()
            .map(scanimate::parse_extensions)
            .unwrap_or_default(),
        strip_width,
        direction,
        resize,
        output_mode: scanimate::OutputMode::from_flags(args.force_rgb, args.white_bg),
        out_base: args.out_base,
        out_mask: args.out_mask,
    })
}

fn cmd_base(args: BaseArgs) -> anyhow::Result<()> {
    let job = job_from_args(args)?;
    tracing::debug!(?job, "resolved job");
    let report = scanimate::run_job(&job)
        .with_context(|| format!("generate scanimation from '{}'", job.frame_dir.display()))?;
    print_report(&report);
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let manifest = scanimate::JobManifest::from_path(&args.manifest)?;
    tracing::info!(
        jobs = manifest.jobs.len(),
        manifest = %args.manifest.display(),
        "running batch"
    );
    let results = scanimate::run_batch(&manifest.jobs, args.threads)?;

    let mut failed = 0usize;
    for (job, result) in manifest.jobs.iter().zip(results) {
        match result {
            Ok(report) => print_report(&report),
            Err(e) => {
                failed += 1;
                eprintln!("failed {}: {e}", job.frame_dir.display());
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} job(s) failed", manifest.jobs.len());
    }
    Ok(())
}

fn print_report(report: &scanimate::JobReport) {
    eprintln!(
        "wrote {} ({}, frames: {}, slice: {}, dir: {})",
        report.base_path.display(),
        report.size,
        report.frame_count(),
        report.strip_width.get(),
        report.direction,
    );
    if let (Some(path), Some(period)) = (&report.mask_path, report.grille_period) {
        eprintln!("wrote {} (period: {period} px)", path.display());
    }
}
