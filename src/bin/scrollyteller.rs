use std::{
    cell::RefCell,
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollyteller", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the storyboard of a story file.
    Dump(DumpArgs),
    /// Drive a story through a recorded scroll trace and print every draw call.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Input story JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport height used for the page height line.
    #[arg(long, default_value_t = 800.0)]
    viewport: f64,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input story JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// JSON array of scroll offsets, one per frame.
    #[arg(long)]
    trace: PathBuf,

    /// Viewport height of the simulated host.
    #[arg(long, default_value_t = 800.0)]
    viewport: f64,

    /// Milliseconds between simulated frames.
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,

    /// Write telemetry events as JSON lines to this file.
    #[arg(long)]
    telemetry: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Dump(args) => cmd_dump(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_story(path: &Path) -> anyhow::Result<scrollyteller::StoryFile> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read story '{}'", path.display()))?;
    let story = scrollyteller::StoryFile::from_json(&s)
        .with_context(|| format!("parse story '{}'", path.display()))?;
    Ok(story)
}

fn read_trace(path: &Path) -> anyhow::Result<Vec<f64>> {
    let f = File::open(path).with_context(|| format!("open trace '{}'", path.display()))?;
    let trace: Vec<f64> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse trace JSON")?;
    if let Some(bad) = trace.iter().find(|o| !o.is_finite() || **o < 0.0) {
        anyhow::bail!("trace offsets must be finite and non-negative (got {bad})");
    }
    Ok(trace)
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let story = read_story(&args.in_path)?;
    let log = scrollyteller::DrawLog::new();
    let director = scrollyteller::Director::from_config(
        &story.config,
        story.trace_defs(&log),
        scrollyteller::NullTelemetry,
    )?;

    print!("{director}");
    println!("story length: {}", director.story_length());
    println!(
        "page height:  {} (viewport {})",
        director.page_height(args.viewport),
        args.viewport
    );

    let steps = director.storyboard().steps();
    for (i, j) in director.storyboard().overlaps() {
        println!(
            "overlap:      {} and {}",
            steps[i].name(),
            steps[j].name()
        );
    }
    Ok(())
}

type Telemetry =
    scrollyteller::BatchingTelemetry<scrollyteller::JsonLinesTransport<Box<dyn Write>>>;

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let story = read_story(&args.in_path)?;
    let trace = read_trace(&args.trace)?;

    let out: Box<dyn Write> = match &args.telemetry {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            Box::new(
                File::create(path)
                    .with_context(|| format!("create telemetry file '{}'", path.display()))?,
            )
        }
        None => Box::new(std::io::sink()),
    };
    let telemetry: Rc<RefCell<Telemetry>> = Rc::new(RefCell::new(
        scrollyteller::BatchingTelemetry::new(
            story.reader.clone(),
            scrollyteller::JsonLinesTransport::new(out),
        ),
    ));

    let log = scrollyteller::DrawLog::new();
    let director = scrollyteller::Director::from_config(
        &story.config,
        story.trace_defs(&log),
        telemetry.clone(),
    )?;

    let mut host = scrollyteller::SimulatedHost::new(args.viewport);
    host.scroll_to(trace.first().copied().unwrap_or(0.0));
    let mut lp = scrollyteller::AnimationLoop::new(director, host, story.config.timing);

    let state = lp.start();
    print_calls("start", lp.last_offset(), &log);

    for (frame, offset) in trace.iter().enumerate() {
        lp.host_mut().advance(args.frame_ms);
        lp.host_mut().scroll_to(*offset);
        lp.on_frame();
        lp.poll_timers();
        print_calls(&frame.to_string(), *offset, &log);
    }

    if let Err(err) = lp.director_mut().telemetry_mut().send() {
        tracing::warn!(error = %err, "final telemetry flush failed");
    }

    let stats = lp.stats();
    eprintln!(
        "{:?}: {} frames, {} redraws, {} throttled, {} telemetry events delivered",
        state,
        stats.frames,
        stats.redraws,
        stats.throttled,
        telemetry.borrow().stats().delivered
    );
    Ok(())
}

fn print_calls(frame: &str, offset: f64, log: &scrollyteller::DrawLog) {
    for call in log.take() {
        println!("{frame:>6} {offset:>9.1}  {call}");
    }
}
