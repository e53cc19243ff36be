use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use hanzi_anim::{
    AnimationClock, AnimationEngine, AnimationEvent, AnimationPhase, Canvas, CharacterDeck,
    GraphicsFile, LogPronouncer, Millis, PronunciationRelay, Rgb8, Settings, StrokeFrame,
    StrokePalette, StrokeSet, StrokeSource, VirtualClock, render_svg,
};
use kurbo::Shape as _;

#[derive(Parser, Debug)]
#[command(name = "hanzi-anim", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Without it, `RUST_LOG` picks the level.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate a deck of characters and print every engine event.
    Play(PlayArgs),
    /// Print stroke information for characters.
    Inspect(InspectArgs),
    /// Write the animation state at a given time as an SVG file.
    Frame(FrameArgs),
    /// Print the effective settings.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Stroke graphics file (one JSON record per line).
    #[arg(long)]
    graphics: PathBuf,

    /// Settings JSON file. Defaults are used when absent.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Characters to study, in order.
    #[arg(long, conflicts_with = "chars_file")]
    chars: Option<String>,

    /// Character list file, one character per line.
    #[arg(long)]
    chars_file: Option<PathBuf>,

    /// Stop at this clock time (ms) even if the deck is not finished.
    #[arg(long)]
    until: Option<u64>,

    /// Sleep between timer fires instead of running on simulated time.
    #[arg(long)]
    realtime: bool,

    /// Print events as JSON lines.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Stroke graphics file.
    #[arg(long)]
    graphics: PathBuf,

    /// Characters to inspect.
    chars: String,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Stroke graphics file.
    #[arg(long)]
    graphics: PathBuf,

    /// Settings JSON file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Character to animate.
    character: char,

    /// Clock time (ms) to capture.
    #[arg(long, default_value_t = 0)]
    at: u64,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Seed for mixed stroke colors.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Settings JSON file.
    #[arg(long)]
    path: PathBuf,

    /// Write the defaults if the file does not exist.
    #[arg(long)]
    init: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(log_level(cli.verbose, std::env::var("RUST_LOG").ok().as_deref()));
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Inspect(args) => cmd_inspect(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Config(args) => cmd_config(args),
    }
}

/// `-v` flags win over `RUST_LOG`; an absent or unrecognized `RUST_LOG` means `info`.
fn log_level(verbose: u8, rust_log: Option<&str>) -> tracing::Level {
    match verbose {
        0 => rust_log
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(tracing::Level::INFO),
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

fn init_tracing(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let settings = match path {
        Some(p) => {
            Settings::load(p).with_context(|| format!("read settings '{}'", p.display()))?
        }
        None => Settings::default(),
    };
    settings.validate()?;
    Ok(settings)
}

fn open_graphics(path: &Path) -> anyhow::Result<GraphicsFile> {
    GraphicsFile::open(path).with_context(|| format!("open graphics '{}'", path.display()))
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let settings = read_settings(args.config.as_deref())?;
    let graphics = open_graphics(&args.graphics)?;

    let mut deck = match (&args.chars, &args.chars_file) {
        (Some(s), _) => CharacterDeck::new(s.chars()),
        (None, Some(p)) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("read character list '{}'", p.display()))?;
            CharacterDeck::from_text(&text)
        }
        (None, None) => CharacterDeck::default(),
    };
    let first = deck.current().context("character deck is empty")?;
    for ch in deck.chars().iter().filter(|c| !graphics.contains(**c)) {
        tracing::warn!(character = %ch, "no stroke data; it will be skipped");
    }
    let until = args.until.map(Millis);

    let mut engine = AnimationEngine::new(VirtualClock::new(), graphics, settings.animation());
    let mut relay = PronunciationRelay::new(settings.auto_pronounce);
    let mut voice = LogPronouncer::new();

    let mut remaining = deck.len();
    engine.set_character(first);

    loop {
        let now = engine.clock().now();
        for ev in engine.take_events() {
            print_event(now, &ev, args.json)?;
            relay.on_event(&ev, &mut voice);
        }

        if matches!(
            engine.phase(),
            AnimationPhase::Idle | AnimationPhase::Completed
        ) {
            remaining -= 1;
            if remaining == 0 {
                break;
            }
            let next = deck.next_char().context("character deck is empty")?;
            engine.set_character(next);
            continue;
        }

        let Some(deadline) = engine.next_deadline() else {
            break;
        };
        if until.is_some_and(|u| deadline > u) {
            break;
        }
        if args.realtime {
            std::thread::sleep(deadline.saturating_sub(now).as_duration());
        }
        engine.advance_to(deadline);
    }

    tracing::info!(
        utterances = voice.utterances(),
        at = %engine.clock().now(),
        "playback finished"
    );
    Ok(())
}

fn print_event(now: Millis, ev: &AnimationEvent, json: bool) -> anyhow::Result<()> {
    if json {
        let mut v = serde_json::to_value(ev)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("t".to_owned(), serde_json::Value::from(now.0));
        }
        println!("{v}");
        return Ok(());
    }
    let text = match ev {
        AnimationEvent::SessionStarted { character } => format!("session {character}"),
        AnimationEvent::VisualChanged => "visual changed".to_owned(),
        AnimationEvent::StrokeRevealed { index } => format!("stroke {index} revealed"),
        AnimationEvent::CycleFinished { cycles } => format!("finished after {cycles} cycles"),
    };
    println!("{:>8} {text}", now.to_string());
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let graphics = open_graphics(&args.graphics)?;
    for ch in args.chars.chars().filter(|c| !c.is_whitespace()) {
        let Some(paths) = graphics.load(ch) else {
            println!("{ch}: no stroke data");
            continue;
        };
        let set = StrokeSet::from_paths(&paths);
        println!(
            "{ch}: {} strokes ({} dropped)",
            set.len(),
            set.dropped()
        );
        for (i, s) in set.iter().enumerate() {
            let bb = s.path().bounding_box();
            println!(
                "  {i:>2}: [{:.0}, {:.0}] - [{:.0}, {:.0}]",
                bb.x0, bb.y0, bb.x1, bb.y1
            );
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let settings = read_settings(args.config.as_deref())?;
    let graphics = open_graphics(&args.graphics)?;
    let canvas = Canvas::new(args.width, args.height)?;

    let mut engine = AnimationEngine::new(VirtualClock::new(), graphics, settings.animation());
    engine.set_character(args.character);
    engine.advance_to(Millis(args.at));

    let palette = StrokePalette::from_settings(&settings, args.seed);
    let frame = StrokeFrame::capture(engine.strokes(), canvas, &palette);
    let svg = render_svg(&frame, Some(Rgb8::new(255, 255, 255)));

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({:?}, {}/{} strokes visible)",
        args.out.display(),
        engine.phase(),
        frame.strokes.len(),
        engine.strokes().len()
    );
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let settings = if args.init {
        Settings::load_or_create(&args.path)
    } else {
        Settings::load(&args.path)
    }
    .with_context(|| format!("read settings '{}'", args.path.display()))?;

    println!("{}", serde_json::to_string_pretty(&settings)?);
    if let Err(e) = settings.validate() {
        eprintln!("warning: {e}");
    }
    Ok(())
}
