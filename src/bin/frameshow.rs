use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "frameshow", version)]
struct Cli {
    /// Log pipeline progress to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a slideshow page from the frames of the current page.
    Build(BuildArgs),
    /// Print the frames of the current page in slideshow order.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output document JSON.
    #[arg(long)]
    out: PathBuf,

    /// Slideshow options JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the frame ordering from the options.
    #[arg(long, value_enum)]
    order: Option<OrderChoice>,

    /// Write registered slide images into this directory as `<hash>.png`.
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Export scale in pixels per canvas unit.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame ordering.
    #[arg(long, value_enum, default_value_t = OrderChoice::Y)]
    order: OrderChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderChoice {
    /// Top to bottom, then left to right.
    Y,
    /// Left to right, then top to bottom.
    X,
}

impl From<OrderChoice> for frameshow::SortPriority {
    fn from(c: OrderChoice) -> Self {
        match c {
            OrderChoice::Y => Self::Y,
            OrderChoice::X => Self::X,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_host(path: &std::path::Path) -> anyhow::Result<frameshow::MemoryHost> {
    let doc = frameshow::Document::from_path(path)?;
    frameshow::MemoryHost::from_document(&doc)
        .with_context(|| format!("load document '{}'", path.display()))
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let mut host = load_host(&args.in_path)?;

    let mut opts = match &args.config {
        Some(p) => frameshow::SlideshowOpts::from_path(p)?,
        None => frameshow::SlideshowOpts::default(),
    };
    if let Some(order) = args.order {
        opts.order = order.into();
    }

    let exporter = frameshow::MemoryExporter::new(&host, args.scale)?;
    let mut rasterizer =
        frameshow::ChannelRasterizer::new(exporter, frameshow::LoopbackPort::png_normalizer());

    let report = pollster::block_on(frameshow::run(&mut host, &mut rasterizer, &opts))?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let json = host.to_document().to_json_pretty()?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write document '{}'", args.out.display()))?;

    if let Some(dir) = &args.assets_dir {
        let written = host.write_images(dir)?;
        eprintln!("wrote {} image(s) to {}", written.len(), dir.display());
    }

    eprintln!(
        "wrote {} ({} slide(s), {} link(s))",
        args.out.display(),
        report.slides.len(),
        report.graph.edges.len()
    );
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    use frameshow::Host as _;

    let host = load_host(&args.in_path)?;
    let regions = host.page_regions(host.current_page())?;
    let frames = frameshow::select_frames(&regions, args.order.into());
    for (i, f) in frames.iter().enumerate() {
        println!(
            "{i}\t{}\t{}\t{},{}\t{}x{}",
            f.id,
            f.name,
            f.x(),
            f.y(),
            f.width(),
            f.height()
        );
    }
    Ok(())
}
