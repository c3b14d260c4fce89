use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "halftone", version, about = "Render halftone dot patterns as SVG")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an SVG document.
    Render(RenderArgs),
    /// Print the resolved lattice without rendering.
    Lattice(LatticeArgs),
}

#[derive(Args, Debug)]
struct GeometryArgs {
    /// JSON render config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width.
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height.
    #[arg(long)]
    height: Option<f64>,

    /// Base dot radius.
    #[arg(long)]
    radius: Option<f64>,

    /// Placement strategy.
    #[arg(long, value_enum)]
    layout: Option<LayoutChoice>,

    /// Radius-progression curve.
    #[arg(long, value_enum)]
    ease: Option<EaseChoice>,
}

#[derive(Args, Debug)]
struct LatticeArgs {
    #[command(flatten)]
    geometry: GeometryArgs,

    /// Print the lattice as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    geometry: GeometryArgs,

    /// Dot fill color, written verbatim.
    #[arg(long)]
    fill: Option<String>,

    /// `id` attribute for the root element.
    #[arg(long)]
    id: Option<String>,

    /// Output SVG path.
    #[arg(long, default_value = "result.svg")]
    out: PathBuf,

    /// Write the document to stdout instead of `--out`.
    #[arg(long, conflicts_with = "out")]
    stdout: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutChoice {
    Compact,
    Squared,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EaseChoice {
    Linear,
    InQuad,
    OutCirc,
    InExpo,
    OutExpo,
    InOutQuad,
    InOutQuart,
}

impl From<LayoutChoice> for halftone::Layout {
    fn from(c: LayoutChoice) -> Self {
        match c {
            LayoutChoice::Compact => Self::Compact,
            LayoutChoice::Squared => Self::Squared,
        }
    }
}

impl From<EaseChoice> for halftone::Ease {
    fn from(c: EaseChoice) -> Self {
        match c {
            EaseChoice::Linear => Self::Linear,
            EaseChoice::InQuad => Self::InQuad,
            EaseChoice::OutCirc => Self::OutCirc,
            EaseChoice::InExpo => Self::InExpo,
            EaseChoice::OutExpo => Self::OutExpo,
            EaseChoice::InOutQuad => Self::InOutQuad,
            EaseChoice::InOutQuart => Self::InOutQuart,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Lattice(args) => cmd_lattice(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &GeometryArgs) -> anyhow::Result<halftone::RenderConfig> {
    let mut cfg = match &args.config {
        Some(path) => halftone::RenderConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => halftone::RenderConfig::default(),
    };
    if let Some(w) = args.width {
        cfg.canvas.width = w;
    }
    if let Some(h) = args.height {
        cfg.canvas.height = h;
    }
    if let Some(r) = args.radius {
        cfg.base_radius = r;
    }
    if let Some(l) = args.layout {
        cfg.layout = l.into();
    }
    if let Some(e) = args.ease {
        cfg.ease = e.into();
    }
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.geometry)?;
    if let Some(fill) = args.fill {
        cfg.fill = fill;
    }
    if let Some(id) = args.id {
        cfg.element_id = Some(id);
    }
    cfg.validate().context("invalid render config")?;

    if args.stdout {
        let doc = halftone::render_to_string(&cfg)?;
        let mut out = std::io::stdout().lock();
        out.write_all(doc.as_bytes()).context("write to stdout")?;
        out.flush().context("flush stdout")?;
        return Ok(());
    }

    halftone::render_to_file(&cfg, &args.out)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_lattice(args: LatticeArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.geometry)?;
    let lattice = cfg.lattice().context("invalid render config")?;

    if args.json {
        let json = serde_json::to_string_pretty(&lattice).context("serialize lattice")?;
        println!("{json}");
        return Ok(());
    }

    println!("layout:      {}", lattice.layout.as_str());
    println!("ease:        {}", cfg.ease);
    println!("lines:       {}", lattice.lines);
    println!("cols:        {}", lattice.cols);
    println!("circles:     {}", lattice.len());
    println!("line_height: {:.4}", lattice.line_height);
    println!("col_step:    {:.4}", lattice.col_step());
    Ok(())
}
