use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "stonkline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the drawing as an SVG path `d` attribute.
    Path(GenArgs),
    /// Write a standalone SVG document.
    Svg(SvgArgs),
    /// Rasterize the drawing and write a PNG.
    Png(PngArgs),
    /// Print the generated geometry as JSON.
    Json(GenArgs),
}

#[derive(Args, Debug)]
struct GenArgs {
    /// Base configuration JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width.
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height.
    #[arg(long)]
    height: Option<f64>,

    /// Walk steps (smooth/polyline) or segment count (scatter).
    #[arg(long)]
    count: Option<usize>,

    /// Largest vertical change per step, as a fraction of the height.
    #[arg(long = "max-step")]
    max_step: Option<f64>,

    /// Decoration variant.
    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// Seed for a reproducible drawing.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct SvgArgs {
    #[command(flatten)]
    generator: GenArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct PngArgs {
    #[command(flatten)]
    generator: GenArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Scale applied to the canvas size.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Paint a black background instead of leaving it transparent.
    #[arg(long, default_value_t = false)]
    black: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    Scatter,
    Polyline,
    Smooth,
}

impl From<StyleArg> for stonkline::CurveStyle {
    fn from(v: StyleArg) -> Self {
        match v {
            StyleArg::Scatter => Self::Scatter,
            StyleArg::Polyline => Self::Polyline,
            StyleArg::Smooth => Self::Smooth,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Path(args) => cmd_path(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
        Command::Json(args) => cmd_json(args),
    }
}

fn load_config(args: &GenArgs) -> anyhow::Result<stonkline::CurveConfig> {
    let mut cfg = match &args.config {
        Some(path) => stonkline::CurveConfig::from_path(path)?,
        None => stonkline::CurveConfig::default(),
    };
    if let Some(w) = args.width {
        cfg.canvas.width = w;
    }
    if let Some(h) = args.height {
        cfg.canvas.height = h;
    }
    if let Some(n) = args.count {
        cfg.count = n;
    }
    if let Some(f) = args.max_step {
        cfg.max_step_fraction = f;
    }
    if let Some(s) = args.style {
        cfg.style = s.into();
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn generate(args: &GenArgs) -> anyhow::Result<(stonkline::CurveConfig, stonkline::Drawing)> {
    let cfg = load_config(args)?;
    let drawing = stonkline::draw(&cfg, &mut cfg.rng())?;
    Ok((cfg, drawing))
}

fn cmd_path(args: GenArgs) -> anyhow::Result<()> {
    let (_, drawing) = generate(&args)?;
    println!("{}", drawing.path_data());
    Ok(())
}

fn cmd_json(args: GenArgs) -> anyhow::Result<()> {
    let (_, drawing) = generate(&args)?;
    println!("{}", drawing.to_json_pretty()?);
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let (cfg, drawing) = generate(&args.generator)?;
    let svg = stonkline::svg_document(&drawing, &cfg.stroke);
    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let (cfg, drawing) = generate(&args.generator)?;
    let svg = stonkline::svg_document(&drawing, &cfg.stroke);
    let opts = stonkline::RasterOpts {
        scale: args.scale,
        background: args.black.then_some([0, 0, 0, 255]),
    };
    let img = stonkline::rasterize(&svg, opts)?;
    img.save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
