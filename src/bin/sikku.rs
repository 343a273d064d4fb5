use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "sikku", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render an animated PNG sequence.
    Render(RenderArgs),
    /// Generate a scene and dump it as JSON.
    Scene(SceneArgs),
}

#[derive(Parser, Debug)]
struct SceneOpts {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Pattern variant.
    #[arg(long, value_enum, default_value_t = VariantChoice::Combined)]
    variant: VariantChoice,

    /// Deterministic generation seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneOpts,

    /// Frame index (0-based); time is `index * TIME_STEP`.
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    scene: SceneOpts,

    /// Number of frames to render.
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    #[command(flatten)]
    scene: SceneOpts,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    Dots,
    Flowing,
    Combined,
}

impl From<VariantChoice> for sikku::Variant {
    fn from(v: VariantChoice) -> Self {
        match v {
            VariantChoice::Dots => Self::Dots,
            VariantChoice::Flowing => Self::Flowing,
            VariantChoice::Combined => Self::Combined,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Scene(args) => cmd_scene(args),
    }
}

fn build_scene_from_opts(opts: &SceneOpts) -> sikku::Scene {
    sikku::build_scene(
        sikku::Canvas::new(opts.width, opts.height),
        opts.variant.into(),
        &sikku::SceneParams::default(),
        &mut sikku::Rng64::new(opts.seed),
    )
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = build_scene_from_opts(&args.scene);
    let time = args.frame as f64 * sikku::TIME_STEP;

    let mut backend = sikku::create_backend(sikku::BackendKind::Cpu, &sikku::RenderSettings::default());
    let frame = sikku::render_frame(&scene, time, backend.as_mut())?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    sikku::write_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut player = sikku::Player::new(
        sikku::Canvas::new(args.scene.width, args.scene.height),
        args.scene.variant.into(),
        args.scene.seed,
    );
    let mut backend = sikku::create_backend(sikku::BackendKind::Cpu, &sikku::RenderSettings::default());

    let out_dir = args.out_dir.clone();
    let produced = sikku::render_sequence(
        &mut player,
        args.frames,
        backend.as_mut(),
        |index, frame| {
            let path = out_dir.join(format!("frame_{index:04}.png"));
            sikku::write_png(&frame, &path)
        },
    )?;
    player.stop();

    eprintln!("wrote {produced} frames to {}", args.out_dir.display());
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let scene = build_scene_from_opts(&args.scene);
    scene.validate()?;

    let json = serde_json::to_string_pretty(&scene).context("serialize scene JSON")?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("write scene '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
