use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bingocard", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a card description to a PNG.
    Render(RenderArgs),
    /// Check a card description without rendering it.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input card JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Font file to use instead of the one named in the style.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Skip the system font lookup when the font file cannot be loaded.
    #[arg(long)]
    no_system_fonts: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input card JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Validate(args) => cmd_validate(args),
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

fn read_spec(path: &std::path::Path) -> anyhow::Result<bingocard::CardSpec> {
    bingocard::CardSpec::from_path(path)
        .with_context(|| format!("load card description '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut spec = read_spec(&args.in_path)?;
    if let Some(font) = args.font {
        spec.style.font_path = font;
    }
    if args.no_system_fonts {
        spec.style.system_font_fallback = false;
    }

    let rendered = bingocard::generate_card(&spec.card(), &spec.style, &args.out)?;

    let overflowing = rendered.cells.iter().filter(|c| c.overflow).count();
    if overflowing > 0 {
        eprintln!("warning: {overflowing} cell(s) overflow at the minimum font size");
    }
    eprintln!(
        "wrote {} ({}x{}, {}x{} grid, font {:?})",
        args.out.display(),
        rendered.image.width(),
        rendered.image.height(),
        rendered.grid_size(),
        rendered.grid_size(),
        rendered.font,
    );
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let spec = read_spec(&args.in_path)?;
    let grid_size = spec.card().grid_size()?;
    spec.style.validate()?;
    bingocard::CardLayout::new(grid_size, &spec.style)?;
    eprintln!(
        "ok: '{}' is a {grid_size}x{grid_size} card",
        args.in_path.display()
    );
    Ok(())
}
