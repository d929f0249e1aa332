use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "skyshow", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a samples manifest into a Skybrush show JSON file.
    Json(JsonArgs),
    /// Convert a samples manifest into a compiled show (requires an external compiler).
    Skyc(SkycArgs),
    /// Validate an existing show JSON file and print a summary.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input samples manifest (JSON).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the show title from the manifest.
    #[arg(long)]
    title: Option<String>,
}

#[derive(Args, Debug)]
struct JsonArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output show JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Indentation width.
    #[arg(long, default_value_t = skyshow::DEFAULT_INDENT, conflicts_with = "compact")]
    indent: usize,

    /// Write single-line JSON.
    #[arg(long)]
    compact: bool,

    /// Decimal digits kept for times and coordinates.
    #[arg(long, default_value_t = skyshow::DEFAULT_PRECISION)]
    precision: u32,
}

#[derive(Args, Debug)]
struct SkycArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output compiled show path.
    #[arg(long)]
    out: PathBuf,

    /// Compiler program; falls back to the SKYSHOW_COMPILER environment variable.
    #[arg(long)]
    compiler: Option<PathBuf>,

    /// Extra argument passed to the compiler before the input and output paths.
    #[arg(long = "compiler-arg", allow_hyphen_values = true)]
    compiler_args: Vec<String>,

    /// Decimal digits kept for times and coordinates.
    #[arg(long, default_value_t = skyshow::DEFAULT_PRECISION)]
    precision: u32,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Show JSON file to validate.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Json(args) => cmd_json(args),
        Command::Skyc(args) => cmd_skyc(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_show(input: &InputArgs) -> anyhow::Result<skyshow::ShowConverter> {
    let mut samples = skyshow::ShowSamples::read(&input.in_path)
        .with_context(|| format!("read samples '{}'", input.in_path.display()))?;
    if let Some(title) = &input.title {
        samples.title = title.clone();
    }
    let show = samples
        .into_converter()
        .with_context(|| format!("build show from '{}'", input.in_path.display()))?;
    Ok(show)
}

fn cmd_json(args: JsonArgs) -> anyhow::Result<()> {
    let show = load_show(&args.input)?;

    let cfg = skyshow::ExportConfig {
        indent: (!args.compact).then_some(args.indent),
        precision: args.precision,
    };
    cfg.validate()?;

    show.write_to_file(&args.out, cfg.indent, cfg.precision)
        .with_context(|| format!("write show '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_skyc(args: SkycArgs) -> anyhow::Result<()> {
    let show = load_show(&args.input)?;

    let cfg = skyshow::ExportConfig::default().with_precision(args.precision);
    cfg.validate()?;

    let compiler = skyshow::CommandCompiler::resolve(args.compiler.as_deref())
        .map(|c| c.with_args(&args.compiler_args));

    show.compile_to_artifact_with(
        &cfg,
        &args.out,
        compiler.as_ref().map(|c| c as &dyn skyshow::ArtifactCompiler),
    )
    .with_context(|| format!("compile show '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let show = read_show_json(&args.in_path)?;
    let stats = show.stats();

    println!("title:             {}", show.title());
    println!("drones:            {}", stats.drone_count);
    println!("duration:          {:.3}s", stats.duration);
    println!("trajectory points: {}", stats.trajectory_points);
    println!("light keyframes:   {}", stats.light_keyframes);
    Ok(())
}

fn read_show_json(path: &Path) -> anyhow::Result<skyshow::ShowConverter> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("open show '{}'", path.display()))?;
    let show = skyshow::ShowConverter::from_text(&text)
        .with_context(|| format!("validate show '{}'", path.display()))?;
    Ok(show)
}
