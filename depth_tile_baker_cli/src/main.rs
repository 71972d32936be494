//! depth-baker - bake depth tiles from a scene manifest
//!
//! Usage:
//!   depth-baker list --manifest scene.json
//!   depth-baker bake --manifest scene.json --region Harbor
//!   depth-baker bake --manifest scene.json --all --stats

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Args, Parser, Subcommand};
use depth_tile_baker::baker::Engine;
use depth_tile_baker::baker::log::{DefaultLogger, LogSeverity};
use depth_tile_baker::baker::render::RendererConfig;
use depth_tile_baker_renderer_soft::SoftRenderer;

#[derive(Parser)]
#[command(name = "depth-baker")]
#[command(version)]
#[command(about = "Bake top-down depth tiles for water regions", long_about = None)]
struct Cli {
    /// Print debug and trace logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bake one or more regions of a manifest
    Bake(BakeArgs),

    /// List the regions of a manifest with their settings
    List {
        /// Scene manifest (JSON)
        #[arg(long)]
        manifest: PathBuf,
    },
}

#[derive(Args)]
#[command(group(ArgGroup::new("selection").required(true).args(["region", "all"])))]
struct BakeArgs {
    /// Scene manifest (JSON)
    #[arg(long)]
    manifest: PathBuf,

    /// Region to bake (repeatable)
    #[arg(long)]
    region: Vec<String>,

    /// Bake every region of the manifest
    #[arg(long)]
    all: bool,

    /// Directory the scene path is resolved against (defaults to the manifest's directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Poll ticks before a readback is delivered
    #[arg(long, default_value_t = 2)]
    readback_latency: u32,

    /// Print rasterizer statistics after baking
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let severity = if cli.verbose { LogSeverity::Trace } else { LogSeverity::Info };
    Engine::set_logger(DefaultLogger::with_min_severity(severity));

    match cli.command {
        Command::List { manifest } => match commands::list(&manifest) {
            Ok(lines) => {
                for line in lines {
                    println!("{}", line);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Command::Bake(args) => run_bake(args),
    }
}

fn run_bake(args: BakeArgs) -> ExitCode {
    let config = RendererConfig {
        app_name: "depth-baker".to_string(),
        readback_latency: args.readback_latency,
    };

    let result = Engine::initialize()
        .and_then(|_| Engine::create_renderer(SoftRenderer::new(config)))
        .and_then(|_| {
            let selection = if args.all {
                commands::Selection::All
            } else {
                commands::Selection::Named(args.region.clone())
            };
            commands::bake(&args.manifest, args.root.as_deref(), &selection)
        });

    if args.stats {
        depth_tile_baker_renderer_soft::print_raster_stats_report();
    }
    Engine::shutdown();

    match result {
        Ok(report) => {
            for name in report.succeeded() {
                println!("baked   {}", name);
            }
            for (name, error) in report.failed() {
                eprintln!("failed  {}: {}", name, error);
            }
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
