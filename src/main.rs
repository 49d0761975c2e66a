use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bgforge::{emit, BatchReport, CanvasSize, Error, GeneratorConfig, Style};

/// Batch generator for theme background PNGs.
#[derive(Parser, Debug)]
#[command(name = "bgforge", version, about = "Generate theme background PNGs")]
struct Args {
    /// Output directory for generated PNGs
    #[arg(long, default_value = "assets/backgrounds")]
    out_dir: PathBuf,

    /// Base seed for the motif renderers
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Motif intensity: "standard" or "epic"
    #[arg(long, default_value = "epic")]
    style: Style,

    /// Theme color document (JSON); probed in the output directory when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the gradient batch
    #[arg(long)]
    no_gradients: bool,

    /// Skip the motif batch
    #[arg(long)]
    no_motifs: bool,

    /// Emit an HTML gallery of the produced files
    #[arg(long)]
    gallery: bool,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 390)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 844)]
    height: u32,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let cfg = GeneratorConfig {
        out_dir: args.out_dir,
        size: CanvasSize { width: args.width, height: args.height },
        seed: args.seed,
        style: args.style,
        config_path: args.config,
    };

    let mut report = BatchReport::default();

    if !args.no_motifs {
        println!("Rendering motif backgrounds ({})...", cfg.style.as_str());
        report.merge(bgforge::run_motifs(&cfg));
    }

    if !args.no_gradients {
        println!("Rendering gradient backgrounds...");
        match bgforge::run_gradients(&cfg) {
            Ok(gradients) => report.merge(gradients),
            Err(e @ Error::ConfigMissing(_)) => {
                eprintln!("{e}");
                eprintln!("export the theme colors first, or pass --config");
                // Fatal only when gradients were the whole job.
                if args.no_motifs {
                    return ExitCode::FAILURE;
                }
            }
            Err(e) => {
                eprintln!("gradient batch failed: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if args.gallery {
        match emit::write_gallery(&cfg.out_dir, &report.files) {
            Ok(path) => println!("Gallery written to {}", path.display()),
            Err(e) => eprintln!("failed to write gallery: {e}"),
        }
    }

    println!(
        "Generated {} files in {} ({} failures)",
        report.generated,
        cfg.out_dir.display(),
        report.failed
    );
    ExitCode::SUCCESS
}
