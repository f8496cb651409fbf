use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use trigon_common::Extent;
use trigon_frame::{FrameLoop, HeadlessContext, run_bounded};
use trigon_render::DebugTextRenderer;
use trigon_transform::{model_matrix, mvp_matrix, projection_matrix};

#[derive(Parser)]
#[command(name = "trigon-cli", about = "CLI tool for trigon operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print binary version and crate info
    Info,
    /// Print the model, projection, and combined matrices for given inputs
    Matrix {
        /// Elapsed time in seconds (doubles as the rotation angle in radians)
        #[arg(short, long, default_value = "0.0")]
        time: f32,
        /// Aspect ratio, width over height
        #[arg(short, long, default_value = "1.3333")]
        aspect: f32,
    },
    /// Drive the frame loop headless for a bounded number of frames
    Run {
        /// Frames to issue before the close flag raises itself
        #[arg(short, long, default_value = "10")]
        frames: u64,
        /// Framebuffer width in pixels
        #[arg(long, default_value = "640")]
        width: u32,
        /// Framebuffer height in pixels
        #[arg(long, default_value = "480")]
        height: u32,
        /// Virtual seconds advanced per frame
        #[arg(long, default_value = "0.0166667")]
        step: f32,
    },
}

fn print_matrix(m: &glam::Mat4) {
    for row in 0..4 {
        let r = m.row(row);
        println!("  [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]", r.x, r.y, r.z, r.w);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("trigon-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("transform: {}", trigon_transform::crate_info());
            println!("frame: {}", trigon_frame::crate_info());
            println!("render: {}", trigon_render::crate_info());
            println!("input: {}", trigon_input::crate_info());
        }
        Commands::Matrix { time, aspect } => {
            println!("Model (t={time}s, axis=(-1, 0, 0)):");
            print_matrix(&model_matrix(time));
            println!("Projection (aspect={aspect}):");
            print_matrix(&projection_matrix(aspect));
            println!("MVP (projection * model):");
            print_matrix(&mvp_matrix(time, aspect));
        }
        Commands::Run {
            frames,
            width,
            height,
            step,
        } => {
            println!("Headless run: {frames} frames at {width}x{height}, {step}s per frame");

            let mut frame_loop = FrameLoop::new();
            let mut ctx = HeadlessContext::new(Extent::new(width, height), step, frames);
            let renderer = DebugTextRenderer::new();

            for line in run_bounded(&mut frame_loop, &mut ctx, &renderer) {
                println!("{line}");
            }

            println!(
                "Issued {} frames, phase {:?}",
                frame_loop.frames_issued(),
                frame_loop.phase()
            );
        }
    }

    Ok(())
}
