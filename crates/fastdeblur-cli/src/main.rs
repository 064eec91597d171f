//! fastdeblur CLI — blur and restore images with Fast-Method deconvolution.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use fastdeblur::{blur, circle, deconv, metrics, signal, synth, FastMethodConfig};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "fastdeblur")]
#[command(about = "Restore box- and disk-blurred signals and images (iterative Fast-Method deconvolution)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Blur an image with a disk kernel.
    Blur(CliBlurArgs),

    /// Restore a disk-blurred image.
    Deblur(CliDeblurArgs),

    /// Blur, then restore, reporting reconstruction error for both stages.
    Roundtrip(CliRoundtripArgs),

    /// Run the one-dimensional blur/deconvolution demo.
    Demo1d(CliDemo1dArgs),

    /// Print the sampling ring generated for a radius.
    RingInfo {
        /// Ring radius in pixels.
        #[arg(long)]
        radius: f32,
    },
}

#[derive(Debug, Clone, Args)]
struct CliBlurArgs {
    /// Path to the input image.
    #[arg(long)]
    image: PathBuf,

    /// Path to write the blurred image.
    #[arg(long)]
    out: PathBuf,

    /// Blur radius in pixels.
    #[arg(long, default_value = "16.0")]
    radius: f32,
}

#[derive(Debug, Clone, Args)]
struct CliDeblurArgs {
    /// Path to the input image.
    #[arg(long)]
    image: PathBuf,

    /// Path to write the restored image.
    #[arg(long)]
    out: PathBuf,

    /// Radius of the blur to invert (pixels, up to 500 in 0.01 steps).
    #[arg(long, default_value = "16.0")]
    radius: f32,

    /// Number of deconvolution iterations.
    #[arg(long, default_value = "1")]
    iterations: usize,

    /// Deblur strength; 1.0 is the reference weighting.
    #[arg(long, default_value = "1.0")]
    amount: f32,
}

#[derive(Debug, Clone, Args)]
struct CliRoundtripArgs {
    /// Path to the pristine input image.
    #[arg(long)]
    image: PathBuf,

    /// Path to write the blurred intermediate.
    #[arg(long)]
    out_blurred: PathBuf,

    /// Path to write the restored result.
    #[arg(long)]
    out_deblurred: PathBuf,

    /// Blur/deblur radius in pixels.
    #[arg(long, default_value = "16.0")]
    radius: f32,

    /// Number of deconvolution iterations.
    #[arg(long, default_value = "1")]
    iterations: usize,

    /// Deblur strength; 1.0 is the reference weighting.
    #[arg(long, default_value = "1.0")]
    amount: f32,

    /// Path to write stage NRMSE values (JSON).
    #[arg(long)]
    metrics_out: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct CliDemo1dArgs {
    /// Number of samples in the demo signal.
    #[arg(long, default_value = "30")]
    length: usize,

    /// Blur/deblur radius in samples.
    #[arg(long, default_value = "4")]
    radius: usize,

    /// Number of deconvolution iterations.
    #[arg(long, default_value = "20")]
    iterations: usize,

    /// Test signal to degrade and restore.
    #[arg(long, value_enum, default_value_t = SignalKind::SquareImpulse)]
    signal: SignalKind,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SignalKind {
    Impulse,
    SquareImpulse,
    Step,
    Sawtooth,
    Noise,
}

impl SignalKind {
    fn generate(self, length: usize, radius: usize) -> Vec<f32> {
        match self {
            Self::Impulse => synth::impulse(length),
            Self::SquareImpulse => synth::square_impulse(length, radius),
            Self::Step => synth::step(length),
            Self::Sawtooth => synth::sawtooth(length, (length / 4).max(2)),
            Self::Noise => synth::noise(length, 1234),
        }
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Blur(args) => run_blur(&args),
        Commands::Deblur(args) => run_deblur(&args),
        Commands::Roundtrip(args) => run_roundtrip(&args),
        Commands::Demo1d(args) => run_demo_1d(&args),
        Commands::RingInfo { radius } => run_ring_info(radius),
    }
}

fn load_rgb(path: &PathBuf) -> CliResult<image::RgbImage> {
    let img = image::open(path)
        .map_err(|e| -> CliError { format!("Failed to open image {}: {}", path.display(), e).into() })?;
    Ok(img.to_rgb8())
}

// ── blur ───────────────────────────────────────────────────────────────

fn run_blur(args: &CliBlurArgs) -> CliResult<()> {
    tracing::info!("Loading image: {}", args.image.display());
    let mut img = load_rgb(&args.image)?;
    let (w, h) = img.dimensions();
    tracing::info!("Image size: {}x{}", w, h);

    blur::disk_blur(&mut img, args.radius)?;

    img.save(&args.out)?;
    tracing::info!("Blurred image written to {}", args.out.display());
    Ok(())
}

// ── deblur ─────────────────────────────────────────────────────────────

fn run_deblur(args: &CliDeblurArgs) -> CliResult<()> {
    tracing::info!("Loading image: {}", args.image.display());
    let mut img = load_rgb(&args.image)?;
    let (w, h) = img.dimensions();
    tracing::info!("Image size: {}x{}", w, h);

    let config = FastMethodConfig {
        radius: args.radius,
        iterations: args.iterations,
        amount: args.amount,
    };
    deconv::fast_method(&mut img, &config)?;

    img.save(&args.out)?;
    tracing::info!("Restored image written to {}", args.out.display());
    Ok(())
}

// ── roundtrip ──────────────────────────────────────────────────────────

#[derive(serde::Serialize)]
struct RoundtripMetrics {
    radius: f32,
    iterations: usize,
    amount: f32,
    nrmse_blurred: f64,
    nrmse_deblurred: f64,
}

fn run_roundtrip(args: &CliRoundtripArgs) -> CliResult<()> {
    tracing::info!("Loading image: {}", args.image.display());
    let original = load_rgb(&args.image)?;
    let (w, h) = original.dimensions();
    tracing::info!("Image size: {}x{}", w, h);

    let mut work = original.clone();

    tracing::info!("Blurring (radius {})", args.radius);
    blur::disk_blur(&mut work, args.radius)?;
    work.save(&args.out_blurred)?;
    let nrmse_blurred = metrics::nrmse_rgb(&original, &work)?;
    tracing::info!("Blur stage NRMSE: {:.4}", nrmse_blurred);

    tracing::info!("Deblurring ({} iterations)", args.iterations);
    let config = FastMethodConfig {
        radius: args.radius,
        iterations: args.iterations,
        amount: args.amount,
    };
    deconv::fast_method(&mut work, &config)?;
    work.save(&args.out_deblurred)?;
    let nrmse_deblurred = metrics::nrmse_rgb(&original, &work)?;
    tracing::info!("Deblur stage NRMSE: {:.4}", nrmse_deblurred);

    if let Some(path) = &args.metrics_out {
        let report = RoundtripMetrics {
            radius: args.radius,
            iterations: args.iterations,
            amount: args.amount,
            nrmse_blurred,
            nrmse_deblurred,
        };
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, &json)?;
        tracing::info!("Metrics written to {}", path.display());
    }

    Ok(())
}

// ── demo-1d ────────────────────────────────────────────────────────────

fn run_demo_1d(args: &CliDemo1dArgs) -> CliResult<()> {
    let mut samples = args.signal.generate(args.length, args.radius);

    println!("Input array:");
    print_samples(&samples);

    signal::box_blur(&mut samples, args.radius)?;
    println!("Blurred array:");
    print_samples(&samples);

    signal::deconvolve(&mut samples, args.radius, args.iterations)?;
    println!("Reconstructed array:");
    print_samples(&samples);

    Ok(())
}

fn print_samples(samples: &[f32]) {
    for v in samples {
        println!("{v:.6}");
    }
}

// ── ring-info ──────────────────────────────────────────────────────────

fn run_ring_info(radius: f32) -> CliResult<()> {
    let points = circle::points_at_radius(radius)?;

    println!("fastdeblur sampling ring");
    println!("  radius:       {}", radius);
    println!("  point count:  {}", points.len());
    for p in &points {
        println!("  ({}, {})", p[0], p[1]);
    }

    Ok(())
}
