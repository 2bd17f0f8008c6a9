use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palette_kit::{export, ContrastReport, Rgb, SchemeKind, Session};
use tintlab::image;
use tintlab::report::{ContrastJson, ExportBlock, PaletteReport, SchemeReport};

#[derive(Parser)]
#[command(name = "tintlab")]
#[command(about = "Palette extraction, color harmonics and WCAG contrast tooling")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the dominant colors of a PNG image into a palette
    Extract {
        /// Input PNG file
        image: PathBuf,

        /// Gradient angle for the CSS export, in degrees
        #[arg(long, default_value_t = 90)]
        angle: u32,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render the HSL color wheel to a PNG file
    Wheel {
        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Wheel lightness (0.0 to 1.0, clamped)
        #[arg(short, long, default_value_t = 0.5)]
        lightness: f32,

        /// Wheel diameter in pixels
        #[arg(short, long, default_value_t = 360)]
        size: u32,

        /// Sample the color at a pixel position after rendering
        #[arg(long, value_names = ["X", "Y"], num_args = 2)]
        pick: Option<Vec<u32>>,
    },
    /// Derive a harmonic color scheme from a base color
    Scheme {
        /// Base color as hex (e.g. "#ff5733" or "ff5733")
        color: Rgb,

        /// Scheme kind: monochrome, complementary, analogous, triadic,
        /// tetradic or split-complementary
        #[arg(short, long, default_value = "complementary")]
        kind: SchemeKind,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check WCAG contrast between two colors
    Contrast {
        /// Foreground color as hex
        foreground: Rgb,

        /// Background color as hex
        background: Rgb,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Extract { image, angle, json }) => run_extract(&image, angle, json),
        Some(Commands::Wheel {
            output,
            lightness,
            size,
            pick,
        }) => run_wheel(&output, lightness, size, pick.as_deref()),
        Some(Commands::Scheme { color, kind, json }) => run_scheme(color, kind, json),
        Some(Commands::Contrast {
            foreground,
            background,
            json,
        }) => run_contrast(foreground, background, json),
        None => {
            run_status();
            Ok(())
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tintlab=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Quantize an image and print its palette and exports.
fn run_extract(path: &PathBuf, angle: u32, json: bool) -> anyhow::Result<()> {
    let bitmap = image::load_png(path)?;
    tracing::info!(
        width = bitmap.width,
        height = bitmap.height,
        "Quantizing image"
    );

    let mut session = Session::new();
    session.set_gradient(palette_kit::GradientKind::Linear, angle);
    session.apply_upload(&bitmap.rgba, bitmap.width, bitmap.height)?;
    let colors = session.palette().to_vec();

    if json {
        let report = PaletteReport {
            source: path.display().to_string(),
            colors: colors.iter().copied().map(Into::into).collect(),
            exports: ExportBlock::from_colors(&colors, angle),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Extracted {} colors from {}", colors.len(), path.display());
    println!();
    for color in &colors {
        println!("  {}  rgb({}, {}, {})", color.to_hex(), color.r, color.g, color.b);
    }
    println!();
    println!("{}", export::all_formats(&colors, angle));
    Ok(())
}

/// Render the color wheel raster and optionally sample a pixel.
fn run_wheel(output: &PathBuf, lightness: f32, size: u32, pick: Option<&[u32]>) -> anyhow::Result<()> {
    let mut wheel = palette_kit::ColorWheel::new(size, lightness);
    image::save_rgba_png(output, size, size, wheel.rgba())?;
    println!(
        "Wrote {}x{} wheel at lightness {} to {}",
        size,
        size,
        wheel.lightness(),
        output.display()
    );

    if let Some(&[x, y]) = pick {
        match wheel.pick(x, y) {
            Some(color) => println!(
                "Picked ({x}, {y}): {}  rgb({}, {}, {})",
                color.to_hex(),
                color.r,
                color.g,
                color.b
            ),
            None => println!("Picked ({x}, {y}): outside the wheel"),
        }
    }
    Ok(())
}

/// Print a harmonic scheme for a base color.
fn run_scheme(color: Rgb, kind: SchemeKind, json: bool) -> anyhow::Result<()> {
    let colors = kind.generate(color);

    if json {
        let report = SchemeReport::new(color, kind, &colors);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{kind} scheme for {color}:");
    for c in &colors {
        println!("  {}  rgb({}, {}, {})", c.to_hex(), c.r, c.g, c.b);
    }
    Ok(())
}

/// Print a WCAG contrast report for a color pair.
fn run_contrast(foreground: Rgb, background: Rgb, json: bool) -> anyhow::Result<()> {
    let report = ContrastReport::evaluate(foreground, background);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ContrastJson::new(foreground, background, report))?
        );
        return Ok(());
    }

    println!("Contrast ratio: {:.2}:1", report.ratio);
    println!(
        "AA  (4.5:1): {}",
        if report.passes_aa { "pass" } else { "fail" }
    );
    println!(
        "AAA (7:1):   {}",
        if report.passes_aaa { "pass" } else { "fail" }
    );
    Ok(())
}

/// No subcommand: print a short status/usage summary.
fn run_status() {
    println!("tintlab {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Commands:");
    println!("  extract <image.png>        extract a dominant-color palette");
    println!("  wheel -o wheel.png         render the HSL color wheel");
    println!("  scheme <color> -k triadic  derive a harmonic scheme");
    println!("  contrast <fg> <bg>         check WCAG contrast");
    println!();
    println!("Run tintlab <command> --help for details.");
}
