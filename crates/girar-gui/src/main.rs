//! Girar GUI - interactive dial panel application.
//!
//! A small panel of rotary dials driving external numeric parameters
//! (oscillator frequency, filter cutoff and resonance) through scale
//! transforms.

use clap::Parser;
use eframe::egui;
use girar_gui::{GirarApp, StartValues};

/// Girar dial panel application.
#[derive(Parser, Debug)]
#[command(name = "girar-gui")]
#[command(about = "Interactive dial panel driving oscillator and filter parameters")]
#[command(version)]
struct Args {
    /// Initial oscillator frequency in Hz (default: 440)
    #[arg(long)]
    freq: Option<f32>,

    /// Initial filter cutoff in Hz (default: 2000)
    #[arg(long)]
    cutoff: Option<f32>,

    /// Initial filter resonance (default: 1)
    #[arg(long)]
    q: Option<f32>,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    tracing::info!("Starting Girar GUI");
    if let Some(freq) = args.freq {
        tracing::info!(freq, "initial oscillator frequency");
    }
    if let Some(cutoff) = args.cutoff {
        tracing::info!(cutoff, "initial filter cutoff");
    }

    let start = StartValues {
        freq: args.freq,
        cutoff: args.cutoff,
        q: args.q,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 280.0])
            .with_min_inner_size([360.0, 240.0])
            .with_title("Girar"),
        ..Default::default()
    };

    eframe::run_native(
        "Girar",
        options,
        Box::new(move |cc| Ok(Box::new(GirarApp::new(cc, start)?))),
    )
}
