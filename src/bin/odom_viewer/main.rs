//! Odometry Telemetry Viewer
//!
//! Windowed dashboard for the simulated odometry session: start/stop
//! controls, a scrolling velocity chart with per-channel toggles and a radial
//! heading indicator.

mod app;
mod render;

use app::ViewerApp;
use clap::Parser;
use odom_telemetry::{Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "odom-viewer")]
#[command(about = "Visualize simulated robot odometry", long_about = None)]
struct Args {
    /// Simulated seconds per frame
    #[arg(short, long, default_value = "0.1")]
    step: f64,

    /// Chart time window in seconds
    #[arg(short, long, default_value = "10.0")]
    window: f64,

    /// Keep at most this many ticks in memory (default: unbounded)
    #[arg(long)]
    history_limit: Option<usize>,

    /// Show the held-key debug panel
    #[arg(long)]
    show_keys: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = SessionConfig {
        time_step: args.step,
        window_secs: args.window,
        history_limit: args.history_limit,
        ..SessionConfig::default()
    };
    let session = Session::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Odom Debugging")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        vsync: true,
        ..Default::default()
    };

    eframe::run_native(
        "Odom Debugging",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, session, args.show_keys)))),
    )?;

    Ok(())
}
