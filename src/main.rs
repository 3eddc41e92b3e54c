//! Odometry telemetry simulator - headless console runner
//!
//! Drives the same session as the viewer without opening a window and shows
//! every channel as a live bar graph in the terminal.
//!
//! Usage:
//!   odom-sim --rate 30 --ticks 300
//!   odom-sim --step 0.05 --history-limit 2000 --pause-after 100

use clap::Parser;
use log::{info, warn};
use odom_telemetry::{
    create_bar, Channel, KeySnapshot, RunState, Session, SessionConfig, TimeKeeper, UiCommand,
};
use std::f64::consts::PI;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "odom-sim")]
#[command(about = "Run the simulated odometry session in the terminal", long_about = None)]
struct Args {
    /// Simulated seconds per tick
    #[arg(short, long, default_value = "0.1")]
    step: f64,

    /// Chart time window in seconds
    #[arg(short, long, default_value = "10.0")]
    window: f64,

    /// Keep at most this many ticks in memory (default: unbounded)
    #[arg(long)]
    history_limit: Option<usize>,

    /// Frames per second
    #[arg(short, long, default_value = "30")]
    rate: u32,

    /// Stop after this many frames (runs until Ctrl+C if omitted)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Pause playback after this many frames
    #[arg(long)]
    pause_after: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    if args.rate == 0 || args.rate > 1000 {
        eprintln!("Error: rate must be 1-1000 frames per second");
        std::process::exit(1);
    }

    let config = SessionConfig {
        time_step: args.step,
        window_secs: args.window,
        history_limit: args.history_limit,
        ..SessionConfig::default()
    };
    let mut session = Session::new(&config)?;

    // Setup Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    session.apply(UiCommand::ToggleHeadingPanel);
    for channel in Channel::PLOTTED {
        session.apply(UiCommand::ToggleChannel(channel));
    }

    let frame_period = 1.0 / args.rate as f64;
    let timer = TimeKeeper::new();
    let mut frame = 0u64;

    info!("Running at {} fps", args.rate);

    // Clear screen once at start
    print!("\x1B[2J\x1B[H");
    io::stdout().flush()?;

    while running.load(Ordering::SeqCst) {
        if args.ticks.is_some_and(|n| frame >= n) {
            break;
        }
        if args.pause_after == Some(frame) {
            session.apply(UiCommand::Pause);
        }

        session.run_frame(KeySnapshot::default());
        frame += 1;

        render(&session, frame, timer.elapsed_secs())?;

        // Sleep until the next frame is due
        let next_due = frame as f64 * frame_period;
        let remaining = timer.until(next_due);
        if remaining > 0.0 {
            thread::sleep(Duration::from_secs_f64(remaining));
        } else {
            let behind = timer.elapsed_secs() - next_due;
            if behind > 1.0 {
                warn!("Falling behind by {:.1}s", behind);
            }
        }
    }

    println!();
    println!("Stopped after {} frames", frame);
    println!(
        "Simulated time: {:.2}s | Ticks recorded: {} | Held in memory: {}",
        session.time(),
        session.playback().ticks_run(),
        session.store().len()
    );

    Ok(())
}

/// Redraw the live display in place
fn render(session: &Session, frame: u64, elapsed: f64) -> io::Result<()> {
    let store = session.store();
    let state = match session.run_state() {
        RunState::Running => "RUNNING",
        RunState::Paused => "PAUSED ",
    };

    // Move cursor to top without clearing (reduces flicker)
    print!("\x1B[H");

    println!("Odometry Telemetry Simulator - {}                         ", state);
    println!("=======================================                     ");
    println!(
        "Sim time: {:8.2}s | Wall: {:6.1}s | Frame: {} | Samples: {}        ",
        session.time(),
        elapsed,
        frame,
        store.len()
    );
    if let Some(bounds) = session.chart_frame().bounds {
        println!("Chart window: [{:.2}, {:.2}]s                          ", bounds.x.0, bounds.x.1);
    } else {
        println!("Chart window: held (paused)                              ");
    }
    println!();

    println!("VELOCITY                              0 ◄─────────┼─────────► 1");
    for channel in Channel::PLOTTED {
        let v = store.latest(channel).unwrap_or(0.0);
        println!("  {:<16} {:6.3}  [{}]", channel.name(), v, create_bar(v, 0.0, 1.0, 40));
    }
    println!();

    let yaw = store.latest(Channel::OdomYaw).unwrap_or(0.0);
    println!("HEADING                              -π ◄─────────┼─────────► π");
    println!(
        "  {:<16} {:6.3}  [{}]",
        Channel::OdomYaw.name(),
        yaw,
        create_bar(yaw, -PI, PI, 40)
    );
    println!(
        "  trail: {} samples                                    ",
        session.heading().trail_len(store)
    );
    println!();
    println!("Press Ctrl+C to exit                                           ");

    io::stdout().flush()
}
