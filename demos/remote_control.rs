//! Example: Start and stop the demo from another thread
//!
//! What it demonstrates
//! - Attaching a `SimulationRemote` to the window via `run_paretoplot`.
//! - Requesting runs and reading snapshots from a background thread.
//!
//! How to run
//! ```bash
//! cargo run --example remote_control
//! ```

use std::time::Duration;

use paretoplot::logging::init_tracing;
use paretoplot::{run_paretoplot, DemoConfig, RunState, SimulationRemote, UserInput};

fn main() -> eframe::Result<()> {
    init_tracing(false);

    let remote = SimulationRemote::new();
    let rx = remote.subscribe();
    let handle = remote.clone();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_secs(1));
        handle.request_start(UserInput::new(100, 100));
        // Stop halfway through the second run.
        let mut runs = 0;
        while let Ok(info) = rx.recv() {
            match info.run_state {
                RunState::Stopped(_) if runs == 0 => {
                    runs += 1;
                    handle.request_start(UserInput::new(100, 300));
                }
                RunState::Running if runs == 1 && info.samples >= 50 => {
                    handle.request_stop();
                    runs += 1;
                }
                _ => {}
            }
        }
    });

    run_paretoplot(DemoConfig::default(), Some(remote))
}
