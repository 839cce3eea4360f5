//! Example: Drive a full run without opening a window
//!
//! What it demonstrates
//! - Building a `SimulationController` and a `SimulationConfig` from user input.
//! - Calling `on_tick` directly with a `RecordingPresenter` instead of the egui views.
//!
//! How to run
//! ```bash
//! cargo run --example headless
//! ```

use paretoplot::logging::init_tracing;
use paretoplot::{RecordingPresenter, SimulationConfig, SimulationController, TickOutcome, UserInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(false);

    let cfg = SimulationConfig::from_input(&UserInput::new(100, 200), 0.03)?;
    let mut controller = SimulationController::new();
    let mut presenter = RecordingPresenter::default();
    controller.start(cfg)?;

    while let TickOutcome::Sampled(_) = controller.on_tick(&mut presenter) {}

    for line in presenter.log.iter().rev().take(4).rev() {
        println!("{line}");
    }
    println!(
        "{} samples, {} ms simulated, state {:?}",
        controller.history().len(),
        controller.state().elapsed_ms(),
        controller.run_state()
    );
    Ok(())
}
