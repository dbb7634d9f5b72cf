/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::info;
use std::thread::Builder;

/* Modules */
mod config;
mod elevator;
#[macro_use]
mod shared;
mod sim;
mod ui;

/* Custom libraries */
use crate::elevator::ElevatorFSM;
use crate::shared::{ButtonPress, MonotonicClock};
use crate::sim::Simulation;
use crate::ui::{InputReader, Renderer};

#[derive(Parser)]
#[clap(name = "liftsim", about = "Single-cabin elevator simulator")]
struct Args {
    /// Path to the configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: String,

    /// Override the configured number of floors
    #[clap(long)]
    floors: Option<u8>,
}

/* Main */
fn main() {
    env_logger::init();
    let args = Args::parse();

    // Load and validate the configuration
    let mut config = unwrap_or_exit!(config::load_config(&args.config));
    if let Some(floors) = args.floors {
        config.elevator.n_floors = floors;
        unwrap_or_exit!(config.validate());
    }

    // Initialize channels
    let (button_press_tx, button_press_rx) = cbc::unbounded::<ButtonPress>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the input reader thread
    let input_reader = InputReader::new(button_press_tx, terminate_tx);
    let input_reader_thread = Builder::new().name("input_reader".into());
    let _input_reader_handle = unwrap_or_exit!(input_reader_thread.spawn(move || input_reader.run()));

    // Run the simulation on the main thread
    let fsm = ElevatorFSM::new(&config.elevator, Box::new(MonotonicClock::new()));
    let simulation = Simulation::new(fsm, Renderer::new(), button_press_rx, terminate_rx);

    info!("starting simulation with {} floors", config.elevator.n_floors);
    simulation.run();
    info!("exit");
}
