/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, error, warn};
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::ElevatorFSM;
use crate::shared::{ButtonKind, ButtonPress};
use crate::ui::Renderer;

/**
 * Simulation event loop.
 *
 * The `Simulation` is the single owner of the `ElevatorFSM` and the only
 * caller of `advance()`. Button presses from the input thread arrive as
 * channel messages, so every mutation of the controller is serialized
 * through this loop. The controller returns delays; this loop does the
 * actual waiting.
 *
 * # Fields
 * - `fsm`:             The elevator controller being driven.
 * - `renderer`:        Draws the shaft after every event.
 * - `button_press_rx`: Receives button presses from the input thread.
 * - `terminate_rx`:    Receives the quit signal.
 */

pub struct Simulation {
    fsm: ElevatorFSM,
    renderer: Renderer,
    button_press_rx: cbc::Receiver<ButtonPress>,
    terminate_rx: cbc::Receiver<()>,
}

impl Simulation {
    pub fn new(
        fsm: ElevatorFSM,
        renderer: Renderer,
        button_press_rx: cbc::Receiver<ButtonPress>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Simulation {
        Simulation {
            fsm,
            renderer,
            button_press_rx,
            terminate_rx,
        }
    }

    pub fn run(mut self) {
        self.render();

        loop {
            // Nothing scheduled while idle: block until a press arrives.
            if self.fsm.is_idle() {
                cbc::select! {
                    recv(self.button_press_rx) -> press => {
                        match press {
                            Ok(press) => self.handle_press(press),
                            Err(_) => break,
                        }
                    }
                    recv(self.terminate_rx) -> _ => break,
                }
            }

            // Collapse zero-delay transitions into one wall-clock instant.
            let mut delay = self.fsm.advance();
            while delay == 0 && !self.fsm.is_idle() {
                delay = self.fsm.advance();
            }
            debug!(
                "state {:?} next {:?}, due in {} ms",
                self.fsm.state(),
                self.fsm.next_state(),
                delay
            );
            self.render();

            if delay > 0 && !self.wait(delay) {
                break;
            }
        }
    }

    /// Waits out a scheduled delay. Presses received meanwhile are recorded
    /// and rendered but never shorten the delay; they get evaluated at the
    /// next transition. Returns false on terminate.
    fn wait(&mut self, delay_ms: u64) -> bool {
        let deadline = Instant::now() + Duration::from_millis(delay_ms);

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            cbc::select! {
                recv(self.button_press_rx) -> press => {
                    match press {
                        Ok(press) => {
                            self.handle_press(press);
                            self.render();
                        }
                        Err(_) => return false,
                    }
                }
                recv(self.terminate_rx) -> _ => return false,
                default(remaining) => return true,
            }
        }
    }

    fn handle_press(&mut self, press: ButtonPress) {
        let result = match press.kind {
            ButtonKind::Cabin => self.fsm.press_cabin_button(press.floor),
            ButtonKind::FloorCall => self.fsm.press_floor_button(press.floor),
        };

        if let Err(e) = result {
            warn!("ignoring button press: {}", e);
        }
    }

    fn render(&mut self) {
        if let Err(e) = self.renderer.draw(&self.fsm) {
            error!("failed to draw elevator view: {}", e);
        }
    }
}
