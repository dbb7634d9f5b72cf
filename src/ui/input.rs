/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::debug;
use std::io::{self, BufRead};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ButtonKind, ButtonPress};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Press(ButtonPress),
    Quit,
}

/**
 * Reads button presses from stdin, one command per line.
 *
 * Grammar (floors are 1-indexed at the prompt):
 * - `q`        quit
 * - `<n>`      call button on the landing of floor n
 * - `c <n>`    cabin button for floor n (`c<n>` also accepted)
 *
 * Unrecognized lines are ignored. Range checking is left to the controller;
 * this thread only converts to 0-indexed floors.
 *
 * # Fields
 * - `button_press_tx`: Sends parsed button presses to the simulation loop.
 * - `terminate_tx`:    Signals quit (explicit `q` or stdin EOF).
 */

pub struct InputReader {
    button_press_tx: cbc::Sender<ButtonPress>,
    terminate_tx: cbc::Sender<()>,
}

impl InputReader {
    pub fn new(button_press_tx: cbc::Sender<ButtonPress>, terminate_tx: cbc::Sender<()>) -> InputReader {
        InputReader {
            button_press_tx,
            terminate_tx,
        }
    }

    pub fn run(self) {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };

            match parse_line(line.trim()) {
                Some(Command::Quit) => break,
                Some(Command::Press(press)) => {
                    if self.button_press_tx.send(press).is_err() {
                        break;
                    }
                }
                None => debug!("ignoring input line: {:?}", line),
            }
        }

        // Covers `q`, EOF and a closed press channel alike.
        let _ = self.terminate_tx.send(());
    }
}

fn parse_line(line: &str) -> Option<Command> {
    if line.eq_ignore_ascii_case("q") {
        return Some(Command::Quit);
    }

    if let Some(rest) = line.strip_prefix('c').or_else(|| line.strip_prefix('C')) {
        let floor: u8 = rest.trim().parse().ok()?;
        if floor == 0 {
            return None;
        }
        return Some(Command::Press(ButtonPress {
            kind: ButtonKind::Cabin,
            floor: floor - 1,
        }));
    }

    let floor: u8 = line.parse().ok()?;
    if floor == 0 {
        return None;
    }
    Some(Command::Press(ButtonPress {
        kind: ButtonKind::FloorCall,
        floor: floor - 1,
    }))
}

/***************************************/
/*             Unit tests              */
/***************************************/
