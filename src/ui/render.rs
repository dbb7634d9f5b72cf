/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossterm::{cursor, terminal, ExecutableCommand, Result};
use std::io::{stdout, Stdout, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::ElevatorFSM;
use crate::shared::State;

/// Draws the shaft into the terminal, top floor first. Floor numbers are
/// shown 1-indexed; a `*` marks a pending request.
pub struct Renderer {
    stdout: Stdout,
}

impl Renderer {
    pub fn new() -> Renderer {
        Renderer { stdout: stdout() }
    }

    pub fn draw(&mut self, fsm: &ElevatorFSM) -> Result<()> {
        self.stdout.execute(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.execute(cursor::MoveTo(0, 0))?;

        writeln!(self.stdout, "-= Elevator simulator =-")?;
        writeln!(self.stdout, "f c floor")?;
        for floor in (0..fsm.n_floors()).rev() {
            let cabin = if fsm.current_floor() == floor {
                state_view(fsm.state())
            } else {
                ""
            };
            writeln!(
                self.stdout,
                "{} {} {:2} | {:6} |",
                if fsm.floor_request_pending(floor) { '*' } else { ' ' },
                if fsm.cabin_request_pending(floor) { '*' } else { ' ' },
                floor + 1,
                cabin,
            )?;
        }
        writeln!(self.stdout)?;
        writeln!(
            self.stdout,
            "floor {} | {:?} | {:?}",
            fsm.current_floor() + 1,
            fsm.state(),
            fsm.direction(),
        )?;
        writeln!(
            self.stdout,
            "<n>: call button at floor n, c <n>: cabin button for floor n, q: quit"
        )?;
        self.stdout.flush()?;

        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}

/// Cabin glyph per state: brackets are the doors, shut or apart.
fn state_view(state: State) -> &'static str {
    match state {
        State::Floor | State::Opening | State::Closed => " [:)] ",
        State::Opened | State::Closing => "[ :) ]",
        State::Idle => " [  ] ",
    }
}
