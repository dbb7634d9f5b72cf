/***************************************/
/*       Public data structures        */
/***************************************/

/// Phase of the motion/door state machine.
///
/// All four door phases are explicit so that each one can carry its own
/// delay. Rendering glyphs live in the UI layer, keyed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// In transit between two floors.
    Floor,
    Opening,
    Opened,
    Closing,
    Closed,
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Stop,
}

impl Direction {
    /// Direction of travel from `from` toward `target`, `Stop` if equal.
    pub fn between(from: u8, target: u8) -> Direction {
        if target > from {
            Direction::Up
        } else if target < from {
            Direction::Down
        } else {
            Direction::Stop
        }
    }

    /// Floor increment per travelled floor.
    pub fn increment(&self) -> i16 {
        match *self {
            Direction::Up => 1,
            Direction::Down => -1,
            Direction::Stop => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Destination button inside the cabin.
    Cabin,
    /// Call button on a floor landing.
    FloorCall,
}

/// A button press event, 0-indexed, as sent from the input thread
/// to the simulation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPress {
    pub kind: ButtonKind,
    pub floor: u8,
}
