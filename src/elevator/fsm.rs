use crate::config::ElevatorConfig;
use crate::shared::{Direction, ElevatorError, State, TimeSource};
use log::debug;

/**
 * Single-cabin elevator controller.
 *
 * The `ElevatorFSM` (Finite State Machine) owns all mutable simulation state:
 * the outstanding requests, the cabin position and the door/motion phase. It
 * performs no I/O and never sleeps; `advance()` returns the delay until the
 * next transition is due and the caller is responsible for waiting it out.
 *
 * # Fields
 * - `cabin_requests`:          Press timestamp per floor for the buttons inside the cabin, 0 when unset.
 * - `floor_requests`:          Press timestamp per floor for the landing call buttons, 0 when unset.
 * - `n_floors`:                The total number of floors serviced by the elevator.
 * - `floor`:                   The floor the cabin is currently at (or just left, while in transit).
 * - `direction`:               Current direction of travel, `Stop` when idle or between decisions.
 * - `state`:                   Current phase of the door/motion state machine.
 * - `next_state`:              Phase entered by the next `advance()` call.
 * - `floor_travel_time`:       Milliseconds to travel one floor.
 * - `door_open_time`:          Milliseconds the door is held open.
 * - `door_transition_delay`:   Milliseconds per door opening/closing movement.
 * - `clock`:                   Injected source of press timestamps.
 */

pub struct ElevatorFSM {
    cabin_requests: Vec<u64>,
    floor_requests: Vec<u64>,
    n_floors: u8,
    floor: u8,
    direction: Direction,
    state: State,
    next_state: State,
    floor_travel_time: u64,
    door_open_time: u64,
    door_transition_delay: u64,
    clock: Box<dyn TimeSource + Send>,
}

impl ElevatorFSM {
    /// Configuration is assumed valid (see `Config::validate`); the
    /// controller never re-checks it.
    pub fn new(config: &ElevatorConfig, clock: Box<dyn TimeSource + Send>) -> ElevatorFSM {
        ElevatorFSM {
            cabin_requests: vec![0; config.n_floors as usize],
            floor_requests: vec![0; config.n_floors as usize],
            n_floors: config.n_floors,
            floor: 0,
            direction: Direction::Stop,
            state: State::Idle,
            next_state: State::Idle,
            floor_travel_time: (1000.0 * config.floor_height / config.speed) as u64,
            door_open_time: (config.door_open_time as f64 * 0.8) as u64,
            door_transition_delay: (config.door_open_time as f64 * 0.1) as u64,
            clock,
        }
    }

    /// Records a press of the destination button for `floor` inside the cabin.
    pub fn press_cabin_button(&mut self, floor: u8) -> Result<(), ElevatorError> {
        if floor >= self.n_floors {
            return Err(ElevatorError::FloorOutOfRange {
                floor,
                n_floors: self.n_floors,
            });
        }
        self.cabin_requests[floor as usize] = self.clock.now();
        Ok(())
    }

    /// Records a press of the call button on the landing of `floor`.
    pub fn press_floor_button(&mut self, floor: u8) -> Result<(), ElevatorError> {
        if floor >= self.n_floors {
            return Err(ElevatorError::FloorOutOfRange {
                floor,
                n_floors: self.n_floors,
            });
        }
        self.floor_requests[floor as usize] = self.clock.now();
        Ok(())
    }

    /// Applies the pending transition and schedules the next one.
    ///
    /// Returns the delay in milliseconds until `advance()` should be called
    /// again. A return of 0 means "call me again immediately": the caller
    /// loops until a non-zero delay or until `is_idle()`, so that several
    /// zero-delay transitions collapse into one wall-clock instant. The loop
    /// belongs to the caller; the controller never recurses.
    pub fn advance(&mut self) -> u64 {
        self.state = self.next_state;

        match self.state {
            State::Opening => {
                self.next_state = State::Opened;
                return self.door_open_time;
            }
            State::Opened => {
                // Cabin and floor request are cleared in the same instant; a
                // press landing exactly now is lost with them.
                self.clear_requests_here();
                self.next_state = State::Closing;
                return self.door_transition_delay;
            }
            State::Closing => {
                self.next_state = State::Closed;
                return self.door_transition_delay;
            }
            _ => {}
        }

        // A Floor transition moves the cabin before the door check below.
        if self.state == State::Floor {
            self.floor = (self.floor as i16 + self.direction.increment()) as u8;
        }

        if self.requests_here() {
            self.next_state = State::Opening;
            return 0;
        }

        self.direction = self.next_direction();
        debug!(
            "floor {} state {:?} direction {:?}",
            self.floor, self.state, self.direction
        );

        if self.direction == Direction::Stop {
            self.next_state = State::Idle;
            0
        } else {
            self.next_state = State::Floor;
            self.floor_travel_time
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == State::Idle && self.next_state == State::Idle
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn next_state(&self) -> State {
        self.next_state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current_floor(&self) -> u8 {
        self.floor
    }

    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    pub fn cabin_request_pending(&self, floor: u8) -> bool {
        self.cabin_requests
            .get(floor as usize)
            .map_or(false, |&t| t > 0)
    }

    pub fn floor_request_pending(&self, floor: u8) -> bool {
        self.floor_requests
            .get(floor as usize)
            .map_or(false, |&t| t > 0)
    }

    fn requests_here(&self) -> bool {
        self.cabin_requests[self.floor as usize] > 0 || self.floor_requests[self.floor as usize] > 0
    }

    fn clear_requests_here(&mut self) {
        self.cabin_requests[self.floor as usize] = 0;
        self.floor_requests[self.floor as usize] = 0;
    }

    /// Picks the direction for the next leg of travel.
    ///
    /// Priorities, first match wins:
    /// 1. Keep the current direction while it still points toward the lowest
    ///    or highest floor with an outstanding cabin request, so the cabin
    ///    sweeps through requested floors instead of reversing early.
    /// 2. Head for the earliest-pressed cabin request.
    /// 3. Head for the earliest-pressed floor request.
    /// 4. Stop.
    ///
    /// On an exact timestamp tie the lowest floor wins (scan order).
    fn next_direction(&self) -> Direction {
        let mut earliest_cabin: Option<(u64, u8)> = None;
        let mut earliest_floor: Option<(u64, u8)> = None;
        let mut low_cabin: Option<u8> = None;
        let mut high_cabin: Option<u8> = None;

        for f in 0..self.n_floors {
            let cabin = self.cabin_requests[f as usize];
            if cabin > 0 {
                if earliest_cabin.map_or(true, |(t, _)| cabin < t) {
                    earliest_cabin = Some((cabin, f));
                }
                if low_cabin.is_none() {
                    low_cabin = Some(f);
                }
                high_cabin = Some(f);
            }

            let landing = self.floor_requests[f as usize];
            if landing > 0 && earliest_floor.map_or(true, |(t, _)| landing < t) {
                earliest_floor = Some((landing, f));
            }
        }

        if self.direction != Direction::Stop {
            if let (Some(low), Some(high)) = (low_cabin, high_cabin) {
                if self.direction == Direction::between(self.floor, low)
                    || self.direction == Direction::between(self.floor, high)
                {
                    return self.direction;
                }
            }
        }

        if let Some((_, target)) = earliest_cabin {
            return Direction::between(self.floor, target);
        }

        if let Some((_, target)) = earliest_floor {
            return Direction::between(self.floor, target);
        }

        Direction::Stop
    }
}

#[cfg(test)]
impl ElevatorFSM {
    pub(crate) fn test_set_floor(&mut self, floor: u8) {
        self.floor = floor;
    }

    pub(crate) fn test_next_direction(&self) -> Direction {
        self.next_direction()
    }

    pub(crate) fn test_floor_travel_time(&self) -> u64 {
        self.floor_travel_time
    }

    pub(crate) fn test_door_open_time(&self) -> u64 {
        self.door_open_time
    }

    pub(crate) fn test_door_transition_delay(&self) -> u64 {
        self.door_transition_delay
    }
}
