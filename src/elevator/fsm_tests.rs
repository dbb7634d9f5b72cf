/*
 * Unit tests for the elevator controller
 *
 * The unit tests follow the Arrange, Act, Assert pattern and use the
 * SequenceClock, so press order fully determines press timestamps.
 *
 * Tests:
 * - test_fsm_init
 * - test_fsm_door_cycle_at_current_floor
 * - test_fsm_clears_both_requests_on_leaving_opened
 * - test_fsm_travels_up_to_floor_request
 * - test_fsm_travels_down_to_floor_request
 * - test_fsm_worked_example_delays
 * - test_fsm_direction_persistence
 * - test_fsm_earliest_cabin_press_wins
 * - test_fsm_earliest_floor_press_wins
 * - test_fsm_cabin_requests_outrank_floor_requests
 * - test_fsm_idle_advance_is_idempotent
 * - test_fsm_press_out_of_range
 * - test_fsm_press_mid_transit_served_on_arrival
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod fsm_tests {
    use crate::config::ElevatorConfig;
    use crate::elevator::ElevatorFSM;
    use crate::shared::{Direction, SequenceClock, State};

    /// 10 floors, speed 1 m/s, 10 m per floor, 1000 ms door budget:
    /// travel 10000 ms, door open 800 ms, door transitions 100 ms.
    fn setup_fsm() -> ElevatorFSM {
        let config = ElevatorConfig {
            n_floors: 10,
            floor_height: 10.0,
            speed: 1.0,
            door_open_time: 1000,
        };
        ElevatorFSM::new(&config, Box::new(SequenceClock::new()))
    }

    fn assert_next_state(fsm: &mut ElevatorFSM, expected: State) -> u64 {
        let delay = fsm.advance();
        assert_eq!(fsm.next_state(), expected);
        delay
    }

    #[test]
    fn test_fsm_init() {
        // Purpose: a new controller starts idle at floor 0 with no requests

        // Arrange
        let fsm = setup_fsm();

        // Assert
        assert!(fsm.is_idle());
        assert_eq!(fsm.state(), State::Idle);
        assert_eq!(fsm.direction(), Direction::Stop);
        assert_eq!(fsm.current_floor(), 0);
        for floor in 0..fsm.n_floors() {
            assert!(!fsm.cabin_request_pending(floor));
            assert!(!fsm.floor_request_pending(floor));
        }
    }

    #[test]
    fn test_fsm_door_cycle_at_current_floor() {
        // Purpose: a cabin press for the current floor while idle runs the
        // full door cycle with the configured delays and ends idle again

        // Arrange
        let mut fsm = setup_fsm();
        fsm.press_cabin_button(0).unwrap();

        // Act / Assert
        assert_eq!(assert_next_state(&mut fsm, State::Opening), 0);
        assert_eq!(
            assert_next_state(&mut fsm, State::Opened),
            fsm.test_door_open_time()
        );
        assert_eq!(
            assert_next_state(&mut fsm, State::Closing),
            fsm.test_door_transition_delay()
        );
        assert!(!fsm.cabin_request_pending(0));
        assert_eq!(
            assert_next_state(&mut fsm, State::Closed),
            fsm.test_door_transition_delay()
        );
        assert_eq!(assert_next_state(&mut fsm, State::Idle), 0);
        assert_eq!(fsm.advance(), 0);
        assert!(fsm.is_idle());
        assert_eq!(fsm.current_floor(), 0);
    }

    #[test]
    fn test_fsm_clears_both_requests_on_leaving_opened() {
        // Purpose: leaving Opened clears the cabin and the floor request for
        // the current floor in the same instant

        // Arrange
        let mut fsm = setup_fsm();
        fsm.press_cabin_button(0).unwrap();
        fsm.press_floor_button(0).unwrap();

        // Act: Opening, then Opened (which clears on the way out)
        fsm.advance();
        fsm.advance();
        fsm.advance();

        // Assert
        assert!(!fsm.cabin_request_pending(0));
        assert!(!fsm.floor_request_pending(0));
    }

    #[test]
    fn test_fsm_travels_up_to_floor_request() {
        // Purpose: a floor call above yields direction Up and exactly one
        // Floor transition per floor of distance before the doors open

        // Arrange
        let mut fsm = setup_fsm();
        fsm.press_floor_button(2).unwrap();

        // Act / Assert
        assert_eq!(
            assert_next_state(&mut fsm, State::Floor),
            fsm.test_floor_travel_time()
        );
        assert_eq!(fsm.direction(), Direction::Up);
        assert_next_state(&mut fsm, State::Floor);
        assert_eq!(fsm.current_floor(), 1);
        assert_next_state(&mut fsm, State::Opening);
        assert_eq!(fsm.current_floor(), 2);
    }

    #[test]
    fn test_fsm_travels_down_to_floor_request() {
        // Purpose: symmetric to the Up case

        // Arrange
        let mut fsm = setup_fsm();
        fsm.test_set_floor(5);
        fsm.press_floor_button(2).unwrap();

        // Act / Assert
        assert_next_state(&mut fsm, State::Floor);
        assert_eq!(fsm.direction(), Direction::Down);
        assert_next_state(&mut fsm, State::Floor);
        assert_next_state(&mut fsm, State::Floor);
        assert_next_state(&mut fsm, State::Opening);
        assert_eq!(fsm.current_floor(), 2);
    }

    #[test]
    fn test_fsm_worked_example_delays() {
        // Purpose: the full delay sequence for a floor call two floors up:
        // Floor(10000), Floor(10000), Opening(0), Opened(800), Closing(100),
        // Closed(100), Idle(0)

        // Arrange
        let mut fsm = setup_fsm();
        fsm.press_floor_button(2).unwrap();

        // Act: the caller keeps advancing through zero delays, so the final
        // Closed -> Idle step takes one extra call
        let delays: Vec<u64> = (0..8).map(|_| fsm.advance()).collect();

        // Assert
        assert_eq!(delays, vec![10000, 10000, 0, 800, 100, 100, 0, 0]);
        assert!(fsm.is_idle());
    }

    #[test]
    fn test_fsm_direction_persistence() {
        // Purpose: with cabin requests both behind and ahead, the cabin keeps
        // sweeping in its current direction instead of reversing early

        // Arrange: cabin heading up from floor 4 to floor 5
        let mut fsm = setup_fsm();
        fsm.test_set_floor(4);
        fsm.press_cabin_button(5).unwrap();
        assert_next_state(&mut fsm, State::Floor);
        assert_next_state(&mut fsm, State::Opening);
        assert_eq!(fsm.current_floor(), 5);

        // Act: during the door cycle, an earlier floor call below and a later
        // cabin request above come in
        fsm.press_floor_button(3).unwrap();
        fsm.press_cabin_button(8).unwrap();
        assert_next_state(&mut fsm, State::Opened);
        assert_next_state(&mut fsm, State::Closing);
        assert_next_state(&mut fsm, State::Closed);

        // Assert: the cabin request ahead keeps the direction Up
        assert_next_state(&mut fsm, State::Floor);
        assert_eq!(fsm.direction(), Direction::Up);
    }

    #[test]
    fn test_fsm_earliest_cabin_press_wins() {
        // Purpose: between two cabin requests the earlier press decides the
        // direction, regardless of distance

        // Arrange: floor 1 is 4 floors away, floor 6 is adjacent
        let mut fsm = setup_fsm();
        fsm.test_set_floor(5);
        fsm.press_cabin_button(1).unwrap();
        fsm.press_cabin_button(6).unwrap();

        // Act / Assert
        assert_eq!(fsm.test_next_direction(), Direction::Down);
    }

    #[test]
    fn test_fsm_earliest_floor_press_wins() {
        // Purpose: same time-priority rule for the landing call buttons

        // Arrange
        let mut fsm = setup_fsm();
        fsm.test_set_floor(5);
        fsm.press_floor_button(9).unwrap();
        fsm.press_floor_button(4).unwrap();

        // Act / Assert
        assert_eq!(fsm.test_next_direction(), Direction::Up);
    }

    #[test]
    fn test_fsm_cabin_requests_outrank_floor_requests() {
        // Purpose: any cabin request beats any floor request, even one
        // pressed earlier

        // Arrange
        let mut fsm = setup_fsm();
        fsm.test_set_floor(5);
        fsm.press_floor_button(9).unwrap();
        fsm.press_cabin_button(2).unwrap();

        // Act / Assert
        assert_eq!(fsm.test_next_direction(), Direction::Down);
    }

    #[test]
    fn test_fsm_idle_advance_is_idempotent() {
        // Purpose: advancing an idle controller with no requests is a no-op

        // Arrange
        let mut fsm = setup_fsm();

        // Act / Assert
        for _ in 0..3 {
            assert_eq!(fsm.advance(), 0);
            assert!(fsm.is_idle());
            assert_eq!(fsm.direction(), Direction::Stop);
            assert_eq!(fsm.current_floor(), 0);
        }
    }

    #[test]
    fn test_fsm_press_out_of_range() {
        // Purpose: presses outside [0, n_floors) are rejected without
        // mutating any state

        // Arrange
        let mut fsm = setup_fsm();

        // Act
        let cabin_result = fsm.press_cabin_button(10);
        let floor_result = fsm.press_floor_button(255);

        // Assert
        assert!(cabin_result.is_err());
        assert!(floor_result.is_err());
        assert!(fsm.is_idle());
        for floor in 0..fsm.n_floors() {
            assert!(!fsm.cabin_request_pending(floor));
            assert!(!fsm.floor_request_pending(floor));
        }
    }

    #[test]
    fn test_fsm_press_mid_transit_served_on_arrival() {
        // Purpose: a press while the cabin is between floors is evaluated at
        // the next natural transition, not before

        // Arrange: cabin leaves floor 0 toward floor 3
        let mut fsm = setup_fsm();
        fsm.press_floor_button(3).unwrap();
        assert_next_state(&mut fsm, State::Floor);

        // Act: cabin button for floor 1 pressed while in transit
        fsm.press_cabin_button(1).unwrap();

        // Assert: the cabin stops at floor 1 first, then continues to 3
        assert_next_state(&mut fsm, State::Opening);
        assert_eq!(fsm.current_floor(), 1);
        assert_next_state(&mut fsm, State::Opened);
        assert_next_state(&mut fsm, State::Closing);
        assert_next_state(&mut fsm, State::Closed);
        assert_next_state(&mut fsm, State::Floor);
        assert_eq!(fsm.direction(), Direction::Up);
        assert_next_state(&mut fsm, State::Floor);
        assert_next_state(&mut fsm, State::Opening);
        assert_eq!(fsm.current_floor(), 3);
    }
}
