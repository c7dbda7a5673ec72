//! Unit and integration tests for the dispatch core.

use lift_core::{BuildingConfig, Direction, ElevatorId, Floor};

use crate::{CallBoard, Elevator, ElevatorSystem, Passenger, PassengerRegistry};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cfg(num_floors: u16, num_elevators: u16) -> BuildingConfig {
    BuildingConfig {
        num_floors,
        num_elevators,
        ..Default::default()
    }
}

/// System with one car (starting at floor 1) in a 5-floor building.
fn small_system() -> ElevatorSystem {
    ElevatorSystem::new(cfg(5, 1))
}

/// Standalone board + registry for driving an `Elevator` directly.
fn rig() -> (CallBoard, PassengerRegistry) {
    (CallBoard::new(), PassengerRegistry::new())
}

/// Register a passenger and queue its call.
fn call(
    calls: &mut CallBoard,
    passengers: &mut PassengerRegistry,
    start: u16,
    dest: u16,
) -> lift_core::PassengerId {
    let id = passengers.push(Passenger::new(Floor(start), Floor(dest)));
    calls.push(Floor(start), id);
    id
}

// ── Passenger lifecycle ───────────────────────────────────────────────────────

#[cfg(test)]
mod passenger {
    use super::*;

    #[test]
    fn new_passenger_is_waiting() {
        let p = Passenger::new(Floor(1), Floor(5));
        assert_eq!(p.start(), Floor(1));
        assert_eq!(p.destination(), Floor(5));
        assert_eq!(p.current_floor, Floor(1));
        assert_eq!(p.wait_ticks, 0);
        assert_eq!(p.ride_ticks, 0);
        assert!(p.is_waiting());
        assert!(!p.is_riding());
        assert!(!p.has_arrived());
    }

    #[test]
    fn record_tick_attributes_time_by_phase() {
        let mut p = Passenger::new(Floor(1), Floor(5));

        p.record_tick();
        assert_eq!((p.wait_ticks, p.ride_ticks), (1, 0));

        p.elevator = Some(ElevatorId(0));
        p.record_tick();
        assert_eq!((p.wait_ticks, p.ride_ticks), (1, 1));

        p.elevator = None;
        p.current_floor = p.destination();
        p.record_tick();
        assert_eq!((p.wait_ticks, p.ride_ticks), (1, 1));
        assert!(p.has_arrived());
    }

    #[test]
    fn total_is_wait_plus_ride() {
        let mut p = Passenger::new(Floor(1), Floor(5));
        p.wait_ticks = 5;
        p.ride_ticks = 10;
        assert_eq!(p.total_ticks(), 15);
    }

    #[test]
    fn arrived_is_terminal() {
        let mut p = Passenger::new(Floor(2), Floor(3));
        p.current_floor = Floor(3);
        assert!(p.has_arrived());
        for _ in 0..10 {
            p.record_tick();
        }
        assert_eq!(p.wait_ticks, 0);
        assert_eq!(p.ride_ticks, 0);
    }

    #[test]
    fn registry_phase_tally() {
        let mut reg = PassengerRegistry::new();
        let a = reg.push(Passenger::new(Floor(1), Floor(3)));
        let b = reg.push(Passenger::new(Floor(2), Floor(4)));
        let c = reg.push(Passenger::new(Floor(1), Floor(2)));
        reg.get_mut(b).elevator = Some(ElevatorId(0));
        reg.get_mut(c).current_floor = Floor(2);

        let tally = reg.phase_tally();
        assert_eq!(tally.waiting, 1);
        assert_eq!(tally.riding, 1);
        assert_eq!(tally.arrived, 1);
        assert!(reg.get(a).is_waiting());
    }
}

// ── CallBoard ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod board {
    use super::*;

    #[test]
    fn fifo_order_preserved() {
        let (mut calls, mut reg) = rig();
        let a = call(&mut calls, &mut reg, 2, 5);
        let b = call(&mut calls, &mut reg, 2, 4);
        let c = call(&mut calls, &mut reg, 2, 3);
        assert_eq!(calls.snapshot(Floor(2)), vec![a, b, c]);
    }

    #[test]
    fn snapshot_of_empty_floor_is_empty() {
        let calls = CallBoard::new();
        assert!(calls.snapshot(Floor(9)).is_empty());
    }

    #[test]
    fn remove_middle_entry() {
        let (mut calls, mut reg) = rig();
        let a = call(&mut calls, &mut reg, 2, 5);
        let b = call(&mut calls, &mut reg, 2, 4);
        let c = call(&mut calls, &mut reg, 2, 3);

        assert!(calls.remove(Floor(2), b));
        assert!(!calls.remove(Floor(2), b), "second removal must fail");
        assert_eq!(calls.snapshot(Floor(2)), vec![a, c]);
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn counts_per_floor() {
        let (mut calls, mut reg) = rig();
        call(&mut calls, &mut reg, 1, 3);
        call(&mut calls, &mut reg, 1, 4);
        call(&mut calls, &mut reg, 4, 1);
        assert_eq!(calls.waiting_at(Floor(1)), 2);
        assert_eq!(calls.waiting_at(Floor(4)), 1);
        assert_eq!(calls.waiting_at(Floor(2)), 0);
        assert_eq!(calls.len(), 3);
        assert!(!calls.is_empty());
    }
}

// ── Parking policy ────────────────────────────────────────────────────────────

#[cfg(test)]
mod parking {
    use super::*;
    use crate::parking_target;

    #[test]
    fn top_floor_always_parks_at_ground() {
        for id in [ElevatorId(0), ElevatorId(1)] {
            assert_eq!(
                parking_target(id, 10, Floor(10)),
                (Floor::GROUND, Direction::Down)
            );
        }
    }

    #[test]
    fn ground_floor_always_parks_at_top() {
        for id in [ElevatorId(0), ElevatorId(1)] {
            assert_eq!(parking_target(id, 10, Floor(1)), (Floor(10), Direction::Up));
        }
    }

    #[test]
    fn mid_building_uses_identity_parity() {
        assert_eq!(
            parking_target(ElevatorId(0), 10, Floor(5)),
            (Floor::GROUND, Direction::Down)
        );
        assert_eq!(
            parking_target(ElevatorId(1), 10, Floor(5)),
            (Floor(10), Direction::Up)
        );
        assert_eq!(
            parking_target(ElevatorId(2), 10, Floor(5)),
            (Floor::GROUND, Direction::Down)
        );
    }
}

// ── Elevator unit behavior ────────────────────────────────────────────────────

#[cfg(test)]
mod elevator {
    use super::*;

    #[test]
    fn initial_positions_alternate() {
        let config = cfg(8, 4);
        let sys = ElevatorSystem::new(config);
        let floors: Vec<Floor> = sys.elevators().iter().map(|e| e.current_floor).collect();
        assert_eq!(floors, vec![Floor(1), Floor(8), Floor(1), Floor(8)]);
    }

    #[test]
    fn board_takes_passenger_and_commits_destination() {
        let (mut calls, mut reg) = rig();
        let mut car = Elevator::new(ElevatorId(0), cfg(5, 1));
        let id = call(&mut calls, &mut reg, 1, 2);

        assert!(car.board(id, &mut calls, &mut reg));
        assert_eq!(car.aboard, vec![id]);
        assert!(car.destinations.contains(&Floor(2)));
        assert_eq!(reg.get(id).elevator, Some(ElevatorId(0)));
        assert_eq!(calls.waiting_at(Floor(1)), 0);
        assert_eq!(car.passengers_served, 1);
    }

    #[test]
    fn full_car_refuses_boarding() {
        let (mut calls, mut reg) = rig();
        let mut car = Elevator::new(ElevatorId(0), cfg(5, 1));
        for _ in 0..10 {
            let id = call(&mut calls, &mut reg, 1, 4);
            assert!(car.board(id, &mut calls, &mut reg));
        }
        let extra = call(&mut calls, &mut reg, 1, 5);
        assert!(!car.board(extra, &mut calls, &mut reg));
        assert_eq!(car.occupancy(), 10);
        assert!(car.is_full());
        assert!(!car.aboard.contains(&extra));
        assert!(!car.destinations.contains(&Floor(5)));
        assert_eq!(reg.get(extra).elevator, None);
    }

    #[test]
    fn drop_off_alights_only_matching_passengers() {
        let (mut calls, mut reg) = rig();
        let mut car = Elevator::new(ElevatorId(0), cfg(6, 1));
        let ids: Vec<_> = (2..=5)
            .map(|dest| {
                let id = call(&mut calls, &mut reg, 1, dest);
                assert!(car.board(id, &mut calls, &mut reg));
                id
            })
            .collect();

        car.current_floor = Floor(4);
        assert_eq!(car.drop_off_arrivals(&mut reg), 1);
        assert_eq!(car.occupancy(), 3);
        assert!(!car.destinations.contains(&Floor(4)));
        assert!(car.destinations.contains(&Floor(5)));
        assert!(reg.get(ids[2]).has_arrived());
        assert_eq!(reg.get(ids[2]).current_floor, Floor(4));
    }

    #[test]
    fn drop_off_on_parking_stop_alights_nobody() {
        let (_, mut reg) = rig();
        let mut car = Elevator::new(ElevatorId(0), cfg(5, 1));
        car.destinations.insert(Floor(1));
        assert_eq!(car.drop_off_arrivals(&mut reg), 0);
        assert!(car.destinations.is_empty());
    }

    #[test]
    fn pickup_skips_wrong_direction_passengers() {
        let (mut calls, mut reg) = rig();
        let mut car = Elevator::new(ElevatorId(0), cfg(5, 1));
        car.current_floor = Floor(3);
        car.direction = Direction::Down;

        let up = call(&mut calls, &mut reg, 3, 5);
        assert_eq!(car.pick_up_waiting(&mut calls, &mut reg), 0);
        assert!(car.aboard.is_empty());
        assert_eq!(calls.snapshot(Floor(3)), vec![up], "wrong-direction passenger stays queued");
    }

    #[test]
    fn pickup_ignores_other_floors() {
        let (mut calls, mut reg) = rig();
        let mut car = Elevator::new(ElevatorId(0), cfg(5, 1));
        car.current_floor = Floor(2);
        call(&mut calls, &mut reg, 3, 5);
        assert_eq!(car.pick_up_waiting(&mut calls, &mut reg), 0);
    }

    #[test]
    fn first_boarding_aims_the_idle_car() {
        let (mut calls, mut reg) = rig();
        let mut car = Elevator::new(ElevatorId(0), cfg(6, 1));
        car.current_floor = Floor(3);
        car.direction = Direction::Idle;

        // An idle car takes the first caller's direction; the opposite-bound
        // passenger is then skipped, later same-direction passengers board.
        let first_up = call(&mut calls, &mut reg, 3, 5);
        let down = call(&mut calls, &mut reg, 3, 1);
        let second_up = call(&mut calls, &mut reg, 3, 4);

        assert_eq!(car.pick_up_waiting(&mut calls, &mut reg), 2);
        assert_eq!(car.aboard, vec![first_up, second_up]);
        assert_eq!(car.direction, Direction::Up);
        assert_eq!(calls.snapshot(Floor(3)), vec![down]);
    }

    #[test]
    fn capacity_failure_ends_the_scan() {
        let (mut calls, mut reg) = rig();
        let mut car = Elevator::new(ElevatorId(0), cfg(6, 1));
        car.direction = Direction::Up;

        for _ in 0..10 {
            call(&mut calls, &mut reg, 1, 4);
        }
        let eleventh = call(&mut calls, &mut reg, 1, 5);
        let twelfth = call(&mut calls, &mut reg, 1, 3);

        assert_eq!(car.pick_up_waiting(&mut calls, &mut reg), 10);
        assert_eq!(car.occupancy(), 10);
        // The 11th boarding fails and the scan stops entirely; neither its
        // destination nor any later passenger is taken.
        assert_eq!(calls.snapshot(Floor(1)), vec![eleventh, twelfth]);
        assert!(!car.destinations.contains(&Floor(5)));
        assert!(!car.destinations.contains(&Floor(3)));
    }

    #[test]
    fn aboard_destinations_always_committed() {
        let (mut calls, mut reg) = rig();
        let mut car = Elevator::new(ElevatorId(0), cfg(8, 1));
        for dest in [3u16, 5, 7, 5] {
            let id = call(&mut calls, &mut reg, 1, dest);
            car.board(id, &mut calls, &mut reg);
        }
        for &id in &car.aboard {
            assert!(car.destinations.contains(&reg.get(id).destination()));
        }
        assert!(car.occupancy() <= 10);
    }

    #[test]
    fn manual_down_step_moves_one_floor() {
        let (mut calls, mut reg) = rig();
        let mut car = Elevator::new(ElevatorId(0), cfg(5, 1));
        car.current_floor = Floor(3);
        car.direction = Direction::Down;
        let id = call(&mut calls, &mut reg, 3, 2);

        // First step boards and opens the door.
        car.step(&mut calls, &mut reg);
        assert!(car.door_open);
        assert_eq!(car.current_floor, Floor(3));

        // Force the dwell to expire: the next step closes and moves.
        car.door_timer = 0;
        car.step(&mut calls, &mut reg);
        assert!(!car.door_open);
        assert_eq!(car.current_floor, Floor(2));
        assert_eq!(reg.get(id).current_floor, Floor(2));
    }

    #[test]
    fn door_closes_and_moves_when_timer_expires() {
        let (mut calls, mut reg) = rig();
        let mut car = Elevator::new(ElevatorId(0), cfg(5, 1));
        car.current_floor = Floor(3);
        car.direction = Direction::Up;
        car.door_open = true;
        car.door_timer = 1;
        car.destinations.insert(Floor(5));

        car.step(&mut calls, &mut reg);
        assert!(!car.door_open);
        assert_eq!(car.current_floor, Floor(4));
    }

    #[test]
    fn idle_empty_car_parks_without_stopping() {
        let (mut calls, mut reg) = rig();
        let mut car = Elevator::new(ElevatorId(0), cfg(3, 1));

        // Ground start: parks toward the top, passing floors without stops.
        car.step(&mut calls, &mut reg);
        assert_eq!(car.current_floor, Floor(2));
        car.step(&mut calls, &mut reg);
        assert_eq!(car.current_floor, Floor(3));
        // Reaching the parking floor drops nobody, so the door stays shut
        // and the car re-parks toward the ground.
        car.step(&mut calls, &mut reg);
        assert_eq!(car.current_floor, Floor(2));
        assert_eq!(car.stops_made, 0);
        assert!(!car.door_open);
    }
}

// ── Whole-system scenarios ────────────────────────────────────────────────────

#[cfg(test)]
mod system {
    use super::*;
    use lift_core::DOOR_DWELL_TICKS;

    #[test]
    fn wait_board_ride_alight_timeline() {
        let mut sys = small_system();
        let id = sys.submit_call(Passenger::new(Floor(2), Floor(3)));

        assert_eq!(sys.elevators()[0].current_floor, Floor(1));
        assert!(!sys.elevators()[0].door_open);

        // Tick 1: the car leaves its ground parking spot and reaches the
        // caller's floor; the passenger is still unassigned.
        sys.step();
        assert_eq!(sys.now(), lift_core::Tick(1));
        assert_eq!(sys.elevators()[0].current_floor, Floor(2));
        assert!(!sys.elevators()[0].door_open);
        assert_eq!(sys.passengers().get(id).elevator, None);
        assert_eq!(sys.passengers().get(id).wait_ticks, 1);

        // Tick 2: boarding — the door opens with the regular dwell and the
        // tick counts toward ride time, not wait time.
        sys.step();
        let car = &sys.elevators()[0];
        assert!(car.door_open);
        assert_eq!(car.door_timer, DOOR_DWELL_TICKS);
        assert_eq!(car.stops_made, 1);
        assert_eq!(car.passengers_served, 1);
        let p = sys.passengers().get(id);
        assert_eq!(p.elevator, Some(ElevatorId(0)));
        assert_eq!((p.wait_ticks, p.ride_ticks), (1, 1));

        // The dwell holds the car for DOOR_DWELL_TICKS ticks, after which it
        // closes and moves in the same tick.
        for _ in 0..DOOR_DWELL_TICKS {
            sys.step();
        }
        let car = &sys.elevators()[0];
        assert!(!car.door_open);
        assert_eq!(car.door_timer, 0);
        assert_eq!(car.current_floor, Floor(3));
        assert_eq!(sys.passengers().get(id).current_floor, Floor(3));

        // Next tick: drop-off.  The alighting tick counts toward neither
        // timer, and arrived is terminal.
        sys.step();
        let p = sys.passengers().get(id);
        assert!(p.has_arrived());
        let (wait, ride) = (p.wait_ticks, p.ride_ticks);
        assert_eq!(p.total_ticks(), wait + ride);
        sys.run(20);
        let p = sys.passengers().get(id);
        assert_eq!((p.wait_ticks, p.ride_ticks), (wait, ride));
    }

    #[test]
    fn lobby_stop_uses_longer_dwell() {
        let mut sys = small_system();
        sys.submit_call(Passenger::new(Floor(1), Floor(3)));

        // Tick 1: the car is already at the lobby and boards immediately.
        sys.step();
        let car = &sys.elevators()[0];
        assert!(car.door_open);
        assert_eq!(car.door_timer, sys.config().lobby_dwell_ticks);
        assert!(car.door_timer > sys.config().door_dwell_ticks);
    }

    #[test]
    fn eleventh_passenger_waits_for_the_next_trip() {
        let mut sys = small_system();
        for _ in 0..10 {
            sys.submit_call(Passenger::new(Floor(1), Floor(4)));
        }
        let eleventh = sys.submit_call(Passenger::new(Floor(1), Floor(5)));

        sys.step();
        let car = &sys.elevators()[0];
        assert_eq!(car.occupancy(), 10);
        assert_eq!(car.passengers_served, 10);
        assert!(!car.destinations.contains(&Floor(5)));
        assert_eq!(sys.calls().waiting_at(Floor(1)), 1);
        let p = sys.passengers().get(eleventh);
        assert!(p.is_waiting());
        assert_eq!(p.wait_ticks, 1);
    }

    #[test]
    fn aboard_never_exceeds_capacity() {
        let mut sys = ElevatorSystem::new(cfg(6, 2));
        for i in 0..30u16 {
            sys.submit_call(Passenger::new(Floor(1 + i % 3), Floor(4 + i % 3)));
        }
        for _ in 0..100 {
            sys.step();
            for car in sys.elevators() {
                assert!(car.occupancy() <= sys.config().capacity);
                for &id in &car.aboard {
                    let dest = sys.passengers().get(id).destination();
                    assert!(car.destinations.contains(&dest));
                }
                for &floor in &car.destinations {
                    assert!(sys.config().contains(floor));
                }
            }
        }
    }

    #[test]
    fn every_passenger_eventually_arrives() {
        let mut sys = ElevatorSystem::new(cfg(8, 2));
        for i in 0..12u16 {
            let (start, dest) = if i % 2 == 0 { (1, 2 + i % 6) } else { (2 + i % 6, 1) };
            sys.submit_call(Passenger::new(Floor(start), Floor(dest)));
        }
        sys.run(500);
        let tally = sys.passengers().phase_tally();
        assert_eq!(tally.arrived, 12, "tally: {tally:?}");
        for p in sys.passengers().iter() {
            assert_eq!(p.total_ticks(), p.wait_ticks + p.ride_ticks);
        }
    }

    #[test]
    fn stats_on_empty_system_are_zero() {
        let mut sys = ElevatorSystem::new(cfg(10, 3));
        sys.run(50);
        let stats = sys.stats();
        assert_eq!(stats.average_wait_ticks, 0.0);
        assert_eq!(stats.average_ride_ticks, 0.0);
        assert_eq!(stats.average_total_ticks, 0.0);
        assert_eq!(stats.max_wait_ticks, 0);
        assert_eq!(stats.min_wait_ticks, 0);
        assert_eq!(stats.elevators.len(), 3);
        for e in &stats.elevators {
            assert_eq!(e.passengers_served, 0);
            assert_eq!(e.stops_made, 0);
            assert_eq!(e.ticks_in_operation, 50);
        }
    }

    #[test]
    fn stats_aggregate_over_the_registry() {
        let mut sys = small_system();
        sys.submit_call(Passenger::new(Floor(2), Floor(3)));
        sys.submit_call(Passenger::new(Floor(1), Floor(4)));
        sys.run(60);

        let stats = sys.stats();
        let waits: Vec<u64> = sys.passengers().iter().map(|p| p.wait_ticks).collect();
        let sum: u64 = waits.iter().sum();
        assert_eq!(stats.average_wait_ticks, sum as f64 / waits.len() as f64);
        assert_eq!(stats.max_wait_ticks, *waits.iter().max().unwrap());
        assert_eq!(stats.min_wait_ticks, *waits.iter().min().unwrap());
        assert_eq!(stats.elevators[0].elevator_id, ElevatorId(0));
        assert!(stats.elevators[0].passengers_served >= 2);
    }

    #[test]
    fn tick_counter_is_monotonic() {
        let mut sys = small_system();
        assert_eq!(sys.now(), lift_core::Tick::ZERO);
        sys.run(7);
        assert_eq!(sys.now(), lift_core::Tick(7));
    }
}
