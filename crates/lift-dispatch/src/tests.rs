//! Unit tests for lift-dispatch.

use lift_car::{CAPACITY, Calibration, Direction, Elevator, Person, Status};
use lift_core::{CarId, CarRng, Floor, Millis, SimClock};

use crate::{Dispatcher, FloorRegistry, HallCall, NearestCarDispatcher};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parked(id: u32, floor: u32) -> Elevator {
    Elevator::parked_at(CarId(id), Floor(floor), Calibration::default())
}

fn person(origin: u32, destination: u32) -> Person {
    Person::new(Floor(origin), Floor(destination), Millis::ZERO)
}

/// A car parked at `from`, already moving toward `to`.
fn moving(id: u32, from: u32, to: u32, ticks: usize) -> Elevator {
    let mut car = parked(id, from);
    let mut clock = SimClock::new(20);
    let mut rng = CarRng::new(1, CarId(id));
    car.request(Floor(to));
    for _ in 0..ticks {
        car.step(clock.now, &mut rng).unwrap();
        clock.advance();
    }
    assert!(car.status().is_moving());
    car
}

/// A car waiting with doors open at `floor`.
fn waiting_at(id: u32, floor: u32) -> Elevator {
    let mut car = parked(id, floor);
    car.request(Floor(floor));
    car.step(Millis::ZERO, &mut CarRng::new(1, CarId(id))).unwrap();
    assert_eq!(car.status(), Status::Waiting);
    car
}

// ── FloorRegistry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use super::*;

    use crate::DispatchError;

    #[test]
    fn push_keeps_arrival_order() {
        let mut reg = FloorRegistry::new(10);
        reg.push(person(4, 0)).unwrap();
        reg.push(person(4, 9)).unwrap();
        let waiting: Vec<Floor> = reg.waiting(Floor(4)).unwrap().iter().map(Person::destination).collect();
        assert_eq!(waiting, vec![Floor(0), Floor(9)]);
        assert_eq!(reg.waiting_count(Floor(4)), 2);
        assert_eq!(reg.total_waiting(), 2);
    }

    #[test]
    fn unknown_floor_is_refused() {
        let mut reg = FloorRegistry::new(5);
        assert_eq!(
            reg.push(person(5, 0)),
            Err(DispatchError::UnknownFloor { floor: Floor(5), floors: 5 })
        );
        assert!(reg.waiting(Floor(7)).is_err());
        assert_eq!(reg.waiting_count(Floor(7)), 0);
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatcher {
    use super::*;

    #[test]
    fn nearest_idle_car_answers() {
        let cars = vec![parked(0, 0), parked(1, 5), parked(2, 9)];
        let pick = NearestCarDispatcher.select(&cars, HallCall::new(Floor(4)));
        assert_eq!(pick, Some(CarId(1)));
    }

    #[test]
    fn distance_tie_goes_to_first_car() {
        let cars = vec![parked(0, 2), parked(1, 6)];
        let pick = NearestCarDispatcher.select(&cars, HallCall::new(Floor(4)));
        assert_eq!(pick, Some(CarId(0)));
    }

    #[test]
    fn car_heading_the_right_way_beats_farther_idle_car() {
        let cars = vec![parked(0, 0), moving(1, 2, 10, 20)];
        assert!(cars[1].position() > 2.0);
        let pick = NearestCarDispatcher.select(&cars, HallCall::toward(Floor(6), Direction::Up));
        assert_eq!(pick, Some(CarId(1)));
    }

    #[test]
    fn nearer_idle_car_still_wins() {
        let cars = vec![parked(0, 6), moving(1, 2, 10, 20)];
        let pick = NearestCarDispatcher.select(&cars, HallCall::toward(Floor(6), Direction::Up));
        assert_eq!(pick, Some(CarId(0)));
    }

    #[test]
    fn directed_call_ignores_cars_going_the_other_way() {
        // Only car is moving up from 2, call at 6 wants to go down.
        let cars = vec![moving(0, 2, 10, 20)];
        let pick = NearestCarDispatcher.select(&cars, HallCall::toward(Floor(6), Direction::Down));
        assert_eq!(pick, None);
    }

    #[test]
    fn car_moving_away_is_not_a_candidate_for_directed_call() {
        let cars = vec![moving(0, 2, 10, 20)];
        let pick = NearestCarDispatcher.select(&cars, HallCall::toward(Floor(1), Direction::Up));
        assert_eq!(pick, None);
    }

    #[test]
    fn undirected_call_falls_back_to_least_busy() {
        // Both cars moving up, both already past floor 1.
        let mut busy = moving(0, 2, 9, 20);
        busy.request(Floor(5));
        busy.request(Floor(7));
        let light = moving(1, 3, 9, 20);
        let cars = vec![busy, light];
        let pick = NearestCarDispatcher.select(&cars, HallCall::new(Floor(1)));
        assert_eq!(pick, Some(CarId(1)));
    }

    #[test]
    fn least_busy_tie_goes_to_first_car() {
        let cars = vec![moving(0, 2, 9, 20), moving(1, 3, 9, 20)];
        let pick = NearestCarDispatcher.select(&cars, HallCall::new(Floor(0)));
        assert_eq!(pick, Some(CarId(0)));
    }

    #[test]
    fn waiting_car_with_queue_counts_as_moving_its_way() {
        let mut car = waiting_at(0, 2);
        car.request(Floor(8));
        assert_eq!(car.direction(), Some(Direction::Up));
        let cars = vec![car, parked(1, 9)];
        // Car 0 at 2 heading up (distance 2) beats idle car at 9 (distance 5).
        let pick = NearestCarDispatcher.select(&cars, HallCall::toward(Floor(4), Direction::Up));
        assert_eq!(pick, Some(CarId(0)));
    }

    #[test]
    fn selection_does_not_mutate() {
        let cars = vec![parked(0, 0), parked(1, 5)];
        let before: Vec<usize> = cars.iter().map(Elevator::destination_count).collect();
        NearestCarDispatcher.select(&cars, HallCall::new(Floor(3)));
        let after: Vec<usize> = cars.iter().map(Elevator::destination_count).collect();
        assert_eq!(before, after);
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loading {
    use super::*;

    use crate::load_car;

    #[test]
    fn boards_same_direction_and_skips_the_other_way() {
        let mut car = parked(0, 3);
        for _ in 0..CAPACITY - 1 {
            car.board(person(3, 9)).unwrap();
        }
        car.request(Floor(3));
        car.step(Millis::ZERO, &mut CarRng::new(1, CarId(0))).unwrap();
        assert_eq!(car.status(), Status::Waiting);
        assert_eq!(car.direction(), Some(Direction::Up));

        let mut reg = FloorRegistry::new(10);
        reg.push(person(3, 1)).unwrap();
        reg.push(person(3, 7)).unwrap();

        let boarded = load_car(&mut car, &mut reg, Millis::ZERO).unwrap();
        assert_eq!(boarded.count, 1);
        assert_eq!(car.occupants().len(), CAPACITY);
        assert_eq!(car.occupants().last().map(Person::destination), Some(Floor(7)));
        assert!(car.destinations().contains(Floor(7)));

        let left: Vec<Floor> = reg.waiting(Floor(3)).unwrap().iter().map(Person::destination).collect();
        assert_eq!(left, vec![Floor(1)]);
    }

    #[test]
    fn idle_car_takes_everyone_up_to_capacity() {
        let mut car = parked(0, 0);
        let mut reg = FloorRegistry::new(10);
        for d in 1..=9 {
            reg.push(person(0, d)).unwrap();
            reg.push(person(0, d)).unwrap();
        }
        let boarded = load_car(&mut car, &mut reg, Millis(500)).unwrap();
        assert_eq!(boarded.count, CAPACITY);
        assert_eq!(boarded.waited_ms, 500 * CAPACITY as u64);
        assert_eq!(reg.waiting_count(Floor(0)), 18 - CAPACITY);
        // Boarded in arrival order: destinations 1,1,2,2,…,6,6.
        assert_eq!(car.destinations().len(), 6);
    }

    #[test]
    fn waiting_car_takes_direction_from_first_passenger() {
        let mut car = waiting_at(0, 5);
        let mut reg = FloorRegistry::new(10);
        reg.push(person(5, 2)).unwrap();
        reg.push(person(5, 8)).unwrap();
        reg.push(person(5, 0)).unwrap();
        let boarded = load_car(&mut car, &mut reg, Millis::ZERO).unwrap();
        assert_eq!(boarded.count, 2);
        assert_eq!(car.direction(), Some(Direction::Down));
        assert_eq!(reg.waiting_count(Floor(5)), 1);
    }

    #[test]
    fn car_about_to_leave_takes_passengers_going_its_way() {
        let mut car = parked(0, 3);
        car.request(Floor(7));
        car.step(Millis::ZERO, &mut CarRng::new(1, CarId(0))).unwrap();
        assert_eq!(car.status(), Status::Up);
        assert_eq!(car.speed(), 0.0);

        let mut reg = FloorRegistry::new(10);
        reg.push(person(3, 1)).unwrap();
        reg.push(person(3, 8)).unwrap();
        let boarded = load_car(&mut car, &mut reg, Millis::ZERO).unwrap();
        assert_eq!(boarded.count, 1);
        assert_eq!(car.occupants()[0].destination(), Floor(8));
        assert!(car.destinations().contains(Floor(8)));
        assert_eq!(reg.waiting_count(Floor(3)), 1);
    }

    #[test]
    fn moving_car_is_not_loaded() {
        let mut car = moving(0, 0, 9, 3);
        let mut reg = FloorRegistry::new(10);
        reg.push(person(0, 4)).unwrap();
        let boarded = load_car(&mut car, &mut reg, Millis::ZERO).unwrap();
        assert_eq!(boarded.count, 0);
        assert_eq!(reg.waiting_count(Floor(0)), 1);
    }
}
