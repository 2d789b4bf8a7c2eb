use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use desk_gesture::timing::{DEBOUNCE_TICKS, DOUBLE_CLICK_WINDOW_TICKS, SAVE_HOLD_TICKS};
use desk_gesture::{Dispatcher, Gesture, GestureSink, PinPair};
use embedded_hal::digital::v2::InputPin;

const WINDOW: usize = DEBOUNCE_TICKS as usize;

/// A button line with a pull-up: high until the button is pressed.
struct Line(Rc<Cell<bool>>);

impl InputPin for Line {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

#[derive(Default)]
struct Recorder(Vec<Gesture>);

impl GestureSink for Recorder {
    fn report(&mut self, gesture: Gesture) {
        self.0.push(gesture);
    }
}

struct Bench {
    up: Rc<Cell<bool>>,
    down: Rc<Cell<bool>>,
    pins: PinPair<Line, Line>,
    dispatcher: Dispatcher<Recorder>,
}

impl Bench {
    fn new() -> Self {
        let _ = sensible_env_logger::try_init!();

        let up = Rc::new(Cell::new(true));
        let down = Rc::new(Cell::new(true));
        let pins = PinPair::new(Line(up.clone()), Line(down.clone()));
        Self {
            up,
            down,
            pins,
            dispatcher: Dispatcher::new(Recorder::default()),
        }
    }

    fn set(&self, up_pressed: bool, down_pressed: bool) {
        self.up.set(!up_pressed);
        self.down.set(!down_pressed);
    }

    /// Holds the buttons as given for `ticks` raw ticks and returns what got
    /// reported meanwhile.
    fn hold(&mut self, up_pressed: bool, down_pressed: bool, ticks: usize) -> Vec<Gesture> {
        self.set(up_pressed, down_pressed);
        (0..ticks)
            .filter_map(|_| match self.dispatcher.on_tick(&mut self.pins) {
                Ok(reported) => reported,
                Err(e) => match e {},
            })
            .collect()
    }

    /// Holds a state until it has been confirmed `debounced` times.
    fn confirm(
        &mut self,
        up_pressed: bool,
        down_pressed: bool,
        debounced: usize,
    ) -> Vec<Gesture> {
        self.hold(up_pressed, down_pressed, debounced * WINDOW + 1)
    }

    fn reported(&self) -> &[Gesture] {
        &self.dispatcher.sink().0
    }
}

#[test]
fn press_then_release_reports_up_then_idle() {
    let mut bench = Bench::new();

    assert!(bench.hold(true, false, WINDOW).is_empty());
    assert_eq!(bench.hold(true, false, 1), vec![Gesture::Up]);
    assert!(bench.hold(true, false, WINDOW * 10).is_empty());

    assert_eq!(bench.confirm(false, false, 1), vec![Gesture::Idle]);
    assert!(bench.dispatcher.machine().awaiting_second_up());
    assert_eq!(bench.reported(), &[Gesture::Up, Gesture::Idle]);
}

#[test]
fn contact_bounce_is_ignored() {
    let mut bench = Bench::new();

    for _ in 0..50 {
        bench.hold(true, false, 3);
        bench.hold(false, false, 2);
    }
    assert!(bench.reported().is_empty());
    assert_eq!(bench.dispatcher.debounced_ticks(), 0);

    assert_eq!(bench.confirm(true, false, 1), vec![Gesture::Up]);
}

#[test]
fn quick_second_press_is_a_double_up() {
    let mut bench = Bench::new();

    bench.confirm(true, false, 1);
    bench.confirm(false, false, 1);
    assert_eq!(bench.confirm(true, false, 1), vec![Gesture::DoubleUp]);
    assert_eq!(bench.confirm(false, false, 1), vec![Gesture::Idle]);
    assert_eq!(
        bench.reported(),
        &[Gesture::Up, Gesture::Idle, Gesture::DoubleUp, Gesture::Idle]
    );
}

#[test]
fn last_moment_second_press_still_doubles() {
    let mut bench = Bench::new();

    bench.confirm(false, true, 1);
    bench.confirm(false, false, 1);
    bench.hold(false, false, (DOUBLE_CLICK_WINDOW_TICKS as usize - 2) * WINDOW);
    assert_eq!(bench.confirm(false, true, 1), vec![Gesture::DoubleDown]);
}

#[test]
fn late_second_press_is_a_plain_press() {
    let mut bench = Bench::new();

    bench.confirm(false, true, 1);
    bench.confirm(false, false, 1);
    bench.hold(false, false, (DOUBLE_CLICK_WINDOW_TICKS as usize - 1) * WINDOW);
    // Still armed; the confirmation of the second press closes the window.
    assert!(bench.dispatcher.machine().awaiting_second_down());
    assert_eq!(bench.confirm(false, true, 1), vec![Gesture::Down]);
    assert!(!bench.dispatcher.machine().awaiting_second_down());
}

#[test]
fn holding_both_for_three_seconds_saves() {
    let mut bench = Bench::new();

    let hold = SAVE_HOLD_TICKS as usize;
    assert!(bench.confirm(true, true, hold - 1).is_empty());
    assert_eq!(bench.hold(true, true, WINDOW), vec![Gesture::Save]);
    assert!(bench.hold(true, true, WINDOW * 40).is_empty());
    assert_eq!(bench.confirm(false, false, 1), vec![Gesture::Idle]);
}

#[test]
fn releasing_before_three_seconds_does_not_save() {
    let mut bench = Bench::new();

    let hold = SAVE_HOLD_TICKS as usize;
    bench.confirm(true, true, hold - 1);
    bench.confirm(false, false, 1);
    bench.confirm(true, true, 1);
    assert!(bench.reported().is_empty());
    assert_eq!(bench.dispatcher.machine().hold_counter(), 1);
}

#[test]
fn independent_button_pairs() {
    let mut left = Bench::new();
    let mut right = Bench::new();

    left.confirm(true, false, 1);
    right.confirm(false, true, 1);
    left.confirm(false, false, 1);

    assert_eq!(left.reported(), &[Gesture::Up, Gesture::Idle]);
    assert_eq!(right.reported(), &[Gesture::Down]);
}
