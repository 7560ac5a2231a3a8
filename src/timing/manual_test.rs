use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_for_tasks = Rc::clone(&log);
    let make = move |name: &'static str| -> Task {
        let log = Rc::clone(&log_for_tasks);
        Box::new(move || log.borrow_mut().push(name))
    };
    (log, make)
}

#[test]
fn tasks_fire_in_deadline_order() {
    let timers = ManualTimers::new();
    let (log, task) = recorder();
    timers.set_timeout(Duration::from_millis(30), task("late"));
    timers.set_timeout(Duration::from_millis(10), task("early"));
    timers.set_timeout(Duration::from_millis(10), task("early-second"));

    timers.advance_ms(30);
    assert_eq!(*log.borrow(), vec!["early", "early-second", "late"]);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn tasks_wait_for_their_deadline() {
    let timers = ManualTimers::new();
    let (log, task) = recorder();
    timers.set_timeout(Duration::from_millis(100), task("a"));

    timers.advance_ms(99);
    assert!(log.borrow().is_empty());
    assert_eq!(timers.now(), Duration::from_millis(99));

    timers.advance_ms(1);
    assert_eq!(*log.borrow(), vec!["a"]);
}

#[test]
fn clear_timeout_cancels_and_ignores_unknown() {
    let timers = ManualTimers::new();
    let (log, task) = recorder();
    let id = timers.set_timeout(Duration::from_millis(5), task("a"));
    timers.clear_timeout(id);
    timers.clear_timeout(id);
    timers.clear_timeout(TimerId(999));

    timers.advance_ms(10);
    assert!(log.borrow().is_empty());
}

#[test]
fn task_may_schedule_another_within_window() {
    let timers = Rc::new(ManualTimers::new());
    let log = Rc::new(RefCell::new(Vec::new()));

    let inner_timers = Rc::clone(&timers);
    let inner_log = Rc::clone(&log);
    timers.set_timeout(
        Duration::from_millis(10),
        Box::new(move || {
            inner_log.borrow_mut().push(inner_timers.now());
            let log = Rc::clone(&inner_log);
            let clock = Rc::clone(&inner_timers);
            inner_timers.set_timeout(
                Duration::from_millis(10),
                Box::new(move || log.borrow_mut().push(clock.now())),
            );
        }),
    );

    timers.advance_ms(25);
    assert_eq!(
        *log.borrow(),
        vec![Duration::from_millis(10), Duration::from_millis(20)]
    );
    assert_eq!(timers.now(), Duration::from_millis(25));
}

#[test]
fn max_delay_after_clock_moved_saturates() {
    let timers = ManualTimers::new();
    let (log, task) = recorder();
    timers.advance_ms(1);
    timers.set_timeout(Duration::MAX, task("never"));

    timers.advance_ms(1000);
    assert!(log.borrow().is_empty());
    assert_eq!(timers.pending(), 1);

    timers.advance(Duration::MAX);
    assert_eq!(timers.now(), Duration::MAX);
    assert_eq!(*log.borrow(), vec!["never"]);
}
