use std::cell::RefCell;

use tokio::task::LocalSet;

use super::*;
use crate::timing::{Debounced, Throttled};

#[tokio::test(start_paused = true)]
async fn timeout_fires_after_delay() {
    LocalSet::new()
        .run_until(async {
            let timers = TokioTimers::new();
            let fired = Rc::new(Cell::new(false));
            let flag = Rc::clone(&fired);
            timers.set_timeout(Duration::from_millis(100), Box::new(move || flag.set(true)));

            tokio::time::sleep(Duration::from_millis(50)).await;
            assert!(!fired.get());

            tokio::time::sleep(Duration::from_millis(60)).await;
            assert!(fired.get());
            assert_eq!(timers.pending(), 0);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn clear_timeout_aborts_task() {
    LocalSet::new()
        .run_until(async {
            let timers = TokioTimers::new();
            let fired = Rc::new(Cell::new(false));
            let flag = Rc::clone(&fired);
            let id = timers.set_timeout(Duration::from_millis(10), Box::new(move || flag.set(true)));
            timers.clear_timeout(id);

            tokio::time::sleep(Duration::from_millis(50)).await;
            assert!(!fired.get());
            assert_eq!(timers.pending(), 0);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn debounce_on_tokio_fires_once_with_last_args() {
    LocalSet::new()
        .run_until(async {
            let timers: Rc<dyn Timers> = Rc::new(TokioTimers::new());
            let calls = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&calls);
            let debounced = Debounced::new(timers, Duration::from_millis(100), move |n: u32| {
                sink.borrow_mut().push(n);
            });

            for n in 1..=5 {
                debounced.call(n);
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
            assert_eq!(*calls.borrow(), vec![5]);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn throttle_on_tokio_reopens_after_limit() {
    LocalSet::new()
        .run_until(async {
            let timers: Rc<dyn Timers> = Rc::new(TokioTimers::new());
            let count = Rc::new(Cell::new(0_u32));
            let counter = Rc::clone(&count);
            let throttled = Throttled::new(timers, Duration::from_millis(100), move |()| {
                counter.set(counter.get() + 1);
            });

            for _ in 0..5 {
                throttled.call(());
            }
            assert_eq!(count.get(), 1);

            tokio::time::sleep(Duration::from_millis(150)).await;
            throttled.call(());
            assert_eq!(count.get(), 2);
        })
        .await;
}

#[test]
#[should_panic(expected = "LocalSet")]
fn set_timeout_outside_local_set_panics() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    runtime.block_on(async {
        let timers = TokioTimers::new();
        timers.set_timeout(Duration::from_millis(10), Box::new(|| {}));
    });
}
