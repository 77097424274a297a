use std::sync::mpsc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tokio::runtime::Handle;
use underworld_engine::{EngineEvent, TimerService};

#[tokio::test(start_paused = true)]
async fn timer_fires_once_after_delay() {
    let (tx, rx) = mpsc::channel();
    let timers = TimerService::new(Handle::current(), tx);

    timers.start(7, Duration::from_millis(100));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(rx.try_recv().is_err());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(rx.try_recv(), Ok(EngineEvent::TimerElapsed { timer: 7 }));
    assert!(rx.try_recv().is_err());
    assert_eq!(timers.live_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn cancelled_timer_never_fires() {
    let (tx, rx) = mpsc::channel();
    let timers = TimerService::new(Handle::current(), tx);

    timers.start(1, Duration::from_millis(100));
    timers.start(2, Duration::from_millis(100));
    assert!(timers.cancel(1));
    assert!(!timers.cancel(1));

    tokio::time::sleep(Duration::from_millis(200)).await;
    let fired: Vec<_> = rx.try_iter().collect();
    assert_eq!(fired, vec![EngineEvent::TimerElapsed { timer: 2 }]);
}

#[tokio::test(start_paused = true)]
async fn restarting_a_timer_replaces_its_deadline() {
    let (tx, rx) = mpsc::channel();
    let timers = TimerService::new(Handle::current(), tx);

    timers.start(3, Duration::from_millis(100));
    timers.start(3, Duration::from_millis(300));

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(rx.try_recv().is_err());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(rx.try_recv(), Ok(EngineEvent::TimerElapsed { timer: 3 }));
}
