// Host-side tests for the redraw scheduler.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scheduler {
    include!("../src/core/scheduler.rs");
}

use scheduler::RedrawScheduler;

#[test]
fn burst_of_changes_requests_one_frame() {
    let mut s = RedrawScheduler::new();
    assert!(s.request());
    for _ in 0..10 {
        assert!(!s.request());
    }
    s.frame_requested(42);
    assert!(s.begin_frame());
    assert_eq!(s.frames_rendered(), 1);
}

#[test]
fn frame_does_not_rearm_itself() {
    let mut s = RedrawScheduler::new();
    s.request();
    s.frame_requested(1);
    assert!(s.begin_frame());
    // a second callback without a new request does nothing
    assert!(!s.begin_frame());
    assert_eq!(s.frames_rendered(), 1);
}

#[test]
fn change_during_pass_schedules_another_frame() {
    let mut s = RedrawScheduler::new();
    s.request();
    s.frame_requested(1);
    assert!(s.begin_frame());
    assert!(s.request());
    s.frame_requested(2);
    assert!(s.begin_frame());
    assert_eq!(s.frames_rendered(), 2);
}

#[test]
fn cancel_returns_handle_and_skips_stale_callback() {
    let mut s = RedrawScheduler::new();
    s.request();
    s.frame_requested(9);
    assert_eq!(s.cancel(), Some(9));
    assert!(!s.begin_frame());
    assert_eq!(s.frames_rendered(), 0);
    // scheduling works again afterwards
    assert!(s.request());
}

#[test]
fn cancel_without_outstanding_frame() {
    let mut s = RedrawScheduler::new();
    assert_eq!(s.cancel(), None);
    s.request();
    assert_eq!(s.cancel(), None);
}

#[test]
fn handle_ignored_when_nothing_pending() {
    let mut s = RedrawScheduler::new();
    s.frame_requested(3);
    assert_eq!(s.cancel(), None);
}
