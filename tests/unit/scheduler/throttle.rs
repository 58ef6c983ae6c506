use super::*;

fn t(ms: f64) -> HostTime {
    HostTime::from_millis(ms)
}

#[test]
fn throttle_requires_strictly_more_than_interval() {
    let mut th = Throttle::new(10.0, t(0.0));
    assert!(!th.try_acquire(t(5.0)));
    assert!(!th.try_acquire(t(10.0)));
    assert!(th.try_acquire(t(10.5)));
    assert_eq!(th.last(), t(10.5));
}

#[test]
fn two_calls_within_window_pass_once() {
    let mut th = Throttle::new(10.0, t(0.0));
    assert!(th.try_acquire(t(100.0)));
    assert!(!th.try_acquire(t(109.0)));
    assert!(th.try_acquire(t(111.0)));
}

#[test]
fn interval_fires_once_per_period() {
    let mut iv = Interval::new(5_000.0, t(0.0));
    assert!(!iv.poll(t(4_999.0)));
    assert!(iv.poll(t(5_000.0)));
    assert!(!iv.poll(t(6_000.0)));
    assert!(iv.poll(t(10_500.0)));
    assert!(!iv.poll(t(15_000.0)));
    assert!(iv.poll(t(15_500.0)));
}
