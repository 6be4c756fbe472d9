use rinkboard::config::Config;
use rinkboard::core::rate_limit::{ManualClock, SlidingWindowLimiter};
use std::time::Duration;

#[test]
fn test_allows_up_to_max_then_rejects() {
    let clock = ManualClock::new(0);
    let mut limiter = SlidingWindowLimiter::new(3, Duration::from_secs(60), &clock);

    for left in [2, 1, 0] {
        let d = limiter.check("admin");
        assert!(d.success);
        assert_eq!(d.remaining, left);
    }

    let rejected = limiter.check("admin");
    assert!(!rejected.success);
    assert_eq!(rejected.remaining, 0);
    assert_eq!(rejected.reset_ms, 60_000);
}

#[test]
fn test_window_slides_as_old_calls_expire() {
    let clock = ManualClock::new(0);
    let mut limiter = SlidingWindowLimiter::new(2, Duration::from_secs(10), &clock);

    assert!(limiter.check("k").success); // t=0
    clock.advance(Duration::from_secs(4));
    assert!(limiter.check("k").success); // t=4
    clock.advance(Duration::from_secs(3));
    let blocked = limiter.check("k"); // t=7
    assert!(!blocked.success);
    assert_eq!(blocked.reset_ms, 3_000);

    clock.set(10_000);
    // the t=0 call has left the window, the t=4 one has not
    let d = limiter.check("k");
    assert!(d.success);
    assert_eq!(d.remaining, 0);
}

#[test]
fn test_rejected_calls_are_not_recorded() {
    let clock = ManualClock::new(1_000);
    let mut limiter = SlidingWindowLimiter::new(1, Duration::from_secs(5), &clock);

    assert!(limiter.check("k").success);
    for _ in 0..10 {
        clock.advance(Duration::from_millis(400));
        assert!(!limiter.check("k").success);
    }

    // 5s after the only accepted call the key is free again
    clock.set(6_000);
    assert!(limiter.check("k").success);
}

#[test]
fn test_keys_are_independent() {
    let clock = ManualClock::new(0);
    let mut limiter = SlidingWindowLimiter::new(1, Duration::from_secs(60), &clock);

    assert!(limiter.check("marko").success);
    assert!(!limiter.check("marko").success);
    assert!(limiter.check("jelena").success);
}

#[test]
fn test_cleanup_drops_idle_keys() {
    let clock = ManualClock::new(0);
    let mut limiter = SlidingWindowLimiter::new(5, Duration::from_secs(1), &clock);

    limiter.check("a");
    limiter.check("b");
    assert_eq!(limiter.tracked_keys(), 2);

    clock.advance(Duration::from_secs(2));
    limiter.cleanup();
    assert_eq!(limiter.tracked_keys(), 0);
}

#[test]
fn test_automatic_cleanup_runs_every_n_checks() {
    let clock = ManualClock::new(0);
    let mut limiter =
        SlidingWindowLimiter::new(5, Duration::from_secs(1), &clock).with_cleanup_every(3);

    limiter.check("a");
    limiter.check("b");
    clock.advance(Duration::from_secs(2));

    // third check triggers cleanup of a and b before c is recorded
    limiter.check("c");
    assert_eq!(limiter.tracked_keys(), 1);
}

#[test]
fn test_limiter_from_config() {
    let cfg = Config {
        rate_limit_max: 2,
        ..Config::default()
    };
    let mut limiter = cfg.rate_limiter();

    assert!(limiter.check("admin").success);
    assert!(limiter.check("admin").success);
    assert!(!limiter.check("admin").success);
}
