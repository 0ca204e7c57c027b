//! Tests for Counter

use super::*;
use std::sync::Arc;

#[test]
fn test_counter_starts_at_zero() {
    let counter = Counter::new();
    assert_eq!(counter.get(), 0);
}

#[test]
fn test_counter_incr() {
    let counter = Counter::new();
    counter.inc();
    counter.incr(4);
    assert_eq!(counter.get(), 5);
}

#[test]
fn test_counter_take_resets() {
    let counter = Counter::new();
    counter.incr(3);
    assert_eq!(counter.take(), 3);
    assert_eq!(counter.get(), 0);
}

#[test]
fn test_counter_concurrent_increments() {
    let counter = Arc::new(Counter::new());

    std::thread::scope(|s| {
        for _ in 0..8 {
            let counter = Arc::clone(&counter);
            s.spawn(move || {
                for _ in 0..1000 {
                    counter.inc();
                }
            });
        }
    });

    assert_eq!(counter.get(), 8000);
}
