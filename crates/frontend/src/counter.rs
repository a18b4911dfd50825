//! Counter state.
//!
//! The counter is the only mutable state in the UI. It lives in a
//! `use_reducer` hook so each click dispatches exactly one
//! [`CounterAction::Increment`], applied in order.

use std::fmt;
use std::rc::Rc;

use yew::prelude::*;

/// Click counter, starting at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Counter {
    value: u64,
}

impl Counter {
    /// A fresh counter, as created on mount.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Add one. Saturates at `u64::MAX`.
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Count is {}", self.value)
    }
}

/// Actions accepted by the counter reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
}

impl Reducible for Counter {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CounterAction::Increment => next.increment(),
        }
        log::debug!("counter {:?} -> {}", action, next.value);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch_n(counter: Rc<Counter>, n: usize) -> Rc<Counter> {
        (0..n).fold(counter, |c, _| c.reduce(CounterAction::Increment))
    }

    #[test]
    fn test_starts_at_zero() {
        let counter = Counter::new();

        assert_eq!(counter.value(), 0);
        assert_eq!(counter.to_string(), "Count is 0");
    }

    #[test]
    fn test_three_clicks() {
        let counter = dispatch_n(Rc::new(Counter::new()), 3);

        assert_eq!(counter.value(), 3);
        assert_eq!(counter.to_string(), "Count is 3");
    }

    #[test]
    fn test_value_equals_clicks() {
        for n in [0usize, 1, 2, 10, 250] {
            let counter = dispatch_n(Rc::new(Counter::new()), n);
            assert_eq!(counter.value(), n as u64);
        }
    }

    #[test]
    fn test_strictly_monotonic() {
        let mut counter = Rc::new(Counter::new());
        for _ in 0..50 {
            let before = counter.value();
            counter = counter.reduce(CounterAction::Increment);
            assert_eq!(counter.value(), before + 1);
        }
    }

    #[test]
    fn test_reduce_does_not_touch_previous_state() {
        let before = Rc::new(Counter::new());
        let after = before.clone().reduce(CounterAction::Increment);

        assert_eq!(before.value(), 0);
        assert_eq!(after.value(), 1);
        assert!(after > before);
    }

    #[test]
    fn test_increment_saturates() {
        let mut counter = Counter { value: u64::MAX };
        counter.increment();

        assert_eq!(counter.value(), u64::MAX);
    }
}
