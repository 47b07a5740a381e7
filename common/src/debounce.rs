//! Debounce gate: coalesces bursts of triggers into a single delayed call.
//!
//! The gate owns at most one armed timer. Scheduling again cancels the
//! pending timer and arms a fresh one with the same delay, so only the most
//! recently scheduled callback can ever run. Dropping the gate cancels
//! whatever is still pending.

use std::{cell::Cell, rc::Rc, time::Duration};


/// Handle to a one-shot timer armed by a [`TimerDriver`].
pub trait TimerHandle {
    fn cancel(self);
}

/// Arms one-shot timers on whatever event loop the caller runs on.
pub trait TimerDriver {
    type Handle: TimerHandle;

    fn arm(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) -> Self::Handle;
}

struct PendingTimer<H> {
    generation: u64,
    handle: H,
}

pub struct DebounceGate<D: TimerDriver> {
    driver: D,
    delay: Duration,
    // generation of the schedule allowed to fire, 0 when nothing is armed
    live_generation: Rc<Cell<u64>>,
    next_generation: u64,
    pending: Option<PendingTimer<D::Handle>>,
}

impl<D: TimerDriver> DebounceGate<D> {
    pub fn new(driver: D, delay: Duration) -> Self {
        Self {
            driver,
            delay,
            live_generation: Rc::new(Cell::new(0)),
            next_generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_armed(&self) -> bool {
        self.live_generation.get() != 0
    }

    /// Arms the gate with `callback`, superseding any callback still waiting.
    pub fn schedule(&mut self, callback: impl FnOnce() + 'static) {
        self.cancel();
        self.next_generation += 1;
        let generation = self.next_generation;
        self.live_generation.set(generation);

        let live_generation = self.live_generation.clone();
        let handle = self.driver.arm(self.delay, Box::new(move || {
            // a driver that could not cancel in time must not run a stale callback
            if live_generation.get() != generation {
                return;
            }
            live_generation.set(0);
            callback();
        }));
        tracing::trace!("debounce gate armed (generation {generation}, delay {:?})", self.delay);
        self.pending = Some(PendingTimer { generation, handle });
    }

    /// Cancels the pending callback. Returns whether one was still waiting.
    pub fn cancel(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let was_live = self.live_generation.get() == pending.generation;
        self.live_generation.set(0);
        if was_live {
            pending.handle.cancel();
        }
        was_live
    }
}

impl<D: TimerDriver> Drop for DebounceGate<D> {
    fn drop(&mut self) {
        self.cancel();
    }
}




#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::{DebounceGate, manual_timer::ManualTimer};

    const DELAY: Duration = Duration::from_millis(400);

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) -> Box<dyn FnOnce()>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let make = move |value: u32| {
            let sink = sink.clone();
            Box::new(move || sink.borrow_mut().push(value)) as Box<dyn FnOnce()>
        };
        (calls, make)
    }

    #[test]
    fn fires_once_after_the_quiet_period() {
        let timer = ManualTimer::default();
        let mut gate = DebounceGate::new(timer.clone(), DELAY);
        let (calls, make) = recorder();

        gate.schedule(make(1));
        assert!(gate.is_armed());
        timer.advance(Duration::from_millis(399));
        assert!(calls.borrow().is_empty());
        timer.advance(Duration::from_millis(1));
        assert_eq!(*calls.borrow(), vec![1]);
        assert!(!gate.is_armed());
    }

    #[test]
    fn burst_collapses_to_the_last_callback() {
        let timer = ManualTimer::default();
        let mut gate = DebounceGate::new(timer.clone(), DELAY);
        let (calls, make) = recorder();

        for value in 0..5 {
            gate.schedule(make(value));
            timer.advance(Duration::from_millis(100));
        }
        assert!(calls.borrow().is_empty());
        assert_eq!(timer.armed_count(), 1);

        timer.advance(Duration::from_millis(300));
        assert_eq!(*calls.borrow(), vec![4]);

        timer.advance(Duration::from_secs(5));
        assert_eq!(*calls.borrow(), vec![4]);
    }

    #[test]
    fn rescheduling_restarts_the_delay() {
        let timer = ManualTimer::default();
        let mut gate = DebounceGate::new(timer.clone(), DELAY);
        let (calls, make) = recorder();

        gate.schedule(make(1));
        timer.advance(Duration::from_millis(350));
        gate.schedule(make(2));
        timer.advance(Duration::from_millis(350));
        assert!(calls.borrow().is_empty());
        timer.advance(Duration::from_millis(50));
        assert_eq!(*calls.borrow(), vec![2]);
    }

    #[test]
    fn separate_bursts_fire_separately() {
        let timer = ManualTimer::default();
        let mut gate = DebounceGate::new(timer.clone(), DELAY);
        let (calls, make) = recorder();

        gate.schedule(make(1));
        timer.advance(Duration::from_millis(500));
        gate.schedule(make(2));
        timer.advance(Duration::from_millis(500));
        assert_eq!(*calls.borrow(), vec![1, 2]);
    }

    #[test]
    fn cancel_reports_pending_state() {
        let timer = ManualTimer::default();
        let mut gate = DebounceGate::new(timer.clone(), DELAY);
        let (calls, make) = recorder();

        assert!(!gate.cancel());
        gate.schedule(make(1));
        assert!(gate.cancel());
        assert_eq!(timer.armed_count(), 0);
        timer.advance(Duration::from_secs(1));
        assert!(calls.borrow().is_empty());

        gate.schedule(make(2));
        timer.advance(Duration::from_secs(1));
        // already fired, nothing left to cancel
        assert!(!gate.cancel());
        assert_eq!(*calls.borrow(), vec![2]);
    }

    #[test]
    fn teardown_cancels_pending_timer() {
        let timer = ManualTimer::default();
        let (calls, make) = recorder();
        {
            let mut gate = DebounceGate::new(timer.clone(), DELAY);
            gate.schedule(make(1));
        }
        assert_eq!(timer.armed_count(), 0);
        timer.advance(Duration::from_secs(1));
        assert!(calls.borrow().is_empty());
    }
}
