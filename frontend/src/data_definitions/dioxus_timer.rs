//! Timer driver for the debounce gate, backed by Dioxus tasks.

use std::time::Duration;

use common::debounce::{TimerDriver, TimerHandle};
use dioxus::core::Task;
use dioxus::prelude::*;

/// Arms timers as tasks of the current scope, so they also die with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DioxusTimer;

pub struct DioxusTimeout(Task);

impl TimerHandle for DioxusTimeout {
    fn cancel(self) {
        self.0.cancel();
    }
}

impl TimerDriver for DioxusTimer {
    type Handle = DioxusTimeout;

    fn arm(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) -> DioxusTimeout {
        DioxusTimeout(spawn(async move {
            sleep(delay).await;
            callback();
        }))
    }
}

// browser timers only exist on wasm; desktop, mobile and server run on tokio
#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}


#[cfg(test)]
mod tests {
    use std::{cell::Cell, time::Duration};

    use common::debounce::{TimerDriver, TimerHandle};
    use dioxus::core::VirtualDom;
    use dioxus::prelude::*;

    use super::DioxusTimer;

    thread_local! {
        static ARMED_FIRED: Cell<bool> = const { Cell::new(false) };
        static CANCELLED_FIRED: Cell<bool> = const { Cell::new(false) };
    }

    const DELAY: Duration = Duration::from_millis(20);

    fn ArmsTimer() -> Element {
        use_hook(|| {
            DioxusTimer.arm(DELAY, Box::new(|| ARMED_FIRED.with(|fired| fired.set(true))));
        });
        rsx! {}
    }

    fn ArmsAndCancelsTimer() -> Element {
        use_hook(|| {
            let handle = DioxusTimer.arm(DELAY, Box::new(|| CANCELLED_FIRED.with(|fired| fired.set(true))));
            handle.cancel();
        });
        rsx! {}
    }

    /// Polls the dom's tasks for a while; nothing here ever marks a scope dirty.
    async fn run_tasks(dom: &mut VirtualDom, for_how_long: Duration) {
        let _ = tokio::time::timeout(for_how_long, dom.wait_for_work()).await;
    }

    #[tokio::test]
    async fn native_timer_fires_after_delay() {
        let mut dom = VirtualDom::new(ArmsTimer);
        dom.rebuild_in_place();
        assert!(!ARMED_FIRED.with(|fired| fired.get()));

        run_tasks(&mut dom, Duration::from_millis(300)).await;
        assert!(ARMED_FIRED.with(|fired| fired.get()));
    }

    #[tokio::test]
    async fn cancelled_native_timer_never_fires() {
        let mut dom = VirtualDom::new(ArmsAndCancelsTimer);
        dom.rebuild_in_place();

        run_tasks(&mut dom, Duration::from_millis(300)).await;
        assert!(!CANCELLED_FIRED.with(|fired| fired.get()));
    }
}
