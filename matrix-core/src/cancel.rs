//! Abbruch-Signal für alle Engine-Tasks
//!
//! Ein `CancelToken` wechselt genau einmal von "offen" auf "ausgelöst"
//! und wird nie zurückgesetzt. Beliebig viele Tasks können es abfragen
//! oder darauf warten.

use core::cell::RefCell;
use core::future::poll_fn;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::Poll;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::waitqueue::MultiWakerRegistration;

/// Maximale Anzahl gleichzeitig wartender Tasks
/// Bei Überlauf werden alle geweckt und registrieren sich neu.
const MAX_WAITERS: usize = 8;

pub struct CancelToken {
    fired: AtomicBool,
    waiters: Mutex<CriticalSectionRawMutex, RefCell<MultiWakerRegistration<MAX_WAITERS>>>,
}

impl CancelToken {
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
            waiters: Mutex::new(RefCell::new(MultiWakerRegistration::new())),
        }
    }

    /// Löst das Token aus und weckt alle Wartenden. Mehrfacher Aufruf ist harmlos.
    pub fn cancel(&self) {
        if !self.fired.swap(true, Ordering::AcqRel) {
            self.waiters.lock(|waiters| waiters.borrow_mut().wake());
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Wartet bis das Token ausgelöst wurde
    pub async fn cancelled(&self) {
        poll_fn(|cx| {
            if self.is_cancelled() {
                return Poll::Ready(());
            }
            self.waiters
                .lock(|waiters| waiters.borrow_mut().register(cx.waker()));
            // Erneut prüfen: cancel() kann zwischen Load und Register gelaufen sein
            if self.is_cancelled() {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        })
        .await
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
