//! Navigation interaction-state channel
//!
//! A process-wide boolean flag (navigation overlay open/closed) with exactly
//! one writer and any number of observers. Observers are notified
//! synchronously, inside the call that performed the write, so no frame can
//! render a stale styling decision in between.
//!
//! This replaces ambient-global coupling (a DOM attribute watched by a
//! mutation observer in the old implementation) with an explicit
//! publish-subscribe handle that components receive at construction.
//!
//! ```ignore
//! let channel = NavChannel::new();
//! let toggle = channel.take_writer().unwrap();
//!
//! let sub = channel.subscribe(|state| {
//!     // restyle for the overlay
//! });
//!
//! toggle.set(NavState::Open); // subscriber runs before this returns
//! drop(sub);                  // unsubscribes
//! ```

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Handle to one registered observer
    pub struct SubscriptionId;
}

/// Navigation overlay state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    pub fn is_open(self) -> bool {
        matches!(self, NavState::Open)
    }

    pub fn toggled(self) -> NavState {
        match self {
            NavState::Closed => NavState::Open,
            NavState::Open => NavState::Closed,
        }
    }
}

type Observer = Arc<Mutex<dyn FnMut(NavState) + Send>>;

struct ChannelInner {
    state: NavState,
    observers: SlotMap<SubscriptionId, Observer>,
    writer_taken: bool,
}

/// Shared navigation-state channel
///
/// Cloning shares the underlying channel. The channel outlives any single
/// observer; dropping a [`NavSubscription`] only removes that observer.
#[derive(Clone)]
pub struct NavChannel {
    inner: Arc<Mutex<ChannelInner>>,
}

impl NavChannel {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ChannelInner {
                state: NavState::Closed,
                observers: SlotMap::with_key(),
                writer_taken: false,
            })),
        }
    }

    /// Current state snapshot
    ///
    /// Observers should prefer transition notifications over sampling; this
    /// exists for components that mount after the overlay already opened.
    pub fn state(&self) -> NavState {
        self.inner.lock().unwrap().state
    }

    /// Claim the single writer handle
    ///
    /// Returns `None` if the writer was already taken. The navigation
    /// overlay toggle is the only component that should hold this.
    pub fn take_writer(&self) -> Option<NavWriter> {
        let mut inner = self.inner.lock().unwrap();
        if inner.writer_taken {
            tracing::warn!("NavChannel writer already taken; second claim refused");
            return None;
        }
        inner.writer_taken = true;
        Some(NavWriter {
            inner: Arc::clone(&self.inner),
        })
    }

    /// Register an observer for state transitions
    ///
    /// The observer runs on every transition (not on registration) until
    /// the returned subscription is dropped.
    pub fn subscribe<F>(&self, observer: F) -> NavSubscription
    where
        F: FnMut(NavState) + Send + 'static,
    {
        let id = self
            .inner
            .lock()
            .unwrap()
            .observers
            .insert(Arc::new(Mutex::new(observer)));
        NavSubscription {
            inner: Arc::clone(&self.inner),
            id,
        }
    }

    /// Number of live observers (diagnostics and leak tests)
    pub fn observer_count(&self) -> usize {
        self.inner.lock().unwrap().observers.len()
    }
}

impl Default for NavChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// The unique writer half of a [`NavChannel`]
pub struct NavWriter {
    inner: Arc<Mutex<ChannelInner>>,
}

impl NavWriter {
    /// Write a new state, notifying every observer before returning
    ///
    /// Writing the current state is a no-op: observers react to
    /// transitions, not to repeated assignments.
    pub fn set(&self, state: NavState) {
        // Snapshot observers under the lock, invoke them outside it, so an
        // observer may call back into the channel without deadlock.
        let observers: Vec<Observer> = {
            let mut inner = self.inner.lock().unwrap();
            if inner.state == state {
                return;
            }
            inner.state = state;
            inner.observers.values().map(Arc::clone).collect()
        };

        for observer in observers {
            (observer.lock().unwrap())(state);
        }
    }

    /// Flip between open and closed
    pub fn toggle(&self) -> NavState {
        let next = self.inner.lock().unwrap().state.toggled();
        self.set(next);
        next
    }
}

/// Observer registration guard; dropping it unsubscribes
pub struct NavSubscription {
    inner: Arc<Mutex<ChannelInner>>,
    id: SubscriptionId,
}

impl NavSubscription {
    /// Explicitly cancel the subscription (same as dropping)
    pub fn cancel(self) {}
}

impl Drop for NavSubscription {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.observers.remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_single_writer() {
        let channel = NavChannel::new();
        assert!(channel.take_writer().is_some());
        assert!(channel.take_writer().is_none());
    }

    #[test]
    fn test_synchronous_notification() {
        let channel = NavChannel::new();
        let writer = channel.take_writer().unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let _sub = channel.subscribe(move |state| {
            seen_clone.lock().unwrap().push(state);
        });

        writer.set(NavState::Open);
        // Observer ran inside set(), before this line.
        assert_eq!(*seen.lock().unwrap(), vec![NavState::Open]);

        writer.set(NavState::Closed);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![NavState::Open, NavState::Closed]
        );
    }

    #[test]
    fn test_no_notification_without_transition() {
        let channel = NavChannel::new();
        let writer = channel.take_writer().unwrap();

        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        let _sub = channel.subscribe(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        writer.set(NavState::Closed); // Already closed
        assert_eq!(count.load(Ordering::SeqCst), 0);

        writer.set(NavState::Open);
        writer.set(NavState::Open);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let channel = NavChannel::new();
        let writer = channel.take_writer().unwrap();

        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        let sub = channel.subscribe(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(channel.observer_count(), 1);
        drop(sub);
        assert_eq!(channel.observer_count(), 0);

        writer.set(NavState::Open);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_toggle_round_trip() {
        let channel = NavChannel::new();
        let writer = channel.take_writer().unwrap();

        assert_eq!(writer.toggle(), NavState::Open);
        assert_eq!(channel.state(), NavState::Open);
        assert_eq!(writer.toggle(), NavState::Closed);
        assert_eq!(channel.state(), NavState::Closed);
    }

    #[test]
    fn test_state_persists_across_observer_lifetimes() {
        let channel = NavChannel::new();
        let writer = channel.take_writer().unwrap();

        {
            let _sub = channel.subscribe(|_| {});
            writer.set(NavState::Open);
        }
        // Observer is gone; state is not.
        assert_eq!(channel.state(), NavState::Open);
    }
}
