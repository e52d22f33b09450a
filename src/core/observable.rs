//! Observable value holder with drop-based unsubscription
//!
//! ```rust
//! use boostlyx::core::observable::Observable;
//!
//! let scrolled = Observable::new(false);
//! let subscription = scrolled.subscribe(|value| println!("scrolled: {}", value));
//!
//! scrolled.set(true); // notifies
//! scrolled.set(true); // unchanged, no notification
//! drop(subscription); // listener removed
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// A value whose changes are pushed to subscribers
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Default + Clone + PartialEq + Send + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

fn lock<T>(inner: &Mutex<Inner<T>>) -> MutexGuard<'_, Inner<T>> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T: Clone + PartialEq + Send + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        lock(&self.inner).value.clone()
    }

    /// Store `value`; listeners run only if it differs from the current one.
    ///
    /// Returns whether the value changed.
    pub fn set(&self, value: T) -> bool {
        let listeners: Vec<Listener<T>> = {
            let mut inner = lock(&self.inner);
            if inner.value == value {
                return false;
            }
            inner.value = value.clone();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };

        // Outside the lock so listeners may read or subscribe
        for listener in listeners {
            listener(&value);
        }
        true
    }

    /// Register `listener`; it stays registered until the subscription drops
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::new(listener)));
            id
        };

        let weak: Weak<Mutex<Inner<T>>> = Arc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    lock(&inner).listeners.retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

/// Handle of a registered listener; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Unsubscribe now
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn(&bool) + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = count.clone();
        (count, move |_: &bool| {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_notifies_only_on_change() {
        let value = Observable::new(false);
        let (count, listener) = counter();
        let _sub = value.subscribe(listener);

        assert!(value.set(true));
        assert!(!value.set(true));
        assert!(value.set(false));

        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(!value.get());
    }

    #[test]
    fn test_drop_unsubscribes() {
        let value = Observable::new(0u32);
        let sub = value.subscribe(|_| {});
        assert_eq!(value.subscriber_count(), 1);

        drop(sub);

        assert_eq!(value.subscriber_count(), 0);
    }

    #[test]
    fn test_cancel_unsubscribes() {
        let value = Observable::new(false);
        let (count, listener) = counter();
        let sub = value.subscribe(listener);

        sub.cancel();
        value.set(true);

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_subscription_outliving_observable() {
        let value = Observable::new(false);
        let sub = value.subscribe(|_| {});
        drop(value);
        drop(sub);
    }

    #[test]
    fn test_listener_can_read_value() {
        let value = Observable::new(1u32);
        let seen = Arc::new(AtomicUsize::new(0));
        let reader = value.clone();
        let seen_inner = seen.clone();
        let _sub = value.subscribe(move |v| {
            assert_eq!(reader.get(), *v);
            seen_inner.store(*v as usize, Ordering::SeqCst);
        });

        value.set(7);

        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }
}
