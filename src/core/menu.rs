//! Mobile navigation menu and its body scroll lock
//!
//! While the full-screen menu is open the page behind it must not scroll.
//! [`MobileMenu`] owns a [`ScrollLock`] and keeps acquire/release strictly
//! paired: every open locks once, every close (including drop) unlocks once.

/// Something that can stop the page from scrolling
pub trait ScrollLock {
    fn lock(&mut self);
    fn unlock(&mut self);
}

/// Open/closed state of the mobile menu
#[derive(Debug)]
pub struct MobileMenu<L: ScrollLock> {
    open: bool,
    lock: L,
}

impl<L: ScrollLock> MobileMenu<L> {
    pub fn new(lock: L) -> Self {
        Self { open: false, lock }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.lock.lock();
        tracing::debug!("mobile menu opened");
    }

    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.lock.unlock();
        tracing::debug!("mobile menu closed");
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// The viewport changed; leaving the mobile layout closes the menu
    pub fn on_viewport_change(&mut self, is_mobile: bool) {
        if !is_mobile {
            self.close();
        }
    }
}

impl<L: ScrollLock> Drop for MobileMenu<L> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI32, Ordering};

    /// Counts lock depth so unbalanced calls show up as a non-zero value
    #[derive(Debug, Clone, Default)]
    struct CountingLock(Arc<AtomicI32>);

    impl ScrollLock for CountingLock {
        fn lock(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }

        fn unlock(&mut self) {
            self.0.fetch_sub(1, Ordering::SeqCst);
        }
    }

    impl CountingLock {
        fn depth(&self) -> i32 {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn test_open_close_cycles_restore_lock() {
        let lock = CountingLock::default();
        let mut menu = MobileMenu::new(lock.clone());

        for _ in 0..5 {
            menu.open();
            assert_eq!(lock.depth(), 1);
            menu.close();
            assert_eq!(lock.depth(), 0);
        }
    }

    #[test]
    fn test_repeated_open_locks_once() {
        let lock = CountingLock::default();
        let mut menu = MobileMenu::new(lock.clone());

        menu.open();
        menu.open();
        assert_eq!(lock.depth(), 1);

        menu.close();
        menu.close();
        assert_eq!(lock.depth(), 0);
    }

    #[test]
    fn test_toggle() {
        let lock = CountingLock::default();
        let mut menu = MobileMenu::new(lock.clone());

        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(lock.depth(), 0);
    }

    #[test]
    fn test_drop_while_open_releases_lock() {
        let lock = CountingLock::default();
        {
            let mut menu = MobileMenu::new(lock.clone());
            menu.open();
            assert_eq!(lock.depth(), 1);
        }
        assert_eq!(lock.depth(), 0);
    }

    #[test]
    fn test_leaving_mobile_closes_menu() {
        let lock = CountingLock::default();
        let mut menu = MobileMenu::new(lock.clone());
        menu.open();

        menu.on_viewport_change(true);
        assert!(menu.is_open());

        menu.on_viewport_change(false);
        assert!(!menu.is_open());
        assert_eq!(lock.depth(), 0);
    }
}
