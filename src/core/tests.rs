#[cfg(test)]
mod tests {
    use crate::core::content::{PRICING_TIERS, featured_flags};
    use crate::core::menu::{MobileMenu, ScrollLock};
    use crate::core::scroll::{Sample, SampleThrottle, ScrollState};
    use crate::core::section::{
        Align, ButtonSpec, RevealTarget, SectionConfig, TextBlock, WidthMode,
    };
    use crate::core::typewriter::{HERO_TYPING_INTERVAL_MS, RevealTask, TaskState};
    use crate::core::viewport::ViewportState;
    use crate::core::{Language, Selector, SiteRoute, ThemeChoice};
    use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedLock(Arc<AtomicI32>);

    impl ScrollLock for SharedLock {
        fn lock(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }

        fn unlock(&mut self) {
            self.0.fetch_sub(1, Ordering::SeqCst);
        }
    }

    /// Header wiring: viewport flips drive the menu through a subscription
    #[test]
    fn test_header_closes_menu_when_leaving_mobile() {
        let lock = SharedLock::default();
        let menu = Arc::new(Mutex::new(MobileMenu::new(lock.clone())));
        let viewport = ViewportState::new();

        let sink = menu.clone();
        let subscription = viewport.subscribe(move |is_mobile| {
            if let Ok(mut menu) = sink.lock() {
                menu.on_viewport_change(is_mobile);
            }
        });

        viewport.observe_width(600.0);
        menu.lock().unwrap().toggle();
        assert_eq!(lock.0.load(Ordering::SeqCst), 1);

        viewport.observe_width(1440.0);
        assert!(!menu.lock().unwrap().is_open());
        assert_eq!(lock.0.load(Ordering::SeqCst), 0);

        // Unmount: subscription released, menu dropped
        drop(subscription);
        viewport.observe_width(500.0);
        drop(menu);
        assert_eq!(lock.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unmount_with_open_menu_releases_lock() {
        let lock = SharedLock::default();
        let mut menu = MobileMenu::new(lock.clone());
        menu.open();
        menu.toggle();
        menu.toggle();

        drop(menu);

        assert_eq!(lock.0.load(Ordering::SeqCst), 0);
    }

    /// A scroll burst through the throttle settles on the final position
    #[test]
    fn test_throttled_scroll_observes_settled_position() {
        let state = ScrollState::new();
        let mut throttle = SampleThrottle::new();
        let compact = Arc::new(AtomicBool::new(false));
        let sink = compact.clone();
        let _sub = state.subscribe(move |scrolled| sink.store(scrolled, Ordering::SeqCst));

        // (time, offset) pairs of a fast scroll down that stops at 240px
        let events = [(0.0, 0.0), (16.0, 4.0), (32.0, 30.0), (48.0, 120.0), (64.0, 240.0)];
        let mut trailing_at = None;
        for (now, offset) in events {
            match throttle.offer(now) {
                Sample::Now => {
                    state.observe(offset);
                }
                Sample::Schedule(wait) => trailing_at = Some(now + wait as f64),
                Sample::AlreadyScheduled => {}
            }
        }

        // Only the leading sample has run so far
        assert!(!state.is_scrolled());

        let at = trailing_at.unwrap();
        assert_eq!(at, 100.0);
        throttle.complete_trailing(at);
        state.observe(240.0);

        assert!(state.is_scrolled());
        assert!(compact.load(Ordering::SeqCst));
    }

    /// Interval T over "Hi": "H" at T, "Hi" at 2T, finished at 3T
    #[test]
    fn test_typewriter_timeline() {
        let mut task = RevealTask::start("Hi");
        let mut timeline = Vec::new();

        for tick in 1..=4u64 {
            let now = tick * HERO_TYPING_INTERVAL_MS;
            let shown = task.tick().map(str::to_string);
            timeline.push((now, shown, task.visible().to_string()));
            if !task.is_running() {
                break;
            }
        }

        assert_eq!(
            timeline,
            vec![
                (41, Some("H".to_string()), "H".to_string()),
                (82, Some("Hi".to_string()), "Hi".to_string()),
                (123, None, "Hi".to_string()),
            ]
        );
        assert_eq!(task.state(), TaskState::Finished);
    }

    #[test]
    fn test_remount_restarts_typewriter() {
        let mut first = RevealTask::start("Premium");
        first.tick();
        first.tick();
        first.cancel();

        let mut second = RevealTask::start("Premium");
        assert_eq!(second.visible(), "");
        assert_eq!(second.tick(), Some("P"));
        assert_eq!(first.tick(), None);
    }

    #[test]
    fn test_public_paths_never_render_home() {
        for path in ["/public", "/public/anything", "/public/logos/x.svg"] {
            let route = SiteRoute::resolve(path);
            assert_ne!(route, SiteRoute::Home);
            assert_eq!(route.status_code(), 403);
        }
    }

    #[test]
    fn test_two_popular_tiers_one_badge() {
        let mut tiers = PRICING_TIERS;
        tiers[0].popular = true;

        let flags = featured_flags(&tiers);

        assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        assert!(flags[0]);
    }

    #[test]
    fn test_section_built_from_strings() {
        let align: Align = "right".parse().unwrap();
        let width: WidthMode = "full".parse().unwrap();
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();

        let config = SectionConfig::new()
            .align(align)
            .width(width)
            .title(TextBlock::new("Pick Your").with_accent("Power-Up", "text-[#ffac33]"))
            .subtitle(TextBlock::new("Choose the perfect boost for your growth journey"))
            .button(ButtonSpec::primary("Go").on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .button(ButtonSpec::secondary("Later"));

        assert!(config.column_classes().ends_with("text-right items-end"));
        assert!(config.container_classes().ends_with("w-full"));
        assert_eq!(config.button_group_classes(), "flex space-x-4 mt-8");

        let plan = config.reveal_plan();
        assert_eq!(plan.transition(RevealTarget::Title).delay_ms, 100);
        assert_eq!(plan.transition(RevealTarget::Subtitle).delay_ms, 200);
        assert_eq!(plan.transition(RevealTarget::Buttons).delay_ms, 300);

        config.buttons.iter().for_each(ButtonSpec::click);
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_footer_selectors_are_independent() {
        let mut language = Selector::<Language>::new();
        let theme = Selector::<ThemeChoice>::new();

        language.select(Language::Espanol);

        assert_eq!(language.selected().to_string(), "Español");
        assert_eq!(theme.selected(), ThemeChoice::Light);
    }
}
