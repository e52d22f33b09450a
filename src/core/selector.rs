//! Closed-set option selectors (footer language and theme)
//!
//! The selection is local view state only. Nothing is persisted or applied.

use derive_more::Display;

/// A type with a fixed, ordered list of options
pub trait SelectorOption: Copy + PartialEq + std::fmt::Display + 'static {
    const ALL: &'static [Self];

    /// The option a fresh selector starts with
    fn first() -> Self {
        Self::ALL[0]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum Language {
    #[default]
    #[display("English")]
    English,
    #[display("Español")]
    Espanol,
    #[display("Français")]
    Francais,
}

impl SelectorOption for Language {
    const ALL: &'static [Self] = &[Language::English, Language::Espanol, Language::Francais];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum ThemeChoice {
    #[default]
    #[display("Light")]
    Light,
    #[display("Dark")]
    Dark,
}

impl SelectorOption for ThemeChoice {
    const ALL: &'static [Self] = &[ThemeChoice::Light, ThemeChoice::Dark];
}

/// Current selection among `T::ALL`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selector<T: SelectorOption> {
    selected: T,
}

impl<T: SelectorOption> Selector<T> {
    pub fn new() -> Self {
        Self {
            selected: T::first(),
        }
    }

    pub fn options(&self) -> &'static [T] {
        T::ALL
    }

    pub fn selected(&self) -> T {
        self.selected
    }

    pub fn is_selected(&self, option: T) -> bool {
        self.selected == option
    }

    /// Select `option`; options outside `T::ALL` are rejected
    pub fn select(&mut self, option: T) -> bool {
        if !T::ALL.contains(&option) {
            return false;
        }
        self.selected = option;
        true
    }
}

impl<T: SelectorOption> Default for Selector<T> {
    fn default() -> Self {
        Self::new()
    }
}
