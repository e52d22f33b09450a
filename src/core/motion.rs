//! Declarative animation values
//!
//! Every animated element on the site describes *what* moves with a
//! [`Transition`] and hands it to [`Transition::style`], which turns it into an
//! inline CSS `animation` declaration. The keyframes themselves are emitted once
//! by `ui::motion::MotionStyles`.

use std::fmt::Write;

/// Keyframe name for the fade + vertical slide entrance
pub const FADE_SLIDE_KEYFRAMES: &str = "bx-fade-slide";
/// Keyframe name for the fade + horizontal slide entrance
pub const SLIDE_X_KEYFRAMES: &str = "bx-slide-x";
/// Keyframe name for the plain fade entrance
pub const FADE_KEYFRAMES: &str = "bx-fade";
/// Keyframe name for the scale-in entrance
pub const SCALE_KEYFRAMES: &str = "bx-scale";
/// Keyframe name for the endless floating loop
pub const FLOAT_KEYFRAMES: &str = "bx-float";

/// Timing curve of a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
    /// Spring physics, approximated by an overshooting bezier curve
    Spring { stiffness: f32, damping: f32 },
}

impl Easing {
    /// The "expo out" curve used for all section entrances
    pub const EXPO_OUT: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);

    pub fn css(&self) -> String {
        match *self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            Easing::Spring { stiffness, damping } => {
                let overshoot = spring_overshoot(stiffness, damping);
                format!("cubic-bezier(0.34, {:.2}, 0.64, 1)", 1.0 + overshoot)
            }
        }
    }
}

/// Overshoot of a damped spring, clamped to what a bezier can express.
///
/// Lower damping and higher stiffness both overshoot further.
fn spring_overshoot(stiffness: f32, damping: f32) -> f32 {
    if damping <= 0.0 {
        return 0.6;
    }
    let ratio = damping / (2.0 * stiffness.max(1.0).sqrt());
    (0.6 * (1.0 - ratio)).clamp(0.0, 0.6)
}

/// What an element does while it animates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Rendered in place, no animation
    None,
    /// Fade in while sliding up from `offset_px` below
    FadeSlide { offset_px: i32 },
    /// Fade in while sliding in horizontally from `offset_px`
    SlideX { offset_px: i32 },
    /// Opacity only
    Fade,
    /// Grow from `from` to full size
    Scale { from: f32 },
    /// Bob up by `lift_px` and back, optionally pulsing to `scale`
    Float { lift_px: u32, scale: f32 },
}

/// A declarative animation: motion, timing and curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub motion: Motion,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
    pub repeat: bool,
}

impl Default for Transition {
    fn default() -> Self {
        Self::fade_slide()
    }
}

impl Transition {
    pub const fn new(motion: Motion) -> Self {
        Self {
            motion,
            duration_ms: 600,
            delay_ms: 0,
            easing: Easing::EXPO_OUT,
            repeat: false,
        }
    }

    /// No animation at all
    pub const fn none() -> Self {
        Self::new(Motion::None)
    }

    /// 20px fade + slide up, the default section entrance
    pub const fn fade_slide() -> Self {
        Self::new(Motion::FadeSlide { offset_px: 20 })
    }

    pub const fn fade() -> Self {
        Self::new(Motion::Fade)
    }

    /// Endless 4s float loop
    pub const fn float(lift_px: u32, scale: f32) -> Self {
        Self {
            motion: Motion::Float { lift_px, scale },
            duration_ms: 4000,
            delay_ms: 0,
            easing: Easing::EaseInOut,
            repeat: true,
        }
    }

    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Keyframes driving this transition, `None` for a static element
    pub fn keyframes(&self) -> Option<&'static str> {
        match self.motion {
            Motion::None => None,
            Motion::FadeSlide { .. } => Some(FADE_SLIDE_KEYFRAMES),
            Motion::SlideX { .. } => Some(SLIDE_X_KEYFRAMES),
            Motion::Fade => Some(FADE_KEYFRAMES),
            Motion::Scale { .. } => Some(SCALE_KEYFRAMES),
            Motion::Float { .. } => Some(FLOAT_KEYFRAMES),
        }
    }

    /// Inline style applying this transition.
    ///
    /// Motion parameters travel as CSS custom properties read by the shared
    /// keyframes, so one keyframe set serves every offset and scale.
    pub fn style(&self) -> String {
        let Some(name) = self.keyframes() else {
            return String::new();
        };

        let mut style = String::new();
        match self.motion {
            Motion::FadeSlide { offset_px } => {
                let _ = write!(style, "--bx-offset: {}px; ", offset_px);
            }
            Motion::SlideX { offset_px } => {
                let _ = write!(style, "--bx-offset: {}px; ", offset_px);
            }
            Motion::Scale { from } => {
                let _ = write!(style, "--bx-scale-from: {}; ", from);
            }
            Motion::Float { lift_px, scale } => {
                let _ = write!(style, "--bx-lift: -{}px; --bx-scale: {}; ", lift_px, scale);
            }
            Motion::Fade | Motion::None => {}
        }

        let iterations = if self.repeat { "infinite" } else { "1" };
        let _ = write!(
            style,
            "animation: {} {}ms {} {}ms {} both;",
            name,
            self.duration_ms,
            self.easing.css(),
            self.delay_ms,
            iterations
        );
        style
    }

    /// CSS `transition` declaration for a property change (no keyframes)
    pub fn transition_css(&self, property: &str) -> String {
        format!(
            "transition: {} {}ms {} {}ms;",
            property,
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        )
    }
}

/// `count` copies of `base`, delayed `first_delay_ms`, then `step_ms` apart
pub fn stagger(
    base: Transition,
    first_delay_ms: u32,
    step_ms: u32,
    count: usize,
) -> impl Iterator<Item = Transition> {
    (0..count as u32).map(move |i| base.with_delay(first_delay_ms + i * step_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_transition_has_empty_style() {
        assert_eq!(Transition::none().style(), "");
        assert_eq!(Transition::none().keyframes(), None);
    }

    #[test]
    fn test_fade_slide_style() {
        let style = Transition::fade_slide().with_delay(100).style();

        assert!(style.contains("--bx-offset: 20px;"));
        assert!(style.contains("animation: bx-fade-slide 600ms"));
        assert!(style.contains("cubic-bezier(0.16, 1, 0.3, 1)"));
        assert!(style.contains(" 100ms 1 both;"));
    }

    #[test]
    fn test_float_is_infinite() {
        let style = Transition::float(20, 1.05).style();

        assert!(style.contains("--bx-lift: -20px;"));
        assert!(style.contains("--bx-scale: 1.05;"));
        assert!(style.contains("bx-float 4000ms ease-in-out 0ms infinite both;"));
    }

    #[test]
    fn test_scale_entrance_style() {
        let style = Transition::new(Motion::Scale { from: 0.8 })
            .with_duration(300)
            .with_easing(Easing::EaseOut)
            .style();

        assert!(style.starts_with("--bx-scale-from: 0.8; "));
        assert!(style.ends_with("animation: bx-scale 300ms ease-out 0ms 1 both;"));
    }

    #[test]
    fn test_spring_overshoots_less_with_more_damping() {
        let loose = spring_overshoot(400.0, 10.0);
        let damped = spring_overshoot(400.0, 30.0);

        assert!(loose > damped);
        assert!(damped >= 0.0);
        assert!(loose <= 0.6);
    }

    #[test]
    fn test_spring_css_is_a_bezier() {
        let css = Easing::Spring {
            stiffness: 100.0,
            damping: 20.0,
        }
        .css();

        assert!(css.starts_with("cubic-bezier(0.34, "));
    }

    #[test]
    fn test_transition_css() {
        let css = Transition::fade()
            .with_duration(300)
            .with_easing(Easing::EaseOut)
            .transition_css("padding");

        assert_eq!(css, "transition: padding 300ms ease-out 0ms;");
    }

    #[test]
    fn test_stagger_is_strictly_increasing() {
        let delays: Vec<u32> = stagger(Transition::fade(), 300, 100, 4)
            .map(|t| t.delay_ms)
            .collect();

        assert_eq!(delays, vec![300, 400, 500, 600]);
    }
}
