//! Shared keyframes for `core::motion::Transition`
//!
//! Rendered once per page. Keyframes read their parameters from the custom
//! properties that `Transition::style` sets on each element.

use leptos::prelude::*;

/// Global animation stylesheet
#[component]
pub fn MotionStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes bx-fade-slide {
                from { opacity: 0; transform: translateY(var(--bx-offset, 20px)); }
                to { opacity: 1; transform: translateY(0); }
            }

            @keyframes bx-slide-x {
                from { opacity: 0; transform: translateX(var(--bx-offset, -20px)); }
                to { opacity: 1; transform: translateX(0); }
            }

            @keyframes bx-fade {
                from { opacity: 0; }
                to { opacity: 1; }
            }

            @keyframes bx-scale {
                from { opacity: 0; transform: scale(var(--bx-scale-from, 0.95)); }
                to { opacity: 1; transform: scale(1); }
            }

            @keyframes bx-float {
                0%, 100% { transform: translateY(0) scale(1); }
                50% { transform: translateY(var(--bx-lift, -10px)) scale(var(--bx-scale, 1)); }
            }

            .bx-svg-origin {
                transform-box: fill-box;
                transform-origin: center;
            }

            .bx-press {
                transition: transform 150ms ease-out;
            }
            .bx-press:hover {
                transform: scale(1.02);
            }
            .bx-press:active {
                transform: scale(0.98);
            }

            .bx-lift {
                transition: transform 150ms ease-out;
            }
            .bx-lift:hover {
                transform: scale(1.05);
            }
            .bx-lift:active {
                transform: scale(0.95);
            }

            .bx-nudge {
                transition: transform 150ms ease-out;
            }
            .bx-nudge:hover {
                transform: translateX(4px);
            }

            .bx-rise {
                transition: transform 150ms ease-out;
            }
            .bx-rise:hover {
                transform: translateY(-2px);
            }

            @media (prefers-reduced-motion: reduce) {
                *, *::before, *::after {
                    animation-duration: 1ms !important;
                    animation-iteration-count: 1 !important;
                    transition-duration: 1ms !important;
                }
            }
            "#
        </style>
    }
}
