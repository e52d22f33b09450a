use leptos::prelude::*;
use leptos::web_sys::MouseEvent;

use crate::core::selector::{Selector, SelectorOption};
use crate::ui::icon::{Icon, icons};

/// Single-choice listbox over a closed option set
///
/// Opens on its button, closes after a pick or on a click outside.
#[component]
pub fn Listbox<T>(
    /// Heading shown above the control
    label: &'static str,
    /// Current selection, owned by the caller
    selector: RwSignal<Selector<T>>,
) -> impl IntoView
where
    T: SelectorOption + Send + Sync,
{
    let (is_open, set_is_open) = signal(false);

    let toggle = move |_: MouseEvent| set_is_open.update(|open| *open = !*open);
    let close = move || set_is_open.set(false);

    let pick = move |option: T| {
        selector.update(|selector| {
            selector.select(option);
        });
        close();
    };

    view! {
        <div>
            <h3 class="text-lg font-bold text-indigo-600 mb-4">{label}</h3>
            <div class="relative">
                <button
                    type="button"
                    class="w-full text-left py-2 px-4 border-b-2 border-indigo-100 focus:outline-none focus:border-indigo-500"
                    on:click=toggle
                    aria-haspopup="listbox"
                    aria-expanded=move || is_open.get().to_string()
                >
                    <span class="block text-base font-medium text-gray-800">
                        {move || selector.with(|selector| selector.selected().to_string())}
                    </span>
                    <span class="absolute inset-y-0 right-0 flex items-center pr-2 pointer-events-none">
                        <Icon name=icons::CHEVRON_DOWN class="h-4 w-4 text-indigo-400" />
                    </span>
                </button>

                <Show when=move || is_open.get()>
                    <div class="fixed inset-0 z-0" on:click=move |_| close()></div>
                    <ul
                        class="absolute mt-1 w-full bg-white shadow-lg rounded-md focus:outline-none z-10"
                        role="listbox"
                        aria-label=label
                    >
                        {T::ALL
                            .iter()
                            .copied()
                            .map(|option| {
                                let selected = move || selector.with(|selector| selector.is_selected(option));
                                view! {
                                    <li
                                        role="option"
                                        aria-selected=move || selected().to_string()
                                        class="cursor-pointer select-none py-2 px-4 text-gray-800 hover:bg-indigo-50 hover:text-indigo-600"
                                        class:text-indigo-600=selected
                                        on:click=move |_| pick(option)
                                    >
                                        <span class="block text-base font-medium">{option.to_string()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </div>
        </div>
    }
}
