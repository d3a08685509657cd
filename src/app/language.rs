use leptos::{html, prelude::*};
use leptos_use::on_click_outside;

use crate::language::{label_for, Language};

/// Dropdown that switches the language label. No content is translated.
#[component]
pub fn LanguageSelector() -> impl IntoView {
    let selector_ref = NodeRef::<html::Div>::new();
    let open = RwSignal::new(false);
    let label = RwSignal::new(Language::default().label());

    let _ = on_click_outside(selector_ref, move |_| open.set(false));

    let change_lang = move |code: &'static str| {
        label.set(label_for(code));
        open.set(false);
        log::info!("language changed to: {code}");
    };

    view! {
        <div node_ref=selector_ref class="lang-selector relative">
            <button
                class="lang-trigger flex items-center gap-1 px-3 py-1 rounded-md border border-muted/30 hover:border-accent"
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span id="current-lang">{move || label.get()}</span>
                <span class="text-xs">"▾"</span>
            </button>
            <div
                id="lang-dropdown"
                role="listbox"
                class="lang-dropdown absolute right-0 mt-2 min-w-32 rounded-md glass-card"
                class:active=move || open.get()
            >
                {Language::ALL
                    .into_iter()
                    .map(|lang| {
                        view! {
                            <button
                                role="option"
                                class="block w-full text-left px-4 py-2 text-sm hover:bg-accent/15"
                                on:click=move |_| change_lang(lang.code())
                            >
                                {lang.native_name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
