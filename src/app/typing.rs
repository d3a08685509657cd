use leptos::prelude::*;
use leptos_use::{use_interval_fn_with_options, utils::Pausable};

use crate::typing::{interval_options, Typewriter, CHAR_INTERVAL_MS, START_DELAY};

#[component]
pub fn TypingName() -> impl IntoView {
    let writer = StoredValue::new(Typewriter::default());
    let typed = RwSignal::new(String::new());
    let done = RwSignal::new(false);

    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || {
            let mut next = None;
            writer.update_value(|w| next = w.tick());
            match next {
                Some(c) => typed.update(|s| s.push(c)),
                None => done.set(true),
            }
        },
        CHAR_INTERVAL_MS,
        interval_options(),
    );

    Effect::new(move |_| {
        if done.get() {
            pause();
        }
    });

    Effect::new(move |_| {
        let resume = resume.clone();
        set_timeout(move || resume(), START_DELAY);
    });

    view! {
        <span id="typing-name" class="typing-name">
            {move || typed.get()}
        </span>
        <span class="typing-cursor" class:hidden=move || done.get() aria-hidden="true">
            "|"
        </span>
    }
}
