use leptos::{ev, prelude::*};
use leptos_use::use_debounce_fn;

use crate::carousel::{Carousel, Direction, DESKTOP_MIN_WIDTH, RESIZE_DEBOUNCE_MS};

#[derive(Debug, Clone)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

fn viewport_width() -> Option<f64> {
    window().inner_width().ok()?.as_f64()
}

#[component]
pub fn ProjectCarousel(projects: Vec<Project>) -> impl IntoView {
    let state = RwSignal::new(Carousel::new(projects.len()));
    // the server has no viewport, so the first paint assumes desktop
    let width = RwSignal::new(DESKTOP_MIN_WIDTH);
    let layout = Memo::new(move |_| state.get().layout(width.get()));

    let move_by = move |direction: Direction| {
        let Some(w) = viewport_width() else {
            return;
        };
        state.update(|c| c.move_by(direction, w));
        width.set(w);
    };

    let reclamp = use_debounce_fn(
        move || {
            let Some(w) = viewport_width() else {
                return;
            };
            state.update(|c| c.reclamp(w));
            width.set(w);
        },
        RESIZE_DEBOUNCE_MS,
    );

    Effect::new(move |_| {
        if let Some(w) = viewport_width() {
            width.set(w);
        }
        let reclamp = reclamp.clone();
        let handle = window_event_listener(ev::resize, move |_| {
            reclamp();
        });
        on_cleanup(move || handle.remove());
    });

    let slides = projects
        .into_iter()
        .map(|project| {
            view! {
                <div
                    class="carousel-slide shrink-0 px-3"
                    style:flex=move || format!("0 0 {}%", layout.get().slide_width_percent)
                >
                    <article class="glass-card flex flex-col h-full p-6 rounded-xl">
                        <h3 class="text-lg font-bold mb-2">{project.title}</h3>
                        <p class="text-sm text-muted leading-relaxed flex-grow">
                            {project.description}
                        </p>
                        <div class="flex flex-wrap gap-2 mt-4">
                            {project
                                .tags
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <span class="text-xs px-2 py-1 rounded-full bg-accent/15 text-accent">
                                            {*tag}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <a
                            href=project.link
                            target="_blank"
                            rel="noopener noreferrer"
                            class="mt-4 text-sm font-medium text-accent hover:underline"
                        >
                            "Ver proyecto →"
                        </a>
                    </article>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="carousel relative w-full">
            <div class="overflow-hidden">
                <div
                    id="carousel"
                    class="carousel-track flex transition-transform duration-500 ease-in-out"
                    style:transform=move || layout.get().transform()
                >
                    {slides}
                </div>
            </div>
            <div class="flex justify-center gap-4 mt-6">
                <button
                    class="carousel-btn carousel-btn-prev"
                    class:disabled=move || layout.get().prev_disabled
                    disabled=move || layout.get().prev_disabled
                    aria-label="Proyecto anterior"
                    on:click=move |_| move_by(Direction::Prev)
                >
                    "←"
                </button>
                <button
                    class="carousel-btn carousel-btn-next"
                    class:disabled=move || layout.get().next_disabled
                    disabled=move || layout.get().next_disabled
                    aria-label="Proyecto siguiente"
                    on:click=move |_| move_by(Direction::Next)
                >
                    "→"
                </button>
            </div>
        </div>
    }
}
