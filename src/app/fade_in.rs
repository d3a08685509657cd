use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

const VISIBILITY_THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Reveals its children the first time they scroll into view. Never hides them again.
#[component]
pub fn FadeIn(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = RwSignal::new(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                visible.set(true);
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(ROOT_MARGIN)
            .thresholds(vec![VISIBILITY_THRESHOLD]),
    );

    view! {
        <div node_ref=target class=format!("fade-in {class}") class:visible=move || visible.get()>
            {children()}
        </div>
    }
}
