use chrono::{DateTime, Datelike, FixedOffset};
use leptos::prelude::*;

fn build_time() -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok()
}

#[component]
pub fn Footer() -> impl IntoView {
    let built = build_time();
    view! {
        <footer class="mt-16 py-8 border-t border-muted/20 text-center text-sm text-muted">
            <p>
                "© "
                {built.map(|dt| format!("{} ", dt.year()))}
                "Alejandro Montoya"
            </p>
            {built
                .map(|dt| {
                    view! {
                        <p class="mt-1 text-xs">
                            "Última actualización: " {dt.format("%Y-%m-%d").to_string()}
                        </p>
                    }
                })}
        </footer>
    }
}
