use leptos::prelude::*;
use leptos_router::components::*;

use super::language::LanguageSelector;

const SECTIONS: [(&str, &str); 3] = [
    ("#projects", "Proyectos"),
    ("#about", "Sobre mí"),
    ("#contact", "Contacto"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-20 backdrop-blur-md bg-background/60 border-b border-muted/20">
            <div class="flex items-center justify-between mx-auto max-w-6xl px-4 py-3">
                <A href="/" attr:class="text-lg font-bold tracking-tight">
                    "AM"
                    <span class="text-accent">"."</span>
                </A>
                <nav class="flex items-center gap-6">
                    <ul class="hidden md:flex gap-6 text-sm">
                        {SECTIONS
                            .into_iter()
                            .map(|(href, text)| {
                                view! {
                                    <li>
                                        <a href=href class="hover:text-accent transition-colors duration-200">
                                            {text}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <LanguageSelector />
                </nav>
            </div>
        </header>
    }
}
