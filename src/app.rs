mod background;
mod carousel;
mod fade_in;
mod footer;
mod header;
mod homepage;
mod language;
mod typing;

use background::OrbBackground;
use footer::Footer;
use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta
                    name="description"
                    content="Alejandro Montoya - portfolio, projects and contact"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Alejandro Montoya - {title}") />
        <OrbBackground />
        <Router>
            <div class="relative z-10 flex flex-col min-h-screen">
                <Header />
                <main class="flex flex-col flex-grow items-center mx-auto w-full max-w-6xl px-4">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Not Found" />
        <div class="flex flex-col items-center gap-4 my-24">
            <h1 class="text-2xl font-bold">"404"</h1>
            <A href="/" attr:class="text-accent hover:underline">
                "Volver al inicio"
            </A>
        </div>
    }
}
