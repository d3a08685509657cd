use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    carousel::{Project, ProjectCarousel},
    fade_in::FadeIn,
    typing::TypingName,
};

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Dashboard de Ventas",
            description: "Panel interactivo para seguimiento de métricas comerciales en tiempo real, con filtros por región y periodo.",
            tags: &["Rust", "Leptos", "Tailwind"],
            link: "https://github.com/alejandromontoya/sales-dashboard",
        },
        Project {
            title: "API de Reservas",
            description: "Servicio REST para gestión de reservas con autenticación, validación de disponibilidad y notificaciones por correo.",
            tags: &["Axum", "PostgreSQL", "Docker"],
            link: "https://github.com/alejandromontoya/booking-api",
        },
        Project {
            title: "App de Finanzas Personales",
            description: "Aplicación para registrar gastos, definir presupuestos mensuales y visualizar tendencias de ahorro.",
            tags: &["WebAssembly", "Charts", "PWA"],
            link: "https://github.com/alejandromontoya/finance-app",
        },
        Project {
            title: "Portafolio Personal",
            description: "Este sitio: renderizado en el servidor, hidratado en el navegador y animado con un canvas de fondo.",
            tags: &["Rust", "SSR", "Canvas"],
            link: "https://github.com/alejandromontoya/portfolio-site",
        },
        Project {
            title: "Bot de Soporte",
            description: "Asistente conversacional que responde preguntas frecuentes y escala los casos complejos a un agente humano.",
            tags: &["Tokio", "WebSockets", "NLP"],
            link: "https://github.com/alejandromontoya/support-bot",
        },
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portafolio" />
        <section class="flex flex-col items-center justify-center text-center min-h-[70vh] gap-4">
            <p class="text-sm uppercase tracking-widest text-accent">"Hola, soy"</p>
            <h1 class="text-4xl md:text-6xl font-bold min-h-[1.2em]">
                <TypingName />
            </h1>
            <p class="max-w-2xl text-lg text-muted leading-relaxed">
                "Desarrollador de software enfocado en construir aplicaciones web rápidas, accesibles y fáciles de mantener."
            </p>
            <div class="flex gap-4 mt-4">
                <a href="#projects" class="btn-primary">
                    "Ver proyectos"
                </a>
                <a href="#contact" class="btn-secondary">
                    "Contactar"
                </a>
            </div>
        </section>

        <FadeIn class="w-full my-16">
            <section id="projects">
                <h2 class="text-2xl font-bold mb-8 text-center">"Proyectos"</h2>
                <ProjectCarousel projects=projects() />
            </section>
        </FadeIn>

        <FadeIn class="w-full my-16">
            <section id="about" class="glass-card p-8 rounded-xl max-w-3xl mx-auto">
                <h2 class="text-2xl font-bold mb-4">"Sobre mí"</h2>
                <p class="mb-4 leading-relaxed">
                    "Me gusta transformar problemas complejos en productos simples. Trabajo tanto en el "
                    <strong>"frontend"</strong>
                    " como en el "
                    <strong>"backend"</strong>
                    ", y disfruto especialmente del diseño de APIs y de las interfaces con movimiento sutil."
                </p>
                <p class="leading-relaxed text-muted">
                    "Fuera del código: café de especialidad, fotografía y largas caminatas."
                </p>
            </section>
        </FadeIn>

        <FadeIn class="w-full my-16">
            <section id="contact" class="text-center max-w-2xl mx-auto">
                <h2 class="text-2xl font-bold mb-4">"Contacto"</h2>
                <p class="mb-6 text-muted">
                    "¿Tienes un proyecto en mente o una oportunidad interesante? Escríbeme."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a href="mailto:contacto@alejandromontoya.dev" class="btn-primary">
                        "contacto@alejandromontoya.dev"
                    </a>
                    <div class="flex gap-3 text-2xl">
                        <a
                            href="https://github.com/alejandromontoya"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub"
                            class="hover:text-accent"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href="https://linkedin.com/in/alejandromontoya"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="LinkedIn"
                            class="hover:text-accent"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                    </div>
                </div>
            </section>
        </FadeIn>
    }
}
