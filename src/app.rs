mod about;
mod contact;
mod dom;
mod footer;
mod gallery;
mod hero;
mod links;
mod modal;
mod nav;
mod skills;

use leptos::{either::Either, ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_window};

use crate::{
    content::{catalog, Catalog},
    page::PageState,
    section::SectionId,
    selection::ClickTarget,
};

use about::About;
use contact::Contact;
use dom::{read_viewport, DomLayout};
use footer::Footer;
use gallery::ScatteredGrid;
use hero::Hero;
use modal::ProjectModal;
use nav::Navigation;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let owner = catalog()
        .map(|c| c.profile.name.clone())
        .unwrap_or_default();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        {match catalog() {
            Ok(catalog) => Either::Left(view! { <Portfolio catalog /> }),
            Err(e) => {
                Either::Right(
                    view! {
                        <div class="min-h-screen flex items-center justify-center p-8 text-red-600">
                            <pre class="whitespace-pre-wrap">{format!("Content unavailable: {e}")}</pre>
                        </div>
                    },
                )
            }
        }}
    }
}

/// Owns the page state and wires it to scroll, keyboard and the views.
#[component]
fn Portfolio(catalog: &'static Catalog) -> impl IntoView {
    let page = RwSignal::new(PageState::new());
    provide_context(page);

    let active = Memo::new(move |_| page.with(|p| p.tracker.active()));
    let selected = Memo::new(move |_| page.with(|p| p.selection.current().cloned()));

    Effect::new(move |_| {
        page.update(|p| p.mount(read_viewport(), &DomLayout));
    });

    let stop_scroll = use_event_listener(use_window(), ev::scroll, move |_| {
        let Some(viewport) = read_viewport() else {
            return;
        };
        page.maybe_update(|p| p.tracker.handle_scroll(viewport, &DomLayout));
    });

    let stop_keys = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            page.maybe_update(|p| p.selection.dismiss(ClickTarget::CloseControl));
        }
    });

    on_cleanup(move || {
        stop_scroll();
        stop_keys();
        page.try_update(|p| p.teardown());
    });

    view! {
        <div class="min-h-screen bg-white text-gray-900 overflow-x-hidden">
            <Navigation active name=catalog.profile.name.as_str() />
            <main>
                <section id=SectionId::Hero.as_str()>
                    <Hero profile=&catalog.profile social=&catalog.social />
                </section>
                <section id=SectionId::Projects.as_str() class="py-20">
                    <ScatteredGrid projects=&catalog.projects />
                </section>
                <section id=SectionId::Skills.as_str() class="py-20">
                    <Skills categories=&catalog.skills />
                </section>
                <section id=SectionId::About.as_str() class="py-20">
                    <About catalog />
                </section>
                <section id=SectionId::Contact.as_str() class="py-20">
                    <Contact info=&catalog.contact social=&catalog.social />
                </section>
            </main>
            <Footer name=catalog.profile.name.as_str() />
            {move || selected.get().map(|project| view! { <ProjectModal project /> })}
        </div>
    }
}
