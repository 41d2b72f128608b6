use leptos::{either::Either, prelude::*};

/// Opens in a new tab, or renders muted and inert when there is no target.
#[component]
pub fn OutboundLink(
    href: Option<String>,
    label: &'static str,
    icon: &'static str,
    class: &'static str,
) -> impl IntoView {
    match href {
        Some(href) => Either::Left(view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class=class
                on:click=|ev| ev.stop_propagation()
            >
                <i class=icon />
                <span>{label}</span>
            </a>
        }),
        None => Either::Right(view! {
            <span
                aria-disabled="true"
                title="Not available"
                class=format!("{class} opacity-50 cursor-not-allowed")
            >
                <i class=icon />
                <span>{label}</span>
            </span>
        }),
    }
}
