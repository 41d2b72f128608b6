use leptos::prelude::*;

use crate::section::SectionId;

#[component]
pub fn Navigation(#[prop(into)] active: Signal<SectionId>, name: &'static str) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let link = move |id: SectionId| {
        view! {
            <a
                href=id.anchor()
                on:click=move |_| set_menu_open(false)
                aria-current=move || (active.get() == id).then_some("true")
                class=move || {
                    if active.get() == id {
                        "px-3 py-2 rounded-full text-coral-500 bg-coral-50 font-medium"
                    } else {
                        "px-3 py-2 rounded-full text-gray-600 hover:text-coral-500 transition-colors duration-200"
                    }
                }
            >
                {id.label()}
            </a>
        }
    };

    view! {
        <nav class="fixed top-0 inset-x-0 z-40 bg-white/80 backdrop-blur-sm border-b border-gray-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href=SectionId::Hero.anchor() class="text-xl font-bold text-gray-900">
                    {name}
                </a>
                <div class="hidden md:flex items-center space-x-2">
                    {SectionId::ALL.into_iter().map(link).collect_view()}
                </div>
                <button
                    class="md:hidden p-2 text-gray-600"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <i class="extra-menu" />
                </button>
            </div>
            <Show when=menu_open>
                <div class="md:hidden flex flex-col px-4 pb-4 space-y-1 bg-white">
                    {SectionId::ALL.into_iter().map(link).collect_view()}
                </div>
            </Show>
        </nav>
    }
}
