use leptos::prelude::*;

use crate::{
    content::{Profile, SocialLink},
    layout::{decor_shapes, delay_style, HERO_SEED, HERO_SHAPES},
    section::SectionId,
};

#[component]
pub fn Hero(profile: &'static Profile, social: &'static [SocialLink]) -> impl IntoView {
    let shapes = decor_shapes(HERO_SEED, HERO_SHAPES);
    let projects = SectionId::Projects.anchor();

    view! {
        <div class="min-h-screen flex items-center justify-center relative overflow-hidden bg-white">
            <div class="absolute inset-0" aria-hidden="true">
                {shapes
                    .into_iter()
                    .map(|shape| {
                        view! {
                            <div
                                class="absolute rounded-full bg-gradient-to-br from-coral-100 to-coral-200 opacity-20 animate-drift"
                                style=shape.style()
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="text-center z-10 px-4 sm:px-6 lg:px-8 max-w-4xl mx-auto animate-rise">
                <h1 class="text-5xl sm:text-7xl lg:text-8xl font-bold mb-6 leading-tight text-gray-900">
                    {profile.name.as_str()}
                </h1>
                <p
                    class="text-xl sm:text-2xl text-gray-600 mb-4 max-w-2xl mx-auto animate-rise"
                    style=delay_style(0.4)
                >
                    {profile.headline.as_str()}
                </p>
                <p
                    class="text-lg text-gray-500 mb-12 max-w-3xl mx-auto leading-relaxed animate-rise"
                    style=delay_style(0.6)
                >
                    {profile.tagline.as_str()}
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-6 mb-12">
                    <a
                        href=projects.clone()
                        class="px-8 py-4 bg-coral-500 hover:bg-coral-600 rounded-full text-white font-semibold transition-all duration-300 hover:scale-105"
                    >
                        "Explore Projects"
                    </a>
                    <div class="flex items-center space-x-4">
                        {social
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href.as_str()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label.as_str()
                                        class="p-3 rounded-full bg-gray-50 border border-gray-200 text-gray-500 hover:text-coral-500 transition-all duration-300"
                                    >
                                        <i class=link.icon.class() />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="flex items-center justify-center space-x-2 text-gray-500 mb-8">
                    <i class="extra-location" />
                    <span>{profile.location.as_str()}</span>
                </div>
            </div>

            <a
                href=projects
                class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center space-y-2 group animate-bounce"
            >
                <span class="text-gray-400 text-sm group-hover:text-coral-500 transition-colors duration-300">
                    "Scroll to explore"
                </span>
                <i class="extra-chevron-down text-coral-500" />
            </a>
        </div>
    }
}
