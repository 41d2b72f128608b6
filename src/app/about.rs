use leptos::{html, prelude::*};
use leptos_use::{
    use_element_bounding, use_window_size, UseElementBoundingReturn, UseWindowSizeReturn,
};

use crate::{
    content::{Catalog, TimelineEntry},
    layout::{delay_style, stagger, timeline_shift},
    style::Icon,
};

#[component]
pub fn About(catalog: &'static Catalog) -> impl IntoView {
    let profile = &catalog.profile;
    view! {
        <div class="px-4 sm:px-6 lg:px-8 py-20 bg-white">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16 animate-rise">
                    <h2 class="text-4xl sm:text-6xl font-bold mb-6 text-gray-900">"About Me"</h2>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class="space-y-8">
                        <blockquote class="relative text-xl sm:text-2xl text-gray-700 leading-relaxed italic pl-8">
                            <span class="text-6xl text-coral-400/20 font-serif absolute -top-4 -left-0">
                                "\u{201c}"
                            </span>
                            {profile.quote.as_str()}
                        </blockquote>
                        <div class="space-y-4">
                            {profile
                                .bio
                                .iter()
                                .map(|p| view! { <p class="text-gray-600 leading-relaxed">{p.as_str()}</p> })
                                .collect_view()}
                        </div>
                        <div class="flex flex-wrap gap-3">
                            {catalog
                                .highlights
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| {
                                    view! {
                                        <span
                                            class="px-4 py-2 bg-coral-50 text-coral-600 rounded-full border border-coral-200 font-medium hover:bg-coral-100 transition-colors duration-200 animate-pop"
                                            style=delay_style(stagger(i, 0.1, 0.0))
                                        >
                                            {skill.as_str()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex items-center space-x-2 text-gray-500">
                            <i class=Icon::Location.class() />
                            <span>{format!("Based in {}", profile.location)}</span>
                        </div>
                    </div>

                    <div class="space-y-8">
                        <div>
                            <h3 class="flex items-center space-x-2 text-2xl font-bold text-gray-900 mb-6">
                                <i class=format!("{} text-coral-500", Icon::Graduation.class()) />
                                <span>"Education"</span>
                            </h3>
                            <div class="space-y-4">
                                {catalog
                                    .education
                                    .iter()
                                    .map(|edu| {
                                        view! {
                                            <div class="p-6 bg-gray-50 border border-gray-200 rounded-xl hover:border-coral-300 transition-all duration-300">
                                                <h4 class="text-lg font-semibold text-gray-900">{edu.degree.as_str()}</h4>
                                                <p class="text-gray-600">{edu.institution.as_str()}</p>
                                                <p class="flex items-center space-x-2 text-sm text-gray-500 mt-2">
                                                    <i class="extra-calendar" />
                                                    <span>{edu.period.as_str()}</span>
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div>
                            <h3 class="flex items-center space-x-2 text-2xl font-bold text-gray-900 mb-6">
                                <i class=format!("{} text-coral-500", Icon::Award.class()) />
                                <span>"Certifications"</span>
                            </h3>
                            <div class="space-y-3">
                                {catalog
                                    .certifications
                                    .iter()
                                    .enumerate()
                                    .map(|(i, cert)| {
                                        view! {
                                            <div
                                                class="flex items-center space-x-3 p-4 bg-gray-50 rounded-lg hover:bg-coral-50 transition-colors duration-200 animate-slide"
                                                style=delay_style(stagger(i, 0.1, 0.0))
                                            >
                                                <div class="w-2 h-2 bg-coral-500 rounded-full flex-shrink-0" />
                                                <span class="text-gray-700">{cert.as_str()}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>

                <Timeline entries=&catalog.timeline />
            </div>
        </div>
    }
}

/// Career strip that drifts sideways as it scrolls into view.
#[component]
fn Timeline(entries: &'static [TimelineEntry]) -> impl IntoView {
    let strip = NodeRef::<html::Div>::new();
    let UseElementBoundingReturn { top, .. } = use_element_bounding(strip);
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let transform = move || {
        let shift = timeline_shift(height.get(), top.get());
        format!("transform: translateX({shift:.0}px);")
    };

    view! {
        <div id="timeline" class="mt-24 overflow-hidden">
            <h3 class="text-3xl font-bold text-gray-900 text-center mb-12">"My Journey"</h3>
            <div node_ref=strip class="relative hidden lg:flex gap-8 transition-transform duration-300" style=transform>
                <div class="absolute top-1/2 left-0 w-full h-0.5 bg-gradient-to-r from-cyan-400 via-purple-500 to-orange-500 -translate-y-1/2" />
                {entries
                    .iter()
                    .map(|item| {
                        let style = item.accent.descriptor();
                        view! {
                            <div class="relative flex-shrink-0 w-64 group">
                                <div class=format!(
                                    "w-4 h-4 bg-gradient-to-r {} rounded-full mb-8 group-hover:scale-150 transition-all duration-300 relative z-10",
                                    style.gradient,
                                ) />
                                <div class="p-6 bg-white rounded-xl shadow-lg border border-gray-100">
                                    <div class="flex items-center space-x-2 mb-3">
                                        <div class=format!("p-2 bg-gradient-to-r {} rounded-lg", style.gradient)>
                                            <i class=format!("{} text-white", item.icon.class()) />
                                        </div>
                                        <span class=format!("text-sm font-bold {}", style.text)>{item.year.as_str()}</span>
                                    </div>
                                    <h4 class="text-gray-900 font-bold text-lg mb-2">{item.title.as_str()}</h4>
                                    <p class="text-gray-500 text-sm mb-2">{item.subtitle.as_str()}</p>
                                    <p class="text-gray-600 text-sm">{item.description.as_str()}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="lg:hidden space-y-8">
                {entries
                    .iter()
                    .map(|item| {
                        let style = item.accent.descriptor();
                        view! {
                            <div class="flex items-start space-x-4">
                                <div class=format!(
                                    "w-12 h-12 bg-gradient-to-r {} rounded-full flex items-center justify-center flex-shrink-0",
                                    style.gradient,
                                )>
                                    <i class=format!("{} text-white", item.icon.class()) />
                                </div>
                                <div>
                                    <span class=format!("text-lg font-bold {}", style.text)>{item.year.as_str()}</span>
                                    <h4 class="text-gray-900 font-bold">{item.title.as_str()}</h4>
                                    <p class="text-gray-500 text-sm">{item.subtitle.as_str()}</p>
                                    <p class="text-gray-600 text-sm mt-1">{item.description.as_str()}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
