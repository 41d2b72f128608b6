use std::sync::Arc;

use leptos::prelude::*;

use crate::{
    content::ProjectRecord,
    layout::{delay_style, stagger},
    page::PageState,
    selection::ClickTarget,
    style::Icon,
};

use super::links::OutboundLink;

#[component]
pub fn ProjectModal(project: Arc<ProjectRecord>) -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let dismiss = move |target: ClickTarget| {
        page.maybe_update(|p| p.selection.dismiss(target));
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 animate-fade"
            on:click=move |_| dismiss(ClickTarget::Backdrop)
        >
            <div class="absolute inset-0 bg-black/60 backdrop-blur-sm" />
            <div
                role="dialog"
                aria-modal="true"
                aria-label=project.title.clone()
                class="relative w-full max-w-4xl max-h-[90vh] bg-white rounded-2xl border border-gray-200 overflow-hidden shadow-2xl animate-pop"
                on:click=move |ev| {
                    ev.stop_propagation();
                    dismiss(ClickTarget::Surface);
                }
            >
                <button
                    aria-label="Close"
                    class="absolute top-4 right-4 z-10 p-2 bg-white/80 backdrop-blur-sm rounded-full text-gray-600 hover:text-gray-900 hover:rotate-90 transition-all duration-200 shadow-lg"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        dismiss(ClickTarget::CloseControl);
                    }
                >
                    <i class="extra-close" />
                </button>

                <div class="overflow-y-auto max-h-[90vh]">
                    <div class="relative h-64 sm:h-80 overflow-hidden">
                        <img
                            src=project.image.clone()
                            alt=project.title.clone()
                            class="w-full h-full object-cover"
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent" />
                        <div class="absolute bottom-6 left-6 right-6">
                            <h2 class="text-3xl sm:text-4xl font-bold text-white mb-2">
                                {project.title.clone()}
                            </h2>
                            <div class="flex items-center space-x-4 text-white/90">
                                <span class="flex items-center space-x-2">
                                    <i class="extra-calendar" />
                                    <span>{project.year.clone()}</span>
                                </span>
                                <span class="flex items-center space-x-2">
                                    <i class=Icon::Code.class() />
                                    <span>{format!("{} Technologies", project.stack.len())}</span>
                                </span>
                            </div>
                        </div>
                    </div>

                    <div class="p-6 sm:p-8">
                        <div class="flex flex-wrap gap-4 mb-8">
                            <OutboundLink
                                href=project.github.clone()
                                label="View Code"
                                icon=Icon::Github.class()
                                class="flex items-center space-x-2 px-6 py-3 bg-gray-100 hover:bg-gray-200 rounded-lg text-gray-700 transition-colors duration-200"
                            />
                            <OutboundLink
                                href=project.live.clone()
                                label="Live Demo"
                                icon="extra-external-link"
                                class="flex items-center space-x-2 px-6 py-3 bg-coral-500 hover:bg-coral-600 rounded-lg text-white transition-all duration-200"
                            />
                        </div>

                        <div class="mb-8">
                            <h3 class="text-xl font-semibold text-gray-900 mb-4">"About This Project"</h3>
                            <p class="text-gray-600 leading-relaxed text-lg">{project.details.clone()}</p>
                        </div>

                        <div class="mb-8">
                            <h3 class="text-xl font-semibold text-gray-900 mb-4">"Key Features"</h3>
                            <ul class="space-y-3">
                                {project
                                    .features
                                    .iter()
                                    .enumerate()
                                    .map(|(i, feature)| {
                                        view! {
                                            <li
                                                class="flex items-start space-x-3 text-gray-600 animate-slide"
                                                style=delay_style(stagger(i, 0.1, 0.7))
                                            >
                                                <div class="w-2 h-2 bg-coral-500 rounded-full mt-2 flex-shrink-0" />
                                                <span>{feature.clone()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div>
                            <h3 class="text-xl font-semibold text-gray-900 mb-4">"Technologies Used"</h3>
                            <div class="flex flex-wrap gap-3">
                                {project
                                    .stack
                                    .iter()
                                    .enumerate()
                                    .map(|(i, tech)| {
                                        view! {
                                            <span
                                                class="px-4 py-2 bg-gray-100 border border-gray-200 rounded-lg text-gray-700 font-medium hover:border-coral-300 hover:bg-coral-50 hover:text-coral-600 transition-colors duration-200 animate-pop"
                                                style=delay_style(stagger(i, 0.05, 0.9))
                                            >
                                                {tech.clone()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
