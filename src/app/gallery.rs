use std::sync::Arc;

use leptos::prelude::*;

use crate::{
    content::ProjectRecord,
    layout::{delay_style, project_slot, stagger},
    page::PageState,
    selection::is_activation_key,
    style::Icon,
};

use super::links::OutboundLink;

const PREVIEW_TAGS: usize = 3;

#[component]
pub fn ScatteredGrid(projects: &'static [Arc<ProjectRecord>]) -> impl IntoView {
    view! {
        <div class="relative min-h-screen px-4 sm:px-6 lg:px-8 bg-white">
            <div class="text-center mb-20 pt-20 animate-rise">
                <h2 class="text-4xl sm:text-6xl font-bold mb-6 text-gray-900">"Featured Projects"</h2>
                <p class="text-gray-600 text-lg max-w-2xl mx-auto">
                    "A collection of my recent work showcasing full-stack development expertise"
                </p>
            </div>

            // desktop: scattered cards
            <div class="relative max-w-7xl mx-auto hidden lg:block min-h-[800px]">
                {projects
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        let slot = project_slot(i);
                        view! {
                            <div
                                class="absolute w-80 h-96 scatter-card animate-rise"
                                style=format!("{}{}", slot.style(), delay_style(stagger(i, 0.2, 0.3)))
                            >
                                <ProjectCard project index=i />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            // everything else: plain grid
            <div class="block lg:hidden mt-20">
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-8 max-w-4xl mx-auto">
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <div class="animate-rise" style=delay_style(stagger(i, 0.1, 0.0))>
                                    <ProjectCard project index=i />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Arc<ProjectRecord>, index: usize) -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let (tags, hidden) = project.stack_preview(PREVIEW_TAGS);
    let select = move || page.update(|p| p.selection.select(Arc::clone(project)));

    view! {
        <div
            role="button"
            tabindex="0"
            class="relative w-full h-full cursor-pointer group bg-white rounded-2xl shadow-lg border border-gray-100 overflow-hidden hover:shadow-2xl transition-all duration-500"
            on:click=move |_| select()
            on:keydown=move |ev| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    select();
                }
            }
        >
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image.as_str()
                    alt=project.title.as_str()
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/20 to-transparent" />
                <div class="absolute top-4 right-4 px-3 py-1 bg-white/90 backdrop-blur-sm rounded-full text-coral-500 text-sm font-medium border border-coral-200">
                    {project.year.as_str()}
                </div>
                <div class="absolute inset-0 bg-coral-500/90 flex items-center justify-center space-x-4 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <OutboundLink
                        href=project.github.clone()
                        label=""
                        icon=Icon::Github.class()
                        class="p-3 bg-white/20 rounded-full text-white hover:bg-white/30"
                    />
                    <OutboundLink
                        href=project.live.clone()
                        label=""
                        icon="extra-external-link"
                        class="p-3 bg-white/20 rounded-full text-white hover:bg-white/30"
                    />
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold text-gray-900 mb-2 group-hover:text-coral-500 transition-colors duration-300">
                    {project.title.as_str()}
                </h3>
                <p class="text-gray-600 text-sm mb-4 leading-relaxed">
                    {project.description.as_str()}
                </p>
                <div class="flex flex-wrap gap-2">
                    {tags
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 text-xs font-medium bg-gray-100 text-gray-700 rounded-full border border-gray-200 group-hover:border-coral-200 group-hover:bg-coral-50 group-hover:text-coral-600 transition-colors duration-300">
                                    {tech.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                    {(hidden > 0)
                        .then(|| {
                            view! {
                                <span class="px-2 py-1 text-xs font-medium bg-gray-100 text-gray-700 rounded-full border border-gray-200">
                                    {format!("+{hidden}")}
                                </span>
                            }
                        })}
                </div>
            </div>
            <div
                class="absolute -top-2 -right-2 w-4 h-4 bg-coral-400 rounded-full opacity-60 animate-pulse"
                style=delay_style(stagger(index, 0.5, 0.0))
            />
        </div>
    }
}
