use leptos::prelude::*;

use crate::{
    content::SkillCategory,
    layout::{delay_style, skill_slot, stagger},
};

#[component]
pub fn Skills(categories: &'static [SkillCategory]) -> impl IntoView {
    view! {
        <div class="px-4 sm:px-6 lg:px-8 py-20 bg-white">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16 animate-rise">
                    <h2 class="text-4xl sm:text-6xl font-bold mb-6 text-gray-900">"Skills & Expertise"</h2>
                    <p class="text-gray-600 text-lg max-w-2xl mx-auto">
                        "Technologies and tools I use to bring ideas to life"
                    </p>
                </div>

                <div class="relative hidden lg:block min-h-[700px]">
                    {categories
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <div
                                    class="absolute w-72 scatter-card animate-rise"
                                    style=format!("{}{}", skill_slot(i).style(), delay_style(stagger(i, 0.2, 0.0)))
                                >
                                    <SkillCard category index=i />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 lg:hidden">
                    {categories
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <div class="animate-rise" style=delay_style(stagger(i, 0.1, 0.0))>
                                    <SkillCard category index=i />
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
fn SkillCard(category: &'static SkillCategory, index: usize) -> impl IntoView {
    let style = category.accent.descriptor();
    view! {
        <div class="relative p-6 bg-white rounded-2xl shadow-lg border border-gray-100 hover:shadow-2xl transition-all duration-300">
            <div class="flex items-center space-x-3 mb-6">
                <div class=format!("p-3 bg-gradient-to-br {} rounded-xl shadow-lg", style.gradient)>
                    <i class=format!("{} text-white", category.icon.class()) />
                </div>
                <h3 class="text-xl font-bold text-gray-900">{category.title.as_str()}</h3>
            </div>
            <div class="space-y-3">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(j, skill)| {
                        view! {
                            <div
                                class="flex items-center space-x-3 p-3 bg-gray-50 rounded-lg hover:bg-gray-100 transition-colors duration-200 animate-slide"
                                style=delay_style(stagger(index, 0.2, stagger(j, 0.1, 0.0)))
                            >
                                <div class=format!("w-2 h-2 bg-gradient-to-r {} rounded-full", style.gradient) />
                                <span class="text-gray-700 font-medium">{skill.as_str()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class=format!(
                "absolute -top-2 -right-2 w-4 h-4 bg-gradient-to-r {} rounded-full opacity-60 animate-pulse",
                style.gradient,
            ) />
        </div>
    }
}
