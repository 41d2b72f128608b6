use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    contact::{acknowledge_window_ms, ContactField, ResetTicket},
    content::{ContactInfo, SocialLink},
    page::PageState,
    style::Icon,
};

const INPUT_CLASS: &str = "peer w-full px-4 py-4 bg-gray-50 border border-gray-200 rounded-xl text-gray-900 placeholder-transparent focus:outline-none focus:border-coral-500 focus:bg-white transition-all duration-300";
const LABEL_CLASS: &str = "absolute left-4 -top-2 px-2 text-xs text-coral-500 bg-white pointer-events-none transition-all duration-300 peer-placeholder-shown:top-4 peer-placeholder-shown:text-base peer-placeholder-shown:text-gray-500 peer-placeholder-shown:bg-transparent peer-focus:-top-2 peer-focus:text-xs peer-focus:text-coral-500 peer-focus:bg-white";

#[component]
pub fn Contact(info: &'static ContactInfo, social: &'static [SocialLink]) -> impl IntoView {
    let details = [
        (Icon::Location, "Location", info.location.clone(), None),
        (Icon::Email, "Email", info.email.clone(), Some(info.mailto())),
        (Icon::Phone, "Phone", info.phone_display.clone(), Some(info.tel())),
    ];

    view! {
        <div class="px-4 sm:px-6 lg:px-8 py-20 bg-white">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16 animate-rise">
                    <h2 class="text-4xl sm:text-6xl font-bold mb-6 text-gray-900">"Let's Connect"</h2>
                    <p class="text-gray-600 text-lg max-w-2xl mx-auto">
                        "Ready to bring your ideas to life? Let's discuss your next project and create something amazing together."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class="space-y-8">
                        <div>
                            <h3 class="text-2xl font-bold text-gray-900 mb-6">"Get In Touch"</h3>
                            <p class="text-gray-600 text-lg leading-relaxed mb-8">
                                "I'm always interested in new opportunities and exciting projects. Whether you have a question or just want to say hi, feel free to reach out!"
                            </p>
                        </div>
                        <div class="space-y-6">
                            {details
                                .into_iter()
                                .map(|(icon, label, value, href)| {
                                    let body = view! {
                                        <div class="p-3 bg-coral-100 rounded-lg group-hover:bg-coral-200 transition-colors duration-300">
                                            <i class=format!("{} text-coral-500", icon.class()) />
                                        </div>
                                        <div>
                                            <p class="text-gray-500 text-sm">{label}</p>
                                            <p class="text-gray-900 font-medium group-hover:text-coral-600 transition-colors duration-300">
                                                {value}
                                            </p>
                                        </div>
                                    };
                                    let class = "group flex items-center space-x-4 p-6 bg-gray-50 border border-gray-200 rounded-xl hover:border-coral-300 hover:bg-coral-50 transition-all duration-300";
                                    match href {
                                        Some(href) => view! { <a href=href class=class>{body}</a> }.into_any(),
                                        None => view! { <div class=class>{body}</div> }.into_any(),
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div>
                            <h4 class="text-gray-900 font-semibold mb-4">"Follow Me"</h4>
                            <div class="flex space-x-4">
                                {social
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href.as_str()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=link.label.as_str()
                                                class="group p-4 bg-gray-100 hover:bg-coral-100 rounded-xl transition-all duration-300"
                                            >
                                                <i class=format!(
                                                    "{} text-gray-600 group-hover:text-coral-500",
                                                    link.icon.class(),
                                                ) />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <ContactForm />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |ticket: ResetTicket| {
            page.maybe_update(|p| p.contact.expire(ticket));
        },
        acknowledge_window_ms(),
    );
    on_cleanup(move || {
        stop();
        page.try_update(|p| p.contact.teardown());
    });

    let acknowledged = Memo::new(move |_| page.with(|p| p.contact.acknowledged()));
    let value = move |field: ContactField| page.with(|p| p.contact.field(field).to_string());

    let set_field = move |field: ContactField, text: String| {
        page.update(|p| p.contact.update_field(field, text));
    };

    view! {
        <div class="relative">
            <div class="bg-white p-8 rounded-2xl shadow-lg border border-gray-200">
                <form
                    class="space-y-6"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        if let Some(submission) = page.try_update(|p| p.contact.submit()).flatten() {
                            start(submission.ticket);
                        }
                    }
                >
                    <div class="relative">
                        <input
                            id="contact-name"
                            type="text"
                            name=ContactField::Name.as_str()
                            placeholder="Your Name"
                            required=true
                            class=INPUT_CLASS
                            prop:value=move || value(ContactField::Name)
                            on:input=move |ev| set_field(ContactField::Name, event_target_value(&ev))
                        />
                        <label for="contact-name" class=LABEL_CLASS>"Your Name"</label>
                    </div>
                    <div class="relative">
                        <input
                            id="contact-email"
                            type="email"
                            name=ContactField::Email.as_str()
                            placeholder="Your Email"
                            required=true
                            class=INPUT_CLASS
                            prop:value=move || value(ContactField::Email)
                            on:input=move |ev| set_field(ContactField::Email, event_target_value(&ev))
                        />
                        <label for="contact-email" class=LABEL_CLASS>"Your Email"</label>
                    </div>
                    <div class="relative">
                        <textarea
                            id="contact-message"
                            name=ContactField::Message.as_str()
                            rows="6"
                            placeholder="Your Message"
                            required=true
                            class=format!("{INPUT_CLASS} resize-none")
                            prop:value=move || value(ContactField::Message)
                            on:input=move |ev| set_field(ContactField::Message, event_target_value(&ev))
                        />
                        <label for="contact-message" class=LABEL_CLASS>"Your Message"</label>
                    </div>
                    <button
                        type="submit"
                        disabled=move || !page.with(|p| p.contact.is_submit_enabled())
                        class="group w-full relative px-8 py-4 bg-coral-500 hover:bg-coral-600 rounded-xl text-white font-semibold transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed overflow-hidden"
                    >
                        <Show
                            when=move || acknowledged.get()
                            fallback=|| {
                                view! {
                                    <span class="flex items-center justify-center space-x-2">
                                        <i class="extra-send" />
                                        <span>"Send Message"</span>
                                    </span>
                                }
                            }
                        >
                            <span class="flex items-center justify-center space-x-2">
                                <i class="extra-check" />
                                <span>"Message Sent!"</span>
                            </span>
                        </Show>
                    </button>
                </form>
            </div>
        </div>
    }
}
