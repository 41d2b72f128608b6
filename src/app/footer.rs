use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::section::SectionId;

const BUILD_TIME: &str = env!("BUILD_TIME");

fn build_year(build_time: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|t| t.year())
}

#[component]
pub fn Footer(name: &'static str) -> impl IntoView {
    let notice = match build_year(BUILD_TIME) {
        Some(year) => format!("© {year} {name}"),
        None => format!("© {name}"),
    };
    view! {
        <footer class="py-8 border-t border-gray-100 text-center text-sm text-gray-500">
            <p>{notice}</p>
            <a href=SectionId::Hero.anchor() class="hover:text-coral-500 transition-colors duration-200">
                "Back to top"
            </a>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year() {
        assert_eq!(build_year("2026-10-14T08:30:00+00:00"), Some(2026));
        assert_eq!(build_year("yesterday"), None);
        assert!(build_year(BUILD_TIME).is_some());
    }
}
