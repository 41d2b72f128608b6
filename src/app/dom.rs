use leptos::{prelude::*, web_sys};
use wasm_bindgen::JsCast;

use crate::section::{SectionId, SectionLayout, SectionSpan, Viewport};

/// Reads section geometry from the rendered document.
pub struct DomLayout;

impl SectionLayout for DomLayout {
    fn span(&self, id: SectionId) -> Option<SectionSpan> {
        let el = document()
            .get_element_by_id(id.as_str())?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(SectionSpan {
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
    }
}

pub fn read_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport { scroll_y, height })
}
