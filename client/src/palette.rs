use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement};

use gridmap_shared::{icon_src, ToolChoice, ICONS};

use crate::dom::{create_div, event_element, set_class};
use crate::state::ACTIVE_CLASS;

pub const PALETTE_ICON_CLASS: &str = "palette-icon";
const TOOL_BUTTON_CLASS: &str = "tool-btn";
const TAB_BUTTON_CLASS: &str = "tab-btn";
const TAB_CONTENT_CLASS: &str = "tab-content";

pub fn render_icon_palette(document: &Document, palette_el: &HtmlElement) -> Result<(), JsValue> {
    palette_el.set_inner_html("");
    for name in ICONS {
        let wrapper = create_div(document, PALETTE_ICON_CLASS)?;
        wrapper.set_draggable(true);
        wrapper.set_attribute("data-name", name)?;
        wrapper.set_title(name);

        let img = document
            .create_element("img")?
            .dyn_into::<HtmlImageElement>()?;
        img.set_src(&icon_src(name));
        img.set_alt(name);
        wrapper.append_child(&img)?;
        palette_el.append_child(&wrapper)?;
    }
    Ok(())
}

fn closest_with_class(event: &Event, class_name: &str) -> Option<Element> {
    event_element(event)?
        .closest(&format!(".{class_name}"))
        .ok()
        .flatten()
}

/// Icon name of the palette entry a drag started on.
pub fn palette_icon_from_event(event: &Event) -> Option<String> {
    closest_with_class(event, PALETTE_ICON_CLASS)?.get_attribute("data-name")
}

pub struct ToolClick {
    pub button: Element,
    pub choice: ToolChoice,
}

pub fn tool_click_from_event(event: &Event) -> Option<ToolClick> {
    let button = closest_with_class(event, TOOL_BUTTON_CLASS)?;
    let choice = ToolChoice::from_button_id(&button.id())?;
    Some(ToolClick { button, choice })
}

pub fn set_active_tool_button(document: &Document, button: &Element) {
    for_each_with_class(document, TOOL_BUTTON_CLASS, |other| {
        set_class(other, ACTIVE_CLASS, false);
    });
    set_class(button, ACTIVE_CLASS, true);
}

/// Activates the clicked tab button and its `<tab>-panel`.
pub fn switch_tab_from_event(document: &Document, event: &Event) -> Option<String> {
    let button = closest_with_class(event, TAB_BUTTON_CLASS)?;
    let tab = button.get_attribute("data-tab")?;
    for_each_with_class(document, TAB_BUTTON_CLASS, |other| {
        set_class(other, ACTIVE_CLASS, false);
    });
    for_each_with_class(document, TAB_CONTENT_CLASS, |panel| {
        set_class(panel, ACTIVE_CLASS, false);
    });
    set_class(&button, ACTIVE_CLASS, true);
    if let Some(panel) = document.get_element_by_id(&format!("{tab}-panel")) {
        set_class(&panel, ACTIVE_CLASS, true);
    }
    Some(tab)
}

fn for_each_with_class(document: &Document, class_name: &str, mut f: impl FnMut(&Element)) {
    let Ok(nodes) = document.query_selector_all(&format!(".{class_name}")) else {
        return;
    };
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            f(&element);
        }
    }
}
