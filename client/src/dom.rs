use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, Window};

use gridmap_shared::{Cell, Orientation, Segment, SegmentHit};

use crate::state::{CELL_CLASS, H_WALL_CLASS, V_WALL_CLASS};

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

pub fn create_div(document: &Document, class_name: &str) -> Result<HtmlElement, JsValue> {
    let element = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    element.set_class_name(class_name);
    Ok(element)
}

pub fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    search.contains("debug=1")
        || search.contains("debug=true")
        || search.contains("log=1")
        || search.contains("log=true")
}

pub fn set_class(element: &Element, class_name: &str, enabled: bool) {
    let list = element.class_list();
    let _ = if enabled {
        list.add_1(class_name)
    } else {
        list.remove_1(class_name)
    };
}

pub fn event_element(event: &Event) -> Option<Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
}

fn index_attribute(element: &Element, name: &str) -> Option<usize> {
    element.get_attribute(name)?.parse::<usize>().ok()
}

/// The grid cell an event landed in, walking up from nested walls or icons.
pub fn cell_from_element(element: &Element) -> Option<Cell> {
    let cell = element.closest(&format!(".{CELL_CLASS}")).ok().flatten()?;
    Some(Cell::new(
        index_attribute(&cell, "data-r")?,
        index_attribute(&cell, "data-c")?,
    ))
}

pub fn segment_from_element(element: &Element) -> Option<Segment> {
    let list = element.class_list();
    if !list.contains(V_WALL_CLASS) && !list.contains(H_WALL_CLASS) {
        return None;
    }
    let orientation = Orientation::parse(&element.get_attribute("data-type")?)?;
    Some(Segment {
        row: index_attribute(element, "data-r")?,
        col: index_attribute(element, "data-c")?,
        orientation,
    })
}

pub fn segment_hit(element: &Element, event: &MouseEvent) -> SegmentHit {
    let rect = element.get_bounding_client_rect();
    SegmentHit {
        x: event.client_x() as f64 - rect.left(),
        y: event.client_y() as f64 - rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn set_segment_data(element: &Element, segment: Segment) {
    let _ = element.set_attribute("data-r", &segment.row.to_string());
    let _ = element.set_attribute("data-c", &segment.col.to_string());
    let _ = element.set_attribute("data-type", segment.orientation.as_str());
}

pub fn set_cell_data(element: &Element, cell: Cell) {
    let _ = element.set_attribute("data-r", &cell.row.to_string());
    let _ = element.set_attribute("data-c", &cell.col.to_string());
}
