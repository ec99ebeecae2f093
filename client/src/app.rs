use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, HtmlElement, PointerEvent};

use gridmap_shared::{DragPayload, DropOutcome, Editor, GridSize, DRAG_MIME};

use crate::dom::{
    cell_from_element, debug_enabled, event_element, get_element, segment_from_element,
    segment_hit,
};
use crate::palette::{
    palette_icon_from_event, render_icon_palette, set_active_tool_button, switch_tab_from_event,
    tool_click_from_event,
};
use crate::render::{apply_changes, build_grid, build_headers};
use crate::state::{State, PLACED_ICON_CLASS};
use crate::util::{debug_log, now_ms};

fn document_ready_state(document: &web_sys::Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() != Some("loading") {
        started.set(true);
        return start_app();
    }

    let onready_started = started.clone();
    let onready = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onready_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", onready.as_ref().unchecked_ref())?;
    onready.forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let debug = debug_enabled(&window);

    let grid_el: HtmlElement = get_element(&document, "grid-container")?;
    let col_headers: HtmlElement = get_element(&document, "col-headers")?;
    let row_headers: HtmlElement = get_element(&document, "row-headers")?;
    let icon_palette: HtmlElement = get_element(&document, "icon-palette")?;

    let size = GridSize::DEFAULT;
    let elements = build_grid(&document, &grid_el, size)?;
    build_headers(&document, &col_headers, &row_headers, size)?;
    render_icon_palette(&document, &icon_palette)?;
    debug_log(
        debug,
        &format!("Grid map editor ready rows={} cols={}", size.rows, size.cols),
    );

    let state = Rc::new(RefCell::new(State {
        document: document.clone(),
        editor: Editor::new(size),
        elements,
        debug,
    }));

    {
        let click_state = state.clone();
        let click_document = document.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(click) = tool_click_from_event(&event) {
                set_active_tool_button(&click_document, &click.button);
                let mut state = click_state.borrow_mut();
                state.editor.select(click.choice);
                debug_log(
                    state.debug,
                    &format!("Tool selected {}", click.choice.button_id()),
                );
                return;
            }
            if let Some(tab) = switch_tab_from_event(&click_document, &event) {
                debug_log(click_state.borrow().debug, &format!("Tab selected {tab}"));
            }
        });
        document.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let move_state = state.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            move_state.borrow_mut().editor.pointer_move(
                event.client_x() as f64,
                event.client_y() as f64,
                now_ms(),
            );
        });
        document.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let up_state = state.clone();
        let onup = Closure::<dyn FnMut(Event)>::new(move |_| {
            up_state.borrow_mut().editor.pointer_up();
        });
        document.add_event_listener_with_callback("pointerup", onup.as_ref().unchecked_ref())?;
        document
            .add_event_listener_with_callback("pointercancel", onup.as_ref().unchecked_ref())?;
        onup.forget();
    }

    {
        let down_state = state.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let Some(target) = event_element(&event) else {
                return;
            };
            // Touch pointers are captured by the pressed element, which
            // would stop pointerover from reaching the rest of the stroke.
            if target.has_pointer_capture(event.pointer_id()) {
                let _ = target.release_pointer_capture(event.pointer_id());
            }
            let mut state = down_state.borrow_mut();
            let mut changes = Vec::new();
            if let Some(cell) = cell_from_element(&target) {
                changes.extend(state.editor.cell_pointer_down(cell));
            }
            if let Some(segment) = segment_from_element(&target) {
                let hit = segment_hit(&target, &event);
                changes.extend(state.editor.segment_pointer_down(segment, hit));
            }
            apply_changes(&state, &changes);
        });
        grid_el.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let over_state = state.clone();
        let onover = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let mut state = over_state.borrow_mut();
            if !state.editor.is_drawing() {
                return;
            }
            let Some(target) = event_element(&event) else {
                return;
            };
            let mut changes = Vec::new();
            if let Some(cell) = cell_from_element(&target) {
                changes.extend(state.editor.cell_pointer_enter(cell));
            }
            if let Some(segment) = segment_from_element(&target) {
                let hit = segment_hit(&target, &event);
                changes.extend(state.editor.segment_pointer_enter(segment, hit));
            }
            apply_changes(&state, &changes);
        });
        grid_el.add_event_listener_with_callback("pointerover", onover.as_ref().unchecked_ref())?;
        onover.forget();
    }

    {
        let ondragstart = Closure::<dyn FnMut(DragEvent)>::new(move |event: DragEvent| {
            let Some(name) = palette_icon_from_event(&event) else {
                return;
            };
            if let Some(transfer) = event.data_transfer() {
                let _ = transfer.set_data(DRAG_MIME, &DragPayload::new_icon(name).encode());
            }
        });
        icon_palette
            .add_event_listener_with_callback("dragstart", ondragstart.as_ref().unchecked_ref())?;
        ondragstart.forget();
    }

    {
        let drag_state = state.clone();
        let ondragstart = Closure::<dyn FnMut(DragEvent)>::new(move |event: DragEvent| {
            let Some(target) = event_element(&event) else {
                return;
            };
            if !target.class_list().contains(PLACED_ICON_CLASS) {
                return;
            }
            let Some(cell) = cell_from_element(&target) else {
                return;
            };
            let name = {
                let state = drag_state.borrow();
                match state.editor.grid().icon(cell) {
                    Some(name) => name.to_string(),
                    None => return,
                }
            };
            if let Some(transfer) = event.data_transfer() {
                let _ = transfer.set_data(DRAG_MIME, &DragPayload::move_icon(name, cell).encode());
            }
            event.stop_propagation();
        });
        grid_el.add_event_listener_with_callback("dragstart", ondragstart.as_ref().unchecked_ref())?;
        ondragstart.forget();
    }

    {
        let ondragover = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
        });
        grid_el.add_event_listener_with_callback("dragover", ondragover.as_ref().unchecked_ref())?;
        ondragover.forget();
    }

    {
        let drop_state = state.clone();
        let ondrop = Closure::<dyn FnMut(DragEvent)>::new(move |event: DragEvent| {
            event.prevent_default();
            let raw = event
                .data_transfer()
                .and_then(|transfer| transfer.get_data(DRAG_MIME).ok())
                .unwrap_or_default();
            let mut state = drop_state.borrow_mut();
            let Some(cell) = event_element(&event).and_then(|target| cell_from_element(&target))
            else {
                debug_log(state.debug, "Drop outside the grid ignored");
                return;
            };
            match state.editor.drop_payload(&raw, cell) {
                DropOutcome::Placed(changes) => apply_changes(&state, &changes),
                DropOutcome::Rejected(error) => {
                    debug_log(state.debug, &format!("Drop ignored: {error}"));
                }
                DropOutcome::OffGrid => {
                    debug_log(
                        state.debug,
                        &format!("Drop ignored: cell {},{} is off the grid", cell.row, cell.col),
                    );
                }
            }
        });
        grid_el.add_event_listener_with_callback("drop", ondrop.as_ref().unchecked_ref())?;
        ondrop.forget();
    }

    Ok(())
}
