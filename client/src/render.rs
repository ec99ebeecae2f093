use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use gridmap_shared::{
    column_labels, icon_src, row_labels, Cell, Change, FloorColor, GridSize, Orientation, Segment,
};

use crate::dom::{create_div, set_cell_data, set_class, set_segment_data};
use crate::state::{
    GridElements, State, ACTIVE_CLASS, CELL_CLASS, H_WALL_CLASS, PLACED_ICON_CLASS, V_WALL_CLASS,
};

/// Offset that pushes the closing wall of the last row or column onto the
/// grid's outer edge.
const OUTER_WALL_OFFSET: &str = "-3px";

fn create_segment(document: &Document, segment: Segment) -> Result<HtmlElement, JsValue> {
    let class_name = match segment.orientation {
        Orientation::Vertical => V_WALL_CLASS,
        Orientation::Horizontal => H_WALL_CLASS,
    };
    let element = create_div(document, class_name)?;
    set_segment_data(&element, segment);
    Ok(element)
}

pub fn build_grid(
    document: &Document,
    grid_el: &HtmlElement,
    size: GridSize,
) -> Result<GridElements, JsValue> {
    grid_el.set_inner_html("");
    let style = grid_el.style();
    style.set_property("--grid-cols", &size.cols.to_string())?;
    style.set_property("--grid-rows", &size.rows.to_string())?;

    let mut cells = Vec::with_capacity(size.rows * size.cols);
    let mut v_walls = Vec::with_capacity(size.rows * (size.cols + 1));
    let mut h_walls = Vec::with_capacity((size.rows + 1) * size.cols);
    let mut bottom_walls = Vec::with_capacity(size.cols);

    for row in 0..size.rows {
        for col in 0..size.cols {
            let cell = create_div(document, CELL_CLASS)?;
            set_cell_data(&cell, Cell::new(row, col));
            grid_el.append_child(&cell)?;

            let h_wall = create_segment(document, Segment::horizontal(row, col))?;
            cell.append_child(&h_wall)?;
            h_walls.push(h_wall);

            let v_wall = create_segment(document, Segment::vertical(row, col))?;
            cell.append_child(&v_wall)?;
            v_walls.push(v_wall);

            if col + 1 == size.cols {
                let right = create_segment(document, Segment::vertical(row, col + 1))?;
                let right_style = right.style();
                right_style.set_property("left", "auto")?;
                right_style.set_property("right", OUTER_WALL_OFFSET)?;
                cell.append_child(&right)?;
                v_walls.push(right);
            }

            if row + 1 == size.rows {
                let bottom = create_segment(document, Segment::horizontal(row + 1, col))?;
                let bottom_style = bottom.style();
                bottom_style.set_property("top", "auto")?;
                bottom_style.set_property("bottom", OUTER_WALL_OFFSET)?;
                cell.append_child(&bottom)?;
                bottom_walls.push(bottom);
            }

            cells.push(cell);
        }
    }
    h_walls.extend(bottom_walls);

    Ok(GridElements {
        size,
        cells,
        v_walls,
        h_walls,
    })
}

pub fn build_headers(
    document: &Document,
    col_headers: &HtmlElement,
    row_headers: &HtmlElement,
    size: GridSize,
) -> Result<(), JsValue> {
    col_headers.set_inner_html("");
    for label in column_labels(size) {
        let header = create_div(document, "col-header")?;
        header.set_text_content(Some(&label));
        col_headers.append_child(&header)?;
    }
    row_headers.set_inner_html("");
    for label in row_labels(size) {
        let header = create_div(document, "row-header")?;
        header.set_text_content(Some(&label));
        row_headers.append_child(&header)?;
    }
    Ok(())
}

pub fn apply_changes(state: &State, changes: &[Change]) {
    for change in changes {
        match change {
            Change::Segment { segment, active } => {
                if let Some(element) = state.elements.segment(*segment) {
                    set_class(element, ACTIVE_CLASS, *active);
                }
            }
            Change::Floor { cell, color } => {
                if let Some(element) = state.elements.cell(*cell) {
                    paint_floor(element, *color);
                }
            }
            Change::Icon { cell, icon } => {
                if let Some(element) = state.elements.cell(*cell) {
                    if let Err(err) = show_icon(&state.document, element, icon.as_deref()) {
                        web_sys::console::error_1(&err);
                    }
                }
            }
        }
    }
}

fn paint_floor(cell: &HtmlElement, color: Option<FloorColor>) {
    for floor in FloorColor::ALL {
        set_class(cell, &floor.class_name(), color == Some(floor));
    }
}

fn show_icon(document: &Document, cell: &HtmlElement, icon: Option<&str>) -> Result<(), JsValue> {
    if let Some(existing) = cell.query_selector("img")? {
        existing.remove();
    }
    let Some(name) = icon else {
        return Ok(());
    };
    let img = document
        .create_element("img")?
        .dyn_into::<HtmlImageElement>()?;
    img.set_src(&icon_src(name));
    img.set_alt(name);
    img.set_class_name(PLACED_ICON_CLASS);
    img.set_draggable(true);
    img.set_attribute("data-name", name)?;
    cell.append_child(&img)?;
    Ok(())
}
