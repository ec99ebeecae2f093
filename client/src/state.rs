use web_sys::{Document, HtmlElement};

use gridmap_shared::{Cell, Editor, GridSize, Orientation, Segment};

pub const CELL_CLASS: &str = "cell";
pub const V_WALL_CLASS: &str = "v-wall";
pub const H_WALL_CLASS: &str = "h-wall";
pub const ACTIVE_CLASS: &str = "active";
pub const PLACED_ICON_CLASS: &str = "placed-icon";

/// Elements created for the grid, indexed the same way the model is.
pub struct GridElements {
    pub size: GridSize,
    pub cells: Vec<HtmlElement>,
    pub v_walls: Vec<HtmlElement>,
    pub h_walls: Vec<HtmlElement>,
}

impl GridElements {
    pub fn cell(&self, cell: Cell) -> Option<&HtmlElement> {
        if !self.size.contains(cell) {
            return None;
        }
        self.cells.get(cell.row * self.size.cols + cell.col)
    }

    pub fn segment(&self, segment: Segment) -> Option<&HtmlElement> {
        if !self.size.contains_segment(segment) {
            return None;
        }
        match segment.orientation {
            Orientation::Vertical => self
                .v_walls
                .get(segment.row * (self.size.cols + 1) + segment.col),
            Orientation::Horizontal => self.h_walls.get(segment.row * self.size.cols + segment.col),
        }
    }
}

pub struct State {
    pub document: Document,
    pub editor: Editor,
    pub elements: GridElements,
    pub debug: bool,
}
