use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub const DEFAULT: GridSize = GridSize { rows: 30, cols: 35 };

    pub fn contains(self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Vertical segments run one column past the last cell, horizontal ones
    /// one row past the last cell.
    pub fn contains_segment(self, segment: Segment) -> bool {
        match segment.orientation {
            Orientation::Vertical => segment.row < self.rows && segment.col <= self.cols,
            Orientation::Horizontal => segment.row <= self.rows && segment.col < self.cols,
        }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Value of the `data-type` attribute on segment elements.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Vertical => "v",
            Orientation::Horizontal => "h",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "v" => Some(Orientation::Vertical),
            "h" => Some(Orientation::Horizontal),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Segment {
    pub fn vertical(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            orientation: Orientation::Vertical,
        }
    }

    pub fn horizontal(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            orientation: Orientation::Horizontal,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FloorColor {
    Green,
    Red,
    Yellow,
    Blue,
}

impl FloorColor {
    pub const ALL: [FloorColor; 4] = [
        FloorColor::Green,
        FloorColor::Red,
        FloorColor::Yellow,
        FloorColor::Blue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FloorColor::Green => "green",
            FloorColor::Red => "red",
            FloorColor::Yellow => "yellow",
            FloorColor::Blue => "blue",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.as_str() == value)
    }

    /// CSS class applied to a painted cell.
    pub fn class_name(self) -> String {
        format!("floor-{}", self.as_str())
    }
}

/// Memory-resident map state. Every accessor treats out-of-range
/// coordinates as absent, and every mutator ignores them.
pub struct GridModel {
    size: GridSize,
    v_walls: Vec<Vec<bool>>,
    h_walls: Vec<Vec<bool>>,
    floors: Vec<Vec<Option<FloorColor>>>,
    icons: Vec<Vec<Option<String>>>,
}

impl GridModel {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            v_walls: vec![vec![false; size.cols + 1]; size.rows],
            h_walls: vec![vec![false; size.cols]; size.rows + 1],
            floors: vec![vec![None; size.cols]; size.rows],
            icons: vec![vec![None; size.cols]; size.rows],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn wall(&self, segment: Segment) -> bool {
        let walls = match segment.orientation {
            Orientation::Vertical => &self.v_walls,
            Orientation::Horizontal => &self.h_walls,
        };
        walls
            .get(segment.row)
            .and_then(|row| row.get(segment.col))
            .copied()
            .unwrap_or(false)
    }

    /// Returns whether the stored value changed.
    pub fn set_wall(&mut self, segment: Segment, active: bool) -> bool {
        let walls = match segment.orientation {
            Orientation::Vertical => &mut self.v_walls,
            Orientation::Horizontal => &mut self.h_walls,
        };
        let Some(slot) = walls
            .get_mut(segment.row)
            .and_then(|row| row.get_mut(segment.col))
        else {
            return false;
        };
        let changed = *slot != active;
        *slot = active;
        changed
    }

    pub fn floor(&self, cell: Cell) -> Option<FloorColor> {
        self.floors
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .copied()
            .flatten()
    }

    pub fn set_floor(&mut self, cell: Cell, color: Option<FloorColor>) -> bool {
        let Some(slot) = self
            .floors
            .get_mut(cell.row)
            .and_then(|row| row.get_mut(cell.col))
        else {
            return false;
        };
        *slot = color;
        true
    }

    pub fn icon(&self, cell: Cell) -> Option<&str> {
        self.icons
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .and_then(|icon| icon.as_deref())
    }

    pub fn set_icon(&mut self, cell: Cell, icon: Option<String>) -> bool {
        let Some(slot) = self
            .icons
            .get_mut(cell.row)
            .and_then(|row| row.get_mut(cell.col))
        else {
            return false;
        };
        *slot = icon;
        true
    }

    pub fn take_icon(&mut self, cell: Cell) -> Option<String> {
        self.icons
            .get_mut(cell.row)
            .and_then(|row| row.get_mut(cell.col))
            .and_then(Option::take)
    }

    pub fn active_walls(&self) -> impl Iterator<Item = Segment> + '_ {
        let vertical = self.v_walls.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|(_, active)| **active)
                .map(move |(col, _)| Segment::vertical(row, col))
        });
        let horizontal = self.h_walls.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|(_, active)| **active)
                .map(move |(col, _)| Segment::horizontal(row, col))
        });
        vertical.chain(horizontal)
    }
}
