//! Decisions for a single pointer event over a wall segment or a cell.
//!
//! Nothing here touches the grid: callers get an action back and apply it.

use crate::grid::Orientation;
use crate::input::InputTracker;
use crate::tool::Tool;

/// Permitted overshoot past a segment's ends, in pixels. Negative, so a
/// pointer slightly outside the box still counts.
pub const DEADZONE_PX: f64 = -4.0;
pub const AXIS_LOCK_RATIO: f64 = 1.5;

/// Pointer position relative to a segment element's bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentHit {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SegmentHit {
    pub fn center(width: f64, height: f64) -> Self {
        Self {
            x: width / 2.0,
            y: height / 2.0,
            width,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentAction {
    Set(bool),
    Ignore,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellAction {
    Paint,
    Erase,
    Ignore,
}

/// Stroke direction inferred from recent pointer movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisLock {
    Horizontal,
    Vertical,
    Free,
}

impl AxisLock {
    pub fn from_displacement(dx: f64, dy: f64) -> Self {
        let dx = dx.abs();
        let dy = dy.abs();
        if dx > dy * AXIS_LOCK_RATIO {
            AxisLock::Horizontal
        } else if dy > dx * AXIS_LOCK_RATIO {
            AxisLock::Vertical
        } else {
            AxisLock::Free
        }
    }

    pub fn from_tracker(tracker: &InputTracker) -> Self {
        match tracker.displacement() {
            Some((dx, dy)) => Self::from_displacement(dx, dy),
            None => AxisLock::Free,
        }
    }

    /// A horizontal stroke draws horizontal segments, so vertical ones are
    /// skipped, and vice versa.
    pub fn admits(self, orientation: Orientation) -> bool {
        match (self, orientation) {
            (AxisLock::Horizontal, Orientation::Vertical) => false,
            (AxisLock::Vertical, Orientation::Horizontal) => false,
            _ => true,
        }
    }
}

pub fn in_deadzone(orientation: Orientation, hit: SegmentHit) -> bool {
    let (along, length) = match orientation {
        Orientation::Vertical => (hit.y, hit.height),
        Orientation::Horizontal => (hit.x, hit.width),
    };
    along <= DEADZONE_PX || along >= length - DEADZONE_PX
}

pub fn decide_segment(
    orientation: Orientation,
    hit: SegmentHit,
    tool: Tool,
    drawing: bool,
    tracker: &InputTracker,
) -> SegmentAction {
    if in_deadzone(orientation, hit) {
        return SegmentAction::Ignore;
    }
    if drawing && tool == Tool::Wall && !AxisLock::from_tracker(tracker).admits(orientation) {
        return SegmentAction::Ignore;
    }
    match tool {
        Tool::Wall => SegmentAction::Set(true),
        Tool::Eraser => SegmentAction::Set(false),
        Tool::Floor | Tool::Icon => SegmentAction::Ignore,
    }
}

pub fn decide_cell(tool: Tool, drawing: bool) -> CellAction {
    if !drawing {
        return CellAction::Ignore;
    }
    match tool {
        Tool::Floor => CellAction::Paint,
        Tool::Eraser => CellAction::Erase,
        Tool::Wall | Tool::Icon => CellAction::Ignore,
    }
}

/// Whether pressing on a bare cell starts a stroke.
pub fn starts_cell_stroke(tool: Tool) -> bool {
    matches!(tool, Tool::Floor | Tool::Eraser)
}
