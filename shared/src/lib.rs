mod catalog;
mod editor;
mod grid;
mod input;
mod painter;
mod payload;
mod tool;

pub use catalog::{column_labels, icon_src, row_labels, ICONS, ICON_ASSET_DIR, SECTION_SPAN};
pub use editor::{Change, DropOutcome, Editor, Gesture};
pub use grid::{Cell, FloorColor, GridModel, GridSize, Orientation, Segment};
pub use input::{InputTracker, Point, PointerSample, HISTORY_LIMIT, HISTORY_WINDOW_MS};
pub use painter::{
    decide_cell, decide_segment, in_deadzone, starts_cell_stroke, AxisLock, CellAction,
    SegmentAction, SegmentHit, AXIS_LOCK_RATIO, DEADZONE_PX,
};
pub use payload::{DragPayload, PayloadError, DRAG_MIME};
pub use tool::{Tool, ToolChoice};
