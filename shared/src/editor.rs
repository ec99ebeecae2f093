use crate::grid::{Cell, FloorColor, GridModel, GridSize, Segment};
use crate::input::InputTracker;
use crate::painter::{
    decide_cell, decide_segment, starts_cell_stroke, CellAction, SegmentAction, SegmentHit,
};
use crate::payload::{DragPayload, PayloadError};
use crate::tool::{Tool, ToolChoice};

/// One visual update the page has to mirror.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Change {
    Segment { segment: Segment, active: bool },
    Floor { cell: Cell, color: Option<FloorColor> },
    Icon { cell: Cell, icon: Option<String> },
}

#[derive(Debug)]
pub enum DropOutcome {
    Placed(Vec<Change>),
    Rejected(PayloadError),
    OffGrid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Idle,
    Drawing,
}

/// Owns every piece of editor state; the page only talks to the grid
/// through these methods.
pub struct Editor {
    grid: GridModel,
    tracker: InputTracker,
    tool: Tool,
    floor_color: FloorColor,
    gesture: Gesture,
}

impl Editor {
    pub fn new(size: GridSize) -> Self {
        Self {
            grid: GridModel::new(size),
            tracker: InputTracker::new(),
            tool: Tool::Wall,
            floor_color: FloorColor::Green,
            gesture: Gesture::Idle,
        }
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn floor_color(&self) -> FloorColor {
        self.floor_color
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture == Gesture::Drawing
    }

    pub fn select(&mut self, choice: ToolChoice) {
        match choice {
            ToolChoice::Tool(tool) => self.tool = tool,
            ToolChoice::Floor(color) => {
                self.tool = Tool::Floor;
                self.floor_color = color;
            }
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, now: f64) {
        self.tracker.record(x, y, now);
    }

    /// Any release anywhere on the page ends the stroke.
    pub fn pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
    }

    pub fn cell_pointer_down(&mut self, cell: Cell) -> Vec<Change> {
        if !self.grid.size().contains(cell) || !starts_cell_stroke(self.tool) {
            return Vec::new();
        }
        self.gesture = Gesture::Drawing;
        self.apply_cell(cell)
    }

    pub fn cell_pointer_enter(&mut self, cell: Cell) -> Vec<Change> {
        if !self.is_drawing() || !self.grid.size().contains(cell) {
            return Vec::new();
        }
        self.apply_cell(cell)
    }

    /// Pressing on a segment starts a stroke whatever the tool is.
    pub fn segment_pointer_down(&mut self, segment: Segment, hit: SegmentHit) -> Vec<Change> {
        if !self.grid.size().contains_segment(segment) {
            return Vec::new();
        }
        self.gesture = Gesture::Drawing;
        self.apply_segment(segment, hit)
    }

    pub fn segment_pointer_enter(&mut self, segment: Segment, hit: SegmentHit) -> Vec<Change> {
        if !self.is_drawing() || !matches!(self.tool, Tool::Wall | Tool::Eraser) {
            return Vec::new();
        }
        if !self.grid.size().contains_segment(segment) {
            return Vec::new();
        }
        self.apply_segment(segment, hit)
    }

    /// A move clears its source only once the destination is known to be
    /// a real cell; a drop that never lands leaves the icon where it was.
    pub fn drop_payload(&mut self, raw: &str, destination: Cell) -> DropOutcome {
        let size = self.grid.size();
        if !size.contains(destination) {
            return DropOutcome::OffGrid;
        }
        let payload = match DragPayload::decode(raw, size) {
            Ok(payload) => payload,
            Err(error) => return DropOutcome::Rejected(error),
        };
        let mut changes = Vec::new();
        if let Some(source) = payload.source() {
            self.grid.take_icon(source);
            changes.push(Change::Icon {
                cell: source,
                icon: None,
            });
        }
        let name = match payload {
            DragPayload::NewIcon { name } | DragPayload::MoveIcon { name, .. } => name,
        };
        self.grid.set_icon(destination, Some(name.clone()));
        changes.push(Change::Icon {
            cell: destination,
            icon: Some(name),
        });
        DropOutcome::Placed(changes)
    }

    fn apply_cell(&mut self, cell: Cell) -> Vec<Change> {
        match decide_cell(self.tool, self.is_drawing()) {
            CellAction::Paint => {
                let color = Some(self.floor_color);
                self.grid.set_floor(cell, color);
                vec![Change::Floor { cell, color }]
            }
            CellAction::Erase => {
                self.grid.set_floor(cell, None);
                let mut changes = vec![Change::Floor { cell, color: None }];
                if self.grid.take_icon(cell).is_some() {
                    changes.push(Change::Icon { cell, icon: None });
                }
                changes
            }
            CellAction::Ignore => Vec::new(),
        }
    }

    fn apply_segment(&mut self, segment: Segment, hit: SegmentHit) -> Vec<Change> {
        let action = decide_segment(
            segment.orientation,
            hit,
            self.tool,
            self.is_drawing(),
            &self.tracker,
        );
        match action {
            SegmentAction::Set(active) => {
                self.grid.set_wall(segment, active);
                vec![Change::Segment { segment, active }]
            }
            SegmentAction::Ignore => Vec::new(),
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(GridSize::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> SegmentHit {
        SegmentHit::center(6.0, 30.0)
    }

    fn placed(outcome: DropOutcome) -> Vec<Change> {
        match outcome {
            DropOutcome::Placed(changes) => changes,
            DropOutcome::Rejected(error) => panic!("drop rejected: {error}"),
            DropOutcome::OffGrid => panic!("drop missed the grid"),
        }
    }

    #[test]
    fn test_wall_then_eraser_restores_segment() {
        let mut editor = Editor::default();
        let segment = Segment::vertical(2, 3);
        editor.segment_pointer_down(segment, center());
        assert!(editor.grid().wall(segment));
        editor.pointer_up();

        editor.select(ToolChoice::Tool(Tool::Eraser));
        editor.segment_pointer_down(segment, center());
        assert!(!editor.grid().wall(segment));
    }

    #[test]
    fn test_repeated_wall_is_idempotent() {
        let mut editor = Editor::default();
        let segment = Segment::horizontal(0, 0);
        editor.segment_pointer_down(segment, center());
        editor.segment_pointer_enter(segment, center());
        assert!(editor.grid().wall(segment));
        assert_eq!(editor.grid().active_walls().count(), 1);
    }

    #[test]
    fn test_enter_without_press_does_nothing() {
        let mut editor = Editor::default();
        assert!(editor
            .segment_pointer_enter(Segment::vertical(1, 1), center())
            .is_empty());
        editor.select(ToolChoice::Floor(FloorColor::Red));
        assert!(editor.cell_pointer_enter(Cell::new(1, 1)).is_empty());
        assert_eq!(editor.grid().floor(Cell::new(1, 1)), None);
    }

    #[test]
    fn test_floor_is_last_writer_wins() {
        let mut editor = Editor::default();
        let cell = Cell::new(4, 4);
        editor.select(ToolChoice::Floor(FloorColor::Green));
        editor.cell_pointer_down(cell);
        editor.pointer_up();
        editor.select(ToolChoice::Floor(FloorColor::Blue));
        let changes = editor.cell_pointer_down(cell);
        assert_eq!(editor.grid().floor(cell), Some(FloorColor::Blue));
        assert_eq!(
            changes,
            vec![Change::Floor {
                cell,
                color: Some(FloorColor::Blue)
            }]
        );
    }

    #[test]
    fn test_floor_stroke_paints_every_entered_cell() {
        let mut editor = Editor::default();
        editor.select(ToolChoice::Floor(FloorColor::Yellow));
        editor.cell_pointer_down(Cell::new(0, 0));
        editor.cell_pointer_enter(Cell::new(0, 1));
        editor.cell_pointer_enter(Cell::new(1, 1));
        editor.pointer_up();
        editor.cell_pointer_enter(Cell::new(2, 2));
        for cell in [Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)] {
            assert_eq!(editor.grid().floor(cell), Some(FloorColor::Yellow));
        }
        assert_eq!(editor.grid().floor(Cell::new(2, 2)), None);
    }

    #[test]
    fn test_eraser_clears_floor_and_icon() {
        let mut editor = Editor::default();
        let cell = Cell::new(3, 3);
        editor.select(ToolChoice::Floor(FloorColor::Red));
        editor.cell_pointer_down(cell);
        editor.pointer_up();
        placed(editor.drop_payload(r#"{"type":"new","name":"rock.png"}"#, cell));

        editor.select(ToolChoice::Tool(Tool::Eraser));
        let changes = editor.cell_pointer_down(cell);
        assert_eq!(editor.grid().floor(cell), None);
        assert_eq!(editor.grid().icon(cell), None);
        assert_eq!(
            changes,
            vec![
                Change::Floor { cell, color: None },
                Change::Icon { cell, icon: None },
            ]
        );
    }

    #[test]
    fn test_wall_tool_press_on_cell_does_not_start_stroke() {
        let mut editor = Editor::default();
        assert!(editor.cell_pointer_down(Cell::new(0, 0)).is_empty());
        assert_eq!(editor.gesture(), Gesture::Idle);
    }

    #[test]
    fn test_segment_press_starts_stroke_for_any_tool() {
        let mut editor = Editor::default();
        editor.select(ToolChoice::Floor(FloorColor::Green));
        let changes = editor.segment_pointer_down(Segment::vertical(0, 0), center());
        assert!(changes.is_empty());
        assert!(editor.is_drawing());
        editor.pointer_up();
        assert_eq!(editor.gesture(), Gesture::Idle);
    }

    #[test]
    fn test_move_drop_clears_source() {
        let mut editor = Editor::default();
        let source = Cell::new(1, 1);
        let destination = Cell::new(6, 8);
        placed(editor.drop_payload(r#"{"type":"new","name":"golem.png"}"#, source));
        let changes = placed(editor.drop_payload(
            r#"{"type":"move","name":"golem.png","r":1,"c":1}"#,
            destination,
        ));
        assert_eq!(editor.grid().icon(source), None);
        assert_eq!(editor.grid().icon(destination), Some("golem.png"));
        assert_eq!(
            changes,
            vec![
                Change::Icon {
                    cell: source,
                    icon: None
                },
                Change::Icon {
                    cell: destination,
                    icon: Some("golem.png".to_string())
                },
            ]
        );
    }

    #[test]
    fn test_drop_replaces_existing_icon() {
        let mut editor = Editor::default();
        let cell = Cell::new(0, 0);
        placed(editor.drop_payload(r#"{"type":"new","name":"tent.png"}"#, cell));
        placed(editor.drop_payload(r#"{"type":"new","name":"sign.png"}"#, cell));
        assert_eq!(editor.grid().icon(cell), Some("sign.png"));
    }

    #[test]
    fn test_bad_drop_leaves_grid_untouched() {
        let mut editor = Editor::default();
        let source = Cell::new(2, 2);
        placed(editor.drop_payload(r#"{"type":"new","name":"hole.png"}"#, source));

        let outcome = editor.drop_payload("{oops", Cell::new(3, 3));
        assert!(matches!(outcome, DropOutcome::Rejected(PayloadError::Malformed(_))));

        let outcome = editor.drop_payload(
            r#"{"type":"move","name":"hole.png","r":2,"c":2}"#,
            Cell::new(99, 0),
        );
        assert!(matches!(outcome, DropOutcome::OffGrid));
        assert_eq!(editor.grid().icon(source), Some("hole.png"));
        assert_eq!(editor.grid().icon(Cell::new(3, 3)), None);
    }

    #[test]
    fn test_out_of_range_targets_are_ignored() {
        let mut editor = Editor::new(GridSize { rows: 2, cols: 2 });
        assert!(editor
            .segment_pointer_down(Segment::vertical(2, 0), center())
            .is_empty());
        assert!(!editor.is_drawing());
        editor.select(ToolChoice::Tool(Tool::Eraser));
        assert!(editor.cell_pointer_down(Cell::new(0, 5)).is_empty());
    }
}
