use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Cell, GridSize};

/// MIME type the palette and placed icons write their drag data under.
pub const DRAG_MIME: &str = "application/json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum DragPayload {
    #[serde(rename = "new")]
    NewIcon { name: String },
    #[serde(rename = "move")]
    MoveIcon {
        name: String,
        #[serde(rename = "r")]
        from_row: usize,
        #[serde(rename = "c")]
        from_col: usize,
    },
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("drag payload is empty")]
    Empty,
    #[error("drag payload is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("drag payload has no icon name")]
    EmptyName,
    #[error("drag source {row},{col} is outside the grid")]
    SourceOutOfBounds { row: usize, col: usize },
}

impl DragPayload {
    pub fn new_icon(name: impl Into<String>) -> Self {
        DragPayload::NewIcon { name: name.into() }
    }

    pub fn move_icon(name: impl Into<String>, from: Cell) -> Self {
        DragPayload::MoveIcon {
            name: name.into(),
            from_row: from.row,
            from_col: from.col,
        }
    }

    /// Decodes drag data and checks it against the grid it will land on.
    pub fn decode(raw: &str, size: GridSize) -> Result<Self, PayloadError> {
        if raw.trim().is_empty() {
            return Err(PayloadError::Empty);
        }
        let payload = serde_json::from_str::<DragPayload>(raw)?;
        if payload.name().trim().is_empty() {
            return Err(PayloadError::EmptyName);
        }
        if let Some(source) = payload.source() {
            if !size.contains(source) {
                return Err(PayloadError::SourceOutOfBounds {
                    row: source.row,
                    col: source.col,
                });
            }
        }
        Ok(payload)
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        match self {
            DragPayload::NewIcon { name } | DragPayload::MoveIcon { name, .. } => name,
        }
    }

    pub fn source(&self) -> Option<Cell> {
        match self {
            DragPayload::NewIcon { .. } => None,
            DragPayload::MoveIcon {
                from_row, from_col, ..
            } => Some(Cell::new(*from_row, *from_col)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_new_icon() {
        let payload =
            DragPayload::decode(r#"{"type":"new","name":"Door.png"}"#, GridSize::DEFAULT).unwrap();
        assert_eq!(payload, DragPayload::new_icon("Door.png"));
        assert_eq!(payload.source(), None);
    }

    #[test]
    fn test_decode_move_icon() {
        let payload = DragPayload::decode(
            r#"{"type":"move","name":"ladder.png","r":3,"c":7}"#,
            GridSize::DEFAULT,
        )
        .unwrap();
        assert_eq!(payload.name(), "ladder.png");
        assert_eq!(payload.source(), Some(Cell::new(3, 7)));
    }

    #[test]
    fn test_encode_uses_short_coordinate_keys() {
        let encoded = DragPayload::move_icon("X.png", Cell::new(1, 2)).encode();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["type"], "move");
        assert_eq!(value["r"], 1);
        assert_eq!(value["c"], 2);
    }

    #[test]
    fn test_rejects_bad_payloads() {
        let size = GridSize { rows: 4, cols: 4 };
        assert!(matches!(
            DragPayload::decode("", size),
            Err(PayloadError::Empty)
        ));
        assert!(matches!(
            DragPayload::decode("{not json", size),
            Err(PayloadError::Malformed(_))
        ));
        assert!(matches!(
            DragPayload::decode(r#"{"type":"copy","name":"X.png"}"#, size),
            Err(PayloadError::Malformed(_))
        ));
        assert!(matches!(
            DragPayload::decode(r#"{"type":"move","name":"X.png"}"#, size),
            Err(PayloadError::Malformed(_))
        ));
        assert!(matches!(
            DragPayload::decode(r#"{"type":"new","name":"  "}"#, size),
            Err(PayloadError::EmptyName)
        ));
        assert!(matches!(
            DragPayload::decode(r#"{"type":"move","name":"X.png","r":4,"c":0}"#, size),
            Err(PayloadError::SourceOutOfBounds { row: 4, col: 0 })
        ));
    }
}
