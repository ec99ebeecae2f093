use crate::grid::FloorColor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Wall,
    Floor,
    Eraser,
    Icon,
}

impl Tool {
    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Wall => "wall",
            Tool::Floor => "floor",
            Tool::Eraser => "eraser",
            Tool::Icon => "icon",
        }
    }
}

/// What a toolbar button selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolChoice {
    Tool(Tool),
    Floor(FloorColor),
}

const TOOL_PREFIX: &str = "tool-";
const FLOOR_PREFIX: &str = "tool-floor-";

impl ToolChoice {
    /// Parses a toolbar button id such as `tool-wall` or `tool-floor-red`.
    pub fn from_button_id(id: &str) -> Option<Self> {
        if let Some(color) = id.strip_prefix(FLOOR_PREFIX) {
            return FloorColor::parse(color).map(ToolChoice::Floor);
        }
        match id.strip_prefix(TOOL_PREFIX)? {
            "wall" => Some(ToolChoice::Tool(Tool::Wall)),
            "eraser" => Some(ToolChoice::Tool(Tool::Eraser)),
            "icon" => Some(ToolChoice::Tool(Tool::Icon)),
            _ => None,
        }
    }

    pub fn button_id(self) -> String {
        match self {
            ToolChoice::Tool(tool) => format!("{TOOL_PREFIX}{}", tool.as_str()),
            ToolChoice::Floor(color) => format!("{FLOOR_PREFIX}{}", color.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_button_ids() {
        assert_eq!(
            ToolChoice::from_button_id("tool-wall"),
            Some(ToolChoice::Tool(Tool::Wall))
        );
        assert_eq!(
            ToolChoice::from_button_id("tool-floor-blue"),
            Some(ToolChoice::Floor(FloorColor::Blue))
        );
        assert_eq!(ToolChoice::from_button_id("tool-floor-pink"), None);
        assert_eq!(ToolChoice::from_button_id("tool-floor"), None);
        assert_eq!(ToolChoice::from_button_id("wall"), None);
    }

    #[test]
    fn test_button_id_matches_parser() {
        for choice in [
            ToolChoice::Tool(Tool::Eraser),
            ToolChoice::Tool(Tool::Icon),
            ToolChoice::Floor(FloorColor::Green),
        ] {
            assert_eq!(ToolChoice::from_button_id(&choice.button_id()), Some(choice));
        }
    }
}
