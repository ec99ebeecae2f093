use crate::grid::GridSize;

/// Directory, relative to the page, that icon names resolve against.
pub const ICON_ASSET_DIR: &str = "icon";

/// Cells covered by one row or column header.
pub const SECTION_SPAN: usize = 5;

pub const ICONS: [&str; 69] = [
    "0.png",
    "1.png",
    "2.png",
    "3.png",
    "4.png",
    "5.png",
    "6.png",
    "7.png",
    "8.png",
    "9.png",
    "Alphabet E.png",
    "Closed Door.png",
    "Debris.png",
    "Door.png",
    "Down stairs.png",
    "Exclamation.png",
    "Hand.png",
    "O.png",
    "Question.png",
    "Treasure Chest.png",
    "Up stairs.png",
    "X.png",
    "axis.png",
    "boat.png",
    "bonfire.png",
    "bridgedown.png",
    "bridgeleft.png",
    "bridgeright.png",
    "bridgeup.png",
    "bug.png",
    "chestopen.png",
    "crystal.png",
    "down.png",
    "eo.png",
    "fishing.png",
    "floating bridge.png",
    "golem.png",
    "harvest.png",
    "hole.png",
    "holetrap.png",
    "ice.png",
    "jumpdown.png",
    "jumpup.png",
    "ladder.png",
    "left.png",
    "leftrightblue.png",
    "leftrightyellow.png",
    "lever.png",
    "monster.png",
    "pedestaldown.png",
    "pedestalup.png",
    "pick.png",
    "portal.png",
    "quest.png",
    "right.png",
    "rock.png",
    "scale.png",
    "shear.png",
    "sign.png",
    "stone.png",
    "switch.png",
    "tent.png",
    "tombstone.png",
    "twinkle.png",
    "up.png",
    "updownblue.png",
    "updownyellow.png",
    "wallgimmick.png",
    "marker.webp",
];

pub fn icon_src(name: &str) -> String {
    format!("{ICON_ASSET_DIR}/{name}")
}

/// Column headers: `1`, `2`, ... one per started block of columns.
pub fn column_labels(size: GridSize) -> Vec<String> {
    (1..=size.cols.div_ceil(SECTION_SPAN))
        .map(|index| index.to_string())
        .collect()
}

/// Row headers: `A`, `B`, ... continuing as `AA`, `AB` past `Z`.
pub fn row_labels(size: GridSize) -> Vec<String> {
    (0..size.rows.div_ceil(SECTION_SPAN))
        .map(letter_label)
        .collect()
}

fn letter_label(mut index: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_headers() {
        assert_eq!(
            column_labels(GridSize::DEFAULT),
            vec!["1", "2", "3", "4", "5", "6", "7"]
        );
        assert_eq!(
            row_labels(GridSize::DEFAULT),
            vec!["A", "B", "C", "D", "E", "F"]
        );
    }

    #[test]
    fn test_partial_sections_get_a_header() {
        let size = GridSize { rows: 11, cols: 6 };
        assert_eq!(column_labels(size), vec!["1", "2"]);
        assert_eq!(row_labels(size), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_letter_labels_past_z() {
        assert_eq!(letter_label(25), "Z");
        assert_eq!(letter_label(26), "AA");
        assert_eq!(letter_label(27), "AB");
    }

    #[test]
    fn test_icon_src() {
        assert_eq!(icon_src("Treasure Chest.png"), "icon/Treasure Chest.png");
        assert!(ICONS.iter().all(|name| !name.is_empty()));
    }
}
