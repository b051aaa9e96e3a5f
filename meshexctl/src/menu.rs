//! Menu items the editor navigates over, with their labels and help text.

use meshex_core::EditorSession;

/// Editable attribute of one blob node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlobField {
    Color,
    X,
    Y,
    Size,
    Opacity,
}

/// One row of the editor's field list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuItem {
    Background,
    Blur,
    Noise,
    Blob(usize, BlobField),
}

/// Field rows for the current session. Blob count is fixed for the
/// session, so the item list only needs building once.
pub fn build_items(blob_count: usize) -> Vec<MenuItem> {
    let mut items =
        vec![MenuItem::Background, MenuItem::Blur, MenuItem::Noise];
    for index in 0..blob_count {
        items.extend([
            MenuItem::Blob(index, BlobField::Color),
            MenuItem::Blob(index, BlobField::X),
            MenuItem::Blob(index, BlobField::Y),
            MenuItem::Blob(index, BlobField::Size),
            MenuItem::Blob(index, BlobField::Opacity),
        ]);
    }
    items
}

pub fn item_category(item: MenuItem) -> &'static str {
    match item {
        MenuItem::Background | MenuItem::Blur | MenuItem::Noise => "Canvas",
        MenuItem::Blob(..) => "Nodes",
    }
}

pub fn menu_label(session: &EditorSession, item: MenuItem) -> String {
    let config = session.config();
    match item {
        MenuItem::Background => {
            format!("background: {}", config.background_color)
        }
        MenuItem::Blur => format!("blur: {}px", config.blur),
        MenuItem::Noise => {
            format!("noise: {}", if config.noise { "on" } else { "off" })
        }
        MenuItem::Blob(index, field) => match config.blobs.get(index) {
            Some(blob) => match field {
                BlobField::Color => {
                    format!("node {} color: {}", index + 1, blob.color)
                }
                BlobField::X => {
                    format!("node {} x: {:.1}%", index + 1, blob.x)
                }
                BlobField::Y => {
                    format!("node {} y: {:.1}%", index + 1, blob.y)
                }
                BlobField::Size => {
                    format!("node {} size: {:.1}%", index + 1, blob.size)
                }
                BlobField::Opacity => {
                    format!("node {} opacity: {:.2}", index + 1, blob.opacity)
                }
            },
            None => format!("node {} (missing)", index + 1),
        },
    }
}

pub fn field_type_hint(item: MenuItem) -> &'static str {
    match item {
        MenuItem::Background => "Type: hex color (#RRGGBB)",
        MenuItem::Blur => "Type: integer pixels (10-150)",
        MenuItem::Noise => "Type: boolean (Enter/Space toggles)",
        MenuItem::Blob(_, BlobField::Color) => "Type: hex color (#RRGGBB)",
        MenuItem::Blob(_, BlobField::X) | MenuItem::Blob(_, BlobField::Y) => {
            "Type: percentage (0-100)"
        }
        MenuItem::Blob(_, BlobField::Size) => "Type: percentage (10-120)",
        MenuItem::Blob(_, BlobField::Opacity) => "Type: decimal (0-1)",
    }
}

pub fn help_text(item: MenuItem) -> &'static str {
    match item {
        MenuItem::Background => "Solid base color painted under the blobs.",
        MenuItem::Blur => "Gaussian blur applied to the composed layers.",
        MenuItem::Noise => "Grain texture overlay on preview and export.",
        MenuItem::Blob(_, BlobField::Color) => {
            "Color of this radial node; opacity is applied on render."
        }
        MenuItem::Blob(_, BlobField::X) => {
            "Horizontal center of this node, percent of the container."
        }
        MenuItem::Blob(_, BlobField::Y) => {
            "Vertical center of this node, percent of the container."
        }
        MenuItem::Blob(_, BlobField::Size) => {
            "How far this node spreads before fading to transparent."
        }
        MenuItem::Blob(_, BlobField::Opacity) => {
            "Peak strength of this node's color at its center."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_cover_canvas_and_all_blob_fields() {
        let items = build_items(5);
        assert_eq!(items.len(), 3 + 5 * 5);
        assert_eq!(items[0], MenuItem::Background);
        assert_eq!(items[3], MenuItem::Blob(0, BlobField::Color));
        assert_eq!(items[27], MenuItem::Blob(4, BlobField::Opacity));
    }

    #[test]
    fn categories_split_canvas_from_nodes() {
        assert_eq!(item_category(MenuItem::Blur), "Canvas");
        assert_eq!(
            item_category(MenuItem::Blob(2, BlobField::Size)),
            "Nodes"
        );
    }

    #[test]
    fn labels_render_session_values() {
        let session = EditorSession::new();
        assert_eq!(
            menu_label(&session, MenuItem::Background),
            "background: #FFFFFF"
        );
        assert_eq!(menu_label(&session, MenuItem::Blur), "blur: 60px");
        assert_eq!(menu_label(&session, MenuItem::Noise), "noise: on");
        let color_label =
            menu_label(&session, MenuItem::Blob(0, BlobField::Color));
        assert!(color_label.starts_with("node 1 color: #"));
    }
}
