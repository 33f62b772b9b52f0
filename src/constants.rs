/// DOM hooks and observer tuning for the showcase grid.
///
/// Kept free of crate paths so host-side tests can `include!` this file.
// Mount point rendered by the static page shell
pub const GRID_ELEMENT_ID: &str = "showcase-grid";

// Attribute carrying the card id on each rendered block
pub const BLOCK_ID_ATTR: &str = "data-block-id";
pub const ICON_ATTR: &str = "data-icon";

// Class names (styled by the page stylesheet)
pub const CARD_CLASS: &str = "bento-card";
pub const CARD_TITLE_CLASS: &str = "bento-title";
pub const CARD_BODY_CLASS: &str = "bento-body";
pub const ICON_CLASS: &str = "bento-icon";
pub const ORBIT_CLASS: &str = "orbit";
pub const ORBIT_CENTER_CLASS: &str = "orbit-center";
pub const ORBIT_NODE_CLASS: &str = "orbit-node";
pub const ORBIT_LINE_CLASS: &str = "orbit-line";

// IntersectionObserver options: fire as soon as any part of a block is on
// screen, measured against the unmodified viewport.
pub const OBSERVER_THRESHOLD: f64 = 0.0;
pub const OBSERVER_ROOT_MARGIN: &str = "0px";

/// Inline style for a connector line: anchored at the node, rotated to point
/// back at the centre.
pub fn orbit_line_css(x: f32, y: f32, rotation_deg: f32, length_px: f32) -> String {
    format!(
        "left:calc(50% + {:.2}px);top:calc(50% + {:.2}px);width:{:.2}px;transform-origin:0 50%;transform:rotate({:.2}deg)",
        x, y, length_px, rotation_deg
    )
}
