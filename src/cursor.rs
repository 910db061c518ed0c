// State behind the custom cursor: a dot and an outline that follow the mouse,
// shrink while a button is held and grow over links and buttons.

use vecmath::Vector2;

/// Elements that make the cursor grow while hovered.
pub const INTERACTIVE_SELECTOR: &str = "a, button, .interactive-item";
/// Devices matching this get the native cursor only.
pub const TOUCH_ONLY_QUERY: &str = "(hover: none) and (pointer: coarse)";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CursorPart {
    Dot,
    Outline,
}

impl CursorPart {
    pub fn class(self) -> &'static str {
        match self {
            CursorPart::Dot => "cursor-dot",
            CursorPart::Outline => "cursor-outline",
        }
    }

    /// The outline trails behind the dot.
    pub fn transition(self) -> &'static str {
        match self {
            CursorPart::Dot => "transform 0.15s ease-out, opacity 0.15s ease-out",
            CursorPart::Outline => "transform 0.3s ease-out, opacity 0.3s ease-out",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CursorState {
    pub pos: Vector2<f64>,
    pub hidden: bool,
    pub pressed: bool,
    pub hovering_interactive: bool,
}

impl CursorState {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.hidden = false;
        self.pos = [x, y];
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn set_hovering_interactive(&mut self, hovering: bool) {
        self.hovering_interactive = hovering;
    }

    pub fn opacity_class(&self) -> &'static str {
        if self.hidden {
            "opacity-0"
        } else {
            "opacity-100"
        }
    }

    // Hovering wins over pressing
    pub fn scale_class(&self) -> &'static str {
        if self.hovering_interactive {
            "scale-150"
        } else if self.pressed {
            "scale-75"
        } else {
            "scale-100"
        }
    }

    pub fn class_name(&self, part: CursorPart) -> String {
        format!(
            "{} {} {}",
            part.class(),
            self.opacity_class(),
            self.scale_class()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible_at_origin() {
        let cursor = CursorState::default();
        assert_eq!(cursor.pos, [0.0, 0.0]);
        assert_eq!(
            cursor.class_name(CursorPart::Dot),
            "cursor-dot opacity-100 scale-100"
        );
    }

    #[test]
    fn moving_reveals_hidden_cursor() {
        let mut cursor = CursorState::default();
        cursor.set_hidden(true);
        assert_eq!(cursor.opacity_class(), "opacity-0");
        cursor.move_to(12.0, 34.0);
        assert_eq!(cursor.pos, [12.0, 34.0]);
        assert!(!cursor.hidden);
    }

    #[test]
    fn pressing_shrinks() {
        let mut cursor = CursorState::default();
        cursor.set_pressed(true);
        assert_eq!(
            cursor.class_name(CursorPart::Outline),
            "cursor-outline opacity-100 scale-75"
        );
        cursor.set_pressed(false);
        assert_eq!(cursor.scale_class(), "scale-100");
    }

    #[test]
    fn hovering_beats_pressing() {
        let mut cursor = CursorState::default();
        cursor.set_pressed(true);
        cursor.set_hovering_interactive(true);
        assert_eq!(cursor.scale_class(), "scale-150");
        cursor.set_hovering_interactive(false);
        assert_eq!(cursor.scale_class(), "scale-75");
    }

    #[test]
    fn outline_lags_behind_dot() {
        assert!(CursorPart::Dot.transition().contains("0.15s"));
        assert!(CursorPart::Outline.transition().contains("0.3s"));
    }
}
