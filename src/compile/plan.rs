use crate::foundation::core::{CanvasSize, Color, Point, Roi};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Horizontal anchor of a text instruction relative to its position.
pub enum TextAlignX {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Vertical anchor of a text instruction relative to its position.
pub enum TextAlignY {
    Top,
    Baseline,
    Bottom,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Renderer-agnostic description of one shape.
///
/// Instructions are derived purely from geometry; none depends on pixels produced by
/// another, so a backend may execute them in plan order without any feedback.
pub enum DrawInstruction {
    /// Rectangle outline `thickness` pixels wide, straddling the region edge.
    Box {
        roi: Roi,
        color: Color,
        thickness: u32,
    },
    /// Straight line between two pixel positions.
    Line { p0: Point, p1: Point, color: Color },
    /// Line along the region diagonal drawn as alternating on/off segments.
    DashedLine {
        roi: Roi,
        color: Color,
        dot_interval: u32,
    },
    /// Single line of label text.
    Text {
        position: Point,
        text: String,
        color: Color,
        align_x: TextAlignX,
        align_y: TextAlignY,
    },
}

impl DrawInstruction {
    pub(crate) fn line(p0: (f64, f64), p1: (f64, f64), color: Color) -> Self {
        Self::Line {
            p0: Point::new(p0.0, p0.1),
            p1: Point::new(p1.0, p1.1),
            color,
        }
    }

    pub fn is_box(&self) -> bool {
        matches!(self, Self::Box { .. })
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line { .. } | Self::DashedLine { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Full overlay for one canvas: the derived frame plus every draw instruction in order.
pub struct OverlayPlan {
    pub canvas: CanvasSize,
    /// Aspect-fitted, scaled inner region.
    pub frame: Roi,
    pub instructions: Vec<DrawInstruction>,
}

impl OverlayPlan {
    pub fn boxes(&self) -> impl Iterator<Item = &DrawInstruction> {
        self.instructions.iter().filter(|i| i.is_box())
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
