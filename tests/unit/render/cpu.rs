use super::*;
use crate::{
    compile::plan::{DrawInstruction, OverlayPlan, TextAlignX, TextAlignY},
    render::backend::RasterBackend,
};

fn alpha_at(frame: &FrameRgbaF32, x: u32, y: u32) -> f32 {
    frame.pixel(x, y).unwrap()[3]
}

#[test]
fn outline_covers_border_pixels_only() {
    let canvas = CanvasSize::new(32, 32).unwrap();
    let mut backend = CpuBackend::new(canvas, None, 12.0).unwrap();
    backend
        .draw_outline(Roi::new(4, 28, 4, 28), Color::new(1.0, 0.0, 0.0))
        .unwrap();
    let frame = backend.finish().unwrap();

    assert_eq!((frame.width, frame.height), (32, 32));
    assert_eq!(frame.data.len(), 32 * 32 * 4);

    let corner = frame.pixel(4, 4).unwrap();
    assert!(corner[3] > 0.9, "corner {corner:?}");
    assert!(corner[0] > 0.9 && corner[1] < 0.1);
    assert!(alpha_at(&frame, 27, 27) > 0.9);
    assert!(alpha_at(&frame, 16, 4) > 0.9);

    assert_eq!(alpha_at(&frame, 16, 16), 0.0);
    assert_eq!(alpha_at(&frame, 2, 2), 0.0);
}

#[test]
fn out_of_canvas_geometry_is_clipped() {
    let canvas = CanvasSize::new(16, 16).unwrap();
    let mut backend = CpuBackend::new(canvas, None, 12.0).unwrap();
    backend
        .draw_outline(Roi::new(-1, 17, -1, 17), Color::WHITE)
        .unwrap();
    backend
        .draw_line(Point::new(-10.0, 8.0), Point::new(40.0, 8.0), Color::WHITE)
        .unwrap();
    let frame = backend.finish().unwrap();
    assert!(alpha_at(&frame, 0, 8) > 0.9);
    assert!(alpha_at(&frame, 15, 8) > 0.9);
    assert_eq!(alpha_at(&frame, 8, 0), 0.0);
}

#[test]
fn plan_render_without_font_skips_text() {
    let plan = OverlayPlan {
        canvas: CanvasSize::new(24, 24).unwrap(),
        frame: Roi::new(6, 18, 6, 18),
        instructions: vec![
            DrawInstruction::Box {
                roi: Roi::new(6, 18, 6, 18),
                color: Color::WHITE,
                thickness: 2,
            },
            DrawInstruction::Text {
                position: Point::new(2.0, 20.0),
                text: "size: 24, 24".to_string(),
                color: Color::WHITE,
                align_x: TextAlignX::Left,
                align_y: TextAlignY::Baseline,
            },
        ],
    };
    let mut backend = CpuBackend::new(plan.canvas, None, 12.0).unwrap();
    let frame = backend.render_plan(&plan).unwrap();

    // Outer ring at t = 1 and inner ring at t = 1 are both drawn.
    assert!(alpha_at(&frame, 5, 12) > 0.9);
    assert!(alpha_at(&frame, 7, 12) > 0.9);
    assert_eq!(alpha_at(&frame, 12, 12), 0.0);
    assert_eq!(alpha_at(&frame, 2, 20), 0.0);
}

#[test]
fn out_of_range_ink_reaches_the_frame_unchanged() {
    let canvas = CanvasSize::new(32, 32).unwrap();
    let mut backend = CpuBackend::new(canvas, None, 12.0).unwrap();
    let ink = Color::new(0.3, 2.0, 0.1);
    backend.draw_outline(Roi::new(0, 32, 0, 32), ink).unwrap();
    let frame = backend.finish().unwrap();

    let px = frame.pixel(0, 16).unwrap();
    assert!((px[0] - 0.3).abs() < 1e-5, "{px:?}");
    assert!((px[1] - 2.0).abs() < 1e-5, "{px:?}");
    assert!((px[2] - 0.1).abs() < 1e-5, "{px:?}");
    assert!(px[3] > 0.9);
}

#[test]
fn each_draw_keeps_its_own_ink() {
    let canvas = CanvasSize::new(32, 32).unwrap();
    let mut backend = CpuBackend::new(canvas, None, 12.0).unwrap();
    backend
        .draw_outline(Roi::new(0, 32, 0, 32), Color::new(1.0, 0.0, 0.0))
        .unwrap();
    backend
        .draw_line(
            Point::new(8.0, 16.0),
            Point::new(24.0, 16.0),
            Color::new(0.0, 0.0, 3.0),
        )
        .unwrap();
    let frame = backend.finish().unwrap();

    let red = frame.pixel(0, 8).unwrap();
    assert!((red[0] - 1.0).abs() < 1e-5 && red[2].abs() < 1e-5, "{red:?}");
    let blue = frame.pixel(16, 16).unwrap();
    assert!((blue[2] - 3.0).abs() < 1e-5 && blue[0].abs() < 1e-5, "{blue:?}");
    assert_eq!(alpha_at(&frame, 16, 8), 0.0);
}
