use super::*;
use crate::{
    compile::plan::{TextAlignX, TextAlignY},
    foundation::core::{CanvasSize, Color},
};

#[derive(Debug, PartialEq)]
enum Call {
    Outline(Roi),
    Line(Point, Point),
    Text(String),
    Finish,
}

#[derive(Default)]
struct RecordingBackend {
    calls: Vec<Call>,
}

impl RasterBackend for RecordingBackend {
    fn draw_outline(&mut self, roi: Roi, _color: Color) -> GuideResult<()> {
        self.calls.push(Call::Outline(roi));
        Ok(())
    }

    fn draw_line(&mut self, p0: Point, p1: Point, _color: Color) -> GuideResult<()> {
        self.calls.push(Call::Line(p0, p1));
        Ok(())
    }

    fn draw_text(&mut self, run: TextRun<'_>) -> GuideResult<()> {
        self.calls.push(Call::Text(run.text.to_string()));
        Ok(())
    }

    fn finish(&mut self) -> GuideResult<FrameRgbaF32> {
        self.calls.push(Call::Finish);
        Ok(FrameRgbaF32::transparent(4, 4))
    }
}

#[test]
fn box_outlines_straddle_the_edge() {
    let roi = Roi::new(10, 20, 10, 20);
    assert_eq!(
        box_outlines(roi, 2),
        vec![roi, Roi::new(11, 19, 11, 19), Roi::new(9, 21, 9, 21)]
    );
    assert_eq!(box_outlines(roi, 1), vec![roi]);
    assert!(box_outlines(roi, 0).is_empty());
}

#[test]
fn box_outlines_skip_collapsed_inner_rings() {
    let roi = Roi::new(0, 2, 0, 2);
    assert_eq!(box_outlines(roi, 2), vec![roi, Roi::new(-1, 3, -1, 3)]);
}

fn canvas(size: i32) -> Roi {
    Roi::new(0, size, 0, size)
}

#[test]
fn dash_segments_alternate_along_vertical_line() {
    let segs = dash_segments(Roi::new(265, 265, 0, 400), 5, canvas(1024));
    // 400 / 5 = 80 parts, every other one drawn.
    assert_eq!(segs.len(), 40);
    assert_eq!(segs[0], (Point::new(265.0, 0.0), Point::new(265.0, 5.0)));
    assert_eq!(segs[1], (Point::new(265.0, 10.0), Point::new(265.0, 15.0)));
    assert_eq!(
        segs[39],
        (Point::new(265.0, 390.0), Point::new(265.0, 395.0))
    );
}

#[test]
fn dash_segments_round_part_count() {
    // 12 / 5 rounds to 2 parts, so a single dash over the first half.
    let segs = dash_segments(Roi::new(0, 0, 0, 12), 5, canvas(64));
    assert_eq!(segs, vec![(Point::new(0.0, 0.0), Point::new(0.0, 6.0))]);
}

#[test]
fn dash_segments_degenerate_inputs() {
    assert!(dash_segments(Roi::new(0, 0, 0, 100), 0, canvas(128)).is_empty());
    assert!(dash_segments(Roi::new(5, 5, 5, 5), 5, canvas(128)).is_empty());
}

#[test]
fn dash_segments_stay_near_the_clip_region() {
    // A dashed vertical two billion pixels tall only yields the dashes near the canvas.
    let roi = Roi::new(5, 5, -1_000_000_000, 1_000_000_000);
    let segs = dash_segments(roi, 5, canvas(64));
    assert!(segs.len() <= 8, "{}", segs.len());
    assert!(segs.contains(&(Point::new(5.0, 0.0), Point::new(5.0, 5.0))));
    assert!(segs.contains(&(Point::new(5.0, 60.0), Point::new(5.0, 65.0))));
    for (p0, p1) in &segs {
        assert!(p0.y >= -10.0 && p1.y <= 70.0, "{p0:?} {p1:?}");
    }
}

#[test]
fn dash_segments_outside_the_clip_are_dropped() {
    assert!(dash_segments(Roi::new(100, 100, 0, 50), 5, canvas(64)).is_empty());
    assert!(dash_segments(Roi::new(10, 10, 200, 300), 5, canvas(64)).is_empty());
}

#[test]
fn clipping_keeps_the_dash_phase() {
    // Starting above the canvas, the dashes inside it sit where the unclipped ones do.
    let roi = Roi::new(3, 3, -20, 40);
    let all = dash_segments(roi, 5, Roi::new(-100, 100, -100, 100));
    let clipped = dash_segments(roi, 5, canvas(64));
    assert!(clipped.iter().all(|s| all.contains(s)));
    assert!(clipped.contains(&(Point::new(3.0, 0.0), Point::new(3.0, 5.0))));
    assert!(!clipped.contains(&(Point::new(3.0, -20.0), Point::new(3.0, -15.0))));
}

#[test]
fn execute_plan_lowers_every_instruction_in_order() {
    let plan = OverlayPlan {
        canvas: CanvasSize::new(64, 64).unwrap(),
        frame: Roi::new(16, 48, 16, 48),
        instructions: vec![
            DrawInstruction::Box {
                roi: Roi::new(0, 64, 0, 64),
                color: Color::WHITE,
                thickness: 2,
            },
            DrawInstruction::Line {
                p0: Point::new(0.0, 0.0),
                p1: Point::new(63.0, 63.0),
                color: Color::WHITE,
            },
            DrawInstruction::DashedLine {
                roi: Roi::new(32, 32, 0, 20),
                color: Color::WHITE,
                dot_interval: 5,
            },
            DrawInstruction::Text {
                position: Point::new(1.0, 60.0),
                text: "hello".to_string(),
                color: Color::WHITE,
                align_x: TextAlignX::Left,
                align_y: TextAlignY::Baseline,
            },
        ],
    };

    let mut backend = RecordingBackend::default();
    let frame = backend.render_plan(&plan).unwrap();
    assert_eq!(frame.width, 4);

    assert_eq!(
        backend.calls,
        vec![
            Call::Outline(Roi::new(0, 64, 0, 64)),
            Call::Outline(Roi::new(1, 63, 1, 63)),
            Call::Outline(Roi::new(-1, 65, -1, 65)),
            Call::Line(Point::new(0.0, 0.0), Point::new(63.0, 63.0)),
            Call::Line(Point::new(32.0, 0.0), Point::new(32.0, 5.0)),
            Call::Line(Point::new(32.0, 10.0), Point::new(32.0, 15.0)),
            Call::Text("hello".to_string()),
            Call::Finish,
        ]
    );
}
