use eframe::egui::{self, Color32, Painter, Pos2, Rect};

use crate::pad::ink::LiveStroke;
use crate::pad::model::{Stroke, StrokePoint};

/// One paintable span of a stroke, in canvas-local points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Pos2,
    pub b: Pos2,
    pub width: f32,
}

/// Consecutive point pairs of a stroke. Widths per segment average the
/// endpoint widths, so pressure changes taper instead of stepping.
pub fn stroke_segments(points: &[StrokePoint]) -> Vec<Segment> {
    points
        .windows(2)
        .map(|pair| Segment {
            a: pair[0].pos,
            b: pair[1].pos,
            width: 0.5 * (pair[0].width + pair[1].width),
        })
        .collect()
}

pub fn paint_background(painter: &Painter, rect: Rect, color: Color32) {
    painter.rect_filled(rect, 0.0, color);
}

pub fn paint_finished(painter: &Painter, origin: Pos2, strokes: &[Stroke]) {
    for stroke in strokes {
        paint_polyline(painter, origin, &stroke.points, stroke.brush.color);
    }
}

/// Wet ink: the committed points of every live stroke plus its predicted
/// tail. The tail is repainted from scratch each frame, so a stale
/// prediction never outlives the sample that spawned it.
pub fn paint_live(painter: &Painter, origin: Pos2, live: &[LiveStroke]) {
    for stroke in live {
        paint_polyline(painter, origin, &stroke.points, stroke.brush.color);
        if let (Some(last), Some(preview)) = (stroke.points.last(), stroke.preview) {
            let width = 0.5 * (last.width + preview.width);
            painter.line_segment(
                [origin + last.pos.to_vec2(), origin + preview.pos.to_vec2()],
                egui::Stroke::new(width, stroke.brush.color),
            );
            painter.circle_filled(
                origin + preview.pos.to_vec2(),
                preview.width * 0.5,
                stroke.brush.color,
            );
        }
    }
}

fn paint_polyline(painter: &Painter, origin: Pos2, points: &[StrokePoint], color: Color32) {
    // Round caps and joints; bare segments leave notches where width or
    // direction changes. A single point stays visible as a dot.
    for point in points {
        painter.circle_filled(origin + point.pos.to_vec2(), point.width * 0.5, color);
    }
    for seg in stroke_segments(points) {
        painter.line_segment(
            [origin + seg.a.to_vec2(), origin + seg.b.to_vec2()],
            egui::Stroke::new(seg.width, color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn no_segments_for_empty_or_single_point_strokes() {
        assert!(stroke_segments(&[]).is_empty());
        assert!(stroke_segments(&[StrokePoint::new(pos2(1.0, 1.0), 4.0)]).is_empty());
    }

    #[test]
    fn segments_follow_point_order_and_average_widths() {
        let points = [
            StrokePoint::new(pos2(0.0, 0.0), 2.0),
            StrokePoint::new(pos2(10.0, 0.0), 4.0),
            StrokePoint::new(pos2(10.0, 10.0), 4.0),
        ];
        let segs = stroke_segments(&points);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].a, pos2(0.0, 0.0));
        assert_eq!(segs[0].b, pos2(10.0, 0.0));
        assert_eq!(segs[0].width, 3.0);
        assert_eq!(segs[1].b, pos2(10.0, 10.0));
        assert_eq!(segs[1].width, 4.0);
    }
}
