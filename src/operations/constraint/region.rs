use crate::config::DrawingParameters;
use crate::error::Result;
use crate::geometry::{LineBase, Segment};
use crate::math::angle::angle_between;
use crate::math::intersect_2d::{line_line_intersect_2d, Crossing};
use crate::math::numeric::polar_coordinates;
use crate::math::{points_equiv, squared_distance, Point};
use crate::topology::{Arrangement, LineId, Vertex};

use super::{Anchor, SnappingElements};

/// Part of a line lying in the annulus between two circles.
#[derive(Debug, Clone, PartialEq)]
pub enum DonutClip {
    /// The line misses the outer circle (no point) or touches it (one point).
    Points(Vec<Point>),
    /// One chord of the outer circle, or two when the inner circle is crossed.
    Segments(Vec<Segment>),
}

/// Clips the infinite `line` to the annulus `min..max` around `center`.
///
/// Segments run from the outer circle inward and are tagged with `id`.
pub fn intersect_line_with_donut<L: LineBase>(
    line: &L,
    id: Option<LineId>,
    center: &Point,
    min: f64,
    max: f64,
) -> DonutClip {
    let outer = line.circle_intersections(center, max);
    let [o0, o1] = outer.as_slice() else {
        return DonutClip::Points(outer);
    };

    let inner = if min > 0.0 {
        line.circle_intersections(center, min)
    } else {
        Vec::new()
    };
    let segments = match inner.as_slice() {
        [i0, i1] => vec![Segment::on_line(*o0, *i0, id), Segment::on_line(*o1, *i1, id)],
        _ => vec![Segment::on_line(*o0, *o1, id)],
    };
    DonutClip::Segments(segments)
}

/// Continuous mode: the donut between the stroke circles, minus the dead zone
/// around the previous edge, clamped to the canvas.
pub(super) fn allowed_region(
    arr: &Arrangement,
    points: &[Vertex],
    lines: &[LineId],
    anchor: &Anchor,
    params: &DrawingParameters,
) -> Result<SnappingElements> {
    let last = anchor.last;
    let min2 = params.min_stroke.powi(2);
    let max2 = params.max_stroke.powi(2);

    let mut kept = Vec::with_capacity(points.len());
    for v in points {
        let d2 = squared_distance(&last, &arr.vertex_position(v)?);
        if d2 > min2 && d2 <= max2 {
            kept.push(*v);
        }
    }

    let mut segments = Vec::new();
    for &line in lines {
        let data = arr.line(line)?;
        match intersect_line_with_donut(data, Some(line), &last, params.min_stroke, params.max_stroke) {
            DonutClip::Points(hits) => {
                kept.extend(hits.into_iter().map(|position| Vertex::OnLine { position, line }));
            }
            DonutClip::Segments(clips) => segments.extend(clips),
        }
    }

    if let (Some(last_angle), Some(previous)) = (anchor.last_angle, anchor.previous) {
        let back = previous - last;
        let respects = |p: &Point| angle_between(&back, &(p - last)) >= params.min_angle;

        let mut outside = Vec::with_capacity(kept.len());
        for v in kept {
            if respects(&arr.vertex_position(&v)?) {
                outside.push(v);
            }
        }
        kept = outside;

        let rays = [
            polar_coordinates(last_angle - params.min_angle, params.max_stroke, &last, None),
            polar_coordinates(last_angle + params.min_angle, params.max_stroke, &last, None),
        ];
        segments = segments
            .into_iter()
            .flat_map(|s| cut_dead_zone(s, &last, &rays, &respects))
            .collect();
    }

    let size = params.drawing_size;
    for s in &mut segments {
        s.constrain_to_bounds(size.x, size.y);
    }

    Ok(SnappingElements {
        points: kept,
        segments,
    })
}

/// Removes the part of `s` lying between the two dead-zone rays.
///
/// A segment running along a ray is kept as the overlap. A segment through
/// `last` keeps only the halves whose far end is outside the dead zone.
fn cut_dead_zone(
    s: Segment,
    last: &Point,
    rays: &[Point; 2],
    respects: impl Fn(&Point) -> bool,
) -> Vec<Segment> {
    let line = s.associated_line();
    let (a, b) = (*s.a(), *s.b());
    let hits: Vec<Crossing> = rays
        .iter()
        .map(|r| line_line_intersect_2d(&a, &b, last, r, true))
        .filter(|c| !c.is_none())
        .collect();

    if let Some(&Crossing::Segment(p, q)) = hits.iter().find(|c| matches!(c, Crossing::Segment(..))) {
        return vec![Segment::on_line(p, q, line)];
    }

    let crossings: Vec<Point> = hits.iter().filter_map(Crossing::point).collect();
    match crossings.as_slice() {
        [] if respects(&a) => vec![s],
        [] => Vec::new(),
        [i] if respects(&a) => vec![Segment::on_line(a, *i, line)],
        [i] => vec![Segment::on_line(b, *i, line)],
        [i, j, ..] if points_equiv(i, last) && points_equiv(j, last) => [a, b]
            .into_iter()
            .filter(|end| respects(end))
            .map(|end| Segment::on_line(end, *last, line))
            .collect(),
        [i, j, ..] => {
            let mut ends = [a, b, *i, *j];
            if a.x - b.x == 0.0 {
                ends.sort_by(|m, n| m.y.total_cmp(&n.y));
            } else {
                ends.sort_by(|m, n| m.x.total_cmp(&n.x));
            }
            vec![
                Segment::on_line(ends[0], ends[1], line),
                Segment::on_line(ends[2], ends[3], line),
            ]
        }
    }
}
