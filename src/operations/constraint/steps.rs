use std::f64::consts::PI;

use crate::config::DrawingParameters;
use crate::error::Result;
use crate::geometry::{LineBase, Segment};
use crate::math::angle::angle_between;
use crate::math::intersect_2d::{line_line_intersect_2d, Crossing};
use crate::math::numeric::polar_coordinates;
use crate::math::{points_equiv, Point};
use crate::topology::{Arrangement, LineId, Vertex};

use super::{Anchor, SnappingElements};

/// The fan of spokes around `last`, one tick every `angle_step`, spanning
/// `min_stroke..max_stroke` and clamped to the canvas.
///
/// Spoke ends falling in the dead zone around the previous edge are dropped,
/// or folded onto `last` when `min_stroke` is zero.
#[must_use]
pub fn step_segments(
    last: &Point,
    previous: Option<&Point>,
    last_angle: Option<f64>,
    params: &DrawingParameters,
) -> Vec<Segment> {
    let respects = |p: &Point| match previous {
        Some(prev) => angle_between(&(prev - last), &(p - last)) >= params.min_angle,
        None => true,
    };

    let size = Some(&params.drawing_size);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ticks = (PI / params.angle_step).round() as usize;

    let mut spokes = Vec::new();
    for step in 0..ticks {
        #[allow(clippy::cast_precision_loss)]
        let i = step as f64 * params.angle_step;
        let j = i - PI;
        let a = polar_coordinates(i, params.max_stroke, last, size);
        let b = polar_coordinates(i, params.min_stroke, last, size);
        let c = polar_coordinates(j, params.min_stroke, last, size);
        let d = polar_coordinates(j, params.max_stroke, last, size);

        if params.min_stroke == 0.0 {
            let (mut p1, mut p2) = (a, d);
            if last_angle.is_some() && params.min_angle > 0.0 {
                if !respects(&p1) {
                    p1 = *last;
                }
                if !respects(&p2) {
                    p2 = *last;
                }
            }
            if p1 != p2 {
                spokes.push(Segment::new(p1, p2));
            }
        } else {
            if params.min_angle == 0.0 || respects(&a) {
                spokes.push(Segment::new(a, b));
            }
            if params.min_angle == 0.0 || respects(&d) {
                spokes.push(Segment::new(c, d));
            }
        }
    }
    spokes
}

/// Stepped mode: snap targets lying on the spokes.
pub(super) fn angle_steps(
    arr: &Arrangement,
    points: &[Vertex],
    lines: &[LineId],
    anchor: &Anchor,
    params: &DrawingParameters,
) -> Result<SnappingElements> {
    let last = anchor.last;
    let spokes = step_segments(&last, anchor.previous.as_ref(), anchor.last_angle, params);

    let mut found = Vec::new();
    for v in points {
        if *v == anchor.vertex {
            continue;
        }
        let p = arr.vertex_position(v)?;
        if spokes.iter().any(|s| s.includes_point(&p)) {
            found.push(*v);
        }
    }

    let mut segments = Vec::new();
    for &line in lines {
        let data = arr.line(line)?;
        let [b0, b1, ..] = data.bounds.as_slice() else {
            continue;
        };
        for s in &spokes {
            match line_line_intersect_2d(s.a(), s.b(), b0, b1, true) {
                Crossing::Point(p) if !points_equiv(&p, &last) => {
                    let mut existing = None;
                    for &i in &data.intersections {
                        if points_equiv(&arr.position(i)?, &p) {
                            existing = Some(i);
                            break;
                        }
                    }
                    let candidate = match existing {
                        Some(i) => Vertex::Intersection(i),
                        None => Vertex::OnLine { position: p, line },
                    };
                    add_candidate(arr, &mut found, candidate, &last)?;
                }
                Crossing::Segment(p, q) => segments.push(Segment::on_line(p, q, Some(line))),
                Crossing::Point(_) | Crossing::None => {}
            }
        }
    }

    Ok(SnappingElements {
        points: found,
        segments,
    })
}

/// Appends `candidate` unless it sits on `last` or its location is already
/// represented.
fn add_candidate(arr: &Arrangement, found: &mut Vec<Vertex>, candidate: Vertex, last: &Point) -> Result<()> {
    let p = arr.vertex_position(&candidate)?;
    if points_equiv(&p, last) {
        return Ok(());
    }
    for v in found.iter() {
        if *v == candidate || points_equiv(&arr.vertex_position(v)?, &p) {
            return Ok(());
        }
    }
    found.push(candidate);
    Ok(())
}
