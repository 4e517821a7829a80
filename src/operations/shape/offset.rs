use tracing::{trace, warn};

use crate::error::Result;
use crate::math::intersect_2d::{line_line_intersect_2d, Crossing};
use crate::math::polygon_2d::move_segment_outside;
use crate::math::Point;
use crate::topology::{Arrangement, IntersectionId, LineId, Vertex};

/// Builds (or reuses) the offset line of edge `BC`, given the corners
/// `[A, B, C, D]` and the edges `[AB, BC, CD]` of a clockwise ring.
///
/// The offset corners are registered on `AB` and `CD`. Only the first
/// registered parallel of `BC` is considered for reuse.
pub(super) fn offset_edge(
    arr: &mut Arrangement,
    corners: [IntersectionId; 4],
    edges: [LineId; 3],
    gap: f64,
) -> Result<LineId> {
    let [a, b, c, d] = corners;
    let [ab, bc, cd] = edges;

    let parallels = &arr.line(bc)?.parallels;
    if parallels.len() > 1 {
        warn!(
            edge = ?bc,
            parallels = parallels.len(),
            "edge has several parallels, only the first one is reused"
        );
    }
    let parallel = parallels.first().copied();

    let mut b2 = None;
    let mut c2 = None;
    let mut b_temp = None;
    let mut c_temp = None;
    if let Some(p) = parallel {
        trace!(edge = ?bc, parallel = ?p, "reusing offset line");
        b2 = arr.known_intersection(p, ab)?;
        c2 = arr.known_intersection(p, cd)?;

        let on_parallel = &arr.line(p)?.intersections;
        b_temp = b2.or_else(|| on_parallel.iter().copied().find(|&i| Some(i) != c2));
        c_temp = c2.or_else(|| {
            on_parallel
                .iter()
                .copied()
                .find(|&i| Some(i) != b2 && Some(i) != b_temp)
        });
    }

    let (b2, c2) = match (b2, c2) {
        (Some(b2), Some(c2)) => (b2, c2),
        _ => {
            let (b_temp, c_temp) = match (b_temp, c_temp) {
                (Some(bt), Some(ct)) => (Vertex::Intersection(bt), Vertex::Intersection(ct)),
                _ => {
                    let (moved_b, moved_c) =
                        move_segment_outside(&arr.position(b)?, &arr.position(c)?, gap);
                    (
                        b_temp.map_or(Vertex::Point(moved_b), Vertex::Intersection),
                        c_temp.map_or(Vertex::Point(moved_c), Vertex::Intersection),
                    )
                }
            };

            let pa = arr.position(a)?;
            let pb = arr.position(b)?;
            let pc = arr.position(c)?;
            let pd = arr.position(d)?;
            let pbt = arr.vertex_position(&b_temp)?;
            let pct = arr.vertex_position(&c_temp)?;
            let known = [Some(a), Some(b), Some(c), Some(d), b_temp.intersection(), c_temp.intersection()];

            let b2 = match b2 {
                Some(id) => id,
                None => corner(arr, line_line_intersect_2d(&pa, &pb, &pbt, &pct, false), &b_temp, &known)?,
            };
            let c2 = match c2 {
                Some(id) => id,
                None => corner(arr, line_line_intersect_2d(&pbt, &pct, &pc, &pd, false), &c_temp, &known)?,
            };
            (b2, c2)
        }
    };

    let parallel = match parallel {
        Some(p) => {
            arr.register(p, b2)?;
            arr.register(p, c2)?;
            p
        }
        None => arr.add_line(b2, c2)?,
    };

    arr.register(ab, b2)?;
    arr.register(cd, c2)?;
    arr.link_parallel_lines(bc, parallel)?;
    Ok(parallel)
}

/// Intersection for an offset corner: the crossing if there is one (reusing a
/// known intersection at exactly that position), else the fallback point.
fn corner(
    arr: &mut Arrangement,
    crossing: Crossing,
    fallback: &Vertex,
    known: &[Option<IntersectionId>],
) -> Result<IntersectionId> {
    let Crossing::Point(p) = crossing else {
        return Ok(arr.promote(fallback)?);
    };
    let existing = known
        .iter()
        .flatten()
        .copied()
        .find(|&id| arr.position(id).is_ok_and(|q: Point| q == p));
    Ok(match existing {
        Some(id) => id,
        None => arr.add_intersection(p),
    })
}
