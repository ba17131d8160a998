//! Marching triangles isoline extraction.
//!
//! Walks every triangle of a sampled scalar field and emits the line segments
//! where the field crosses a given iso-value. Crossing points on shared grid
//! edges are deduplicated so adjacent segments connect exactly.

#![allow(clippy::cast_possible_truncation)]

use std::collections::HashMap;

use glam::{Vec2, Vec3};

/// Output segment soup from the marching triangles algorithm.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsolineMesh {
    /// Crossing points; `z` holds the interpolated sample value, which lands
    /// on the iso-value at every crossing.
    pub points: Vec<Vec3>,
    /// Segment indices (every 2 consecutive indices form a segment).
    pub indices: Vec<u32>,
}

impl IsolineMesh {
    /// Returns the number of crossing points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn num_segments(&self) -> usize {
        self.indices.len() / 2
    }

    /// Returns true if the mesh has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends another mesh, shifting its indices past this mesh's points.
    pub fn append(&mut self, other: &Self) {
        let offset = self.points.len() as u32;
        self.points.extend_from_slice(&other.points);
        self.indices.extend(other.indices.iter().map(|&i| i + offset));
    }
}

/// Classification of one triangle's corner values against an iso-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleCase {
    /// All three corners lie on the same side; no crossing.
    None,
    /// Exactly one corner is on the minority side; the isoline crosses the
    /// two edges incident to that corner.
    Segment {
        /// Corner slot (0, 1, or 2) of the minority-side corner.
        lone: usize,
    },
}

/// Classifies a triangle against `level`.
///
/// Each value is shifted by `epsilon` before the comparison, so a corner
/// exactly on the level counts as above it. Configurations with two corners
/// above are remapped to their complement, which crosses the same two edges.
#[must_use]
pub fn classify(values: [f32; 3], level: f32, epsilon: f32) -> TriangleCase {
    let mut mask = u32::from(values[0] + epsilon > level)
        | u32::from(values[1] + epsilon > level) << 1
        | u32::from(values[2] + epsilon > level) << 2;
    if mask == 0 || mask == 7 {
        return TriangleCase::None;
    }
    if mask.count_ones() == 2 {
        mask ^= 7;
    }
    TriangleCase::Segment {
        lone: mask.trailing_zeros() as usize,
    }
}

/// Extracts the isoline segments at `level` from a scalar field sampled on a
/// triangulated grid.
///
/// # Arguments
/// * `positions` - Node positions in the plane.
/// * `values` - Sampled field values, parallel to `positions`.
/// * `triangles` - Triangle indices (every 3 consecutive indices form a
///   triangle).
/// * `level` - The iso-value to contour.
/// * `epsilon` - Classification shift applied to every value; see [`classify`].
///
/// # Returns
/// A mesh whose points lift the crossings into 3D with the interpolated
/// sample value as `z`. Each crossed grid edge contributes exactly one point,
/// shared by every segment that ends on it.
///
/// # Panics
/// Panics if `values.len() != positions.len()` or if `triangles.len()` is not
/// a multiple of 3.
#[must_use]
pub fn extract_isolines(
    positions: &[Vec2],
    values: &[f32],
    triangles: &[u32],
    level: f32,
    epsilon: f32,
) -> IsolineMesh {
    assert!(
        values.len() == positions.len(),
        "Value count {} does not match position count {}",
        values.len(),
        positions.len()
    );
    assert!(
        triangles.len() % 3 == 0,
        "Triangle index count {} is not a multiple of 3",
        triangles.len()
    );

    let mut mesh = IsolineMesh::default();
    let mut edge_points: HashMap<u64, u32> = HashMap::new();

    for tri in triangles.chunks_exact(3) {
        let samples = [
            values[tri[0] as usize],
            values[tri[1] as usize],
            values[tri[2] as usize],
        ];
        let TriangleCase::Segment { lone } = classify(samples, level, epsilon) else {
            continue;
        };
        for other in 0..3 {
            if other == lone {
                continue;
            }
            let (a, b) = (tri[lone], tri[other]);
            let point = interpolate_crossing(
                positions[a as usize],
                samples[lone] + epsilon,
                positions[b as usize],
                samples[other] + epsilon,
                level,
            );
            let index = intern_edge_point(&mut edge_points, &mut mesh.points, a, b, point);
            mesh.indices.push(index);
        }
    }

    mesh
}

/// Packs an undirected grid edge into an order-independent key.
#[inline]
fn edge_key(a: u32, b: u32) -> u64 {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    (u64::from(lo) << 32) | u64::from(hi)
}

/// Interpolates the crossing point along the edge from `pa` to `pb`, where
/// the shifted samples `sa` and `sb` straddle `level`.
#[inline]
fn interpolate_crossing(pa: Vec2, sa: f32, pb: Vec2, sb: f32, level: f32) -> Vec3 {
    let f = (level - sa) / (sb - sa);
    Vec3::new(pa.x, pa.y, sa).lerp(Vec3::new(pb.x, pb.y, sb), f)
}

/// Returns the point index for a crossed edge, inserting the point on first
/// use of the edge.
#[inline]
fn intern_edge_point(
    edge_points: &mut HashMap<u64, u32>,
    points: &mut Vec<Vec3>,
    a: u32,
    b: u32,
    point: Vec3,
) -> u32 {
    *edge_points.entry(edge_key(a, b)).or_insert_with(|| {
        let index = points.len() as u32;
        points.push(point);
        index
    })
}
