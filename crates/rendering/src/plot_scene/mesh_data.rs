//! Vertex/index accumulator for the ground slab.
//!
//! [`SlabMeshData`] extrudes a convex outline on the XZ plane into a thin
//! prism: a fan-triangulated top and bottom plus one quad per edge. Triangle
//! winding is derived from each face's intended normal, so the outline may be
//! given in either orientation.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

// ---------------------------------------------------------------------------
// Color helpers
// ---------------------------------------------------------------------------

pub(crate) fn darken(c: [f32; 4], factor: f32) -> [f32; 4] {
    [c[0] * factor, c[1] * factor, c[2] * factor, c[3]]
}

// ---------------------------------------------------------------------------
// SlabMeshData
// ---------------------------------------------------------------------------

#[derive(Default)]
pub(crate) struct SlabMeshData {
    pub(crate) positions: Vec<[f32; 3]>,
    pub(crate) normals: Vec<[f32; 3]>,
    pub(crate) colors: Vec<[f32; 4]>,
    pub(crate) indices: Vec<u32>,
}

impl SlabMeshData {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn into_mesh(self) -> Mesh {
        let uvs: Vec<[f32; 2]> = vec![[0.0, 0.0]; self.positions.len()];
        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, self.colors)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(self.indices))
    }

    /// Push one triangle, flipping it if needed so it faces `normal`.
    fn push_triangle(&mut self, tri: [u32; 3], normal: Vec3) {
        let [a, b, c] = tri.map(|i| Vec3::from(self.positions[i as usize]));
        if (b - a).cross(c - a).dot(normal) >= 0.0 {
            self.indices.extend_from_slice(&tri);
        } else {
            self.indices.extend_from_slice(&[tri[0], tri[2], tri[1]]);
        }
    }

    /// Add a flat convex polygon with a shared normal, triangulated as a fan.
    fn add_cap(&mut self, points: &[Vec3], normal: Vec3, color: [f32; 4]) {
        let base = self.positions.len() as u32;
        for p in points {
            self.positions.push(p.to_array());
            self.normals.push(normal.to_array());
            self.colors.push(color);
        }
        for i in 1..points.len().saturating_sub(1) as u32 {
            self.push_triangle([base, base + i, base + i + 1], normal);
        }
    }

    /// Extrude `outline` (top face at its own y) down by `thickness`.
    ///
    /// Outlines with fewer than three points add nothing.
    pub(crate) fn add_slab(&mut self, outline: &[Vec3], thickness: f32, color: [f32; 4]) {
        if outline.len() < 3 {
            return;
        }
        let down = Vec3::new(0.0, -thickness, 0.0);
        let bottom: Vec<Vec3> = outline.iter().map(|p| *p + down).collect();
        let centroid = outline.iter().copied().sum::<Vec3>() / outline.len() as f32;

        self.add_cap(outline, Vec3::Y, color);
        self.add_cap(&bottom, Vec3::NEG_Y, darken(color, 0.5));

        let side_color = darken(color, 0.7);
        for (i, top_a) in outline.iter().enumerate() {
            let top_b = outline[(i + 1) % outline.len()];
            let edge = top_b - *top_a;
            let mut normal = edge.cross(Vec3::Y).normalize_or_zero();
            let midpoint = (*top_a + top_b) / 2.0;
            if normal.dot(midpoint - centroid) < 0.0 {
                normal = -normal;
            }

            let base = self.positions.len() as u32;
            for p in [*top_a, top_b, top_b + down, *top_a + down] {
                self.positions.push(p.to_array());
                self.normals.push(normal.to_array());
                self.colors.push(side_color);
            }
            self.push_triangle([base, base + 1, base + 2], normal);
            self.push_triangle([base, base + 2, base + 3], normal);
        }
    }
}
