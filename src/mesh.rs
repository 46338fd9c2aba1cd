//! Triangle mesh output types handed to the rendering layer.

use glam::Vec3;

/// A triangle with value-equal corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First corner.
    pub a: Vec3,
    /// Second corner.
    pub b: Vec3,
    /// Third corner.
    pub c: Vec3,
}

impl Triangle {
    /// Flat face normal; zero for degenerate input.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a).normalize_or_zero()
    }
}

/// A line segment, for wireframe-style consumers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Start point.
    pub a: Vec3,
    /// End point.
    pub b: Vec3,
}

/// Mesh output of one cartoon segment (one per interior residue).
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Triangle list.
    pub triangles: Vec<Triangle>,
    /// Line segment list.
    pub lines: Vec<LineSegment>,
}

impl Mesh {
    /// Create an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append another mesh's primitives.
    pub fn merge(&mut self, other: Self) {
        self.triangles.extend(other.triangles);
        self.lines.extend(other.lines);
    }

    /// Flatten to a flat-shaded triangle-list vertex buffer for direct
    /// GPU upload.
    #[must_use]
    pub fn vertex_buffer(&self) -> Vec<MeshVertex> {
        let mut vertices = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            let normal = tri.normal().to_array();
            vertices.push(MeshVertex { position: tri.a.to_array(), normal });
            vertices.push(MeshVertex { position: tri.b.to_array(), normal });
            vertices.push(MeshVertex { position: tri.c.to_array(), normal });
        }
        vertices
    }
}

/// 24-byte vertex shared with renderer vertex buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Corner position.
    pub position: [f32; 3],
    /// Flat face normal.
    pub normal: [f32; 3],
}

/// Split a quad into two triangles with `(p1, p2, p3, p4)` winding.
///
/// Emits nothing when any two corners coincide exactly; collapsed
/// profile rings produce such quads at chain caps and arrow tips.
pub(crate) fn triangulate_quad(
    triangles: &mut Vec<Triangle>,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    p4: Vec3,
) {
    if p1 == p2 || p1 == p3 || p1 == p4 || p2 == p3 || p2 == p4 || p3 == p4 {
        return;
    }
    triangles.push(Triangle { a: p1, b: p2, c: p3 });
    triangles.push(Triangle { a: p1, b: p3, c: p4 });
}
