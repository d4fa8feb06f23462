//! Per-frame quad geometry.
//!
//! Every frame is drawn on the same unit quad centered at the origin in the XY
//! plane; only the UVs differ between frames. The host sizes the quad to the
//! frame's pixel dimensions with [`FrameGeometry::scale`].
//!
//! ```text
//!   2 ___ 3
//!    |\  |      triangles: (0, 2, 1) and (2, 3, 1), clockwise
//!    | \ |
//!   0|__\|1
//! ```

use quadsprite_spec::AtlasFrame;
use serde::{Deserialize, Serialize};

/// Quad corners: lower-left, lower-right, upper-left, upper-right.
pub const QUAD_VERTICES: [[f32; 3]; 4] = [
    [-0.5, -0.5, 0.0],
    [0.5, -0.5, 0.0],
    [-0.5, 0.5, 0.0],
    [0.5, 0.5, 0.0],
];

/// Triangle indices into [`QUAD_VERTICES`], clockwise winding.
pub const QUAD_TRIANGLES: [u32; 6] = [0, 2, 1, 2, 3, 1];

/// All normals face +Z since the quad is planar.
pub const QUAD_NORMALS: [[f32; 3]; 4] = [[0.0, 0.0, 1.0]; 4];

/// Geometry for one atlas frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameGeometry {
    /// Quad vertices (always [`QUAD_VERTICES`]).
    pub vertices: [[f32; 3]; 4],
    /// Triangle indices (always [`QUAD_TRIANGLES`]).
    pub triangles: [u32; 6],
    /// Vertex normals (always [`QUAD_NORMALS`]).
    pub normals: [[f32; 3]; 4],
    /// Texture coordinates in vertex order, origin at the bottom-left of the texture.
    pub uvs: [[f32; 2]; 4],
    /// Display scale `(pixel width, pixel height, 0)`.
    pub scale: [f32; 3],
}

/// Converts a pixel-space extent to unit texture space.
///
/// Returns `None` when either texture dimension is zero.
#[inline]
pub fn pixel_to_unit(x: f32, y: f32, texture_width: u32, texture_height: u32) -> Option<[f32; 2]> {
    if texture_width == 0 || texture_height == 0 {
        return None;
    }
    Some([x / texture_width as f32, y / texture_height as f32])
}

/// Computes the four quad UVs for `frame` in a texture of the given size.
///
/// A zero-sized texture yields all-zero UVs.
pub fn compute_uvs(frame: &AtlasFrame, texture_width: u32, texture_height: u32) -> [[f32; 2]; 4] {
    let (Some(origin), Some(extent)) = (
        pixel_to_unit(frame.position[0], frame.position[1], texture_width, texture_height),
        pixel_to_unit(frame.size[0], frame.size[1], texture_width, texture_height),
    ) else {
        return [[0.0, 0.0]; 4];
    };

    // Texture rows grow downward, UV rows grow upward.
    let top = 1.0 - origin[1];
    let lower_left = [origin[0], top - extent[1]];

    [
        lower_left,
        [lower_left[0] + extent[0], lower_left[1]],
        [lower_left[0], lower_left[1] + extent[1]],
        [lower_left[0] + extent[0], lower_left[1] + extent[1]],
    ]
}

/// Display scale that sizes the unit quad to the frame's pixel dimensions.
#[inline]
pub fn display_scale(frame: &AtlasFrame) -> [f32; 3] {
    [frame.size[0], frame.size[1], 0.0]
}

/// Computes the full geometry for `frame`. Pure: equal inputs give bit-identical output.
pub fn compute_geometry(frame: &AtlasFrame, texture_width: u32, texture_height: u32) -> FrameGeometry {
    FrameGeometry {
        vertices: QUAD_VERTICES,
        triangles: QUAD_TRIANGLES,
        normals: QUAD_NORMALS,
        uvs: compute_uvs(frame, texture_width, texture_height),
        scale: display_scale(frame),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_uvs_close(actual: [[f32; 2]; 4], expected: [[f32; 2]; 4]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(
                (a[0] - e[0]).abs() < 1e-6 && (a[1] - e[1]).abs() < 1e-6,
                "uv {:?} != {:?} (all: {:?})",
                a,
                e,
                actual
            );
        }
    }

    #[test]
    fn full_texture_frame_covers_unit_square() {
        let frame = AtlasFrame::new("full", [0.0, 0.0], [256.0, 128.0]);
        let uvs = compute_uvs(&frame, 256, 128);
        assert_uvs_close(uvs, [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
    }

    #[test]
    fn sub_rect_is_flipped() {
        // 16x8 frame at (32, 16) in a 64x64 texture.
        let frame = AtlasFrame::new("sub", [32.0, 16.0], [16.0, 8.0]);
        let uvs = compute_uvs(&frame, 64, 64);
        // top edge at 1 - 16/64 = 0.75, bottom at 0.75 - 8/64 = 0.625
        assert_uvs_close(
            uvs,
            [[0.5, 0.625], [0.75, 0.625], [0.5, 0.75], [0.75, 0.75]],
        );
    }

    #[test]
    fn bottom_right_frame() {
        let frame = AtlasFrame::new("corner", [48.0, 48.0], [16.0, 16.0]);
        let uvs = compute_uvs(&frame, 64, 64);
        assert_uvs_close(uvs, [[0.75, 0.0], [1.0, 0.0], [0.75, 0.25], [1.0, 0.25]]);
    }

    #[test]
    fn zero_texture_dimension_gives_zero_uvs() {
        let frame = AtlasFrame::new("x", [1.0, 1.0], [2.0, 2.0]);
        assert_eq!(compute_uvs(&frame, 0, 64), [[0.0, 0.0]; 4]);
        assert_eq!(compute_uvs(&frame, 64, 0), [[0.0, 0.0]; 4]);

        let geometry = compute_geometry(&frame, 0, 0);
        assert!(geometry.uvs.iter().flatten().all(|v| v.is_finite()));
        assert_eq!(geometry.scale, [2.0, 2.0, 0.0]);
        assert_eq!(geometry.vertices, QUAD_VERTICES);
    }

    #[test]
    fn topology_is_constant() {
        let a = compute_geometry(&AtlasFrame::new("a", [0.0, 0.0], [1.0, 1.0]), 8, 8);
        let b = compute_geometry(&AtlasFrame::new("b", [3.0, 5.0], [7.0, 2.0]), 100, 30);
        assert_eq!(a.triangles, [0, 2, 1, 2, 3, 1]);
        assert_eq!(a.triangles, b.triangles);
        assert_eq!(a.vertices, b.vertices);
        assert!(a.normals.iter().all(|n| *n == [0.0, 0.0, 1.0]));
        assert_eq!(a.normals, b.normals);
    }

    #[test]
    fn geometry_is_deterministic() {
        let frame = AtlasFrame::new("d", [13.0, 7.0], [21.0, 9.0]);
        let first = compute_geometry(&frame, 97, 53);
        let second = compute_geometry(&frame, 97, 53);
        for (a, b) in first.uvs.iter().flatten().zip(second.uvs.iter().flatten()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
        assert_eq!(first, second);
    }

    #[test]
    fn scale_matches_pixel_size() {
        let frame = AtlasFrame::new("s", [0.0, 0.0], [48.0, 24.0]);
        assert_eq!(display_scale(&frame), [48.0, 24.0, 0.0]);
    }

    #[test]
    fn rotation_is_not_applied() {
        let plain = AtlasFrame::new("r", [8.0, 8.0], [16.0, 32.0]);
        let rotated = plain.clone().with_rotated(true);
        assert_eq!(compute_uvs(&plain, 64, 64), compute_uvs(&rotated, 64, 64));
    }
}
