// Host-side tests for the shared plane geometry and cover-fit UV math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod cover {
    include!("../src/core/cover.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}

use cover::*;
use geometry::*;
use glam::Vec2;

#[test]
fn cover_preserves_image_aspect_for_any_plane() {
    let images = [
        Vec2::new(1920.0, 1080.0),
        Vec2::new(800.0, 1200.0),
        Vec2::new(512.0, 512.0),
    ];
    let planes = [
        Vec2::new(2.0, 3.0),
        Vec2::new(4.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.3, 0.9),
    ];
    for image in images {
        for plane in planes {
            let fit = CoverFit::new(plane, image);
            // Same sampling the shader does: uv * scale + offset
            let sampled = (fit.scale.x * image.x) / (fit.scale.y * image.y);
            let plane_aspect = plane.x / plane.y;
            assert!(
                (sampled - plane_aspect).abs() < 1e-4,
                "image {:?} on plane {:?}: sampled {} vs plane {}",
                image,
                plane,
                sampled,
                plane_aspect
            );
            // Crops only, never samples outside the image
            assert!(fit.scale.x <= 1.0 && fit.scale.y <= 1.0);
            assert!(fit.scale.x == 1.0 || fit.scale.y == 1.0);
        }
    }
}

#[test]
fn cover_crops_wider_image_horizontally() {
    let fit = CoverFit::new(Vec2::new(1.0, 1.0), Vec2::new(200.0, 100.0));
    assert_eq!(fit.scale, Vec2::new(0.5, 1.0));
    assert_eq!(fit.offset, Vec2::new(0.25, 0.0));
    // centred crop
    let sample = |uv: Vec2| uv * fit.scale + fit.offset;
    assert_eq!(sample(Vec2::new(0.0, 0.0)), Vec2::new(0.25, 0.0));
    assert_eq!(sample(Vec2::new(1.0, 1.0)), Vec2::new(0.75, 1.0));
}

#[test]
fn cover_is_identity_for_matching_aspect() {
    let fit = CoverFit::new(Vec2::new(3.0, 2.0), Vec2::new(900.0, 600.0));
    assert!((fit.scale - Vec2::ONE).length() < 1e-6);
    assert!(fit.offset.length() < 1e-6);
}

#[test]
fn cover_falls_back_to_identity_for_degenerate_sizes() {
    assert_eq!(CoverFit::new(Vec2::ZERO, Vec2::new(10.0, 10.0)), CoverFit::default());
    assert_eq!(CoverFit::new(Vec2::ONE, Vec2::new(0.0, 10.0)), CoverFit::default());
}

#[test]
fn plane_has_expected_vertex_and_index_counts() {
    let p = PlaneGeometry::new(1.0, 1.0, 16, 16);
    assert_eq!(p.vertices.len(), 17 * 17);
    assert_eq!(p.indices.len(), 16 * 16 * 6);
    assert_eq!(p.index_count(), 1536);
    assert!(p.indices.iter().all(|&i| (i as usize) < p.vertices.len()));
}

#[test]
fn plane_spans_unit_square_with_top_left_uv_origin() {
    let p = PlaneGeometry::new(1.0, 1.0, 4, 2);
    let first = p.vertices.first().copied().unwrap();
    let last = p.vertices.last().copied().unwrap();
    assert_eq!(first.position, [-0.5, 0.5, 0.0]);
    assert_eq!(first.uv, [0.0, 0.0]);
    assert_eq!(last.position, [0.5, -0.5, 0.0]);
    assert_eq!(last.uv, [1.0, 1.0]);
}

#[test]
fn plane_triangles_face_the_camera() {
    let p = PlaneGeometry::new(2.0, 1.0, 3, 3);
    for tri in p.indices.chunks(3) {
        let a = p.vertices[tri[0] as usize].position;
        let b = p.vertices[tri[1] as usize].position;
        let c = p.vertices[tri[2] as usize].position;
        let cross_z = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
        assert!(cross_z > 0.0, "clockwise triangle {:?}", tri);
    }
}

#[test]
fn zero_segments_are_clamped() {
    let p = PlaneGeometry::new(1.0, 1.0, 0, 0);
    assert_eq!(p.vertices.len(), 4);
    assert_eq!(p.indices.len(), 6);
}

#[test]
fn vertex_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<PlaneVertex>(), 20);
    let v = [PlaneVertex {
        position: [1.0, 2.0, 3.0],
        uv: [0.5, 0.25],
    }];
    let bytes: &[u8] = bytemuck::cast_slice(&v);
    assert_eq!(bytes.len(), 20);
}
