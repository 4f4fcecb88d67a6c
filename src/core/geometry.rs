/// Vertex of the shared gallery plane.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed plane centred on the origin in the XY plane, facing +Z.
///
/// UV (0, 0) is the top-left corner so textures uploaded from the DOM appear
/// upright.
#[derive(Clone, Debug)]
pub struct PlaneGeometry {
    pub vertices: Vec<PlaneVertex>,
    pub indices: Vec<u16>,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32, segments_x: u32, segments_y: u32) -> Self {
        let sx = segments_x.max(1);
        let sy = segments_y.max(1);
        let mut vertices = Vec::with_capacity(((sx + 1) * (sy + 1)) as usize);
        for iy in 0..=sy {
            let v = iy as f32 / sy as f32;
            for ix in 0..=sx {
                let u = ix as f32 / sx as f32;
                vertices.push(PlaneVertex {
                    position: [(u - 0.5) * width, (0.5 - v) * height, 0.0],
                    uv: [u, v],
                });
            }
        }

        let row = sx + 1;
        let mut indices = Vec::with_capacity((sx * sy * 6) as usize);
        for iy in 0..sy {
            for ix in 0..sx {
                let a = (iy * row + ix) as u16;
                let b = a + 1;
                let c = a + row as u16;
                let d = c + 1;
                // counter-clockwise when viewed from +Z
                indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }

        Self { vertices, indices }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
