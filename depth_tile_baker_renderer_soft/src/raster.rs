/// Rasterizer - CPU triangle rasterization and the depth-encode blit
///
/// Triangles are rasterized with edge functions sampled at pixel centers,
/// both windings accepted. Fragments outside [0, 1] depth are discarded,
/// the depth test is LESS.

use glam::{Vec3, Vec4};
use depth_tile_baker::baker::render::{DepthEncodeParams, Viewport};

/// Fragment counters of a draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RasterCounts {
    pub triangles: u32,
    pub fragments_passed: u32,
    pub fragments_rejected: u32,
}

impl RasterCounts {
    pub(crate) fn add(&mut self, other: RasterCounts) {
        self.triangles += other.triangles;
        self.fragments_passed += other.fragments_passed;
        self.fragments_rejected += other.fragments_rejected;
    }
}

/// Clip-space position to window coordinates (x, y in pixels, z in depth range)
///
/// Returns `None` behind the eye (`w <= 0`). NDC +Y maps to the first row.
pub(crate) fn to_window(clip: Vec4, viewport: &Viewport) -> Option<Vec3> {
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec3::new(
        viewport.x + (ndc.x + 1.0) * 0.5 * viewport.width,
        viewport.y + (1.0 - ndc.y) * 0.5 * viewport.height,
        viewport.min_depth + ndc.z * (viewport.max_depth - viewport.min_depth),
    ))
}

fn edge(a: Vec3, b: Vec3, p: (f32, f32)) -> f32 {
    (p.0 - a.x) * (b.y - a.y) - (p.1 - a.y) * (b.x - a.x)
}

/// Depth attachment and optional color attachment of a draw
pub(crate) struct RasterTarget<'a> {
    pub width: u32,
    pub height: u32,
    pub depth: &'a mut [f32],
    /// Color texels and the texel written by passing fragments
    pub color: Option<(&'a mut [u8], &'a [u8])>,
}

impl RasterTarget<'_> {
    /// Rasterize one triangle given in window coordinates
    pub(crate) fn draw_triangle(&mut self, v: [Vec3; 3]) -> RasterCounts {
        let mut counts = RasterCounts::default();
        if v.iter().any(|p| !p.is_finite()) {
            return counts;
        }
        let area = edge(v[0], v[1], (v[2].x, v[2].y));
        if area.abs() <= f32::EPSILON {
            return counts;
        }
        counts.triangles = 1;

        let min_x = v.iter().map(|p| p.x).fold(f32::INFINITY, f32::min).floor().max(0.0) as u32;
        let min_y = v.iter().map(|p| p.y).fold(f32::INFINITY, f32::min).floor().max(0.0) as u32;
        let max_x = (v.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max).ceil().max(0.0) as u32)
            .min(self.width);
        let max_y = (v.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max).ceil().max(0.0) as u32)
            .min(self.height);

        for y in min_y..max_y {
            for x in min_x..max_x {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(v[1], v[2], p) / area;
                let w1 = edge(v[2], v[0], p) / area;
                let w2 = edge(v[0], v[1], p) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let z = v[0].z + w1 * (v[1].z - v[0].z) + w2 * (v[2].z - v[0].z);
                let index = (y * self.width + x) as usize;
                if !(0.0..=1.0).contains(&z) || z >= self.depth[index] {
                    counts.fragments_rejected += 1;
                    continue;
                }

                self.depth[index] = z;
                if let Some((color, texel)) = &mut self.color {
                    let len = texel.len();
                    let offset = index * len;
                    color[offset..offset + len].copy_from_slice(&texel[..]);
                }
                counts.fragments_passed += 1;
            }
        }
        counts
    }
}

/// Depth-encode blit: write the encoded depth of `src` into every channel of `dst`
///
/// Sizes may differ; the source is sampled at the nearest texel.
pub(crate) fn blit_depth_encode(
    src: &[f32],
    src_size: (u32, u32),
    dst: &mut [u8],
    dst_size: (u32, u32),
    bytes_per_pixel: usize,
    params: &DepthEncodeParams,
) {
    let (src_w, src_h) = src_size;
    let (dst_w, dst_h) = dst_size;
    for y in 0..dst_h {
        let sy = (y as u64 * src_h as u64 / dst_h as u64) as u32;
        for x in 0..dst_w {
            let sx = (x as u64 * src_w as u64 / dst_w as u64) as u32;
            let value = params.encode(src[(sy * src_w + sx) as usize]);
            let offset = (y * dst_w + x) as usize * bytes_per_pixel;
            dst[offset..offset + bytes_per_pixel].fill(value);
        }
    }
}

#[cfg(test)]
#[path = "raster_tests.rs"]
mod tests;
