/// Capture request: the immutable input of one bake.
///
/// Describes the square footprint to capture (center and edge length),
/// the tile resolution, how far above the center the camera sits
/// (`height_offset`), how far below the center depth is recorded
/// (`max_range`) and which layers are drawn.

use glam::Vec3;
use crate::error::Result;
use crate::baker_bail;
use crate::scene::LayerMask;

/// Near clip plane of every capture camera
pub const CAPTURE_NEAR_PLANE: f32 = 0.01;

/// Validated capture parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureRequest {
    tile_resolution: u32,
    footprint_size: f32,
    center: Vec3,
    height_offset: f32,
    max_range: f32,
    culling_mask: LayerMask,
}

impl CaptureRequest {
    /// Build a capture request
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if:
    /// - `tile_resolution` is 0
    /// - `footprint_size` is not finite or not positive
    /// - `center`, `height_offset` or `max_range` is not finite
    /// - the far plane (`max_range + height_offset`) is not beyond the near plane
    pub fn new(
        tile_resolution: u32,
        footprint_size: f32,
        center: Vec3,
        height_offset: f32,
        max_range: f32,
        culling_mask: LayerMask,
    ) -> Result<Self> {
        if tile_resolution == 0 {
            baker_bail!(InvalidRequest, "baker::Request", "Tile resolution must be > 0");
        }
        if !footprint_size.is_finite() || footprint_size <= 0.0 {
            baker_bail!(InvalidRequest, "baker::Request",
                "Footprint size must be a positive number (got {})", footprint_size);
        }
        if !center.is_finite() || !height_offset.is_finite() || !max_range.is_finite() {
            baker_bail!(InvalidRequest, "baker::Request",
                "Center, height offset and range must be finite");
        }
        let far = max_range + height_offset;
        if far <= CAPTURE_NEAR_PLANE {
            baker_bail!(InvalidRequest, "baker::Request",
                "Far plane {} (range {} + offset {}) must be beyond the near plane {}",
                far, max_range, height_offset, CAPTURE_NEAR_PLANE);
        }

        Ok(Self {
            tile_resolution,
            footprint_size,
            center,
            height_offset,
            max_range,
            culling_mask,
        })
    }

    /// Width and height of the tile, in pixels
    pub fn tile_resolution(&self) -> u32 {
        self.tile_resolution
    }

    /// Edge length of the captured square, in world units
    pub fn footprint_size(&self) -> f32 {
        self.footprint_size
    }

    /// World-space center of the footprint
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Height of the camera above the center
    pub fn height_offset(&self) -> f32 {
        self.height_offset
    }

    /// Depth recorded below the center
    pub fn max_range(&self) -> f32 {
        self.max_range
    }

    /// Layers drawn by the capture
    pub fn culling_mask(&self) -> LayerMask {
        self.culling_mask
    }

    /// Near clip plane distance
    pub fn near_plane(&self) -> f32 {
        CAPTURE_NEAR_PLANE
    }

    /// Far clip plane distance (`max_range + height_offset`)
    pub fn far_plane(&self) -> f32 {
        self.max_range + self.height_offset
    }

    /// Camera position (`center` raised by `height_offset`)
    pub fn eye(&self) -> Vec3 {
        self.center + Vec3::Y * self.height_offset
    }

    /// Copy of this request with another culling mask
    pub fn with_culling_mask(mut self, culling_mask: LayerMask) -> Self {
        self.culling_mask = culling_mask;
        self
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
