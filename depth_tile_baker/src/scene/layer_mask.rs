/// Layer mask: 32 rendering layers as a bitset.
///
/// Every scene object lives on exactly one layer (0..32). A capture
/// draws an object only if its layer bit is set in the request mask.

use bitflags::bitflags;

/// Number of layers addressable by a mask
pub const LAYER_COUNT: u32 = 32;

bitflags! {
    /// Culling mask over the 32 scene layers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayerMask: u32 {
        const DEFAULT        = 1 << 0;
        const TRANSPARENT_FX = 1 << 1;
        const IGNORE_RAYCAST = 1 << 2;
        const WATER          = 1 << 4;
        const UI             = 1 << 5;
        const ALL            = u32::MAX;
    }
}

impl LayerMask {
    /// Mask with no layer set
    pub const NONE: LayerMask = LayerMask::empty();

    /// Mask with the single layer `index` set
    ///
    /// Returns `NONE` for an index outside 0..32.
    pub fn layer(index: u32) -> Self {
        if index >= LAYER_COUNT {
            return Self::NONE;
        }
        Self::from_bits_retain(1 << index)
    }

    /// Whether layer `index` is part of this mask
    pub fn contains_layer(&self, index: u32) -> bool {
        index < LAYER_COUNT && self.bits() & (1 << index) != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
#[path = "layer_mask_tests.rs"]
mod tests;
