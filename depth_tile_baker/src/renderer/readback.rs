/// Readback types - result of a GPU to host transfer

use crate::renderer::TextureFormat;

/// Result of an asynchronous texture readback
///
/// Delivered exactly once per request through a `ReadbackCallback`.
/// `data` is tightly packed (no row padding). When `has_error` is set,
/// `data` is empty and must not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadbackResult {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub data: Vec<u8>,
    pub has_error: bool,
}

impl ReadbackResult {
    /// Successful readback
    pub fn completed(width: u32, height: u32, format: TextureFormat, data: Vec<u8>) -> Self {
        Self { width, height, format, data, has_error: false }
    }

    /// Failed readback (no data)
    pub fn failed(width: u32, height: u32, format: TextureFormat) -> Self {
        Self { width, height, format, data: Vec::new(), has_error: true }
    }

    /// Expected length of `data` for a successful readback
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.format.bytes_per_pixel()
    }
}

/// Completion callback of a readback request (single-shot)
pub type ReadbackCallback = Box<dyn FnOnce(ReadbackResult) + Send + 'static>;
