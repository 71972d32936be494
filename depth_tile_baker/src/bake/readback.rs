/// Asynchronous readback of the encoded tile.
///
/// Wraps `Renderer::request_readback` and turns the raw completion into a
/// `Result`: a transfer error or a buffer of the wrong size becomes a
/// `Readback` error, logged once, and no later stage runs on it.

use std::sync::Arc;
use crate::error::{Error, Result};
use crate::renderer::{ReadbackResult, Renderer, Texture};

/// Readback stage
pub struct AsyncReadback;

impl AsyncReadback {
    /// Request a copy of `texture` and run `on_complete` when it arrives
    ///
    /// Returns once the request is queued; `on_complete` runs later, from
    /// the renderer's `poll()` or `wait_idle()`, exactly once.
    pub fn request<F>(
        renderer: &mut dyn Renderer,
        texture: &Arc<dyn Texture>,
        on_complete: F,
    ) -> Result<()>
    where
        F: FnOnce(Result<ReadbackResult>) + Send + 'static,
    {
        crate::baker_trace!("baker::Readback", "Requesting readback of '{}'", texture.info().label);
        renderer.request_readback(
            texture,
            Box::new(move |result| on_complete(Self::check(result))),
        )
    }

    /// Validate a delivered readback
    pub fn check(result: ReadbackResult) -> Result<ReadbackResult> {
        if result.has_error {
            crate::baker_error!("baker::Readback", "Depth save failed.");
            return Err(Error::Readback("Depth save failed.".to_string()));
        }
        if result.data.len() != result.expected_len() {
            return Err(crate::baker_err!(Readback, "baker::Readback",
                "Readback returned {} bytes, expected {} for {}x{}",
                result.data.len(), result.expected_len(), result.width, result.height));
        }
        Ok(result)
    }
}

#[cfg(test)]
#[path = "readback_tests.rs"]
mod tests;
