/// Depth tile baker.
///
/// Drives the whole pipeline for one region or for a list of regions:
/// capture and encode on the GPU, request the readback, release the
/// targets, then (once the backend delivers) encode the PNG, write it,
/// re-import it and record the handle on the region.

use std::sync::{mpsc, Arc, Mutex, MutexGuard};
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::renderer::{Renderer, ShaderDesc, ShaderProgram};
use crate::resource::ShaderLibrary;
use crate::scene::Scene;
use super::capture::OffscreenCapture;
use super::encoder::TileEncoder;
use super::import::TileHandle;
use super::readback::AsyncReadback;
use super::region::{is_valid_region_name, Region, SharedRegion};
use super::writer::TileWriter;

/// Name of the depth-encode shader in the shader library
pub const DEPTH_ENCODE_SHADER: &str = "Utility/SceneDepth";

/// Bake whose readback has been requested but not yet delivered
pub struct PendingBake {
    region: String,
    receiver: mpsc::Receiver<Result<TileHandle>>,
}

impl PendingBake {
    /// Name of the region being baked
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Outcome of the bake if the readback has been delivered
    pub fn try_complete(&self) -> Option<Result<TileHandle>> {
        self.receiver.try_recv().ok()
    }
}

/// Outcome of baking a list of regions
#[derive(Debug, Default)]
pub struct BakeReport {
    /// Region name and result, in bake order
    pub outcomes: Vec<(String, Result<TileHandle>)>,
}

impl BakeReport {
    /// Names of the regions baked successfully
    pub fn succeeded(&self) -> Vec<&str> {
        self.outcomes.iter()
            .filter(|(_, outcome)| outcome.is_ok())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Regions that failed, with their error
    pub fn failed(&self) -> Vec<(&str, &Error)> {
        self.outcomes.iter()
            .filter_map(|(name, outcome)| outcome.as_ref().err().map(|e| (name.as_str(), e)))
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_ok())
    }
}

/// Pipeline orchestrator
pub struct DepthBaker {
    renderer: Arc<Mutex<dyn Renderer>>,
    shaders: ShaderLibrary,
    capture: OffscreenCapture,
    writer: Arc<TileWriter>,
}

impl DepthBaker {
    /// Baker on `renderer` resolving the depth shader from `shaders`
    pub fn new(renderer: Arc<Mutex<dyn Renderer>>, shaders: ShaderLibrary) -> Self {
        Self {
            renderer,
            shaders,
            capture: OffscreenCapture::new(),
            writer: Arc::new(TileWriter::default()),
        }
    }

    /// Baker with the depth-encode shader created on `renderer`
    pub fn with_default_shaders(renderer: Arc<Mutex<dyn Renderer>>) -> Result<Self> {
        let shader = {
            let mut guard = lock_renderer(&renderer)?;
            guard.create_shader(ShaderDesc {
                name: DEPTH_ENCODE_SHADER.to_string(),
                program: ShaderProgram::DepthEncode,
            })?
        };
        let mut shaders = ShaderLibrary::new();
        shaders.register(shader);
        Ok(Self::new(renderer, shaders))
    }

    /// Baker on the engine's renderer
    pub fn from_engine() -> Result<Self> {
        Self::with_default_shaders(Engine::renderer()?)
    }

    /// Replace the writing stage
    pub fn with_writer(mut self, writer: TileWriter) -> Self {
        self.writer = Arc::new(writer);
        self
    }

    pub fn shaders(&self) -> &ShaderLibrary {
        &self.shaders
    }

    /// Capture the depth of `region` and request its readback
    ///
    /// The capture targets are released before returning; the tile is
    /// written when the backend delivers the readback.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if the region name or settings are invalid
    /// - `ResourceLoad` if the depth shader is not in the library
    /// - any renderer error from the capture or the readback request
    pub fn capture_depth(&mut self, scene: &Scene, region: &SharedRegion) -> Result<PendingBake> {
        let (name, storage_dir, request) = {
            let region = lock_region(region)?;
            if !is_valid_region_name(region.name()) {
                crate::baker_bail!(InvalidRequest, "baker::Baker",
                    "Region name '{}' cannot name a tile file", region.name());
            }
            (
                region.name().to_string(),
                region.storage_dir().to_path_buf(),
                region.settings().capture_request()?,
            )
        };

        crate::baker_info!("baker::Baker", "Baking depth tile for '{}' ({}x{})",
            name, request.tile_resolution(), request.tile_resolution());

        let shader = self.shaders.shader(DEPTH_ENCODE_SHADER).cloned();
        let mut renderer = lock_renderer(&self.renderer)?;
        let targets = self.capture.capture(&mut *renderer, scene, &request, shader.as_ref())?;

        let (sender, receiver) = mpsc::channel();
        let writer = Arc::clone(&self.writer);
        let shared = Arc::clone(region);
        let identity = name.clone();
        AsyncReadback::request(&mut *renderer, &targets.encoded, move |result| {
            let outcome = result
                .and_then(|readback| TileEncoder::encode(&identity, &storage_dir, readback))
                .and_then(|asset| writer.write(&asset, &shared));
            // Receiver gone means the caller abandoned the bake
            let _ = sender.send(outcome);
        })?;

        targets.release();
        Ok(PendingBake { region: name, receiver })
    }

    /// Wait for `pending` to be delivered and return its outcome
    pub fn finish(&mut self, pending: PendingBake) -> Result<TileHandle> {
        lock_renderer(&self.renderer)?.wait_idle()?;
        match pending.try_complete() {
            Some(outcome) => outcome,
            None => Err(crate::baker_err!(Readback, "baker::Baker",
                "Readback for '{}' was never delivered", pending.region)),
        }
    }

    /// Deliver completed readbacks without blocking
    pub fn poll(&mut self) -> Result<usize> {
        Ok(lock_renderer(&self.renderer)?.poll())
    }

    /// Capture and finish `region`
    pub fn bake(&mut self, scene: &Scene, region: &SharedRegion) -> Result<TileHandle> {
        let pending = self.capture_depth(scene, region)?;
        self.finish(pending)
    }

    /// Bake every region in order
    ///
    /// A failing region is reported and does not stop the others.
    pub fn bake_all(&mut self, scene: &Scene, regions: &[SharedRegion]) -> BakeReport {
        let mut report = BakeReport::default();
        for region in regions {
            let name = region_name(region);
            let outcome = self.bake(scene, region);
            if let Err(e) = &outcome {
                crate::baker_warn!("baker::Baker", "Region '{}' failed: {}", name, e);
            }
            report.outcomes.push((name, outcome));
        }

        crate::baker_info!("baker::Baker", "Baked {} of {} regions",
            report.succeeded().len(), regions.len());
        report
    }
}

fn lock_renderer(renderer: &Arc<Mutex<dyn Renderer>>) -> Result<MutexGuard<'_, dyn Renderer + 'static>> {
    renderer.lock()
        .map_err(|_| crate::baker_err!("baker::Baker", "Renderer lock poisoned"))
}

fn lock_region(region: &SharedRegion) -> Result<MutexGuard<'_, Region>> {
    region.lock()
        .map_err(|_| crate::baker_err!("baker::Baker", "Region lock poisoned"))
}

fn region_name(region: &SharedRegion) -> String {
    match region.lock() {
        Ok(guard) => guard.name().to_string(),
        Err(poisoned) => poisoned.into_inner().name().to_string(),
    }
}

#[cfg(test)]
#[path = "baker_tests.rs"]
mod tests;
