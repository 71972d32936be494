/// Baker engine - singleton manager for the renderer and the logger
///
/// This module provides global singleton management for the renderer backend
/// and the logging sink. It uses thread-safe static storage with RwLock for
/// safe concurrent access.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::renderer::Renderer;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine singletons
struct EngineState {
    /// Renderer singleton (wrapped in Mutex for thread-safe mutable access)
    renderer: RwLock<Option<Arc<Mutex<dyn Renderer>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            renderer: RwLock::new(None),
        }
    }
}

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// Holds the renderer backend shared by every bake and the logger used by
/// the `baker_*!` macros.
///
/// # Example
///
/// ```no_run
/// use depth_tile_baker::baker::Engine;
/// use depth_tile_baker_renderer_soft::SoftRenderer;
///
/// Engine::initialize()?;
/// Engine::create_renderer(SoftRenderer::default())?;
/// let renderer = Engine::renderer()?;
/// // Bake with renderer...
/// Engine::shutdown();
/// # Ok::<(), depth_tile_baker::baker::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Log errors before returning them
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::baker_error!("baker::Engine", "Initialization failed: {}", msg);
            }
            Error::BackendError(msg) => {
                crate::baker_error!("baker::Engine", "Backend error: {}", msg);
            }
            _ => {
                crate::baker_error!("baker::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get().ok_or_else(|| Self::log_and_return_error(
            Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
        ))
    }

    /// Initialize the engine
    ///
    /// Must be called once before creating the renderer. Idempotent.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Shutdown the engine and drop the renderer singleton
    ///
    /// Existing renderer references stay valid until dropped.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut renderer) = state.renderer.write() {
                *renderer = None;
            }
        }
    }

    /// Create and register the renderer singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A renderer already exists
    /// - The renderer lock is poisoned
    pub fn create_renderer<R: Renderer + 'static>(renderer: R) -> Result<()> {
        let arc_renderer: Arc<Mutex<dyn Renderer>> = Arc::new(Mutex::new(renderer));
        Self::register_renderer(arc_renderer)?;

        crate::baker_info!("baker::Engine", "Renderer singleton created successfully");
        Ok(())
    }

    pub(crate) fn register_renderer(renderer: Arc<Mutex<dyn Renderer>>) -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.renderer.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Renderer lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("Renderer already exists. Call Engine::destroy_renderer() first.".to_string())
            ));
        }

        *lock = Some(renderer);
        Ok(())
    }

    /// Get the renderer singleton
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or no renderer
    /// has been created.
    pub fn renderer() -> Result<Arc<Mutex<dyn Renderer>>> {
        let state = Self::state()?;

        let lock = state.renderer.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Renderer lock poisoned".to_string())
            ))?;

        lock.clone().ok_or_else(|| Self::log_and_return_error(
            Error::InitializationFailed("Renderer not created. Call Engine::create_renderer() first.".to_string())
        ))
    }

    /// Whether a renderer singleton is registered
    pub fn has_renderer() -> bool {
        ENGINE_STATE.get()
            .and_then(|state| state.renderer.read().ok().map(|lock| lock.is_some()))
            .unwrap_or(false)
    }

    /// Destroy the renderer singleton, allowing a new one to be created
    pub fn destroy_renderer() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.renderer.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Renderer lock poisoned".to_string())
            ))?;

        *lock = None;
        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut renderer) = state.renderer.write() {
                *renderer = None;
            }
        }
    }

    // ===== LOGGING API =====

    /// Replace the current logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use depth_tile_baker::baker::{Engine, log::{DefaultLogger, LogSeverity}};
    ///
    /// Engine::set_logger(DefaultLogger::with_min_severity(LogSeverity::Info));
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to `DefaultLogger::default()`
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Log a message without file:line (used by `baker_info!`, `baker_warn!`, ...)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log a message with file:line (used by `baker_error!`)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
