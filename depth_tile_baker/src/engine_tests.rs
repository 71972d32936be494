//! Unit tests for Engine singleton manager
//!
//! Tests initialization, renderer management and logging APIs.
//!
//! IMPORTANT: ENGINE_STATE and LOGGER are global and shared across all tests.
//! All tests are marked with #[serial] to run sequentially.

use crate::baker::{Engine, Error};
use crate::renderer::mock_renderer::MockRenderer;
use crate::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
#[derive(Clone)]
struct CaptureLogger {
    entries: Arc<Mutex<Vec<(LogSeverity, String, Option<u32>)>>>,
}

impl CaptureLogger {
    fn new() -> Self {
        Self { entries: Arc::new(Mutex::new(Vec::new())) }
    }

    fn messages(&self) -> Vec<(LogSeverity, String, Option<u32>)> {
        self.entries.lock().unwrap().clone()
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push((entry.severity, entry.message.clone(), entry.line));
    }
}

fn setup() {
    Engine::reset_for_testing();
    let _ = Engine::initialize();
}

// ============================================================================
// INITIALIZATION AND RENDERER TESTS
// ============================================================================

#[test]
#[serial]
fn test_engine_initialize_is_idempotent() {
    setup();
    assert!(Engine::initialize().is_ok());
    assert!(Engine::initialize().is_ok());
}

#[test]
#[serial]
fn test_create_and_get_renderer() {
    setup();
    assert!(!Engine::has_renderer());

    Engine::create_renderer(MockRenderer::new()).unwrap();
    assert!(Engine::has_renderer());
    assert!(Engine::renderer().is_ok());

    Engine::reset_for_testing();
}

#[test]
#[serial]
fn test_create_renderer_twice_fails() {
    setup();
    Engine::create_renderer(MockRenderer::new()).unwrap();

    let result = Engine::create_renderer(MockRenderer::new());
    assert!(matches!(result, Err(Error::InitializationFailed(_))));

    Engine::reset_for_testing();
}

#[test]
#[serial]
fn test_renderer_not_created_fails() {
    setup();
    assert!(matches!(Engine::renderer(), Err(Error::InitializationFailed(_))));
}

#[test]
#[serial]
fn test_destroy_renderer_allows_recreation() {
    setup();
    Engine::create_renderer(MockRenderer::new()).unwrap();
    Engine::destroy_renderer().unwrap();
    assert!(!Engine::has_renderer());

    assert!(Engine::create_renderer(MockRenderer::new()).is_ok());
    Engine::reset_for_testing();
}

#[test]
#[serial]
fn test_shutdown_clears_renderer() {
    setup();
    Engine::create_renderer(MockRenderer::new()).unwrap();
    Engine::shutdown();
    assert!(!Engine::has_renderer());
}

#[test]
#[serial]
fn test_renderer_returned_is_usable() {
    setup();
    Engine::create_renderer(MockRenderer::new()).unwrap();

    let renderer = Engine::renderer().unwrap();
    let guard = renderer.lock().unwrap();
    assert_eq!(guard.stats().textures_created, 0);
    drop(guard);

    Engine::reset_for_testing();
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_custom_logger_receives_logs() {
    let logger = CaptureLogger::new();
    Engine::set_logger(logger.clone());

    crate::baker_info!("baker::test", "hello {}", 1);
    crate::baker_warn!("baker::test", "careful");

    let messages = logger.messages();
    Engine::reset_logger();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].0, LogSeverity::Info);
    assert_eq!(messages[0].1, "hello 1");
    assert_eq!(messages[1].0, LogSeverity::Warn);
}

#[test]
#[serial]
fn test_error_macro_carries_line() {
    let logger = CaptureLogger::new();
    Engine::set_logger(logger.clone());

    crate::baker_error!("baker::test", "boom");

    let messages = logger.messages();
    Engine::reset_logger();

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, LogSeverity::Error);
    assert!(messages[0].2.is_some());
}

#[test]
#[serial]
fn test_engine_errors_are_logged() {
    setup();
    let logger = CaptureLogger::new();
    Engine::set_logger(logger.clone());

    let _ = Engine::renderer();

    let messages = logger.messages();
    Engine::reset_logger();

    assert!(messages.iter().any(|(sev, msg, _)| {
        *sev == LogSeverity::Error && msg.contains("Renderer not created")
    }));
}

#[test]
#[serial]
fn test_reset_logger_stops_capture() {
    let logger = CaptureLogger::new();
    Engine::set_logger(logger.clone());
    Engine::reset_logger();

    crate::baker_debug!("baker::test", "not captured");
    assert!(logger.messages().is_empty());
}
