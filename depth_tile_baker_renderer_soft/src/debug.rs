/// Rasterizer statistics - process-wide counters with a colored report
///
/// Counts triangles and fragments across every software renderer, plus
/// readbacks that were made to fail.

use colored::*;
use std::sync::atomic::{AtomicU32, Ordering};
use crate::raster::RasterCounts;

/// Global rasterizer statistics (thread-safe atomic counters)
static RASTER_STATS: RasterStatsTracker = RasterStatsTracker::new();

/// Snapshot of the rasterizer statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterStats {
    pub triangles: u32,
    pub fragments_passed: u32,
    pub fragments_rejected: u32,
    pub readbacks_failed: u32,
}

/// Thread-safe rasterizer statistics tracker
struct RasterStatsTracker {
    triangles: AtomicU32,
    fragments_passed: AtomicU32,
    fragments_rejected: AtomicU32,
    readbacks_failed: AtomicU32,
}

impl RasterStatsTracker {
    const fn new() -> Self {
        Self {
            triangles: AtomicU32::new(0),
            fragments_passed: AtomicU32::new(0),
            fragments_rejected: AtomicU32::new(0),
            readbacks_failed: AtomicU32::new(0),
        }
    }

    fn get_stats(&self) -> RasterStats {
        RasterStats {
            triangles: self.triangles.load(Ordering::Relaxed),
            fragments_passed: self.fragments_passed.load(Ordering::Relaxed),
            fragments_rejected: self.fragments_rejected.load(Ordering::Relaxed),
            readbacks_failed: self.readbacks_failed.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.triangles.store(0, Ordering::Relaxed);
        self.fragments_passed.store(0, Ordering::Relaxed);
        self.fragments_rejected.store(0, Ordering::Relaxed);
        self.readbacks_failed.store(0, Ordering::Relaxed);
    }
}

pub(crate) fn record_draw(counts: RasterCounts) {
    RASTER_STATS.triangles.fetch_add(counts.triangles, Ordering::Relaxed);
    RASTER_STATS.fragments_passed.fetch_add(counts.fragments_passed, Ordering::Relaxed);
    RASTER_STATS.fragments_rejected.fetch_add(counts.fragments_rejected, Ordering::Relaxed);
}

pub(crate) fn record_failed_readback() {
    RASTER_STATS.readbacks_failed.fetch_add(1, Ordering::Relaxed);
}

/// Get current rasterizer statistics
pub fn get_raster_stats() -> RasterStats {
    RASTER_STATS.get_stats()
}

/// Reset rasterizer statistics
pub fn reset_raster_stats() {
    RASTER_STATS.reset();
}

/// Print rasterizer statistics report
pub fn print_raster_stats_report() {
    let stats = get_raster_stats();
    let tested = stats.fragments_passed + stats.fragments_rejected;

    println!();
    println!("{}", "=== Software Rasterizer Statistics ===".bright_cyan().bold());
    println!("  {} {}", "Triangles:".bright_white(), stats.triangles);
    println!("  {} {}", "Fragments passed:".green(), stats.fragments_passed);
    println!("  {} {}", "Fragments rejected:".yellow(), stats.fragments_rejected);
    if tested > 0 {
        let ratio = stats.fragments_passed as f64 / tested as f64 * 100.0;
        println!("  {} {:.1}%", "Depth pass ratio:".bright_white(), ratio);
    }
    if stats.readbacks_failed > 0 {
        println!("  {} {}", "Failed readbacks:".red().bold(), stats.readbacks_failed);
    } else {
        println!("  {} {}", "Failed readbacks:".bright_white(), 0);
    }
    println!("{}", "======================================".bright_cyan().bold());
}
