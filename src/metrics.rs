// Session metrics module
//
// Lightweight counters for the frame loop, logged when the window closes

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Session metrics
///
/// Owned by the program loop. Counters are relaxed atomics so recording only
/// needs `&self`.
#[derive(Debug)]
pub struct Metrics {
    /// Frames processed by the program loop
    pub frames: AtomicU64,

    /// Frames that produced a redraw
    pub redraws: AtomicU64,

    /// Renderer asset rebuilds after a theme change
    pub asset_rebuilds: AtomicU32,

    /// Display rebuilds after a resolution change
    pub display_rebuilds: AtomicU32,

    /// Games entered from the menu
    pub games_started: AtomicU32,

    /// Games that reached the victory state
    pub games_won: AtomicU32,

    /// Legal moves across all games
    pub total_moves: AtomicU64,

    /// Session start time
    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            frames: AtomicU64::new(0),
            redraws: AtomicU64::new(0),
            asset_rebuilds: AtomicU32::new(0),
            display_rebuilds: AtomicU32::new(0),
            games_started: AtomicU32::new(0),
            games_won: AtomicU32::new(0),
            total_moves: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_frame(&self) {
        self.frames.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_redraw(&self) {
        self.redraws.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_asset_rebuild(&self) {
        self.asset_rebuilds.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_display_rebuild(&self) {
        self.display_rebuilds.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_game_started(&self) {
        self.games_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_game_won(&self) {
        self.games_won.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the legal moves made by a game that is being left.
    pub fn record_moves(&self, moves: u32) {
        self.total_moves.fetch_add(u64::from(moves), Ordering::Relaxed);
    }

    /// Get total uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Share of processed frames that needed a redraw, in percent
    pub fn redraw_ratio(&self) -> f64 {
        let frames = self.frames.load(Ordering::Relaxed);
        if frames > 0 {
            self.redraws.load(Ordering::Relaxed) as f64 * 100.0 / frames as f64
        } else {
            0.0
        }
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Session Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Frames: {}, redraws: {} ({:.1}%)",
            self.frames.load(Ordering::Relaxed),
            self.redraws.load(Ordering::Relaxed),
            self.redraw_ratio()
        );
        tracing::info!(
            "Rebuilds: {} asset, {} display",
            self.asset_rebuilds.load(Ordering::Relaxed),
            self.display_rebuilds.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Games: {} started, {} won, {} moves",
            self.games_started.load(Ordering::Relaxed),
            self.games_won.load(Ordering::Relaxed),
            self.total_moves.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
