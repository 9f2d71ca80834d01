/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that holds the frame and tick
 * metrics shown in the control panel and in the debug overlay.
 */

use std::time::Duration;

use crate::physics::TickStats;

// Debug information to display
#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub tick_count: u64,
    pub last_tick: Duration,
    pub neighbor_links: usize,
    pub mean_speed: f64,
    // Rayon chunk size of the last parallel tick
    pub chunk_size: Option<usize>,
}

impl DebugInfo {
    pub fn record_frame(&mut self, fps: f32, frame_time: Duration) {
        self.fps = fps;
        self.frame_time = frame_time;
    }

    pub fn record_tick(&mut self, tick_count: u64, stats: &TickStats) {
        self.tick_count = tick_count;
        self.last_tick = stats.elapsed;
        self.neighbor_links = stats.neighbor_links;
        self.mean_speed = stats.mean_speed;
        self.chunk_size = stats.chunk_size;
    }

    // Lines for the on-screen overlay
    pub fn lines(&self, boids: usize) -> Vec<String> {
        let mut lines = vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Boids: {}", boids),
            format!("Tick: {}", self.tick_count),
            format!("Tick time: {:.2} ms", self.last_tick.as_secs_f64() * 1000.0),
            format!("Neighbor links: {}", self.neighbor_links),
        ];
        if let Some(chunk_size) = self.chunk_size {
            lines.push(format!("Chunk size: {}", chunk_size));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_size_line_only_for_parallel_ticks() {
        let mut info = DebugInfo::default();
        let stats = TickStats {
            boids: 10,
            neighbor_links: 4,
            mean_speed: 1.0,
            chunk_size: None,
            elapsed: Duration::from_millis(2),
        };
        info.record_tick(3, &stats);
        assert_eq!(info.lines(10).len(), 6);
        assert_eq!(info.tick_count, 3);

        info.record_tick(4, &TickStats {
            chunk_size: Some(5),
            ..stats
        });
        assert_eq!(info.lines(10).last().map(String::as_str), Some("Chunk size: 5"));
    }
}
