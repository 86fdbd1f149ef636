//! Tick rate and schedule timing metrics.

use std::time::{Duration, Instant};

use bevy_ecs::prelude::Resource;
use tracing::info;

/// Wall-clock timing of schedule runs.
#[derive(Debug, Clone, Default)]
pub struct TickTiming {
    pub total_duration: Duration,
    pub call_count: u64,
    pub min_duration: Duration,
    pub max_duration: Duration,
}

impl TickTiming {
    pub fn record(&mut self, duration: Duration) {
        self.total_duration += duration;
        self.call_count += 1;
        if duration < self.min_duration || self.min_duration == Duration::ZERO {
            self.min_duration = duration;
        }
        if duration > self.max_duration {
            self.max_duration = duration;
        }
    }

    pub fn avg_duration(&self) -> Duration {
        if self.call_count == 0 {
            Duration::ZERO
        } else {
            let avg_nanos = self.total_duration.as_nanos() / self.call_count as u128;
            Duration::from_nanos(avg_nanos as u64)
        }
    }
}

/// Tick processing metrics. Insert as a resource and the runner fills it in.
#[derive(Debug, Default, Resource)]
pub struct TickMetrics {
    pub ticks_processed: u64,
    /// Vehicle travel calls, i.e. the sum of the fleet size over every tick.
    pub vehicle_ticks: u64,
    pub start_time: Option<Instant>,
    pub timing: TickTiming,
}

impl TickMetrics {
    pub fn record_tick(&mut self, vehicle_count: usize, duration: Duration) {
        if self.start_time.is_none() {
            self.start_time = Some(Instant::now());
        }
        self.ticks_processed += 1;
        self.vehicle_ticks += vehicle_count as u64;
        self.timing.record(duration);
    }

    pub fn ticks_per_second(&self) -> f64 {
        let Some(start) = self.start_time else {
            return 0.0;
        };
        let elapsed = start.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.ticks_processed as f64 / elapsed
        } else {
            0.0
        }
    }

    pub fn log_summary(&self) {
        info!(
            ticks = self.ticks_processed,
            vehicle_ticks = self.vehicle_ticks,
            ticks_per_second = format!("{:.0}", self.ticks_per_second()),
            avg_tick_us = self.timing.avg_duration().as_secs_f64() * 1_000_000.0,
            min_tick_us = self.timing.min_duration.as_secs_f64() * 1_000_000.0,
            max_tick_us = self.timing.max_duration.as_secs_f64() * 1_000_000.0,
            "tick processing summary"
        );
    }
}
