//! Consumption chart feed.
//!
//! The dashboard chart is not a historical record: it is a rolling
//! window of synthetic samples seeded from the live aggregate. The
//! [`ConsumptionFeed`] trait keeps the chart source pluggable so a
//! metered feed can replace the synthetic one without touching the
//! HTTP layer.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use wattwise_domain::time::{Timestamp, now};

use crate::ports::DeviceRepository;
use crate::ports::EventPublisher;
use crate::services::device_service::DeviceService;

/// Number of samples kept in the rolling window.
pub const WINDOW_POINTS: usize = 30;

/// Spacing between samples.
pub const TICK_INTERVAL: Duration = Duration::from_secs(10);

/// One sample on the consumption chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp: Timestamp,
    /// Displayed wattage, jittered around the true aggregate.
    pub watts: f64,
}

/// Source of chart samples.
pub trait ConsumptionFeed {
    /// Produce the next sample from the current aggregate wattage and
    /// append it to the window.
    fn tick(&self, current_watts: u32) -> ChartPoint;

    /// The current window, oldest first.
    fn window(&self) -> Vec<ChartPoint>;

    /// Subscribe to samples produced by future ticks.
    fn subscribe(&self) -> broadcast::Receiver<ChartPoint>;
}

/// Synthetic feed: jittered samples around the live aggregate, with a
/// plausible-looking backfilled history at startup.
pub struct SyntheticFeed {
    window: Mutex<VecDeque<ChartPoint>>,
    sender: broadcast::Sender<ChartPoint>,
}

impl SyntheticFeed {
    /// Build a feed whose window is pre-filled with [`WINDOW_POINTS`]
    /// synthetic samples ending now, spaced [`TICK_INTERVAL`] apart.
    ///
    /// The backfill oscillates around a baseline derived from the
    /// current aggregate so the chart never starts empty or flat.
    #[must_use]
    pub fn backfilled(current_watts: u32) -> Self {
        let base = (f64::from(current_watts) * 0.7).max(50.0);
        let interval = chrono::Duration::from_std(TICK_INTERVAL)
            .unwrap_or_else(|_| chrono::Duration::seconds(10));
        let end = now();
        let mut window = VecDeque::with_capacity(WINDOW_POINTS);
        for i in 0..WINDOW_POINTS {
            let offset = WINDOW_POINTS - 1 - i;
            #[allow(clippy::cast_precision_loss)]
            let phase = (i as f64) * 0.3;
            let watts = (base + phase.sin() * 50.0 + rand::random::<f64>() * 30.0).max(0.0);
            window.push_back(ChartPoint {
                timestamp: end - interval * i32::try_from(offset).unwrap_or(0),
                watts,
            });
        }
        let (sender, _) = broadcast::channel(WINDOW_POINTS);
        Self {
            window: Mutex::new(window),
            sender,
        }
    }
}

impl ConsumptionFeed for SyntheticFeed {
    fn tick(&self, current_watts: u32) -> ChartPoint {
        let jitter = (rand::random::<f64>() - 0.5) * 20.0;
        let point = ChartPoint {
            timestamp: now(),
            watts: (f64::from(current_watts) + jitter).max(0.0),
        };
        {
            let mut window = self.window.lock().expect("feed window poisoned");
            window.push_back(point);
            while window.len() > WINDOW_POINTS {
                window.pop_front();
            }
        }
        let _ = self.sender.send(point);
        point
    }

    fn window(&self) -> Vec<ChartPoint> {
        self.window
            .lock()
            .expect("feed window poisoned")
            .iter()
            .copied()
            .collect()
    }

    fn subscribe(&self) -> broadcast::Receiver<ChartPoint> {
        self.sender.subscribe()
    }
}

/// Drive a feed forever, sampling the service's aggregate once per
/// [`TICK_INTERVAL`]. Meant to run as a background task.
pub async fn drive<R, P, F>(service: &DeviceService<R, P>, feed: &F)
where
    R: DeviceRepository,
    P: EventPublisher,
    F: ConsumptionFeed,
{
    let mut interval = tokio::time::interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        interval.tick().await;
        let consumption = service.consumption().await;
        let point = feed.tick(consumption.current);
        tracing::trace!(watts = point.watts, "chart sample");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_backfill_a_full_window() {
        let feed = SyntheticFeed::backfilled(1000);
        let window = feed.window();
        assert_eq!(window.len(), WINDOW_POINTS);
    }

    #[test]
    fn should_backfill_with_non_decreasing_timestamps() {
        let feed = SyntheticFeed::backfilled(500);
        let window = feed.window();
        for pair in window.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn should_never_produce_negative_samples() {
        let feed = SyntheticFeed::backfilled(0);
        for point in feed.window() {
            assert!(point.watts >= 0.0);
        }
        for _ in 0..100 {
            assert!(feed.tick(0).watts >= 0.0);
        }
    }

    #[test]
    fn should_jitter_around_the_aggregate() {
        let feed = SyntheticFeed::backfilled(3000);
        for _ in 0..100 {
            let point = feed.tick(3000);
            assert!((point.watts - 3000.0).abs() <= 10.0);
        }
    }

    #[test]
    fn should_bound_the_window_after_many_ticks() {
        let feed = SyntheticFeed::backfilled(800);
        for _ in 0..100 {
            feed.tick(800);
        }
        let window = feed.window();
        assert_eq!(window.len(), WINDOW_POINTS);
        for pair in window.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[tokio::test]
    async fn should_broadcast_each_tick_to_subscribers() {
        let feed = SyntheticFeed::backfilled(600);
        let mut rx = feed.subscribe();

        let sent = feed.tick(600);

        let received = rx.recv().await.unwrap();
        assert_eq!(received, sent);
    }
}
