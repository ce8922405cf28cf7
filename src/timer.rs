use std::time::Instant;
use time::OffsetDateTime;

/// Running wall-clock measurement for one request.
#[derive(Debug, Clone, Copy)]
pub struct ProcessingTimer {
    started: Instant,
    started_at: OffsetDateTime,
}

/// Finished measurement. `duration_seconds` comes from the monotonic clock;
/// the timestamps are for display only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessingTiming {
    pub start_time: OffsetDateTime,
    pub end_time: OffsetDateTime,
    pub duration_seconds: f64,
}

impl ProcessingTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            started_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn stop(self) -> ProcessingTiming {
        let duration_seconds = self.started.elapsed().as_secs_f64();
        ProcessingTiming {
            start_time: self.started_at,
            end_time: OffsetDateTime::now_utc(),
            duration_seconds,
        }
    }
}
