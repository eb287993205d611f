use std::sync::Arc;
use std::time::Duration;

use business::application::cart::registry::CartSessionRegistry;
use chrono::{TimeDelta, Utc};
use tokio::task::JoinHandle;
use tokio::time::interval;

/// Periodically drops cart sessions nobody touched within `idle_timeout`.
pub struct SessionSweeper {
    sessions: Arc<CartSessionRegistry>,
    idle_timeout: TimeDelta,
    poll_interval: Duration,
}

impl SessionSweeper {
    pub fn spawn(sessions: Arc<CartSessionRegistry>, idle_timeout: Duration) -> JoinHandle<()> {
        let sweeper = Self {
            sessions,
            idle_timeout: TimeDelta::from_std(idle_timeout).unwrap_or(TimeDelta::minutes(30)),
            poll_interval: idle_timeout.min(Duration::from_secs(60)),
        };
        tokio::spawn(async move { sweeper.start().await })
    }

    async fn start(&self) {
        tracing::info!(
            idle_timeout_secs = self.idle_timeout.num_seconds(),
            poll_interval = ?self.poll_interval,
            "Starting cart session sweeper"
        );

        let mut interval = interval(self.poll_interval);
        loop {
            interval.tick().await;
            self.sweep();
        }
    }

    fn sweep(&self) -> usize {
        let evicted = self.sessions.evict_idle(Utc::now(), self.idle_timeout);
        if evicted > 0 {
            tracing::info!(
                evicted,
                remaining = self.sessions.len(),
                "Evicted idle cart sessions"
            );
        }
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::settings::CartSettings;
    use business::domain::shared::value_objects::ShopperId;
    use logger::TracingLogger;
    use scheduler::TokioScheduler;

    fn sessions() -> Arc<CartSessionRegistry> {
        Arc::new(CartSessionRegistry::new(
            CartSettings::default(),
            Arc::new(TokioScheduler::from_current().unwrap()),
            Arc::new(TracingLogger::new("cart")),
        ))
    }

    #[tokio::test]
    async fn should_leave_recent_sessions_alone() {
        let sessions = sessions();
        sessions.get_or_create(&ShopperId::new("shopper-1"));
        let sweeper = SessionSweeper {
            sessions: sessions.clone(),
            idle_timeout: TimeDelta::minutes(30),
            poll_interval: Duration::from_secs(60),
        };

        assert_eq!(sweeper.sweep(), 0);
        assert_eq!(sessions.len(), 1);
    }

    #[tokio::test]
    async fn should_drop_sessions_past_idle_timeout() {
        let sessions = sessions();
        sessions.get_or_create(&ShopperId::new("shopper-1"));
        sessions.get_or_create(&ShopperId::new("shopper-2"));
        let sweeper = SessionSweeper {
            sessions: sessions.clone(),
            idle_timeout: TimeDelta::milliseconds(-1),
            poll_interval: Duration::from_secs(60),
        };

        assert_eq!(sweeper.sweep(), 2);
        assert!(sessions.is_empty());
    }
}
