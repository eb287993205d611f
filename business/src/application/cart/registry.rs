use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::cart::settings::CartSettings;
use crate::domain::logger::Logger;
use crate::domain::scheduler::Scheduler;
use crate::domain::shared::value_objects::ShopperId;

use super::session::{CartSession, CartSnapshot};

struct RegisteredSession {
    session: Arc<CartSession>,
    /// Unix milliseconds of the last lookup.
    last_seen_ms: AtomicI64,
}

impl RegisteredSession {
    fn touch(&self, now: DateTime<Utc>) {
        self.last_seen_ms
            .store(now.timestamp_millis(), Ordering::Relaxed);
    }

    fn idle_for(&self, now: DateTime<Utc>) -> TimeDelta {
        TimeDelta::milliseconds(now.timestamp_millis() - self.last_seen_ms.load(Ordering::Relaxed))
    }
}

/// In-memory carts, one per shopper, created on first use.
///
/// Sessions that stay untouched longer than the idle timeout are dropped by
/// [`CartSessionRegistry::evict_idle`].
pub struct CartSessionRegistry {
    sessions: RwLock<HashMap<ShopperId, RegisteredSession>>,
    settings: CartSettings,
    scheduler: Arc<dyn Scheduler>,
    logger: Arc<dyn Logger>,
}

impl CartSessionRegistry {
    pub fn new(
        settings: CartSettings,
        scheduler: Arc<dyn Scheduler>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            settings,
            scheduler,
            logger,
        }
    }

    /// Looks up an existing session without creating one.
    pub fn get(&self, shopper_id: &ShopperId) -> Option<Arc<CartSession>> {
        let sessions = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = sessions.get(shopper_id)?;
        entry.touch(Utc::now());
        Some(entry.session.clone())
    }

    pub fn get_or_create(&self, shopper_id: &ShopperId) -> Arc<CartSession> {
        if let Some(session) = self.get(shopper_id) {
            return session;
        }

        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = sessions.entry(shopper_id.clone()).or_insert_with(|| {
            self.logger
                .debug(&format!("Opening cart session for shopper: {}", shopper_id));
            RegisteredSession {
                session: Arc::new(CartSession::new(
                    self.settings.clone(),
                    self.scheduler.clone(),
                    self.logger.clone(),
                )),
                last_seen_ms: AtomicI64::new(0),
            }
        });
        entry.touch(Utc::now());
        entry.session.clone()
    }

    /// Current cart of a shopper, or an empty one when the shopper has none.
    pub fn snapshot(&self, shopper_id: &ShopperId) -> CartSnapshot {
        match self.get(shopper_id) {
            Some(session) => session.snapshot(),
            None => CartSnapshot::empty(self.settings.delivery_cost),
        }
    }

    /// Drops a shopper's cart, cancelling its pending removal timer.
    pub fn remove(&self, shopper_id: &ShopperId) -> Option<Arc<CartSession>> {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(shopper_id)
            .map(|entry| entry.session);
        if let Some(session) = &removed {
            session.clear();
        }
        removed
    }

    /// Drops every session not looked up within `max_idle` of `now`.
    /// Returns how many were dropped.
    pub fn evict_idle(&self, now: DateTime<Utc>, max_idle: TimeDelta) -> usize {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|shopper_id, entry| {
            if entry.idle_for(now) <= max_idle {
                return true;
            }
            entry.session.clear();
            self.logger
                .debug(&format!("Evicting idle cart session for shopper: {}", shopper_id));
            false
        });
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
