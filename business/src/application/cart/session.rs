use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::domain::cart::model::{CartLineItem, LineItemAttributes, LineItemId};
use crate::domain::cart::pending_deletion::{
    DEFAULT_UNDO_WINDOW_MS, MAX_UNDO_WINDOW_MS, PendingDeletion,
};
use crate::domain::cart::settings::CartSettings;
use crate::domain::cart::store::CartStore;
use crate::domain::logger::Logger;
use crate::domain::pickup_point::model::PickupPoint;
use crate::domain::pickup_point::selector::PickupPointSelector;
use crate::domain::pricing::calculator;
use crate::domain::pricing::model::PriceSummary;
use crate::domain::product::model::Product;
use crate::domain::promo::errors::PromoError;
use crate::domain::promo::model::PromoState;
use crate::domain::promo::validator::PromoCodeValidator;
use crate::domain::scheduler::{ScheduledTask, Scheduler};
use crate::domain::shared::value_objects::{Money, Quantity};

/// Line waiting for undo, as shown in the undo banner.
#[derive(Debug, Clone, Serialize)]
pub struct PendingItem {
    pub item: CartLineItem,
    pub deadline: DateTime<Utc>,
    pub remaining_ms: i64,
}

/// Everything the cart screen renders.
#[derive(Debug, Clone, Serialize)]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
    pub pending: Option<PendingItem>,
    pub promo: PromoState,
    pub pickup_point: Option<PickupPoint>,
    pub summary: PriceSummary,
    pub can_checkout: bool,
}

impl CartSnapshot {
    /// Cart of a shopper who has not added anything yet.
    pub fn empty(delivery_cost: Money) -> Self {
        Self {
            items: Vec::new(),
            pending: None,
            promo: PromoState::default(),
            pickup_point: None,
            summary: calculator::calculate(std::iter::empty::<&CartLineItem>(), Money::ZERO, delivery_cost),
            can_checkout: false,
        }
    }
}

struct CartState {
    store: CartStore,
    deletion: PendingDeletion,
    timer: Option<Box<dyn ScheduledTask>>,
    promo: PromoState,
    pickup: PickupPointSelector,
}

impl CartState {
    fn visible_items(&self) -> impl Iterator<Item = &CartLineItem> {
        self.store
            .iter()
            .filter(|item| !self.deletion.is_pending(item.id))
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    fn summary(&self, delivery_default: Money) -> PriceSummary {
        calculator::calculate(
            self.visible_items(),
            self.promo.discount,
            self.pickup.delivery_cost(delivery_default),
        )
    }

    fn can_checkout(&self) -> bool {
        self.pickup.is_selected() && self.visible_items().next().is_some()
    }
}

fn lock(state: &Mutex<CartState>) -> MutexGuard<'_, CartState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One shopper's cart: line items, the undo slot, promo code and pickup point.
///
/// Every operation is a short synchronous state transition. The only deferred
/// work is the expiry of a staged removal, handed to the [`Scheduler`].
pub struct CartSession {
    state: Arc<Mutex<CartState>>,
    settings: CartSettings,
    validator: PromoCodeValidator,
    scheduler: Arc<dyn Scheduler>,
    logger: Arc<dyn Logger>,
}

impl CartSession {
    /// An undo window outside the supported range falls back to the default
    /// for both the shown deadline and the expiry timer.
    pub fn new(
        mut settings: CartSettings,
        scheduler: Arc<dyn Scheduler>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let window = match TimeDelta::from_std(settings.undo_window) {
            Ok(window) if settings.undo_window <= Duration::from_millis(MAX_UNDO_WINDOW_MS) => window,
            _ => {
                logger.warn(&format!(
                    "Undo window of {:?} is out of range, using {} ms",
                    settings.undo_window, DEFAULT_UNDO_WINDOW_MS
                ));
                settings.undo_window = Duration::from_millis(DEFAULT_UNDO_WINDOW_MS.unsigned_abs());
                TimeDelta::milliseconds(DEFAULT_UNDO_WINDOW_MS)
            }
        };
        let validator =
            PromoCodeValidator::new(settings.promo_code.clone(), settings.promo_discount);

        Self {
            state: Arc::new(Mutex::new(CartState {
                store: CartStore::new(),
                deletion: PendingDeletion::new(window),
                timer: None,
                promo: PromoState::default(),
                pickup: PickupPointSelector::default(),
            })),
            settings,
            validator,
            scheduler,
            logger,
        }
    }

    pub fn add_item(&self, product: Product, attributes: LineItemAttributes) -> CartLineItem {
        let mut state = lock(&self.state);
        let item = state.store.add_item(product, attributes).clone();
        self.logger.info(&format!(
            "Cart item added: {} ({})",
            item.id, item.product.name
        ));
        item
    }

    /// Sets the quantity of a visible line, clamped to at least 1.
    ///
    /// Unknown lines and the line waiting for undo are left untouched.
    pub fn change_quantity(&self, item_id: LineItemId, quantity: i64) {
        let mut state = lock(&self.state);
        if state.deletion.is_pending(item_id) {
            self.logger.debug(&format!(
                "Ignoring quantity change for item pending removal: {}",
                item_id
            ));
            return;
        }

        let quantity = Quantity::clamped(quantity);
        if state.store.change_quantity(item_id, quantity) {
            self.logger
                .debug(&format!("Cart item {} quantity set to {}", item_id, quantity));
        } else {
            self.logger
                .debug(&format!("Ignoring quantity change for unknown item: {}", item_id));
        }
    }

    /// Stages a line for removal and starts the undo window.
    ///
    /// Removing the staged line again removes it right away. Removing another
    /// line first removes the staged one for good.
    pub fn remove_item(&self, item_id: LineItemId) {
        let mut state = lock(&self.state);
        if !state.store.contains(item_id) {
            self.logger
                .debug(&format!("Ignoring removal of unknown item: {}", item_id));
            return;
        }

        let outcome = state.deletion.stage(item_id, Utc::now());
        state.cancel_timer();

        if let Some(finalized) = outcome.finalized {
            state.store.remove(finalized);
            self.logger
                .info(&format!("Cart item removed: {}", finalized));
        }

        if let Some(staged) = outcome.staged {
            let weak_state = Arc::downgrade(&self.state);
            let logger = self.logger.clone();
            let ticket = staged.ticket;

            let timer = self.scheduler.schedule(
                self.settings.undo_window,
                Box::new(move || {
                    let Some(state) = weak_state.upgrade() else {
                        return;
                    };
                    let mut state = lock(&state);
                    if let Some(expired) = state.deletion.expire(ticket) {
                        state.timer = None;
                        state.store.remove(expired);
                        logger.info(&format!("Cart item removed after undo window: {}", expired));
                    }
                }),
            );
            state.timer = Some(timer);

            self.logger.info(&format!(
                "Cart item staged for removal: {} (until {})",
                staged.item_id, staged.deadline
            ));
        }
    }

    /// Puts the staged line back. Returns its id, or `None` when nothing was staged.
    pub fn undo_remove(&self) -> Option<LineItemId> {
        let mut state = lock(&self.state);
        let restored = state.deletion.undo()?;
        state.cancel_timer();
        self.logger
            .info(&format!("Cart item removal undone: {}", restored));
        Some(restored)
    }

    /// Applies a promo code. A rejected code still stays on the cart.
    pub fn apply_promo(&self, code: &str) -> Result<Money, PromoError> {
        let mut state = lock(&self.state);
        let result = state.promo.apply(code, &self.validator);
        match &result {
            Ok(discount) => self
                .logger
                .info(&format!("Promo code applied, discount {}", discount)),
            Err(_) => self
                .logger
                .warn(&format!("Promo code rejected: {}", code.trim())),
        }
        result
    }

    pub fn select_pickup_point(&self, point: PickupPoint) {
        let mut state = lock(&self.state);
        self.logger
            .info(&format!("Pickup point selected: {}", point.id));
        state.pickup.select(point);
    }

    pub fn clear_pickup_point(&self) {
        let mut state = lock(&self.state);
        if let Some(previous) = state.pickup.clear() {
            self.logger
                .info(&format!("Pickup point cleared: {}", previous.id));
        }
    }

    /// Empties the cart, drops any staged removal and the pickup point.
    pub fn clear(&self) {
        let mut state = lock(&self.state);
        state.cancel_timer();
        state.deletion.clear();
        state.store.clear();
        state.pickup.clear();
        self.logger.info("Cart cleared");
    }

    pub fn summary(&self) -> PriceSummary {
        lock(&self.state).summary(self.settings.delivery_cost)
    }

    /// Checkout needs at least one line and a pickup point.
    pub fn can_checkout(&self) -> bool {
        lock(&self.state).can_checkout()
    }

    pub fn pending_item(&self) -> Option<LineItemId> {
        lock(&self.state).deletion.pending().map(|staged| staged.item_id)
    }

    pub fn snapshot(&self) -> CartSnapshot {
        let state = lock(&self.state);
        let now = Utc::now();

        let pending = state.deletion.pending().and_then(|staged| {
            state.store.get(staged.item_id).map(|item| PendingItem {
                item: item.clone(),
                deadline: staged.deadline,
                remaining_ms: (staged.deadline - now).num_milliseconds().max(0),
            })
        });

        CartSnapshot {
            items: state.visible_items().cloned().collect(),
            pending,
            promo: state.promo.clone(),
            pickup_point: state.pickup.selected().cloned(),
            summary: state.summary(self.settings.delivery_cost),
            can_checkout: state.can_checkout(),
        }
    }
}
