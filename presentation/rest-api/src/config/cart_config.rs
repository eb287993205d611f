use std::env;
use std::str::FromStr;
use std::time::Duration;

use business::domain::cart::pending_deletion::MAX_UNDO_WINDOW_MS;
use business::domain::cart::settings::CartSettings;
use business::domain::shared::value_objects::Money;
use rust_decimal::Decimal;

/// Cart tunables read from the environment.
///
/// Environment variables:
/// - CART_DELIVERY_COST: delivery charged without a pickup point (default: "5.00")
/// - CART_PROMO_CODE: the accepted promo code (default: "PROMO10")
/// - CART_PROMO_DISCOUNT: discount granted by the promo code (default: "10.00")
/// - CART_UNDO_WINDOW_MS: how long a removed item can be restored, at most one
///   day (default: "3000")
/// - CART_SESSION_IDLE_MINUTES: carts untouched this long are dropped (default: "30")
///
/// Values that do not parse fall back to their default with a warning.
#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    pub settings: CartSettings,
    pub session_idle_timeout: Duration,
}

const DEFAULT_SESSION_IDLE_MINUTES: u64 = 30;

impl CartConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = CartSettings::default();

        let delivery_cost = read_money(&lookup, "CART_DELIVERY_COST", defaults.delivery_cost);
        let promo_discount = read_money(&lookup, "CART_PROMO_DISCOUNT", defaults.promo_discount);
        let promo_code = lookup("CART_PROMO_CODE")
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .unwrap_or(defaults.promo_code);
        let undo_window = read_parsed::<u64>(&lookup, "CART_UNDO_WINDOW_MS")
            .filter(|ms| {
                let in_range = (1..=MAX_UNDO_WINDOW_MS).contains(ms);
                if !in_range {
                    tracing::warn!(
                        value = *ms,
                        max = MAX_UNDO_WINDOW_MS,
                        "Ignoring out of range CART_UNDO_WINDOW_MS"
                    );
                }
                in_range
            })
            .map(Duration::from_millis)
            .unwrap_or(defaults.undo_window);

        let session_idle_minutes = read_parsed::<u64>(&lookup, "CART_SESSION_IDLE_MINUTES")
            .filter(|minutes| (1..=24 * 60).contains(minutes))
            .unwrap_or(DEFAULT_SESSION_IDLE_MINUTES);

        Self {
            settings: CartSettings {
                delivery_cost,
                promo_code,
                promo_discount,
                undo_window,
            },
            session_idle_timeout: Duration::from_secs(session_idle_minutes * 60),
        }
    }
}

fn read_parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring invalid cart setting");
            None
        }
    }
}

fn read_money(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Money) -> Money {
    read_parsed::<Decimal>(lookup, key)
        .and_then(|amount| match Money::new(amount) {
            Ok(money) => Some(money),
            Err(_) => {
                tracing::warn!(key, %amount, "Ignoring negative cart amount");
                None
            }
        })
        .unwrap_or(default)
}
