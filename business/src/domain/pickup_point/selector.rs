use super::model::PickupPoint;
use crate::domain::shared::value_objects::Money;

/// Holds at most one selected pickup point.
#[derive(Debug, Clone, Default)]
pub struct PickupPointSelector {
    selected: Option<PickupPoint>,
}

impl PickupPointSelector {
    /// Replaces the current selection and returns the previous one.
    pub fn select(&mut self, point: PickupPoint) -> Option<PickupPoint> {
        self.selected.replace(point)
    }

    pub fn clear(&mut self) -> Option<PickupPoint> {
        self.selected.take()
    }

    pub fn selected(&self) -> Option<&PickupPoint> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    /// Collection at a pickup point is free; otherwise the default delivery applies.
    pub fn delivery_cost(&self, default_cost: Money) -> Money {
        if self.is_selected() {
            Money::ZERO
        } else {
            default_cost
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn point(id: &str) -> PickupPoint {
        PickupPoint {
            id: id.to_string(),
            provider: "InPost".to_string(),
            address: "Main St 1".to_string(),
            distance: "200 m".to_string(),
            latitude: 52.23,
            longitude: 21.01,
        }
    }

    #[test]
    fn should_charge_default_delivery_without_selection() {
        let selector = PickupPointSelector::default();

        assert_eq!(
            selector.delivery_cost(Money::new(dec!(5)).unwrap()).amount(),
            dec!(5)
        );
    }

    #[test]
    fn should_zero_delivery_when_point_selected() {
        let mut selector = PickupPointSelector::default();

        selector.select(point("WAW01"));

        assert_eq!(selector.delivery_cost(Money::new(dec!(5)).unwrap()), Money::ZERO);
    }

    #[test]
    fn should_replace_previous_selection() {
        let mut selector = PickupPointSelector::default();
        selector.select(point("WAW01"));

        let previous = selector.select(point("WAW02"));

        assert_eq!(previous.unwrap().id, "WAW01");
        assert_eq!(selector.selected().unwrap().id, "WAW02");
    }

    #[test]
    fn should_restore_delivery_cost_after_clear() {
        let mut selector = PickupPointSelector::default();
        selector.select(point("WAW01"));

        selector.clear();

        assert!(!selector.is_selected());
        assert_eq!(
            selector.delivery_cost(Money::new(dec!(5)).unwrap()).amount(),
            dec!(5)
        );
    }
}
