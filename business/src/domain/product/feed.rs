use crate::domain::subscription::SubscriptionHub;

use super::model::Product;

/// Fan-out of freshly loaded catalogs to whoever keeps a copy of it.
pub type CatalogFeed = SubscriptionHub<Vec<Product>>;
