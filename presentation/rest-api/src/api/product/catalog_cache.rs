use std::sync::{Arc, PoisonError, RwLock};

use business::domain::product::feed::CatalogFeed;
use business::domain::product::model::Product;
use business::domain::subscription::{Subscribable, Subscription};

/// Last catalog published on the feed, served without a database round trip.
pub struct CatalogCache {
    products: Arc<RwLock<Option<Vec<Product>>>>,
    _subscription: Subscription,
}

impl CatalogCache {
    pub fn subscribe_to(feed: &CatalogFeed) -> Self {
        let products = Arc::new(RwLock::new(None));
        let target = Arc::clone(&products);
        let subscription = feed.subscribe(Arc::new(move |catalog: &Vec<Product>| {
            *target.write().unwrap_or_else(PoisonError::into_inner) = Some(catalog.clone());
        }));

        Self {
            products,
            _subscription: subscription,
        }
    }

    /// `None` until the first catalog was published.
    pub fn products(&self) -> Option<Vec<Product>> {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::NewProductProps;
    use rust_decimal_macros::dec;

    fn product(name: &str) -> Product {
        Product::new(NewProductProps {
            name: name.to_string(),
            price: dec!(30),
            discount_percent: None,
            image_url: None,
        })
        .unwrap()
    }

    #[test]
    fn should_be_empty_until_first_publish() {
        let feed = CatalogFeed::new();
        let cache = CatalogCache::subscribe_to(&feed);

        assert!(cache.products().is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn should_keep_latest_published_catalog() {
        let feed = CatalogFeed::new();
        let cache = CatalogCache::subscribe_to(&feed);

        feed.publish(&vec![product("Poncho")]);
        feed.publish(&vec![product("Beret"), product("Clogs")]);

        let names: Vec<String> = cache
            .products()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Beret", "Clogs"]);
    }

    #[test]
    fn should_stop_listening_when_dropped() {
        let feed = CatalogFeed::new();
        let cache = CatalogCache::subscribe_to(&feed);
        assert_eq!(feed.listener_count(), 1);

        drop(cache);

        assert_eq!(feed.listener_count(), 0);
    }
}
