use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::favorite::model::Favorite;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::logger::Logger;
use crate::domain::pickup_point::model::PickupPoint;
use crate::domain::pickup_point::repository::PickupPointRepository;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::scheduler::{ScheduledTask, Scheduler, Task};
use crate::domain::shared::value_objects::ShopperId;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    }
}

mock! {
    pub PickupPointRepo {}

    #[async_trait]
    impl PickupPointRepository for PickupPointRepo {
        async fn get_all(&self) -> Result<Vec<PickupPoint>, RepositoryError>;
        async fn get_by_id(&self, id: &str) -> Result<PickupPoint, RepositoryError>;
    }
}

mock! {
    pub FavoriteRepo {}

    #[async_trait]
    impl FavoriteRepository for FavoriteRepo {
        async fn get_all(&self, shopper_id: &ShopperId) -> Result<Vec<Favorite>, RepositoryError>;
        async fn contains(&self, shopper_id: &ShopperId, product_id: Uuid) -> Result<bool, RepositoryError>;
        async fn save(&self, favorite: &Favorite) -> Result<(), RepositoryError>;
        async fn delete(&self, shopper_id: &ShopperId, product_id: Uuid) -> Result<(), RepositoryError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn product(name: &str, price: Decimal, discount_percent: Option<Decimal>) -> Product {
    Product::new(NewProductProps {
        name: name.to_string(),
        price,
        discount_percent,
        image_url: None,
    })
    .unwrap()
}

pub fn pickup_point(id: &str) -> PickupPoint {
    PickupPoint {
        id: id.to_string(),
        provider: "InPost".to_string(),
        address: "Rynek 1, Krakow".to_string(),
        distance: "450 m".to_string(),
        latitude: 50.06,
        longitude: 19.94,
    }
}

struct ManualEntry {
    delay: Duration,
    task: Task,
    cancelled: Arc<AtomicBool>,
}

struct ManualHandle {
    cancelled: Arc<AtomicBool>,
}

impl ScheduledTask for ManualHandle {
    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

/// Scheduler whose tasks only run when the test says so.
#[derive(Default)]
pub struct ManualScheduler {
    entries: Mutex<Vec<ManualEntry>>,
}

impl ManualScheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Tasks scheduled and neither run nor cancelled.
    pub fn active_count(&self) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| !entry.cancelled.load(Ordering::SeqCst))
            .count()
    }

    pub fn last_delay(&self) -> Option<Duration> {
        self.entries.lock().unwrap().last().map(|entry| entry.delay)
    }

    /// Runs every task that was not cancelled, as an elapsed timer would.
    pub fn fire_all(&self) -> usize {
        self.run(false)
    }

    /// Runs every task, cancelled or not, to simulate a timer that fired
    /// while the cancellation was racing with it.
    pub fn fire_all_ignoring_cancellation(&self) -> usize {
        self.run(true)
    }

    fn run(&self, ignore_cancellation: bool) -> usize {
        let entries: Vec<ManualEntry> = self.entries.lock().unwrap().drain(..).collect();
        let mut ran = 0;
        for entry in entries {
            if ignore_cancellation || !entry.cancelled.load(Ordering::SeqCst) {
                (entry.task)();
                ran += 1;
            }
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Box<dyn ScheduledTask> {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.entries.lock().unwrap().push(ManualEntry {
            delay,
            task,
            cancelled: cancelled.clone(),
        });
        Box::new(ManualHandle { cancelled })
    }
}
