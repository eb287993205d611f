pub mod db;
pub mod favorite {
    pub mod entity;
    pub mod repository;
}
pub mod pickup_point {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
