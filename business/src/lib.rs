pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod registry;
        pub mod session;
    }
    pub mod favorite {
        pub mod get_all;
        pub mod toggle;
    }
    pub mod pickup_point {
        pub mod get_all;
        pub mod select;
    }
    pub mod product {
        pub mod get_all;
        pub mod get_by_id;
        pub mod refresh_catalog;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod scheduler;
    pub mod subscription;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod model;
        pub mod pending_deletion;
        pub mod settings;
        pub mod store;
        pub mod use_cases {
            pub mod add_item;
        }
    }
    pub mod favorite {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod toggle;
        }
    }
    pub mod pickup_point {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod selector;
        pub mod use_cases {
            pub mod get_all;
            pub mod select;
        }
    }
    pub mod pricing {
        pub mod calculator;
        pub mod model;
    }
    pub mod product {
        pub mod errors;
        pub mod feed;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod refresh_catalog;
        }
    }
    pub mod promo {
        pub mod errors;
        pub mod model;
        pub mod validator;
    }
}

#[cfg(test)]
pub(crate) mod test_support;
