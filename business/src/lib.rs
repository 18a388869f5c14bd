pub mod application {
    pub mod advice {
        pub mod get_advice;
    }
    pub mod cart {
        pub mod store;
    }
    pub mod suggestion {
        pub mod store;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod model;
        pub mod value_objects;
    }
    pub mod advice {
        pub mod errors;
        pub mod model;
        pub mod preferences;
        pub mod ranking;
        pub mod responses;
        pub mod services;
        pub mod use_cases {
            pub mod get_advice;
        }
    }
    pub mod cart {
        pub mod model;
        pub mod repository;
    }
    pub mod suggestion {
        pub mod model;
        pub mod repository;
    }
}
