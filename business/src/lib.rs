pub mod application {
    pub mod ingredient {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod recipe {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod suggestion {
        pub mod accept;
        pub mod get_suggestions;
        pub mod heuristic;
        pub mod synthesize;
    }
}

pub mod domain {
    pub mod clock;
    pub mod errors;
    pub mod logger;
    pub mod ingredient {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod suggestion {
        pub mod cache;
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod accept;
            pub mod get_suggestions;
        }
    }
}
