pub mod application {
    pub mod city {
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_tags;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod city {
        pub mod errors;
        pub mod model;
        pub mod pagination;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_tags;
        }
    }
    pub mod health {
        pub mod model;
        pub mod services;
    }
}
