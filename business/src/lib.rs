pub mod application {
    pub mod product {
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod rating {
        pub mod rate_from_widget;
        pub mod submit;
    }
    pub mod widget {
        pub mod render;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod rating {
        pub mod errors;
        pub mod identifier;
        pub mod services;
        pub mod use_cases {
            pub mod rate_from_widget;
            pub mod submit;
        }
    }
    pub mod widget {
        pub mod model;
        pub mod renderer;
        pub mod use_cases {
            pub mod render;
        }
    }
}
