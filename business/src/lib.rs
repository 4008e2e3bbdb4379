pub mod application {
    pub mod autobiography {
        pub mod archive;
        pub mod generate;
    }
    pub mod job {
        pub mod get_status;
        pub mod submit;
    }
    pub mod transcription {
        pub mod transcribe;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod autobiography {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod archive;
            pub mod generate;
        }
    }
    pub mod job {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_status;
            pub mod submit;
        }
    }
    pub mod transcription {
        pub mod errors;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod transcribe;
        }
    }
}
