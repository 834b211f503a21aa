pub mod shared {
    pub mod infrastructure {
        pub mod veterinarian_directory;
    }
}

pub mod modules {
    pub mod veterinarians {
        pub mod core {
            pub mod registration;
        }
        pub mod use_cases {
            pub mod register_veterinarian {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_veterinarians {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod pages;
            }
        }
    }
}

pub mod shell;
