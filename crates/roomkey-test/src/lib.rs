//! Roomkey record service - integration test support.
//!
//! Re-exports the workspace crates so integration tests can reach every layer
//! through one dependency.

pub mod component {
    pub use roomkey_core::{clock, config, constants};

    pub mod db {
        pub use roomkey_db::db::enums;
        pub use roomkey_db::store::{EntityStore, memory::MemoryStore};

        pub use roomkey_app::store_handler::StoreHandler;
    }

    pub mod model {
        pub use roomkey_db::model::*;
    }

    pub mod service {
        pub use roomkey_service::{directory, error, record};
    }
}

pub mod app {
    pub use roomkey_app::app::*;
    pub use roomkey_app::config::ConfigHandler;
}
