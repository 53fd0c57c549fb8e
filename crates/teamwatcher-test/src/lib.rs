//! `TeamWatcher` feed server - integration test support.
//!
//! Re-exports the workspace crates so integration tests can reach every
//! layer through one dependency.

pub use teamwatcher_core as core;
pub use teamwatcher_rfc as rfc;
pub use teamwatcher_service as service;

pub mod app {
    pub use teamwatcher_app::*;

    pub mod api {
        pub use teamwatcher_app::app::api::*;
    }
}
