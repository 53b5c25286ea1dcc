//! Pipeline orchestration: layout, file I/O, and the run driver.
//!
//! ## Key Types
//!
//! - `SyncPaths`: every path a run touches, derived from one root
//! - `run`: the full pipeline, pass by pass

pub mod driver;
pub mod files;
pub mod paths;

pub use driver::run;
pub use paths::SyncPaths;
