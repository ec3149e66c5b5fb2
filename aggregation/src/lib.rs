pub mod attribution;
pub mod earlygame;
pub mod event;
pub mod participant;
pub mod report;
pub mod snapshot;
pub mod stats;
pub mod timeline;
pub mod window;

mod error;
pub use error::AggregateError;
