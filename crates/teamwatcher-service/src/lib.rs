pub mod coverage;
pub mod error;
pub mod feed;
pub mod schedule;
pub mod scores;
pub mod watch;
