//! Simulated live metric updates.
//!
//! [`LiveMetricSimulator`] computes the next value of each dashboard metric.
//! [`LiveFeed`] runs it on a fixed interval and publishes each set through
//! a [`tokio::sync::watch`] channel until the returned handle is stopped.
//!
//! ```no_run
//! use luminous_core::mock;
//! use luminous_live::{DEFAULT_TICK_INTERVAL, LiveFeed, LiveMetricSimulator};
//!
//! # async fn run() -> Result<(), luminous_error::LiveError> {
//! let mut feed = LiveFeed::spawn(
//!     LiveMetricSimulator::from_entropy(),
//!     mock::metrics(),
//!     DEFAULT_TICK_INTERVAL,
//! )?;
//! let mut updates = feed.subscribe();
//! if updates.changed().await.is_ok() {
//!     println!("{} metrics", updates.borrow().len());
//! }
//! feed.stop()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod feed;
mod simulator;

pub use feed::{DEFAULT_TICK_INTERVAL, LiveFeed, LiveFeedHandle, MetricSet};
pub use simulator::{
    COUNT_INCREMENT, CURRENCY_INCREMENT, GROWTH_INCREMENT, LiveMetricSimulator,
    PERCENTAGE_INCREMENT,
};
