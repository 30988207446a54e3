//! CLI subcommand implementations.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub mod browse;
pub mod list;
pub mod search;
pub mod show;

/// Spinner on stderr shown while a request is in flight.
pub(crate) fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap());
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
