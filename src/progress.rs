//! Progress reporting utilities: count-style bar over the posts being
//! assembled.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Count-style progress bar (items processed out of total), with an optional label.
pub fn make_count_progress(total: u64, label: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::with_template(
        "{spinner:.green} {msg} {pos}/{len} [{bar:.cyan/blue}] {percent:>3}%  \
         elapsed: {elapsed_precise}",
    )
    .unwrap()
    .progress_chars("█▉▊▋▌▍▎▏  ");
    pb.set_style(style);
    if let Some(msg) = label {
        pb.set_message(msg.to_string());
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
