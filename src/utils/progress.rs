//! Progress reporting for the per-disease conversion and generation loops

use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}";

/// A progress bar sized to the number of diseases being processed
#[must_use]
pub fn create_main_progress_bar(length: u64, description: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new(length);
    if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
        pb.set_style(style.progress_chars("#>-"));
    }
    if let Some(description) = description {
        pb.set_message(description.to_string());
    }
    pb
}

/// Finish a progress bar, leaving a completion message behind
pub fn finish_progress_bar(pb: &ProgressBar, message: impl Into<String>) {
    pb.finish_with_message(message.into());
}
