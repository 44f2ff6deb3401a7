//! Terminal progress rendering for transfers.

use crunch_archive::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};

/// An indicatif-backed progress sink.
///
/// The bar is created lazily on the first update, because only then is it
/// known whether the transfer has a predictable total (single file) or not
/// (directory tar packing).
pub struct TermProgress {
    bar: Option<ProgressBar>,
}

impl TermProgress {
    /// Create a sink with no bar yet.
    pub fn new() -> Self {
        Self { bar: None }
    }
}

impl Default for TermProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for TermProgress {
    fn update(&mut self, processed: u64, total: Option<u64>, label: &str) {
        let bar = self.bar.get_or_insert_with(|| {
            let bar = match total {
                Some(total) => {
                    let bar = ProgressBar::new(total);
                    bar.set_style(
                        ProgressStyle::default_bar()
                            .template(
                                "{msg} [{bar:30.cyan/blue}] {percent:>3}% ({bytes}/{total_bytes})",
                            )
                            .expect("progress bar template is valid")
                            .progress_chars("█▓▒░ "),
                    );
                    bar
                }
                None => {
                    let bar = ProgressBar::new_spinner();
                    bar.set_style(
                        ProgressStyle::default_spinner()
                            .template("{msg} {spinner} {bytes} processed")
                            .expect("progress bar template is valid"),
                    );
                    bar
                }
            };
            bar.set_message(label.to_string());
            bar
        });
        bar.set_position(processed);
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}
