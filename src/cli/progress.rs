use indicatif::{ProgressBar, ProgressStyle};

/// Spinner for a run of per-repository requests, rendered as
/// `Refreshing [2/5] octocat/alpha`.
pub struct NetworkProgress {
    bar: ProgressBar,
}

impl NetworkProgress {
    pub fn new(action: &'static str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {prefix:.bold} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_prefix(action);
        bar.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { bar }
    }

    pub fn listing(&self) {
        self.bar.set_message("listing repositories");
    }

    pub fn repository(&self, index: usize, total: usize, full_name: &str) {
        self.bar.set_message(step_message(index, total, full_name));
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// `index` is zero-based.
fn step_message(index: usize, total: usize, full_name: &str) -> String {
    format!("[{}/{}] {}", index + 1, total, full_name)
}
