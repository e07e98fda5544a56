use std::path::Path;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Status reporting on stderr: a spinner while the external resolver runs and
/// styled lines as output files land. Stdout is reserved for the YAML dump.
pub struct ProgressReporter {
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self { current_bar: None }
    }

    pub fn start_resolving(&mut self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message("Resolving dependencies...");
        pb.enable_steady_tick(TICK_INTERVAL);
        self.current_bar = Some(pb);
    }

    pub fn finish_resolving(&mut self, target_count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        eprintln!(
            "{} Resolved {} target{}",
            style("✓").green(),
            target_count,
            if target_count == 1 { "" } else { "s" }
        );
    }

    pub fn abort(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    pub fn file_written(&self, path: &Path) {
        eprintln!(
            "{} Wrote {}",
            style("✓").green(),
            style(path.display()).bold()
        );
    }
}
