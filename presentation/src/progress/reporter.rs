//! Progress reporting for the game loop

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Shows round loading and the running clock
///
/// Anything else the REPL prints goes through [`RoundIndicator::println`] so
/// it does not tear an active bar.
pub trait RoundIndicator: Send + Sync {
    fn loading(&self);
    fn round_started(&self, total: u32, remaining: u32);
    fn tick(&self, remaining: u32);
    /// Remove whatever indicator is showing
    fn clear(&self);
    fn println(&self, text: &str);
}

/// Spinner while loading, countdown bar while playing
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn countdown_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix:.bold.cyan} [{bar:30.green/red}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn slot(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.bar.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn replace(&self, bar: ProgressBar) {
        if let Some(old) = self.slot().replace(bar) {
            old.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundIndicator for ProgressReporter {
    fn loading(&self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message("Summoning creatures...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.replace(spinner);
    }

    fn round_started(&self, total: u32, remaining: u32) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(Self::countdown_style());
        bar.set_prefix("Time");
        bar.set_position(remaining as u64);
        bar.set_message(format!("{}s", remaining));
        self.replace(bar);
    }

    fn tick(&self, remaining: u32) {
        if let Some(bar) = self.slot().as_ref() {
            bar.set_position(remaining as u64);
            let label = format!("{}s", remaining);
            if remaining <= 3 {
                bar.set_message(label.red().bold().to_string());
            } else {
                bar.set_message(label);
            }
        }
    }

    fn clear(&self) {
        if let Some(bar) = self.slot().take() {
            bar.finish_and_clear();
        }
    }

    fn println(&self, text: &str) {
        match self.slot().as_ref() {
            Some(bar) => bar.suspend(|| println!("{}", text)),
            None => println!("{}", text),
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SimpleProgress {
    /// Seconds at which the remaining time is announced
    fn announces(remaining: u32) -> bool {
        remaining == 10 || remaining == 5 || (1..=3).contains(&remaining)
    }
}

impl RoundIndicator for SimpleProgress {
    fn loading(&self) {
        println!("{} {}", "->".cyan(), "Loading round...".bold());
    }

    fn round_started(&self, _total: u32, _remaining: u32) {}

    fn tick(&self, remaining: u32) {
        if Self::announces(remaining) {
            println!("  {} {}s left", "..".dimmed(), remaining);
        }
    }

    fn clear(&self) {}

    fn println(&self, text: &str) {
        println!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_progress_announcements() {
        let announced: Vec<u32> = (0..=15).rev().filter(|s| SimpleProgress::announces(*s)).collect();
        assert_eq!(announced, vec![10, 5, 3, 2, 1]);
    }

    #[test]
    fn test_reporter_tracks_one_bar() {
        let reporter = ProgressReporter::new();
        reporter.round_started(15, 15);
        reporter.tick(14);
        assert_eq!(reporter.slot().as_ref().map(|b| b.position()), Some(14));

        reporter.clear();
        assert!(reporter.slot().is_none());

        // Ticks with nothing showing are harmless
        reporter.tick(3);
        assert!(reporter.slot().is_none());
    }
}
