//! Progress bar for downloads.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;

/// Download progress bar shown when stdout is a TTY.
///
/// Falls back to a spinner when the server does not announce a content
/// length. Cleans itself up on drop.
pub struct DownloadProgress {
    bar: ProgressBar,
    sized: bool,
}

impl DownloadProgress {
    /// Creates a progress bar labeled with the file being downloaded.
    #[must_use]
    pub fn new(file_name: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{msg} {spinner} {bytes}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(format!("Downloading {file_name}"));
        Self { bar, sized: false }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }

    /// Records download progress; switches from spinner to bar once a
    /// total size is known.
    pub fn update(&mut self, bytes: u64, total: Option<u64>) {
        if let Some(total) = total
            && !self.sized
        {
            self.sized = true;
            self.bar.set_length(total);
            self.bar.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("█▓░"),
            );
        }
        self.bar.set_position(bytes);
    }
}

impl Drop for DownloadProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
