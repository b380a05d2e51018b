//! Live terminal UI for job tracking, rendered via `indicatif`.
//!
//! Completed phases are printed as checkmarked lines, the current phase
//! animates on a spinner, and pending phases stay off-screen until reached.
//! Terminal states replace the spinner with a success or failure panel. A
//! failed status poll prints a non-blocking warning and leaves the last
//! known-good progress on screen.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use console::style;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::phase::{JobStatus, Phase, StepState};
use crate::tracker::{JobSnapshot, TrackerSink};
use crate::ui::icons::{ARROW, CHECK, CIRCLE, CROSS, DOWNLOAD, SPARKLE, WARN};

pub struct StatusUi {
    multi: MultiProgress,
    step_bar: ProgressBar,
    /// How many leading steps have already been printed as completed.
    rendered_completed: AtomicUsize,
    /// Whether the warning banner for the current fetch-error streak has
    /// been printed; reset by the next successful poll.
    fetch_error_shown: AtomicBool,
}

impl StatusUi {
    /// Create the UI and print the tracking header for `job_id`.
    pub fn new(job_id: &str) -> Self {
        let multi = MultiProgress::new();
        let _ = multi.println(format!(
            "{} {}",
            style("Tracking job").bold(),
            style(job_id).cyan()
        ));

        let step_style = ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .expect("progress bar template is a valid static string");

        let step_bar = multi.add(ProgressBar::new_spinner());
        step_bar.set_style(step_style);
        step_bar.set_message(Phase::Queued.label());
        step_bar.enable_steady_tick(Duration::from_millis(100));

        Self {
            multi,
            step_bar,
            rendered_completed: AtomicUsize::new(0),
            fetch_error_shown: AtomicBool::new(false),
        }
    }

    /// Print a line via `MultiProgress`, falling back to `eprintln!` if the
    /// rich UI fails, so panels and warnings are never silently lost.
    fn print_line(&self, msg: impl AsRef<str>) {
        if self.multi.println(msg.as_ref()).is_err() {
            eprintln!("{}", msg.as_ref());
        }
    }

    fn success_panel(&self, snapshot: &JobSnapshot) {
        self.print_line("");
        self.print_line(format!(
            "{}{}",
            SPARKLE,
            style("Documentation ready").green().bold()
        ));
        match &snapshot.download_url {
            Some(url) => self.print_line(format!("{}{}", DOWNLOAD, style(url).underlined())),
            None => self.print_line(format!(
                "{}",
                style("The backend reported no download link.").dim()
            )),
        }
    }

    fn failure_panel(&self, snapshot: &JobSnapshot) {
        let detail = snapshot
            .message
            .as_deref()
            .unwrap_or("no detail reported by the backend");
        self.print_line("");
        self.print_line(format!(
            "{}{}",
            CROSS,
            style(format!("Job failed: {detail}")).red().bold()
        ));
    }
}

impl TrackerSink for StatusUi {
    fn emit(&self, snapshot: &JobSnapshot) {
        match &snapshot.fetch_error {
            Some(err) => {
                if !self.fetch_error_shown.swap(true, Ordering::SeqCst) {
                    self.print_line(format!(
                        "{}{}",
                        WARN,
                        style(format!("status check failed: {err} (will retry)")).yellow()
                    ));
                }
            }
            None => self.fetch_error_shown.store(false, Ordering::SeqCst),
        }

        let steps = snapshot.steps();
        let completed_now = steps
            .iter()
            .take_while(|(_, state)| *state == StepState::Completed)
            .count();
        let already = self.rendered_completed.load(Ordering::SeqCst);
        for (phase, _) in &steps[already.min(completed_now)..completed_now] {
            self.print_line(format!("{}{}", CHECK, style(phase.label()).green()));
        }
        if completed_now > already {
            self.rendered_completed.store(completed_now, Ordering::SeqCst);
        }

        match snapshot.status {
            JobStatus::Failed => {
                self.step_bar.finish_and_clear();
                self.failure_panel(snapshot);
            }
            JobStatus::Phase(Phase::Completed) => {
                self.step_bar.finish_and_clear();
                self.success_panel(snapshot);
            }
            JobStatus::Phase(current) => {
                self.step_bar.set_message(current.label());
            }
        }
    }
}

/// One-shot render of a snapshot, used by `repodoc status`.
pub fn print_snapshot(snapshot: &JobSnapshot) {
    println!(
        "{} {}",
        style("Job").bold(),
        style(&snapshot.job_id).cyan()
    );
    println!();

    for (phase, state) in snapshot.steps() {
        match state {
            StepState::Completed => println!("{}{}", CHECK, style(phase.label()).green()),
            StepState::Current => println!("{}{}", ARROW, style(phase.label()).cyan().bold()),
            StepState::Pending => println!("{}{}", CIRCLE, style(phase.label()).dim()),
        }
    }

    match snapshot.status {
        JobStatus::Failed => {
            let detail = snapshot
                .message
                .as_deref()
                .unwrap_or("no detail reported by the backend");
            println!();
            println!(
                "{}{}",
                CROSS,
                style(format!("Job failed: {detail}")).red().bold()
            );
        }
        JobStatus::Phase(Phase::Completed) => {
            println!();
            println!(
                "{}{}",
                SPARKLE,
                style("Documentation ready").green().bold()
            );
            if let Some(url) = &snapshot.download_url {
                println!("{}{}", DOWNLOAD, style(url).underlined());
            }
        }
        JobStatus::Phase(_) => {}
    }
}
