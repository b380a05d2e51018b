//! Phase definitions and the rendering projection for documentation jobs.
//!
//! This module provides:
//! - `Phase` — the fixed, ordered sequence of processing stages
//! - `JobStatus` — the client-side view of the backend's `status` token
//! - `project` — the pure function that classifies each phase as
//!   completed / current / pending for display

use serde::{Deserialize, Serialize};

/// A single processing stage of a documentation job.
///
/// The variants are declared in pipeline order; `Phase::index` reflects that
/// order and drives the rendered checkmark logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Queued,
    Cloning,
    Parsing,
    Generating,
    Building,
    Uploading,
    Completed,
}

/// Number of phases in the fixed sequence.
pub const PHASE_COUNT: usize = 7;

/// The fixed phase sequence, in pipeline order.
pub const PHASE_SEQUENCE: [Phase; PHASE_COUNT] = [
    Phase::Queued,
    Phase::Cloning,
    Phase::Parsing,
    Phase::Generating,
    Phase::Building,
    Phase::Uploading,
    Phase::Completed,
];

impl Phase {
    /// Position of this phase in the fixed sequence.
    pub fn index(self) -> usize {
        match self {
            Phase::Queued => 0,
            Phase::Cloning => 1,
            Phase::Parsing => 2,
            Phase::Generating => 3,
            Phase::Building => 4,
            Phase::Uploading => 5,
            Phase::Completed => 6,
        }
    }

    /// The wire token the backend uses for this phase.
    pub fn token(self) -> &'static str {
        match self {
            Phase::Queued => "queued",
            Phase::Cloning => "cloning",
            Phase::Parsing => "parsing",
            Phase::Generating => "generating",
            Phase::Building => "building",
            Phase::Uploading => "uploading",
            Phase::Completed => "completed",
        }
    }

    /// Human-readable label shown in the step list.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Queued => "Queued",
            Phase::Cloning => "Cloning Repository",
            Phase::Parsing => "Analyzing Structure",
            Phase::Generating => "AI Generating Docs",
            Phase::Building => "Building Site",
            Phase::Uploading => "Uploading Artifacts",
            Phase::Completed => "Done",
        }
    }

    /// Parse a wire token into a phase, if it names one.
    pub fn from_token(token: &str) -> Option<Phase> {
        PHASE_SEQUENCE.into_iter().find(|p| p.token() == token)
    }
}

/// The client's view of a job's `status` field.
///
/// `failed` is not part of the ordered phase sequence; it is a terminal
/// side-channel state that halts progress rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Phase(Phase),
    Failed,
}

impl JobStatus {
    /// Map a raw backend token onto a status.
    ///
    /// Unrecognized tokens fail open to `Queued` so a newer backend never
    /// crashes an older client; the surprise is logged instead.
    pub fn from_token(token: &str) -> JobStatus {
        if token == "failed" {
            return JobStatus::Failed;
        }
        match Phase::from_token(token) {
            Some(phase) => JobStatus::Phase(phase),
            None => {
                tracing::warn!(token, "unrecognized job status token, treating as queued");
                JobStatus::Phase(Phase::Queued)
            }
        }
    }

    /// Whether this status ends polling.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Failed | JobStatus::Phase(Phase::Completed))
    }
}

/// Display classification of a single step in the phase list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Current,
    Pending,
}

/// Classify every phase in the fixed sequence for the given status.
///
/// - phases before the observed phase render completed
/// - the observed phase renders current
/// - phases after it render pending
/// - the terminal `completed` phase marks all seven completed
/// - `failed` renders no spinner at all; every step shows pending and the
///   failure panel carries the detail
pub fn project(status: JobStatus) -> [StepState; PHASE_COUNT] {
    match status {
        JobStatus::Failed => [StepState::Pending; PHASE_COUNT],
        JobStatus::Phase(Phase::Completed) => [StepState::Completed; PHASE_COUNT],
        JobStatus::Phase(current) => {
            let current_index = current.index();
            std::array::from_fn(|i| {
                if i < current_index {
                    StepState::Completed
                } else if i == current_index {
                    StepState::Current
                } else {
                    StepState::Pending
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_indices_match_declaration_order() {
        for (i, phase) in PHASE_SEQUENCE.into_iter().enumerate() {
            assert_eq!(phase.index(), i);
        }
    }

    #[test]
    fn tokens_round_trip() {
        for phase in PHASE_SEQUENCE {
            assert_eq!(Phase::from_token(phase.token()), Some(phase));
        }
        assert_eq!(Phase::from_token("failed"), None);
        assert_eq!(Phase::from_token(""), None);
    }

    #[test]
    fn status_from_token_maps_known_tokens() {
        assert_eq!(
            JobStatus::from_token("generating"),
            JobStatus::Phase(Phase::Generating)
        );
        assert_eq!(JobStatus::from_token("failed"), JobStatus::Failed);
    }

    #[test]
    fn status_from_unknown_token_falls_open_to_queued() {
        assert_eq!(
            JobStatus::from_token("fingerprinting"),
            JobStatus::Phase(Phase::Queued)
        );
        assert_eq!(JobStatus::from_token(""), JobStatus::Phase(Phase::Queued));
    }

    #[test]
    fn terminal_statuses() {
        assert!(JobStatus::Failed.is_terminal());
        assert!(JobStatus::Phase(Phase::Completed).is_terminal());
        for phase in &PHASE_SEQUENCE[..PHASE_COUNT - 1] {
            assert!(!JobStatus::Phase(*phase).is_terminal());
        }
    }

    #[test]
    fn projection_marks_prefix_completed_and_suffix_pending() {
        // Every non-terminal phase: everything before it completed,
        // everything after it pending.
        for current in PHASE_SEQUENCE {
            if current == Phase::Completed {
                continue;
            }
            let states = project(JobStatus::Phase(current));
            for (i, state) in states.into_iter().enumerate() {
                let expected = match i.cmp(&current.index()) {
                    std::cmp::Ordering::Less => StepState::Completed,
                    std::cmp::Ordering::Equal => StepState::Current,
                    std::cmp::Ordering::Greater => StepState::Pending,
                };
                assert_eq!(state, expected, "phase {current:?}, step {i}");
            }
        }
    }

    #[test]
    fn projection_completed_marks_every_step_completed() {
        let states = project(JobStatus::Phase(Phase::Completed));
        assert!(states.into_iter().all(|s| s == StepState::Completed));
    }

    #[test]
    fn projection_failed_leaves_no_spinner_active() {
        let states = project(JobStatus::Failed);
        assert!(states.into_iter().all(|s| s == StepState::Pending));
        assert!(!states.into_iter().any(|s| s == StepState::Current));
    }

    #[test]
    fn projection_is_deterministic() {
        assert_eq!(
            project(JobStatus::Phase(Phase::Building)),
            project(JobStatus::Phase(Phase::Building))
        );
    }

    #[test]
    fn phase_serde_uses_wire_tokens() {
        let json = serde_json::to_string(&Phase::Cloning).unwrap();
        assert_eq!(json, "\"cloning\"");
        let parsed: Phase = serde_json::from_str("\"uploading\"").unwrap();
        assert_eq!(parsed, Phase::Uploading);
    }
}
