//! Evenly-spaced frame recording.

use seep_core::StepId;

/// Which step indices of a run get recorded.
///
/// For `store_frames >= 2` the recorded steps are spread evenly over
/// `0..=steps` with the initial state and the final state always
/// included. A request for more frames than the run has states is
/// clamped to one frame per state. `store_frames == 1` records only
/// the final state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotSchedule {
    indices: Vec<u64>,
}

impl SnapshotSchedule {
    /// Plan the recording for a run of `steps` explicit Euler steps.
    ///
    /// `store_frames` must be at least 1; `RunParameters::validate`
    /// guarantees this upstream.
    pub fn new(steps: u64, store_frames: u32) -> Self {
        debug_assert!(steps >= 1);
        debug_assert!(store_frames >= 1);

        // A run of `steps` steps has `steps + 1` distinct states.
        let frames = u64::from(store_frames).min(steps + 1);
        if frames == 1 {
            return Self {
                indices: vec![steps],
            };
        }

        // idx_k = round(k * steps / (frames - 1)). With frames bounded
        // by steps + 1 the rounded indices are strictly increasing, so
        // no dedup is needed. u128 keeps k * steps exact.
        let span = u128::from(frames - 1);
        let indices = (0..frames)
            .map(|k| {
                let num = u128::from(k) * u128::from(steps);
                ((2 * num + span) / (2 * span)) as u64
            })
            .collect();
        Self { indices }
    }

    /// Number of frames this schedule will record.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// A schedule always records at least one frame.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the state at `step` should be recorded.
    pub fn is_due(&self, step: StepId) -> bool {
        self.indices.binary_search(&step.0).is_ok()
    }

    /// The scheduled step indices in increasing order.
    pub fn indices(&self) -> &[u64] {
        &self.indices
    }
}
