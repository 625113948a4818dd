//! Recorded frames and the snapshot sequence.

use seep_core::StepId;
use seep_grid::Field;

/// One recorded instant: the step index and a copy of the field.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    step: StepId,
    field: Field,
}

impl Frame {
    /// The step at which this frame was recorded.
    pub fn step(&self) -> StepId {
        self.step
    }

    /// The recorded field values.
    pub fn field(&self) -> &Field {
        &self.field
    }
}

/// Chronologically ordered frames from a single run.
///
/// Produced once per run and immutable afterwards; the rendering
/// collaborator consumes it via [`frames()`](SnapshotSequence::frames)
/// or [`into_frames()`](SnapshotSequence::into_frames).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapshotSequence {
    frames: Vec<Frame>,
}

impl SnapshotSequence {
    /// An empty sequence with room for `capacity` frames.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
        }
    }

    /// Append a frame. Steps must arrive in increasing order.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not greater than the last recorded step.
    pub fn push(&mut self, step: StepId, field: Field) {
        if let Some(last) = self.frames.last() {
            assert!(
                step > last.step,
                "frame for step {step} pushed after step {}",
                last.step,
            );
        }
        self.frames.push(Frame { step, field });
    }

    /// Number of recorded frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames were recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The recorded frames in chronological order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The earliest recorded frame.
    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }

    /// The latest recorded frame.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Consume the sequence, yielding the frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}
