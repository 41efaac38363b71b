//! Step transition visuals.
//!
//! The wizard awaits the animator around each step change: `exit` before the
//! new step is committed, `enter` after. Animators carry no wizard state.

use std::time::Duration;

use async_trait::async_trait;

/// Direction of travel between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Horizontal offset, in pixels, the outgoing content slides to.
    pub fn exit_offset(&self) -> i32 {
        match self {
            Direction::Forward => -50,
            Direction::Backward => 50,
        }
    }

    /// Horizontal offset, in pixels, the incoming content slides in from.
    pub fn enter_offset(&self) -> i32 {
        -self.exit_offset()
    }
}

/// Plays the slide-out / slide-in effect for a step change.
#[async_trait]
pub trait StepAnimator: Send + Sync {
    /// Moves the current step's content out toward the direction of travel.
    async fn exit(&self, direction: Direction);

    /// Brings the new step's content in from the opposite edge.
    async fn enter(&self, direction: Direction);
}

/// Animator for headless hosts: transitions complete immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnimator;

#[async_trait]
impl StepAnimator for NoopAnimator {
    async fn exit(&self, _direction: Direction) {}

    async fn enter(&self, _direction: Direction) {}
}

/// Durations of the two halves of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTiming {
    pub exit: Duration,
    pub enter: Duration,
}

impl Default for SlideTiming {
    fn default() -> Self {
        Self {
            exit: Duration::from_millis(300),
            enter: Duration::from_millis(400),
        }
    }
}

/// Animator that only waits out the slide durations.
///
/// Hosts that render elsewhere use it to keep input locked for as long as
/// the visual effect runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedAnimator {
    timing: SlideTiming,
}

impl TimedAnimator {
    pub fn new(timing: SlideTiming) -> Self {
        Self { timing }
    }

    pub fn timing(&self) -> SlideTiming {
        self.timing
    }
}

#[async_trait]
impl StepAnimator for TimedAnimator {
    async fn exit(&self, direction: Direction) {
        tracing::trace!(offset = direction.exit_offset(), "step exit");
        tokio::time::sleep(self.timing.exit).await;
    }

    async fn enter(&self, direction: Direction) {
        tracing::trace!(offset = direction.enter_offset(), "step enter");
        tokio::time::sleep(self.timing.enter).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_follow_direction_of_travel() {
        assert_eq!(Direction::Forward.exit_offset(), -50);
        assert_eq!(Direction::Forward.enter_offset(), 50);
        assert_eq!(Direction::Backward.exit_offset(), 50);
        assert_eq!(Direction::Backward.enter_offset(), -50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_animator_waits_both_halves() {
        let animator = TimedAnimator::default();
        let started = tokio::time::Instant::now();

        animator.exit(Direction::Forward).await;
        animator.enter(Direction::Forward).await;

        assert!(started.elapsed() >= Duration::from_millis(700));
    }
}
