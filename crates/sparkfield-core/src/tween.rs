//! Timed value tweens and sequential choreography.
//!
//! A `Sequence` is a list of steps driven by one external clock; each step
//! receives the eased value through its update callback, leftover time rolls
//! into the next step, and `cancel` is the single place to abort the chain.

use crate::registry::Animator;
use std::collections::VecDeque;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    OutQuad,
    InOutSine,
    /// Overshoots the target before settling (spin stop).
    OutBack { overshoot: f32 },
}

impl Easing {
    pub const OUT_BACK: Easing = Easing::OutBack { overshoot: 1.70158 };

    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::InOutSine => -((PI * t).cos() - 1.0) * 0.5,
            Easing::OutBack { overshoot } => {
                let c3 = overshoot + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + overshoot * u * u
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration_sec: f32,
    pub easing: Easing,
    elapsed_sec: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_sec: f32) -> Self {
        Self {
            from,
            to,
            duration_sec: duration_sec.max(0.0),
            easing: Easing::Linear,
            elapsed_sec: 0.0,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        if self.duration_sec <= 0.0 {
            1.0
        } else {
            (self.elapsed_sec / self.duration_sec).clamp(0.0, 1.0)
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed_sec >= self.duration_sec
    }

    /// Advance and return the time left over past the end.
    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        self.elapsed_sec += dt;
        let over = self.elapsed_sec - self.duration_sec;
        if over > 0.0 {
            self.elapsed_sec = self.duration_sec;
            over
        } else {
            0.0
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_sec = 0.0;
    }
}

type UpdateFn = Box<dyn FnMut(f32)>;
type CompleteFn = Box<dyn FnOnce()>;

enum StepKind {
    Tween { tween: Tween, on_update: UpdateFn },
    Wait { remaining_sec: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceStatus {
    Idle,
    Running,
    Finished,
    Cancelled,
}

pub struct Sequence {
    steps: VecDeque<StepKind>,
    on_complete: Option<CompleteFn>,
    status: SequenceStatus,
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequence {
    pub fn new() -> Self {
        Self {
            steps: VecDeque::new(),
            on_complete: None,
            status: SequenceStatus::Idle,
        }
    }

    /// Append a tween step; `on_update` receives every eased value including
    /// the final one.
    pub fn then(mut self, tween: Tween, on_update: impl FnMut(f32) + 'static) -> Self {
        self.steps.push_back(StepKind::Tween {
            tween,
            on_update: Box::new(on_update),
        });
        self
    }

    pub fn wait(mut self, seconds: f32) -> Self {
        self.steps.push_back(StepKind::Wait {
            remaining_sec: seconds.max(0.0),
        });
        self
    }

    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    pub fn status(&self) -> SequenceStatus {
        self.status
    }

    pub fn remaining_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn cancel(&mut self) {
        if matches!(self.status, SequenceStatus::Finished | SequenceStatus::Cancelled) {
            return;
        }
        self.steps.clear();
        self.on_complete = None;
        self.status = SequenceStatus::Cancelled;
    }

    pub fn play(&mut self) {
        if self.status == SequenceStatus::Idle {
            self.status = SequenceStatus::Running;
        }
    }

    /// Drive the sequence by `dt_sec`. Returns the status afterwards.
    pub fn advance(&mut self, dt_sec: f32) -> SequenceStatus {
        if self.status != SequenceStatus::Running {
            return self.status;
        }
        let mut budget = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        loop {
            let Some(step) = self.steps.front_mut() else {
                self.status = SequenceStatus::Finished;
                if let Some(f) = self.on_complete.take() {
                    f();
                }
                return self.status;
            };
            let done = match step {
                StepKind::Tween { tween, on_update } => {
                    budget = tween.advance(budget);
                    on_update(tween.value());
                    tween.is_finished()
                }
                StepKind::Wait { remaining_sec } => {
                    let used = budget.min(*remaining_sec);
                    *remaining_sec -= used;
                    budget -= used;
                    *remaining_sec <= 0.0
                }
            };
            if !done {
                return self.status;
            }
            self.steps.pop_front();
        }
    }
}

impl Animator for Sequence {
    fn start(&mut self) {
        self.play();
    }

    fn stop(&mut self) {
        self.cancel();
    }

    fn resize(&mut self, _width: f32, _height: f32) {}

    fn tick(&mut self, dt_sec: f32) {
        self.advance(dt_sec);
    }

    fn is_running(&self) -> bool {
        self.status == SequenceStatus::Running
    }
}
