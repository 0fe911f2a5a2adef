use crate::config::ProgressConfig;
use crate::easing::Interpolator;
use std::time::Duration;
use strum::Display;

pub const FULL_TURN: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub interpolator: Interpolator,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration, interpolator: Interpolator) -> Self {
        Self {
            from,
            to,
            duration,
            interpolator,
        }
    }

    pub fn fraction(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn sample(&self, elapsed: Duration) -> f64 {
        let eased = self.interpolator.apply(self.fraction(elapsed));
        self.from + (self.to - self.from) * eased
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Stage {
    Sweep,
    Result,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Self::Sweep => Some(Self::Result),
            Self::Result => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Sweep { angle: f64 },
    Result { extent: f64, rotation: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineEvent {
    Started(Stage),
    Updated(Sample),
    Finished(Stage),
    Cancelled(Stage),
}

#[derive(Debug, Clone, Copy)]
struct Active {
    stage: Stage,
    elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct Timeline {
    sweep: Tween,
    settle: Tween,
    rotation: Tween,
    active: Option<Active>,
}

impl Timeline {
    pub fn new(config: &ProgressConfig) -> Self {
        let duration = config.animation_duration;
        Self {
            sweep: Tween::new(0.0, FULL_TURN, duration, Interpolator::Linear),
            settle: Tween::new(
                0.0,
                config.settle_target(),
                duration,
                Interpolator::overshoot(),
            ),
            rotation: Tween::new(0.0, FULL_TURN, duration / 2, Interpolator::Linear),
            active: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_stage(&self) -> Option<Stage> {
        self.active.map(|a| a.stage)
    }

    /// A grouped stage lasts as long as its longest member.
    pub fn stage_duration(&self, stage: Stage) -> Duration {
        match stage {
            Stage::Sweep => self.sweep.duration,
            Stage::Result => self.settle.duration.max(self.rotation.duration),
        }
    }

    fn sample(&self, stage: Stage, elapsed: Duration) -> Sample {
        match stage {
            Stage::Sweep => Sample::Sweep {
                angle: self.sweep.sample(elapsed),
            },
            Stage::Result => Sample::Result {
                extent: self.settle.sample(elapsed),
                rotation: self.rotation.sample(elapsed),
            },
        }
    }

    pub fn start(&mut self, sink: &mut dyn FnMut(TimelineEvent)) {
        self.cancel(sink);
        self.enter(Stage::Sweep, sink);
        sink(TimelineEvent::Updated(self.sample(Stage::Sweep, Duration::ZERO)));
    }

    pub fn cancel(&mut self, sink: &mut dyn FnMut(TimelineEvent)) {
        if let Some(active) = self.active.take() {
            sink(TimelineEvent::Cancelled(active.stage));
        }
    }

    pub fn advance(&mut self, dt: Duration, sink: &mut dyn FnMut(TimelineEvent)) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.elapsed = active.elapsed.saturating_add(dt);

        while let Some(Active { stage, elapsed }) = self.active {
            sink(TimelineEvent::Updated(self.sample(stage, elapsed)));
            if elapsed < self.stage_duration(stage) {
                break;
            }
            self.active = None;
            sink(TimelineEvent::Finished(stage));
            if let Some(next) = stage.next() {
                self.enter(next, sink);
            }
        }
    }

    fn enter(&mut self, stage: Stage, sink: &mut dyn FnMut(TimelineEvent)) {
        log::trace!("Entering {} stage", stage);
        self.active = Some(Active {
            stage,
            elapsed: Duration::ZERO,
        });
        sink(TimelineEvent::Started(stage));
    }
}
