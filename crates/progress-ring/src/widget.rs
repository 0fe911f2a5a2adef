use crate::config::ProgressConfig;
use crate::geometry::{Geometry, Size};
use crate::scene::Scene;
use crate::state::{Input, Outcome, StateMachine, WidgetState};
use crate::timeline::{Sample, Stage, Timeline, TimelineEvent};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationProgress {
    pub sweep_angle: f64,
    pub settle_extent: f64,
    pub rotation: f64,
}

impl AnimationProgress {
    fn apply(&mut self, sample: Sample) {
        match sample {
            Sample::Sweep { angle } => self.sweep_angle = angle,
            Sample::Result { extent, rotation } => {
                self.settle_extent = extent;
                self.rotation = rotation;
            }
        }
    }
}

enum Phase {
    /// No usable size yet. A `play()` arriving now waits for activation.
    Declared { play_pending: bool },
    Active {
        geometry: Geometry,
        timeline: Timeline,
    },
}

pub struct ProgressWidget {
    config: ProgressConfig,
    outcome: Outcome,
    machine: StateMachine,
    progress: AnimationProgress,
    phase: Phase,
}

impl ProgressWidget {
    pub fn new(config: ProgressConfig) -> Self {
        Self {
            config,
            outcome: Outcome::default(),
            machine: StateMachine::new(),
            progress: AnimationProgress::default(),
            phase: Phase::Declared {
                play_pending: false,
            },
        }
    }

    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    pub fn state(&self) -> WidgetState {
        self.machine.state()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn progress(&self) -> AnimationProgress {
        self.progress
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        match &self.phase {
            Phase::Active { geometry, .. } => Some(geometry),
            Phase::Declared { .. } => None,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(&self.phase, Phase::Active { timeline, .. } if timeline.is_running())
    }

    pub fn resize(&mut self, size: Size) -> bool {
        let Some(geometry) = Geometry::compute(size, &self.config) else {
            log::debug!("Ignoring empty drawable size {}", size);
            return false;
        };

        match &mut self.phase {
            Phase::Active {
                geometry: current, ..
            } => *current = geometry,
            Phase::Declared { play_pending } => {
                let play_pending = *play_pending;
                log::debug!("Activating progress ring at {}", size);
                self.phase = Phase::Active {
                    geometry,
                    timeline: Timeline::new(&self.config),
                };
                if play_pending {
                    self.restart();
                }
            }
        }
        true
    }

    pub fn play(&mut self, outcome: impl Into<Outcome>) {
        self.outcome = outcome.into();
        log::info!("Playing {} animation", self.outcome);

        match &mut self.phase {
            Phase::Declared { play_pending } => *play_pending = true,
            Phase::Active { .. } => self.restart(),
        }
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        let Phase::Active { timeline, .. } = &mut self.phase else {
            return false;
        };
        if !timeline.is_running() {
            return false;
        }

        let mut events = Vec::new();
        timeline.advance(dt, &mut |e| events.push(e));
        self.dispatch(events)
    }

    pub fn scene(&self) -> Option<Scene> {
        self.geometry()
            .map(|geometry| Scene::build(geometry, self.state(), self.outcome, &self.progress))
    }

    pub fn release(&mut self) {
        match &mut self.phase {
            Phase::Declared { play_pending } => *play_pending = false,
            Phase::Active { timeline, .. } => {
                let mut events = Vec::new();
                timeline.cancel(&mut |e| events.push(e));
                self.dispatch(events);
            }
        }
    }

    fn restart(&mut self) {
        let Phase::Active { timeline, .. } = &mut self.phase else {
            return;
        };
        let in_flight = timeline.active_stage() == Some(Stage::Sweep);

        let mut events = Vec::new();
        timeline.start(&mut |e| events.push(e));

        self.machine.handle(Input::Restart { in_flight });
        self.progress = AnimationProgress::default();
        self.dispatch(events);
    }

    fn dispatch(&mut self, events: Vec<TimelineEvent>) -> bool {
        let mut redraw = false;
        for event in events {
            match event {
                TimelineEvent::Updated(sample) => {
                    self.progress.apply(sample);
                    redraw = true;
                }
                TimelineEvent::Finished(stage) => log::debug!("{} stage finished", stage),
                TimelineEvent::Cancelled(stage) => log::debug!("{} stage cancelled", stage),
                TimelineEvent::Started(_) => {}
            }
            redraw |= self.machine.handle(event).is_some();
        }
        redraw
    }
}

impl Default for ProgressWidget {
    fn default() -> Self {
        Self::new(ProgressConfig::default())
    }
}
