use crate::timeline::{Stage, TimelineEvent};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum WidgetState {
    #[default]
    Idle,
    Running,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Outcome {
    Success,
    #[default]
    Failure,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl From<bool> for Outcome {
    fn from(success: bool) -> Self {
        if success { Self::Success } else { Self::Failure }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// `play()` was called; `in_flight` is set when the sweep was still going.
    Restart { in_flight: bool },
    Timeline(TimelineEvent),
}

impl From<TimelineEvent> for Input {
    fn from(event: TimelineEvent) -> Self {
        Self::Timeline(event)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: WidgetState,
    pub to: WidgetState,
}

#[derive(Debug, Default)]
pub struct StateMachine {
    state: WidgetState,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn handle(&mut self, input: impl Into<Input>) -> Option<Transition> {
        let next = Self::next_state(self.state, input.into());
        if next == self.state {
            return None;
        }
        let transition = Transition {
            from: self.state,
            to: next,
        };
        log::debug!("Progress state {} -> {}", transition.from, transition.to);
        self.state = next;
        Some(transition)
    }

    fn next_state(current: WidgetState, input: Input) -> WidgetState {
        match input {
            Input::Restart { in_flight: true } => WidgetState::Idle,
            Input::Restart { in_flight: false } => current,
            Input::Timeline(event) => match event {
                TimelineEvent::Started(Stage::Sweep) => WidgetState::Running,
                TimelineEvent::Started(Stage::Result) => WidgetState::Settled,
                TimelineEvent::Updated(_)
                | TimelineEvent::Finished(_)
                | TimelineEvent::Cancelled(_) => current,
            },
        }
    }
}
