//! Player actions and the per-tick input queue
//!
//! Hosts push actions as input events arrive; the queue is drained into a
//! single [`TickInput`] at the start of each tick, so input timing never
//! interleaves with simulation steps.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// One-shot player intents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Leave Idle. Optionally records the player's name.
    Start { name: Option<String> },
    /// Upward impulse (starts the game when Idle)
    Flap,
    /// Leave Ended for a fresh Idle session
    Restart,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

impl TickInput {
    pub fn flap() -> Self {
        Self {
            actions: vec![Action::Flap],
        }
    }

    pub fn start(name: impl Into<String>) -> Self {
        Self {
            actions: vec![Action::Start {
                name: Some(name.into()),
            }],
        }
    }

    pub fn restart() -> Self {
        Self {
            actions: vec![Action::Restart],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// FIFO of actions waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct ActionQueue {
    pending: VecDeque<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.pending.push_back(action);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything queued so far, in arrival order
    pub fn drain(&mut self) -> TickInput {
        TickInput {
            actions: self.pending.drain(..).collect(),
        }
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = ActionQueue::new();
        queue.push(Action::Start { name: None });
        queue.push(Action::Flap);
        queue.push(Action::Flap);
        assert_eq!(queue.len(), 3);

        let input = queue.drain();
        assert_eq!(
            input.actions,
            vec![Action::Start { name: None }, Action::Flap, Action::Flap]
        );
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_action_json_shape() {
        let json = serde_json::to_string(&Action::Flap).unwrap();
        assert_eq!(json, r#"{"action":"flap"}"#);
        let empty = serde_json::to_string(&TickInput::default()).unwrap();
        assert_eq!(empty, "{}");
    }
}
