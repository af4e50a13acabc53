//! Hover direction state machine
//!
//! The state is a single `Direction` that starts at `Left` and is replaced
//! on every pointer entry. What to draw for a given state is decided by
//! `layer_targets`, which only reads state and never changes it.

use super::animation::{Pose, PoseName, ANIMATION_SPEC};
use crate::geometry::Direction;
use bevy::prelude::*;

/// The last classified entry edge of a hover card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub struct DirectionState {
    current: Direction,
    /// Count of entries, including repeats from the same edge
    transitions: u64,
}

impl DirectionState {
    /// Record an entry from `direction`
    ///
    /// Self-transitions are real transitions: entering from the same edge
    /// twice counts twice.
    pub fn enter(&mut self, direction: Direction) {
        if direction == self.current {
            debug!("Hover re-entered from {}", direction);
        } else {
            debug!("Hover direction: {} -> {}", self.current, direction);
        }
        self.current = direction;
        self.transitions += 1;
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}

/// Where a hover card is in its enter/leave cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum HoverPhase {
    /// Never hovered since spawn
    #[default]
    Idle,
    /// Pointer is inside, having entered from this edge
    Hovering(Direction),
    /// Pointer has left
    Leaving,
}

impl HoverPhase {
    pub fn pose_name(&self) -> PoseName {
        match self {
            HoverPhase::Idle => PoseName::Initial,
            HoverPhase::Hovering(direction) => PoseName::Entered(*direction),
            HoverPhase::Leaving => PoseName::Exit,
        }
    }

    pub fn is_hovering(&self) -> bool {
        matches!(self, HoverPhase::Hovering(_))
    }
}

/// Image and content layer targets for a phase
pub fn layer_targets(phase: HoverPhase) -> (Pose, Pose) {
    let name = phase.pose_name();
    (ANIMATION_SPEC.image.pose(name), ANIMATION_SPEC.content.pose(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hover::animation::{CONTENT_LAYER, IMAGE_LAYER};

    #[test]
    fn test_default_state_is_left() {
        let state = DirectionState::default();
        assert_eq!(state.current(), Direction::Left);
        assert_eq!(state.transitions(), 0);
    }

    #[test]
    fn test_sequence_of_entries() {
        let mut state = DirectionState::default();
        let mut observed = Vec::new();

        for direction in [Direction::Right, Direction::Right, Direction::Top] {
            state.enter(direction);
            observed.push((state.current(), state.transitions()));
        }

        assert_eq!(state.current(), Direction::Top);
        assert_eq!(
            observed,
            vec![
                (Direction::Right, 1),
                (Direction::Right, 2),
                (Direction::Top, 3),
            ]
        );
    }

    #[test]
    fn test_entering_from_default_edge_still_counts() {
        let mut state = DirectionState::default();
        state.enter(Direction::Left);
        assert_eq!(state.current(), Direction::Left);
        assert_eq!(state.transitions(), 1);
    }

    #[test]
    fn test_layer_targets_follow_phase() {
        assert_eq!(
            layer_targets(HoverPhase::Idle),
            (IMAGE_LAYER.initial, CONTENT_LAYER.initial)
        );
        assert_eq!(
            layer_targets(HoverPhase::Hovering(Direction::Bottom)),
            (IMAGE_LAYER.bottom, CONTENT_LAYER.bottom)
        );
        assert_eq!(
            layer_targets(HoverPhase::Leaving),
            (IMAGE_LAYER.exit, CONTENT_LAYER.exit)
        );
    }
}
