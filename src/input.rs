use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    // Connection tags end with a handedness suffix. Anything that is not
    // explicitly left-handed lands in the right slot.
    pub fn from_tag(tag: &str) -> Hand {
        if tag.ends_with("left") {
            Hand::Left
        } else {
            Hand::Right
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TriggerState {
    pub pressed: bool,
    // True only on the frame the level flipped.
    pub changed: bool,
}

#[derive(Debug)]
pub struct ControllerState {
    pub tag: String,
    pub trigger: TriggerState,
}

// A slot is either empty or holds a live controller; there is no nullable
// reference to forget to check.
#[derive(Debug, Default)]
pub enum ControllerSlot {
    #[default]
    NotConnected,
    Connected(ControllerState),
}

#[derive(Resource, Debug, Default)]
pub struct Controllers {
    left: ControllerSlot,
    right: ControllerSlot,
}

impl Controllers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self, tag: &str) {
        *self.slot_mut(Hand::from_tag(tag)) = ControllerSlot::Connected(ControllerState {
            tag: String::from(tag),
            trigger: TriggerState::default(),
        });
    }

    pub fn disconnect(&mut self, tag: &str) {
        *self.slot_mut(Hand::from_tag(tag)) = ControllerSlot::NotConnected;
    }

    pub fn connected(&self, hand: Hand) -> bool {
        matches!(self.slot(hand), ControllerSlot::Connected(_))
    }

    // Level report from the platform. The edge flag is derived here so
    // repeated reports of the same level never look like new input.
    pub fn set_trigger(&mut self, hand: Hand, pressed: bool) {
        if let ControllerSlot::Connected(state) = self.slot_mut(hand) {
            state.trigger.changed = state.trigger.pressed != pressed;
            state.trigger.pressed = pressed;
        }
    }

    // None while the controller has not connected yet; polling is then a no-op.
    pub fn trigger(&self, hand: Hand) -> Option<TriggerState> {
        match self.slot(hand) {
            ControllerSlot::Connected(state) => Some(state.trigger),
            ControllerSlot::NotConnected => None,
        }
    }

    pub fn clear_edges(&mut self) {
        for hand in [Hand::Left, Hand::Right] {
            if let ControllerSlot::Connected(state) = self.slot_mut(hand) {
                state.trigger.changed = false;
            }
        }
    }

    fn slot(&self, hand: Hand) -> &ControllerSlot {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }

    fn slot_mut(&mut self, hand: Hand) -> &mut ControllerSlot {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_suffix_routing() {
        assert_eq!(Hand::from_tag("controller-left"), Hand::Left);
        assert_eq!(Hand::from_tag("controller-right"), Hand::Right);
        // Unrecognized tags fall through to the right slot.
        assert_eq!(Hand::from_tag("gamepad-7"), Hand::Right);
    }

    #[test]
    fn trigger_edge_derivation() {
        let mut controllers = Controllers::new();
        assert!(controllers.trigger(Hand::Right).is_none());

        controllers.connect("controller-right");
        controllers.set_trigger(Hand::Right, true);
        let t = controllers.trigger(Hand::Right).unwrap();
        assert!(t.pressed && t.changed);

        // Same level again: no edge.
        controllers.set_trigger(Hand::Right, true);
        let t = controllers.trigger(Hand::Right).unwrap();
        assert!(t.pressed && !t.changed);

        controllers.set_trigger(Hand::Right, false);
        let t = controllers.trigger(Hand::Right).unwrap();
        assert!(!t.pressed && t.changed);
    }

    #[test]
    fn level_reports_for_missing_controller_are_dropped() {
        let mut controllers = Controllers::new();
        controllers.set_trigger(Hand::Right, true);
        assert!(controllers.trigger(Hand::Right).is_none());
    }
}
