//! Notifier boundary for event cues (sound).
//!
//! The controller never plays anything itself: commands return the events they
//! produced, and the caller hands them to a [`Notifier`].

use crate::types::GameEvent;

pub trait Notifier {
    fn notify(&mut self, event: GameEvent);
}

/// Drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _event: GameEvent) {}
}

/// Keeps every event it receives, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub events: Vec<GameEvent>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Deliver events to `notifier` while sound is enabled
pub fn forward_events<N: Notifier + ?Sized>(
    events: &[GameEvent],
    sound_enabled: bool,
    notifier: &mut N,
) {
    if !sound_enabled {
        return;
    }
    for &event in events {
        notifier.notify(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_respects_sound_flag() {
        let mut rec = RecordingNotifier::default();
        forward_events(&[GameEvent::Lock, GameEvent::Clear], false, &mut rec);
        assert!(rec.events.is_empty());

        forward_events(&[GameEvent::Lock, GameEvent::Clear], true, &mut rec);
        assert_eq!(rec.events, vec![GameEvent::Lock, GameEvent::Clear]);
    }
}
