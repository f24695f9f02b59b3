use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How long a notification stays visible.
pub const NOTIFICATION_WINDOW_MS: u64 = 2_000;

/// Volume level 0-3 to audio gain. Deliberately nonlinear so the low
/// settings stay audible but unobtrusive.
pub const VOLUME_GAIN: [f32; 4] = [0.0, 0.1, 0.4, 1.0];

pub const MAX_VOLUME_LEVEL: u8 = 3;

pub fn gain_for(level: u8) -> f32 {
    VOLUME_GAIN[level.min(MAX_VOLUME_LEVEL) as usize]
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioCue {
    RoundStartFanfare,
    YourTurnChime,
    VictoryJingle,
    DefeatJingle,
    TrumpExposed,
    FadeBackgroundMusic,
}

/// Time-boxed transient messages, keyed by a strictly increasing
/// millisecond timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationBoard {
    entries: BTreeMap<u64, String>,
}

impl NotificationBoard {
    /// Inserts a message and returns its key. Entries strictly older than
    /// the window are pruned on the way in. Keys are bumped past the latest
    /// existing key so insertion order is always recoverable.
    pub fn insert(&mut self, now_ms: u64, message: impl Into<String>) -> u64 {
        self.prune(now_ms);
        let key = match self.entries.keys().next_back() {
            Some(&last) if last >= now_ms => last + 1,
            _ => now_ms,
        };
        self.entries.insert(key, message.into());
        key
    }

    /// Timer-driven expiry: removes the entry with the given key and every
    /// entry before it, cleaning up anything that was never individually
    /// expired.
    pub fn expire_up_to(&mut self, key: u64) {
        self.entries.retain(|&k, _| k > key);
    }

    pub fn prune(&mut self, now_ms: u64) {
        self.entries
            .retain(|&k, _| now_ms.saturating_sub(k) <= NOTIFICATION_WINDOW_MS);
    }

    /// Entries still inside the window at `now_ms`, oldest first.
    pub fn visible(&self, now_ms: u64) -> impl Iterator<Item = (u64, &str)> {
        self.entries
            .iter()
            .filter(move |(&k, _)| now_ms.saturating_sub(k) <= NOTIFICATION_WINDOW_MS)
            .map(|(&k, message)| (k, message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_expires_after_window() {
        let mut board = NotificationBoard::default();
        let key = board.insert(10_000, "hello");
        assert_eq!(key, 10_000);
        assert_eq!(board.visible(11_900).count(), 1);
        assert_eq!(board.visible(12_100).count(), 0);
    }

    #[test]
    fn insert_prunes_stale_entries() {
        let mut board = NotificationBoard::default();
        board.insert(1_000, "old");
        board.insert(10_000, "new");
        assert_eq!(board.len(), 1);
        assert_eq!(board.visible(10_000).next().unwrap().1, "new");
    }

    #[test]
    fn keys_are_strictly_increasing_within_one_ms() {
        let mut board = NotificationBoard::default();
        let first = board.insert(5_000, "a");
        let second = board.insert(5_000, "b");
        assert!(second > first);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn expire_up_to_sweeps_everything_before_it() {
        let mut board = NotificationBoard::default();
        let first = board.insert(5_000, "a");
        let second = board.insert(5_001, "b");
        board.insert(5_002, "c");
        board.expire_up_to(second);
        assert_eq!(board.len(), 1);
        assert!(board.visible(5_002).all(|(k, _)| k > first));
    }

    #[test]
    fn gain_table_is_nonlinear_and_clamped() {
        assert_eq!(gain_for(0), 0.0);
        assert_eq!(gain_for(1), 0.1);
        assert_eq!(gain_for(2), 0.4);
        assert_eq!(gain_for(3), 1.0);
        assert_eq!(gain_for(9), 1.0);
    }
}
