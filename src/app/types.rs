//! Small state types owned by the App.

use std::collections::VecDeque;

/// Ticks a toast stays on screen (~3s at 60fps)
pub const TOAST_TTL_TICKS: u64 = 180;

/// Toasts shown at once; older ones are dropped first
pub const MAX_TOASTS: usize = 3;

/// Ticks a section enter transition lasts (~200ms at 60fps)
pub const TRANSITION_TICKS: u64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
            ToastKind::Info => "ℹ",
        }
    }
}

/// A transient notification in the top-right corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    pub expires_at: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>, now: u64) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            kind,
            text: text.into(),
            expires_at: now + TOAST_TTL_TICKS,
        });
    }

    /// Drop expired toasts. Returns true if any were removed.
    pub fn prune(&mut self, now: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Enter animation for a newly mounted section view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
    started_at: Option<u64>,
}

impl Transition {
    pub fn start(&mut self, now: u64) {
        self.started_at = Some(now);
    }

    pub fn finish(&mut self) {
        self.started_at = None;
    }

    /// Progress from 0.0 (just mounted) to 1.0 (settled).
    pub fn progress(&self, now: u64) -> f32 {
        match self.started_at {
            Some(start) => {
                let elapsed = now.saturating_sub(start).min(TRANSITION_TICKS);
                elapsed as f32 / TRANSITION_TICKS as f32
            }
            None => 1.0,
        }
    }

    pub fn is_active(&self, now: u64) -> bool {
        self.progress(now) < 1.0
    }

    /// Columns the body is shifted right while sliding in.
    pub fn offset(&self, now: u64, max_shift: u16) -> u16 {
        ((1.0 - self.progress(now)) * f32::from(max_shift)).round() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire() {
        let mut queue = ToastQueue::new();
        queue.push(ToastKind::Info, "hello", 10);
        assert!(!queue.prune(10 + TOAST_TTL_TICKS - 1));
        assert_eq!(queue.len(), 1);
        assert!(queue.prune(10 + TOAST_TTL_TICKS));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_toast_queue_is_bounded() {
        let mut queue = ToastQueue::new();
        for i in 0..5 {
            queue.push(ToastKind::Success, format!("t{}", i), 0);
        }
        let texts: Vec<&str> = queue.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["t2", "t3", "t4"]);

        let newest_first: Vec<&str> = queue.iter().rev().map(|t| t.text.as_str()).collect();
        assert_eq!(newest_first, vec!["t4", "t3", "t2"]);
    }

    #[test]
    fn test_transition_progress() {
        let mut transition = Transition::default();
        assert!(!transition.is_active(0));
        assert_eq!(transition.offset(0, 8), 0);

        transition.start(100);
        assert_eq!(transition.progress(100), 0.0);
        assert_eq!(transition.offset(100, 8), 8);
        assert!(transition.is_active(100 + TRANSITION_TICKS / 2));
        assert!(!transition.is_active(100 + TRANSITION_TICKS));

        transition.start(200);
        transition.finish();
        assert_eq!(transition.progress(200), 1.0);
    }
}
