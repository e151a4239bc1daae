//! Closeable notifications shown in the bottom-right corner

use std::collections::VecDeque;

/// Default number of toasts kept on screen
pub const DEFAULT_TOAST_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

/// Newest last. Once full, the oldest toast is dropped.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    limit: usize,
    next_id: u64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(DEFAULT_TOAST_LIMIT)
    }
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            limit: limit.max(1),
            next_id: 0,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        if self.toasts.len() == self.limit {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Info, message)
    }

    /// Remove a toast; unknown ids are ignored
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.info("Copied");
        let second = queue.push(ToastKind::Success, "Message sent");

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));

        let remaining: Vec<_> = queue.iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![second]);
    }

    #[test]
    fn test_full_queue_drops_oldest() {
        let mut queue = ToastQueue::with_limit(2);
        queue.info("one");
        queue.info("two");
        queue.info("three");

        let messages: Vec<_> = queue.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut queue = ToastQueue::default();
        let a = queue.info("a");
        queue.dismiss(a);
        let b = queue.info("b");
        assert_ne!(a, b);
    }
}
