//! User notifications
//!
//! State transitions never fail loudly: they record a [`Notice`] on a
//! [`NoticeBoard`] and the command layer drains it into an
//! [`OutputWriter`](super::OutputWriter).

/// Message level for categorizing notices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// A single user-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: MessageLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: MessageLevel::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: MessageLevel::Error, message: message.into() }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: MessageLevel::Warning, message: message.into() }
    }
}

/// Pending notices, oldest first
///
/// # Examples
///
/// ```
/// use mediashelf::output::{Notice, NoticeBoard};
///
/// let mut board = NoticeBoard::default();
/// board.push(Notice::success("Tags updated"));
///
/// assert_eq!(board.drain().len(), 1);
/// assert!(board.drain().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct NoticeBoard {
    pending: Vec<Notice>,
}

impl NoticeBoard {
    pub fn push(&mut self, notice: Notice) {
        self.pending.push(notice);
    }

    /// Remove and return every notice, oldest first
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_keeps_order() {
        let mut board = NoticeBoard::default();
        board.push(Notice::success("first"));
        board.push(Notice::error("second"));

        let notices = board.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, MessageLevel::Success);
        assert_eq!(notices[1], Notice::error("second"));
    }

    #[test]
    fn test_drain_empties_board() {
        let mut board = NoticeBoard::default();
        board.push(Notice::success("x"));
        assert_eq!(board.drain().len(), 1);
        assert!(board.drain().is_empty());
    }
}
