// Rust guideline compliant 2026-10-17

//! Live progress display while subtasks are fetched.

const CURSOR_PREVIOUS_LINE: &str = "\x1b[F";

/// Spinner redrawn in place on stderr for every fetched subtask.
pub struct SubtaskSpinner {
    enabled: bool,
    started: bool,
}

impl SubtaskSpinner {
    /// Creates a new spinner.
    ///
    /// # Arguments
    ///
    /// * `enabled` - When false, every call is a no-op
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            started: false,
        }
    }

    /// Frame shown for the given 1-based position.
    #[must_use]
    pub fn frame(current: usize, count: usize) -> String {
        let loader = if current % 2 == 1 { '/' } else { '\\' };
        format!("Subtasks count: {} {}", count, loader)
    }

    /// Reports that subtask `current` of `count` is being fetched.
    pub fn tick(&mut self, current: usize, count: usize) {
        if !self.enabled {
            return;
        }

        if !self.started {
            eprintln!();
            eprintln!("Subtasks count: {} ", count);
            self.started = true;
        }
        eprintln!("{}{}", CURSOR_PREVIOUS_LINE, Self::frame(current, count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_alternate() {
        assert_eq!(SubtaskSpinner::frame(1, 3), "Subtasks count: 3 /");
        assert_eq!(SubtaskSpinner::frame(2, 3), "Subtasks count: 3 \\");
        assert_eq!(SubtaskSpinner::frame(3, 3), "Subtasks count: 3 /");
    }

    #[test]
    fn test_disabled_spinner_is_silent() {
        let mut spinner = SubtaskSpinner::new(false);
        spinner.tick(1, 2);
        assert!(!spinner.started);
    }
}
