//! Project modal navigation and keyboard handling.

use crate::catalog::{project_index, PROJECT_IDS};

/// Delay between closing and reopening the modal on arrow navigation, long
/// enough for the close animation to finish.
pub const REOPEN_DELAY_MS: u32 = 100;
pub const CONTENT_FOCUS_DELAY_MS: u32 = 100;
pub const ANNOUNCEMENT_TTL_MS: u32 = 1_000;

pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Neighbour of `current` in the fixed navigation order, wrapping at both ends.
/// With nothing open, Next starts at the first project and Previous at the last.
pub fn adjacent_project(current: Option<&str>, direction: Direction) -> &'static str {
    let len = PROJECT_IDS.len();
    let index = match (current.and_then(project_index), direction) {
        (Some(index), Direction::Next) => (index + 1) % len,
        (Some(index), Direction::Previous) => (index + len - 1) % len,
        (None, Direction::Next) => 0,
        (None, Direction::Previous) => len - 1,
    };

    PROJECT_IDS[index]
}

/// Arrow keys navigate only while the modal is showing.
pub fn arrow_navigation(key: &str, modal_open: bool) -> Option<Direction> {
    if !modal_open {
        return None;
    }

    match key {
        "ArrowRight" => Some(Direction::Next),
        "ArrowLeft" => Some(Direction::Previous),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    ProjectModal,
    ThemePanel,
}

/// What Escape closes. The project modal wins when both are up.
pub fn escape_target(modal_open: bool, panel_open: bool) -> Option<Overlay> {
    if modal_open {
        Some(Overlay::ProjectModal)
    } else if panel_open {
        Some(Overlay::ThemePanel)
    } else {
        None
    }
}

/// Where Tab should move inside a modal with `count` focusable descendants.
///
/// Returns `Some` only at the wrap points (Shift+Tab on the first element, Tab
/// on the last); everywhere else the browser's own tab order applies.
pub fn focus_trap_target(focused: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let last = count - 1;
    match (focused, backwards) {
        (Some(0), true) => Some(last),
        (Some(index), false) if index == last => Some(0),
        _ => None,
    }
}

pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

pub fn open_announcement(title: &str) -> String {
    format!("Opened {title} project details")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_back_to_start_after_full_lap() {
        for start in PROJECT_IDS {
            let mut current = start;
            for _ in 0..PROJECT_IDS.len() {
                current = adjacent_project(Some(current), Direction::Next);
            }
            assert_eq!(current, start);
        }
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        assert_eq!(adjacent_project(Some("cod"), Direction::Previous), "webdev");
        assert_eq!(adjacent_project(Some("webdev"), Direction::Next), "cod");
    }

    #[test]
    fn nothing_open_starts_at_the_ends() {
        assert_eq!(adjacent_project(None, Direction::Next), "cod");
        assert_eq!(adjacent_project(Some("unknown"), Direction::Previous), "webdev");
    }

    #[test]
    fn arrows_ignored_without_modal() {
        assert_eq!(arrow_navigation("ArrowRight", false), None);
        assert_eq!(arrow_navigation("ArrowRight", true), Some(Direction::Next));
        assert_eq!(arrow_navigation("ArrowLeft", true), Some(Direction::Previous));
        assert_eq!(arrow_navigation("ArrowUp", true), None);
    }

    #[test]
    fn escape_prefers_project_modal() {
        assert_eq!(escape_target(true, true), Some(Overlay::ProjectModal));
        assert_eq!(escape_target(false, true), Some(Overlay::ThemePanel));
        assert_eq!(escape_target(false, false), None);
    }

    #[test]
    fn focus_trap_wraps_at_edges_only() {
        assert_eq!(focus_trap_target(Some(0), 4, true), Some(3));
        assert_eq!(focus_trap_target(Some(3), 4, false), Some(0));
        assert_eq!(focus_trap_target(Some(1), 4, false), None);
        assert_eq!(focus_trap_target(Some(1), 4, true), None);
        assert_eq!(focus_trap_target(None, 4, false), None);
        assert_eq!(focus_trap_target(Some(0), 0, true), None);
    }

    #[test]
    fn single_focusable_wraps_onto_itself() {
        assert_eq!(focus_trap_target(Some(0), 1, false), Some(0));
        assert_eq!(focus_trap_target(Some(0), 1, true), Some(0));
    }

    #[test]
    fn activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }
}
