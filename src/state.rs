//! Page-wide UI state shared by the modal, theme panel, skills tabs and focus
//! handling. Lives for one page load; only the theme outlives it, through the
//! theme store.

use crate::catalog::{self, SkillCategory};
use crate::showcase::{self, Direction, Overlay};
use crate::theme::Theme;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub open_project: Option<&'static str>,
    pub keyboard_user: bool,
    pub theme: Theme,
    pub skill_category: SkillCategory,
    pub theme_panel_open: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
    /// Ignored when the id is not in the project table.
    OpenProject(String),
    CloseProject,
    SetKeyboardUser(bool),
    ApplyTheme(Theme),
    SelectCategory(SkillCategory),
    OpenThemePanel,
    CloseThemePanel,
    Escape,
}

impl UiState {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn modal_open(&self) -> bool {
        self.open_project.is_some()
    }

    /// Background scrolling stays locked while either overlay is up.
    pub fn scroll_locked(&self) -> bool {
        self.modal_open() || self.theme_panel_open
    }

    /// Id of the card that should take focus back when the modal closes; only
    /// keyboard users get focus restored.
    pub fn focus_return_on_close(&self) -> Option<&'static str> {
        if self.keyboard_user {
            self.open_project
        } else {
            None
        }
    }

    pub fn adjacent_project(&self, direction: Direction) -> &'static str {
        showcase::adjacent_project(self.open_project, direction)
    }

    pub fn escape_target(&self) -> Option<Overlay> {
        showcase::escape_target(self.modal_open(), self.theme_panel_open)
    }

    /// Next state, or `None` when the action changes nothing.
    pub fn apply(&self, action: UiAction) -> Option<Self> {
        let mut next = self.clone();

        match action {
            UiAction::OpenProject(id) => {
                let record = catalog::project(&id)?;
                next.open_project = Some(record.id);
            }
            UiAction::CloseProject => next.open_project = None,
            UiAction::SetKeyboardUser(value) => next.keyboard_user = value,
            UiAction::ApplyTheme(theme) => next.theme = theme,
            UiAction::SelectCategory(category) => next.skill_category = category,
            UiAction::OpenThemePanel => next.theme_panel_open = true,
            UiAction::CloseThemePanel => next.theme_panel_open = false,
            UiAction::Escape => match self.escape_target()? {
                Overlay::ProjectModal => next.open_project = None,
                Overlay::ThemePanel => next.theme_panel_open = false,
            },
        }

        (next != *self).then_some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PROJECT_IDS;

    fn reduce(state: &UiState, action: UiAction) -> UiState {
        state.apply(action).unwrap_or_else(|| state.clone())
    }

    #[test]
    fn open_then_close_restores_scrolling_for_every_project() {
        for id in PROJECT_IDS {
            let opened = reduce(&UiState::default(), UiAction::OpenProject(id.to_string()));
            assert!(opened.modal_open());
            assert!(opened.scroll_locked());

            let closed = reduce(&opened, UiAction::CloseProject);
            assert!(!closed.modal_open());
            assert!(!closed.scroll_locked());
        }
    }

    #[test]
    fn unknown_project_is_a_no_op() {
        let state = UiState::default();
        assert_eq!(state.apply(UiAction::OpenProject("nope".to_string())), None);
    }

    #[test]
    fn escape_closes_modal_before_panel() {
        let mut state = reduce(&UiState::default(), UiAction::OpenThemePanel);
        state = reduce(&state, UiAction::OpenProject("ac".to_string()));

        let after_first = reduce(&state, UiAction::Escape);
        assert!(!after_first.modal_open());
        assert!(after_first.theme_panel_open);

        let after_second = reduce(&after_first, UiAction::Escape);
        assert!(!after_second.theme_panel_open);
        assert_eq!(after_second.apply(UiAction::Escape), None);
    }

    #[test]
    fn focus_returns_only_for_keyboard_users() {
        let pointer = reduce(&UiState::default(), UiAction::OpenProject("python".to_string()));
        assert_eq!(pointer.focus_return_on_close(), None);

        let keyboard = reduce(&pointer, UiAction::SetKeyboardUser(true));
        assert_eq!(keyboard.focus_return_on_close(), Some("python"));
    }

    #[test]
    fn panel_keeps_scroll_locked_after_modal_closes() {
        let mut state = reduce(&UiState::default(), UiAction::OpenThemePanel);
        state = reduce(&state, UiAction::OpenProject("cod".to_string()));
        state = reduce(&state, UiAction::CloseProject);
        assert!(state.scroll_locked());
    }

    #[test]
    fn navigation_uses_open_project() {
        let state = reduce(&UiState::default(), UiAction::OpenProject("webdev".to_string()));
        assert_eq!(state.adjacent_project(Direction::Next), "cod");
        assert_eq!(state.adjacent_project(Direction::Previous), "python");
    }

    #[test]
    fn unchanged_actions_report_none() {
        let state = UiState::with_theme(Theme::SunsetGlow);
        assert_eq!(state.apply(UiAction::ApplyTheme(Theme::SunsetGlow)), None);
        assert_eq!(state.apply(UiAction::SetKeyboardUser(false)), None);
        assert_eq!(
            state
                .apply(UiAction::SelectCategory(SkillCategory::Tools))
                .map(|next| next.skill_category),
            Some(SkillCategory::Tools)
        );
    }
}
