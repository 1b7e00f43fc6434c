//! Named colour themes, their persistence, and the masked swap sequence.

pub const THEME_KEY: &str = "portfolio-theme";
pub const OVERLAY_MASK_OPACITY: f64 = 0.15;
pub const PRESS_FEEDBACK_MS: u32 = 150;
pub const PANEL_CLOSE_DELAY_MS: u32 = 300;
pub const PANEL_FOCUS_DELAY_MS: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    CyberBlue,
    SunsetGlow,
    EmeraldForest,
    RoyalPurple,
    MidnightRose,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::CyberBlue,
        Theme::SunsetGlow,
        Theme::EmeraldForest,
        Theme::RoyalPurple,
        Theme::MidnightRose,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CyberBlue => "cyber-blue",
            Self::SunsetGlow => "sunset-glow",
            Self::EmeraldForest => "emerald-forest",
            Self::RoyalPurple => "royal-purple",
            Self::MidnightRose => "midnight-rose",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CyberBlue => "Cyber Blue",
            Self::SunsetGlow => "Sunset Glow",
            Self::EmeraldForest => "Emerald Forest",
            Self::RoyalPurple => "Royal Purple",
            Self::MidnightRose => "Midnight Rose",
        }
    }

    /// Value for the root `data-theme` attribute. The baseline theme is the
    /// stylesheet default and is expressed by removing the attribute.
    pub fn root_attribute(self) -> Option<&'static str> {
        match self {
            Self::CyberBlue => None,
            other => Some(other.as_str()),
        }
    }
}

/// Origin-scoped key/value storage holding the chosen theme name.
pub trait ThemeStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Stored theme, or the baseline when nothing valid is stored.
pub fn load_theme(store: &impl ThemeStore) -> Theme {
    store
        .read(THEME_KEY)
        .and_then(|value| Theme::from_str(value.trim()))
        .unwrap_or_default()
}

pub fn persist_theme(store: &impl ThemeStore, theme: Theme) {
    store.write(THEME_KEY, theme.as_str());
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStep {
    /// Insert the overlay and fade it up to the mask opacity.
    MaskIn,
    /// Swap the root attribute and persist while the overlay is up.
    Swap,
    MaskOut,
    Remove,
}

impl TransitionStep {
    pub fn overlay_opacity(self) -> Option<f64> {
        match self {
            Self::MaskIn | Self::Swap => Some(OVERLAY_MASK_OPACITY),
            Self::MaskOut => Some(0.0),
            Self::Remove => None,
        }
    }
}

/// Offsets in milliseconds from the moment a theme is picked.
pub const TRANSITION_SCHEDULE: [(u32, TransitionStep); 4] = [
    (0, TransitionStep::MaskIn),
    (150, TransitionStep::Swap),
    (250, TransitionStep::MaskOut),
    (450, TransitionStep::Remove),
];

/// Index reached from `index` by ArrowDown (`forward`) or ArrowUp, wrapping.
pub fn cycle_option(index: usize, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let index = index.min(len - 1);
    Some(if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    })
}

/// Option still showing press feedback. A closed panel shows none, whatever
/// release timer was cancelled along with it.
pub fn pressed_option(panel_open: bool, pressed: Option<Theme>) -> Option<Theme> {
    pressed.filter(|_| panel_open)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_feedback_does_not_survive_closing() {
        let pressed = Some(Theme::SunsetGlow);
        assert_eq!(pressed_option(true, pressed), pressed);
        assert_eq!(pressed_option(false, pressed), None);
        assert_eq!(pressed_option(true, None), None);
    }
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl ThemeStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn fresh_store_yields_baseline() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store), Theme::CyberBlue);
    }

    #[test]
    fn persisted_theme_survives_reload() {
        let store = MemoryStore::default();
        persist_theme(&store, Theme::SunsetGlow);

        assert_eq!(store.read(THEME_KEY).as_deref(), Some("sunset-glow"));
        assert_eq!(load_theme(&store), Theme::SunsetGlow);
    }

    #[test]
    fn unknown_stored_value_falls_back_to_baseline() {
        let store = MemoryStore::default();
        store.write(THEME_KEY, "neon-pink");
        assert_eq!(load_theme(&store), Theme::CyberBlue);
    }

    #[test]
    fn baseline_clears_root_attribute() {
        assert_eq!(Theme::CyberBlue.root_attribute(), None);
        assert_eq!(Theme::RoyalPurple.root_attribute(), Some("royal-purple"));
    }

    #[test]
    fn swap_happens_while_overlay_masks_the_page() {
        let swap_at = TRANSITION_SCHEDULE
            .iter()
            .find(|(_, step)| *step == TransitionStep::Swap)
            .map(|(at, _)| *at)
            .expect("schedule has a swap");

        let (mask_in, _) = TRANSITION_SCHEDULE[0];
        let mask_out = TRANSITION_SCHEDULE
            .iter()
            .find(|(_, step)| *step == TransitionStep::MaskOut)
            .map(|(at, _)| *at)
            .expect("schedule has a mask out");

        assert!(mask_in < swap_at && swap_at < mask_out);
        assert_eq!(TransitionStep::Swap.overlay_opacity(), Some(OVERLAY_MASK_OPACITY));
        assert!(TRANSITION_SCHEDULE.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn option_cycling_wraps_both_ways() {
        assert_eq!(cycle_option(4, 5, true), Some(0));
        assert_eq!(cycle_option(0, 5, false), Some(4));
        assert_eq!(cycle_option(2, 5, true), Some(3));
        assert_eq!(cycle_option(0, 0, true), None);
    }
}
