use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::pitch::{self, ContentBlock, SellLevel};

/// The four pages of the site. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Projects,
    Resume,
    About,
}

impl Page {
    /// Menu order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Projects, Page::Resume, Page::About];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::About => "about",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::Resume => "Resume",
            Self::About => "About Me",
        }
    }

    /// Text for the document `<title>`.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Portfolio",
            Self::Projects => "Projects",
            Self::Resume => "Resume",
            Self::About => "About Me",
        }
    }

    /// Icon-font class shown next to the menu label.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "extra-home",
            Self::Projects => "extra-code",
            Self::Resume => "extra-file",
            Self::About => "extra-user",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("no such page: {0}")]
    Unknown(String),
}

impl FromStr for Page {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_matches('/').to_ascii_lowercase();
        Page::ALL
            .into_iter()
            .find(|p| p.slug() == name)
            .ok_or_else(|| PageError::Unknown(s.to_string()))
    }
}

impl Page {
    /// URL fragment that links to this page, e.g. `#resume`.
    pub fn fragment(self) -> String {
        format!("#{}", self.slug())
    }

    /// Page named by a URL fragment. An empty fragment names no page.
    pub fn from_fragment(fragment: &str) -> Result<Option<Page>, PageError> {
        let name = fragment.trim_start_matches('#');
        if name.trim().is_empty() {
            return Ok(None);
        }
        name.parse().map(Some)
    }
}

/// Process-wide UI state. The view layer keeps one of these in a signal and
/// mutates it only through the methods below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    current_page: Page,
    menu_open: bool,
    dark_mode: bool,
    sell_level: SellLevel,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn sell_level(&self) -> SellLevel {
        self.sell_level
    }

    /// Switches page. Always closes the menu, even when `target` is already
    /// the current page.
    pub fn navigate_to(&mut self, target: Page) {
        if target != self.current_page {
            log::debug!("navigate {} -> {}", self.current_page, target);
        }
        self.current_page = target;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn set_dark_mode(&mut self, on: bool) {
        self.dark_mode = on;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn set_sell_level(&mut self, level: i32) {
        self.sell_level = SellLevel::new(level);
    }

    pub fn pitch(&self) -> ContentBlock {
        pitch::content_for(self.sell_level.into())
    }

    pub fn show_inline_contact_link(&self) -> bool {
        pitch::show_inline_contact_link(self.sell_level.into())
    }

    pub fn show_full_screen_contact_prompt(&self) -> bool {
        pitch::show_full_screen_contact_prompt(self.sell_level.into())
    }

    /// Class for the root element; tailwind's `dark:` variants key off it.
    pub fn theme_class(&self) -> &'static str {
        if self.dark_mode {
            "dark"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = UiState::new();
        assert_eq!(state.current_page(), Page::Home);
        assert!(!state.menu_open());
        assert!(!state.dark_mode());
        assert_eq!(state.sell_level().get(), 0);
    }

    #[test]
    fn test_navigate_sets_page() {
        let mut state = UiState::new();
        for from in Page::ALL {
            for to in Page::ALL {
                state.navigate_to(from);
                state.navigate_to(to);
                assert_eq!(state.current_page(), to);
            }
        }
    }

    #[test]
    fn test_navigate_always_closes_menu() {
        let mut state = UiState::new();
        for target in Page::ALL {
            state.open_menu();
            state.navigate_to(target);
            assert!(!state.menu_open());

            // already closed stays closed
            state.navigate_to(target);
            assert!(!state.menu_open());
        }

        // same page still closes the menu
        state.navigate_to(Page::Resume);
        state.toggle_menu();
        assert!(state.menu_open());
        state.navigate_to(Page::Resume);
        assert_eq!(state.current_page(), Page::Resume);
        assert!(!state.menu_open());
    }

    #[test]
    fn test_toggle_menu_parity() {
        let mut state = UiState::new();
        state.toggle_menu();
        state.toggle_menu();
        assert!(!state.menu_open());

        for _ in 0..5 {
            state.toggle_menu();
        }
        assert!(state.menu_open());
    }

    #[test]
    fn test_menu_does_not_change_page() {
        let mut state = UiState::new();
        state.navigate_to(Page::About);
        state.toggle_menu();
        assert_eq!(state.current_page(), Page::About);
        state.close_menu();
        state.close_menu();
        assert!(!state.menu_open());
        assert_eq!(state.current_page(), Page::About);
    }

    #[test]
    fn test_sell_level_survives_navigation() {
        let mut state = UiState::new();
        state.set_sell_level(63);
        state.navigate_to(Page::Projects);
        state.navigate_to(Page::About);
        state.navigate_to(Page::Home);
        assert_eq!(state.sell_level().get(), 63);
        assert_eq!(state.pitch(), pitch::content_for(63));
    }

    #[test]
    fn test_sell_level_clamped() {
        let mut state = UiState::new();
        state.set_sell_level(-20);
        assert_eq!(state.sell_level().get(), 0);
        state.set_sell_level(250);
        assert_eq!(state.sell_level().get(), 100);
        assert!(state.show_full_screen_contact_prompt());
    }

    #[test]
    fn test_contact_gates_follow_level() {
        let mut state = UiState::new();
        state.set_sell_level(79);
        assert!(!state.show_inline_contact_link());
        state.set_sell_level(80);
        assert!(state.show_inline_contact_link());
        assert!(!state.show_full_screen_contact_prompt());
        state.set_sell_level(98);
        assert!(state.show_full_screen_contact_prompt());
    }

    #[test]
    fn test_dark_mode() {
        let mut state = UiState::new();
        assert_eq!(state.theme_class(), "");
        state.toggle_dark_mode();
        assert_eq!(state.theme_class(), "dark");
        state.navigate_to(Page::Resume);
        assert!(state.dark_mode());
        state.set_dark_mode(false);
        assert!(!state.dark_mode());
    }

    #[test]
    fn test_page_from_str() {
        for page in Page::ALL {
            assert_eq!(page.slug().parse::<Page>(), Ok(page));
            assert_eq!(page.to_string().parse::<Page>(), Ok(page));
        }
        assert_eq!("/Resume/".parse::<Page>(), Ok(Page::Resume));
        assert_eq!(
            "blog".parse::<Page>(),
            Err(PageError::Unknown("blog".to_string()))
        );
        assert!("".parse::<Page>().is_err());
    }

    #[test]
    fn test_page_from_fragment() {
        for page in Page::ALL {
            assert_eq!(Page::from_fragment(&page.fragment()), Ok(Some(page)));
        }
        assert_eq!(Page::from_fragment(""), Ok(None));
        assert_eq!(Page::from_fragment("#"), Ok(None));
        assert_eq!(Page::from_fragment("#About"), Ok(Some(Page::About)));
        assert_eq!(
            Page::from_fragment("#blog"),
            Err(PageError::Unknown("blog".to_string()))
        );
    }

    #[test]
    fn test_restore_from_fragment_closes_menu() {
        let mut state = UiState::new();
        state.open_menu();
        if let Ok(Some(page)) = Page::from_fragment("#projects") {
            state.navigate_to(page);
        }
        assert_eq!(state.current_page(), Page::Projects);
        assert!(!state.menu_open());
    }
}
