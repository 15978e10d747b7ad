//! Screens of the session state machine

use super::choice::MenuChoice;

/// A state of the session loop.
///
/// `Menu` is the initial state and `Exit` the only terminal one. Every
/// action screen hands control back to `Menu` once its action is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Menu,
    Fetch,
    SetCategory,
    SetLanguage,
    Reset,
    Exit,
}

impl Screen {
    /// Screen a recognized menu choice leads to
    pub fn for_choice(choice: MenuChoice) -> Screen {
        match choice {
            MenuChoice::NextJoke => Screen::Fetch,
            MenuChoice::ChangeCategory => Screen::SetCategory,
            MenuChoice::ChangeLanguage => Screen::SetLanguage,
            MenuChoice::ResetHistory => Screen::Reset,
            MenuChoice::Quit => Screen::Exit,
        }
    }

    /// Route a raw menu token.
    ///
    /// Total: any token that is not a known choice goes to `Exit`.
    pub fn route(token: &str) -> Screen {
        MenuChoice::parse(token).map_or(Screen::Exit, Screen::for_choice)
    }

    /// Fixed successor of an action screen; `Exit` has none.
    ///
    /// `Menu` has no fixed successor either since it depends on input, so it
    /// also returns `None`.
    pub fn next(self) -> Option<Screen> {
        match self {
            Screen::Fetch | Screen::SetCategory | Screen::SetLanguage | Screen::Reset => {
                Some(Screen::Menu)
            }
            Screen::Menu | Screen::Exit => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Menu => "menu",
            Screen::Fetch => "fetch",
            Screen::SetCategory => "set_category",
            Screen::SetLanguage => "set_language",
            Screen::Reset => "reset",
            Screen::Exit => "exit",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
