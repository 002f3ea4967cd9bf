//! Main Menu Component
//!
//! The first screen shown: start a game, open settings, or quit.

use super::Menu;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Options in the main menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MainMenuOption {
    Play,
    Settings,
    Quit,
}

impl MainMenuOption {
    const ALL: [MainMenuOption; 3] = [MainMenuOption::Play, MainMenuOption::Settings, MainMenuOption::Quit];

    fn label(self) -> &'static str {
        match self {
            MainMenuOption::Play => "PLAY",
            MainMenuOption::Settings => "SETTINGS",
            MainMenuOption::Quit => "QUIT",
        }
    }
}

/// Type-safe wrapper around the base [`Menu`]
pub struct MainMenu {
    menu: Menu,
}

impl MainMenu {
    pub fn new() -> Self {
        let items = MainMenuOption::ALL
            .iter()
            .map(|option| option.label().to_string())
            .collect();

        MainMenu {
            menu: Menu::new("KEY DUNGEON", items),
        }
    }

    /// Navigate up (wraps to bottom)
    pub fn navigate_up(&mut self) {
        self.menu.select_previous();
    }

    /// Navigate down (wraps to top)
    pub fn navigate_down(&mut self) {
        self.menu.select_next();
    }

    pub fn selected_option(&self) -> MainMenuOption {
        MainMenuOption::ALL
            .get(self.menu.selected_index())
            .copied()
            .unwrap_or(MainMenuOption::Quit)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, screen_size: (u32, u32)) -> Result<(), String> {
        self.menu.render(canvas, screen_size)
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_play() {
        assert_eq!(MainMenu::new().selected_option(), MainMenuOption::Play);
    }

    #[test]
    fn test_navigation_cycles_options() {
        let mut menu = MainMenu::new();

        menu.navigate_down();
        assert_eq!(menu.selected_option(), MainMenuOption::Settings);
        menu.navigate_down();
        assert_eq!(menu.selected_option(), MainMenuOption::Quit);
        menu.navigate_down();
        assert_eq!(menu.selected_option(), MainMenuOption::Play);
        menu.navigate_up();
        assert_eq!(menu.selected_option(), MainMenuOption::Quit);
    }
}
