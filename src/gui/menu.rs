//! Base Menu Component
//!
//! A vertical list of text items in a bordered box, centred in the window,
//! with a wrapping keyboard cursor.

use crate::text::{draw_text, text_height, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Menu box width in pixels
    pub width: u32,

    /// Vertical distance between items
    pub item_spacing: u32,

    pub background_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    pub item_color: Color,
    pub selected_item_color: Color,

    /// Bar drawn behind the selected item
    pub highlight_color: Color,

    pub title_scale: u32,
    pub item_scale: u32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            width: 360,
            item_spacing: 48,
            background_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            title_color: Color::RGB(220, 220, 240),
            item_color: Color::RGB(160, 160, 170),
            selected_item_color: Color::RGB(255, 255, 255),
            highlight_color: Color::RGB(80, 100, 140),
            title_scale: 4,
            item_scale: 3,
        }
    }
}

/// A stateful menu: items plus the selection cursor
pub struct Menu {
    title: String,
    items: Vec<String>,
    selected_index: usize,
    style: MenuStyle,
}

impl Menu {
    pub fn new(title: impl Into<String>, items: Vec<String>) -> Self {
        Menu {
            title: title.into(),
            items,
            selected_index: 0,
            style: MenuStyle::default(),
        }
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + self.items.len() - 1) % self.items.len();
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Box height needed for the title and all items
    fn box_height(&self) -> u32 {
        let header = text_height(self.style.title_scale) + 60;
        header + self.items.len() as u32 * self.style.item_spacing + 20
    }

    /// Render the menu centred in a window of the given size
    pub fn render(&self, canvas: &mut Canvas<Window>, (screen_width, screen_height): (u32, u32)) -> Result<(), String> {
        let width = self.style.width.min(screen_width);
        let height = self.box_height().min(screen_height);
        let menu_x = (screen_width - width) as i32 / 2;
        let menu_y = (screen_height - height) as i32 / 2;
        let menu_box = Rect::new(menu_x, menu_y, width, height);

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(menu_box)?;

        // Double border
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(menu_box)?;
        canvas.draw_rect(Rect::new(menu_x + 2, menu_y + 2, width.saturating_sub(4), height.saturating_sub(4)))?;

        let title_width = text_width(&self.title, self.style.title_scale) as i32;
        draw_text(
            canvas,
            &self.title,
            menu_x + (width as i32 - title_width) / 2,
            menu_y + 24,
            self.style.title_color,
            self.style.title_scale,
        )?;

        let item_top = menu_y + text_height(self.style.title_scale) as i32 + 60;
        let item_height = text_height(self.style.item_scale) as i32;

        for (i, item) in self.items.iter().enumerate() {
            let item_y = item_top + i as i32 * self.style.item_spacing as i32;
            let is_selected = i == self.selected_index;

            if is_selected {
                canvas.set_draw_color(self.style.highlight_color);
                canvas.fill_rect(Rect::new(
                    menu_x + 15,
                    item_y - 8,
                    width.saturating_sub(30),
                    (item_height + 16) as u32,
                ))?;
            }

            let color = if is_selected {
                self.style.selected_item_color
            } else {
                self.style.item_color
            };
            let item_width = text_width(item, self.style.item_scale) as i32;
            draw_text(
                canvas,
                item,
                menu_x + (width as i32 - item_width) / 2,
                item_y,
                color,
                self.style.item_scale,
            )?;
        }

        Ok(())
    }
}
