//! Settings Screen
//!
//! Lists the setting fields top to bottom with a selection cursor.
//! Up/Down move the cursor (wrapping at both ends), Left/Right decrease or
//! increase the selected field. Field positions are derived from the window
//! size and recomputed whenever it changes.
//!
//! # Example
//!
//! ```ignore
//! let mut screen = SettingsScreen::new(&SettingsScreen::default_fields(), canvas.output_size()?);
//!
//! // Input
//! screen.on_direction(Direction::Right, &mut config);
//!
//! // Window resized
//! screen.on_resize(new_width, new_height);
//!
//! // Render
//! screen.render(&mut canvas, &config)?;
//! ```

use super::settings_field::{FieldSpec, FieldStyle, SettingField};
use crate::config::{Config, SliderKey, ToggleKey};
use crate::input::Direction;
use crate::text::{draw_text, text_height, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Vertical distance between consecutive fields
pub const ROW_SPACING: i32 = 60;

// Selection frame geometry, relative to the selected field
const FRAME_MARGIN_LEFT: i32 = 20;
const FRAME_EXTRA_WIDTH: u32 = 100;
const TOGGLE_FRAME_HEIGHT: u32 = 30;
const SLIDER_FRAME_HEIGHT: u32 = 60;

const TITLE: &str = "SETTINGS";
const TITLE_SCALE: u32 = 3;
const HINT: &str = "UP/DOWN: SELECT  LEFT/RIGHT: CHANGE  ESC: BACK";
const HINT_SCALE: u32 = 1;

pub struct SettingsScreen {
    fields: Vec<SettingField>,
    selected_index: usize,
    width: u32,
    height: u32,
    field_style: FieldStyle,
    title_color: Color,
    frame_color: Color,
    hint_color: Color,
}

impl SettingsScreen {
    /// The options offered by the game, in display order
    pub fn default_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::toggle("Turn music off/on", ToggleKey::MusicOn),
            FieldSpec::toggle("Fullscreen", ToggleKey::Fullscreen),
            FieldSpec::slider("Adjust volume", SliderKey::MusicVolume),
        ]
    }

    pub fn new(specs: &[FieldSpec], (width, height): (u32, u32)) -> Self {
        let fields = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let (x, y) = field_position(i, width, height);
                SettingField::from_spec(spec, x, y)
            })
            .collect();

        SettingsScreen {
            fields,
            selected_index: 0,
            width,
            height,
            field_style: FieldStyle::default(),
            title_color: Color::RGB(255, 255, 255),
            frame_color: Color::RGB(255, 255, 255),
            hint_color: Color::RGB(150, 150, 160),
        }
    }

    #[allow(dead_code)] // Inspected by tests; the screen draws its own fields
    pub fn fields(&self) -> &[SettingField] {
        &self.fields
    }

    #[allow(dead_code)] // Inspected by tests; the screen draws its own highlight
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_field(&self) -> Option<&SettingField> {
        self.fields.get(self.selected_index)
    }

    /// Width of the label column; also the slider track length
    pub fn label_width(&self) -> u32 {
        self.width / 2
    }

    /// Re-lays-out every field for the new window size
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if (width, height) != (self.width, self.height) {
            log::debug!("Settings layout {}x{} -> {}x{}", self.width, self.height, width, height);
        }
        self.width = width;
        self.height = height;

        for (i, field) in self.fields.iter_mut().enumerate() {
            let (x, y) = field_position(i, width, height);
            field.x = x;
            field.y = y;
        }
    }

    pub fn on_direction(&mut self, direction: Direction, config: &mut Config) {
        let count = self.fields.len();
        if count == 0 {
            return;
        }

        match direction {
            Direction::Up => self.selected_index = (self.selected_index + count - 1) % count,
            Direction::Down => self.selected_index = (self.selected_index + 1) % count,
            Direction::Left => self.fields[self.selected_index].decrease(config),
            Direction::Right => self.fields[self.selected_index].increase(config),
        }
    }

    /// Outline around the selected field: short for toggles, tall for sliders
    pub fn selection_frame(&self) -> Option<Rect> {
        let field = self.selected_field()?;
        let width = self.label_width() + FRAME_EXTRA_WIDTH;
        let x = field.x - FRAME_MARGIN_LEFT;

        let frame = if field.is_toggle() {
            let center_y = field.y + text_height(self.field_style.label_scale) as i32 / 2;
            Rect::new(x, center_y - TOGGLE_FRAME_HEIGHT as i32 / 2, width, TOGGLE_FRAME_HEIGHT)
        } else {
            // Spans the label and the slider track below it
            let center_y = (field.y + field.track_y()) / 2;
            Rect::new(x, center_y - SLIDER_FRAME_HEIGHT as i32 / 2, width, SLIDER_FRAME_HEIGHT)
        };

        Some(frame)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, config: &Config) -> Result<(), String> {
        let title_x = (self.width as i32 - text_width(TITLE, TITLE_SCALE) as i32) / 2;
        let title_y = (self.height / 10) as i32;
        draw_text(canvas, TITLE, title_x, title_y, self.title_color, TITLE_SCALE)?;

        let label_width = self.label_width();
        for field in &self.fields {
            field.render(canvas, config, label_width, &self.field_style)?;
        }

        if let Some(frame) = self.selection_frame() {
            canvas.set_draw_color(self.frame_color);
            canvas.draw_rect(frame)?;
        }

        let hint_x = (self.width as i32 - text_width(HINT, HINT_SCALE) as i32) / 2;
        let hint_y = self.height as i32 - 2 * text_height(HINT_SCALE) as i32;
        draw_text(canvas, HINT, hint_x, hint_y, self.hint_color, HINT_SCALE)?;

        Ok(())
    }
}

/// Top-left of field `index` for a window of the given size
fn field_position(index: usize, width: u32, height: u32) -> (i32, i32) {
    let x = (width / 4) as i32;
    let y = (height / 4) as i32 + index as i32 * ROW_SPACING;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Volume;

    fn toggles(count: usize) -> Vec<FieldSpec> {
        (0..count)
            .map(|_| FieldSpec::toggle("Music", ToggleKey::MusicOn))
            .collect()
    }

    fn positions(screen: &SettingsScreen) -> Vec<(i32, i32)> {
        screen.fields().iter().map(|f| (f.x, f.y)).collect()
    }

    #[test]
    fn test_initial_layout_stacks_rows() {
        let screen = SettingsScreen::new(&SettingsScreen::default_fields(), (800, 600));

        assert_eq!(positions(&screen), vec![(200, 150), (200, 210), (200, 270)]);
        assert_eq!(screen.selected_index(), 0);
        assert_eq!(screen.label_width(), 400);
    }

    #[test]
    fn test_down_wraps_to_first() {
        let mut screen = SettingsScreen::new(&toggles(3), (640, 480));
        let mut config = Config::default();

        screen.on_direction(Direction::Down, &mut config);
        screen.on_direction(Direction::Down, &mut config);
        assert_eq!(screen.selected_index(), 2);

        screen.on_direction(Direction::Down, &mut config);
        assert_eq!(screen.selected_index(), 0);
    }

    #[test]
    fn test_up_wraps_to_last() {
        let mut screen = SettingsScreen::new(&toggles(4), (640, 480));
        let mut config = Config::default();

        screen.on_direction(Direction::Up, &mut config);
        assert_eq!(screen.selected_index(), 3);
    }

    #[test]
    fn test_down_then_up_returns_to_start() {
        let mut config = Config::default();

        for count in 1..=5 {
            for start in 0..count {
                for presses in 0..12 {
                    let mut screen = SettingsScreen::new(&toggles(count), (640, 480));
                    for _ in 0..start {
                        screen.on_direction(Direction::Down, &mut config);
                    }
                    assert_eq!(screen.selected_index(), start);

                    for _ in 0..presses {
                        screen.on_direction(Direction::Down, &mut config);
                    }
                    for _ in 0..presses {
                        screen.on_direction(Direction::Up, &mut config);
                    }
                    assert_eq!(screen.selected_index(), start);
                }
            }
        }
    }

    #[test]
    fn test_empty_screen_ignores_input() {
        let mut screen = SettingsScreen::new(&[], (640, 480));
        let mut config = Config::default();

        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            screen.on_direction(direction, &mut config);
        }
        assert_eq!(screen.selected_index(), 0);
        assert_eq!(screen.selection_frame(), None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_left_right_edit_selected_field() {
        let mut screen = SettingsScreen::new(&SettingsScreen::default_fields(), (640, 480));
        let mut config = Config::default();

        // Music toggle
        screen.on_direction(Direction::Left, &mut config);
        assert!(!config.is_music_on);

        // Volume slider
        screen.on_direction(Direction::Down, &mut config);
        screen.on_direction(Direction::Down, &mut config);
        screen.on_direction(Direction::Right, &mut config);
        assert_eq!(config.music_volume, Volume::new(6));
        assert!(!config.is_music_on);
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut screen = SettingsScreen::new(&SettingsScreen::default_fields(), (640, 480));

        screen.on_resize(1024, 768);
        let first = positions(&screen);
        screen.on_resize(1024, 768);
        assert_eq!(positions(&screen), first);
        assert_eq!(first[0], (256, 192));
    }

    #[test]
    fn test_resize_matches_fresh_layout() {
        let specs = SettingsScreen::default_fields();
        let mut resized = SettingsScreen::new(&specs, (640, 480));
        resized.on_resize(1280, 720);

        let fresh = SettingsScreen::new(&specs, (1280, 720));
        assert_eq!(positions(&resized), positions(&fresh));
    }

    #[test]
    fn test_selection_frame_depends_on_kind() {
        let mut screen = SettingsScreen::new(&SettingsScreen::default_fields(), (800, 600));
        let mut config = Config::default();

        let toggle_frame = screen.selection_frame().unwrap();
        assert_eq!(toggle_frame.height(), 30);
        assert_eq!(toggle_frame.width(), 500);
        assert_eq!(toggle_frame.x(), 180);

        screen.on_direction(Direction::Up, &mut config);
        let slider = screen.selected_field().unwrap().clone();
        let slider_frame = screen.selection_frame().unwrap();
        assert_eq!(slider_frame.height(), 60);
        assert!(slider_frame.y() < slider.y);
        assert!(slider_frame.bottom() > slider.track_y());
    }
}
