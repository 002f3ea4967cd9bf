//! Settings Field Component
//!
//! A labeled control bound to one config attribute. Two kinds exist:
//!
//! - **Toggle**: an on/off switch over a boolean option
//! - **Slider**: a track with a marker over a `Volume` (1-10)
//!
//! Right/increase and Left/decrease are the only ways a field changes its
//! value; both are total and saturate at the bounds.

use crate::config::{Config, SliderKey, ToggleKey, Volume};
use crate::draw::fill_circle;
use crate::text::{draw_text, text_height};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Which kind of control a field is, and the attribute it binds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Toggle(ToggleKey),
    Slider(SliderKey),
}

/// Declarative description of a field, used to build the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn toggle(label: &'static str, key: ToggleKey) -> Self {
        FieldSpec {
            label,
            kind: FieldKind::Toggle(key),
        }
    }

    pub const fn slider(label: &'static str, key: SliderKey) -> Self {
        FieldSpec {
            label,
            kind: FieldKind::Slider(key),
        }
    }
}

/// Configuration for field appearance
#[derive(Debug, Clone)]
pub struct FieldStyle {
    /// Label and slider text scale
    pub label_scale: u32,

    /// Scale of the numeric slider value
    pub value_scale: u32,

    pub label_color: Color,

    /// Toggle switch outline
    pub switch_frame_color: Color,

    /// Toggle knob when on
    pub on_color: Color,

    /// Toggle knob when off
    pub off_color: Color,

    /// Slider track, marker and value text
    pub slider_color: Color,

    /// Slider marker radius in pixels
    pub marker_radius: i32,
}

impl Default for FieldStyle {
    fn default() -> Self {
        FieldStyle {
            label_scale: 2,
            value_scale: 3,
            label_color: Color::RGB(255, 255, 255),
            switch_frame_color: Color::RGB(0, 255, 255), // Aqua
            on_color: Color::RGB(0, 128, 0),
            off_color: Color::RGB(255, 0, 0),
            slider_color: Color::RGB(255, 255, 255),
            marker_radius: 8,
        }
    }
}

// Switch geometry, relative to the end of the label column
const SWITCH_GAP: i32 = 10;
const SWITCH_WIDTH: u32 = 49;
const SWITCH_HEIGHT: u32 = 20;
const KNOB_WIDTH: u32 = 23;
const KNOB_HEIGHT: u32 = 18;

// Slider geometry
const TRACK_DROP: i32 = 24;
const VALUE_GAP: i32 = 25;
/// Marker steps between the ends of the track (MAX - MIN)
const SLIDER_STEPS: i32 = (Volume::MAX - Volume::MIN) as i32;

#[derive(Debug, Clone, PartialEq)]
pub struct SettingField {
    /// Top-left of the label, recomputed by the settings screen on resize
    pub x: i32,
    pub y: i32,
    label: String,
    kind: FieldKind,
}

impl SettingField {
    pub fn new(x: i32, y: i32, label: impl Into<String>, kind: FieldKind) -> Self {
        SettingField {
            x,
            y,
            label: label.into(),
            kind,
        }
    }

    pub fn from_spec(spec: &FieldSpec, x: i32, y: i32) -> Self {
        Self::new(x, y, spec.label, spec.kind)
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self.kind, FieldKind::Toggle(_))
    }

    /// Toggle: switch on. Slider: one step up, no-op at the maximum.
    pub fn increase(&self, config: &mut Config) {
        match self.kind {
            FieldKind::Toggle(key) => config.set_flag(key, true),
            FieldKind::Slider(key) => config.set_level(key, config.level(key).stepped_up()),
        }
    }

    /// Toggle: switch off. Slider: one step down, no-op at the minimum.
    pub fn decrease(&self, config: &mut Config) {
        match self.kind {
            FieldKind::Toggle(key) => config.set_flag(key, false),
            FieldKind::Slider(key) => config.set_level(key, config.level(key).stepped_down()),
        }
    }

    /// Outline of the toggle switch, right of the label column
    pub fn switch_frame(&self, label_width: u32) -> Rect {
        Rect::new(
            self.x + label_width as i32 + SWITCH_GAP,
            self.y - 3,
            SWITCH_WIDTH,
            SWITCH_HEIGHT,
        )
    }

    /// Knob inside the switch: right half when on, left half when off
    pub fn switch_knob(&self, on: bool, label_width: u32) -> Rect {
        let frame = self.switch_frame(label_width);
        let knob_x = if on {
            frame.x() + (SWITCH_WIDTH - KNOB_WIDTH - 1) as i32
        } else {
            frame.x() + 1
        };
        Rect::new(knob_x, frame.y() + 1, KNOB_WIDTH, KNOB_HEIGHT)
    }

    pub fn track_y(&self) -> i32 {
        self.y + TRACK_DROP
    }

    /// Centre of the slider marker, proportional to `value` along the track
    pub fn slider_marker(&self, value: Volume, label_width: u32) -> Point {
        let step = label_width as i32 / SLIDER_STEPS;
        let offset = value.get() as i32 - Volume::MIN as i32;
        Point::new(self.x + step * offset, self.track_y())
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        config: &Config,
        label_width: u32,
        style: &FieldStyle,
    ) -> Result<(), String> {
        draw_text(canvas, &self.label, self.x, self.y, style.label_color, style.label_scale)?;

        match self.kind {
            FieldKind::Toggle(key) => {
                let on = config.flag(key);

                canvas.set_draw_color(style.switch_frame_color);
                canvas.draw_rect(self.switch_frame(label_width))?;

                canvas.set_draw_color(if on { style.on_color } else { style.off_color });
                canvas.fill_rect(self.switch_knob(on, label_width))?;
            }
            FieldKind::Slider(key) => {
                let value = config.level(key);
                let track_y = self.track_y();

                canvas.set_draw_color(style.slider_color);
                canvas.draw_line(
                    Point::new(self.x, track_y),
                    Point::new(self.x + label_width as i32, track_y),
                )?;

                fill_circle(
                    canvas,
                    self.slider_marker(value, label_width),
                    style.marker_radius,
                    style.slider_color,
                )?;

                // Value text sits vertically centred on the track
                let value_y = track_y - text_height(style.value_scale) as i32 / 2;
                draw_text(
                    canvas,
                    &value.to_string(),
                    self.x + label_width as i32 + VALUE_GAP,
                    value_y,
                    style.slider_color,
                    style.value_scale,
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume_slider() -> SettingField {
        SettingField::from_spec(&FieldSpec::slider("Adjust volume", SliderKey::MusicVolume), 100, 50)
    }

    #[test]
    fn test_toggle_follows_last_call() {
        let field = SettingField::from_spec(&FieldSpec::toggle("Fullscreen", ToggleKey::Fullscreen), 0, 0);
        let mut config = Config::default();

        field.increase(&mut config);
        assert!(config.is_fullscreen);
        field.increase(&mut config);
        assert!(config.is_fullscreen);
        field.decrease(&mut config);
        assert!(!config.is_fullscreen);
        field.decrease(&mut config);
        assert!(!config.is_fullscreen);
        field.increase(&mut config);
        assert!(config.is_fullscreen);
    }

    #[test]
    fn test_slider_decrease_clamps_at_one() {
        let field = volume_slider();
        let mut config = Config {
            music_volume: Volume::new(5),
            ..Default::default()
        };

        for _ in 0..3 {
            field.decrease(&mut config);
        }
        assert_eq!(config.music_volume.get(), 2);

        field.decrease(&mut config);
        assert_eq!(config.music_volume.get(), 1);

        field.decrease(&mut config);
        assert_eq!(config.music_volume.get(), 1);
    }

    #[test]
    fn test_slider_stays_in_bounds_for_mixed_sequence() {
        let field = volume_slider();
        let mut config = Config::default();

        // Deterministic pseudo-random walk of increases and decreases
        let mut seed: u32 = 0x2545_F491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 3 == 0 {
                field.decrease(&mut config);
            } else {
                field.increase(&mut config);
            }
            let value = config.music_volume.get();
            assert!((Volume::MIN..=Volume::MAX).contains(&value));
        }
    }

    #[test]
    fn test_slider_increase_clamps_at_ten() {
        let field = volume_slider();
        let mut config = Config {
            music_volume: Volume::new(9),
            ..Default::default()
        };

        field.increase(&mut config);
        field.increase(&mut config);
        assert_eq!(config.music_volume.get(), 10);
    }

    #[test]
    fn test_fields_sharing_a_binding_write_the_same_value() {
        let a = SettingField::from_spec(&FieldSpec::toggle("Music", ToggleKey::MusicOn), 0, 0);
        let b = SettingField::from_spec(&FieldSpec::toggle("Music again", ToggleKey::MusicOn), 0, 60);
        let mut config = Config::default();

        a.decrease(&mut config);
        assert!(!config.is_music_on);
        b.increase(&mut config);
        assert!(config.is_music_on);
    }

    #[test]
    fn test_slider_marker_spans_track() {
        let field = volume_slider();

        let start = field.slider_marker(Volume::new(1), 360);
        let end = field.slider_marker(Volume::new(10), 360);

        assert_eq!(start, Point::new(100, 74));
        assert_eq!(end, Point::new(460, 74));
    }

    #[test]
    fn test_switch_knob_inside_frame() {
        let field = SettingField::new(0, 20, "Music", FieldKind::Toggle(ToggleKey::MusicOn));
        let frame = field.switch_frame(200);

        for on in [true, false] {
            let knob = field.switch_knob(on, 200);
            assert!(frame.contains_rect(knob), "knob {:?} outside {:?}", knob, frame);
        }
        assert!(field.switch_knob(true, 200).x() > field.switch_knob(false, 200).x());
    }
}
