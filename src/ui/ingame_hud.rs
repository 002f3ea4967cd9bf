//! In-game HUD showing the key count and current level
//!
//! Anchored to the top-right corner of the viewport. Blocks are placed right
//! to left: the key icon and count first, then the level block. Each block
//! reports the top-left corner of its bounding box and the next block is
//! placed left of it, separated by a fixed gap. Text extents come from
//! [`text_width`], so long numbers push later blocks further left instead of
//! overlapping them, and the background panel widens to cover them.
//!
//! # Example
//!
//! ```ignore
//! let hud = IngameHud::new();
//!
//! // Each frame, after the world is drawn
//! hud.render(&mut canvas, &inventory, level_number, Viewport::from_size(w, h))?;
//! ```

use crate::draw::{fill_circle, fill_polygon};
use crate::inventory::PlayerInventory;
use crate::text::{draw_text, text_height, text_width};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

const LEVEL_LABEL: &str = "LEVEL";
/// Space between the level label and the number under it
const LEVEL_LINE_GAP: i32 = 4;

/// The visible part of the screen, in pixels with y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Viewport {
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Viewport {
            left,
            right,
            top,
            bottom,
        }
    }

    /// The whole window, origin at the top-left
    pub fn from_size(width: u32, height: u32) -> Self {
        Viewport::new(0, width as i32, 0, height as i32)
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            (self.right - self.left).max(0) as u32,
            (self.bottom - self.top).max(0) as u32,
        )
    }
}

/// Configuration for HUD appearance
#[derive(Debug, Clone)]
pub struct HudStyle {
    pub panel_color: Color,

    /// Panel never gets narrower than this
    pub min_panel_width: u32,

    /// Height of the panel's left edge; the right edge is a third longer
    pub panel_height: u32,

    pub padding_top: i32,
    pub padding_right: i32,

    /// Horizontal space between neighbouring blocks
    pub block_gap: i32,

    /// Key icon is a square of this size
    pub icon_size: u32,

    pub key_color: Color,
    pub text_color: Color,

    pub count_scale: u32,
    pub label_scale: u32,
    pub level_scale: u32,
}

impl Default for HudStyle {
    fn default() -> Self {
        HudStyle {
            panel_color: Color::RGB(0x22, 0x3D, 0x28),
            min_panel_width: 200,
            panel_height: 75,
            padding_top: 10,
            padding_right: 10,
            block_gap: 12,
            icon_size: 32,
            key_color: Color::RGB(240, 200, 60), // Gold
            text_color: Color::RGB(255, 255, 255),
            count_scale: 4,
            label_scale: 2,
            level_scale: 3,
        }
    }
}

/// Key icon plus the count to its left
#[derive(Debug, Clone, PartialEq)]
pub struct KeysBlock {
    pub icon: Rect,
    pub count: Rect,
    pub count_text: String,
}

impl KeysBlock {
    pub fn bounds(&self) -> Rect {
        self.icon.union(self.count)
    }
}

/// "LEVEL" with the level number underneath
#[derive(Debug, Clone, PartialEq)]
pub struct LevelBlock {
    pub label: Rect,
    pub value: Rect,
    pub value_text: String,
}

impl LevelBlock {
    pub fn bounds(&self) -> Rect {
        self.label.union(self.value)
    }
}

/// Every rectangle the HUD draws for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudLayout {
    /// Right-leaning quadrilateral, clockwise from the top-right corner
    pub panel: [Point; 4],
    pub keys: KeysBlock,
    pub level: LevelBlock,
}

impl HudLayout {
    pub fn compute(style: &HudStyle, key_count: u32, level: u32, viewport: Viewport) -> Self {
        let (right, top) = (viewport.right, viewport.top);

        let content_right = right - style.padding_right;
        let (keys, anchor) = place_keys(style, key_count, Point::new(content_right, top));
        let (level, anchor) = place_level(style, level, anchor);

        // Panel covers everything placed so far plus the right-hand padding
        let content_width = (right - anchor.x() + style.padding_right).max(0) as u32;
        let width = style.min_panel_width.max(content_width) as i32;
        let content_bottom = keys.bounds().bottom().max(level.bounds().bottom());
        let height = (style.panel_height as i32).max(content_bottom - top + style.padding_top);

        let panel = [
            Point::new(right, top),
            Point::new(right - width, top),
            Point::new(right - width, top + height),
            Point::new(right, top + height + height / 3),
        ];

        HudLayout { panel, keys, level }
    }

    /// Largest axis-aligned rectangle inside the panel
    #[allow(dead_code)] // Used to check containment in tests
    pub fn panel_inner(&self) -> Rect {
        let [top_right, top_left, bottom_left, _] = self.panel;
        Rect::new(
            top_left.x(),
            top_left.y(),
            (top_right.x() - top_left.x()) as u32,
            (bottom_left.y() - top_left.y()) as u32,
        )
    }
}

/// Places the key icon against `anchor` (top-right) and the count left of it
///
/// Returns the block and the top-left corner of its bounding box.
fn place_keys(style: &HudStyle, key_count: u32, anchor: Point) -> (KeysBlock, Point) {
    let icon_top = anchor.y() + style.padding_top;
    let icon = Rect::new(
        anchor.x() - style.icon_size as i32,
        icon_top,
        style.icon_size,
        style.icon_size,
    );

    let count_text = key_count.to_string();
    let count_width = text_width(&count_text, style.count_scale);
    let count_height = text_height(style.count_scale);
    let count = Rect::new(
        icon.x() - style.block_gap - count_width as i32,
        icon_top + (style.icon_size as i32 - count_height as i32) / 2,
        count_width,
        count_height,
    );

    let top_left = Point::new(count.x(), anchor.y());
    (
        KeysBlock {
            icon,
            count,
            count_text,
        },
        top_left,
    )
}

/// Places the level block left of `anchor` (the previous block's top-left)
fn place_level(style: &HudStyle, level: u32, anchor: Point) -> (LevelBlock, Point) {
    let value_text = level.to_string();

    let label_width = text_width(LEVEL_LABEL, style.label_scale);
    let value_width = text_width(&value_text, style.level_scale);
    let block_width = label_width.max(value_width) as i32;
    let left = anchor.x() - style.block_gap - block_width;

    let label = Rect::new(
        left,
        anchor.y() + style.padding_top,
        label_width,
        text_height(style.label_scale),
    );
    let value = Rect::new(
        left,
        label.bottom() + LEVEL_LINE_GAP,
        value_width,
        text_height(style.level_scale),
    );

    (
        LevelBlock {
            label,
            value,
            value_text,
        },
        Point::new(left, anchor.y()),
    )
}

pub struct IngameHud {
    style: HudStyle,
}

impl IngameHud {
    pub fn new() -> Self {
        IngameHud {
            style: HudStyle::default(),
        }
    }

    #[allow(dead_code)] // Custom styles are only built in tests today
    pub fn with_style(style: HudStyle) -> Self {
        IngameHud { style }
    }

    pub fn layout(&self, key_count: u32, level: u32, viewport: Viewport) -> HudLayout {
        HudLayout::compute(&self.style, key_count, level, viewport)
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        inventory: &PlayerInventory,
        level: u32,
        viewport: Viewport,
    ) -> Result<(), String> {
        let layout = self.layout(inventory.keys(), level, viewport);

        // A panel wider than a tiny window must not spill past the viewport
        canvas.set_clip_rect(viewport.as_rect());
        let drawn = self.draw_layout(canvas, &layout);
        canvas.set_clip_rect(None);
        drawn
    }

    fn draw_layout(&self, canvas: &mut Canvas<Window>, layout: &HudLayout) -> Result<(), String> {
        fill_polygon(canvas, &layout.panel, self.style.panel_color)?;
        self.draw_key_icon(canvas, layout.keys.icon)?;
        draw_text(
            canvas,
            &layout.keys.count_text,
            layout.keys.count.x(),
            layout.keys.count.y(),
            self.style.text_color,
            self.style.count_scale,
        )?;
        draw_text(
            canvas,
            LEVEL_LABEL,
            layout.level.label.x(),
            layout.level.label.y(),
            self.style.text_color,
            self.style.label_scale,
        )?;
        draw_text(
            canvas,
            &layout.level.value_text,
            layout.level.value.x(),
            layout.level.value.y(),
            self.style.text_color,
            self.style.level_scale,
        )?;

        Ok(())
    }

    /// Ring on the left, shaft to the right, two teeth hanging off the end
    fn draw_key_icon(&self, canvas: &mut Canvas<Window>, icon: Rect) -> Result<(), String> {
        let unit = icon.height() as i32 / 8;
        let ring_center = Point::new(icon.x() + 2 * unit, icon.y() + icon.height() as i32 / 2);

        fill_circle(canvas, ring_center, 2 * unit, self.style.key_color)?;
        fill_circle(canvas, ring_center, unit - 1, self.style.panel_color)?;

        canvas.set_draw_color(self.style.key_color);
        let shaft_x = ring_center.x() + 2 * unit;
        let shaft_y = ring_center.y() - unit / 2;
        canvas.fill_rect(Rect::new(
            shaft_x,
            shaft_y,
            (icon.right() - shaft_x).max(1) as u32,
            unit.max(1) as u32,
        ))?;
        canvas.fill_rect(Rect::new(
            icon.right() - 3 * unit,
            shaft_y + unit,
            unit.max(1) as u32,
            (2 * unit).max(1) as u32,
        ))?;
        canvas.fill_rect(Rect::new(
            icon.right() - unit,
            shaft_y + unit,
            unit.max(1) as u32,
            (3 * unit / 2).max(1) as u32,
        ))?;

        Ok(())
    }
}

impl Default for IngameHud {
    fn default() -> Self {
        Self::new()
    }
}
