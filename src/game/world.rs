// GameWorld: the playfield state and its per-frame update/render
//
// The player walks around the room picking up keys. Once every key of the
// level is collected the door on the left wall opens; walking into it spends
// the keys and starts the next level.

use super::level::Level;
use crate::draw::fill_circle;
use crate::inventory::PlayerInventory;
use crate::ui::{IngameHud, Viewport};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const PLAYER_SIZE: u32 = 24;
/// Pixels per second
pub const PLAYER_SPEED: f32 = 180.0;

const FLOOR_COLOR: Color = Color::RGB(24, 26, 32);
const WALL_COLOR: Color = Color::RGB(90, 90, 110);
const PLAYER_COLOR: Color = Color::RGB(70, 140, 230);
const KEY_COLOR: Color = Color::RGB(240, 200, 60);
const DOOR_CLOSED_COLOR: Color = Color::RGB(110, 70, 40);
const DOOR_OPEN_COLOR: Color = Color::RGB(60, 200, 90);

pub struct GameWorld {
    pub inventory: PlayerInventory,
    level: Level,
    room: Rect,
    /// Player top-left, kept as floats so slow frames still move it
    player_x: f32,
    player_y: f32,
}

impl GameWorld {
    pub fn new(width: u32, height: u32) -> Self {
        let room = Rect::new(0, 0, width, height);
        let (player_x, player_y) = spawn_point(room);

        GameWorld {
            inventory: PlayerInventory::new(),
            level: Level::generate(1),
            room,
            player_x,
            player_y,
        }
    }

    pub fn level_number(&self) -> u32 {
        self.level.number()
    }

    pub fn player_rect(&self) -> Rect {
        Rect::new(self.player_x as i32, self.player_y as i32, PLAYER_SIZE, PLAYER_SIZE)
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.room = Rect::new(0, 0, width, height);
        self.clamp_player();
    }

    /// Advances the world by `dt` seconds with the player pushing in
    /// direction `(dx, dy)` (each -1, 0 or 1)
    pub fn update(&mut self, dt: f32, (dx, dy): (i32, i32)) {
        self.player_x += dx as f32 * PLAYER_SPEED * dt;
        self.player_y += dy as f32 * PLAYER_SPEED * dt;
        self.clamp_player();

        let player = self.player_rect();
        let picked = self.level.collect_keys(player, self.room);
        if picked > 0 {
            self.inventory.add_keys(picked);
            log::debug!(
                "Picked up {} key(s), {} left on level {}",
                picked,
                self.level.keys_remaining(),
                self.level.number()
            );
            if self.level.door_open() {
                log::info!("Level {}: door is open", self.level.number());
            }
        }

        if self.level.door_open() && player.has_intersection(self.level.door_rect(self.room)) {
            self.enter_door();
        }
    }

    fn enter_door(&mut self) {
        if let Err(e) = self.inventory.use_keys(self.level.key_total()) {
            log::warn!("Door stays shut: {}", e);
            return;
        }

        let next = self.level.number() + 1;
        log::info!("Entering level {}", next);
        self.level = Level::generate(next);
        let (x, y) = spawn_point(self.room);
        self.player_x = x;
        self.player_y = y;
    }

    fn clamp_player(&mut self) {
        let max_x = (self.room.width().saturating_sub(PLAYER_SIZE)) as f32;
        let max_y = (self.room.height().saturating_sub(PLAYER_SIZE)) as f32;
        self.player_x = self.player_x.clamp(0.0, max_x);
        self.player_y = self.player_y.clamp(0.0, max_y);
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, hud: &IngameHud) -> Result<(), String> {
        canvas.set_draw_color(FLOOR_COLOR);
        canvas.fill_rect(self.room)?;
        canvas.set_draw_color(WALL_COLOR);
        canvas.draw_rect(self.room)?;

        canvas.set_draw_color(if self.level.door_open() {
            DOOR_OPEN_COLOR
        } else {
            DOOR_CLOSED_COLOR
        });
        canvas.fill_rect(self.level.door_rect(self.room))?;

        for key in self.level.key_rects(self.room) {
            fill_circle(canvas, key.center(), key.width() as i32 / 2, KEY_COLOR)?;
        }

        canvas.set_draw_color(PLAYER_COLOR);
        canvas.fill_rect(self.player_rect())?;

        let viewport = Viewport::from_size(self.room.width(), self.room.height());
        hud.render(canvas, &self.inventory, self.level_number(), viewport)
    }
}

/// Bottom centre of the room
fn spawn_point(room: Rect) -> (f32, f32) {
    let center = Point::new(room.center().x(), room.bottom() - 2 * PLAYER_SIZE as i32);
    (
        (center.x() - PLAYER_SIZE as i32 / 2) as f32,
        center.y() as f32,
    )
}
