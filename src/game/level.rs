// Level layout
//
// A level is a rectangular room with keys scattered in it and an exit door
// on the left wall. Key positions are stored as fractions of the room so a
// window resize keeps them in place relative to the walls.

use sdl2::rect::Rect;

pub const KEY_SIZE: u32 = 16;
pub const DOOR_WIDTH: u32 = 20;
pub const DOOR_HEIGHT: u32 = 56;
const MAX_KEYS: u32 = 8;

/// Keys stay out of the top band so they never hide under the HUD
const TOP_CLEARANCE: f32 = 0.35;
const SIDE_MARGIN: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    number: u32,
    /// Remaining keys, as (x, y) fractions of the room size
    keys: Vec<(f32, f32)>,
    key_total: u32,
}

impl Level {
    /// Builds level `number` (1-based). The same number always yields the
    /// same layout.
    pub fn generate(number: u32) -> Self {
        let number = number.max(1);
        let key_total = (number + 1).min(MAX_KEYS);

        // xorshift seeded by the level number
        let mut state = number.wrapping_mul(0x9E37_79B9) | 1;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state % 10_000) as f32 / 10_000.0
        };

        let keys = (0..key_total)
            .map(|_| {
                let x = SIDE_MARGIN + next() * (1.0 - 2.0 * SIDE_MARGIN);
                let y = TOP_CLEARANCE + next() * (1.0 - TOP_CLEARANCE - SIDE_MARGIN);
                (x, y)
            })
            .collect();

        Level {
            number,
            keys,
            key_total,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn key_total(&self) -> u32 {
        self.key_total
    }

    pub fn keys_remaining(&self) -> usize {
        self.keys.len()
    }

    pub fn door_open(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn key_rects(&self, room: Rect) -> Vec<Rect> {
        self.keys.iter().map(|&pos| key_rect(pos, room)).collect()
    }

    /// Exit door, centred on the left wall
    pub fn door_rect(&self, room: Rect) -> Rect {
        Rect::new(
            room.x(),
            room.y() + (room.height() as i32 - DOOR_HEIGHT as i32) / 2,
            DOOR_WIDTH,
            DOOR_HEIGHT,
        )
    }

    /// Removes every key touching `player` and returns how many were taken
    pub fn collect_keys(&mut self, player: Rect, room: Rect) -> u32 {
        let before = self.keys.len();
        self.keys.retain(|&pos| !key_rect(pos, room).has_intersection(player));
        (before - self.keys.len()) as u32
    }
}

fn key_rect((fx, fy): (f32, f32), room: Rect) -> Rect {
    let x = room.x() + (fx * room.width() as f32) as i32 - KEY_SIZE as i32 / 2;
    let y = room.y() + (fy * room.height() as f32) as i32 - KEY_SIZE as i32 / 2;
    Rect::new(x, y, KEY_SIZE, KEY_SIZE)
}
