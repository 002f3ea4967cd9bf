use sdl2::EventPump;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::{FullscreenType, Window};
use std::time::{Duration, Instant};

mod config;
mod draw;
mod game;
mod gui;
mod input;
mod inventory;
mod text;
mod ui;

use config::{Config, ConfigStore};
use game::GameWorld;
use gui::{MainMenu, MainMenuOption, SettingsScreen};
use input::{Direction, InputAction};
use ui::IngameHud;

// Initial window size; the window is resizable
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const WINDOW_TITLE: &str = "Key Dungeon";
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Which full-screen view is active
#[derive(Debug, Clone, Copy, PartialEq)]
enum View {
    MainMenu,
    Playing,
    Settings,
}

fn apply_fullscreen(canvas: &mut Canvas<Window>, fullscreen: bool) -> Result<(), String> {
    let mode = if fullscreen {
        FullscreenType::Desktop
    } else {
        FullscreenType::Off
    };
    canvas.window_mut().set_fullscreen(mode)?;
    log::info!("Fullscreen: {}", fullscreen);
    Ok(())
}

/// Brings the window in line with `config.is_fullscreen`
///
/// `applied` is the mode the window is currently in. If switching fails the
/// setting is reverted to `applied`, so a mode SDL rejects is never saved.
/// Returns the mode the window ends up in.
fn sync_fullscreen(
    config: &mut Config,
    applied: bool,
    apply: impl FnOnce(bool) -> Result<(), String>,
) -> bool {
    if config.is_fullscreen == applied {
        return applied;
    }

    match apply(config.is_fullscreen) {
        Ok(()) => config.is_fullscreen,
        Err(e) => {
            log::error!("Failed to set fullscreen to {}: {}", config.is_fullscreen, e);
            config.is_fullscreen = applied;
            applied
        }
    }
}

fn save_config(store: &ConfigStore, config: &Config) {
    if let Err(e) = store.save(config) {
        log::error!("Failed to save settings to {}: {}", store.path().display(), e);
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let store = ConfigStore::new(ConfigStore::default_path());
    let mut config = store.load_or_default();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    // Settings are written even when the loop bails out with an SDL error
    let result = run(&mut canvas, &mut event_pump, &store, &mut config);
    save_config(&store, &config);
    result
}

fn run(
    canvas: &mut Canvas<Window>,
    event_pump: &mut EventPump,
    store: &ConfigStore,
    config: &mut Config,
) -> Result<(), String> {
    // The window is created windowed
    let mut fullscreen_applied = sync_fullscreen(config, false, |on| apply_fullscreen(canvas, on));

    let (width, height) = canvas.output_size()?;
    log::info!("Window: {}x{}", width, height);

    let mut view = View::MainMenu;
    let mut main_menu = MainMenu::new();
    let mut settings = SettingsScreen::new(&SettingsScreen::default_fields(), (width, height));
    let mut world = GameWorld::new(width, height);
    let hud = IngameHud::new();

    log::info!("Controls: arrows/WASD move and navigate, Enter selects, Esc goes back");

    let mut last_frame = Instant::now();

    'running: loop {
        for event in event_pump.poll_iter() {
            let Some(action) = input::translate(&event) else {
                continue;
            };

            match (view, action) {
                (_, InputAction::Quit) => break 'running,
                (_, InputAction::Resized(w, h)) => {
                    // Layout works in output pixels, which differ from
                    // window points on high-DPI displays
                    let (width, height) = canvas.output_size()?;
                    log::debug!("Window resized to {}x{} ({}x{} px)", w, h, width, height);
                    settings.on_resize(width, height);
                    world.on_resize(width, height);
                }

                (View::MainMenu, InputAction::Navigate(Direction::Up)) => main_menu.navigate_up(),
                (View::MainMenu, InputAction::Navigate(Direction::Down)) => main_menu.navigate_down(),
                (View::MainMenu, InputAction::Confirm) => match main_menu.selected_option() {
                    MainMenuOption::Play => view = View::Playing,
                    MainMenuOption::Settings => {
                        let (w, h) = canvas.output_size()?;
                        settings.on_resize(w, h);
                        view = View::Settings;
                    }
                    MainMenuOption::Quit => break 'running,
                },

                (View::Settings, InputAction::Navigate(direction)) => {
                    settings.on_direction(direction, config);
                }
                (View::Settings, InputAction::Back) => {
                    save_config(store, config);
                    view = View::MainMenu;
                }

                (View::Playing, InputAction::Back) => view = View::MainMenu,

                _ => {}
            }
        }

        fullscreen_applied =
            sync_fullscreen(config, fullscreen_applied, |on| apply_fullscreen(canvas, on));

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        if view == View::Playing {
            let keyboard_state = event_pump.keyboard_state();
            world.update(dt, input::held_direction(|s| keyboard_state.is_scancode_pressed(s)));
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        match view {
            View::MainMenu => {
                let screen_size = canvas.output_size()?;
                main_menu.render(canvas, screen_size)?;
            }
            View::Playing => world.render(canvas, &hud)?,
            View::Settings => settings.render(canvas, config)?,
        }

        canvas.present();
        std::thread::sleep(FRAME_TIME);
    }

    Ok(())
}
