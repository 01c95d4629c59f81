use axe_arcade::app::{self, Scene};
use axe_arcade::assets::load_ui_font;
use axe_arcade::audio::Sfx;
use axe_arcade::config::{self, Tuning, DEFAULT_TUNING_PATH};
use axe_arcade::games::AxeSession;
use axe_arcade::input::FrameInput;
use axe_arcade::model::GameEvent;
use axe_arcade::render::draw_axe_game;
use axe_arcade::ui::Ui;
use macroquad::prelude::Conf;

struct AxeDodge {
    ui: Ui,
    session: AxeSession,
}

impl Scene for AxeDodge {
    fn step(&mut self, input: &FrameInput, dt: f32, events: &mut Vec<GameEvent>) {
        self.session.step(input, dt, events);
    }

    fn draw(&self) {
        draw_axe_game(&self.ui, &self.session);
    }
}

fn window_conf() -> Conf {
    config::window_conf("Axe Dodge")
}

#[macroquad::main(window_conf)]
async fn main() {
    app::init_logging();
    let tuning = Tuning::load_or_default(DEFAULT_TUNING_PATH);

    let sfx = match Sfx::load().await {
        Ok(sfx) => sfx,
        Err(err) => {
            log::error!("{err}; run `cargo run --bin asset_gen` to create placeholder assets");
            return;
        }
    };

    let mut scene = AxeDodge {
        ui: Ui {
            font: load_ui_font().await,
        },
        session: AxeSession::new(&tuning.axe_game),
    };
    app::run(&mut scene, &sfx).await;
}
