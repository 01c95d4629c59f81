use axe_arcade::app::{self, Scene};
use axe_arcade::assets::{load_ui_font, PlayerSprite, PLAYER_TEXTURE};
use axe_arcade::audio::Sfx;
use axe_arcade::config::{self, Tuning, DEFAULT_TUNING_PATH};
use axe_arcade::games::RunnerSession;
use axe_arcade::input::FrameInput;
use axe_arcade::model::GameEvent;
use axe_arcade::render::draw_runner;
use axe_arcade::ui::Ui;
use macroquad::prelude::Conf;

struct Runner {
    ui: Ui,
    sprite: PlayerSprite,
    session: RunnerSession,
}

impl Scene for Runner {
    fn step(&mut self, input: &FrameInput, dt: f32, events: &mut Vec<GameEvent>) {
        self.session.step(input, dt, events);
    }

    fn draw(&self) {
        draw_runner(&self.ui, &self.sprite, &self.session);
    }
}

fn window_conf() -> Conf {
    config::window_conf("Runner")
}

#[macroquad::main(window_conf)]
// 程序入口：加载资源后启动跑酷主循环
async fn main() {
    app::init_logging();
    let tuning = Tuning::load_or_default(DEFAULT_TUNING_PATH);

    let (sprite, sfx) = match (PlayerSprite::load(PLAYER_TEXTURE).await, Sfx::load().await) {
        (Ok(sprite), Ok(sfx)) => (sprite, sfx),
        (Err(err), _) | (_, Err(err)) => {
            log::error!("{err}; run `cargo run --bin asset_gen` to create placeholder assets");
            return;
        }
    };

    let session = RunnerSession::new(sprite.size(), &tuning.player, &tuning.runner);
    let mut scene = Runner {
        ui: Ui {
            font: load_ui_font().await,
        },
        sprite,
        session,
    };
    app::run(&mut scene, &sfx).await;
}
