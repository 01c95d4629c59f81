use axe_arcade::app::{self, Scene};
use axe_arcade::assets::{load_ui_font, PlayerSprite, PLAYER_TEXTURE};
use axe_arcade::audio::Sfx;
use axe_arcade::config::{self, Tuning, DEFAULT_TUNING_PATH};
use axe_arcade::games::DodgeSession;
use axe_arcade::input::FrameInput;
use axe_arcade::model::GameEvent;
use axe_arcade::render::draw_dodge;
use axe_arcade::ui::Ui;
use macroquad::prelude::Conf;

struct LaserDodge {
    ui: Ui,
    sprite: PlayerSprite,
    session: DodgeSession,
}

impl Scene for LaserDodge {
    fn step(&mut self, input: &FrameInput, dt: f32, events: &mut Vec<GameEvent>) {
        self.session.step(input, dt, events);
    }

    fn draw(&self) {
        draw_dodge(&self.ui, &self.sprite, &self.session);
    }
}

fn window_conf() -> Conf {
    config::window_conf("Laser Dodge")
}

#[macroquad::main(window_conf)]
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

    let session = DodgeSession::new(sprite.size(), &tuning.player, &tuning.dodge);
    let mut scene = LaserDodge {
        ui: Ui {
            font: load_ui_font().await,
        },
        sprite,
        session,
    };
    app::run(&mut scene, &sfx).await;
}
