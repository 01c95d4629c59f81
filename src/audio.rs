use macroquad::audio::{load_sound, play_sound_once, Sound};

use crate::error::AssetError;
use crate::model::GameEvent;

pub const POINT_SOUND: &str = "assets/point.wav";
pub const HIT_SOUND: &str = "assets/game_over.wav";

// 音效：得分提示音与失败音
pub struct Sfx {
    point: Sound,
    hit: Sound,
}

impl Sfx {
    pub async fn load() -> Result<Self, AssetError> {
        Ok(Self {
            point: load_wav(POINT_SOUND).await?,
            hit: load_wav(HIT_SOUND).await?,
        })
    }

    pub fn play(&self, event: GameEvent) {
        match event {
            GameEvent::Scored(_) | GameEvent::Won => play_sound_once(&self.point),
            GameEvent::Hit => play_sound_once(&self.hit),
            GameEvent::Restarted => {}
        }
    }
}

async fn load_wav(path: &str) -> Result<Sound, AssetError> {
    load_sound(path).await.map_err(|source| AssetError::Sound {
        path: path.to_string(),
        source,
    })
}
