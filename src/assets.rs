use std::path::Path;

use macroquad::prelude::*;

use crate::error::AssetError;

pub const PLAYER_TEXTURE: &str = "assets/player.png";

// 角色贴图，析构时释放纹理
pub struct PlayerSprite {
    texture: Texture2D,
}

impl PlayerSprite {
    pub async fn load(path: &str) -> Result<Self, AssetError> {
        let texture = load_texture(path).await.map_err(|source| AssetError::Texture {
            path: path.to_string(),
            source,
        })?;
        texture.set_filter(FilterMode::Linear);
        log::info!("loaded {path} ({}x{})", texture.width(), texture.height());
        Ok(Self { texture })
    }

    pub fn texture(&self) -> &Texture2D {
        &self.texture
    }

    // 未缩放的原始尺寸
    pub fn size(&self) -> Vec2 {
        self.texture.size()
    }
}

// 加载UI字体，优先使用项目资源中的字体，其次尝试系统字体
pub async fn load_ui_font() -> Option<Font> {
    let candidates = [
        "assets/ui.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
        "/Library/Fonts/Arial Bold.ttf",
        "C:/Windows/Fonts/arialbd.ttf",
    ];

    for path in candidates {
        // 跳过不存在的候选路径
        if !Path::new(path).exists() {
            continue;
        }
        // 成功加载即可返回
        if let Ok(font) = load_ttf_font(path).await {
            log::info!("using ui font {path}");
            return Some(font);
        }
    }

    log::info!("no ui font found, using built-in font");
    None
}
