use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tuning json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value: {0}")]
    Invalid(String),
}

// 资源加载失败：启动阶段直接终止，不做重试
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load texture {path}: {source}")]
    Texture {
        path: String,
        #[source]
        source: macroquad::Error,
    },

    #[error("failed to load sound {path}: {source}")]
    Sound {
        path: String,
        #[source]
        source: macroquad::Error,
    },
}
