use crate::config::SCREEN_W;

// 角色碰撞所用的场地边界
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub ground_y: f32,
    pub width: f32,
}

impl Arena {
    pub fn new(ground_y: f32) -> Self {
        Self {
            ground_y,
            width: SCREEN_W,
        }
    }
}

// 横向卷动的背景偏移，按屏幕宽度循环
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Backdrop {
    pub offset: f32,
}

impl Backdrop {
    pub fn scroll(&mut self, speed: f32, dt: f32, period: f32) {
        self.offset = (self.offset + speed * dt).rem_euclid(period);
    }
}
