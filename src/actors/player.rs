use macroquad::prelude::*;

use crate::config::PlayerTuning;
use crate::world::Arena;

// 玩家实体：位置、速度、尺寸、着地状态与动画时钟
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    // 左上角，屏幕像素
    pub pos: Vec2,
    pub vel: Vec2,
    size: Vec2,
    pub on_ground: bool,
    pub anim_clock: f32,
}

impl Player {
    // 创建玩家：尺寸在此一次性确定，出生时站在地面上
    pub fn new(texture_size: Vec2, arena: &Arena, tuning: &PlayerTuning) -> Self {
        let size = texture_size * tuning.scale;
        Self {
            pos: vec2(tuning.spawn_x, arena.ground_y - size.y),
            vel: Vec2::ZERO,
            size,
            on_ground: true,
            anim_clock: 0.0,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    // 获取玩家碰撞矩形
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}
