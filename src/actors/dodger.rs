use macroquad::prelude::*;

// 斧头躲避游戏中的圆形玩家，只能左右移动
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dodger {
    pub center: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Dodger {
    pub fn new(center: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            center,
            radius,
            speed,
        }
    }

    pub fn update(&mut self, move_dir: f32, dt: f32, screen_w: f32) {
        self.center.x += move_dir * self.speed * dt;
        self.center.x = self.center.x.clamp(self.radius, screen_w - self.radius);
    }

    // 碰撞用外接矩形
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}
