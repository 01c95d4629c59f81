use macroquad::prelude::*;

// 在上下边界之间来回弹跳的斧头
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwingingAxe {
    pub pos: Vec2,
    pub size: f32,
    // 带符号竖直速度
    pub vel_y: f32,
}

impl SwingingAxe {
    pub fn new(pos: Vec2, size: f32, speed: f32) -> Self {
        Self {
            pos,
            size,
            vel_y: speed,
        }
    }

    pub fn update(&mut self, dt: f32, floor: f32) {
        self.pos.y += self.vel_y * dt;
        let max_y = floor - self.size;
        if self.pos.y < 0.0 || self.pos.y > max_y {
            self.vel_y = -self.vel_y;
            self.pos.y = self.pos.y.clamp(0.0, max_y);
        }
    }

    // 加速但保留方向
    pub fn speed_up(&mut self, amount: f32) {
        self.vel_y += amount.copysign(self.vel_y);
    }

    pub fn speed(&self) -> f32 {
        self.vel_y.abs()
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

// 在屏幕四边反弹的斧头
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BouncingAxe {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl BouncingAxe {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    pub fn update(&mut self, dt: f32, bounds: Vec2) {
        self.pos += self.vel * dt;
        let max = bounds - Vec2::splat(self.size);
        if self.pos.x < 0.0 || self.pos.x > max.x {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(0.0, max.x);
        }
        if self.pos.y < 0.0 || self.pos.y > max.y {
            self.vel.y = -self.vel.y;
            self.pos.y = self.pos.y.clamp(0.0, max.y);
        }
    }

    pub fn speed_up(&mut self, amount: f32) {
        let speed = self.vel.length();
        if speed > 0.0 {
            self.vel *= (speed + amount) / speed;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LaserPhase {
    // 预警阶段，无伤害
    Charging,
    Firing,
}

// 贴地激光：发射期间左右扫动
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepingLaser {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub ground_y: f32,
    pub sweep: f32,
    pub phase: LaserPhase,
    pub timer: f32,
    charge_time: f32,
    fire_time: f32,
}

impl SweepingLaser {
    pub fn new(ground_y: f32, width: f32, height: f32, sweep: f32, charge_time: f32, fire_time: f32) -> Self {
        Self {
            x: 0.0,
            width,
            height,
            ground_y,
            sweep,
            phase: LaserPhase::Charging,
            timer: charge_time,
            charge_time,
            fire_time,
        }
    }

    pub fn update(&mut self, dt: f32, screen_w: f32) {
        if self.phase == LaserPhase::Firing {
            self.x += self.sweep * dt;
            let max_x = screen_w - self.width;
            if self.x < 0.0 || self.x > max_x {
                self.sweep = -self.sweep;
                self.x = self.x.clamp(0.0, max_x);
            }
        }

        // 充能 -> 发射 -> 充能 循环
        self.timer -= dt;
        if self.timer <= 0.0 {
            let (phase, duration) = match self.phase {
                LaserPhase::Charging => (LaserPhase::Firing, self.fire_time),
                LaserPhase::Firing => (LaserPhase::Charging, self.charge_time),
            };
            self.phase = phase;
            self.timer += duration;
        }
    }

    pub fn is_lethal(&self) -> bool {
        self.phase == LaserPhase::Firing
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.ground_y - self.height, self.width, self.height)
    }
}

// 跑酷关卡中随卷动左移的障碍物
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, ground_y: f32, size: Vec2) -> Self {
        Self {
            pos: vec2(x, ground_y - size.y),
            size,
            passed: false,
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}
