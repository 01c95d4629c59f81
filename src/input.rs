use macroquad::prelude::*;

// 游戏响应的逻辑动作
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Restart,
}

impl Action {
    // 按键绑定
    pub fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::MoveLeft => &[KeyCode::A, KeyCode::Left],
            Action::MoveRight => &[KeyCode::D, KeyCode::Right],
            Action::Jump => &[KeyCode::Space, KeyCode::W, KeyCode::Up],
            Action::Restart => &[KeyCode::R],
        }
    }

    pub fn is_held(self) -> bool {
        self.keys().iter().any(|&key| is_key_down(key))
    }

    pub fn is_pressed(self) -> bool {
        self.keys().iter().any(|&key| is_key_pressed(key))
    }
}

// 单帧输入：左右为持续状态，跳跃与重开为按下瞬间
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub restart: bool,
}

impl FrameInput {
    // 读取当前帧的键盘状态
    pub fn capture() -> Self {
        Self {
            left: Action::MoveLeft.is_held(),
            right: Action::MoveRight.is_held(),
            jump: Action::Jump.is_pressed(),
            restart: Action::Restart.is_pressed(),
        }
    }

    // 右减左，同时按下互相抵消
    pub fn move_dir(&self) -> f32 {
        let mut dir = 0.0;
        if self.right {
            dir += 1.0;
        }
        if self.left {
            dir -= 1.0;
        }
        dir
    }

    // 合并新一帧输入：持续状态取最新，边沿触发保留到被消费
    pub fn latch(&mut self, newer: FrameInput) {
        self.left = newer.left;
        self.right = newer.right;
        self.jump |= newer.jump;
        self.restart |= newer.restart;
    }

    pub fn consume_edges(&mut self) {
        self.jump = false;
        self.restart = false;
    }
}
