use crate::actors::player::Player;
use crate::config::PlayerTuning;

// 运动状态：奔跑要求着地，三者恰有其一
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Motion {
    Running,
    Airborne,
    Idle,
}

impl Motion {
    pub fn classify(player: &Player, tuning: &PlayerTuning) -> Self {
        if !player.on_ground {
            Motion::Airborne
        } else if player.vel.x.abs() > tuning.active_threshold {
            Motion::Running
        } else {
            Motion::Idle
        }
    }
}

// 仅用于绘制的偏移，不影响物理位置
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visual {
    pub motion: Motion,
    pub bob: f32,
    // 绕精灵中心旋转，单位为度
    pub tilt_degrees: f32,
}

// 根据运动状态推导上下起伏与倾斜，只读不写
pub fn derive_visual(player: &Player, tuning: &PlayerTuning) -> Visual {
    let motion = Motion::classify(player, tuning);
    let clock = player.anim_clock;

    let bob = match motion {
        Motion::Running => tuning.run_bob.sample(clock),
        Motion::Airborne => tuning.air_bob.sample(clock),
        Motion::Idle => tuning.idle_bob.sample(clock),
    };

    let tilt_degrees = match motion {
        // 上升抬头，下落低头
        Motion::Airborne => (-player.vel.y * tuning.air_tilt_per_speed).clamp(-tuning.max_tilt, tuning.max_tilt),
        Motion::Running => tuning.run_sway.sample(clock),
        Motion::Idle => 0.0,
    };

    Visual {
        motion,
        bob,
        tilt_degrees,
    }
}
