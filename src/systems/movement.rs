use crate::actors::player::Player;
use crate::config::PlayerTuning;
use crate::input::FrameInput;
use crate::world::Arena;

// 推进一步：输入、摩擦、跳跃、重力、积分、地面与屏幕约束、动画时钟
pub fn advance(player: &mut Player, input: &FrameInput, dt: f32, arena: &Arena, tuning: &PlayerTuning) {
    // 截断异常帧时间，避免一步穿过地面
    let dt = dt.clamp(0.0, tuning.max_dt);

    // 左右输入：加速或摩擦减速
    let move_dir = input.move_dir();
    if move_dir != 0.0 {
        player.vel.x += move_dir * tuning.accel * dt;
    } else {
        player.vel.x = apply_friction(player.vel.x, tuning.friction * dt);
    }
    player.vel.x = player.vel.x.clamp(-tuning.max_speed, tuning.max_speed);

    // 跳跃只在按下的那一帧且着地时生效
    if input.jump && player.on_ground {
        player.vel.y = tuning.jump_speed;
        player.on_ground = false;
    }

    player.vel.y += tuning.gravity * dt;
    player.pos += player.vel * dt;

    // 地面碰撞
    let size = player.size();
    if player.pos.y + size.y >= arena.ground_y {
        player.pos.y = arena.ground_y - size.y;
        player.vel.y = 0.0;
        player.on_ground = true;
    } else {
        player.on_ground = false;
    }

    // 水平方向限制在屏幕内，竖直方向不限制
    player.pos.x = player.pos.x.clamp(0.0, (arena.width - size.x).max(0.0));

    let active = player.vel.x.abs() > tuning.active_threshold || !player.on_ground;
    let rate = if active {
        tuning.clock_fast_rate
    } else {
        tuning.clock_slow_rate
    };
    player.anim_clock = (player.anim_clock + dt * rate).rem_euclid(tuning.clock_wrap);
}

// 向零减速，不会越过零点反向
fn apply_friction(vx: f32, amount: f32) -> f32 {
    if vx > 0.0 {
        (vx - amount).max(0.0)
    } else if vx < 0.0 {
        (vx + amount).min(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::*;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;
    const GROUND: f32 = 400.0;

    fn setup() -> (Player, Arena, PlayerTuning) {
        let tuning = PlayerTuning::default();
        let arena = Arena {
            ground_y: GROUND,
            width: 800.0,
        };
        let player = Player::new(vec2(480.0, 640.0), &arena, &tuning);
        (player, arena, tuning)
    }

    fn held(left: bool, right: bool) -> FrameInput {
        FrameInput {
            left,
            right,
            ..Default::default()
        }
    }

    #[test]
    fn jump_from_rest() {
        let (mut player, arena, tuning) = setup();
        let y0 = player.pos.y;
        let input = FrameInput {
            jump: true,
            ..Default::default()
        };
        advance(&mut player, &input, DT, &arena, &tuning);

        assert!(!player.on_ground);
        assert!((player.vel.y - (-580.0)).abs() < 1e-3);
        assert!((y0 - player.pos.y - 9.6667).abs() < 1e-2);
    }

    #[test]
    fn friction_from_max_speed() {
        let (mut player, arena, tuning) = setup();
        player.vel.x = 320.0;
        advance(&mut player, &FrameInput::default(), DT, &arena, &tuning);
        assert!((player.vel.x - 276.6667).abs() < 1e-2);

        let mut steps = 1;
        while player.vel.x > 0.0 {
            advance(&mut player, &FrameInput::default(), DT, &arena, &tuning);
            assert!(player.vel.x >= 0.0);
            steps += 1;
        }
        assert_eq!(steps, 8);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn holding_jump_in_air_does_nothing_extra() {
        let (mut player, arena, tuning) = setup();
        let jump = FrameInput {
            jump: true,
            ..Default::default()
        };
        advance(&mut player, &jump, DT, &arena, &tuning);
        let vy_after_jump = player.vel.y;

        let mut reference = player;
        advance(&mut player, &jump, DT, &arena, &tuning);
        advance(&mut reference, &FrameInput::default(), DT, &arena, &tuning);
        assert_eq!(player.vel.y, reference.vel.y);
        assert!((player.vel.y - (vy_after_jump + tuning.gravity * DT)).abs() < 1e-3);
    }

    #[test]
    fn lands_and_rests_on_ground() {
        let (mut player, arena, tuning) = setup();
        let jump = FrameInput {
            jump: true,
            ..Default::default()
        };
        advance(&mut player, &jump, DT, &arena, &tuning);
        for _ in 0..120 {
            advance(&mut player, &FrameInput::default(), DT, &arena, &tuning);
        }
        assert!(player.on_ground);
        assert_eq!(player.vel.y, 0.0);
        assert!((player.bottom() - GROUND).abs() < 1e-3);
    }

    #[test]
    fn oversized_dt_is_clamped() {
        let (mut player, arena, tuning) = setup();
        let input = FrameInput {
            jump: true,
            ..Default::default()
        };
        advance(&mut player, &input, 10.0, &arena, &tuning);
        // 一步最多积分 max_dt
        assert!((player.vel.y - (tuning.jump_speed + tuning.gravity * tuning.max_dt)).abs() < 1e-3);
        assert!(!player.on_ground);

        let before = player;
        advance(&mut player, &FrameInput::default(), -1.0, &arena, &tuning);
        assert_eq!(player.pos, before.pos);
        assert_eq!(player.vel, before.vel);
    }

    #[test]
    fn clock_rate_follows_motion() {
        let (mut player, arena, tuning) = setup();
        advance(&mut player, &FrameInput::default(), DT, &arena, &tuning);
        assert!((player.anim_clock - DT * tuning.clock_slow_rate).abs() < 1e-6);

        let (mut runner, _, _) = setup();
        advance(&mut runner, &held(false, true), DT, &arena, &tuning);
        assert!((runner.anim_clock - DT * tuning.clock_fast_rate).abs() < 1e-6);
    }

    #[test]
    fn clock_wraps_into_bound() {
        let (mut player, arena, tuning) = setup();
        player.anim_clock = tuning.clock_wrap - 0.01;
        advance(&mut player, &held(false, true), DT, &arena, &tuning);
        assert!(player.anim_clock >= 0.0 && player.anim_clock < tuning.clock_wrap);
        assert!(player.anim_clock < 1.0);
    }

    #[test]
    fn pinned_at_screen_edges() {
        let (mut player, arena, tuning) = setup();
        for _ in 0..200 {
            advance(&mut player, &held(true, false), DT, &arena, &tuning);
        }
        assert_eq!(player.pos.x, 0.0);
        for _ in 0..400 {
            advance(&mut player, &held(false, true), DT, &arena, &tuning);
        }
        assert_eq!(player.pos.x, arena.width - player.size().x);
    }

    fn any_input() -> impl Strategy<Value = FrameInput> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, jump)| FrameInput {
            left,
            right,
            jump,
            ..Default::default()
        })
    }

    proptest! {
        #[test]
        fn speed_never_exceeds_max(
            inputs in prop::collection::vec(any_input(), 1..300),
            dt in 0.0f32..0.2,
        ) {
            let (mut player, arena, tuning) = setup();
            for input in &inputs {
                advance(&mut player, input, dt, &arena, &tuning);
                prop_assert!(player.vel.x.abs() <= tuning.max_speed);
            }
        }

        #[test]
        fn ground_invariant_holds(
            inputs in prop::collection::vec(any_input(), 1..300),
            dt in 0.0f32..0.2,
        ) {
            let (mut player, arena, tuning) = setup();
            for input in &inputs {
                advance(&mut player, input, dt, &arena, &tuning);
                prop_assert!(player.bottom() <= GROUND + 1e-3);
                if player.on_ground {
                    prop_assert!((player.bottom() - GROUND).abs() < 1e-3);
                } else {
                    prop_assert!(player.bottom() < GROUND);
                }
            }
        }

        #[test]
        fn friction_decays_monotonically(vx in -320.0f32..320.0, dt in 0.001f32..0.05) {
            let (mut player, arena, tuning) = setup();
            player.vel.x = vx;
            let sign = vx.signum();
            let mut prev = vx.abs();
            for _ in 0..2000 {
                if player.vel.x == 0.0 {
                    break;
                }
                advance(&mut player, &FrameInput::default(), dt, &arena, &tuning);
                prop_assert!(player.vel.x.abs() < prev);
                prop_assert!(player.vel.x == 0.0 || player.vel.x.signum() == sign);
                prev = player.vel.x.abs();
            }
            prop_assert_eq!(player.vel.x, 0.0);
        }

        #[test]
        fn x_stays_on_screen(x in -2000.0f32..2000.0, vx in -320.0f32..320.0, dir in 0u8..3) {
            let (mut player, arena, tuning) = setup();
            player.pos.x = x;
            player.vel.x = vx;
            advance(&mut player, &held(dir == 1, dir == 2), 1.0 / 60.0, &arena, &tuning);
            prop_assert!(player.pos.x >= 0.0);
            prop_assert!(player.pos.x <= arena.width - player.size().x);
        }
    }
}
