use macroquad::prelude::*;

use crate::audio::Sfx;
use crate::config::{MAX_FRAME_DT, MAX_SUBSTEPS, SCREEN_H, SCREEN_W, SIM_DT};
use crate::input::FrameInput;
use crate::model::GameEvent;

// 可按固定步长推进、在逻辑坐标下绘制的一局游戏
pub trait Scene {
    fn step(&mut self, input: &FrameInput, dt: f32, events: &mut Vec<GameEvent>);
    fn draw(&self);
}

// 初始化日志（原生平台使用 env_logger）
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let env = env_logger::Env::default().default_filter_or("info");
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

// 固定步长累加器，按键瞬间保留到被某一步消费
#[derive(Clone, Debug, Default)]
pub struct FixedStep {
    accumulator: f32,
    pending: FrameInput,
}

impl FixedStep {
    // 推进若干个固定步长，返回本帧执行的步数
    pub fn advance(&mut self, frame_dt: f32, input: FrameInput, mut step: impl FnMut(&FrameInput, f32)) -> u32 {
        self.pending.latch(input);
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            step(&self.pending, SIM_DT);
            self.pending.consume_edges();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // 追不上时丢弃积压时间
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }
}

// 游戏主循环：固定步长模拟、播放音效、按窗口缩放绘制
pub async fn run(scene: &mut impl Scene, sfx: &Sfx) {
    let mut stepper = FixedStep::default();
    let mut events = Vec::new();

    let render_target = render_target(SCREEN_W as u32, SCREEN_H as u32);
    render_target.texture.set_filter(FilterMode::Linear);

    loop {
        stepper.advance(get_frame_time(), FrameInput::capture(), |input, dt| {
            scene.step(input, dt, &mut events)
        });
        for event in events.drain(..) {
            log_event(event);
            sfx.play(event);
        }

        let (scale, offset_x, offset_y) = compute_viewport();
        let mut camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, SCREEN_W, SCREEN_H));
        camera.render_target = Some(render_target.clone());
        set_camera(&camera);

        scene.draw();

        // 回到默认相机并放大显示
        set_default_camera();
        clear_background(BLACK);
        draw_texture_ex(
            &render_target.texture,
            offset_x,
            offset_y,
            WHITE,
            DrawTextureParams {
                // RenderTarget 在纹理坐标系中是倒置的，这里做一次垂直翻转
                source: Some(Rect::new(0.0, SCREEN_H, SCREEN_W, -SCREEN_H)),
                dest_size: Some(vec2(SCREEN_W * scale, SCREEN_H * scale)),
                ..Default::default()
            },
        );

        next_frame().await;
    }
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::Scored(score) => log::debug!("score {score}"),
        GameEvent::Hit => log::info!("hit: game over"),
        GameEvent::Won => log::info!("goal reached: win"),
        GameEvent::Restarted => log::info!("restarted"),
    }
}

// 根据窗口尺寸计算缩放比例与居中偏移
fn compute_viewport() -> (f32, f32, f32) {
    let sw = screen_width();
    let sh = screen_height();
    let scale = (sw / SCREEN_W).min(sh / SCREEN_H).max(0.1);
    let offset_x = (sw - SCREEN_W * scale) * 0.5;
    let offset_y = (sh - SCREEN_H * scale) * 0.5;
    (scale, offset_x, offset_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_whole_steps_and_keeps_remainder() {
        let mut stepper = FixedStep::default();
        let mut steps = 0;
        let ran = stepper.advance(SIM_DT * 2.5, FrameInput::default(), |_, _| steps += 1);
        assert_eq!(ran, 2);
        assert_eq!(steps, 2);
        let ran = stepper.advance(SIM_DT * 0.6, FrameInput::default(), |_, _| {});
        assert_eq!(ran, 1);
    }

    #[test]
    fn press_is_delivered_exactly_once() {
        let mut stepper = FixedStep::default();
        let mut jumps = 0;

        // 帧时间不足一步：按键暂存
        stepper.advance(SIM_DT * 0.5, FrameInput { jump: true, ..Default::default() }, |input, _| {
            if input.jump {
                jumps += 1;
            }
        });
        assert_eq!(jumps, 0);

        // 一帧补两步：只在第一步生效
        stepper.advance(SIM_DT * 2.0, FrameInput::default(), |input, _| {
            if input.jump {
                jumps += 1;
            }
        });
        assert_eq!(jumps, 1);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut stepper = FixedStep::default();
        let ran = stepper.advance(5.0, FrameInput::default(), |_, _| {});
        assert_eq!(ran, MAX_SUBSTEPS);
        let ran = stepper.advance(0.0, FrameInput::default(), |_, _| {});
        assert!(ran <= 1);
    }
}
