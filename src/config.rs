use std::f32::consts::TAU;
use std::fs;
use std::path::Path;

use macroquad::prelude::Conf;
use serde::Deserialize;

use crate::error::ConfigError;

pub const SCREEN_W: f32 = 800.0;
pub const SCREEN_H: f32 = 450.0;

// 固定步长：60Hz 模拟
pub const SIM_DT: f32 = 1.0 / 60.0;
// 单帧最多补算的步数，防止卡顿后追帧雪崩
pub const MAX_SUBSTEPS: u32 = 4;
// 单帧时间上限，调试暂停等情况下截断
pub const MAX_FRAME_DT: f32 = 0.1;

pub const DEFAULT_TUNING_PATH: &str = "data/tuning.json";

// 配置窗口标题、尺寸与可变大小选项
pub fn window_conf(title: &str) -> Conf {
    let resizable = cfg!(any(target_os = "windows", target_os = "macos", target_os = "linux"));
    Conf {
        window_title: title.to_string(),
        window_width: SCREEN_W as i32,
        window_height: SCREEN_H as i32,
        high_dpi: true,
        window_resizable: resizable,
        ..Default::default()
    }
}

// 全部调参，按游戏分组；JSON 中缺省的字段保留默认值
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub axe_game: AxeGameTuning,
    pub runner: RunnerTuning,
    pub dodge: DodgeTuning,
}

impl Tuning {
    // 从JSON文件加载调参配置
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    // 拒绝会让模拟越界或崩溃的取值
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.player;
        ensure(p.max_dt > 0.0, "player.max_dt must be positive")?;
        ensure(p.max_speed >= 0.0, "player.max_speed must not be negative")?;
        ensure(p.clock_wrap > 0.0, "player.clock_wrap must be positive")?;
        ensure(p.scale > 0.0, "player.scale must be positive")?;

        let a = &self.axe_game;
        ensure(
            a.axe_size > 0.0 && a.axe_size <= SCREEN_H,
            "axe_game.axe_size must fit the screen height",
        )?;
        ensure(
            a.dodger_radius >= 0.0 && a.dodger_radius * 2.0 <= SCREEN_W,
            "axe_game.dodger_radius must fit the screen width",
        )?;

        let r = &self.runner;
        ensure(r.min_gap > 0.0, "runner.min_gap must be positive")?;
        ensure(r.min_gap <= r.max_gap, "runner.min_gap must not exceed runner.max_gap")?;

        let d = &self.dodge;
        ensure(
            d.axe_size > 0.0 && d.axe_size <= SCREEN_W && d.axe_size <= d.ground_y,
            "dodge.axe_size must fit between the screen edges and the ground",
        )?;
        ensure(
            d.laser_width > 0.0 && d.laser_width <= SCREEN_W,
            "dodge.laser_width must fit the screen width",
        )?;
        ensure(
            d.laser_charge_time > 0.0 && d.laser_fire_time > 0.0,
            "dodge laser charge and fire times must be positive",
        )?;
        Ok(())
    }

    // 读取失败时回退到内置默认值
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(tuning) => {
                log::info!("loaded tuning from {}", path.display());
                tuning
            }
            Err(err) => {
                log::warn!("{err}; using built-in tuning");
                Self::default()
            }
        }
    }
}

fn ensure(ok: bool, msg: &str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid(msg.to_string()))
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerTuning {
    pub gravity: f32,
    // 负值向上
    pub jump_speed: f32,
    pub accel: f32,
    pub friction: f32,
    pub max_speed: f32,
    // 绘制时向下偏移，让脚底贴地
    pub feet_offset: f32,
    pub scale: f32,
    pub spawn_x: f32,
    pub active_threshold: f32,
    pub clock_fast_rate: f32,
    pub clock_slow_rate: f32,
    // 动画时钟回绕上限，取 2π 整数倍使整数频率在回绕处连续
    pub clock_wrap: f32,
    pub max_dt: f32,
    pub run_bob: Wave,
    pub air_bob: Wave,
    pub idle_bob: Wave,
    pub run_sway: Wave,
    // 空中每单位竖直速度对应的倾斜角度
    pub air_tilt_per_speed: f32,
    pub max_tilt: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            gravity: 1200.0,
            jump_speed: -600.0,
            accel: 2600.0,
            friction: 2600.0,
            max_speed: 320.0,
            feet_offset: 0.0,
            scale: 0.10,
            spawn_x: 80.0,
            active_threshold: 5.0,
            clock_fast_rate: 5.0,
            clock_slow_rate: 2.0,
            clock_wrap: TAU * 160.0,
            max_dt: 0.05,
            run_bob: Wave::new(15.0, 4.0),
            air_bob: Wave::new(8.0, 2.0),
            idle_bob: Wave::new(4.0, 1.5),
            run_sway: Wave::new(10.0, 6.0),
            air_tilt_per_speed: 0.03,
            max_tilt: 15.0,
        }
    }
}

// sin(clock * rate) * amplitude；缺省字段为 0
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Wave {
    pub rate: f32,
    pub amplitude: f32,
}

impl Wave {
    pub const fn new(rate: f32, amplitude: f32) -> Self {
        Self { rate, amplitude }
    }

    pub fn sample(&self, clock: f32) -> f32 {
        (clock * self.rate).sin() * self.amplitude
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AxeGameTuning {
    pub dodger_start: (f32, f32),
    pub dodger_radius: f32,
    pub dodger_speed: f32,
    pub axe_start: (f32, f32),
    pub axe_size: f32,
    pub axe_speed: f32,
    pub speedup: f32,
    pub speedup_every: u32,
}

impl Default for AxeGameTuning {
    fn default() -> Self {
        Self {
            dodger_start: (200.0, 200.0),
            dodger_radius: 25.0,
            dodger_speed: 600.0,
            axe_start: (400.0, 0.0),
            axe_size: 50.0,
            axe_speed: 600.0,
            speedup: 90.0,
            speedup_every: 5,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunnerTuning {
    pub ground_y: f32,
    pub scroll_speed: f32,
    pub obstacle_size: (f32, f32),
    pub min_gap: f32,
    pub max_gap: f32,
    pub win_score: u32,
    pub seed: u64,
}

impl Default for RunnerTuning {
    fn default() -> Self {
        Self {
            ground_y: 380.0,
            scroll_speed: 260.0,
            obstacle_size: (30.0, 40.0),
            min_gap: 1.1,
            max_gap: 2.2,
            win_score: 15,
            seed: 0x5eed_a11e,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DodgeTuning {
    pub ground_y: f32,
    pub axe_start: (f32, f32),
    pub axe_velocity: (f32, f32),
    pub axe_size: f32,
    pub speedup: f32,
    pub speedup_every: u32,
    pub laser_height: f32,
    pub laser_width: f32,
    pub laser_sweep_speed: f32,
    pub laser_charge_time: f32,
    pub laser_fire_time: f32,
}

impl Default for DodgeTuning {
    fn default() -> Self {
        Self {
            ground_y: 400.0,
            axe_start: (400.0, 40.0),
            axe_velocity: (220.0, 180.0),
            axe_size: 40.0,
            speedup: 30.0,
            speedup_every: 5,
            laser_height: 36.0,
            laser_width: 10.0,
            laser_sweep_speed: 240.0,
            laser_charge_time: 1.2,
            laser_fire_time: 3.0,
        }
    }
}
