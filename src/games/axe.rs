use macroquad::prelude::*;

use crate::actors::dodger::Dodger;
use crate::actors::hazards::SwingingAxe;
use crate::config::{AxeGameTuning, SCREEN_H, SCREEN_W};
use crate::input::FrameInput;
use crate::model::{GameEvent, GamePhase, PhaseTrigger, ScoreClock};
use crate::systems::aabb_overlap;

// 圆形玩家左右移动，躲避上下弹跳的斧头
#[derive(Clone, Debug, PartialEq)]
pub struct AxeSession {
    pub phase: GamePhase,
    pub dodger: Dodger,
    pub axe: SwingingAxe,
    pub score: u32,
    clock: ScoreClock,
    tuning: AxeGameTuning,
}

impl AxeSession {
    pub fn new(tuning: &AxeGameTuning) -> Self {
        let (dx, dy) = tuning.dodger_start;
        let (ax, ay) = tuning.axe_start;
        Self {
            phase: GamePhase::Playing,
            dodger: Dodger::new(vec2(dx, dy), tuning.dodger_radius, tuning.dodger_speed),
            axe: SwingingAxe::new(vec2(ax, ay), tuning.axe_size, tuning.axe_speed),
            score: 0,
            clock: ScoreClock::default(),
            tuning: tuning.clone(),
        }
    }

    // 整局重置
    pub fn restart(&mut self) {
        *self = Self::new(&self.tuning);
    }

    pub fn step(&mut self, input: &FrameInput, dt: f32, events: &mut Vec<GameEvent>) {
        if !self.phase.is_playing() {
            if input.restart {
                if let Some(phase) = self.phase.next(PhaseTrigger::Restart) {
                    self.restart();
                    self.phase = phase;
                    events.push(GameEvent::Restarted);
                }
            }
            return;
        }

        self.axe.update(dt, SCREEN_H);
        self.dodger.update(input.move_dir(), dt, SCREEN_W);

        for _ in 0..self.clock.tick(dt) {
            self.score += 1;
            events.push(GameEvent::Scored(self.score));
            // 每 N 分加速一次
            if self.tuning.speedup_every > 0 && self.score % self.tuning.speedup_every == 0 {
                self.axe.speed_up(self.tuning.speedup);
            }
        }

        if aabb_overlap(&self.dodger.rect(), &self.axe.rect()) {
            if let Some(phase) = self.phase.next(PhaseTrigger::HazardHit) {
                self.phase = phase;
                events.push(GameEvent::Hit);
            }
        }
    }
}
