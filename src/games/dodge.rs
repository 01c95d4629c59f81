use macroquad::prelude::*;

use crate::actors::hazards::{BouncingAxe, SweepingLaser};
use crate::actors::player::Player;
use crate::config::{DodgeTuning, PlayerTuning, SCREEN_W};
use crate::input::FrameInput;
use crate::model::{GameEvent, GamePhase, PhaseTrigger, ScoreClock};
use crate::systems::{aabb_overlap, advance};
use crate::world::Arena;

// 躲避弹跳斧头与贴地扫射激光
#[derive(Clone, Debug, PartialEq)]
pub struct DodgeSession {
    pub phase: GamePhase,
    pub player: Player,
    pub axe: BouncingAxe,
    pub laser: SweepingLaser,
    pub score: u32,
    pub arena: Arena,
    clock: ScoreClock,
    body_size: Vec2,
    player_tuning: PlayerTuning,
    tuning: DodgeTuning,
}

impl DodgeSession {
    pub fn new(body_size: Vec2, player_tuning: &PlayerTuning, tuning: &DodgeTuning) -> Self {
        let arena = Arena::new(tuning.ground_y);
        let (ax, ay) = tuning.axe_start;
        let (vx, vy) = tuning.axe_velocity;
        Self {
            phase: GamePhase::Playing,
            player: Player::new(body_size, &arena, player_tuning),
            axe: BouncingAxe::new(vec2(ax, ay), vec2(vx, vy), tuning.axe_size),
            laser: SweepingLaser::new(
                tuning.ground_y,
                tuning.laser_width,
                tuning.laser_height,
                tuning.laser_sweep_speed,
                tuning.laser_charge_time,
                tuning.laser_fire_time,
            ),
            score: 0,
            arena,
            clock: ScoreClock::default(),
            body_size,
            player_tuning: player_tuning.clone(),
            tuning: tuning.clone(),
        }
    }

    pub fn player_tuning(&self) -> &PlayerTuning {
        &self.player_tuning
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.body_size, &self.player_tuning, &self.tuning);
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

        advance(&mut self.player, input, dt, &self.arena, &self.player_tuning);
        // 斧头在地面以上的区域内反弹
        self.axe.update(dt, vec2(SCREEN_W, self.arena.ground_y));
        self.laser.update(dt, SCREEN_W);

        for _ in 0..self.clock.tick(dt) {
            self.score += 1;
            events.push(GameEvent::Scored(self.score));
            if self.tuning.speedup_every > 0 && self.score % self.tuning.speedup_every == 0 {
                self.axe.speed_up(self.tuning.speedup);
            }
        }

        let player_rect = self.player.rect();
        let hit_axe = aabb_overlap(&player_rect, &self.axe.rect());
        let hit_laser = self.laser.is_lethal() && aabb_overlap(&player_rect, &self.laser.rect());
        if hit_axe || hit_laser {
            if let Some(phase) = self.phase.next(PhaseTrigger::HazardHit) {
                self.phase = phase;
                events.push(GameEvent::Hit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::hazards::LaserPhase;

    const DT: f32 = 1.0 / 60.0;
    const TEXTURE: Vec2 = Vec2::new(480.0, 640.0);

    fn session() -> DodgeSession {
        DodgeSession::new(TEXTURE, &PlayerTuning::default(), &DodgeTuning::default())
    }

    #[test]
    fn firing_laser_at_player_ends_game() {
        let mut session = session();
        session.axe.vel = Vec2::ZERO;
        session.axe.pos = vec2(700.0, 0.0);
        session.laser.phase = LaserPhase::Firing;
        session.laser.timer = 10.0;
        session.laser.x = session.player.pos.x + 10.0;

        let mut events = Vec::new();
        session.step(&FrameInput::default(), DT, &mut events);
        assert_eq!(session.phase, GamePhase::GameOver);
        assert_eq!(events, vec![GameEvent::Hit]);
    }

    #[test]
    fn charging_laser_is_harmless() {
        let mut session = session();
        session.axe.vel = Vec2::ZERO;
        session.axe.pos = vec2(700.0, 0.0);
        session.laser.timer = 10.0;
        session.laser.x = session.player.pos.x + 10.0;

        let mut events = Vec::new();
        for _ in 0..130 {
            session.step(&FrameInput::default(), DT, &mut events);
        }
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.score, 2);
    }

    #[test]
    fn jumping_clears_laser() {
        let mut session = session();
        session.axe.vel = Vec2::ZERO;
        session.axe.pos = vec2(700.0, 0.0);
        let mut events = Vec::new();
        session.step(
            &FrameInput {
                jump: true,
                ..Default::default()
            },
            DT,
            &mut events,
        );
        // 起跳后 0.1 秒已离地超过光束高度
        for _ in 0..6 {
            session.step(&FrameInput::default(), DT, &mut events);
        }
        session.laser.phase = LaserPhase::Firing;
        session.laser.timer = 10.0;
        session.laser.sweep = 0.0;
        session.laser.x = session.player.pos.x + 10.0;
        session.step(&FrameInput::default(), DT, &mut events);
        assert!(session.player.bottom() < session.laser.rect().y);
        assert_eq!(session.phase, GamePhase::Playing);
    }

    #[test]
    fn axe_hit_and_full_restart() {
        let mut session = session();
        session.axe.pos = session.player.pos;
        let mut events = Vec::new();
        session.step(&FrameInput::default(), DT, &mut events);
        assert_eq!(session.phase, GamePhase::GameOver);

        session.step(
            &FrameInput {
                restart: true,
                ..Default::default()
            },
            DT,
            &mut events,
        );
        assert_eq!(session, self::session());
        assert_eq!(events.last(), Some(&GameEvent::Restarted));
    }
}
