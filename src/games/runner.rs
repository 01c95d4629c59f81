use macroquad::prelude::{vec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::actors::hazards::Obstacle;
use crate::actors::player::Player;
use crate::config::{PlayerTuning, RunnerTuning, SCREEN_W};
use crate::input::FrameInput;
use crate::model::{GameEvent, GamePhase, PhaseTrigger};
use crate::systems::{aabb_overlap, advance};
use crate::world::{Arena, Backdrop};

// 自动卷轴：箱子从右侧出现，跳过 win_score 个即获胜
#[derive(Clone, Debug)]
pub struct RunnerSession {
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub backdrop: Backdrop,
    pub score: u32,
    pub arena: Arena,
    spawn_timer: f32,
    rng: Pcg32,
    body_size: Vec2,
    player_tuning: PlayerTuning,
    tuning: RunnerTuning,
}

impl RunnerSession {
    // body_size 为贴图原始尺寸，缩放在 Player::new 中应用
    pub fn new(body_size: Vec2, player_tuning: &PlayerTuning, tuning: &RunnerTuning) -> Self {
        let arena = Arena::new(tuning.ground_y);
        let mut rng = Pcg32::seed_from_u64(tuning.seed);
        let spawn_timer = rng.random_range(tuning.min_gap..=tuning.max_gap);
        Self {
            phase: GamePhase::Playing,
            player: Player::new(body_size, &arena, player_tuning),
            obstacles: Vec::new(),
            backdrop: Backdrop::default(),
            score: 0,
            arena,
            spawn_timer,
            rng,
            body_size,
            player_tuning: player_tuning.clone(),
            tuning: tuning.clone(),
        }
    }

    pub fn player_tuning(&self) -> &PlayerTuning {
        &self.player_tuning
    }

    pub fn win_score(&self) -> u32 {
        self.tuning.win_score
    }

    // 整局重置：同一种子重新生成同样的障碍序列
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

        let scroll = self.tuning.scroll_speed;
        self.backdrop.scroll(scroll, dt, SCREEN_W);
        self.spawn_obstacles(dt);
        for obstacle in &mut self.obstacles {
            obstacle.pos.x -= scroll * dt;
        }
        self.obstacles.retain(|o| o.right() > 0.0);

        // 障碍完全越过玩家左边缘即得分
        let player_left = self.player.pos.x;
        for obstacle in &mut self.obstacles {
            if !obstacle.passed && obstacle.right() < player_left {
                obstacle.passed = true;
                self.score += 1;
                events.push(GameEvent::Scored(self.score));
            }
        }

        let player_rect = self.player.rect();
        if self.obstacles.iter().any(|o| aabb_overlap(&player_rect, &o.rect())) {
            if let Some(phase) = self.phase.next(PhaseTrigger::HazardHit) {
                self.phase = phase;
                events.push(GameEvent::Hit);
            }
            return;
        }

        if self.score >= self.tuning.win_score {
            if let Some(phase) = self.phase.next(PhaseTrigger::GoalReached) {
                self.phase = phase;
                events.push(GameEvent::Won);
            }
        }
    }

    fn spawn_obstacles(&mut self, dt: f32) {
        self.spawn_timer -= dt;
        if self.spawn_timer <= 0.0 {
            let (w, h) = self.tuning.obstacle_size;
            self.obstacles.push(Obstacle::new(SCREEN_W, self.arena.ground_y, vec2(w, h)));
            self.spawn_timer += self.rng.random_range(self.tuning.min_gap..=self.tuning.max_gap);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const TEXTURE: Vec2 = Vec2::new(480.0, 640.0);

    fn session() -> RunnerSession {
        RunnerSession::new(TEXTURE, &PlayerTuning::default(), &RunnerTuning::default())
    }

    // 简单的自动操作：障碍逼近时起跳
    fn autopilot(session: &RunnerSession) -> FrameInput {
        let player = &session.player;
        let threat = session
            .obstacles
            .iter()
            .any(|o| o.pos.x > player.pos.x && o.pos.x - (player.pos.x + player.size().x) < 40.0);
        FrameInput {
            jump: threat && player.on_ground,
            ..Default::default()
        }
    }

    #[test]
    fn standing_still_hits_first_crate() {
        let mut session = session();
        let mut events = Vec::new();
        for _ in 0..(10 * 60) {
            session.step(&FrameInput::default(), DT, &mut events);
        }
        assert_eq!(session.phase, GamePhase::GameOver);
        assert_eq!(session.score, 0);
        assert_eq!(events, vec![GameEvent::Hit]);
    }

    #[test]
    fn jumping_crates_scores_until_win() {
        let mut session = session();
        let mut events = Vec::new();
        for _ in 0..(60 * 60) {
            let input = autopilot(&session);
            session.step(&input, DT, &mut events);
            if !session.phase.is_playing() {
                break;
            }
        }
        assert_eq!(session.phase, GamePhase::Won);
        assert_eq!(session.score, session.win_score());
        assert_eq!(events.last(), Some(&GameEvent::Won));
    }

    #[test]
    fn restart_replays_same_run() {
        let mut session = session();
        let mut events = Vec::new();
        for _ in 0..(10 * 60) {
            session.step(&FrameInput::default(), DT, &mut events);
        }
        assert_eq!(session.phase, GamePhase::GameOver);

        session.step(
            &FrameInput {
                restart: true,
                ..Default::default()
            },
            DT,
            &mut events,
        );
        let fresh = self::session();
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.player, fresh.player);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.backdrop, Backdrop::default());
        assert_eq!(session.spawn_timer, fresh.spawn_timer);

        // 同一种子：重开后的障碍序列与全新一局一致
        let mut replay = fresh;
        for _ in 0..(3 * 60) {
            session.step(&FrameInput::default(), DT, &mut events);
            replay.step(&FrameInput::default(), DT, &mut Vec::new());
        }
        assert_eq!(session.obstacles, replay.obstacles);
    }
}
