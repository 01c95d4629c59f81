// 单局游戏阶段
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GamePhase {
    Playing,
    GameOver,
    Won,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PhaseTrigger {
    HazardHit,
    GoalReached,
    Restart,
}

impl GamePhase {
    // 状态转移表，未列出的组合不转移
    pub fn next(self, trigger: PhaseTrigger) -> Option<GamePhase> {
        match (self, trigger) {
            (GamePhase::Playing, PhaseTrigger::HazardHit) => Some(GamePhase::GameOver),
            (GamePhase::Playing, PhaseTrigger::GoalReached) => Some(GamePhase::Won),
            (GamePhase::GameOver | GamePhase::Won, PhaseTrigger::Restart) => Some(GamePhase::Playing),
            _ => None,
        }
    }

    pub fn is_playing(self) -> bool {
        self == GamePhase::Playing
    }
}

// 每步对外报告的事件，用于音效与日志
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameEvent {
    Scored(u32),
    Hit,
    Won,
    Restarted,
}

// 按真实秒数计分的计时器，保留不足一秒的余量
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreClock {
    elapsed: f32,
}

impl ScoreClock {
    // 返回本次跨过的整秒数，余数保留
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.elapsed += dt;
        let mut whole = 0;
        while self.elapsed >= 1.0 {
            self.elapsed -= 1.0;
            whole += 1;
        }
        whole
    }
}
