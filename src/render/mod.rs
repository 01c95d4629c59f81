use macroquad::prelude::*;

use crate::actors::animation::derive_visual;
use crate::actors::hazards::{BouncingAxe, LaserPhase, Obstacle, SweepingLaser, SwingingAxe};
use crate::actors::player::Player;
use crate::assets::PlayerSprite;
use crate::config::{PlayerTuning, SCREEN_H, SCREEN_W};
use crate::games::{AxeSession, DodgeSession, RunnerSession};
use crate::ui::{draw_end_screen, draw_score, draw_text_ui, Ui};
use crate::world::Backdrop;

const PAPER: Color = Color::new(0.96, 0.96, 0.96, 1.0);
const SKY: Color = Color::new(0.72, 0.86, 0.96, 1.0);
const HILLS: Color = Color::new(0.55, 0.75, 0.55, 1.0);
const EARTH: Color = Color::new(0.45, 0.33, 0.22, 1.0);

// 绘制玩家：脚底偏移 + 起伏 + 倾斜，绕精灵中心旋转
pub fn draw_player(sprite: &PlayerSprite, player: &Player, tuning: &PlayerTuning) {
    let visual = derive_visual(player, tuning);
    draw_texture_ex(
        sprite.texture(),
        player.pos.x,
        player.pos.y + tuning.feet_offset + visual.bob,
        WHITE,
        DrawTextureParams {
            dest_size: Some(player.size()),
            rotation: visual.tilt_degrees.to_radians(),
            ..Default::default()
        },
    );
}

pub fn draw_ground(ground_y: f32) {
    draw_rectangle(0.0, ground_y, SCREEN_W, SCREEN_H - ground_y, EARTH);
    draw_line(0.0, ground_y, SCREEN_W, ground_y, 2.0, DARKBROWN);
}

// 视差背景：远处山丘按卷动偏移循环
pub fn draw_backdrop(backdrop: &Backdrop, ground_y: f32) {
    clear_background(SKY);
    let hill_w = 200.0;
    let parallax = (backdrop.offset * 0.5) % hill_w;
    let mut x = -parallax;
    while x < SCREEN_W + hill_w {
        draw_triangle(
            vec2(x, ground_y),
            vec2(x + hill_w * 0.5, ground_y - 90.0),
            vec2(x + hill_w, ground_y),
            HILLS,
        );
        x += hill_w;
    }
    // 地面上的刻痕随卷动移动
    let mut mark = -backdrop.offset % 40.0;
    while mark < SCREEN_W {
        draw_line(mark, ground_y + 12.0, mark + 16.0, ground_y + 12.0, 2.0, DARKBROWN);
        mark += 40.0;
    }
}

pub fn draw_swinging_axe(axe: &SwingingAxe) {
    draw_rectangle(axe.pos.x, axe.pos.y, axe.size, axe.size, RED);
}

pub fn draw_bouncing_axe(axe: &BouncingAxe) {
    let rect = axe.rect();
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, MAROON);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 3.0, RED);
}

// 充能阶段闪烁细线提示，发射阶段绘制实体光束
pub fn draw_laser(laser: &SweepingLaser) {
    let rect = laser.rect();
    match laser.phase {
        LaserPhase::Charging => {
            if (laser.timer * 8.0) as i32 % 2 == 0 {
                let cx = rect.x + rect.w * 0.5;
                draw_line(cx, rect.y, cx, rect.y + rect.h, 1.0, ORANGE);
            }
        }
        LaserPhase::Firing => {
            draw_rectangle(rect.x - 3.0, rect.y, rect.w + 6.0, rect.h, Color::new(1.0, 0.2, 0.2, 0.35));
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, RED);
        }
    }
}

pub fn draw_obstacle(obstacle: &Obstacle) {
    let rect = obstacle.rect();
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, BROWN);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, DARKBROWN);
    draw_line(rect.x, rect.y, rect.x + rect.w, rect.y + rect.h, 2.0, DARKBROWN);
}

pub fn draw_axe_game(ui: &Ui, session: &AxeSession) {
    clear_background(PAPER);
    if !session.phase.is_playing() {
        draw_end_screen(ui, session.phase, session.score);
        return;
    }
    let dodger = &session.dodger;
    draw_circle(dodger.center.x, dodger.center.y, dodger.radius, BLUE);
    draw_swinging_axe(&session.axe);
    draw_score(ui, session.score);
    draw_text_ui(ui, &format!("Speed: {:.1}", session.axe.speed()), 20.0, 64.0, 20, GRAY);
}

pub fn draw_runner(ui: &Ui, sprite: &PlayerSprite, session: &RunnerSession) {
    let ground_y = session.arena.ground_y;
    draw_backdrop(&session.backdrop, ground_y);
    draw_ground(ground_y);
    for obstacle in &session.obstacles {
        draw_obstacle(obstacle);
    }
    draw_player(sprite, &session.player, session.player_tuning());
    draw_score(ui, session.score);
    draw_text_ui(ui, &format!("Goal: {}", session.win_score()), 20.0, 64.0, 20, GRAY);
    if !session.phase.is_playing() {
        draw_rectangle(0.0, 0.0, SCREEN_W, SCREEN_H, Color::new(1.0, 1.0, 1.0, 0.7));
        draw_end_screen(ui, session.phase, session.score);
    }
}

pub fn draw_dodge(ui: &Ui, sprite: &PlayerSprite, session: &DodgeSession) {
    clear_background(PAPER);
    draw_ground(session.arena.ground_y);
    draw_laser(&session.laser);
    draw_bouncing_axe(&session.axe);
    draw_player(sprite, &session.player, session.player_tuning());
    draw_score(ui, session.score);
    if !session.phase.is_playing() {
        draw_rectangle(0.0, 0.0, SCREEN_W, SCREEN_H, Color::new(1.0, 1.0, 1.0, 0.7));
        draw_end_screen(ui, session.phase, session.score);
    }
}
