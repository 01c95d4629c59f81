use macroquad::prelude::*;

use crate::config::SCREEN_W;
use crate::model::GamePhase;

#[derive(Default)]
pub struct Ui {
    pub font: Option<Font>,
}

impl Ui {
    // 获取字体引用，便于统一绘制接口
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }
}

// 绘制UI文字，优先使用加载的字体
pub fn draw_text_ui(ui: &Ui, text: &str, x: f32, y: f32, size: u16, color: Color) {
    if let Some(font) = ui.font() {
        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: Some(font),
                font_size: size,
                color,
                ..Default::default()
            },
        );
    } else {
        draw_text(text, x, y, size as f32, color);
    }
}

// 测量文字宽高，用于布局计算
pub fn measure_text_ui(ui: &Ui, text: &str, size: u16) -> TextDimensions {
    measure_text(text, ui.font(), size, 1.0)
}

// 绘制水平居中的文字
pub fn draw_centered_text(ui: &Ui, text: &str, y: f32, size: u16, color: Color) {
    let dims = measure_text_ui(ui, text, size);
    draw_text_ui(ui, text, (SCREEN_W - dims.width) * 0.5, y, size, color);
}

// 结束画面：失败或胜利，显示最终分数与重开提示
pub fn draw_end_screen(ui: &Ui, phase: GamePhase, score: u32) {
    let (title, color) = match phase {
        GamePhase::GameOver => ("GAME OVER!", RED),
        GamePhase::Won => ("YOU WIN!", DARKGREEN),
        GamePhase::Playing => return,
    };
    draw_centered_text(ui, title, 200.0, 40, color);
    draw_centered_text(ui, &format!("Final Score: {score}"), 245.0, 22, DARKGRAY);
    draw_centered_text(ui, "Press R to restart", 280.0, 20, GRAY);
}

pub fn draw_score(ui: &Ui, score: u32) {
    draw_text_ui(ui, &format!("Score: {score}"), 20.0, 36.0, 24, DARKGRAY);
}
