use std::f32::consts::TAU;
use std::fs;
use std::io::Write;

use image::{ImageBuffer, Rgba, RgbaImage};

// 角色贴图尺寸：按 0.1 缩放后为 48x64，脚底贴住图片下边缘
const SPRITE_W: u32 = 480;
const SPRITE_H: u32 = 640;
const SAMPLE_RATE: u32 = 22_050;

#[derive(Clone, Copy)]
struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

const OUTLINE: Color = Color::rgba(30, 30, 40, 255);
const SKIN: Color = Color::rgba(250, 210, 170, 255);
const SHIRT: Color = Color::rgba(60, 120, 220, 255);
const PANTS: Color = Color::rgba(50, 50, 70, 255);
const SHOE: Color = Color::rgba(150, 60, 40, 255);
const SCARF: Color = Color::rgba(230, 60, 60, 255);
const SHINE: Color = Color::rgba(255, 255, 255, 90);

fn blend(dst: Color, src: Color) -> Color {
    if src.a == 255 {
        return src;
    }
    let sa = src.a as f32 / 255.0;
    let da = dst.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Color::rgba(0, 0, 0, 0);
    }
    let r = (src.r as f32 * sa + dst.r as f32 * da * (1.0 - sa)) / out_a;
    let g = (src.g as f32 * sa + dst.g as f32 * da * (1.0 - sa)) / out_a;
    let b = (src.b as f32 * sa + dst.b as f32 * da * (1.0 - sa)) / out_a;
    Color::rgba(r as u8, g as u8, b as u8, (out_a * 255.0) as u8)
}

fn set_px(img: &mut RgbaImage, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let (w, h) = img.dimensions();
    if x as u32 >= w || y as u32 >= h {
        return;
    }
    let dst = img.get_pixel(x as u32, y as u32);
    let dst = Color::rgba(dst[0], dst[1], dst[2], dst[3]);
    let out = blend(dst, color);
    img.put_pixel(x as u32, y as u32, Rgba([out.r, out.g, out.b, out.a]));
}

fn fill_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            set_px(img, x, y, color);
        }
    }
}

fn fill_ellipse(img: &mut RgbaImage, cx: i32, cy: i32, rx: i32, ry: i32, color: Color) {
    let rx2 = (rx * rx) as f32;
    let ry2 = (ry * ry) as f32;
    for y in (cy - ry)..=(cy + ry) {
        for x in (cx - rx)..=(cx + rx) {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            if (dx * dx) / rx2 + (dy * dy) / ry2 <= 1.0 {
                set_px(img, x, y, color);
            }
        }
    }
}

// 带描边的矩形，描边宽度 t
fn outlined_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, t: i32, color: Color) {
    fill_rect(img, x0 - t, y0 - t, x1 + t, y1 + t, OUTLINE);
    fill_rect(img, x0, y0, x1, y1, color);
}

fn outlined_ellipse(img: &mut RgbaImage, cx: i32, cy: i32, rx: i32, ry: i32, t: i32, color: Color) {
    fill_ellipse(img, cx, cy, rx + t, ry + t, OUTLINE);
    fill_ellipse(img, cx, cy, rx, ry, color);
}

fn draw_character(img: &mut RgbaImage) {
    let bottom = SPRITE_H as i32 - 1;
    let t = 10;

    // 腿与鞋：鞋底落在最后一行像素
    outlined_rect(img, 150, 430, 220, bottom - 50, t, PANTS);
    outlined_rect(img, 260, 430, 330, bottom - 50, t, PANTS);
    outlined_ellipse(img, 180, bottom - 30, 62, 30, t, SHOE);
    outlined_ellipse(img, 300, bottom - 30, 62, 30, t, SHOE);
    fill_rect(img, 108, bottom - 8, 372, bottom, OUTLINE);

    // 躯干与手臂
    outlined_rect(img, 60, 270, 110, 420, t, SKIN);
    outlined_rect(img, 370, 270, 420, 420, t, SKIN);
    outlined_rect(img, 120, 240, 360, 450, t, SHIRT);
    fill_rect(img, 130, 250, 180, 440, SHINE);

    // 头部
    outlined_ellipse(img, 240, 140, 120, 115, t, SKIN);
    fill_ellipse(img, 195, 130, 16, 24, OUTLINE);
    fill_ellipse(img, 285, 130, 16, 24, OUTLINE);
    fill_ellipse(img, 200, 122, 5, 7, Color::rgba(255, 255, 255, 255));
    fill_ellipse(img, 290, 122, 5, 7, Color::rgba(255, 255, 255, 255));
    fill_rect(img, 215, 190, 265, 198, OUTLINE);

    // 围巾
    outlined_rect(img, 120, 235, 360, 265, 6, SCARF);
    outlined_rect(img, 330, 265, 365, 340, 6, SCARF);
}

// 单声道 16 位 PCM，带线性淡出的正弦音
fn write_tone(path: &str, freqs: &[f32], seconds_per_note: f32) -> Result<(), String> {
    let per_note = (SAMPLE_RATE as f32 * seconds_per_note) as usize;
    let mut samples: Vec<i16> = Vec::with_capacity(per_note * freqs.len());
    for &freq in freqs {
        for i in 0..per_note {
            let t = i as f32 / SAMPLE_RATE as f32;
            let fade = 1.0 - i as f32 / per_note as f32;
            let value = (t * freq * TAU).sin() * fade * 0.5;
            samples.push((value * i16::MAX as f32) as i16);
        }
    }

    let data_len = (samples.len() * 2) as u32;
    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVEfmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    let mut file = fs::File::create(path).map_err(|e| format!("create {path} failed: {e}"))?;
    file.write_all(&bytes)
        .map_err(|e| format!("write {path} failed: {e}"))?;
    println!("wrote {path} ({} bytes)", bytes.len());
    Ok(())
}

fn main() -> Result<(), String> {
    fs::create_dir_all("assets").map_err(|e| format!("create assets/ failed: {e}"))?;

    let mut img: RgbaImage = ImageBuffer::new(SPRITE_W, SPRITE_H);
    draw_character(&mut img);
    img.save("assets/player.png")
        .map_err(|e| format!("save failed: {e}"))?;
    println!("wrote assets/player.png ({}x{})", SPRITE_W, SPRITE_H);

    write_tone("assets/point.wav", &[880.0, 1320.0], 0.07)?;
    write_tone("assets/game_over.wav", &[330.0, 247.0, 165.0], 0.18)?;
    Ok(())
}
