use macroquad::prelude::Rect;

// 轴对齐包围盒相交判定，边缘相接也算碰撞
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.x <= b.x + b.w && b.x <= a.x + a.w && a.y <= b.y + b.h && b.y <= a.y + a.h
}
