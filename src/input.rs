use glam::Vec2;
use web_sys as web;

/// Pointer position in the canvas' backing-store pixels, the same space the
/// gesture cursor is mapped into.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return Vec2::new(x_css, y_css);
    }
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

#[inline]
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Vec2 {
    Vec2::new(canvas.width().max(1) as f32, canvas.height().max(1) as f32)
}
