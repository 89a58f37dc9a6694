use glam::Vec2;
use web_sys as web;

#[inline]
pub fn mouse_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Client position of the first active touch; only one touch drives the lever.
#[inline]
pub fn first_touch_client(ev: &web::TouchEvent) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}
