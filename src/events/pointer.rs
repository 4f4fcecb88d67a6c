use crate::core::ScrollState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn touch_client_y(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_y() as f32)
}

/// Touch drags (and mouse drags on desktop) move the scroll target directly.
pub fn wire_drag_handlers(window: &web::Window, scroll: Rc<RefCell<ScrollState>>) {
    wire_touch(window, &scroll);
    wire_mouse(window, &scroll);
}

fn wire_touch(window: &web::Window, scroll: &Rc<RefCell<ScrollState>>) {
    let s = scroll.clone();
    super::listen_passive(window, "touchstart", move |ev: web::TouchEvent| {
        if let Some(y) = touch_client_y(&ev) {
            s.borrow_mut().on_drag_start(y);
        }
    });

    let s = scroll.clone();
    super::listen_passive(window, "touchmove", move |ev: web::TouchEvent| {
        if let Some(y) = touch_client_y(&ev) {
            s.borrow_mut().on_drag_move(y);
        }
    });

    let s = scroll.clone();
    super::listen_passive(window, "touchend", move |_ev: web::TouchEvent| {
        s.borrow_mut().on_drag_end();
    });
}

fn wire_mouse(window: &web::Window, scroll: &Rc<RefCell<ScrollState>>) {
    let s = scroll.clone();
    super::listen_passive(window, "mousedown", move |ev: web::MouseEvent| {
        s.borrow_mut().on_drag_start(ev.client_y() as f32);
    });

    let s = scroll.clone();
    super::listen_passive(window, "mousemove", move |ev: web::MouseEvent| {
        s.borrow_mut().on_drag_move(ev.client_y() as f32);
    });

    let s = scroll.clone();
    super::listen_passive(window, "mouseup", move |_ev: web::MouseEvent| {
        let mut st = s.borrow_mut();
        if st.is_dragging() {
            st.on_drag_end();
            log::debug!("[scroll] drag end target={:.2}", st.target);
        }
    });
}
