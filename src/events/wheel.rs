use crate::core::ScrollState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_wheel(window: &web::Window, scroll: Rc<RefCell<ScrollState>>) {
    super::listen_passive(window, "wheel", move |ev: web::WheelEvent| {
        scroll.borrow_mut().on_wheel(ev.delta_y() as f32);
    });
}
