// Browser plumbing: event listeners that detach themselves and a
// requestAnimationFrame loop that can be cancelled.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Event, EventTarget, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

/// `window.innerWidth` x `window.innerHeight`
pub fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

/// An event listener that stays attached for as long as this value lives.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Listener, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Listener {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        if let Err(err) = removed {
            console::warn_2(&format!("failed to detach '{}' listener", self.event).into(), &err);
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Runs a callback once per display refresh until it returns false or the
/// loop is cancelled.
pub struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(window: Window, mut frame: F) -> Result<FrameLoop, JsValue>
    where
        F: FnMut() -> bool + 'static,
    {
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        // The closure schedules itself, so it holds a handle to its own slot.
        // `cancel` empties the slot to break the cycle.
        let next_callback = callback.clone();
        let next_pending = pending.clone();
        let next_window = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            next_pending.set(None);
            if !frame() {
                return;
            }
            if let Some(cb) = next_callback.borrow().as_ref() {
                match next_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => next_pending.set(Some(id)),
                    Err(err) => console::error_1(&err),
                }
            }
        }) as Box<dyn FnMut()>));

        let id = match callback.borrow().as_ref() {
            Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref())?,
            None => return Err(JsValue::from_str("frame callback missing")),
        };
        pending.set(Some(id));

        Ok(FrameLoop {
            window,
            pending,
            callback,
        })
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                console::warn_2(&"failed to cancel animation frame".into(), &err);
            }
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
