// DOM side of the custom cursor. Keeps a `CursorState` in sync with mouse
// events and writes it back onto the dot and outline elements.

use crate::cursor::{CursorPart, CursorState, INTERACTIVE_SELECTOR, TOUCH_ONLY_QUERY};
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Element, Event, EventTarget, HtmlElement, MouseEvent};

struct CursorView {
    dot: HtmlElement,
    outline: HtmlElement,
}

impl CursorView {
    fn paint(&self, state: &CursorState) -> Result<(), JsValue> {
        paint_part(&self.dot, CursorPart::Dot, state)?;
        paint_part(&self.outline, CursorPart::Outline, state)
    }
}

fn paint_part(element: &HtmlElement, part: CursorPart, state: &CursorState) -> Result<(), JsValue> {
    element.set_class_name(&state.class_name(part));
    let style = element.style();
    style.set_property("left", &format!("{}px", state.pos[0]))?;
    style.set_property("top", &format!("{}px", state.pos[1]))?;
    style.set_property("transition", part.transition())
}

// Hover is tracked by delegation so elements added after mount still count
fn over_interactive(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

fn bind(
    target: &EventTarget,
    event: &'static str,
    state: &Rc<RefCell<CursorState>>,
    view: &Rc<CursorView>,
    update: fn(&mut CursorState, &Event),
) -> Result<Listener, JsValue> {
    let state = state.clone();
    let view = view.clone();
    Listener::new(target, event, move |e| {
        let mut state = state.borrow_mut();
        update(&mut state, &e);
        if let Err(err) = view.paint(&state) {
            console::error_1(&err);
        }
    })
}

#[wasm_bindgen]
pub struct CursorOverlay {
    listeners: Vec<Listener>,
    state: Option<Rc<RefCell<CursorState>>>,
}

#[wasm_bindgen]
impl CursorOverlay {
    /// Makes `dot` and `outline` follow the mouse. Inert on touch-only devices.
    pub fn mount(dot: HtmlElement, outline: HtmlElement) -> Result<CursorOverlay, JsValue> {
        let window = dom::window()?;
        if let Some(query) = window.match_media(TOUCH_ONLY_QUERY)? {
            if query.matches() {
                return Ok(CursorOverlay {
                    listeners: Vec::new(),
                    state: None,
                });
            }
        }
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let root = document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))?;

        let state = Rc::new(RefCell::new(CursorState::default()));
        let view = Rc::new(CursorView { dot, outline });
        view.paint(&state.borrow())?;

        let listeners = vec![
            bind(&window, "mousemove", &state, &view, |s, e| {
                if let Some(e) = e.dyn_ref::<MouseEvent>() {
                    s.move_to(e.client_x() as f64, e.client_y() as f64);
                }
            })?,
            bind(&window, "mousedown", &state, &view, |s, _| s.set_pressed(true))?,
            bind(&window, "mouseup", &state, &view, |s, _| s.set_pressed(false))?,
            bind(&root, "mouseleave", &state, &view, |s, _| s.set_hidden(true))?,
            bind(&root, "mouseenter", &state, &view, |s, _| s.set_hidden(false))?,
            bind(&document, "mouseover", &state, &view, |s, e| {
                s.set_hovering_interactive(over_interactive(e))
            })?,
        ];

        Ok(CursorOverlay {
            listeners,
            state: Some(state),
        })
    }

    /// Detaches every listener. The elements keep their last look.
    pub fn unmount(&mut self) {
        self.listeners.clear();
        self.state = None;
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.state.is_some()
    }
}
