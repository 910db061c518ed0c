// The animated particle background as seen from JavaScript: mount it on a
// canvas, unmount (or free) it when the view goes away.

use crate::config::FieldConfig;
use crate::dom::{self, FrameLoop, Listener};
use crate::simulator::Simulator;
use crate::surface::{CanvasSurface, Surface};
#[cfg(feature = "profile")]
use crate::utils::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement, MouseEvent};

struct Mounted {
    simulator: Rc<RefCell<Simulator<CanvasSurface>>>,
    frame_loop: FrameLoop,
    listeners: Vec<Listener>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.listeners.clear();
        self.frame_loop.cancel();
        self.simulator.borrow_mut().stop();
    }
}

#[wasm_bindgen]
pub struct ParticleBackground {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Starts the particle animation on `canvas`, sized to the window.
    ///
    /// A canvas that can't give out a 2d context gets an inert handle: nothing
    /// is drawn and nothing is thrown.
    pub fn mount(
        canvas: HtmlCanvasElement,
        class_name: Option<String>,
    ) -> Result<ParticleBackground, JsValue> {
        if let Some(class_name) = class_name {
            canvas.set_class_name(&class_name);
        }
        let style = canvas.style();
        style.set_property("width", "100%")?;
        style.set_property("height", "100%")?;

        let mut surface = match CanvasSurface::new(canvas) {
            Ok(Some(surface)) => surface,
            Ok(None) => {
                console::warn_1(&"particle background: 2d context unavailable, not animating".into());
                return Ok(ParticleBackground::inert());
            }
            Err(err) => {
                console::warn_2(&"particle background: failed to get 2d context".into(), &err);
                return Ok(ParticleBackground::inert());
            }
        };

        let window = dom::window()?;
        let (width, height) = dom::viewport_size(&window)?;
        surface.set_size(width, height);
        let mut rng = rand::thread_rng();
        let simulator = Rc::new(RefCell::new(Simulator::new(
            surface,
            FieldConfig::default(),
            &mut rng,
        )));

        let on_resize = {
            let simulator = simulator.clone();
            let resize_window = window.clone();
            Listener::new(&window, "resize", move |_| {
                match dom::viewport_size(&resize_window) {
                    Ok((width, height)) => simulator.borrow_mut().resize(width, height),
                    Err(err) => console::error_1(&err),
                }
            })?
        };

        let on_mouse_move = {
            let simulator = simulator.clone();
            Listener::new(&window, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    simulator
                        .borrow_mut()
                        .set_pointer(event.client_x() as f64, event.client_y() as f64);
                }
            })?
        };

        let frame_loop = {
            let simulator = simulator.clone();
            FrameLoop::start(window, move || {
                #[cfg(feature = "profile")]
                let _timer = Timer::new("ParticleBackground::tick");
                let mut sim = simulator.borrow_mut();
                match sim.tick() {
                    Ok(keep_going) => keep_going,
                    Err(err) => {
                        console::error_1(&err);
                        sim.stop();
                        false
                    }
                }
            })?
        };

        Ok(ParticleBackground {
            mounted: Some(Mounted {
                simulator,
                frame_loop,
                listeners: vec![on_resize, on_mouse_move],
            }),
        })
    }

    /// Stops the animation and detaches every listener. Safe to call twice.
    pub fn unmount(&mut self) {
        self.mounted.take();
    }

    /// Respawns the particles for the current window width.
    pub fn reset(&mut self) -> Result<(), JsValue> {
        if let Some(mounted) = &self.mounted {
            let (width, _) = dom::viewport_size(&dom::window()?)?;
            mounted
                .simulator
                .borrow_mut()
                .reset(width, &mut rand::thread_rng());
        }
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.mounted.is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn animating(&self) -> bool {
        self.mounted
            .as_ref()
            .map_or(false, |m| m.frame_loop.is_scheduled())
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize {
        self.mounted
            .as_ref()
            .map_or(0, |m| m.simulator.borrow().field().particles().len())
    }
}

impl ParticleBackground {
    fn inert() -> ParticleBackground {
        ParticleBackground { mounted: None }
    }
}
