// Drawing surface the simulator renders to. The browser implementation wraps a
// 2d canvas context; tests swap in a recorder.

use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Surface {
    type Error;

    fn size(&self) -> (f64, f64);
    fn set_size(&mut self, width: f64, height: f64);
    fn clear(&mut self);
    fn set_stroke(&mut self, color: &str, line_width: f64);
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: &str) -> Result<(), Self::Error>;
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grabs the 2d context of `canvas`. `Ok(None)` when the browser won't hand
    /// one out, e.g. the canvas already has a webgl context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Option<CanvasSurface>, JsValue> {
        let context = match canvas.get_context("2d")? {
            Some(context) => context.dyn_into::<CanvasRenderingContext2d>()?,
            None => return Ok(None),
        };
        Ok(Some(CanvasSurface { canvas, context }))
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn set_stroke(&mut self, color: &str, line_width: f64) {
        self.context.set_stroke_style(&JsValue::from_str(color));
        self.context.set_line_width(line_width);
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: &str) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context
            .arc(center[0], center[1], radius, 0.0, std::f64::consts::PI * 2.0)?;
        self.context.set_fill_style(&JsValue::from_str(color));
        self.context.fill();
        Ok(())
    }
}
