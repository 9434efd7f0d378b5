use wasm_bindgen::prelude::*;

pub mod animation;
pub mod error;
pub mod math;
pub mod params;
pub mod render;
pub mod sketch;
pub mod tree;
pub mod visit;

pub use error::SketchError;
pub use params::{BlendMode, SketchParameters};
pub use sketch::{Frame, RenderPass, Sketch};
pub use tree::{Tree, TreeGenerator, TreeNode};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Sketch state exposed to JavaScript
///
/// The host calls `update` then `draw` once per frame and paints the
/// returned primitives itself.
#[wasm_bindgen]
pub struct CircleTreeSketch {
    sketch: Sketch,
    last_frame: Option<Frame>,
}

#[wasm_bindgen]
impl CircleTreeSketch {
    /// Set up a sketch from a JSON parameter document
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<CircleTreeSketch, JsValue> {
        let params = SketchParameters::from_json(json);
        let sketch = Sketch::setup(params).map_err(to_js)?;
        Ok(Self {
            sketch,
            last_frame: None,
        })
    }

    /// Advance animation to `elapsed` seconds since start
    #[wasm_bindgen]
    pub fn update(&mut self, elapsed: f32) -> Result<(), JsValue> {
        self.sketch.update(elapsed).map_err(to_js)
    }

    /// Render and return both passes as flat primitive records
    ///
    /// Each record is `[kind, x0, y0, x1, y1, radius, r, g, b, a]`; the
    /// first pass's records come first. See `pass_len` for the split.
    #[wasm_bindgen]
    pub fn draw(&mut self) -> js_sys::Float32Array {
        let frame = self.sketch.draw();
        let data = frame.to_f32_data();
        self.last_frame = Some(frame);
        js_sys::Float32Array::from(&data[..])
    }

    /// Number of primitives the given pass produced on the last `draw`
    #[wasm_bindgen]
    pub fn pass_len(&self, pass: usize) -> usize {
        self.last_frame
            .as_ref()
            .and_then(|f| f.passes.get(pass))
            .map(|p| p.primitives.len())
            .unwrap_or(0)
    }

    /// Background colour as `[r, g, b, a]` in `0..=1`
    #[wasm_bindgen]
    pub fn background(&self) -> Vec<f32> {
        self.sketch.background().to_array().to_vec()
    }

    /// Blend mode tag (`0..=5`) for a pass, `0` for unknown passes
    #[wasm_bindgen]
    pub fn blend_mode(&self, pass: usize) -> i32 {
        let params = self.sketch.params();
        let mode = match pass {
            0 => params.render_parameters1.blend_mode,
            1 => params.render_parameters2.blend_mode,
            _ => BlendMode::Disabled,
        };
        mode as i32
    }

    /// The effective parameters, defaults filled in
    #[wasm_bindgen]
    pub fn parameters_json(&self) -> String {
        self.sketch.params().to_json()
    }

    #[wasm_bindgen]
    pub fn node_count(&self) -> usize {
        self.sketch.tree().node_count()
    }
}

fn to_js(err: SketchError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
