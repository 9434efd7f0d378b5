//! Sketch parameter document
//!
//! Parsing is lenient: every field is read on its own, and a missing or
//! mistyped field keeps its default without disturbing its neighbours.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::render::Color;

/// Blend mode tag passed through to the drawing host (`0..=5` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum BlendMode {
    #[default]
    Disabled,
    Alpha,
    Add,
    Subtract,
    Multiply,
    Screen,
}

impl TryFrom<i64> for BlendMode {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BlendMode::Disabled),
            1 => Ok(BlendMode::Alpha),
            2 => Ok(BlendMode::Add),
            3 => Ok(BlendMode::Subtract),
            4 => Ok(BlendMode::Multiply),
            5 => Ok(BlendMode::Screen),
            other => Err(format!("unknown blend mode {}", other)),
        }
    }
}

impl From<BlendMode> for i64 {
    fn from(mode: BlendMode) -> Self {
        mode as i64
    }
}

/// Hue, saturation, brightness and alpha on a `0..=255` scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HsbColor {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub alpha: f32,
}

impl Default for HsbColor {
    fn default() -> Self {
        Self {
            hue: 255.0,
            saturation: 255.0,
            brightness: 255.0,
            alpha: 255.0,
        }
    }
}

impl HsbColor {
    pub fn from_value(value: &Value) -> Self {
        let mut result = Self::default();
        if let Some(obj) = as_object(value, "backgroundColor") {
            read_field(obj, "hue", &mut result.hue);
            read_field(obj, "saturation", &mut result.saturation);
            read_field(obj, "brightness", &mut result.brightness);
            read_field(obj, "alpha", &mut result.alpha);
        }
        result
    }

    pub fn to_color(&self) -> Color {
        Color::from_hsb255(self.hue, self.saturation, self.brightness, self.alpha)
    }
}

/// Settings for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderParameters {
    pub draw_chooser_index: usize,
    pub color_chooser_index: usize,
    pub blend_mode: BlendMode,
}

impl RenderParameters {
    pub fn from_value(value: &Value) -> Self {
        let mut params = Self::default();
        if let Some(obj) = as_object(value, "renderParameters") {
            read_field(obj, "drawChooserIndex", &mut params.draw_chooser_index);
            read_field(obj, "colorChooserIndex", &mut params.color_chooser_index);
            read_field(obj, "blendMode", &mut params.blend_mode);
        }
        params
    }
}

/// Deepest tree the sketch will generate (59047 nodes at the default fan-out)
pub const MAX_TREE_DEPTH: usize = 10;

/// Everything needed to set up a sketch
#[derive(Debug, Clone, PartialEq)]
pub struct SketchParameters {
    /// Creation time, Unix milliseconds
    pub timestamp: u64,
    pub random_seed: u64,
    pub tree_depth: i32,
    /// Radius handed to the tree generator
    pub tree_size: f32,
    pub animator_chooser_index: usize,
    pub render_parameters1: RenderParameters,
    pub render_parameters2: RenderParameters,
    pub background_color: HsbColor,
}

impl Default for SketchParameters {
    fn default() -> Self {
        Self {
            timestamp: now_millis(),
            random_seed: 0,
            tree_depth: 3,
            tree_size: 200.0,
            animator_chooser_index: 0,
            render_parameters1: RenderParameters::default(),
            render_parameters2: RenderParameters::default(),
            background_color: HsbColor::default(),
        }
    }
}

impl SketchParameters {
    /// Parse a JSON document; never fails
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable parameter JSON, using defaults");
                Self::default()
            }
        }
    }

    /// Parse a YAML document; never fails
    pub fn from_yaml(yaml: &str) -> Self {
        match serde_yaml::from_str::<Value>(yaml) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable parameter YAML, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let mut params = Self::default();
        let Some(obj) = as_object(value, "document") else {
            return params;
        };

        read_field(obj, "timestamp", &mut params.timestamp);
        read_field(obj, "randomSeed", &mut params.random_seed);
        read_field(obj, "treeDepth", &mut params.tree_depth);
        read_field(obj, "treeSize", &mut params.tree_size);
        read_field(obj, "animatorChooserIndex", &mut params.animator_chooser_index);
        if let Some(v) = obj.get("renderParameters1") {
            params.render_parameters1 = RenderParameters::from_value(v);
        }
        if let Some(v) = obj.get("renderParameters2") {
            params.render_parameters2 = RenderParameters::from_value(v);
        }
        if let Some(v) = obj.get("backgroundColor") {
            params.background_color = HsbColor::from_value(v);
        }
        params
    }

    pub fn to_value(&self) -> Value {
        json!({
            "timestamp": self.timestamp,
            "randomSeed": self.random_seed,
            "treeDepth": self.tree_depth,
            "treeSize": self.tree_size,
            "animatorChooserIndex": self.animator_chooser_index,
            "renderParameters1": self.render_parameters1,
            "renderParameters2": self.render_parameters2,
            "backgroundColor": self.background_color,
            "renderParameters": [self.render_parameters1, self.render_parameters2],
        })
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    /// Generator depth; negative depths collapse to a lone root and
    /// anything past [`MAX_TREE_DEPTH`] is capped
    pub fn depth(&self) -> usize {
        let depth = usize::try_from(self.tree_depth).unwrap_or(0);
        if depth > MAX_TREE_DEPTH {
            tracing::warn!(requested = depth, max = MAX_TREE_DEPTH, "tree depth capped");
            return MAX_TREE_DEPTH;
        }
        depth
    }
}

fn as_object<'a>(value: &'a Value, what: &str) -> Option<&'a Map<String, Value>> {
    let obj = value.as_object();
    if obj.is_none() {
        tracing::warn!(section = what, "expected an object, using defaults");
    }
    obj
}

/// Overwrite `target` with the field's value if it parses as `T`
fn read_field<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str, target: &mut T) {
    let Some(value) = obj.get(key) else {
        tracing::debug!(field = key, "parameter missing, keeping default");
        return;
    };
    let parsed = T::deserialize(value).or_else(|e| match integral(value) {
        Some(whole) => T::deserialize(&whole).map_err(|_| e),
        None => Err(e),
    });
    match parsed {
        Ok(parsed) => *target = parsed,
        Err(e) => tracing::warn!(field = key, error = %e, "malformed parameter, keeping default"),
    }
}

/// A float with no fractional part as an integer value, e.g. `4.0` as `4`
fn integral(value: &Value) -> Option<Value> {
    if !value.is_f64() {
        return None;
    }
    let f = value.as_f64()?;
    if f.fract() != 0.0 || f.abs() > i64::MAX as f64 {
        return None;
    }
    Some(if f >= 0.0 { Value::from(f as u64) } else { Value::from(f as i64) })
}

fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
