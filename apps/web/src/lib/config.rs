//! Build-time configuration for the gate with an optional runtime override.
//! The runtime config is read from `window.PAYGATE_CONFIG` (if present) so
//! static deployments can point denied visitors elsewhere without rebuilding.
//! Route paths are compiled into the router and are not configurable here.
//! Configuration values are public; do not store secrets here.

use crate::app_lib::errors::AppError;
use paygate::gate::GateConfig;
use tracing::warn;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub payment_path: String,
    pub storage_prefix: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let defaults = GateConfig::default();
        let payment_path = option_env!("PAYGATE_PAYMENT_PATH")
            .map(str::to_string)
            .unwrap_or(defaults.payment_path);
        let storage_prefix = option_env!("PAYGATE_STORAGE_PREFIX")
            .map(str::to_string)
            .unwrap_or(defaults.storage_prefix);

        let mut config = Self {
            payment_path,
            storage_prefix,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Gate settings built from this config.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] if an override is not a usable value.
    pub fn try_gate_config(&self) -> Result<GateConfig, AppError> {
        let config = GateConfig {
            payment_path: self.payment_path.clone(),
            storage_prefix: self.storage_prefix.clone(),
            ..GateConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Gate settings for the guard. Invalid overrides fall back to defaults.
    pub fn gate_config(&self) -> GateConfig {
        self.try_gate_config().unwrap_or_else(|err| {
            warn!("ignoring gate configuration: {err}");
            GateConfig::default()
        })
    }
}

#[derive(Default)]
struct RuntimeConfig {
    payment_path: Option<String>,
    storage_prefix: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.payment_path {
        config.payment_path = value;
    }
    if let Some(value) = runtime.storage_prefix {
        config.storage_prefix = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("PAYGATE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        payment_path: read_runtime_value(&object, "payment_path"),
        storage_prefix: read_runtime_value(&object, "storage_prefix"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
