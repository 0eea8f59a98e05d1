pub mod analysis;
pub mod types;

#[cfg(feature = "wasm")]
use crate::analysis::{global_stats_inner, simulate_inner};
#[cfg(feature = "wasm")]
use crate::types::*;
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

// --- Wasm Wrappers ---

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn global_stats(val: JsValue) -> Result<JsValue, JsValue> {
    let req: GlobalStatsRequest = serde_wasm_bindgen::from_value(val)?;
    let res = global_stats_inner(req).map_err(|e| JsValue::from_str(&e))?;
    Ok(serde_wasm_bindgen::to_value(&res)?)
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn simulate(val: JsValue) -> Result<JsValue, JsValue> {
    let req: ScenarioRequest = serde_wasm_bindgen::from_value(val)?;
    let res = simulate_inner(req).map_err(|e| JsValue::from_str(&e))?;
    Ok(serde_wasm_bindgen::to_value(&res)?)
}
