//! Reads the climber dataset the hosting page defines before the wasm module starts.

use crate::climber::{ClimberDataset, DatasetError};
use log::debug;
use wasm_bindgen::JsValue;

/// Name of the global variable holding `{ key: [href, descriptionHtml] }`.
pub const CLIMBERS_GLOBAL: &str = "climbers";

pub fn load_climbers() -> Result<ClimberDataset, DatasetError> {
    let window = gloo::utils::window();
    let value = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(CLIMBERS_GLOBAL))
        .map_err(|_| DatasetError::Missing(CLIMBERS_GLOBAL))?;
    if value.is_undefined() || value.is_null() {
        return Err(DatasetError::Missing(CLIMBERS_GLOBAL));
    }
    let json: String = js_sys::JSON::stringify(&value)
        .map_err(|err| DatasetError::NotSerializable {
            global: CLIMBERS_GLOBAL,
            reason: format!("{err:?}"),
        })?
        .into();
    let dataset = ClimberDataset::from_json(&json)?;
    debug!("Loaded {} climbers", dataset.len());
    Ok(dataset)
}
