use paygate::gate::{GateConfig, KeyValueStorage, StorageVerificationRepository, StoreError};
use wasm_bindgen::JsValue;

/// `window.localStorage`. Reads from an unavailable storage (privacy mode,
/// disabled cookies) behave like missing records.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

pub type LocalStorageRepository = StorageVerificationRepository<LocalStorage>;

pub fn repository(config: &GateConfig) -> LocalStorageRepository {
    StorageVerificationRepository::with_config(LocalStorage, config)
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
}

fn js_error_message(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(error, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| "storage rejected the write".to_string())
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = local_storage()
            .ok_or_else(|| StoreError::Storage("localStorage is unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Storage(js_error_message(&err)))
    }
}
