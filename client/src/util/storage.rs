//! Browser `localStorage` as the session flag's durable mirror.
//!
//! TRADE-OFFS
//! ==========
//! Storage is looked up on every call rather than cached, so the mirror is a
//! unit type that can live inside shared, thread-safe context. Outside the
//! browser build every operation is a successful no-op and nothing persists.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use logingate::{DurableMirror, MirrorError};

/// `window.localStorage`, accessed synchronously.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageMirror;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, MirrorError> {
    let window = web_sys::window().ok_or_else(|| MirrorError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|e| MirrorError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| MirrorError::Unavailable("localStorage disabled".to_owned()))
}

#[cfg(feature = "csr")]
fn js_error(e: wasm_bindgen::JsValue) -> MirrorError {
    MirrorError::Unavailable(format!("{e:?}"))
}

impl DurableMirror for LocalStorageMirror {
    fn read(&self, key: &str) -> Result<Option<String>, MirrorError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), MirrorError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), MirrorError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
