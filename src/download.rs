//! Download Handles
//!
//! Blob object URLs for converted placeholders. The URL is revoked when the
//! handle is dropped, so replacing or clearing it frees the blob.

use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

use fileforge_core::DownloadArtifact;

#[derive(Debug)]
pub struct ObjectUrl {
    href: String,
    file_name: String,
}

impl ObjectUrl {
    pub fn from_artifact(artifact: &DownloadArtifact) -> Result<Self, JsValue> {
        let parts = js_sys::Array::of1(&JsValue::from_str(&artifact.body));
        let options = BlobPropertyBag::new();
        options.set_type(&artifact.mime_type);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let href = Url::create_object_url_with_blob(&blob)?;
        log::debug!("[Download] Created {} for {}", href, artifact.file_name);
        Ok(Self {
            href,
            file_name: artifact.file_name.clone(),
        })
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        match Url::revoke_object_url(&self.href) {
            Ok(()) => log::debug!("[Download] Revoked {}", self.href),
            Err(e) => log::warn!("[Download] Failed to revoke {}: {:?}", self.href, e),
        }
    }
}
