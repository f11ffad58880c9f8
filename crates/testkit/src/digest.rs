//! Stable digests for comparing generated layouts.

use noel_luxe_layout::SceneLayout;
use serde::Serialize;

/// blake3 hex digest of a value's JSON form.
pub fn json_digest<T: Serialize>(value: &T) -> String {
    let bytes = serde_json::to_vec(value).expect("test values serialize to JSON");
    blake3::hash(&bytes).to_hex().to_string()
}

/// Digest of a whole scene layout.
pub fn layout_digest(layout: &SceneLayout) -> String {
    json_digest(layout)
}
