//! Navigation contract between the catalog and detail routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The detail route is `/assets/{name}/{id}` with the name escaped the way a
//! browser's `encodeURIComponent` would. The unescaped name also locates the
//! asset's image under `/assets/images/`.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Image shown when an asset's own image cannot be loaded.
pub const DEFAULT_IMAGE_PATH: &str = "/assets/images/default.jpg";

/// Identity of the asset a detail page is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRef {
    pub name: String,
    pub id: u32,
}

/// Build the detail route for an asset.
pub fn asset_detail_path(name: &str, id: u32) -> String {
    format!("/assets/{}/{id}", encode_path_segment(name))
}

/// Image path for an asset name.
pub fn asset_image_path(name: &str) -> String {
    format!("/assets/images/{name}.jpg")
}

/// Replacement source after an image failed to load; `None` once the
/// default image itself has failed.
pub fn image_fallback(current: &str) -> Option<&'static str> {
    (current != DEFAULT_IMAGE_PATH).then_some(DEFAULT_IMAGE_PATH)
}

/// Percent-encode everything outside `encodeURIComponent`'s unreserved set.
pub fn encode_path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Resolve route parameters into an asset reference.
///
/// The router hands over params already unescaped, so `name` is used as-is.
/// Returns `None` when either parameter is missing or blank, or when the id is
/// not a non-negative integer.
pub fn parse_asset_ref(name: Option<String>, id: Option<String>) -> Option<AssetRef> {
    let name = name?.trim().to_owned();
    if name.is_empty() {
        return None;
    }
    let id = id?.trim().parse::<u32>().ok()?;
    Some(AssetRef { name, id })
}
