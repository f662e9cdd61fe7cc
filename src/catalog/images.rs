//! Image Assets

use rustc_hash::FxHashMap;

/// Lookup from product display name to an image asset path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageAssets {
    assets: FxHashMap<String, String>,
}

impl ImageAssets {
    /// Register the asset for a product name, replacing any previous one.
    pub fn insert(&mut self, product_name: impl Into<String>, asset: impl Into<String>) {
        self.assets.insert(product_name.into(), asset.into());
    }

    /// Asset for a product, if one is registered.
    pub fn get(&self, product_name: &str) -> Option<&str> {
        self.assets.get(product_name).map(String::as_str)
    }

    /// Number of registered assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if no assets are registered.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl<N: Into<String>, A: Into<String>> FromIterator<(N, A)> for ImageAssets {
    fn from_iter<I: IntoIterator<Item = (N, A)>>(iter: I) -> Self {
        Self {
            assets: iter
                .into_iter()
                .map(|(name, asset)| (name.into(), asset.into()))
                .collect(),
        }
    }
}
