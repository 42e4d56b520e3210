//! Image asset resolution with placeholder fallback

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::AppConfig;

/// Outcome of resolving one image path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAsset {
    /// The referenced image decoded fine
    Image {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// The referenced image failed; the placeholder image stands in
    Placeholder {
        requested: String,
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// Neither the image nor the placeholder could be read
    Missing { requested: String },
}

impl ResolvedAsset {
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            ResolvedAsset::Image { width, height, .. }
            | ResolvedAsset::Placeholder { width, height, .. } => Some((*width, *height)),
            ResolvedAsset::Missing { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        !matches!(self, ResolvedAsset::Image { .. })
    }
}

/// Maps content image paths ("/images/x.png") onto the asset root
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
    placeholder: String,
}

impl AssetResolver {
    pub fn new(root: PathBuf, placeholder: impl Into<String>) -> Self {
        Self {
            root,
            placeholder: placeholder.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.asset_root(), config.assets.placeholder.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem location for a content path
    pub fn locate(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    /// Resolve an image, substituting the placeholder when it cannot be read
    pub fn resolve(&self, path: &str) -> ResolvedAsset {
        let located = self.locate(path);
        match image::image_dimensions(&located) {
            Ok((width, height)) => ResolvedAsset::Image {
                path: located,
                width,
                height,
            },
            Err(e) => {
                debug!("Image {} unavailable ({}), using placeholder", located.display(), e);
                let placeholder = self.locate(&self.placeholder);
                match image::image_dimensions(&placeholder) {
                    Ok((width, height)) => ResolvedAsset::Placeholder {
                        requested: path.to_string(),
                        path: placeholder,
                        width,
                        height,
                    },
                    Err(_) => ResolvedAsset::Missing {
                        requested: path.to_string(),
                    },
                }
            }
        }
    }

    /// Content paths that do not resolve to a readable image
    pub fn broken<'a>(&self, paths: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        paths
            .into_iter()
            .filter(|p| self.resolve(p).is_fallback())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("showcasy-assets-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_locate_strips_leading_slash() {
        let resolver = AssetResolver::new(PathBuf::from("public"), "/images/placeholder.png");
        assert_eq!(
            resolver.locate("/images/wepay.png"),
            PathBuf::from("public/images/wepay.png")
        );
    }

    #[test]
    fn test_missing_image_and_placeholder() {
        let resolver = AssetResolver::new(temp_root(), "/images/placeholder.png");
        let resolved = resolver.resolve("/images/nope.png");
        assert_eq!(
            resolved,
            ResolvedAsset::Missing {
                requested: "/images/nope.png".to_string()
            }
        );
        assert!(resolved.is_fallback());
        assert_eq!(resolved.dimensions(), None);
    }

    #[test]
    fn test_placeholder_substitutes_broken_image() {
        let root = temp_root();
        std::fs::create_dir_all(root.join("images")).unwrap();
        image::RgbImage::new(4, 3)
            .save(root.join("images/placeholder.png"))
            .unwrap();
        std::fs::write(root.join("images/broken.png"), b"not a png").unwrap();

        let resolver = AssetResolver::new(root.clone(), "/images/placeholder.png");
        match resolver.resolve("/images/broken.png") {
            ResolvedAsset::Placeholder { width, height, .. } => assert_eq!((width, height), (4, 3)),
            other => panic!("expected placeholder, got {:?}", other),
        }
        assert!(!resolver.resolve("/images/placeholder.png").is_fallback());
        assert_eq!(
            resolver.broken(["/images/broken.png", "/images/placeholder.png"]),
            vec!["/images/broken.png"]
        );

        let _ = std::fs::remove_dir_all(&root);
    }
}
