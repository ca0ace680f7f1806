//! Catalog behavior: pagination bounds, image URLs, seeding.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Placeholder replaced by the record id in [`CatalogConfig::image_url_template`].
pub const ID_PLACEHOLDER: &str = "{id}";

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL template for records created without an image.
    #[serde(default = "default_image_url_template")]
    pub image_url_template: String,
    /// Directory holding static image assets.
    #[serde(default = "default_image_dir")]
    pub image_dir: String,
    /// Route prefix the image directory is served under.
    #[serde(default = "default_images_route")]
    pub images_route: String,
    /// JSON file imported at startup when the store is empty.
    #[serde(default)]
    pub seed_file: Option<String>,
    /// Page size used when `limit` is absent or invalid.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Upper bound applied to a requested `limit`.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            image_url_template: default_image_url_template(),
            image_dir: default_image_dir(),
            images_route: default_images_route(),
            seed_file: None,
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl CatalogConfig {
    /// Render the default image URL for a record id.
    pub fn image_url(&self, id: i64) -> String {
        self.image_url_template
            .replace(ID_PLACEHOLDER, &id.to_string())
    }

    /// Reject settings that would break pagination or image defaults.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.default_page_size == 0 {
            return Err(AppError::configuration(
                "catalog.default_page_size must be positive",
            ));
        }
        if self.max_page_size < self.default_page_size {
            return Err(AppError::configuration(
                "catalog.max_page_size must be at least catalog.default_page_size",
            ));
        }
        if !self.image_url_template.contains(ID_PLACEHOLDER) {
            return Err(AppError::configuration(format!(
                "catalog.image_url_template must contain '{ID_PLACEHOLDER}'"
            )));
        }
        if !self.images_route.starts_with('/') {
            return Err(AppError::configuration(
                "catalog.images_route must start with '/'",
            ));
        }
        Ok(())
    }
}

fn default_image_url_template() -> String {
    "http://localhost:3000/images/{id}.png".to_string()
}

fn default_image_dir() -> String {
    "./images".to_string()
}

fn default_images_route() -> String {
    "/images".to_string()
}

fn default_page_size() -> u64 {
    20
}

fn default_max_page_size() -> u64 {
    1000
}
