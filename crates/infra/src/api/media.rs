//! Public URLs built from the API base URL
//!
//! Images are served through `GET /api/image?path=<encoded path>`; event
//! landing pages live under `/landing/<id>`. Eventmaker profile images are
//! plain paths under the base URL.

use eventpass_domain::constants::{IMAGE_PATH, LANDING_PATH};

#[derive(Debug, Clone)]
pub struct MediaUrls {
    base_url: String,
}

impl MediaUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// URL of a stored image. Absolute URLs are returned unchanged.
    pub fn image_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}{}?path={}", self.base_url, IMAGE_PATH, urlencoding::encode(path))
    }

    /// URL of a file the backend serves from its own root, as eventmaker
    /// profile images are. Absolute URLs are returned unchanged.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn landing_url(&self, event_id: i64) -> String {
        format!("{}{}/{}", self.base_url, LANDING_PATH, event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_path_is_percent_encoded() {
        let urls = MediaUrls::new("https://api.eventpass.app/");
        assert_eq!(
            urls.image_url("uploads/events/open air.png"),
            "https://api.eventpass.app/api/image?path=uploads%2Fevents%2Fopen%20air.png"
        );
    }

    #[test]
    fn absolute_image_urls_pass_through() {
        let urls = MediaUrls::new("https://api.eventpass.app");
        assert_eq!(urls.image_url("https://cdn.example/x.png"), "https://cdn.example/x.png");
    }

    #[test]
    fn asset_paths_are_joined_to_the_base() {
        let urls = MediaUrls::new("https://api.eventpass.app/");
        assert_eq!(
            urls.asset_url("/uploads/profiles/avatar.png"),
            "https://api.eventpass.app/uploads/profiles/avatar.png"
        );
        assert_eq!(urls.asset_url("uploads/bg.png"), "https://api.eventpass.app/uploads/bg.png");
    }

    #[test]
    fn landing_page() {
        let urls = MediaUrls::new("https://api.eventpass.app");
        assert_eq!(urls.landing_url(42), "https://api.eventpass.app/landing/42");
    }
}
