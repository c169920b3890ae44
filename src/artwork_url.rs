//! Artwork URL helpers for tile cover images.

use crate::album_tile::ArtworkPathEncoder;

fn strip_trailing_slash(root: &str) -> String {
    root.trim().trim_end_matches('/').to_string()
}

/// Builds artwork URLs as `{url_root}/{resolution}/{path}` with every path
/// segment percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkUrlTemplate {
    url_root: String,
}

impl ArtworkUrlTemplate {
    pub fn new(url_root: &str) -> Self {
        Self {
            url_root: strip_trailing_slash(url_root),
        }
    }
}

impl ArtworkPathEncoder for ArtworkUrlTemplate {
    fn encode(&self, artwork_path: &str, resolution: &str) -> String {
        let encoded_path = artwork_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let encoded_resolution = urlencoding::encode(resolution.trim());
        if self.url_root.is_empty() {
            format!("{}/{}", encoded_resolution, encoded_path)
        } else {
            format!("{}/{}/{}", self.url_root, encoded_resolution, encoded_path)
        }
    }
}
