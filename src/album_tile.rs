//! HTML tile markup for album grids and lists.

use log::debug;

use crate::album_name::optimize_album_name;

/// Cover scale requested from the artwork service for tile images.
pub const TILE_ARTWORK_RESOLUTION: &str = "150x150";

const COVER_TOOLTIP: &str = "Show this Album";

/// Album fields consumed by the tile renderer.
///
/// Deserializes from the album objects delivered by the music database; any
/// additional fields are ignored. Albums that were never tagged carry `null`
/// for artwork and release.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct AlbumRecord {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artworkpath: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub release: Option<u32>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value = <Option<T> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Tile size variant. Only medium tiles show the release year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileSize {
    #[default]
    Medium,
    Small,
}

impl TileSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::Small => "small",
        }
    }

    fn shows_release(self) -> bool {
        self != Self::Small
    }
}

impl std::str::FromStr for TileSize {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "medium" => Ok(Self::Medium),
            "small" => Ok(Self::Small),
            other => Err(format!(
                "unknown tile size '{}' (expected 'medium' or 'small')",
                other
            )),
        }
    }
}

/// Resolves an album's stored artwork path into an image URL.
pub trait ArtworkPathEncoder {
    fn encode(&self, artwork_path: &str, resolution: &str) -> String;
}

impl<F> ArtworkPathEncoder for F
where
    F: Fn(&str, &str) -> String,
{
    fn encode(&self, artwork_path: &str, resolution: &str) -> String {
        self(artwork_path, resolution)
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn album_request_action(album_id: u64) -> String {
    format!(
        "MusicDB_Request('GetAlbum', 'ShowAlbum', {{albumid:{}}});",
        album_id
    )
}

/// Renders one album tile.
pub fn render_album_tile(
    album: &AlbumRecord,
    size: TileSize,
    artwork: &dyn ArtworkPathEncoder,
) -> String {
    let image_path = escape_html(&artwork.encode(&album.artworkpath, TILE_ARTWORK_RESOLUTION));
    let album_name = escape_html(&optimize_album_name(&album.name));
    let data_size = format!("data-size=\"{}\"", size.as_str());

    let mut html = String::new();
    html.push_str(&format!(
        "<div class=\"AT_albumentry\" {} onClick=\"{}\">",
        data_size,
        album_request_action(album.id)
    ));

    html.push_str(&format!(
        "<div title=\"{}\" class=\"AT_albumcover\" {}>",
        COVER_TOOLTIP, data_size
    ));
    html.push_str(&format!("<img src=\"{}\">", image_path));
    html.push_str("</div>");

    html.push_str("<div class=\"AT_albummetadata\">");
    if size.shows_release() {
        let release = album
            .release
            .map(|year| year.to_string())
            .unwrap_or_default();
        html.push_str(&format!(
            "<span class=\"AT_albumrelease hlcolor smallfont\">{}</span>",
            release
        ));
    }
    html.push_str(&format!(
        "<span class=\"AT_albumname fgcolor smallfont\" title=\"{}\">{}</span>",
        album_name, album_name
    ));
    html.push_str("</div>");

    html.push_str("</div>");
    html
}

/// Renders a medium tile.
pub fn create_album_tile(album: &AlbumRecord, artwork: &dyn ArtworkPathEncoder) -> String {
    render_album_tile(album, TileSize::Medium, artwork)
}

/// Renders a small tile without the release year.
pub fn create_small_album_tile(album: &AlbumRecord, artwork: &dyn ArtworkPathEncoder) -> String {
    render_album_tile(album, TileSize::Small, artwork)
}

/// Renders every album as a tile of the same size, concatenated in input order.
pub fn render_album_tiles(
    albums: &[AlbumRecord],
    size: TileSize,
    artwork: &dyn ArtworkPathEncoder,
) -> String {
    debug!(
        "Rendering album tiles. count={} size={}",
        albums.len(),
        size.as_str()
    );
    albums
        .iter()
        .map(|album| render_album_tile(album, size, artwork))
        .collect()
}

/// Parses a JSON array of album objects.
pub fn parse_album_records(json_text: &str) -> Result<Vec<AlbumRecord>, String> {
    let albums = serde_json::from_str::<Vec<AlbumRecord>>(json_text)
        .map_err(|err| format!("failed to parse album records as JSON: {}", err))?;
    debug!("Parsed album records. count={}", albums.len());
    Ok(albums)
}
