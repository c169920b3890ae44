//! Album tile markup and album display-name cleanup.

pub mod album_name;
pub mod album_tile;
pub mod artwork_url;
pub mod config;

pub use album_name::optimize_album_name;
pub use album_tile::{
    create_album_tile, create_small_album_tile, parse_album_records, render_album_tile,
    render_album_tiles, AlbumRecord, ArtworkPathEncoder, TileSize,
};
