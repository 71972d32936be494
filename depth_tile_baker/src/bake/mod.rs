//! Depth tile bake pipeline
//!
//! OffscreenCapture → DepthEncodePass → AsyncReadback → TileEncoder → TileWriter,
//! orchestrated per region by `DepthBaker`.

pub mod request;
pub mod render_target;
pub mod depth_encode;
pub mod capture;
pub mod readback;
pub mod encoder;
pub mod import;
pub mod writer;
pub mod region;
pub mod baker;
pub mod depth_tile;
pub mod manifest;

pub use request::{CaptureRequest, CAPTURE_NEAR_PLANE};
pub use render_target::{
    CaptureTargets, ENCODED_DEPTH_TARGET, SCENE_COLOR_TARGET, SCENE_DEPTH_TARGET,
};
pub use depth_encode::DepthEncodePass;
pub use capture::{capture_camera, OffscreenCapture, SCENE_DEPTH_PASS};
pub use readback::AsyncReadback;
pub use encoder::{TileAsset, TileEncoder};
pub use import::{
    ChannelComponent, Compression, ImportSettings, MetaFileImporter, TextureType, TileHandle,
    TileImporter,
};
pub use writer::{tile_path, TileWriter};
pub use region::{is_valid_region_name, storage_dir_for_scene, Region, RegionSettings, SharedRegion};
pub use baker::{BakeReport, DepthBaker, PendingBake, DEPTH_ENCODE_SHADER};
pub use depth_tile::DepthTile;
pub use manifest::{BakeManifest, ObjectDesc, RegionDesc, SceneDesc, ShapeDesc};
