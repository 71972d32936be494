use super::*;
use crate::error::Error;

fn gradient(width: u32, height: u32) -> Vec<u8> {
    (0..width * height).map(|i| (i % 256) as u8).collect()
}

#[test]
fn test_encode_png_is_grayscale_and_decodes_back() {
    let pixels = gradient(16, 8);
    let bytes = TileEncoder::encode_png(16, 8, pixels.clone()).unwrap();

    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.color(), image::ColorType::L8);
    assert_eq!(decoded.into_luma8().into_raw(), pixels);
}

#[test]
fn test_encode_png_is_deterministic() {
    let a = TileEncoder::encode_png(32, 32, gradient(32, 32)).unwrap();
    let b = TileEncoder::encode_png(32, 32, gradient(32, 32)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_encode_png_wrong_length_fails() {
    let result = TileEncoder::encode_png(4, 4, vec![0u8; 15]);
    assert!(matches!(result, Err(Error::Encode(_))));
}

#[test]
fn test_encode_builds_asset() {
    let readback = ReadbackResult::completed(4, 4, TextureFormat::R8_UNORM, vec![51u8; 16]);
    let asset = TileEncoder::encode("Bay", Path::new("Scenes/Harbor"), readback).unwrap();

    assert_eq!(asset.identity, "Bay");
    assert_eq!(asset.file_path, Path::new("Scenes/Harbor").join("Bay_DepthTile.png"));
    assert_eq!((asset.width, asset.height), (4, 4));
    assert!(!asset.png_bytes.is_empty());
}

#[test]
fn test_encode_rejects_multi_channel_readback() {
    let readback = ReadbackResult::completed(2, 2, TextureFormat::R8G8B8A8_UNORM, vec![0u8; 16]);
    let result = TileEncoder::encode("Bay", Path::new("out"), readback);
    assert!(matches!(result, Err(Error::Encode(_))));
}
