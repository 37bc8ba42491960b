use image::{DynamicImage, Rgba, RgbaImage};

use super::*;
use crate::container::{ArtworkStore, IconStore};

fn solid(size: u32, color: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(size, size, Rgba(color)))
}

#[test]
fn interpret_by_role() {
    let art = vec![0u8; Role::Artwork.record_size()];
    assert!(matches!(
        Payload::interpret(Role::Artwork, &art).unwrap(),
        Payload::Texture256(_)
    ));

    let meta = MetadataRecord {
        num_players: 2,
        ..Default::default()
    };
    match Payload::interpret(Role::Metadata, &meta.to_bytes()).unwrap() {
        Payload::Metadata(record) => assert_eq!(record, meta),
        other => panic!("unexpected payload {:?}", other.role()),
    }
}

#[test]
fn interpret_rejects_wrong_length() {
    let icon = vec![0u8; Role::Icon.record_size()];
    assert!(matches!(
        Payload::interpret(Role::Artwork, &icon),
        Err(ContainerError::PayloadSize { .. })
    ));
}

#[test]
fn set_payload_rejects_other_role() {
    let mut store = ArtworkStore::new();
    let icon = Payload::Texture128(vec![0u8; Role::Icon.record_size()]);
    assert!(matches!(
        store.set_payload("T1", icon),
        Err(ContainerError::PayloadRole {
            expected: Role::Artwork,
            actual: Role::Icon
        })
    ));
}

#[test]
fn pixel_data_skips_header() {
    let payload = Payload::Texture128(vec![7u8; Role::Icon.record_size()]);
    assert_eq!(payload.pixel_data().unwrap().len(), 128 * 128 * 2);
    assert!(Payload::Metadata(MetadataRecord::default())
        .pixel_data()
        .is_none());
}

#[test]
fn images_are_encoded_at_container_size() {
    let mut art = ArtworkStore::new();
    let mut icons = IconStore::new();
    art.set_image("T-1", &solid(300, [255, 0, 0, 255])).unwrap();
    icons.set_image("T-1", &solid(300, [255, 0, 0, 255])).unwrap();

    let cover = art.get_image("T1").unwrap();
    assert_eq!((cover.width, cover.height), (256, 256));
    assert_eq!(&cover.bgra[0..4], &[0, 0, 255, 255]);

    let icon = icons.get_image("T1").unwrap();
    assert_eq!((icon.width, icon.height), (128, 128));
}

#[test]
fn metadata_record_helpers() {
    let mut store = MetadataStore::new();
    let record = MetadataRecord {
        genre: 3,
        description: "Puzzle".to_string(),
        ..Default::default()
    };
    store.set_record("MK-51000", &record).unwrap();
    assert_eq!(store.get_record("MK51000"), Some(record));
    assert_eq!(store.get_record("NOPE"), None);
}
