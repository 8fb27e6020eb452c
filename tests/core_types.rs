use pixfind::{ImageRegion, OwnedRegion, PixFindError};

#[test]
fn region_rejects_mismatched_length() {
    let data = [0u8; 15];
    let err = ImageRegion::new(&data, 2, 2).err().unwrap();
    assert_eq!(err, PixFindError::BufferLength { expected: 16, got: 15 });

    let data = [0u8; 20];
    let err = ImageRegion::new(&data, 2, 2).err().unwrap();
    assert_eq!(err, PixFindError::BufferLength { expected: 16, got: 20 });
}

#[test]
fn region_rejects_overflowing_dimensions() {
    let err = ImageRegion::new(&[], usize::MAX, 2).err().unwrap();
    assert_eq!(
        err,
        PixFindError::InvalidDimensions {
            width: usize::MAX,
            height: 2,
        }
    );
}

#[test]
fn empty_regions_are_valid() {
    let empty = ImageRegion::new(&[], 0, 0).unwrap();
    assert!(empty.is_empty());
    let zero_height = ImageRegion::new(&[], 5, 0).unwrap();
    assert!(zero_height.is_empty());
    assert_eq!(zero_height.row(0), None);
}

#[test]
fn rows_and_pixels_index_row_major() {
    let data: Vec<u8> = (0u8..24).collect();
    let view = ImageRegion::new(&data, 3, 2).unwrap();
    assert_eq!(view.row_len(), 12);
    assert_eq!(view.row(1).unwrap(), &data[12..24]);
    assert_eq!(view.pixel(1, 1), Some([16, 17, 18, 19]));
    assert_eq!(view.pixel(3, 0), None);
    assert_eq!(view.pixel(0, 2), None);
}

#[test]
fn crop_copies_sub_rectangle() {
    let data: Vec<u8> = (0u8..48).collect();
    let view = ImageRegion::new(&data, 4, 3).unwrap();

    let roi = view.crop(1, 1, 2, 2).unwrap();
    assert_eq!(roi.width(), 2);
    assert_eq!(roi.height(), 2);
    assert_eq!(roi.view().row(0).unwrap(), &data[20..28]);
    assert_eq!(roi.view().row(1).unwrap(), &data[36..44]);

    let err = view.crop(3, 2, 2, 2).err().unwrap();
    assert_eq!(
        err,
        PixFindError::RoiOutOfBounds {
            x: 3,
            y: 2,
            width: 2,
            height: 2,
            img_width: 4,
            img_height: 3,
        }
    );
}

#[test]
fn paste_then_crop_round_trips() {
    let mut canvas = OwnedRegion::filled(5, 4, [0, 0, 0, 255]).unwrap();
    let mut patch = OwnedRegion::filled(2, 2, [10, 20, 30, 255]).unwrap();
    patch.set_pixel(1, 1, [40, 50, 60, 255]);

    canvas.paste(patch.view(), 3, 2).unwrap();
    assert_eq!(canvas.view().crop(3, 2, 2, 2).unwrap(), patch);
    assert_eq!(canvas.view().pixel(2, 2), Some([0, 0, 0, 255]));

    let err = canvas.paste(patch.view(), 4, 0).err().unwrap();
    assert!(matches!(err, PixFindError::RoiOutOfBounds { x: 4, y: 0, .. }));
}

#[test]
fn owned_region_validates_and_exposes_buffer() {
    let owned = OwnedRegion::new(vec![1u8; 8], 2, 1).unwrap();
    assert_eq!(owned.data(), &[1u8; 8]);
    assert_eq!(owned.view().to_owned_region(), owned);
    assert_eq!(owned.into_data().len(), 8);

    let err = OwnedRegion::new(vec![1u8; 7], 2, 1).err().unwrap();
    assert_eq!(err, PixFindError::BufferLength { expected: 8, got: 7 });
}
