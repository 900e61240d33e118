use super::*;

const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn accepts_png_and_encodes_data_uri() {
    let uri = encode_profile_image(&PNG_HEADER).expect("png accepted");
    assert!(uri.starts_with("data:image/png;base64,"));
    assert_eq!(&uri["data:image/png;base64,".len()..], STANDARD.encode(PNG_HEADER));
}

#[test]
fn accepts_jpeg_and_gif() {
    let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
    assert!(encode_profile_image(&jpeg).expect("jpeg").starts_with("data:image/jpeg;"));

    let gif = *b"GIF89a\x01\x00\x01\x00";
    assert!(encode_profile_image(&gif).expect("gif").starts_with("data:image/gif;"));
}

#[test]
fn rejects_non_image_content() {
    assert_eq!(
        encode_profile_image(b"just some text, not a picture"),
        Err(ImageError::UnsupportedType)
    );
    assert_eq!(encode_profile_image(&[]), Err(ImageError::UnsupportedType));
}

#[test]
fn rejects_images_over_five_mebibytes() {
    let mut big = PNG_HEADER.to_vec();
    big.resize(MAX_IMAGE_BYTES + 1, 0);
    assert_eq!(
        encode_profile_image(&big),
        Err(ImageError::TooLarge(MAX_IMAGE_BYTES + 1))
    );

    big.truncate(MAX_IMAGE_BYTES);
    assert!(encode_profile_image(&big).is_ok());
}

#[test]
fn encoded_uri_passes_recheck() {
    let uri = encode_profile_image(&PNG_HEADER).expect("png accepted");
    assert_eq!(check_profile_image_uri(&uri), Ok(()));
}

#[test]
fn recheck_rejects_foreign_or_malformed_uris() {
    let pdf = format!("data:application/pdf;base64,{}", STANDARD.encode(b"%PDF-1.7"));
    assert_eq!(check_profile_image_uri(&pdf), Err(ImageError::UnsupportedType));

    // Declared png, but the payload is not one.
    let lying = format!("data:image/png;base64,{}", STANDARD.encode(b"plain text"));
    assert_eq!(check_profile_image_uri(&lying), Err(ImageError::UnsupportedType));

    let gif = *b"GIF89a\x01\x00\x01\x00";
    let mislabeled = format!("data:image/png;base64,{}", STANDARD.encode(gif));
    assert_eq!(check_profile_image_uri(&mislabeled), Err(ImageError::UnsupportedType));

    assert_eq!(
        check_profile_image_uri("https://example.com/me.png"),
        Err(ImageError::UnsupportedType)
    );
    assert_eq!(
        check_profile_image_uri("data:image/png;base64,***"),
        Err(ImageError::UnsupportedType)
    );
}

#[test]
fn recheck_rejects_oversized_payload() {
    let mut big = PNG_HEADER.to_vec();
    big.resize(MAX_IMAGE_BYTES + 1, 0);
    let uri = format!("data:image/png;base64,{}", STANDARD.encode(&big));
    assert_eq!(
        check_profile_image_uri(&uri),
        Err(ImageError::TooLarge(MAX_IMAGE_BYTES + 1))
    );
}
