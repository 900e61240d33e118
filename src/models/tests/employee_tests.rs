use base64::{engine::general_purpose::STANDARD, Engine as _};
use super::*;

const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn jane() -> EmployeeDraft {
    EmployeeDraft {
        full_name: "Jane Doe".into(),
        gender: Gender::Female,
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
        profile_image: None,
        state: "Delhi".into(),
        is_active: true,
    }
}

fn image_error(draft: &EmployeeDraft) -> Option<String> {
    let errors = draft.validate().expect_err("invalid");
    let field_errors = errors.field_errors();
    field_errors
        .get("profile_image")
        .and_then(|errs| errs.first())
        .and_then(|err| err.message.as_ref())
        .map(|msg| msg.to_string())
}

#[test]
fn blank_or_missing_birth_date_deserializes_as_none() {
    for body in [
        r#"{"fullName":"","dateOfBirth":"","state":""}"#,
        r#"{"fullName":"","dateOfBirth":"  ","state":""}"#,
        r#"{"fullName":"","dateOfBirth":null,"state":""}"#,
        r#"{"fullName":"","state":""}"#,
    ] {
        let draft: EmployeeDraft = serde_json::from_str(body).expect(body);
        assert_eq!(draft.date_of_birth, None, "{body}");
    }
}

#[test]
fn birth_date_parses_iso_format_and_rejects_garbage() {
    let draft: EmployeeDraft =
        serde_json::from_str(r#"{"dateOfBirth":"1990-01-01"}"#).expect("draft");
    assert_eq!(draft.date_of_birth, NaiveDate::from_ymd_opt(1990, 1, 1));

    assert!(serde_json::from_str::<EmployeeDraft>(r#"{"dateOfBirth":"01/01/1990"}"#).is_err());
}

#[test]
fn encoded_png_is_a_valid_profile_image() {
    let mut draft = jane();
    draft.profile_image = Some(image::encode_profile_image(&PNG_HEADER).expect("png"));
    assert!(draft.validate().is_ok());
}

#[test]
fn non_image_data_uri_is_rejected() {
    let mut draft = jane();
    draft.profile_image = Some(format!(
        "data:application/pdf;base64,{}",
        STANDARD.encode(b"%PDF-1.7")
    ));
    assert_eq!(
        image_error(&draft).as_deref(),
        Some("Please upload a valid image file (JPEG, PNG, or GIF)")
    );
}

#[test]
fn oversized_image_is_rejected() {
    let mut big = PNG_HEADER.to_vec();
    big.resize(image::MAX_IMAGE_BYTES + 1, 0);
    let mut draft = jane();
    draft.profile_image = Some(format!("data:image/png;base64,{}", STANDARD.encode(&big)));
    assert_eq!(image_error(&draft).as_deref(), Some("Image size should be less than 5MB"));
}
