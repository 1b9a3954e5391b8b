//! Behavioural tests for the public validation API.

use std::sync::Once;

use chrono::NaiveDate;
use dataid::{
    check_code, check_email, check_identity_card, check_phone_number, check_plate_number,
    convert_15_to_18, gender_by_id_card, province_by_id_card, Config, DataIdError, Gender, IdCard,
    IdentifierKind, Validator,
};
use proptest::prelude::*;
use rstest::rstest;

static INIT_TRACING: Once = Once::new();

fn init_tracing() {
    INIT_TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn validator() -> Validator {
    init_tracing();
    Validator::with_config(
        Config::default().with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
    )
}

#[test]
fn test_known_valid_card() {
    let v = validator();
    assert!(v.check_identity_card("11010519491231002X").unwrap());
    assert!(!v.check_identity_card("11010519491231003X").unwrap());
    assert_eq!(v.birth_by_id_card("11010519491231002X").unwrap(), "1949-12-31");
    assert_eq!(v.gender_by_id_card("11010519491231002X").unwrap(), 0);
    assert_eq!(v.province_by_id_card("11010519491231002X").unwrap(), "北京");
}

#[test]
fn test_free_functions_use_system_clock() {
    assert!(check_identity_card("11010519491231002X").unwrap());
    assert_eq!(province_by_id_card("65010219800315081X").unwrap(), "新疆");
    assert_eq!(gender_by_id_card("440304199001011233").unwrap(), 1);
    assert_eq!(
        convert_15_to_18("110105491231002").unwrap(),
        "11010519491231002X"
    );
}

#[rstest]
#[case::identity_card(IdentifierKind::IdCard)]
#[case::phone(IdentifierKind::Phone)]
#[case::email(IdentifierKind::Email)]
#[case::plate(IdentifierKind::Plate)]
fn test_empty_is_invalid_argument(#[case] kind: IdentifierKind) {
    let v = validator();
    for input in ["", " ", "\t\n"] {
        let err = v.check(kind, input).unwrap_err();
        assert!(err.is_invalid_argument(), "{kind}: {err}");
    }
}

#[rstest]
fn test_extraction_rejects_empty_and_invalid(
    #[values("", "   ")] empty: &str,
    #[values("11010519491231003X", "110105", "990105194912310023")] invalid: &str,
) {
    let v = validator();
    let empty_results = [
        v.birth_by_id_card(empty).map(|_| ()),
        v.province_by_id_card(empty).map(|_| ()),
        v.convert_15_to_18(empty).map(|_| ()),
        v.age_by_id_card(empty).map(|_| ()),
        v.gender_by_id_card(empty).map(|_| ()),
    ];
    for result in empty_results {
        assert!(result.unwrap_err().is_invalid_argument());
    }

    let invalid_results = [
        v.birth_by_id_card(invalid).map(|_| ()),
        v.province_by_id_card(invalid).map(|_| ()),
        v.convert_15_to_18(invalid).map(|_| ()),
        v.age_by_id_card(invalid).map(|_| ()),
        v.gender_by_id_card(invalid).map(|_| ()),
    ];
    for result in invalid_results {
        assert!(matches!(
            result.unwrap_err(),
            DataIdError::InvalidIdentifier(_)
        ));
    }
}

#[test]
fn test_convert_already_modern_is_invalid_argument() {
    let v = validator();
    let err = v.convert_15_to_18("11010519491231002X").unwrap_err();
    assert!(err.is_invalid_argument());
}

#[rstest]
#[case("13800138000", true)]
#[case("19812345678", true)]
#[case("12345678901", false)]
#[case("1380013800", false)]
#[case("+8613800138000", false)]
fn test_phone(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(check_phone_number(input).unwrap(), expected);
}

#[rstest]
#[case("a.b-c@sub.example.com", true)]
#[case("john.doe@example.org", true)]
#[case("not-an-email", false)]
#[case("john@localhost", false)]
#[case("john@@example.com", false)]
fn test_email(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(check_email(input).unwrap(), expected);
}

#[rstest]
#[case("京A12345", true)]
#[case(" 京A 123 45 ", true)]
#[case("沪AD12345", true)]
#[case("粤B12345F", true)]
#[case("川A1234警", true)]
#[case("ZZ99999", false)]
#[case("京A1234", false)]
#[case("京ADI1234", false)]
fn test_plate(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(check_plate_number(input).unwrap(), expected);
}

#[test]
fn test_parsed_card_accessors() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let card = IdCard::parse_at("65010219800315081X", today).unwrap();
    assert_eq!(card.province(), "新疆");
    assert_eq!(card.gender(), Gender::Male);
    assert_eq!(card.age_at(today).unwrap(), 44);
    assert_eq!(card.masked(), "650102********081X");
}

fn legacy_card() -> impl Strategy<Value = String> {
    let provinces: Vec<&'static str> = dataid::province::provinces().map(|(c, _)| c).collect();
    (
        prop::sample::select(provinces),
        0u32..10_000,
        0u32..100,
        1u32..=12,
        1u32..=28,
        0u32..1_000,
    )
        .prop_map(|(province, area, yy, mm, dd, seq)| {
            format!("{province}{area:04}{yy:02}{mm:02}{dd:02}{seq:03}")
        })
}

proptest! {
    #[test]
    fn prop_convert_15_to_18_is_valid(number in legacy_card()) {
        let v = validator();
        prop_assert!(v.check_identity_card(&number).unwrap());

        let converted = v.convert_15_to_18(&number).unwrap();
        prop_assert_eq!(converted.len(), 18);
        prop_assert_eq!(&converted[6..8], "19");
        prop_assert!(v.check_identity_card(&converted).unwrap());
        prop_assert_eq!(
            v.birth_by_id_card(&converted).unwrap(),
            v.birth_by_id_card(&number).unwrap()
        );
        prop_assert_eq!(
            v.gender_by_id_card(&converted).unwrap(),
            v.gender_by_id_card(&number).unwrap()
        );
        prop_assert!(v.convert_15_to_18(&converted).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn prop_wrong_check_char_is_invalid(number in legacy_card(), wrong in "[0-9X]") {
        let v = validator();
        let modern = v.convert_15_to_18(&number).unwrap();
        let expected = check_code(&modern[..17]).unwrap();
        let wrong = wrong.chars().next().unwrap();
        prop_assume!(wrong != expected);

        let tampered = format!("{}{}", &modern[..17], wrong);
        prop_assert!(!v.check_identity_card(&tampered).unwrap());
    }
}
