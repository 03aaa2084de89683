//! JSON contract of the TechStacks DTOs.

use servicestack_client::json::{from_json, to_json};
use techstacks::{FindTechnologies, GetTechnology, QueryRequest, TechnologyTier, TierOption};

#[test]
fn test_empty_tier_option_serializes_to_empty_object() {
    assert_eq!(to_json(&TierOption::new()).unwrap(), "{}");
}

#[test]
fn test_empty_tier_option_deserializes_unset() {
    for json in ["{}", r#"{"name":null,"title":null,"value":null}"#] {
        let option: TierOption = from_json(json).unwrap();
        assert!(option.name.is_none());
        assert!(option.title.is_none());
        assert!(option.value.is_none());
    }
}

#[test]
fn test_full_tier_option_serializes_value_by_name() {
    let option = TierOption::new()
        .with_name("name")
        .with_title("title")
        .with_value(TechnologyTier::ProgrammingLanguage);

    let json = to_json(&option).unwrap();
    assert_eq!(
        json,
        r#"{"name":"name","title":"title","value":"ProgrammingLanguage"}"#
    );

    let back: TierOption = from_json(&json).unwrap();
    assert_eq!(back.name.as_deref(), Some("name"));
    assert_eq!(back.title.as_deref(), Some("title"));
    assert_eq!(back.value, Some(TechnologyTier::ProgrammingLanguage));
}

#[test]
fn test_unknown_tier_name_reads_as_unset() {
    let option: TierOption = from_json(r#"{"name":"Mainframe","value":"Mainframe"}"#).unwrap();
    assert_eq!(option.name.as_deref(), Some("Mainframe"));
    assert!(option.value.is_none());

    assert!(from_json::<TechnologyTier>(r#""Mainframe""#).is_err());
}

#[test]
fn test_request_dtos_serialize_pascal_case() {
    let request = GetTechnology::new().with_slug("servicestack");
    assert_eq!(to_json(&request).unwrap(), r#"{"Slug":"servicestack"}"#);

    let request = FindTechnologies::new()
        .with_skip(10)
        .with_take(5)
        .with_vendor_name("Redis Labs");
    assert_eq!(
        to_json(&request).unwrap(),
        r#"{"Skip":10,"Take":5,"VendorName":"Redis Labs"}"#
    );
}

#[test]
fn test_request_dtos_read_back_flattened_paging() {
    let request: FindTechnologies =
        from_json(r#"{"Take":5,"DescriptionContains":"framework"}"#).unwrap();
    assert_eq!(request.query.take, Some(5));
    assert_eq!(request.description_contains.as_deref(), Some("framework"));
    assert!(request.name.is_none());
}
