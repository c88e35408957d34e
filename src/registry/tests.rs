use super::*;

fn contact(name: &str, number: &str) -> ContactEntry {
    ContactEntry {
        name: name.to_string(),
        phone_number: number.to_string(),
    }
}

#[test]
fn test_default_registry_is_valid() {
    let built = CommandRegistry::new(default_commands(), default_contacts()).unwrap();
    let default = CommandRegistry::default();

    assert_eq!(built.all_commands(), default.all_commands());
    assert_eq!(built.contacts(), default.contacts());
    assert_eq!(default.all_commands().len(), 9);
    assert_eq!(default.all_commands()[0].phrase, "gmail");
}

#[test]
fn test_resolve_contact_is_case_normalized() {
    let registry = CommandRegistry::default();

    assert_eq!(registry.resolve_contact("safi"), Some("7992217849"));
    assert_eq!(registry.resolve_contact("  SAFI "), Some("7992217849"));
    assert_eq!(registry.resolve_contact("bob"), None);
    assert_eq!(registry.resolve_contact(""), None);
}

#[test]
fn test_phrases_are_normalized() {
    let registry = CommandRegistry::new(
        vec![CommandEntry::new("  Open   Mail ", "https://mail.example.com")],
        Vec::new(),
    )
    .unwrap();

    assert_eq!(registry.all_commands()[0].phrase, "open mail");
}

#[test]
fn test_duplicate_phrase_rejected() {
    let err = CommandRegistry::new(
        vec![
            CommandEntry::new("gmail", "https://gmail.com"),
            CommandEntry::new("GMail", "https://mail.google.com"),
        ],
        Vec::new(),
    )
    .unwrap_err();

    assert_eq!(err, RegistryError::DuplicatePhrase("gmail".to_string()));
}

#[test]
fn test_empty_phrase_rejected() {
    let err = CommandRegistry::new(vec![CommandEntry::new("   ", "https://x.com")], Vec::new())
        .unwrap_err();
    assert_eq!(err, RegistryError::EmptyPhrase);
}

#[test]
fn test_duplicate_contact_rejected() {
    let err = CommandRegistry::new(
        Vec::new(),
        vec![contact("safi", "123"), contact("Safi", "456")],
    )
    .unwrap_err();

    assert_eq!(err, RegistryError::DuplicateContact("safi".to_string()));
}

#[test]
fn test_non_digit_phone_number_rejected() {
    let err = CommandRegistry::new(Vec::new(), vec![contact("bob", "555-1234")]).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidPhoneNumber { .. }));

    let err = CommandRegistry::new(Vec::new(), vec![contact("bob", "")]).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidPhoneNumber { .. }));
}

#[test]
fn test_targets_classified_from_url() {
    let registry = CommandRegistry::default();
    let by_phrase = |p: &str| {
        registry
            .all_commands()
            .iter()
            .find(|e| e.phrase == p)
            .map(|e| e.target.clone())
            .unwrap()
    };

    assert_eq!(by_phrase("gmail"), ActionSpec::open_url("https://gmail.com"));
    assert_eq!(by_phrase("instagram"), ActionSpec::app_scheme("instagram://app"));
    assert_eq!(
        by_phrase("whatsapp"),
        ActionSpec::app_scheme("whatsapp://send?text=Hello%20World")
    );
}

#[test]
fn test_action_spec_serializes_with_kind_tag() {
    let json = serde_json::to_value(ActionSpec::dial("7992217849")).unwrap();
    assert_eq!(json["kind"], "dial_number");
    assert_eq!(json["phone_number"], "7992217849");

    let json = serde_json::to_value(ActionSpec::app_scheme("whatsapp://send")).unwrap();
    assert_eq!(json["kind"], "open_app_scheme");
    assert!(json.get("fallback_url").is_none());
}
