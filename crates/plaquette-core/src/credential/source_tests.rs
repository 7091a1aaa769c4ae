//! Tests for credential sources

use super::*;

#[test]
fn test_all_is_in_priority_order() {
    let all = CredentialSource::all();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], CredentialSource::Property);
    assert_eq!(all[1], CredentialSource::Environment);
    assert_eq!(all[2], CredentialSource::File);

    for pair in all.windows(2) {
        assert!(pair[0].rank() > pair[1].rank());
    }
}

#[test]
fn test_source_names() {
    assert_eq!(CredentialSource::Property.name(), "properties");
    assert_eq!(
        CredentialSource::Environment.to_string(),
        "environment variables"
    );
    assert_eq!(format!("{}", CredentialSource::File), "file");
}

#[test]
fn test_source_serialization() {
    let rendered = toml::to_string(&std::collections::BTreeMap::from([(
        "winner",
        CredentialSource::Environment,
    )]))
    .unwrap();
    assert_eq!(rendered.trim(), "winner = \"environment\"");
}
