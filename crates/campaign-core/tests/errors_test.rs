use campaign_core::errors::*;

#[test]
fn duplicate_event_carries_id() {
    let err: CampaignError = GraphError::DuplicateEvent { id: 42 }.into();
    assert!(err.to_string().contains("42"));
}

#[test]
fn invalid_value_carries_field_and_reason() {
    let err = ConfigError::InvalidValue {
        field: "redirect.max_depth".into(),
        reason: "must be at least 1".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("redirect.max_depth"));
    assert!(msg.contains("at least 1"));
}
