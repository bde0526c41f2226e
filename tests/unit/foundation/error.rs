use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SettleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SettleError::parse("x").to_string().contains("parse error:"));
    assert!(
        SettleError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        SettleError::runtime("x")
            .to_string()
            .contains("runtime error:")
    );
    assert_eq!(SettleError::Cancelled.to_string(), "completion cancelled");
}

#[test]
fn only_cancelled_reports_cancelled() {
    assert!(SettleError::Cancelled.is_cancelled());
    assert!(!SettleError::parse("x").is_cancelled());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SettleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
