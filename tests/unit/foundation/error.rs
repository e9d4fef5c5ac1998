use super::*;

#[test]
fn display_prefixes_taxonomy() {
    assert_eq!(
        CometError::validation("x").to_string(),
        "validation error: x"
    );
    assert_eq!(CometError::channel("x").to_string(), "channel error: x");
    assert_eq!(CometError::media("x").to_string(), "media error: x");
}

#[test]
fn wraps_anyhow_transparently() {
    let err = CometError::from(anyhow::anyhow!("boom"));
    assert_eq!(err.to_string(), "boom");
}
