use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StonkError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StonkError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(StonkError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StonkError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
