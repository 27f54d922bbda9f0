use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FrameshowError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FrameshowError::rasterization("x")
            .to_string()
            .contains("rasterization error:")
    );
    assert!(FrameshowError::host("x").to_string().contains("host error:"));
    assert!(
        FrameshowError::link_resolution("x")
            .to_string()
            .contains("link resolution error:")
    );
    assert!(
        FrameshowError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FrameshowError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
