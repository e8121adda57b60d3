use anyhow::Result;
use fsinspect::{format_byte_size, format_size, NullSink, SizeLabel};
use std::env;
use std::fs;

#[test]
fn test_label_tracks_a_real_file() -> Result<()> {
    let test_file = env::temp_dir().join("fsinspect_integration.bin");

    // Clean up any existing file
    let _ = fs::remove_file(&test_file);

    fs::write(&test_file, vec![0u8; 6144])?;
    let size = fs::metadata(&test_file)?.len() as i64;
    assert_eq!(size, 6144);

    let mut label = SizeLabel::with_sink(Box::new(NullSink));
    label.set_value(size, "Size: ");

    assert_eq!(label.text(), "Size: 6.0 kB");
    assert_eq!(label.text(), format!("Size: {}", format_size(size)));
    assert!(label.have_context_menu());
    assert_eq!(format_byte_size(size), "6,144 Bytes");

    fs::remove_file(&test_file)?;
    Ok(())
}

#[test]
fn test_label_lifecycle() -> Result<()> {
    let mut label = SizeLabel::with_sink(Box::new(NullSink));

    // Numeric entry point
    label.set_value(2048, "Size: ");
    assert_eq!(label.text(), "Size: 2.0 kB");
    assert!(label.have_context_menu());

    // Literal-text entry point clears any override and bypasses the formatter
    label.set_context_text("will be dropped");
    label.set_text("2.0 kB / 2 links", 2048, "");
    assert_eq!(label.text(), "2.0 kB / 2 links");
    assert_eq!(label.context_text(), "");
    assert!(label.have_context_menu());

    // Override re-enables the popup even for tiny values
    label.set_value(500, "");
    assert!(!label.have_context_menu());
    label.set_context_text("500 Bytes on disk");
    assert!(label.have_context_menu());

    // Clear returns to the all-empty state
    label.clear();
    assert_eq!(label.value(), fsinspect::widgets::size_label::UNSET);
    assert_eq!(label.text(), "");
    assert_eq!(label.prefix(), "");
    assert_eq!(label.context_text(), "");
    assert!(!label.have_context_menu());

    Ok(())
}

#[test]
fn test_unset_value_shows_nothing() -> Result<()> {
    let mut label = SizeLabel::with_sink(Box::new(NullSink));

    label.set_value(-1, "Size: ");
    assert_eq!(label.text(), "");
    assert!(!label.have_context_menu());

    // A custom context text still enables the popup for an unset value
    label.set_context_text("size unknown");
    assert!(label.have_context_menu());

    Ok(())
}
