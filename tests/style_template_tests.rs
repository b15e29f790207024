use imageprompt::style_template::resolve;
use imageprompt::Style;

#[test]
fn test_known_styles_resolve_verbatim() {
    assert_eq!(resolve("detailed"), Style::Detailed.instruction());
    assert_eq!(resolve("midjourney"), Style::Midjourney.instruction());
    assert_eq!(resolve("dalle"), Style::Dalle.instruction());

    assert!(resolve("midjourney").contains("--ar [aspect ratio] --v 6"));
    assert!(resolve("dalle")
        .starts_with("Analyze this image and create a detailed DALL-E style prompt"));
    assert!(resolve("detailed").starts_with(
        "Analyze this image and generate a detailed, cinematic, professional prompt"
    ));
}

#[test]
fn test_unknown_styles_fall_back_to_detailed() {
    for style_id in ["", " ", "detailed ", "stable-diffusion", "DALLE", "midjourney\n"] {
        assert_eq!(
            resolve(style_id),
            Style::Detailed.instruction(),
            "style id {:?}",
            style_id
        );
    }
    assert_eq!(Style::default(), Style::DEFAULT);
}

#[test]
fn test_instructions_are_distinct() {
    let instructions: Vec<&str> = Style::ALL.iter().map(|s| s.instruction()).collect();
    for (i, a) in instructions.iter().enumerate() {
        for b in &instructions[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_parse_and_display() {
    let style: Style = "midjourney".parse().unwrap();
    assert_eq!(style, Style::Midjourney);
    assert_eq!(style.to_string(), "midjourney");

    let fallback: Style = "whatever".parse().unwrap();
    assert_eq!(fallback, Style::Detailed);
}
