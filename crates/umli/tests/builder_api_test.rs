//! Integration tests for the DiagramBuilder API
//!
//! These tests drive scripts through parsing, layout and rendering.

use umli::{
    DiagramBuilder, UmliError,
    config::{AppConfig, LayoutConfig, StyleConfig},
    layout,
};

const CONVERSATION: &str = "
title Facility editing
life A  SL App
life B  Core Permissions API
life C  SL Admin API | edit_facilities | endpoint

full AC  edit_facilities( | payload, user_token)
full CB  get_user_permissions( | token)
dash BC  permissions_list
stop B
self C   [has EDIT_FACILITIES permission] | store changes etc
dash CA  status_ok, payload
self C   [no permission]
dash CA  status_not_authorized
";

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_render_conversation() {
    let builder = DiagramBuilder::default();
    let model = builder.parse(CONVERSATION).expect("Failed to parse script");
    assert_eq!(model.statements().len(), 12);

    let diagram = builder.create(&model).expect("Failed to lay out diagram");
    assert_eq!(diagram.width, 2000.0);
    assert!(diagram.height > 0.0);

    let svg = builder.render_svg(&diagram).expect("Failed to render diagram");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("Facility editing"));
    assert!(svg.contains("stroke-dasharray"));
}

#[test]
fn test_build_svg_in_one_step() {
    let builder = DiagramBuilder::default();
    let svg = builder
        .build_svg("life A Client\nlife B Server\nfull AB ping\n")
        .expect("Failed to build");
    assert!(svg.contains("ping"));
}

#[test]
fn test_every_interaction_draws_its_label() {
    let builder = DiagramBuilder::default();
    let model = builder.parse(CONVERSATION).unwrap();
    let diagram = builder.create(&model).unwrap();

    let texts: Vec<&str> = diagram
        .primitives
        .labels()
        .iter()
        .map(|label| label.text.as_str())
        .collect();
    for expected in [
        "edit_facilities(",
        "payload, user_token)",
        "permissions_list",
        "store changes etc",
        "status_not_authorized",
    ] {
        assert!(texts.contains(&expected), "missing label {expected}");
    }
}

#[test]
fn test_parse_errors_keep_the_source() {
    let source = "life A Client\nfull AZ hello\n";
    let err = DiagramBuilder::default().parse(source).unwrap_err();

    match err {
        UmliError::Parse { err, src } => {
            assert_eq!(src, source);
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_stop_without_activity_is_a_layout_error() {
    let builder = DiagramBuilder::default();
    let model = builder.parse("life A Client\nstop A\n").unwrap();
    let err = builder.create(&model).unwrap_err();
    assert!(matches!(
        err,
        UmliError::Layout(layout::Error::TerminateWithoutStart { .. })
    ));
}

#[test]
fn test_configuration_reaches_layout_and_rendering() {
    let config = AppConfig::new(
        LayoutConfig::new(5.0, false),
        StyleConfig::default().with_output_width(1000.0),
    );
    let builder = DiagramBuilder::new(config);
    let model = builder.parse("life A Client\nlife B Server\n").unwrap();
    let diagram = builder.create(&model).unwrap();

    assert_eq!(diagram.font_height, 10.0);
    assert_eq!(diagram.primitives.labels().len(), 2);

    let svg = builder.render_svg(&diagram).unwrap();
    assert!(svg.contains(r#"width="1000""#));
}

#[test]
fn test_script_directives_beat_configuration() {
    let builder = DiagramBuilder::new(AppConfig::new(
        LayoutConfig::new(5.0, false),
        StyleConfig::default(),
    ));
    let model = builder
        .parse("textsize 20\nshowletters true\nlife A Client\n")
        .unwrap();
    let diagram = builder.create(&model).unwrap();

    assert_eq!(diagram.font_height, 40.0);
    assert_eq!(diagram.primitives.labels().len(), 3);
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();
    let first = builder.build_svg("life A One\n").expect("first");
    let second = builder.build_svg("life A One\nlife B Two\n").expect("second");
    assert_ne!(first, second);
}
