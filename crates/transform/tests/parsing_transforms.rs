//! Integration tests for parsing CSS transform lists.
//!
//! Covers:
//! - Every recognized function, in its 2D and 3D forms
//! - Compound lists and whitespace handling
//! - Case-insensitive function names and units
//! - Rejected input

use css_values::{LengthUnit, LengthValue};
use insta::assert_snapshot;
use transform::{
    Component, Matrix, Perspective, Rotation, Scale, Skew, SyntaxError, TransformComponent,
    TransformValue, Translation, TypedOmError,
};

fn parse(input: &str) -> TransformValue {
    TransformValue::parse(input).unwrap_or_else(|| panic!("failed to parse {input:?}"))
}

fn single(input: &str) -> Component {
    let value = parse(input);
    assert_eq!(value.components().len(), 1, "{input:?}");
    value.components()[0].clone()
}

// ============================================================================
// SINGLE COMPONENTS
// ============================================================================

#[test]
fn test_parse_matrix() {
    assert_eq!(
        single("matrix(1, 2, 3, 4, 5, 6)"),
        Component::from(Matrix::new_2d(1.0, 2.0, 3.0, 4.0, 5.0, 6.0))
    );
}

#[test]
fn test_parse_matrix3d() {
    let component = single("matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 5, 6, 7, 1)");
    let mut values = [0.0; 16];
    for (i, v) in values.iter_mut().enumerate() {
        *v = if i % 5 == 0 { 1.0 } else { 0.0 };
    }
    values[12] = 5.0;
    values[13] = 6.0;
    values[14] = 7.0;
    assert_eq!(component, Component::from(Matrix::new_3d(values)));
    assert!(!component.is_planar());
}

#[test]
fn test_parse_perspective() {
    assert_eq!(
        single("perspective(10px)"),
        Component::from(Perspective::new(LengthValue::px(10.0)).unwrap())
    );
    assert_eq!(
        single("perspective(2in)"),
        Component::from(Perspective::new(LengthValue::new(2.0, LengthUnit::In)).unwrap())
    );
}

#[test]
fn test_parse_rotate() {
    assert_eq!(single("rotate(45deg)"), Component::from(Rotation::new(45.0)));
    assert_eq!(single("rotate(-2.5deg)"), Component::from(Rotation::new(-2.5)));
}

#[test]
fn test_parse_rotate3d_moves_angle_first() {
    assert_eq!(
        single("rotate3d(1, 2, 3, 30deg)"),
        Component::from(Rotation::new_3d(30.0, 1.0, 2.0, 3.0))
    );
}

#[test]
fn test_parse_scale() {
    assert_eq!(single("scale(2, -1)"), Component::from(Scale::new(2.0, -1.0)));
    assert_eq!(
        single("scale3d(3, 2, 0.5)"),
        Component::from(Scale::new_3d(3.0, 2.0, 0.5))
    );
}

#[test]
fn test_parse_skew() {
    assert_eq!(single("skew(30, 60)"), Component::from(Skew::new(30.0, 60.0)));
}

#[test]
fn test_parse_translate() {
    assert_eq!(
        single("translate(3px, 4px)"),
        Component::from(Translation::new(LengthValue::px(3.0), LengthValue::px(4.0)).unwrap())
    );
    assert_eq!(
        single("translate3d(1in, 0px, 2pc)"),
        Component::from(
            Translation::new_3d(
                LengthValue::new(1.0, LengthUnit::In),
                LengthValue::px(0.0),
                LengthValue::new(2.0, LengthUnit::Pc),
            )
            .unwrap()
        )
    );
}

#[test]
fn test_parsed_value_matches_constructed_value() {
    let parsed = parse("scale(2, -1)");
    let built = TransformValue::new(vec![Scale::new(2.0, -1.0).into()]).unwrap();
    assert_eq!(parsed, built);
    assert_eq!(parsed.as_matrix(), built.as_matrix());
}

// ============================================================================
// COMPOUND LISTS
// ============================================================================

#[test]
fn test_compound_list_keeps_order() {
    let value = parse("matrix(1,2,3,4,5,6) scale(2,-1) rotate(90deg)");
    let kinds: Vec<String> = value.iter().map(|c| c.kind().to_string()).collect();
    assert_eq!(kinds, vec!["matrix", "scale", "rotation"]);
    assert!(value.is_planar());
}

#[test]
fn test_compound_list_matrix_is_product() {
    let value = parse("scale(2, -1) rotate3d(0, 0, 1, 90deg)");
    let expected = Scale::new(2.0, -1.0)
        .matrix()
        .multiply(&Rotation::new_3d(90.0, 0.0, 0.0, 1.0).matrix());
    assert_eq!(value.as_matrix(), &expected);
    assert!(!value.is_planar());
}

#[test]
fn test_functions_without_separating_space() {
    assert_eq!(
        parse("matrix(1,2,3,4,5,6)scale(2,-1)"),
        parse("matrix(1,2,3,4,5,6) scale(2,-1)")
    );
}

#[test]
fn test_canonical_text_of_parsed_lists() {
    assert_snapshot!(
        parse("matrix(1,2,3,4,5,6) scale(2,-1)").canonical_text(),
        @"matrix(1, 2, 3, 4, 5, 6) scale(2, -1)"
    );
    assert_snapshot!(
        parse("  rotate3d(1,2,3,30deg)   translate( 1px , 2px ) ").canonical_text(),
        @"rotate3d(1, 2, 3, 30deg) translate(1px, 2px)"
    );
    assert_snapshot!(
        parse("perspective(10px) skew(45, 0) scale3d(1e3, .5, -0)").canonical_text(),
        @"perspective(10px) skew(45, 0) scale3d(1000, 0.5, 0)"
    );
}

#[test]
fn test_canonical_text_reparses_to_same_value() {
    let inputs = [
        "matrix(1,2,3,4,5,6) scale(2,-1)",
        "rotate( 45deg ) skew(10, 20)",
        "translate3d(1in, 0px, 2pc) perspective(100px)",
    ];
    for input in inputs {
        let value = parse(input);
        assert_eq!(parse(value.canonical_text()), value, "{input:?}");
    }
}

// ============================================================================
// WHITESPACE AND CASE
// ============================================================================

#[test]
fn test_whitespace_inside_arguments() {
    assert_eq!(
        parse("translate( 1px , 1px )"),
        parse("translate(1px,1px)")
    );
    assert_eq!(parse("rotate( 45deg )"), parse("rotate(45deg)"));
    assert_eq!(parse("scale(1,\n2)"), parse("scale(1, 2)"));
}

#[test]
fn test_whitespace_around_list() {
    assert_eq!(parse("\t scale(1, 2)\n"), parse("scale(1, 2)"));
    assert_eq!(
        parse("scale(1, 2)\n\nskew(3, 4)"),
        parse("scale(1, 2) skew(3, 4)")
    );
}

#[test]
fn test_names_and_units_are_case_insensitive() {
    assert_eq!(parse("SCALE(2, 2)"), parse("scale(2, 2)"));
    assert_eq!(parse("Rotate3D(0, 0, 1, 45DEG)"), parse("rotate3d(0, 0, 1, 45deg)"));
    assert_eq!(parse("translate(1PX, 2Px)"), parse("translate(1px, 2px)"));
}

// ============================================================================
// REJECTED INPUT
// ============================================================================

#[test]
fn test_invalid_inputs_are_rejected() {
    let inputs = [
        "",
        "   ",
        "5px",
        "100",
        "calc(5)",
        "scale",
        "scale()",
        "scale(1)",
        "scale(1, 2, 3, 4)",
        "scale(1 2)",
        "scale(1,,2)",
        "scale(1px, 2px)",
        "scale(1, 2) garbage",
        "matrix(1, 2, 3, 4, 5)",
        "matrix3d(0, 1, 2, 3, 4, 5)",
        "rotate(45)",
        "rotate(45 deg)",
        "rotate(45rad)",
        "rotate(1, 2, 3, 0deg)",
        "rotate3d(1,2,3,0)",
        "rotatex(1deg)",
        "skewx(10)",
        "translate(1, 2)",
        "translate(1em, 1em)",
        "translate(50%, 0px)",
        "perspective(-1px)",
        "perspective(10vw)",
        "foo scale(1, 1)",
    ];
    for input in inputs {
        assert!(
            TransformValue::parse(input).is_none(),
            "expected {input:?} to be rejected"
        );
    }
}

#[test]
fn test_overflowing_numbers_are_rejected() {
    assert!(TransformValue::parse("scale(1e400, 1)").is_none());
    assert!(TransformValue::parse("scale(1e400, 1) scale(0, 1)").is_none());
    assert!(TransformValue::parse("translate(-1e400px, 0px)").is_none());
    assert!(TransformValue::parse("rotate(1e400deg)").is_none());

    let large = parse("scale(1e300, 1)");
    assert!(large.as_matrix().is_finite());
    assert_eq!(parse(large.canonical_text()), large);
}

#[test]
fn test_one_bad_component_rejects_the_list() {
    assert!(TransformValue::parse("scale(1, 2) rotate(45)").is_none());
    assert!(TransformValue::parse("rotate(45deg) scale(1)").is_none());
}

#[test]
fn test_from_str_reports_reason() {
    let err = "".parse::<TransformValue>().unwrap_err();
    assert_eq!(err, TypedOmError::Syntax(SyntaxError::Empty));

    let err = "calc(5)".parse::<TransformValue>().unwrap_err();
    assert_eq!(
        err,
        TypedOmError::Syntax(SyntaxError::LeadingText("calc(5)".to_string()))
    );

    let err = "rotate(45)".parse::<TransformValue>().unwrap_err();
    assert_snapshot!(
        err.to_string(),
        @"invalid transform syntax: rotate(45) is missing the angle unit"
    );

    let err = "perspective(-1px)".parse::<TransformValue>().unwrap_err();
    assert_snapshot!(
        err.to_string(),
        @"invalid transform syntax: perspective: perspective cannot use negative length -1px"
    );
}
