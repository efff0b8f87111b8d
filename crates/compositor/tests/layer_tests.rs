//! Tests for layer builders and overlay resolution.

use compositor::color_scale::contour_color_scale;
use compositor::layer::{
    build_contour_layer, build_image_layer, build_placeholder_layer, ColorModel, ImageData, Layer,
    LayerKind, PixelBuffer, CONTOUR_LEVEL_END, CONTOUR_LEVEL_START, CONTOUR_LEVEL_STEP,
};
use compositor::resolver::{resolve_overlay, MaskSelection};
use serde_json::json;
use test_utils::{create_label_field_json, fixtures};
use viewer_common::{MaskFormat, MaskType, ViewerError};

const MASK_TYPES: [&str; 3] = [
    fixtures::mask_type::NONE,
    fixtures::mask_type::ORGAN_RESAMPLED,
    fixtures::mask_type::EVALUATION,
];

// ============================================================================
// Builder tests
// ============================================================================

#[test]
fn test_image_layer_keeps_source_and_model() {
    let source = PixelBuffer::from(fixtures::sources::SLICE_PNG);
    match build_image_layer(&source, ColorModel::Rgb) {
        Layer::Image(image) => {
            assert_eq!(image.data, ImageData::Source(source));
            assert_eq!(image.color_model, ColorModel::Rgb);
        }
        other => panic!("Expected image layer, got {}", other.kind()),
    }
}

#[test]
fn test_image_layer_does_not_validate_source() {
    let layer = build_image_layer(&PixelBuffer::from(""), ColorModel::Rgba);
    assert_eq!(layer.kind(), LayerKind::Image);
}

#[test]
fn test_contour_layer_fixed_parameters() {
    let layer = build_contour_layer(fixtures::sources::LABEL_FIELD_JSON, 3.0).unwrap();
    let Layer::Contour(contour) = layer else {
        panic!("Expected contour layer");
    };

    assert_eq!(contour.contours.start, CONTOUR_LEVEL_START);
    assert_eq!(contour.contours.end, CONTOUR_LEVEL_END);
    assert_eq!(contour.contours.size, CONTOUR_LEVEL_STEP);
    assert_eq!(contour.line.width, 3.0);
    assert_eq!(contour.line.smoothing, 0.0);
    assert!(!contour.show_scale);
    assert_eq!(contour.color_scale, contour_color_scale());
    assert_eq!(contour.z.width(), 4);
    assert_eq!(contour.z.height(), 4);
}

#[test]
fn test_contour_layer_json() {
    let layer = build_contour_layer("[[0,1],[1,0]]", 2.0).unwrap();
    let value = serde_json::to_value(&layer).unwrap();

    assert_eq!(value["type"], "contour");
    assert_eq!(value["z"], json!([[0.0, 1.0], [1.0, 0.0]]));
    assert_eq!(
        value["contours"],
        json!({"coloring": "lines", "start": 0.0, "end": 6.0, "size": 0.999})
    );
    assert_eq!(value["line"], json!({"width": 2.0, "smoothing": 0.0}));
    assert_eq!(value["showscale"], false);
    assert_eq!(value["hoverinfo"], "skip");
    assert_eq!(value["colorscale"].as_array().unwrap().len(), 7);
}

#[test]
fn test_contour_layer_malformed_inputs() {
    for bad in [
        fixtures::sources::NOT_A_FIELD,
        fixtures::sources::SLICE_PNG,
        "[[0, \"one\"]]",
        "[1, 2, 3]",
        "",
    ] {
        let err = build_contour_layer(bad, 2.0).unwrap_err();
        assert!(
            matches!(err, ViewerError::MalformedField(_)),
            "{:?} should be malformed",
            bad
        );
    }
}

#[test]
fn test_contour_layer_from_generated_field() {
    let json = create_label_field_json(32, 24, 6);
    let Layer::Contour(contour) = build_contour_layer(&json, 1.0).unwrap() else {
        panic!("Expected contour layer");
    };
    assert_eq!(contour.z.width(), 32);
    assert_eq!(contour.z.height(), 24);
}

#[test]
fn test_placeholder_is_empty_rgb_image() {
    let Layer::Placeholder(image) = build_placeholder_layer() else {
        panic!("Expected placeholder layer");
    };
    assert_eq!(image.data, ImageData::Pixels(Vec::new()));
    assert_eq!(image.color_model, ColorModel::Rgb);
}

#[test]
fn test_every_layer_skips_hover() {
    let layers = [
        build_image_layer(&PixelBuffer::from(fixtures::sources::SLICE_PNG), ColorModel::Rgb),
        build_contour_layer(fixtures::sources::LABEL_FIELD_JSON, 2.0).unwrap(),
        build_placeholder_layer(),
    ];
    for layer in layers {
        let value = serde_json::to_value(&layer).unwrap();
        assert_eq!(value["hoverinfo"], "skip", "{} layer", layer.kind());
    }
}

// ============================================================================
// Resolver tests
// ============================================================================

#[test]
fn test_none_mask_is_placeholder_for_any_format() {
    let source = PixelBuffer::from(fixtures::sources::MASK_PNG);
    for format in [
        fixtures::mask_format::CONTOUR,
        fixtures::mask_format::MASK,
        fixtures::mask_format::UNSUPPORTED,
        "",
    ] {
        for stroke_width in [0.0, 1.0, 5.0] {
            let selection = MaskSelection::parse(fixtures::mask_type::NONE, format).unwrap();
            let layer = resolve_overlay(selection, &source, stroke_width).unwrap();
            assert_eq!(layer.kind(), LayerKind::Placeholder);
        }
    }
}

#[test]
fn test_present_contour_resolves_to_contour() {
    for mask_type in &MASK_TYPES[1..] {
        let selection = MaskSelection::parse(mask_type, fixtures::mask_format::CONTOUR).unwrap();
        let source = PixelBuffer::from(fixtures::sources::LABEL_FIELD_JSON);
        let layer = resolve_overlay(selection, &source, 2.0).unwrap();
        let Layer::Contour(contour) = layer else {
            panic!("Expected contour layer for {}", mask_type);
        };
        assert_eq!(contour.contours.start, 0.0);
        assert_eq!(contour.contours.end, 6.0);
        assert_eq!(contour.contours.size, 0.999);
        assert_eq!(contour.color_scale, contour_color_scale());
    }
}

#[test]
fn test_present_mask_resolves_to_rgba_image() {
    for mask_type in &MASK_TYPES[1..] {
        let selection = MaskSelection::parse(mask_type, fixtures::mask_format::MASK).unwrap();
        let source = PixelBuffer::from(fixtures::sources::MASK_PNG);
        match resolve_overlay(selection, &source, 2.0).unwrap() {
            Layer::Image(image) => {
                assert_eq!(image.color_model, ColorModel::Rgba);
                assert_eq!(image.data, ImageData::Source(source));
            }
            other => panic!("Expected image layer, got {}", other.kind()),
        }
    }
}

#[test]
fn test_present_with_unsupported_format_fails() {
    let err = MaskSelection::parse(
        fixtures::mask_type::ORGAN_RESAMPLED,
        fixtures::mask_format::UNSUPPORTED,
    )
    .unwrap_err();
    assert!(matches!(err, ViewerError::UnsupportedMaskFormat(ref f) if f == "main_page_checkerboard"));
}

#[test]
fn test_unknown_mask_type_fails() {
    let err = MaskSelection::parse("main_page_body_mask", fixtures::mask_format::CONTOUR).unwrap_err();
    assert!(matches!(err, ViewerError::UnsupportedMaskType(_)));
}

#[test]
fn test_selection_from_typed_values() {
    assert_eq!(
        MaskSelection::new(MaskType::None, MaskFormat::Contour),
        MaskSelection::Hidden
    );
    assert_eq!(
        MaskSelection::new(MaskType::Evaluation, MaskFormat::Contour),
        MaskSelection::Contour(MaskType::Evaluation)
    );
    assert_eq!(
        MaskSelection::new(MaskType::OrganResampled, MaskFormat::FilledMask).mask_type(),
        MaskType::OrganResampled
    );
}
