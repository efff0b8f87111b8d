//! Tests for viewport figure composition.

use compositor::figure::{
    compose_dual, compose_viewport, figure_layout, Figure, ViewportSources,
};
use compositor::layer::{ColorModel, Layer, LayerKind, PixelBuffer};
use compositor::resolver::MaskSelection;
use serde_json::json;
use test_utils::fixtures;
use viewer_common::{MaskFormat, MaskType, ViewerError, ViewportRole};

fn slice() -> PixelBuffer {
    PixelBuffer::from(fixtures::sources::SLICE_PNG)
}

fn mask() -> PixelBuffer {
    PixelBuffer::from(fixtures::sources::MASK_PNG)
}

fn field() -> PixelBuffer {
    PixelBuffer::from(fixtures::sources::LABEL_FIELD_JSON)
}

fn ready(figure: Figure) -> compositor::ViewportFigure {
    match figure {
        Figure::Ready(figure) => figure,
        Figure::NotReady => panic!("Expected a ready figure"),
    }
}

// ============================================================================
// Readiness tests
// ============================================================================

#[test]
fn test_missing_primary_is_not_ready() {
    for support in [None, Some(mask())] {
        let figure = compose_viewport(
            None,
            support.as_ref(),
            MaskSelection::Filled(MaskType::Evaluation),
            fixtures::DEFAULT_LINE_WIDTH,
            ViewportRole::Main,
        )
        .unwrap();
        assert_eq!(figure, Figure::NotReady);
        assert_eq!(serde_json::to_value(&figure).unwrap(), json!({}));
    }
}

#[test]
fn test_not_ready_skips_overlay_validation() {
    // A malformed contour field is not inspected until both sources exist.
    let figure = compose_viewport(
        None,
        Some(&PixelBuffer::from(fixtures::sources::NOT_A_FIELD)),
        MaskSelection::Contour(MaskType::OrganResampled),
        fixtures::DEFAULT_LINE_WIDTH,
        ViewportRole::Support,
    )
    .unwrap();
    assert!(!figure.is_ready());
}

// ============================================================================
// Layer order tests
// ============================================================================

#[test]
fn test_primary_is_rgb_slice_image() {
    let figure = ready(
        compose_viewport(
            Some(&slice()),
            Some(&mask()),
            MaskSelection::Filled(MaskType::OrganResampled),
            fixtures::DEFAULT_LINE_WIDTH,
            ViewportRole::Main,
        )
        .unwrap(),
    );

    let Layer::Image(primary) = &figure.primary else {
        panic!("Primary layer must be an image");
    };
    assert_eq!(primary.color_model, ColorModel::Rgb);
    assert_eq!(figure.overlay.kind(), LayerKind::Image);
    assert_eq!(figure.role, ViewportRole::Main);
}

#[test]
fn test_figure_always_has_two_layers() {
    let selections = [
        (MaskSelection::Hidden, mask()),
        (MaskSelection::Contour(MaskType::Evaluation), field()),
        (MaskSelection::Filled(MaskType::Evaluation), mask()),
    ];
    for (selection, support) in selections {
        let figure = compose_viewport(
            Some(&slice()),
            Some(&support),
            selection,
            fixtures::DEFAULT_LINE_WIDTH,
            ViewportRole::Support,
        )
        .unwrap();
        let value = serde_json::to_value(&figure).unwrap();
        assert_eq!(value["data"].as_array().unwrap().len(), 2, "{:?}", selection);
        assert_eq!(value["data"][0]["type"], "image");
        assert_eq!(value["data"][0]["colormodel"], "rgb");
    }
}

#[test]
fn test_layers_accessor_order() {
    let figure = ready(
        compose_viewport(
            Some(&slice()),
            Some(&field()),
            MaskSelection::Contour(MaskType::OrganResampled),
            1.0,
            ViewportRole::Main,
        )
        .unwrap(),
    );
    let [first, second] = figure.layers();
    assert_eq!(first.kind(), LayerKind::Image);
    assert_eq!(second.kind(), LayerKind::Contour);
}

// ============================================================================
// Error propagation tests
// ============================================================================

#[test]
fn test_malformed_contour_field_propagates() {
    let err = compose_viewport(
        Some(&slice()),
        Some(&mask()),
        MaskSelection::Contour(MaskType::Evaluation),
        fixtures::DEFAULT_LINE_WIDTH,
        ViewportRole::Main,
    )
    .unwrap_err();
    assert!(matches!(err, ViewerError::MalformedField(_)));
}

// ============================================================================
// Determinism and layout tests
// ============================================================================

#[test]
fn test_compose_is_idempotent() {
    let compose = || {
        compose_viewport(
            Some(&slice()),
            Some(&field()),
            MaskSelection::new(MaskType::OrganResampled, MaskFormat::Contour),
            4.0,
            ViewportRole::Main,
        )
        .unwrap()
    };
    let first = compose();
    let second = compose();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_layout_is_shared_static() {
    let main = ready(
        compose_viewport(Some(&slice()), Some(&mask()), MaskSelection::Hidden, 1.0, ViewportRole::Main)
            .unwrap(),
    );
    let support = ready(
        compose_viewport(Some(&mask()), Some(&slice()), MaskSelection::Hidden, 1.0, ViewportRole::Support)
            .unwrap(),
    );
    assert!(std::ptr::eq(main.layout, support.layout));
    assert!(std::ptr::eq(main.layout, figure_layout()));
}

#[test]
fn test_layout_hides_axes_and_background() {
    let value = serde_json::to_value(figure_layout()).unwrap();
    assert_eq!(value["margin"], json!({"b": 1, "l": 1, "r": 1, "t": 1}));
    assert_eq!(value["paper_bgcolor"], "rgba(0, 0, 0, 0)");
    assert_eq!(value["plot_bgcolor"], "rgba(0, 0, 0, 0)");
    assert_eq!(value["xaxis"]["visible"], false);
    assert_eq!(value["yaxis"]["visible"], false);
}

// ============================================================================
// Dual viewport tests
// ============================================================================

#[test]
fn test_dual_viewports_agree_on_overlay_form() {
    let main = ViewportSources {
        primary_source: Some(slice()),
        support_source: Some(field()),
    };
    let support = ViewportSources {
        primary_source: Some(PixelBuffer::from("data:image/png;base64,OTHER")),
        support_source: Some(field()),
    };
    let dual = compose_dual(
        &main,
        &support,
        MaskSelection::Contour(MaskType::Evaluation),
        2.0,
    )
    .unwrap();

    let main_figure = dual.main.as_ready().unwrap();
    let support_figure = dual.support.as_ready().unwrap();

    assert_eq!(main_figure.role, ViewportRole::Main);
    assert_eq!(support_figure.role, ViewportRole::Support);
    assert_eq!(main_figure.overlay, support_figure.overlay);
    assert_ne!(main_figure.primary, support_figure.primary);
}

#[test]
fn test_dual_with_one_viewport_loading() {
    let main = ViewportSources {
        primary_source: Some(slice()),
        support_source: Some(mask()),
    };
    let dual = compose_dual(
        &main,
        &ViewportSources::default(),
        MaskSelection::Filled(MaskType::OrganResampled),
        2.0,
    )
    .unwrap();

    assert!(dual.main.is_ready());
    assert_eq!(dual.support, Figure::NotReady);

    let value = serde_json::to_value(&dual).unwrap();
    assert_eq!(value["support"], json!({}));
    assert_eq!(value["main"]["data"][1]["colormodel"], "rgba");
}
