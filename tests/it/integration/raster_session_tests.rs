//! Sessions rendered with the real rasterizer, checked pixel by pixel

use crate::helpers::{SessionBuilder, primary, secondary};
use corrmark::render::RasterRenderer;
use corrmark::settings::MarkerStyle;

#[test]
fn test_relocation_leaves_no_stale_pixels() {
    let mut machine = SessionBuilder::new().build();
    let mut renderer = RasterRenderer::default();
    let style = MarkerStyle::default();

    machine.handle(primary(10, 10), &mut renderer).unwrap();
    machine.handle(primary(410, 10), &mut renderer).unwrap();
    // Horizontal line at y = 10
    assert_eq!(machine.surface().get_pixel(200, 10).0, style.line_color);

    machine.handle(secondary(10, 10), &mut renderer).unwrap();
    assert_eq!(machine.surface().get_pixel(10, 10).0, style.highlight_color);

    machine.handle(primary(10, 100), &mut renderer).unwrap();

    assert_eq!(machine.surface().get_pixel(200, 10).0, [0, 0, 0]);
    assert_eq!(machine.surface().get_pixel(10, 10).0, [0, 0, 0]);
    // Line endpoints overdraw the marker centers
    assert_eq!(machine.surface().get_pixel(10, 100).0, style.line_color);
    assert_eq!(machine.surface().get_pixel(410, 10).0, style.line_color);
    assert_eq!(machine.surface().get_pixel(19, 100).0, style.ring_color);
    assert_eq!(renderer.presented_frames(), 4);
}

#[test]
fn test_pristine_is_untouched_by_drawing() {
    let mut machine = SessionBuilder::new().with_sizes((50, 40), (60, 30)).build();
    let mut renderer = RasterRenderer::default();

    machine.handle(primary(5, 5), &mut renderer).unwrap();
    machine.handle(primary(70, 20), &mut renderer).unwrap();

    assert_ne!(machine.surface(), machine.pristine());
    assert!(machine.pristine().pixels().all(|px| px.0 == [0, 0, 0]));
    assert_eq!(machine.split().x(), 50);
    assert_eq!(machine.surface().dimensions(), (110, 30));
}
