//! SVG visualization of a computed placement.
//!
//! Draws the container box and the placed source rectangle in one panel.
//! Overflow (cover, oversized anchored sources) is drawn outside the
//! container outline so it stays visible.
//!
//! # Example
//!
//! ```
//! use zenplace::{PlacementRequest, PlacementRule, Source, svg::render_request_svg};
//!
//! let img = Source::image(50.0, 100.0);
//! let req = PlacementRequest::with_size(&img, PlacementRule::Contain, 200.0, 100.0);
//! let svg = render_request_svg(&req).unwrap();
//! assert!(svg.contains("contain"));
//! ```

use crate::geometry::{Coords, Pos, Size};
use crate::placement::{PlacementError, PlacementRequest};

/// Maximum pixel width for the drawing area.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for the drawing area.
const MAX_PANEL_H: f64 = 200.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above the panel.
const LABEL_H: f64 = 22.0;
/// Space below the panel for the annotation.
const ANNOTATION_H: f64 = 28.0;

/// Render a placement of `pos` inside `container`.
///
/// Returns a complete SVG document as a string. Non-finite geometry yields an
/// empty 1×1 document.
pub fn render_placement_svg(container: Size, pos: &Pos) -> String {
    render(container, pos, "Placement")
}

/// Compute `request` and render the result, labelled with the rule name.
pub fn render_request_svg(request: &PlacementRequest<'_>) -> Result<String, PlacementError> {
    let (pos, container) = request.compute_in()?;
    Ok(render(container, &pos, request.rule.as_str()))
}

fn render(container: Size, pos: &Pos, title: &str) -> String {
    let placed = pos.coords();
    if !placed.is_finite() || !container.is_valid() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    // Bounding box of container and placed rect, in container space.
    let min_x = placed.x.min(0.0);
    let min_y = placed.y.min(0.0);
    let max_x = placed.right().max(container.width);
    let max_y = placed.bottom().max(container.height);
    let (bw, bh, scale) = scale_to_fit(max_x - min_x, max_y - min_y);

    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + MAX_PANEL_H + ANNOTATION_H + MARGIN_TOP;
    let center_x = total_w / 2.0;
    let origin_x = center_x - bw / 2.0 - min_x * scale;
    let origin_y = MARGIN_TOP + LABEL_H + (MAX_PANEL_H - bh) / 2.0 - min_y * scale;

    let mut svg = String::with_capacity(2048);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Style — light/dark mode via prefers-color-scheme
    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .container { fill: #e8e8e8; stroke: none; }
  .placed { fill: #6ba3d6; fill-opacity: 0.75; stroke: #2c6faa; stroke-width: 1.5; }
  .outline { fill: none; stroke: #999; stroke-width: 1; stroke-dasharray: 4,2; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .container { fill: #2d2d2d; }
    .placed { fill: #3a72a4; stroke: #5a9fd4; }
    .outline { stroke: #555; }
  }
</style>
"##);

    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 14.0,
        escape_xml(&format!(
            "{}  {}×{} in {}×{}",
            title, pos.source_width, pos.source_height, container.width, container.height
        ))
    ));
    svg.push('\n');

    let container_rect = Coords::new(0.0, 0.0, container.width, container.height);
    push_rect(&mut svg, &container_rect, origin_x, origin_y, scale, "container");
    push_rect(&mut svg, &placed, origin_x, origin_y, scale, "placed");
    // Outline last so the container edge shows through overflow.
    push_rect(&mut svg, &container_rect, origin_x, origin_y, scale, "outline");

    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + LABEL_H + MAX_PANEL_H + 18.0,
        escape_xml(&format!(
            "at ({}, {}), {}×{}",
            placed.x, placed.y, placed.width, placed.height
        ))
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

/// Scale a box to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(w: f64, h: f64) -> (f64, f64, f64) {
    if w == 0.0 || h == 0.0 {
        return (w, h, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

fn push_rect(svg: &mut String, r: &Coords, origin_x: f64, origin_y: f64, scale: f64, class: &str) {
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="{}"/>"#,
        origin_x + r.x * scale,
        origin_y + r.y * scale,
        r.width * scale,
        r.height * scale,
        class
    ));
    svg.push('\n');
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlacementRule, Source};

    #[test]
    fn svg_contain_shows_sizes() {
        let img = Source::image(50.0, 100.0);
        let req = PlacementRequest::with_size(&img, PlacementRule::Contain, 200.0, 100.0);
        let svg = render_request_svg(&req).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("contain  50×100 in 200×100"));
        assert!(svg.contains("at (75, 0), 50×100"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn svg_cover_overflow_fits_panel() {
        let img = Source::image(50.0, 100.0);
        let req = PlacementRequest::with_size(&img, PlacementRule::Cover, 200.0, 100.0);
        let svg = render_request_svg(&req).unwrap();
        // Placed rect is 200×400 at (0, -150); the whole box scales to 200 tall.
        assert!(svg.contains(r#"width="100.0" height="200.0" class="placed""#));
        assert!(svg.contains("at (0, -150), 200×400"));
    }

    #[test]
    fn svg_error_propagates() {
        let img = Source::image(0.0, 100.0);
        let req = PlacementRequest::with_size(&img, PlacementRule::Cover, 200.0, 100.0);
        assert_eq!(render_request_svg(&req), Err(PlacementError::ZeroSourceDimension));
    }

    #[test]
    fn svg_non_finite_is_empty_document() {
        let pos = Pos::new(
            Coords::new(f64::NAN, 0.0, 1.0, 1.0),
            Size::new(1.0, 1.0),
        );
        let svg = render_placement_svg(Size::new(10.0, 10.0), &pos);
        assert!(svg.contains(r#"width="1" height="1""#));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn svg_reads_live_container_once() {
        use crate::source::ClientSize;
        use core::cell::Cell;

        // Grows on every read, so a second read would draw a different box.
        struct Growing(Cell<f64>);
        impl ClientSize for Growing {
            fn client_size(&self) -> Size {
                let w = self.0.get();
                self.0.set(w * 2.0);
                Size::new(w, 100.0)
            }
        }

        let img = Source::image(40.0, 20.0);
        let container = Growing(Cell::new(200.0));
        let req = PlacementRequest::with_container(&img, PlacementRule::BottomRight, &container);
        let svg = render_request_svg(&req).unwrap();
        assert!(svg.contains("bottom-right  40×20 in 200×100"));
        assert!(svg.contains("at (160, 80), 40×20"));
        assert_eq!(container.0.get(), 400.0);
    }

    #[test]
    fn svg_is_valid_xml() {
        let pos = Pos::new(Coords::new(0.0, 0.0, 10.0, 10.0), Size::new(10.0, 10.0));
        let svg = render_placement_svg(Size::new(10.0, 10.0), &pos);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(!svg.contains("<<"));
        assert_eq!(svg.matches("<rect").count(), 3);
    }
}
