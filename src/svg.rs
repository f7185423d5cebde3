//! SVG visualization of a window placement.
//!
//! Draws the usable screen area twice, once with the window before the
//! change and once after, as annotated panels stacked vertically.
//!
//! # Example
//!
//! ```
//! use zenwindow::{EngineConfig, Rect, ScreenInfo, Size, compute_window_rect, svg::render_placement_svg};
//!
//! let screen = ScreenInfo::full(Size::new(1920, 1080));
//! let before = Rect::new(600, 337, 720, 405);
//! let after = compute_window_rect(
//!     Size::new(1920, 800), false, before, None, &screen, &EngineConfig::default(),
//! );
//!
//! let svg = render_placement_svg(&screen, before, after);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::constraint::Rect;
use crate::screen::ScreenInfo;

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 320.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 50.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;

/// One panel: the usable screen with a window drawn inside it.
struct Panel {
    label: String,
    annotation: String,
    window: Rect,
}

/// Render a complete SVG document showing `before` and `after` on the
/// usable area of `screen`.
pub fn render_placement_svg(screen: &ScreenInfo, before: Rect, after: Rect) -> String {
    let panels = [
        Panel {
            label: format!("Before  {}×{}", before.width, before.height),
            annotation: format!("at ({}, {})", before.left, before.top),
            window: before,
        },
        Panel {
            label: format!("After  {}×{}", after.width, after.height),
            annotation: format!("at ({}, {})", after.left, after.top),
            window: after,
        },
    ];
    render_panels(&screen.usable, &panels)
}

/// Scale factor fitting the usable area into MAX_PANEL_W × MAX_PANEL_H.
fn panel_scale(bounds: &Rect) -> f64 {
    let w = bounds.width as f64;
    let h = bounds.height as f64;
    if w == 0.0 || h == 0.0 {
        return 1.0;
    }
    (MAX_PANEL_W / w).min(MAX_PANEL_H / h)
}

fn render_panels(bounds: &Rect, panels: &[Panel]) -> String {
    let scale = panel_scale(bounds);
    let sw = bounds.width as f64 * scale;
    let sh = bounds.height as f64 * scale;

    let n = panels.len() as f64;
    let total_h = 2.0 * MARGIN_TOP + n * (LABEL_H + MAX_PANEL_H) + (n - 1.0).max(0.0) * PANEL_GAP;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .screen { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .window { fill: #6ba3d6; fill-opacity: 0.85; stroke: #2c6faa; stroke-width: 1.5; }
  .arrow { stroke: #666; stroke-width: 1.5; fill: none; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .screen { fill: #2d2d2d; stroke: #555; }
    .window { fill: #3a72a4; stroke: #5a9fd4; }
    .arrow { stroke: #888; }
  }
</style>
"##);

    let center_x = total_w / 2.0;
    let mut y = MARGIN_TOP;

    for (i, panel) in panels.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        let panel_x = center_x - sw / 2.0;
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="screen" rx="2"/>"#,
            panel_x, y, sw, sh
        ));
        svg.push('\n');

        // Window offsets are relative to the usable origin and may be negative.
        let wx = panel_x + (panel.window.left as f64 - bounds.left as f64) * scale;
        let wy = y + (panel.window.top as f64 - bounds.top as f64) * scale;
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="window" rx="1"/>"#,
            wx,
            wy,
            panel.window.width as f64 * scale,
            panel.window.height as f64 * scale
        ));
        svg.push('\n');

        svg.push_str(&format!(
            r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
            center_x,
            y + sh + 14.0,
            escape_xml(&panel.annotation)
        ));
        svg.push('\n');

        y += MAX_PANEL_H;

        if i + 1 < panels.len() {
            svg.push_str(&format!(
                r#"<line x1="{}" y1="{:.1}" x2="{}" y2="{:.1}" class="arrow"/>"#,
                center_x,
                y + 8.0,
                center_x,
                y + PANEL_GAP - 8.0
            ));
            svg.push('\n');
            y += PANEL_GAP;
        }
    }

    svg.push_str("</svg>\n");
    svg
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
    use crate::constraint::Size;

    #[test]
    fn svg_shows_both_sizes() {
        let screen = ScreenInfo::full(Size::new(1920, 1080));
        let svg = render_placement_svg(
            &screen,
            Rect::new(600, 337, 720, 405),
            Rect::new(320, 180, 1280, 720),
        );
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Before  720×405"));
        assert!(svg.contains("After  1280×720"));
        assert!(svg.contains("at (320, 180)"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn svg_offset_usable_area() {
        let screen = ScreenInfo::new(Rect::new(-1280, 25, 1280, 999), Size::new(1280, 1024));
        let svg = render_placement_svg(
            &screen,
            Rect::new(-1280, 25, 640, 360),
            Rect::new(-1000, 100, 640, 360),
        );
        assert!(svg.contains("at (-1280, 25)"));
        assert_eq!(svg.matches(r#"class="window""#).count(), 2);
    }

    #[test]
    fn escape() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
