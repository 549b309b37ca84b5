//! SVG chart generation
//!
//! Renders the radar polygon and risk gauge as one self-contained SVG
//! document with no external assets, so the output works offline and is
//! byte-for-byte reproducible for identical reports.

use crate::radar::RadarPolygon;
use crate::report::AssessmentReport;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 640.0;

const RADAR_CX: f64 = 320.0;
const RADAR_CY: f64 = 340.0;
const RADAR_RADIUS: f64 = 210.0;

const GAUGE_CX: f64 = 552.0;
const GAUGE_CY: f64 = 88.0;
const GAUGE_RADIUS: f64 = 48.0;

/// Grid ring magnitudes, matching the fixed [0, 1] axis range
const GRID_LEVELS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Render a report as a self-contained SVG chart
pub fn render_svg(report: &AssessmentReport) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">
<rect width="{w}" height="{h}" fill="white"/>
{grid}{spokes}{polygon}{gauge}
{caption}
</svg>
"#,
        w = WIDTH,
        h = HEIGHT,
        grid = render_grid(),
        spokes = render_spokes(&report.radar),
        polygon = render_polygon(&report.radar),
        gauge = render_gauge(report),
        caption = render_caption(report.parameters.time_in_relationship_months),
    )
}

/// Map polar chart coordinates to screen coordinates
///
/// Angle 0 points right; angles increase counter-clockwise on screen, so
/// the y component is flipped (SVG y grows downward).
fn polar_point(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy - radius * angle.sin())
}

/// Concentric grid rings with magnitude tick labels
fn render_grid() -> String {
    let mut out = String::new();
    for level in GRID_LEVELS {
        out.push_str(&format!(
            r##"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="#cccccc" stroke-width="1"/>"##,
            RADAR_CX,
            RADAR_CY,
            RADAR_RADIUS * level,
        ));
        out.push('\n');
        out.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" font-size="9" fill="#888888">{:.1}</text>"##,
            RADAR_CX + 4.0,
            RADAR_CY - RADAR_RADIUS * level - 2.0,
            level,
        ));
        out.push('\n');
    }
    out
}

/// One spoke and one label per axis
fn render_spokes(polygon: &RadarPolygon) -> String {
    let mut out = String::new();
    for (label, point) in polygon.labels.iter().zip(&polygon.points) {
        let (x, y) = polar_point(RADAR_CX, RADAR_CY, RADAR_RADIUS, point.angle);
        out.push_str(&format!(
            r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#cccccc" stroke-width="1"/>"##,
            RADAR_CX, RADAR_CY, x, y,
        ));
        out.push('\n');

        let (lx, ly) = polar_point(RADAR_CX, RADAR_CY, RADAR_RADIUS + 18.0, point.angle);
        let anchor = if point.angle.cos() > 0.1 {
            "start"
        } else if point.angle.cos() < -0.1 {
            "end"
        } else {
            "middle"
        };
        out.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" font-size="11" text-anchor="{}" fill="#333333">{}</text>"##,
            lx, ly, anchor, label,
        ));
        out.push('\n');
    }
    out
}

/// Filled data polygon with vertex markers
fn render_polygon(polygon: &RadarPolygon) -> String {
    let mut path = String::new();
    for (i, point) in polygon.points.iter().enumerate() {
        let (x, y) = polar_point(
            RADAR_CX,
            RADAR_CY,
            RADAR_RADIUS * point.magnitude,
            point.angle,
        );
        path.push_str(&format!(
            "{} {:.1} {:.1} ",
            if i == 0 { "M" } else { "L" },
            x,
            y,
        ));
    }
    path.push('Z');

    let mut out = format!(
        r#"<path d="{}" stroke="purple" stroke-width="2" fill="violet" fill-opacity="0.25"/>"#,
        path,
    );
    out.push('\n');

    // The closing duplicate would double-draw the first marker
    for point in &polygon.points[..polygon.points.len() - 1] {
        let (x, y) = polar_point(
            RADAR_CX,
            RADAR_CY,
            RADAR_RADIUS * point.magnitude,
            point.angle,
        );
        out.push_str(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="3.5" fill="purple"/>"#,
            x, y,
        ));
        out.push('\n');
    }
    out
}

/// Corner gauge: a wedge sweeping `sweep_degrees` in the tier color with
/// the score printed at its center
fn render_gauge(report: &AssessmentReport) -> String {
    let color = report.tier.color();
    let sweep = report.sweep_degrees.clamp(0.0, 360.0);

    let wedge = if sweep >= 360.0 {
        // A single arc cannot span the full circle
        format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" fill-opacity="0.8"/>"#,
            GAUGE_CX, GAUGE_CY, GAUGE_RADIUS, color,
        )
    } else if sweep <= 0.0 {
        String::new()
    } else {
        let (x0, y0) = polar_point(GAUGE_CX, GAUGE_CY, GAUGE_RADIUS, 0.0);
        let (x1, y1) = polar_point(GAUGE_CX, GAUGE_CY, GAUGE_RADIUS, sweep.to_radians());
        let large_arc = if sweep > 180.0 { 1 } else { 0 };
        // sweep-flag 0 draws counter-clockwise on screen
        format!(
            r#"<path d="M {cx:.1} {cy:.1} L {x0:.1} {y0:.1} A {r:.1} {r:.1} 0 {large_arc} 0 {x1:.1} {y1:.1} Z" fill="{color}" fill-opacity="0.8"/>"#,
            cx = GAUGE_CX,
            cy = GAUGE_CY,
            x0 = x0,
            y0 = y0,
            r = GAUGE_RADIUS,
            large_arc = large_arc,
            x1 = x1,
            y1 = y1,
            color = color,
        )
    };

    format!(
        r##"{wedge}
<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="none" stroke="#dddddd" stroke-width="1"/>
<text x="{cx:.1}" y="{cy:.1}" font-size="14" font-weight="bold" text-anchor="middle" dominant-baseline="middle" fill="{color}">{score:.2}</text>"##,
        wedge = wedge,
        cx = GAUGE_CX,
        cy = GAUGE_CY,
        r = GAUGE_RADIUS,
        color = color,
        score = report.score,
    )
}

/// Footer caption below the radar
fn render_caption(months: u32) -> String {
    format!(
        r##"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle" fill="#333333">Time in relationship: {} months</text>"##,
        WIDTH / 2.0,
        HEIGHT - 24.0,
        months,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterSet;
    use crate::report::assess;

    #[test]
    fn test_svg_is_self_contained() {
        let report = assess(&ParameterSet::default()).unwrap();
        let svg = render_svg(&report);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        // No external references
        assert!(!svg.contains("href"));
    }

    #[test]
    fn test_default_report_chart_content() {
        let report = assess(&ParameterSet::default()).unwrap();
        let svg = render_svg(&report);
        // Score 0.2625 renders as 0.26 in the low-tier green
        assert!(svg.contains("0.26"));
        assert!(svg.contains("#4CAF50"));
        assert!(svg.contains("Time in relationship: 3 months"));
        assert!(svg.contains("Red flags (inverted)"));
    }

    #[test]
    fn test_full_sweep_renders_as_circle() {
        let params = ParameterSet {
            attraction: 1.0,
            emotional_dependence: 1.0,
            idealization: 1.0,
            rationality: 0.0,
            external_feedback: 0.0,
            red_flags: vec![true, true, true, true],
            time_in_relationship_months: 3,
        };
        let report = assess(&params).unwrap();
        assert_eq!(report.sweep_degrees, 360.0);
        let svg = render_svg(&report);
        // Full circle wedge, no arc path degeneracy
        assert!(svg.contains("#FF4B4B"));
        assert!(!svg.contains("A 48.0 48.0"));
    }

    #[test]
    fn test_deterministic_output() {
        let report = assess(&ParameterSet::default()).unwrap();
        assert_eq!(render_svg(&report), render_svg(&report));
    }
}
