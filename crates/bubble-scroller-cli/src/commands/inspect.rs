use anyhow::Result;
use serde::Serialize;

use bubble_scroller_core::{
    AppConfig, Intersection, LabeledSections, PathSegment, Point, Rect, ScrollerState,
};

pub struct InspectArgs<'a> {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub sections: Option<&'a str>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RowReport<'a> {
    index: usize,
    label: &'a str,
    position: Point,
    offset: i32,
    scale: f32,
}

#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    drawable_area: Rect,
    baseline: f32,
    center: Point,
    radius: f32,
    intersection: Intersection,
    focused: Option<usize>,
    rows: Vec<RowReport<'a>>,
    path: &'a [PathSegment],
}

impl<'a> InspectReport<'a> {
    fn from_state(state: &'a ScrollerState) -> Self {
        let sections = state.sections();
        let rows = state
            .offsets()
            .iter()
            .zip(state.scales())
            .enumerate()
            .map(|(index, (&offset, &scale))| RowReport {
                index,
                label: sections.section_label(index),
                position: state.row_position(index),
                offset,
                scale,
            })
            .collect();

        let bumper = state.bumper();
        Self {
            drawable_area: state.drawable_area(),
            baseline: state.baseline(),
            center: bumper.center,
            radius: bumper.radius,
            intersection: state.intersection(),
            focused: state.focused_section(),
            rows,
            path: state.text_path().segments(),
        }
    }
}

/// Lay out a `width` by `height` area, place the bumper and report the geometry
fn build_state(config: &AppConfig, args: &InspectArgs<'_>) -> Result<ScrollerState> {
    let mut state = ScrollerState::new(&config.scroller)?;
    if let Some(labels) = args.sections {
        let sections = LabeledSections::parse(labels);
        if !sections.is_empty() {
            state.set_section_model(Box::new(sections));
        }
    }
    state.set_drawable_area(Rect::new(0.0, 0.0, args.width, args.height))?;
    state.set_bumper_center(args.x, args.y)?;
    Ok(state)
}

pub fn run(config: &AppConfig, args: InspectArgs<'_>) -> Result<()> {
    let state = build_state(config, &args)?;
    let report = InspectReport::from_state(&state);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let area = report.drawable_area;
    println!(
        "Area:      {:.1},{:.1} .. {:.1},{:.1}",
        area.left, area.top, area.right, area.bottom
    );
    println!("Baseline:  x = {:.1}", report.baseline);
    println!(
        "Bumper:    centre ({:.1}, {:.1}), radius {:.1}",
        report.center.x, report.center.y, report.radius
    );
    if report.intersection.has_bulge() {
        println!(
            "Bulge:     y {:.2} .. {:.2}",
            report.intersection.y_low, report.intersection.y_high
        );
    } else {
        println!("Bulge:     none");
    }
    match report.focused {
        Some(index) => println!("Focused:   {} ({})", report.rows[index].label, index),
        None => println!("Focused:   -"),
    }

    println!("\n  {:>3}  {:<8} {:>9} {:>7} {:>6}", "#", "label", "y", "offset", "scale");
    for row in &report.rows {
        println!(
            "  {:>3}  {:<8} {:>9.2} {:>7} {:>6.3}",
            row.index, row.label, row.position.y, row.offset, row.scale
        );
    }

    println!("\nPath:");
    for segment in report.path {
        match segment {
            PathSegment::MoveTo(p) => println!("  move  ({:.2}, {:.2})", p.x, p.y),
            PathSegment::LineTo(p) => println!("  line  ({:.2}, {:.2})", p.x, p.y),
            PathSegment::ArcTo {
                oval,
                start_angle,
                sweep_angle,
            } => println!(
                "  arc   oval {:.1},{:.1} .. {:.1},{:.1} start {:.2} sweep {:.2}",
                oval.left, oval.top, oval.right, oval.bottom, start_angle, sweep_angle
            ),
            PathSegment::Close => println!("  close"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(x: f32, y: f32) -> InspectArgs<'static> {
        InspectArgs {
            x,
            y,
            width: 1000.0,
            height: 1000.0,
            sections: None,
            json: true,
        }
    }

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.scroller.intrinsic_vertical_padding = 0.0;
        config
    }

    #[test]
    fn test_report_at_rest() {
        let state = build_state(&config(), &args(700.0, 500.0)).unwrap();
        let report = InspectReport::from_state(&state);
        assert_eq!(report.rows.len(), 26);
        assert!(!report.intersection.has_bulge());
        assert_eq!(report.focused, None);
        assert!(report.rows.iter().all(|row| row.offset == 0));
    }

    #[test]
    fn test_report_protruding() {
        let state = build_state(&config(), &args(600.0, 500.0)).unwrap();
        let report = InspectReport::from_state(&state);
        assert_eq!(report.focused, Some(13));
        assert_eq!(report.rows[13].label, "N");
        assert_eq!(report.rows[13].offset, 100);
        assert!(report
            .path
            .iter()
            .any(|segment| matches!(segment, PathSegment::ArcTo { .. })));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rows"][13]["offset"], 100);
        assert_eq!(json["focused"], 13);
    }

    #[test]
    fn test_custom_sections() {
        let mut args = args(600.0, 500.0);
        args.sections = Some("#,A,B,C");
        let state = build_state(&config(), &args).unwrap();
        assert_eq!(state.section_count(), 4);
        assert_eq!(state.sections().section_label(0), "#");
    }

    #[test]
    fn test_non_finite_centre_rejected() {
        assert!(build_state(&config(), &args(f32::NAN, 500.0)).is_err());
    }
}
