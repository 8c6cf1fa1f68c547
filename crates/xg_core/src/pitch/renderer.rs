//! Pitch diagram.
//!
//! Pitch coordinates: x runs 0..length from the left goal line, y runs
//! -width/2..width/2 across, 0 on the line through both goal centres.
//! Markings use fixed real-world sizes regardless of field size.

use crate::config::{PitchConfig, PitchView};
use crate::error::Result;
use crate::pitch::figure::{Axes, Figure};
use crate::pitch_constants::{field, markings};

#[derive(Debug, Clone, Default)]
pub struct PitchRenderer {
    config: PitchConfig,
}

impl PitchRenderer {
    pub fn new(config: PitchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PitchConfig {
        &self.config
    }

    fn axes(&self) -> Axes {
        let cfg = &self.config;
        let half_width = cfg.width_m / 2.0;
        let x_min = match cfg.view {
            PitchView::Full => 0.0,
            PitchView::AttackingHalf => cfg.length_m / 2.0,
        };
        Axes {
            x_min: x_min - cfg.margin_m,
            x_max: cfg.length_m + cfg.margin_m,
            y_min: -half_width - cfg.margin_m,
            y_max: half_width + cfg.margin_m,
            face_color: cfg.face_color.clone(),
        }
    }

    /// Draw the pitch markings onto a fresh figure.
    pub fn render(&self) -> Figure {
        let cfg = &self.config;
        let len = cfg.length_m;
        let half_w = cfg.width_m / 2.0;

        let mut fig = Figure::new(cfg.figure_width_px, cfg.figure_height_px, self.axes());
        fig.line_color = cfg.line_color.clone();
        fig.shot_color = cfg.shot_color.clone();

        // Outline & halfway line
        fig.line((0.0, -half_w), (0.0, half_w));
        fig.line((0.0, half_w), (len, half_w));
        fig.line((len, half_w), (len, -half_w));
        fig.line((len, -half_w), (0.0, -half_w));
        fig.line((len / 2.0, half_w), (len / 2.0, -half_w));

        // Penalty areas and six-yard boxes, both ends
        for (goal_x, inward) in [(0.0, 1.0), (len, -1.0)] {
            draw_box(
                &mut fig,
                goal_x,
                inward,
                markings::PENALTY_AREA_LENGTH_M,
                markings::PENALTY_AREA_HALF_WIDTH_M,
            );
            draw_box(
                &mut fig,
                goal_x,
                inward,
                markings::SIX_YARD_LENGTH_M,
                markings::SIX_YARD_HALF_WIDTH_M,
            );
        }

        // Centre circle & spots
        fig.circle((len / 2.0, 0.0), field::CENTER_CIRCLE_RADIUS_M, false);
        fig.circle((len / 2.0, 0.0), markings::SPOT_RADIUS_M, true);
        fig.circle((markings::PENALTY_SPOT_M, 0.0), markings::SPOT_RADIUS_M, true);
        fig.circle((len - markings::PENALTY_SPOT_M, 0.0), markings::SPOT_RADIUS_M, true);

        // Penalty arcs
        let (l1, l2) = markings::LEFT_ARC_DEG;
        let (r1, r2) = markings::RIGHT_ARC_DEG;
        fig.arc((markings::PENALTY_SPOT_M, 0.0), markings::PENALTY_ARC_RADIUS_M, l1, l2);
        fig.arc((len - markings::PENALTY_SPOT_M, 0.0), markings::PENALTY_ARC_RADIUS_M, r1, r2);

        log::debug!(
            "Rendered {}x{} m pitch ({:?}) with {} elements",
            len,
            cfg.width_m,
            cfg.view,
            fig.elements().len()
        );
        fig
    }
}

/// Three sides of a box standing on the goal line at `goal_x`.
fn draw_box(fig: &mut Figure, goal_x: f64, inward: f64, depth: f64, half_width: f64) {
    let front = goal_x + inward * depth;
    fig.line((goal_x, half_width), (front, half_width));
    fig.line((front, half_width), (front, -half_width));
    fig.line((front, -half_width), (goal_x, -half_width));
}

/// Pitch with the default 106 x 68 m layout.
pub fn create_pitch() -> Figure {
    PitchRenderer::default().render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::figure::Element;

    fn count(fig: &Figure, pred: impl Fn(&Element) -> bool) -> usize {
        fig.elements().iter().filter(|e| pred(e)).count()
    }

    #[test]
    fn test_all_markings_present() {
        let fig = create_pitch();
        assert_eq!(count(&fig, |e| matches!(e, Element::Line { .. })), 17);
        assert_eq!(count(&fig, |e| matches!(e, Element::Circle { filled: false, .. })), 1);
        assert_eq!(count(&fig, |e| matches!(e, Element::Circle { filled: true, .. })), 3);
        assert_eq!(count(&fig, |e| matches!(e, Element::Arc { .. })), 2);
    }

    #[test]
    fn test_right_penalty_box_mirrors_left() {
        let fig = PitchRenderer::new(PitchConfig::with_field_size(100.0, 60.0)).unwrap().render();
        let fronts: Vec<f64> = fig
            .elements()
            .iter()
            .filter_map(|e| match e {
                Element::Line { from, to, .. } if from.0 == to.0 && from.1 == 20.15 => Some(from.0),
                _ => None,
            })
            .collect();
        assert_eq!(fronts, vec![16.5, 83.5]);
    }

    #[test]
    fn test_markings_stay_inside_field() {
        let cfg = PitchConfig::default();
        let fig = create_pitch();
        for element in fig.elements() {
            if let Element::Line { from, to, .. } = element {
                for (x, y) in [from, to] {
                    assert!(*x >= 0.0 && *x <= cfg.length_m);
                    assert!(y.abs() <= cfg.width_m / 2.0);
                }
            }
        }
    }

    #[test]
    fn test_default_figure_settings() {
        let fig = create_pitch();
        assert_eq!(fig.width_px, 1200);
        assert_eq!(fig.height_px, 800);
        assert_eq!(fig.axes.face_color, "mediumseagreen");
        assert_eq!(fig.line_color, "white");
        assert!(fig.axes.contains((0.0, 34.0)));
        assert!(fig.axes.contains((106.0, -34.0)));
    }

    #[test]
    fn test_attacking_half_view() {
        let cfg = PitchConfig { view: PitchView::AttackingHalf, ..PitchConfig::default() };
        let fig = PitchRenderer::new(cfg).unwrap().render();
        assert!(!fig.axes.contains((20.0, 0.0)));
        assert!(fig.axes.contains((95.0, 0.0)));
        assert!(fig.axes.contains((53.0, 0.0)));
    }

    #[test]
    fn test_svg_output() {
        let mut fig = create_pitch();
        fig.add_shot(95.0, 0.0, Some(0.76));
        let svg = fig.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"fill="mediumseagreen""#));
        assert_eq!(svg.matches("<line").count(), 17);
        assert_eq!(svg.matches("<circle").count(), 5);
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains(">0.76</text>"));
    }

    #[test]
    fn test_too_small_field_rejected() {
        assert!(PitchRenderer::new(PitchConfig::with_field_size(30.0, 68.0)).is_err());
        assert!(PitchRenderer::new(PitchConfig::with_field_size(106.0, 40.0)).is_err());
    }
}
