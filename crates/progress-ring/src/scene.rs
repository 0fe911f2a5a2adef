use crate::geometry::{Bounds, Geometry, Point};
use crate::state::{Outcome, WidgetState};
use crate::widget::AnimationProgress;

// Arcs start at twelve o'clock; angles grow clockwise from three o'clock.
pub const ARC_START_ANGLE: f64 = 270.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Background,
    Progress,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Circle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    Arc {
        bounds: Bounds,
        start_angle: f64,
        sweep_angle: f64,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        paint: Paint,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Cross,
    X,
}

impl From<Outcome> for Glyph {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::Cross,
            Outcome::Failure => Self::X,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub pivot: Point,
    pub rotation: f64,
    pub stroke_width: f64,
    pub primitives: Vec<Primitive>,
    glyph: Option<Glyph>,
}

impl Scene {
    pub fn build(
        geometry: &Geometry,
        state: WidgetState,
        outcome: Outcome,
        progress: &AnimationProgress,
    ) -> Self {
        let mut scene = Self {
            pivot: geometry.center,
            rotation: progress.rotation,
            stroke_width: geometry.stroke_width,
            primitives: vec![circle(geometry, Paint::Background)],
            glyph: None,
        };

        match state {
            WidgetState::Idle => {}
            WidgetState::Running => scene.primitives.push(Primitive::Arc {
                bounds: geometry.bounds,
                start_angle: ARC_START_ANGLE,
                sweep_angle: progress.sweep_angle,
                paint: Paint::Progress,
            }),
            WidgetState::Settled => {
                let glyph = Glyph::from(outcome);
                scene.primitives.push(circle(geometry, Paint::Progress));
                scene
                    .primitives
                    .extend(arm_tips(glyph, progress.settle_extent / 2.0).map(|(dx, dy)| {
                        Primitive::Line {
                            from: geometry.center,
                            to: geometry.center.offset(dx, dy),
                            paint: Paint::Progress,
                        }
                    }));
                scene.glyph = Some(glyph);
            }
        }
        scene
    }

    pub fn glyph(&self) -> Option<Glyph> {
        self.glyph
    }
}

fn circle(geometry: &Geometry, paint: Paint) -> Primitive {
    Primitive::Circle {
        center: geometry.center,
        radius: geometry.radius,
        paint,
    }
}

// The X uses the half extent on both axes, so its arms come out longer
// than the cross arms for the same extent.
fn arm_tips(glyph: Glyph, half: f64) -> [(f64, f64); 4] {
    match glyph {
        Glyph::Cross => [(half, 0.0), (-half, 0.0), (0.0, half), (0.0, -half)],
        Glyph::X => [(half, -half), (-half, half), (half, half), (-half, -half)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProgressConfig;
    use crate::geometry::Size;

    fn geometry() -> Geometry {
        Geometry::compute(Size::new(300, 300), &ProgressConfig::default()).unwrap()
    }

    fn progress(sweep_angle: f64, settle_extent: f64) -> AnimationProgress {
        AnimationProgress {
            sweep_angle,
            settle_extent,
            rotation: 0.0,
        }
    }

    fn lines(scene: &Scene) -> Vec<(Point, Point)> {
        scene
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_idle_draws_only_background_circle() {
        let scene = Scene::build(
            &geometry(),
            WidgetState::Idle,
            Outcome::Success,
            &AnimationProgress::default(),
        );
        assert_eq!(
            scene.primitives,
            vec![Primitive::Circle {
                center: Point::new(150.0, 150.0),
                radius: 100.0,
                paint: Paint::Background,
            }]
        );
        assert_eq!(scene.glyph(), None);
    }

    #[test]
    fn test_running_draws_arc_from_top() {
        let geometry = geometry();
        let scene = Scene::build(
            &geometry,
            WidgetState::Running,
            Outcome::Failure,
            &progress(120.0, 50.0),
        );
        assert_eq!(scene.primitives.len(), 2);
        assert_eq!(
            scene.primitives[1],
            Primitive::Arc {
                bounds: geometry.bounds,
                start_angle: 270.0,
                sweep_angle: 120.0,
                paint: Paint::Progress,
            }
        );
        assert_eq!(scene.glyph(), None);
        assert!(lines(&scene).is_empty());
    }

    #[test]
    fn test_settled_success_draws_cross() {
        let scene = Scene::build(
            &geometry(),
            WidgetState::Settled,
            Outcome::Success,
            &progress(360.0, 100.0),
        );
        assert_eq!(scene.glyph(), Some(Glyph::Cross));
        assert!(matches!(
            scene.primitives[1],
            Primitive::Circle {
                paint: Paint::Progress,
                ..
            }
        ));

        let center = Point::new(150.0, 150.0);
        let tips: Vec<_> = lines(&scene)
            .into_iter()
            .inspect(|(from, _)| assert_eq!(*from, center))
            .map(|(_, to)| to)
            .collect();
        assert_eq!(
            tips,
            vec![
                Point::new(200.0, 150.0),
                Point::new(100.0, 150.0),
                Point::new(150.0, 200.0),
                Point::new(150.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_settled_failure_draws_diagonals() {
        let scene = Scene::build(
            &geometry(),
            WidgetState::Settled,
            Outcome::Failure,
            &progress(360.0, 100.0),
        );
        assert_eq!(scene.glyph(), Some(Glyph::X));
        let tips: Vec<_> = lines(&scene).into_iter().map(|(_, to)| to).collect();
        assert_eq!(
            tips,
            vec![
                Point::new(200.0, 100.0),
                Point::new(100.0, 200.0),
                Point::new(200.0, 200.0),
                Point::new(100.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_rotation_and_stroke_follow_inputs() {
        let mut p = progress(0.0, 0.0);
        p.rotation = 90.0;
        let scene = Scene::build(&geometry(), WidgetState::Settled, Outcome::Success, &p);
        assert_eq!(scene.rotation, 90.0);
        assert_eq!(scene.pivot, Point::new(150.0, 150.0));
        assert_eq!(scene.stroke_width, 5.0);
    }
}
