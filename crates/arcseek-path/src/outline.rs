//! Conversion of the track into a [`lyon`] path.
//!
//! The core never rasterizes anything itself. The host strokes this outline
//! with the configured track width and, if it wants tap-to-seek, rasterizes
//! the stroked outline into whatever region type it can hit-test against.

use lyon::geom;
use lyon::math;
use lyon::path::builder::SvgPathBuilder;

use crate::ArcPath;

impl ArcPath {
    /// Flattens the arc into a [`lyon::path::Path`] of quadratic beziers.
    pub fn to_path(&self) -> lyon::path::Path {
        let mut raw = lyon::path::Path::builder().with_svg();

        let arc = geom::Arc {
            center: math::Point::new(self.center.x, self.center.y),
            radii: math::Vector::new(self.radius, self.radius),
            x_rotation: math::Angle::radians(0.0),
            start_angle: math::Angle::radians(self.start_angle.radians),
            sweep_angle: math::Angle::radians(self.sweep().radians),
        };

        let _ = raw.move_to(arc.sample(0.0));
        arc.for_each_quadratic_bezier(&mut |curve| {
            let _ = raw.quadratic_bezier_to(curve.ctrl, curve.to);
        });

        raw.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcseek_core::math::rect;
    use lyon::path::PathEvent;

    #[test]
    fn outline_begins_at_the_arc_start() {
        let arc = ArcPath::from_bounds(rect(0.0, 0.0, 200.0, 200.0), 120.0);
        let path = arc.to_path();

        let first = path.iter().next().expect("path has events");
        match first {
            PathEvent::Begin { at } => {
                let start = arc.start_point();
                assert!((at.x - start.x).abs() < 1e-2);
                assert!((at.y - start.y).abs() < 1e-2);
            }
            other => panic!("expected Begin, got {:?}", other),
        }
    }

    #[test]
    fn outline_is_a_single_open_subpath() {
        let arc = ArcPath::from_bounds(rect(0.0, 0.0, 100.0, 100.0), 90.0);
        let path = arc.to_path();

        let mut begins = 0;
        let mut closed = false;
        for event in path.iter() {
            match event {
                PathEvent::Begin { .. } => begins += 1,
                PathEvent::End { close, .. } => closed = close,
                _ => {}
            }
        }
        assert_eq!(begins, 1);
        assert!(!closed);
    }
}
