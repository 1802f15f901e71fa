//! The arc seek bar component.
//!
//! A plain synchronous state machine: the host forwards raw touch points and
//! size changes, and reads back thumb placement, current color, and a
//! [`RenderPlan`]. Nothing here draws pixels.

use arcseek_core::color::RGBA8;
use arcseek_core::gradient::GradientRamp;
use arcseek_core::math::{angle_of, degrees, normalize_degrees, rect, rotate_about, Point, Rect};
use arcseek_path::ArcPath;
use smallvec::SmallVec;

use crate::primitive::{
    ArcStrokePrimitive, BorderStrokePrimitive, Primitive, RenderPlan, ShadowPrimitive,
    ThumbPrimitive,
};
use crate::style::{ArcSeekBarStyle, ConfigError, DEFAULT_EDGE_LENGTH};

/// Drag updates that would move the fraction further than this are dropped,
/// so a drag cannot jump across the open gap of the track.
const MAX_DRAG_JUMP: f32 = 0.5;

/// A touch-down within this multiple of the thumb radius arms a drag.
const DRAG_CAPTURE_FACTOR: f32 = 1.5;

/// A raw touch event in screen space, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    Cancel,
}

/// Listener notifications, delivered synchronously during the call that
/// caused them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekBarEvent {
    /// A touch went down on the widget, whether or not a drag was armed.
    StartTrackingTouch,
    /// The integer progress changed. `from_user` is true for drags and taps,
    /// false for programmatic updates and state restoration.
    ProgressChanged { progress: i32, from_user: bool },
    /// A drag or a completed tap finished.
    StopTrackingTouch,
}

/// Host-supplied membership test for the visually filled track band.
///
/// The core hands the host the arc outline and stroke width; the host owns
/// rasterizing that stroked band (intersected with its bounds) into
/// something it can query. Taps are accepted only inside this region.
pub trait ArcRegion {
    /// Whether the arc-space `point` lies inside the filled track band.
    fn contains(&self, point: Point) -> bool;
}

impl<F: Fn(Point) -> bool> ArcRegion for F {
    fn contains(&self, point: Point) -> bool {
        self(point)
    }
}

/// Decides at touch-down whether a drag may start: the (rotation-corrected)
/// touch point must land within [`DRAG_CAPTURE_FACTOR`] thumb radii of the
/// thumb center. The decision holds for the rest of the gesture.
pub fn can_start_drag(down: Point, thumb: Point, thumb_radius: f32) -> bool {
    let distance = (down - thumb).length();
    distance <= thumb_radius * DRAG_CAPTURE_FACTOR
}

pub struct ArcSeekBar {
    style: ArcSeekBarStyle,
    ramp: GradientRamp,
    bounds: Rect,
    path: ArcPath,
    progress_present: f32,
    thumb_pos: Point,
    can_drag: bool,
    moved: bool,
    last_progress: i32,
    needs_redraw: bool,
    listener: Option<Box<dyn FnMut(SeekBarEvent)>>,
    region: Option<Box<dyn ArcRegion>>,
}

impl ArcSeekBar {
    /// Creates the widget with a default-sized layout; hosts are expected to
    /// call [`on_size_changed`](Self::on_size_changed) once real bounds are
    /// known.
    pub fn new(style: ArcSeekBarStyle) -> Result<Self, ConfigError> {
        style.validate()?;
        let ramp = GradientRamp::new(style.arc_colors.iter().copied())?;
        let bounds = rect(0.0, 0.0, DEFAULT_EDGE_LENGTH, DEFAULT_EDGE_LENGTH);
        let path = ArcPath::from_bounds(content_box(&style, bounds), style.open_angle);

        let mut bar = Self {
            style,
            ramp,
            bounds,
            path,
            progress_present: 0.0,
            thumb_pos: Point::zero(),
            can_drag: false,
            moved: false,
            last_progress: -1,
            needs_redraw: true,
            listener: None,
            region: None,
        };
        bar.compute_thumb();
        Ok(bar)
    }

    /// Registers the listener receiving [`SeekBarEvent`]s.
    pub fn set_listener(&mut self, listener: impl FnMut(SeekBarEvent) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Registers the host's filled-band region used for tap hit-testing.
    /// Without one, taps never land (drags are unaffected).
    pub fn set_region(&mut self, region: impl ArcRegion + 'static) {
        self.region = Some(Box::new(region));
    }

    pub fn style(&self) -> &ArcSeekBarStyle {
        &self.style
    }

    /// Replaces the configuration, revalidating it and rebuilding the
    /// gradient ramp, track geometry, and thumb position.
    pub fn set_style(&mut self, style: ArcSeekBarStyle) -> Result<(), ConfigError> {
        style.validate()?;
        self.ramp = GradientRamp::new(style.arc_colors.iter().copied())?;
        self.style = style;
        self.rebuild_geometry();
        Ok(())
    }

    /// Lays the widget out in `bounds` and rebuilds the track.
    ///
    /// Safe to call repeatedly with the same bounds; the rebuild is
    /// idempotent.
    pub fn on_size_changed(&mut self, bounds: Rect) -> Result<(), ConfigError> {
        if !(bounds.size.width > 0.0 && bounds.size.height > 0.0) {
            return Err(ConfigError::DegenerateBounds {
                width: bounds.size.width,
                height: bounds.size.height,
            });
        }
        self.bounds = bounds;
        self.rebuild_geometry();
        Ok(())
    }

    /// Feeds one raw touch event through the gesture state machine.
    pub fn on_touch(&mut self, event: TouchEvent) {
        match event {
            TouchEvent::Down(point) => {
                self.moved = false;
                self.can_drag = self.hits_thumb(point);
                self.emit(SeekBarEvent::StartTrackingTouch);
            }
            TouchEvent::Move(point) => {
                if !self.can_drag {
                    return;
                }
                let next = self.touch_to_fraction(point);
                if (next - self.progress_present).abs() > MAX_DRAG_JUMP {
                    // Would jump across the open gap; keep the old fraction.
                    log::trace!("drag update rejected: {} -> {}", self.progress_present, next);
                    return;
                }
                self.progress_present = next;
                self.compute_thumb();
                let progress = self.progress();
                if progress != self.last_progress {
                    self.emit(SeekBarEvent::ProgressChanged {
                        progress,
                        from_user: true,
                    });
                    self.last_progress = progress;
                }
                self.moved = true;
                self.needs_redraw = true;
            }
            TouchEvent::Up(point) => {
                if self.moved {
                    self.emit(SeekBarEvent::StopTrackingTouch);
                } else if self.is_in_arc_region(point) {
                    // Tap-to-seek snaps directly and may cross the gap.
                    self.progress_present = self.touch_to_fraction(point);
                    self.compute_thumb();
                    let progress = self.progress();
                    self.emit(SeekBarEvent::ProgressChanged {
                        progress,
                        from_user: true,
                    });
                    self.last_progress = progress;
                    self.emit(SeekBarEvent::StopTrackingTouch);
                    self.needs_redraw = true;
                }
                self.can_drag = false;
                self.moved = false;
            }
            TouchEvent::Cancel => {
                if self.moved {
                    self.emit(SeekBarEvent::StopTrackingTouch);
                }
                self.can_drag = false;
                self.moved = false;
            }
        }
    }

    /// Sets the integer progress, clamped to `[0, max_value]`. Always
    /// notifies the listener, with `from_user` false.
    pub fn set_progress(&mut self, progress: i32) {
        let clamped = progress.clamp(0, self.style.max_value);
        self.progress_present = clamped as f32 / self.style.max_value as f32;
        self.compute_thumb();
        self.emit(SeekBarEvent::ProgressChanged {
            progress: clamped,
            from_user: false,
        });
        self.needs_redraw = true;
    }

    /// The current integer progress, `floor(fraction * max_value)`.
    pub fn progress(&self) -> i32 {
        (self.progress_present * self.style.max_value as f32) as i32
    }

    /// The progress fraction in `[0, 1]`, the single source of truth.
    pub fn fraction(&self) -> f32 {
        self.progress_present
    }

    /// The gradient color at the current progress.
    pub fn color(&self) -> RGBA8 {
        self.ramp.color_at(self.progress_present)
    }

    /// The thumb center in arc space. The host draws it under the same
    /// rotation as the track.
    pub fn thumb_position(&self) -> Point {
        self.thumb_pos
    }

    /// The track geometry in arc space.
    pub fn arc_path(&self) -> &ArcPath {
        &self.path
    }

    /// The fraction to persist across host lifecycle events.
    pub fn saved_fraction(&self) -> f32 {
        self.progress_present
    }

    /// Restores a persisted fraction, clamped to `[0, 1]`, and notifies the
    /// listener with the restored integer progress (`from_user` false).
    pub fn restore_fraction(&mut self, fraction: f32) {
        self.progress_present = fraction.clamp(0.0, 1.0);
        self.compute_thumb();
        self.emit(SeekBarEvent::ProgressChanged {
            progress: self.progress(),
            from_user: false,
        });
        self.needs_redraw = true;
    }

    /// Whether anything changed since the last [`render`](Self::render) call.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Produces this frame's drawing instructions and clears the redraw flag.
    pub fn render(&mut self) -> RenderPlan {
        self.needs_redraw = false;
        let path = self.path.to_path();

        let mut primitives: SmallVec<[Primitive; 4]> = SmallVec::new();
        if self.style.shadow_radius > 0.0 {
            primitives.push(
                ShadowPrimitive {
                    path: path.clone(),
                    radius: self.style.shadow_radius * 2.0,
                    color: self.color(),
                }
                .into(),
            );
        }
        primitives.push(
            ArcStrokePrimitive {
                path: path.clone(),
                width: self.style.arc_width,
                gradient_stops: self.ramp.sweep_stops(self.style.open_angle),
                gradient_center: self.path.center,
                round_cap: true,
            }
            .into(),
        );
        if self.style.border_width > 0.0 {
            primitives.push(
                BorderStrokePrimitive {
                    path,
                    width: self.style.border_width,
                    color: self.style.border_color,
                }
                .into(),
            );
        }
        primitives.push(
            ThumbPrimitive {
                center: self.thumb_pos,
                radius: self.style.thumb_radius,
                width: self.style.thumb_width,
                color: self.style.thumb_color,
                mode: self.style.thumb_mode,
            }
            .into(),
        );

        RenderPlan {
            rotation_degrees: self.style.rotate_angle,
            rotation_center: self.path.center,
            primitives,
        }
    }

    /// Maps a raw screen touch point to a progress fraction in `[0, 1]`.
    ///
    /// The point is first brought into arc space by undoing the display
    /// rotation; the rotation angle is then subtracted from the measured
    /// angle a second time, compensating for the rotation the host applies
    /// at draw time. Both adjustments are load-bearing for the on-screen
    /// mapping; do not remove either.
    pub fn touch_to_fraction(&self, raw: Point) -> f32 {
        let center = self.path.center;
        let in_arc_space = rotate_about(raw, center, degrees(-self.style.rotate_angle));
        let angle = angle_of(in_arc_space, center);
        let mut diff = normalize_degrees(angle - self.style.rotate_angle);
        diff -= self.style.open_angle / 2.0;
        (diff / (360.0 - self.style.open_angle)).clamp(0.0, 1.0)
    }

    /// Maps a progress fraction to a distance along the track.
    pub fn fraction_to_distance(&self, fraction: f32) -> f32 {
        fraction.clamp(0.0, 1.0) * self.path.length()
    }

    fn rebuild_geometry(&mut self) {
        let content = content_box(&self.style, self.bounds);
        self.path = ArcPath::from_bounds(content, self.style.open_angle);
        self.compute_thumb();
        self.needs_redraw = true;
    }

    fn compute_thumb(&mut self) {
        let distance = self.fraction_to_distance(self.progress_present);
        let (position, _tangent) = self.path.pos_tan_at(distance);
        self.thumb_pos = position;
    }

    fn hits_thumb(&self, raw: Point) -> bool {
        let in_arc_space = rotate_about(raw, self.path.center, degrees(-self.style.rotate_angle));
        can_start_drag(in_arc_space, self.thumb_pos, self.style.thumb_radius)
    }

    fn is_in_arc_region(&self, raw: Point) -> bool {
        let Some(region) = self.region.as_ref() else {
            return false;
        };
        let in_arc_space = rotate_about(raw, self.path.center, degrees(-self.style.rotate_angle));
        region.contains(in_arc_space)
    }

    fn emit(&mut self, event: SeekBarEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener(event);
        }
    }
}

/// The square content rect the track is inscribed in: centered along the
/// larger dimension and inset so stroke, border, and shadow stay inside.
fn content_box(style: &ArcSeekBarStyle, bounds: Rect) -> Rect {
    let fix = style.content_inset();
    let w = bounds.size.width;
    let h = bounds.size.height;

    let (edge, start_x, start_y) = if w < h {
        (w - fix, bounds.origin.x, (h - w) / 2.0 + bounds.origin.y)
    } else {
        (h - fix, (w - h) / 2.0 + bounds.origin.x, bounds.origin.y)
    };

    rect(start_x + fix, start_y + fix, edge - fix, edge - fix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcseek_core::math::point;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Events = Rc<RefCell<Vec<SeekBarEvent>>>;

    fn bar_with_events(style: ArcSeekBarStyle) -> (ArcSeekBar, Events) {
        let mut bar = ArcSeekBar::new(style).unwrap();
        bar.on_size_changed(rect(0.0, 0.0, 240.0, 240.0)).unwrap();
        let events: Events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        bar.set_listener(move |event| sink.borrow_mut().push(event));
        (bar, events)
    }

    /// Builds the raw screen point whose touch mapping resolves to `fraction`.
    fn screen_point_for(bar: &ArcSeekBar, fraction: f32) -> Point {
        let style = bar.style().clone();
        let arc = *bar.arc_path();
        // Invert the mapping: the measured arc-space angle must come out at
        // open/2 + fraction * sweep + rotate (before the second subtraction).
        let angle = normalize_degrees(
            style.open_angle / 2.0 + fraction * (360.0 - style.open_angle) + style.rotate_angle,
        );
        let rad = angle.to_radians();
        let in_arc_space = point(
            arc.center.x + arc.radius * rad.cos(),
            arc.center.y + arc.radius * rad.sin(),
        );
        rotate_about(in_arc_space, arc.center, degrees(style.rotate_angle))
    }

    fn changed_events(events: &Events) -> Vec<(i32, bool)> {
        events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SeekBarEvent::ProgressChanged { progress, from_user } => {
                    Some((*progress, *from_user))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn touch_mapping_round_trips() {
        let (bar, _) = bar_with_events(ArcSeekBarStyle::default());
        for fraction in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
            let raw = screen_point_for(&bar, fraction);
            let mapped = bar.touch_to_fraction(raw);
            assert!(
                (mapped - fraction).abs() < 1e-3,
                "fraction {} mapped to {}",
                fraction,
                mapped
            );
        }
    }

    #[test]
    fn set_progress_round_trips_with_clamping() {
        let (mut bar, _) = bar_with_events(ArcSeekBarStyle::default());
        for (set, expected) in [(-5, 0), (0, 0), (50, 50), (100, 100), (105, 100)] {
            bar.set_progress(set);
            assert_eq!(bar.progress(), expected);
        }
    }

    #[test]
    fn set_progress_always_notifies_without_dedup() {
        let (mut bar, events) = bar_with_events(ArcSeekBarStyle::default());
        bar.set_progress(30);
        bar.set_progress(30);
        assert_eq!(changed_events(&events), vec![(30, false), (30, false)]);
    }

    #[test]
    fn fraction_to_distance_is_monotone_and_exact_at_ends() {
        let (bar, _) = bar_with_events(ArcSeekBarStyle::default());
        let mut last = -1.0f32;
        for i in 0..=20 {
            let fraction = i as f32 / 20.0;
            let distance = bar.fraction_to_distance(fraction);
            assert!(distance >= last);
            last = distance;
        }
        assert_eq!(bar.fraction_to_distance(0.0), 0.0);
        assert_eq!(bar.fraction_to_distance(1.0), bar.arc_path().length());
        assert_eq!(bar.fraction_to_distance(2.0), bar.arc_path().length());
    }

    #[test]
    fn thumb_sits_on_track_endpoints() {
        let style = ArcSeekBarStyle {
            max_value: 200,
            ..Default::default()
        };
        let (mut bar, _) = bar_with_events(style);

        bar.set_progress(0);
        let start = bar.arc_path().start_point();
        assert!((bar.thumb_position() - start).length() < 1e-3);

        bar.set_progress(200);
        let end = bar.arc_path().end_point();
        assert!((bar.thumb_position() - end).length() < 1e-3);
    }

    #[test]
    fn drag_gate_distance_threshold() {
        let thumb = point(100.0, 100.0);
        assert!(can_start_drag(point(122.0, 100.0), thumb, 15.0));
        assert!(!can_start_drag(point(123.0, 100.0), thumb, 15.0));
    }

    #[test]
    fn start_tracking_fires_on_every_down() {
        let (mut bar, events) = bar_with_events(ArcSeekBarStyle::default());
        // Far away from the thumb, so no drag is armed.
        bar.on_touch(TouchEvent::Down(point(0.0, 0.0)));
        assert_eq!(*events.borrow(), vec![SeekBarEvent::StartTrackingTouch]);
    }

    #[test]
    fn move_without_armed_drag_is_a_noop() {
        let (mut bar, events) = bar_with_events(ArcSeekBarStyle::default());
        bar.set_progress(10);
        events.borrow_mut().clear();

        bar.on_touch(TouchEvent::Down(point(0.0, 0.0)));
        bar.on_touch(TouchEvent::Move(screen_point_for(&bar, 0.2)));
        bar.on_touch(TouchEvent::Up(point(0.0, 0.0)));

        assert_eq!(bar.progress(), 10);
        assert_eq!(*events.borrow(), vec![SeekBarEvent::StartTrackingTouch]);
    }

    fn thumb_screen_point(bar: &ArcSeekBar) -> Point {
        rotate_about(
            bar.thumb_position(),
            bar.arc_path().center,
            degrees(bar.style().rotate_angle),
        )
    }

    #[test]
    fn drag_across_the_gap_is_rejected() {
        let (mut bar, _) = bar_with_events(ArcSeekBarStyle::default());
        bar.restore_fraction(0.1);

        bar.on_touch(TouchEvent::Down(thumb_screen_point(&bar)));
        bar.on_touch(TouchEvent::Move(screen_point_for(&bar, 0.9)));

        assert!((bar.fraction() - 0.1).abs() < 1e-4);
    }

    #[test]
    fn tap_across_the_gap_is_accepted() {
        let (mut bar, events) = bar_with_events(ArcSeekBarStyle::default());
        bar.set_region(|_: Point| true);
        bar.restore_fraction(0.1);
        events.borrow_mut().clear();

        // Down away from the thumb so no drag is armed, then a clean up.
        bar.on_touch(TouchEvent::Down(point(0.0, 0.0)));
        bar.on_touch(TouchEvent::Up(screen_point_for(&bar, 0.9)));

        assert!((bar.fraction() - 0.9).abs() < 1e-3);
        // The emitted progress is derived from the tapped fraction.
        assert_eq!(
            *events.borrow(),
            vec![
                SeekBarEvent::StartTrackingTouch,
                SeekBarEvent::ProgressChanged {
                    progress: bar.progress(),
                    from_user: true
                },
                SeekBarEvent::StopTrackingTouch,
            ]
        );
        assert!((89..=90).contains(&bar.progress()));
    }

    #[test]
    fn tap_without_region_never_lands() {
        let (mut bar, events) = bar_with_events(ArcSeekBarStyle::default());
        bar.restore_fraction(0.1);
        events.borrow_mut().clear();

        bar.on_touch(TouchEvent::Down(point(0.0, 0.0)));
        bar.on_touch(TouchEvent::Up(screen_point_for(&bar, 0.9)));

        assert!((bar.fraction() - 0.1).abs() < 1e-4);
        assert_eq!(*events.borrow(), vec![SeekBarEvent::StartTrackingTouch]);
    }

    #[test]
    fn drag_updates_deduplicate_by_integer_progress() {
        let (mut bar, events) = bar_with_events(ArcSeekBarStyle::default());
        bar.set_progress(50);
        events.borrow_mut().clear();

        bar.on_touch(TouchEvent::Down(thumb_screen_point(&bar)));
        bar.on_touch(TouchEvent::Move(screen_point_for(&bar, 0.502)));
        bar.on_touch(TouchEvent::Move(screen_point_for(&bar, 0.504)));
        bar.on_touch(TouchEvent::Up(point(0.0, 0.0)));

        let user_changes: Vec<_> = changed_events(&events)
            .into_iter()
            .filter(|(_, from_user)| *from_user)
            .collect();
        assert_eq!(user_changes, vec![(50, true)]);
        assert_eq!(
            events.borrow().last(),
            Some(&SeekBarEvent::StopTrackingTouch)
        );
    }

    #[test]
    fn drag_emits_once_per_integer_step() {
        let (mut bar, events) = bar_with_events(ArcSeekBarStyle::default());
        bar.set_progress(50);
        events.borrow_mut().clear();

        bar.on_touch(TouchEvent::Down(thumb_screen_point(&bar)));
        bar.on_touch(TouchEvent::Move(screen_point_for(&bar, 0.555)));
        bar.on_touch(TouchEvent::Move(screen_point_for(&bar, 0.605)));

        let user_changes: Vec<_> = changed_events(&events)
            .into_iter()
            .filter(|(_, from_user)| *from_user)
            .collect();
        assert_eq!(user_changes, vec![(55, true), (60, true)]);
    }

    #[test]
    fn cancel_after_drag_stops_tracking() {
        let (mut bar, events) = bar_with_events(ArcSeekBarStyle::default());
        bar.set_progress(50);
        events.borrow_mut().clear();

        bar.on_touch(TouchEvent::Down(thumb_screen_point(&bar)));
        bar.on_touch(TouchEvent::Move(screen_point_for(&bar, 0.6)));
        bar.on_touch(TouchEvent::Cancel);

        assert_eq!(
            events.borrow().last(),
            Some(&SeekBarEvent::StopTrackingTouch)
        );
    }

    #[test]
    fn restore_fraction_notifies_programmatically() {
        let (mut bar, events) = bar_with_events(ArcSeekBarStyle::default());
        events.borrow_mut().clear();
        bar.restore_fraction(0.425);
        assert_eq!(changed_events(&events), vec![(42, false)]);
        assert!((bar.saved_fraction() - 0.425).abs() < 1e-6);

        bar.restore_fraction(7.0);
        assert_eq!(bar.progress(), bar.style().max_value);
    }

    #[test]
    fn degenerate_bounds_are_rejected() {
        let (mut bar, _) = bar_with_events(ArcSeekBarStyle::default());
        let result = bar.on_size_changed(rect(0.0, 0.0, 0.0, 120.0));
        assert!(matches!(
            result,
            Err(ConfigError::DegenerateBounds { .. })
        ));
    }

    #[test]
    fn resize_recomputes_thumb_on_new_geometry() {
        let (mut bar, _) = bar_with_events(ArcSeekBarStyle::default());
        bar.set_progress(100);
        bar.on_size_changed(rect(0.0, 0.0, 400.0, 400.0)).unwrap();
        let end = bar.arc_path().end_point();
        assert!((bar.thumb_position() - end).length() < 1e-3);
    }

    #[test]
    fn render_plan_paint_order_and_rotation() {
        let style = ArcSeekBarStyle {
            border_width: 3.0,
            shadow_radius: 4.0,
            ..Default::default()
        };
        let (mut bar, _) = bar_with_events(style);
        assert!(bar.needs_redraw());

        let plan = bar.render();
        assert!(!bar.needs_redraw());
        assert_eq!(plan.rotation_degrees, 90.0);
        assert_eq!(plan.rotation_center, bar.arc_path().center);

        let kinds: Vec<_> = plan
            .primitives
            .iter()
            .map(|p| match p {
                Primitive::Shadow(_) => "shadow",
                Primitive::ArcStroke(_) => "arc",
                Primitive::BorderStroke(_) => "border",
                Primitive::Thumb(_) => "thumb",
            })
            .collect();
        assert_eq!(kinds, vec!["shadow", "arc", "border", "thumb"]);
    }

    #[test]
    fn render_omits_disabled_shadow_and_border() {
        let (mut bar, _) = bar_with_events(ArcSeekBarStyle::default());
        let plan = bar.render();
        assert_eq!(plan.primitives.len(), 2);
        assert!(matches!(plan.primitives[0], Primitive::ArcStroke(_)));
        assert!(matches!(plan.primitives[1], Primitive::Thumb(_)));
    }
}
