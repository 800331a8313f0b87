// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};
use smallvec::SmallVec;

use circuitry_events::{
    CursorIcon, EventStatus, Key, KeyEvent, Modifiers, PointerButton, PointerEvent, WheelEvent,
};
use circuitry_scene::{Command, Scene, SceneMode};

use crate::settings::{ViewSettings, ViewportConfig};
use crate::sink::InputSink;
use crate::zoom::{ZoomPolicy, ZoomSpec};
use crate::Notice;

/// Interaction mode of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewportMode {
    /// Default input handling; unclaimed events fall through to the host.
    #[default]
    Normal,
    /// Middle-button panning; pointer moves translate the view.
    Pan,
}

/// Interactive viewport controller over a schematic scene.
///
/// `Viewport` tracks a rectangular region in view/device space and a uniform
/// pan+zoom transform mapping scene coordinates into that region. It:
/// - Converts points and rectangles between scene and view coordinates.
/// - Steps zoom on a normalized `[0, 1]` scale (see [`ZoomSpec`]), keeping
///   the scene point under the pointer fixed while rescaling.
/// - Enters a panning mode on middle-button drags.
/// - Routes editing keys to the attached [`Scene`].
/// - Maintains a grow-only scene rect covering everything the user has
///   scrolled past.
///
/// The attached scene is owned by value while attached; attach and detach
/// with [`Viewport::set_scene`] and [`Viewport::take_scene`]. All scene-
/// dependent operations silently no-op while no scene is attached.
#[derive(Debug)]
pub struct Viewport<S> {
    view_rect: Rect,
    zoom_spec: ZoomSpec,
    policy: ZoomPolicy,
    config: ViewportConfig,
    settings: ViewSettings,
    /// Normalized zoom value; nominally in `[0, 1]`, see [`ZoomPolicy`].
    zoom_value: f64,
    /// Actual zoom ratio derived from `zoom_value`.
    zoom: f64,
    pan: Vec2,
    scene_to_view: Affine,
    view_to_scene: Affine,
    mode: ViewportMode,
    /// Pan gesture anchor in view coordinates; `Some` only while panning.
    pan_anchor: Option<Point>,
    /// Last observed pointer position; zoom anchors under it.
    last_pointer: Option<Point>,
    scene_rect: Option<Rect>,
    scene: Option<S>,
    notices: SmallVec<[Notice; 4]>,
}

impl<S: Scene> Viewport<S> {
    /// Creates a viewport covering `view_rect` at 1.0× actual zoom.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let zoom_spec = ZoomSpec::default();
        let mut vp = Self {
            view_rect,
            zoom_spec,
            policy: ZoomPolicy::default(),
            config: ViewportConfig::default(),
            settings: ViewSettings::default(),
            zoom_value: zoom_spec.value_for(1.0),
            zoom: 1.0,
            pan: Vec2::ZERO,
            scene_to_view: Affine::IDENTITY,
            view_to_scene: Affine::IDENTITY,
            mode: ViewportMode::default(),
            pan_anchor: None,
            last_pointer: None,
            scene_rect: None,
            scene: None,
            notices: SmallVec::new(),
        };
        vp.rebuild_transforms();
        vp
    }

    /// Replaces the zoom range/step configuration.
    ///
    /// The normalized value is re-derived so the actual zoom is preserved
    /// under the new spec.
    pub fn set_zoom_spec(&mut self, spec: ZoomSpec) {
        self.zoom_spec = spec;
        self.zoom_value = spec.value_for(self.zoom);
    }

    /// Sets the keyboard-zoom clamping policy.
    pub fn set_zoom_policy(&mut self, policy: ZoomPolicy) {
        self.policy = policy;
    }

    /// Replaces the margin configuration.
    pub fn set_config(&mut self, config: ViewportConfig) {
        self.config = config;
    }

    /// Stores the view settings and notifies the host of new render hints.
    pub fn apply_settings(&mut self, settings: ViewSettings) {
        self.settings = settings;
        self.notices.push(Notice::RenderHintsChanged {
            antialiasing: settings.antialiasing,
        });
    }

    /// Returns the current view settings.
    #[must_use]
    pub fn settings(&self) -> ViewSettings {
        self.settings
    }

    /// Attaches a scene (or detaches with `None`), replacing any previous one.
    ///
    /// The cursor is re-derived from the new scene's mode.
    pub fn set_scene(&mut self, scene: Option<S>) {
        self.scene = scene;
        if let Some(mode) = self.scene.as_ref().map(Scene::mode) {
            self.note_scene_mode(mode);
        }
    }

    /// Detaches and returns the attached scene, if any.
    pub fn take_scene(&mut self) -> Option<S> {
        self.scene.take()
    }

    /// Returns a reference to the attached scene.
    #[must_use]
    pub fn scene(&self) -> Option<&S> {
        self.scene.as_ref()
    }

    /// Returns a mutable reference to the attached scene.
    pub fn scene_mut(&mut self) -> Option<&mut S> {
        self.scene.as_mut()
    }

    /// Returns the view rectangle in view/device coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Resizes the view rectangle (host resize hook).
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
        self.update_scene_rect();
    }

    /// Returns the current interaction mode.
    #[must_use]
    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    /// Returns the actual zoom ratio.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the normalized zoom value.
    #[must_use]
    pub fn zoom_value(&self) -> f64 {
        self.zoom_value
    }

    /// Returns the grow-only scene rect, if any region has been visited yet.
    #[must_use]
    pub fn scene_rect(&self) -> Option<Rect> {
        self.scene_rect
    }

    /// Sets the normalized value for a desired actual zoom ratio and rescales.
    ///
    /// The value is intentionally not clamped here; range policy applies only
    /// on the stepping paths.
    pub fn set_zoom_value(&mut self, actual: f64) {
        self.zoom_value = self.zoom_spec.value_for(actual);
        self.update_scale();
    }

    /// Steps the zoom in (keyboard path).
    pub fn zoom_in(&mut self) {
        self.step_zoom(self.zoom_spec.step);
    }

    /// Steps the zoom out (keyboard path).
    pub fn zoom_out(&mut self) {
        self.step_zoom(-self.zoom_spec.step);
    }

    /// Resets the zoom to 1.0× actual.
    pub fn reset_zoom(&mut self) {
        self.set_zoom_value(1.0);
    }

    fn step_zoom(&mut self, delta: f64) {
        self.zoom_value += delta;
        if self.policy.clamp_on_keyboard_zoom {
            self.zoom_value = self.zoom_value.clamp(0.0, 1.0);
        }
        self.update_scale();
    }

    /// Fits every top-level item into the view.
    ///
    /// No-op without a scene or when the scene has no items. The resulting
    /// zoom is capped so that fitting never zooms in past 1.0× from a
    /// zoomed-out state, and never past the previous zoom from a zoomed-in
    /// state.
    pub fn fit_all(&mut self) {
        let Some(scene) = self.scene.as_ref() else {
            return;
        };
        let mut union: Option<Rect> = None;
        for item in scene.item_bounds() {
            let r = item.scene_rect();
            union = Some(match union {
                Some(u) => u.union(r),
                None => r,
            });
        }
        let Some(rect) = union else {
            return;
        };

        let pad = self.config.fit_padding.max(0.0);
        let rect = rect.inflate(pad, pad);
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let view = self.view_rect.size();
        if view.width <= 0.0 || view.height <= 0.0 {
            return;
        }

        // Keep-aspect fit: the smaller of the two axis ratios.
        let fit = (view.width / rect.width()).min(view.height / rect.height());
        let previous = self.zoom;
        let capped = if previous < 1.0 {
            fit.min(1.0)
        } else {
            fit.min(previous)
        };

        self.zoom_value = self.zoom_spec.value_for(capped);
        self.zoom = self.zoom_spec.actual_for(self.zoom_value);

        // Center the fitted rect in the view at the capped zoom.
        let view_origin = self.view_rect.origin().to_vec2();
        let view_center = self.view_rect.center().to_vec2();
        self.pan = view_center - view_origin - rect.center().to_vec2() * self.zoom;
        self.rebuild_transforms();
        self.update_scene_rect();
        self.notices.push(Notice::ZoomChanged(self.zoom));
    }

    /// Converts a scene-space point into view/device coordinates.
    #[must_use]
    pub fn scene_to_view_point(&self, pt: Point) -> Point {
        self.scene_to_view * pt
    }

    /// Converts a view/device-space point into scene coordinates.
    #[must_use]
    pub fn view_to_scene_point(&self, pt: Point) -> Point {
        self.view_to_scene * pt
    }

    /// Returns the scene-space rectangle currently visible through the view.
    #[must_use]
    pub fn visible_scene_rect(&self) -> Rect {
        // Uniform axis-aligned transform: two opposite corners suffice.
        let p0 = self.view_to_scene * self.view_rect.origin();
        let p1 = self.view_to_scene * Point::new(self.view_rect.max_x(), self.view_rect.max_y());
        Rect::from_points(p0, p1)
    }

    /// Drains the accumulated outbound notices.
    pub fn take_notices(&mut self) -> SmallVec<[Notice; 4]> {
        core::mem::take(&mut self.notices)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            view_rect: self.view_rect,
            visible_scene_rect: self.visible_scene_rect(),
            scene_rect: self.scene_rect,
            zoom: self.zoom,
            zoom_value: self.zoom_value,
            pan: self.pan,
            mode: self.mode,
            settings: self.settings,
        }
    }

    /// Re-derives the actual zoom and rescales around the pointer.
    ///
    /// The scene point under the last observed pointer position (the view
    /// center before any pointer has been seen) stays fixed across the
    /// rescale. Emits [`Notice::ZoomChanged`].
    fn update_scale(&mut self) {
        let anchor = self
            .last_pointer
            .unwrap_or_else(|| self.view_rect.center());
        let anchored_scene_pt = self.view_to_scene * anchor;

        self.zoom = self.zoom_spec.actual_for(self.zoom_value);
        self.rebuild_transforms();

        let drifted = self.scene_to_view * anchored_scene_pt;
        self.pan += anchor - drifted;
        self.rebuild_transforms();

        self.update_scene_rect();
        self.notices.push(Notice::ZoomChanged(self.zoom));
    }

    fn rebuild_transforms(&mut self) {
        let view_origin = self.view_rect.origin().to_vec2();
        self.scene_to_view = Affine::translate(view_origin + self.pan) * Affine::scale(self.zoom);
        self.view_to_scene = self.scene_to_view.inverse();
    }

    /// Grows the scene rect to cover the padded visible region.
    ///
    /// The scene rect never shrinks; it only grows to the union of its old
    /// value and the visible region inflated by the configured margin.
    fn update_scene_rect(&mut self) {
        let m = self.config.scene_rect_margin;
        let padded = self.visible_scene_rect().inflate(m, m);
        let grown = match self.scene_rect {
            None => padded,
            Some(current) if contains(current, padded) => return,
            Some(current) => current.union(padded),
        };
        self.scene_rect = Some(grown);
        self.notices.push(Notice::SceneRectChanged(grown));
    }

    fn set_mode(&mut self, mode: ViewportMode) {
        self.mode = mode;
        self.notices.push(Notice::ModeChanged(mode));
    }

    /// Maps a scene mode onto the cursor the host should show.
    fn note_scene_mode(&mut self, mode: SceneMode) {
        let cursor = match mode {
            SceneMode::Normal => CursorIcon::Arrow,
            SceneMode::Wire => CursorIcon::Crosshair,
        };
        self.notices.push(Notice::CursorChanged(cursor));
    }

    /// Switches the scene into `mode`, updating the cursor on actual change.
    fn set_scene_mode(&mut self, mode: SceneMode) {
        let changed = match self.scene.as_mut() {
            Some(scene) => {
                let before = scene.mode();
                scene.set_mode(mode);
                before != mode
            }
            None => false,
        };
        if changed {
            self.note_scene_mode(mode);
        }
    }

    fn delete_pressed(&mut self) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        if scene.mode() == SceneMode::Normal {
            for id in scene.selected_top_level_items() {
                scene.push_command(Command::RemoveItem(id));
            }
        } else {
            scene.remove_last_wire_point();
        }
    }
}

impl<S: Scene> InputSink for Viewport<S> {
    fn key_down(&mut self, event: &KeyEvent) -> EventStatus {
        if event.modifiers.contains(Modifiers::CTRL) {
            match event.key {
                Key::Plus => {
                    self.zoom_in();
                    return EventStatus::Handled;
                }
                Key::Minus => {
                    self.zoom_out();
                    return EventStatus::Handled;
                }
                Key::Digit0 => {
                    self.reset_zoom();
                    return EventStatus::Handled;
                }
                Key::KeyW => {
                    self.set_scene_mode(SceneMode::Wire);
                    return EventStatus::Handled;
                }
                Key::Space => {
                    if let Some(scene) = self.scene.as_mut() {
                        scene.toggle_wire_posture();
                    }
                    return EventStatus::Handled;
                }
                _ => {}
            }
        }

        match event.key {
            Key::Escape => {
                self.set_scene_mode(SceneMode::Normal);
                EventStatus::Handled
            }
            Key::Delete => {
                self.delete_pressed();
                EventStatus::Handled
            }
            Key::Backspace => {
                let wire_mode = self
                    .scene
                    .as_ref()
                    .is_some_and(|s| s.mode() == SceneMode::Wire);
                if wire_mode {
                    if let Some(scene) = self.scene.as_mut() {
                        scene.remove_last_wire_point();
                    }
                    EventStatus::Handled
                } else {
                    EventStatus::Ignored
                }
            }
            _ => EventStatus::Ignored,
        }
    }

    fn wheel(&mut self, event: &WheelEvent) -> EventStatus {
        if !event.modifiers.contains(Modifiers::CTRL) {
            return EventStatus::Ignored;
        }
        self.last_pointer = Some(event.pos);

        if event.delta_y > 0.0 {
            self.zoom_value += self.zoom_spec.step;
        } else if event.delta_y < 0.0 {
            self.zoom_value -= self.zoom_spec.step;
        }
        // The wheel path always clamps the normalized value.
        self.zoom_value = self.zoom_value.clamp(0.0, 1.0);
        self.update_scale();
        EventStatus::Handled
    }

    fn pointer_down(&mut self, event: &PointerEvent) -> EventStatus {
        if event.button == Some(PointerButton::Middle) {
            self.set_mode(ViewportMode::Pan);
            self.pan_anchor = Some(event.pos);
            self.notices.push(Notice::CursorChanged(CursorIcon::ClosedHand));
            return EventStatus::Handled;
        }
        EventStatus::Ignored
    }

    fn pointer_move(&mut self, event: &PointerEvent) -> EventStatus {
        self.last_pointer = Some(event.pos);

        match self.mode {
            ViewportMode::Normal => EventStatus::Ignored,
            ViewportMode::Pan => {
                let Some(anchor) = self.pan_anchor else {
                    return EventStatus::Ignored;
                };
                // Translate by the scene-space delta between pointer and
                // anchor; no zoom anchoring applies to this shift.
                let delta_scene =
                    (self.view_to_scene * event.pos) - (self.view_to_scene * anchor);
                self.pan += delta_scene * self.zoom;
                self.pan_anchor = Some(event.pos);
                self.rebuild_transforms();
                self.update_scene_rect();
                EventStatus::Handled
            }
        }
    }

    fn pointer_up(&mut self, event: &PointerEvent) -> EventStatus {
        if event.button == Some(PointerButton::Middle) {
            self.set_mode(ViewportMode::Normal);
            self.pan_anchor = None;
            self.notices.push(Notice::CursorChanged(CursorIcon::Arrow));
            return EventStatus::Handled;
        }
        EventStatus::Ignored
    }

    fn scene_mode_changed(&mut self, mode: SceneMode) -> EventStatus {
        self.note_scene_mode(mode);
        EventStatus::Handled
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// View rectangle in view/device coordinates.
    pub view_rect: Rect,
    /// Scene-space rectangle currently visible through the view.
    pub visible_scene_rect: Rect,
    /// Grow-only scene rect, if any region has been visited yet.
    pub scene_rect: Option<Rect>,
    /// Actual zoom ratio.
    pub zoom: f64,
    /// Normalized zoom value.
    pub zoom_value: f64,
    /// Pan offset in view coordinates.
    pub pan: Vec2,
    /// Interaction mode.
    pub mode: ViewportMode,
    /// Current view settings.
    pub settings: ViewSettings,
}

fn contains(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.y0 <= inner.y0 && outer.x1 >= inner.x1 && outer.y1 >= inner.y1
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use circuitry_events::{
        CursorIcon, EventStatus, Key, KeyEvent, Modifiers, PointerButton, PointerEvent, WheelEvent,
    };
    use circuitry_scene::{Command, Scene, SceneMode, SimpleScene};

    use super::{Viewport, ViewportMode};
    use crate::{InputSink, Notice, ViewSettings, ZoomPolicy, ZoomSpec};

    const EPS: f64 = 1e-9;

    fn viewport() -> Viewport<SimpleScene> {
        Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0))
    }

    fn ctrl(key: Key) -> KeyEvent {
        KeyEvent::new(key, Modifiers::CTRL)
    }

    fn middle(pos: Point) -> PointerEvent {
        PointerEvent::button(pos, PointerButton::Middle)
    }

    #[test]
    fn starts_at_unity_zoom() {
        let vp = viewport();
        assert!((vp.zoom() - 1.0).abs() < EPS);
        let spec = ZoomSpec::default();
        assert!((vp.zoom_value() - spec.value_for(1.0)).abs() < EPS);
    }

    #[test]
    fn set_zoom_value_reaches_requested_ratio() {
        let mut vp = viewport();
        vp.set_zoom_value(2.5);
        assert!((vp.zoom() - 2.5).abs() < EPS);

        vp.set_zoom_value(1.0);
        assert!((vp.zoom() - 1.0).abs() < EPS);
    }

    #[test]
    fn zoom_value_round_trips_through_rescale() {
        let mut vp = viewport();
        for i in 0..=10 {
            let actual = ZoomSpec::default().actual_for(f64::from(i) / 10.0);
            vp.set_zoom_value(actual);
            let recovered = ZoomSpec::default().value_for(vp.zoom());
            assert!(
                (recovered - vp.zoom_value()).abs() < EPS,
                "normalized value drifted through rescale"
            );
        }
    }

    #[test]
    fn repeated_zoom_in_is_monotone() {
        let mut vp = viewport();
        let mut prev = vp.zoom_value();
        for _ in 0..40 {
            vp.zoom_in();
            assert!(vp.zoom_value() >= prev, "zoom_in must never decrease");
            prev = vp.zoom_value();
        }
    }

    #[test]
    fn keyboard_zoom_overshoots_without_clamp_policy() {
        let mut vp = viewport();
        for _ in 0..40 {
            vp.zoom_in();
        }
        // 0.05 steps from value_for(1.0) ≈ 0.376: forty steps pass 1.0.
        assert!(vp.zoom_value() > 1.0);
        assert!(vp.zoom() > ZoomSpec::default().max);
    }

    #[test]
    fn keyboard_zoom_clamps_with_policy() {
        let mut vp = viewport();
        vp.set_zoom_policy(ZoomPolicy {
            clamp_on_keyboard_zoom: true,
        });
        for _ in 0..40 {
            vp.zoom_in();
        }
        assert!((vp.zoom_value() - 1.0).abs() < EPS);
        for _ in 0..80 {
            vp.zoom_out();
        }
        assert!(vp.zoom_value().abs() < EPS);
    }

    #[test]
    fn wheel_zoom_clamps_at_the_boundaries() {
        let mut vp = viewport();
        let pos = Point::new(400.0, 300.0);
        for _ in 0..60 {
            let status = vp.wheel(&WheelEvent::new(pos, 1.0, Modifiers::CTRL));
            assert_eq!(status, EventStatus::Handled);
            assert!(vp.zoom_value() <= 1.0 + EPS);
        }
        assert!((vp.zoom_value() - 1.0).abs() < EPS);

        for _ in 0..60 {
            let _ = vp.wheel(&WheelEvent::new(pos, -1.0, Modifiers::CTRL));
            assert!(vp.zoom_value() >= -EPS);
        }
        assert!(vp.zoom_value().abs() < EPS);
    }

    #[test]
    fn wheel_without_ctrl_is_delegated() {
        let mut vp = viewport();
        let before = vp.zoom_value();
        let status = vp.wheel(&WheelEvent::new(Point::ZERO, 1.0, Modifiers::empty()));
        assert_eq!(status, EventStatus::Ignored);
        assert!((vp.zoom_value() - before).abs() < EPS);
    }

    #[test]
    fn rescale_keeps_scene_point_under_pointer() {
        let mut vp = viewport();
        let pointer = Point::new(200.0, 150.0);
        let _ = vp.pointer_move(&PointerEvent::moved(pointer));

        let under_before = vp.view_to_scene_point(pointer);
        vp.zoom_in();
        vp.zoom_in();
        let under_after = vp.view_to_scene_point(pointer);

        assert!((under_after.x - under_before.x).abs() < EPS);
        assert!((under_after.y - under_before.y).abs() < EPS);
    }

    #[test]
    fn middle_press_enters_pan_and_sets_cursor() {
        let mut vp = viewport();
        let status = vp.pointer_down(&middle(Point::new(100.0, 100.0)));
        assert_eq!(status, EventStatus::Handled);
        assert_eq!(vp.mode(), ViewportMode::Pan);

        let notices = vp.take_notices();
        assert!(notices.contains(&Notice::ModeChanged(ViewportMode::Pan)));
        assert!(notices.contains(&Notice::CursorChanged(CursorIcon::ClosedHand)));
    }

    #[test]
    fn other_buttons_are_delegated() {
        let mut vp = viewport();
        let status = vp.pointer_down(&PointerEvent::button(Point::ZERO, PointerButton::Left));
        assert_eq!(status, EventStatus::Ignored);
        assert_eq!(vp.mode(), ViewportMode::Normal);
        let status = vp.pointer_up(&PointerEvent::button(Point::ZERO, PointerButton::Right));
        assert_eq!(status, EventStatus::Ignored);
    }

    #[test]
    fn pan_translates_by_exact_scene_delta() {
        let mut vp = viewport();
        vp.set_zoom_value(2.0);
        let _ = vp.take_notices();

        let start = Point::new(100.0, 100.0);
        let next = Point::new(130.0, 80.0);
        let delta_scene = vp.view_to_scene_point(next) - vp.view_to_scene_point(start);

        let visible_before = vp.visible_scene_rect();
        let _ = vp.pointer_down(&middle(start));
        let status = vp.pointer_move(&PointerEvent::moved(next));
        assert_eq!(status, EventStatus::Handled);
        let visible_after = vp.visible_scene_rect();

        // The view follows the pointer, so the visible region shifts the
        // opposite way by exactly the scene-space delta.
        assert!((visible_before.x0 - visible_after.x0 - delta_scene.x).abs() < EPS);
        assert!((visible_before.y0 - visible_after.y0 - delta_scene.y).abs() < EPS);
    }

    #[test]
    fn release_returns_to_normal_and_retires_anchor() {
        let mut vp = viewport();
        let _ = vp.pointer_down(&middle(Point::new(50.0, 50.0)));
        let _ = vp.pointer_move(&PointerEvent::moved(Point::new(60.0, 60.0)));

        let status = vp.pointer_up(&middle(Point::new(60.0, 60.0)));
        assert_eq!(status, EventStatus::Handled);
        assert_eq!(vp.mode(), ViewportMode::Normal);

        let notices = vp.take_notices();
        assert!(notices.contains(&Notice::ModeChanged(ViewportMode::Normal)));
        assert!(notices.contains(&Notice::CursorChanged(CursorIcon::Arrow)));

        // A further move must not pan.
        let visible = vp.visible_scene_rect();
        let status = vp.pointer_move(&PointerEvent::moved(Point::new(200.0, 200.0)));
        assert_eq!(status, EventStatus::Ignored);
        assert_eq!(vp.visible_scene_rect(), visible);
    }

    #[test]
    fn consecutive_pan_moves_accumulate() {
        let mut vp = viewport();
        let visible_before = vp.visible_scene_rect();

        let _ = vp.pointer_down(&middle(Point::new(0.0, 0.0)));
        let _ = vp.pointer_move(&PointerEvent::moved(Point::new(10.0, 0.0)));
        let _ = vp.pointer_move(&PointerEvent::moved(Point::new(25.0, 5.0)));
        let visible_after = vp.visible_scene_rect();

        // At 1.0x zoom, view deltas equal scene deltas: total (25, 5).
        assert!((visible_before.x0 - visible_after.x0 - 25.0).abs() < EPS);
        assert!((visible_before.y0 - visible_after.y0 - 5.0).abs() < EPS);
    }

    #[test]
    fn keyboard_zoom_bindings_route() {
        let mut vp = viewport();

        assert_eq!(vp.key_down(&ctrl(Key::Plus)), EventStatus::Handled);
        assert!(vp.zoom() > 1.0);

        assert_eq!(vp.key_down(&ctrl(Key::Minus)), EventStatus::Handled);
        assert_eq!(vp.key_down(&ctrl(Key::Digit0)), EventStatus::Handled);
        assert!((vp.zoom() - 1.0).abs() < EPS);
    }

    #[test]
    fn zoom_keys_without_ctrl_are_delegated() {
        let mut vp = viewport();
        assert_eq!(vp.key_down(&KeyEvent::plain(Key::Plus)), EventStatus::Ignored);
        assert_eq!(
            vp.key_down(&KeyEvent::plain(Key::Other(77))),
            EventStatus::Ignored
        );
        assert!((vp.zoom() - 1.0).abs() < EPS);
    }

    #[test]
    fn ctrl_w_enters_wire_mode_and_sets_crosshair() {
        let mut vp = viewport();
        vp.set_scene(Some(SimpleScene::new()));
        let _ = vp.take_notices();

        assert_eq!(vp.key_down(&ctrl(Key::KeyW)), EventStatus::Handled);
        assert_eq!(vp.scene().map(Scene::mode), Some(SceneMode::Wire));
        let notices = vp.take_notices();
        assert!(notices.contains(&Notice::CursorChanged(CursorIcon::Crosshair)));

        // Redundant switch: no cursor churn.
        assert_eq!(vp.key_down(&ctrl(Key::KeyW)), EventStatus::Handled);
        assert!(vp.take_notices().is_empty());

        assert_eq!(vp.key_down(&KeyEvent::plain(Key::Escape)), EventStatus::Handled);
        assert_eq!(vp.scene().map(Scene::mode), Some(SceneMode::Normal));
        let notices = vp.take_notices();
        assert!(notices.contains(&Notice::CursorChanged(CursorIcon::Arrow)));
    }

    #[test]
    fn mode_keys_consume_even_without_scene() {
        let mut vp = viewport();
        assert_eq!(vp.key_down(&ctrl(Key::KeyW)), EventStatus::Handled);
        assert_eq!(vp.key_down(&ctrl(Key::Space)), EventStatus::Handled);
        assert_eq!(vp.key_down(&KeyEvent::plain(Key::Escape)), EventStatus::Handled);
        assert_eq!(vp.key_down(&KeyEvent::plain(Key::Delete)), EventStatus::Handled);
    }

    #[test]
    fn ctrl_space_toggles_wire_posture() {
        let mut vp = viewport();
        vp.set_scene(Some(SimpleScene::new()));
        let before = vp.scene().map(SimpleScene::wire_posture);
        assert_eq!(vp.key_down(&ctrl(Key::Space)), EventStatus::Handled);
        let after = vp.scene().map(SimpleScene::wire_posture);
        assert_ne!(before, after);
    }

    #[test]
    fn delete_pushes_remove_commands_in_selection_order() {
        let mut vp = viewport();
        let mut scene = SimpleScene::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let a = scene.add_item(rect, Point::ZERO);
        let b = scene.add_item(rect, Point::new(20.0, 0.0));
        let c = scene.add_item(rect, Point::new(40.0, 0.0));
        scene.select(b);
        scene.select(c);
        scene.select(a);
        vp.set_scene(Some(scene));

        assert_eq!(vp.key_down(&KeyEvent::plain(Key::Delete)), EventStatus::Handled);

        let scene = vp.take_scene().unwrap();
        assert_eq!(
            scene.commands(),
            &[
                Command::RemoveItem(b),
                Command::RemoveItem(c),
                Command::RemoveItem(a),
            ]
        );
    }

    #[test]
    fn delete_in_wire_mode_removes_last_point() {
        let mut vp = viewport();
        let mut scene = SimpleScene::new();
        scene.set_mode(SceneMode::Wire);
        scene.add_wire_point(Point::new(1.0, 1.0));
        scene.add_wire_point(Point::new(2.0, 1.0));
        vp.set_scene(Some(scene));

        assert_eq!(vp.key_down(&KeyEvent::plain(Key::Delete)), EventStatus::Handled);
        let scene = vp.take_scene().unwrap();
        assert_eq!(scene.wire_points(), &[Point::new(1.0, 1.0)]);
        assert!(scene.commands().is_empty());
    }

    #[test]
    fn backspace_routes_by_scene_mode() {
        let mut vp = viewport();

        // No scene: delegate.
        assert_eq!(
            vp.key_down(&KeyEvent::plain(Key::Backspace)),
            EventStatus::Ignored
        );

        let mut scene = SimpleScene::new();
        scene.set_mode(SceneMode::Wire);
        scene.add_wire_point(Point::new(3.0, 3.0));
        vp.set_scene(Some(scene));

        assert_eq!(
            vp.key_down(&KeyEvent::plain(Key::Backspace)),
            EventStatus::Handled
        );
        assert!(vp.scene().unwrap().wire_points().is_empty());

        // Normal mode: delegate again.
        let _ = vp.key_down(&KeyEvent::plain(Key::Escape));
        assert_eq!(
            vp.key_down(&KeyEvent::plain(Key::Backspace)),
            EventStatus::Ignored
        );
    }

    #[test]
    fn scene_rect_grows_and_never_shrinks() {
        let mut vp = viewport();
        vp.set_zoom_value(1.0);
        let first = vp.scene_rect().expect("rescale must seed the scene rect");

        // Pan far to the right; the rect must grow to cover the new region.
        let _ = vp.pointer_down(&middle(Point::new(0.0, 0.0)));
        let _ = vp.pointer_move(&PointerEvent::moved(Point::new(-500.0, 0.0)));
        let grown = vp.scene_rect().unwrap();
        assert!(grown.x1 >= first.x1 + 500.0 - EPS);
        assert!(grown.x0 <= first.x0 + EPS, "left edge must not move inward");
        assert!(grown.area() >= first.area());

        // Pan back: fully contained, no change.
        let _ = vp.pointer_move(&PointerEvent::moved(Point::new(0.0, 0.0)));
        let back = vp.scene_rect().unwrap();
        assert_eq!(back, grown);
    }

    #[test]
    fn scene_rect_is_union_of_old_and_padded_visible() {
        let mut vp = viewport();
        vp.set_zoom_value(1.0);
        let old = vp.scene_rect().unwrap();

        let _ = vp.pointer_down(&middle(Point::new(0.0, 0.0)));
        let _ = vp.pointer_move(&PointerEvent::moved(Point::new(-300.0, -200.0)));

        let padded = vp.visible_scene_rect().inflate(50.0, 50.0);
        assert_eq!(vp.scene_rect().unwrap(), old.union(padded));
    }

    #[test]
    fn fit_all_without_scene_or_items_is_a_noop() {
        let mut vp = viewport();
        let before = vp.debug_info();
        vp.fit_all();
        assert_eq!(vp.zoom(), before.zoom);

        vp.set_scene(Some(SimpleScene::new()));
        let _ = vp.take_notices();
        vp.fit_all();
        assert_eq!(vp.zoom(), before.zoom);
        assert!(vp.take_notices().is_empty());
    }

    #[test]
    fn fit_all_centers_and_contains_items() {
        let mut vp = viewport();
        let mut scene = SimpleScene::new();
        scene.add_item(Rect::new(0.0, 0.0, 100.0, 50.0), Point::new(-3000.0, 200.0));
        scene.add_item(Rect::new(0.0, 0.0, 60.0, 60.0), Point::new(2000.0, -400.0));
        vp.set_scene(Some(scene));

        vp.fit_all();

        let visible = vp.visible_scene_rect();
        // Both items, with padding, must be visible.
        assert!(visible.x0 <= -3020.0 + EPS);
        assert!(visible.x1 >= 2080.0 - EPS);
        // Zoomed out from 1.0x, as the content is much wider than the view.
        assert!(vp.zoom() < 1.0);

        // The union center lands at the view center.
        let union = Rect::new(-3000.0, -400.0, 2060.0, 250.0).inflate(20.0, 20.0);
        let center_view = vp.scene_to_view_point(union.center());
        assert!((center_view.x - 400.0).abs() < 1e-6);
        assert!((center_view.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn fit_all_never_zooms_past_previous_when_zoomed_in() {
        let mut vp = viewport();
        let mut scene = SimpleScene::new();
        // A tiny scene that would fit at a huge ratio.
        scene.add_item(Rect::new(0.0, 0.0, 4.0, 4.0), Point::ZERO);
        vp.set_scene(Some(scene));

        vp.set_zoom_value(2.0);
        vp.fit_all();
        assert!(vp.zoom() <= 2.0 + EPS);
    }

    #[test]
    fn fit_all_never_zooms_past_unity_when_zoomed_out() {
        let mut vp = viewport();
        let mut scene = SimpleScene::new();
        scene.add_item(Rect::new(0.0, 0.0, 4.0, 4.0), Point::ZERO);
        vp.set_scene(Some(scene));

        vp.set_zoom_value(0.5);
        vp.fit_all();
        assert!(vp.zoom() <= 1.0 + EPS);
    }

    #[test]
    fn fit_all_reaches_fit_ratio_when_unconstrained() {
        let mut vp = viewport();
        let mut scene = SimpleScene::new();
        // Padded union: 840x640 for an 800x600 view; height constrains.
        scene.add_item(Rect::new(0.0, 0.0, 800.0, 600.0), Point::ZERO);
        vp.set_scene(Some(scene));

        vp.fit_all();
        assert!((vp.zoom() - 600.0 / 640.0).abs() < EPS);
    }

    #[test]
    fn apply_settings_emits_render_hints() {
        let mut vp = viewport();
        vp.apply_settings(ViewSettings {
            antialiasing: false,
        });
        assert!(!vp.settings().antialiasing);
        let notices = vp.take_notices();
        assert_eq!(
            notices.as_slice(),
            &[Notice::RenderHintsChanged {
                antialiasing: false
            }]
        );
    }

    #[test]
    fn zoom_changes_are_notified_with_actual_ratio() {
        let mut vp = viewport();
        vp.set_zoom_value(3.0);
        let notices = vp.take_notices();
        assert!(notices
            .iter()
            .any(|n| matches!(n, Notice::ZoomChanged(z) if (z - 3.0).abs() < EPS)));
    }

    #[test]
    fn external_scene_mode_change_updates_cursor() {
        let mut vp = viewport();
        let status = vp.scene_mode_changed(SceneMode::Wire);
        assert_eq!(status, EventStatus::Handled);
        assert_eq!(
            vp.take_notices().as_slice(),
            &[Notice::CursorChanged(CursorIcon::Crosshair)]
        );
    }

    #[test]
    fn attaching_a_scene_rederives_the_cursor() {
        let mut vp = viewport();
        let mut scene = SimpleScene::new();
        scene.set_mode(SceneMode::Wire);
        vp.set_scene(Some(scene));
        assert!(vp
            .take_notices()
            .contains(&Notice::CursorChanged(CursorIcon::Crosshair)));
    }

    #[test]
    fn set_view_rect_preserves_zoom_and_updates_visibility() {
        let mut vp = viewport();
        vp.set_zoom_value(2.0);
        let _ = vp.take_notices();

        vp.set_view_rect(Rect::new(0.0, 0.0, 400.0, 300.0));
        assert!((vp.zoom() - 2.0).abs() < EPS);
        let visible = vp.visible_scene_rect();
        assert!((visible.width() - 200.0).abs() < EPS);
        assert!((visible.height() - 150.0).abs() < EPS);
    }

    #[test]
    fn set_zoom_spec_preserves_actual_zoom() {
        let mut vp = viewport();
        vp.set_zoom_value(2.0);
        vp.set_zoom_spec(ZoomSpec {
            min: 0.1,
            max: 20.0,
            step: 0.1,
        });
        assert!((vp.zoom() - 2.0).abs() < EPS);
    }
}
