//! # Expense Chart Painter
//!
//! egui side of the expense chart: fits the fixed-size chart canvas into a
//! screen rect, paints a [`ChartScene`], and turns raw egui pointer events
//! into [`GestureEvent`]s.

use eframe::egui;
use shared::TouchPoint;
use crate::ui::components::theme::ChartColors;
use crate::ui::state::Highlight;
use super::gesture::GestureEvent;
use super::scene::{ChartRect, ChartScene, HitTarget};

/// Uniform fit of the chart canvas into a screen rect, centred both ways
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartViewport {
    pub origin: egui::Pos2,
    pub scale: f32,
}

impl ChartViewport {
    pub fn fit(screen: egui::Rect, width: f64, height: f64) -> Self {
        let (width, height) = (width as f32, height as f32);
        let scale = if width > 0.0 && height > 0.0 {
            (screen.width() / width).min(screen.height() / height).max(0.0)
        } else {
            1.0
        };
        let origin = screen.center() - egui::vec2(width * scale / 2.0, height * scale / 2.0);
        Self { origin, scale }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> egui::Pos2 {
        self.origin + egui::vec2(x as f32 * self.scale, y as f32 * self.scale)
    }

    pub fn rect_to_screen(&self, rect: &ChartRect) -> egui::Rect {
        egui::Rect::from_min_max(
            self.to_screen(rect.x, rect.y),
            self.to_screen(rect.right(), rect.bottom()),
        )
    }

    /// Screen point back into chart space
    pub fn to_chart(&self, point: TouchPoint) -> (f64, f64) {
        if self.scale == 0.0 {
            return (f64::NAN, f64::NAN);
        }
        (
            ((point.x - self.origin.x) / self.scale) as f64,
            ((point.y - self.origin.y) / self.scale) as f64,
        )
    }
}

/// Hit testing against a scene drawn through a viewport
pub struct ScreenHitTest<'a> {
    pub scene: &'a ChartScene,
    pub viewport: ChartViewport,
}

impl HitTarget for ScreenHitTest<'_> {
    fn day_at(&self, point: TouchPoint) -> Option<u32> {
        let (x, y) = self.viewport.to_chart(point);
        self.scene.hit_test(x, y)
    }
}

/// Paint bars and axis labels; overlays stay invisible
pub fn paint_scene(
    painter: &egui::Painter,
    viewport: &ChartViewport,
    scene: &ChartScene,
    highlight: Highlight,
    colors: &ChartColors,
    font_size: f32,
) {
    for bar in &scene.bars {
        let color = if highlight.is_dimmed(bar.day) { colors.bar_inactive } else { colors.bar };
        painter.rect_filled(viewport.rect_to_screen(&bar.rect), egui::Rounding::ZERO, color);
    }

    let font = egui::FontId::proportional((font_size * viewport.scale).max(1.0));
    let tick_padding = 12.0;

    for tick in scene.x_ticks.iter().filter(|tick| tick.label_visible) {
        painter.text(
            viewport.to_screen(tick.position, scene.x_axis_y + tick_padding),
            egui::Align2::CENTER_TOP,
            &tick.label,
            font.clone(),
            colors.tick_text,
        );
    }

    for tick in scene.y_ticks.iter().filter(|tick| tick.label_visible) {
        painter.text(
            viewport.to_screen(scene.y_axis_x - tick_padding, tick.position),
            egui::Align2::RIGHT_CENTER,
            &tick.label,
            font.clone(),
            colors.tick_text,
        );
    }
}

fn touch_point(pos: egui::Pos2) -> TouchPoint {
    TouchPoint::new(pos.x, pos.y)
}

/// Translate this frame's pointer events into gesture events.
///
/// A press only starts a gesture inside `area`; once started, moves and the
/// release are followed anywhere on screen. `tracking` carries that across
/// frames.
pub fn collect_gesture_events(
    events: &[egui::Event],
    area: egui::Rect,
    tracking: &mut bool,
) -> Vec<GestureEvent> {
    let mut gestures = Vec::new();

    for event in events {
        match event {
            egui::Event::PointerButton {
                pos, button: egui::PointerButton::Primary, pressed: true, ..
            } => {
                if area.contains(*pos) {
                    *tracking = true;
                    gestures.push(GestureEvent::TouchStart(touch_point(*pos)));
                }
            }
            egui::Event::PointerButton {
                button: egui::PointerButton::Primary, pressed: false, ..
            } => {
                if *tracking {
                    *tracking = false;
                    gestures.push(GestureEvent::TouchEnd);
                }
            }
            egui::Event::PointerButton {
                pos, button: egui::PointerButton::Secondary, pressed: true, ..
            } => {
                if *tracking || area.contains(*pos) {
                    gestures.push(GestureEvent::ContextMenu);
                }
            }
            egui::Event::PointerMoved(pos) => {
                if *tracking {
                    gestures.push(GestureEvent::TouchMove(touch_point(*pos)));
                }
            }
            egui::Event::PointerGone
            | egui::Event::Touch { phase: egui::TouchPhase::Cancel, .. } => {
                if *tracking {
                    *tracking = false;
                    gestures.push(GestureEvent::TouchCancel);
                }
            }
            _ => {}
        }
    }

    gestures
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_viewport_fits_and_centres() {
        let screen = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(300.0, 400.0));
        let viewport = ChartViewport::fit(screen, 600.0, 400.0);

        assert_eq!(viewport.scale, 0.5);
        assert_eq!(viewport.origin, egui::pos2(0.0, 100.0));
        assert_eq!(viewport.to_screen(600.0, 400.0), egui::pos2(300.0, 300.0));

        let (x, y) = viewport.to_chart(TouchPoint::new(150.0, 200.0));
        assert_eq!((x, y), (300.0, 200.0));
    }

    #[test]
    fn test_press_outside_area_is_ignored() {
        let area = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let mut tracking = false;

        let events = vec![
            press(150.0, 50.0, true),
            egui::Event::PointerMoved(egui::pos2(50.0, 50.0)),
            press(50.0, 50.0, false),
        ];
        assert!(collect_gesture_events(&events, area, &mut tracking).is_empty());
        assert!(!tracking);
    }

    #[test]
    fn test_press_move_release_sequence() {
        let area = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let mut tracking = false;

        let first = collect_gesture_events(&[press(10.0, 10.0, true)], area, &mut tracking);
        assert_eq!(first, vec![GestureEvent::TouchStart(TouchPoint::new(10.0, 10.0))]);
        assert!(tracking);

        // moves outside the area still belong to the gesture
        let second = collect_gesture_events(
            &[egui::Event::PointerMoved(egui::pos2(140.0, 10.0)), press(140.0, 10.0, false)],
            area,
            &mut tracking,
        );
        assert_eq!(
            second,
            vec![GestureEvent::TouchMove(TouchPoint::new(140.0, 10.0)), GestureEvent::TouchEnd]
        );
        assert!(!tracking);
    }

    #[test]
    fn test_pointer_gone_cancels() {
        let area = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let mut tracking = true;

        let events = collect_gesture_events(&[egui::Event::PointerGone], area, &mut tracking);
        assert_eq!(events, vec![GestureEvent::TouchCancel]);
        assert!(!tracking);
    }
}
