//! Rotary dial control widget.
//!
//! Relative-motion dial with:
//! - Drag to adjust value (vertical motion, up = increase)
//! - Fine control with Shift key
//! - Double-click to reset to the default
//! - Arc-sweep value display with a readout below the dial
//!
//! The drag state machine lives in [`DialState`] rather than in egui's
//! response memory, so the press/motion/release transitions are observable
//! by the caller and testable without a GUI. egui's drag latching acts as
//! the pointer-capture resource: once a drag starts, this widget's id owns
//! the pointer until release, deltas keep arriving outside the hit region,
//! and no other widget can start a drag in the meantime.

use egui::{
    Align2, Color32, CursorIcon, FontId, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Widget,
    pos2, vec2,
};
use girar_core::DialState;

/// Total arc sweep in degrees; the remaining 60° form the gap at the bottom.
const TOTAL_SWEEP_DEG: f32 = 300.0;
/// Arc start rotation: straight down (90° in y-down coordinates) plus half
/// the gap, so the gap is centered at the bottom.
const START_ROTATION_DEG: f32 = 90.0 + (360.0 - TOTAL_SWEEP_DEG) / 2.0;
/// Pixels of vertical drag that span the full normalized range.
const DRAG_RANGE_PX: f32 = 100.0;
/// Vertical space reserved for the label row and the readout row.
const TEXT_ROW_H: f32 = 16.0;

/// Rotary dial parameters.
///
/// Builder-style configuration over a borrowed [`DialState`]. The `map`
/// transform converts the normalized value to the domain value used for
/// both the readout and the change callback; `format` renders the readout
/// text from the mapped value.
pub struct Dial<'a> {
    state: &'a mut DialState,
    label: Option<&'a str>,
    radius: f32,
    sensitivity: f32,
    notify_on_reset: bool,
    map: Box<dyn Fn(f32) -> f32 + 'a>,
    format: Box<dyn Fn(f32) -> String + 'a>,
    on_change: Option<Box<dyn FnMut(f32) + 'a>>,
}

impl<'a> Dial<'a> {
    /// Create a new dial over the given state.
    pub fn new(state: &'a mut DialState) -> Self {
        Self {
            state,
            label: None,
            radius: 20.0,
            sensitivity: 1.0 / DRAG_RANGE_PX,
            notify_on_reset: false,
            map: Box::new(|v| v),
            format: Box::new(|v| format!("{v:.2}")),
            on_change: None,
        }
    }

    /// Set the caption rendered above the dial.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Set the outer radius in pixels.
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set sensitivity (normalized value change per pixel dragged).
    pub fn sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Whether the reset gesture also fires the change callback with the
    /// mapped default. Off by default: a reset is a local state restore.
    pub fn notify_on_reset(mut self, notify: bool) -> Self {
        self.notify_on_reset = notify;
        self
    }

    /// Set the normalized-to-domain transform.
    pub fn map(mut self, map: impl Fn(f32) -> f32 + 'a) -> Self {
        self.map = Box::new(map);
        self
    }

    /// Set a custom readout formatter, applied to the mapped value.
    pub fn format(mut self, format: impl Fn(f32) -> String + 'a) -> Self {
        self.format = Box::new(format);
        self
    }

    /// Set the change callback, invoked with the mapped value once per
    /// accepted motion sample.
    pub fn on_change(mut self, on_change: impl FnMut(f32) + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }
}

impl Widget for Dial<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let diameter = 2.0 * self.radius;
        let label_h = if self.label.is_some() { TEXT_ROW_H } else { 0.0 };
        let size = vec2(diameter, label_h + diameter + TEXT_ROW_H);
        let (rect, bg) = ui.allocate_exact_size(size, Sense::hover());

        let center = pos2(rect.center().x, rect.top() + label_h + self.radius);

        // Square hit region of side 2×radius centered on the dial; the
        // label and readout rows are not interactive.
        let hit = Rect::from_center_size(center, vec2(diameter, diameter));
        let mut response = ui
            .interact(hit, bg.id.with("hit"), Sense::click_and_drag())
            .on_hover_cursor(CursorIcon::Grab);

        let mut changed = false;
        let mut notify = false;

        if response.double_clicked() {
            self.state.reset();
            changed = true;
            notify = self.notify_on_reset;
        } else {
            if response.drag_started() {
                self.state.begin_drag();
            }
            if response.dragged() {
                let fine = if ui.input(|i| i.modifiers.shift) {
                    0.1
                } else {
                    1.0
                };
                // Vertical drag changes value (up = increase).
                let delta = -response.drag_delta().y * self.sensitivity * fine;
                if self.state.apply_motion(delta).is_some() {
                    changed = true;
                    notify = true;
                }
            }
            if response.drag_stopped() {
                self.state.end_drag();
            }
            // The state machine says dragging but the host reports no active
            // drag this frame: the release was lost (focus change, missed
            // event), so force the transition back to idle.
            if self.state.is_dragging() && !response.dragged() {
                self.state.end_drag();
            }
        }

        if self.state.is_dragging() {
            ui.ctx()
                .output_mut(|o| o.cursor_icon = CursorIcon::Grabbing);
        }

        let mapped = (self.map)(self.state.raw_value());
        if notify && let Some(on_change) = self.on_change.as_mut() {
            on_change(mapped);
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            // Arc angles: the normalized value splits the fixed sweep into
            // a filled segment from the rotational origin and the track.
            let raw = self.state.raw_value().clamp(0.0, 1.0);
            let start = START_ROTATION_DEG.to_radians();
            let sweep = TOTAL_SWEEP_DEG.to_radians();
            let split = start + sweep * raw;

            // Annulus from 0.8×radius to radius, drawn as a stroked arc at
            // the band's mid-radius.
            let band_radius = 0.9 * self.radius;
            let band_width = 0.2 * self.radius;

            let track_color = Color32::from_rgb(50, 50, 60);
            let fill_color = if self.state.is_dragging() {
                Color32::from_rgb(120, 200, 255)
            } else {
                Color32::from_rgb(100, 180, 255)
            };

            if raw > 0.001 {
                draw_arc(painter, center, band_radius, start, split, fill_color, band_width);
            }
            if raw < 0.999 {
                draw_arc(
                    painter,
                    center,
                    band_radius,
                    split,
                    start + sweep,
                    track_color,
                    band_width,
                );
            }

            // Drag indicator: dashed outline around the hit region.
            if self.state.is_dragging() {
                let stroke = Stroke::new(1.0, Color32::from_rgb(180, 180, 190));
                let corners = [
                    hit.left_top(),
                    hit.right_top(),
                    hit.right_bottom(),
                    hit.left_bottom(),
                    hit.left_top(),
                ];
                painter.extend(Shape::dashed_line(&corners, stroke, 2.0, 2.0));
            }

            if let Some(label) = self.label {
                painter.text(
                    pos2(center.x, rect.top()),
                    Align2::CENTER_TOP,
                    label,
                    FontId::proportional(12.0),
                    Color32::from_rgb(180, 180, 190),
                );
            }

            painter.text(
                pos2(center.x, center.y + self.radius + 2.0),
                Align2::CENTER_TOP,
                (self.format)(mapped),
                FontId::proportional(11.0),
                Color32::from_rgb(150, 150, 160),
            );
        }

        if changed {
            response.mark_changed();
        }

        response
    }
}

/// Draw an arc using line segments.
fn draw_arc(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    color: Color32,
    stroke_width: f32,
) {
    let segments = 32;
    let sweep = end_angle - start_angle;

    let points: Vec<Pos2> = (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let angle = start_angle + t * sweep;
            pos2(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            )
        })
        .collect();

    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], Stroke::new(stroke_width, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_contract() {
        let mut state = DialState::new(0.5).unwrap();
        let dial = Dial::new(&mut state);
        assert_eq!(dial.radius, 20.0);
        assert_eq!(dial.sensitivity, 1.0 / 100.0);
        assert!(!dial.notify_on_reset);
        assert!(dial.label.is_none());
    }

    #[test]
    fn default_map_is_identity_and_format_two_decimals() {
        let mut state = DialState::new(0.5).unwrap();
        let dial = Dial::new(&mut state);
        assert_eq!((dial.map)(0.25), 0.25);
        assert_eq!((dial.format)(0.5), "0.50");
    }

    #[test]
    fn sweep_leaves_a_60_degree_gap_at_the_bottom() {
        assert_eq!(TOTAL_SWEEP_DEG, 300.0);
        assert_eq!(START_ROTATION_DEG, 120.0);
    }
}
