use crate::{
    core::{
        config::{IconConfig, ViewerConfig},
        geo::{LatLng, Point},
        state::ViewerState,
        viewport::Viewport,
    },
    input::events::PointerEvents,
    layers::marker::{Marker, MarkerKey, MarkerRole},
};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Vec2};

/// Zoom levels per scroll pixel
const SCROLL_ZOOM_RATE: f64 = 0.002;

/// Immediate-mode map surface for a [`ViewerState`]
///
/// Owns the viewport (pan and zoom) and translates egui pointer input into
/// [`PointerEvents`] calls: a primary press over a marker starts a drag,
/// pointer motion over a marker while pressed reports a hover at the pointer's
/// coordinate, and a primary release anywhere ends it. A press away from the
/// markers pans the map instead.
pub struct MapWidget {
    viewport: Viewport,
    icon: IconConfig,
    attribution: String,
    background_color: Color32,
    hovered: Option<MarkerKey>,
}

impl MapWidget {
    pub fn new(config: &ViewerConfig) -> Self {
        let mut viewport = Viewport::new(config.center, config.zoom, Point::new(800.0, 600.0));
        viewport.set_zoom_limits(config.min_zoom, config.max_zoom);
        Self {
            viewport,
            icon: config.icon.clone(),
            attribution: config.attribution.clone(),
            background_color: Color32::from_rgb(230, 230, 230),
            hovered: None,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.viewport.set_center(center);
        self.viewport.set_zoom(zoom);
    }

    /// Marker whose icon covers `pixel` (container-relative); the one drawn
    /// last wins when icons overlap
    pub fn marker_at(&self, state: &ViewerState, pixel: Point) -> Option<MarkerKey> {
        state
            .markers()
            .iter()
            .rev()
            .find(|marker| {
                let (min, max) = self.icon_bounds(marker);
                pixel.x >= min.x && pixel.x <= max.x && pixel.y >= min.y && pixel.y <= max.y
            })
            .map(Marker::key)
    }

    fn icon_bounds(&self, marker: &Marker) -> (Point, Point) {
        let tip = self.viewport.lat_lng_to_pixel(&marker.position());
        let min = tip.subtract(&Point::new(self.icon.anchor.0 as f64, self.icon.anchor.1 as f64));
        let max = min.add(&Point::new(self.icon.size.0 as f64, self.icon.size.1 as f64));
        (min, max)
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut ViewerState) -> Response {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        self.viewport
            .set_size(Point::new(rect.width() as f64, rect.height() as f64));

        let changed = self.handle_input(ui, &response, state);
        self.paint(&painter, rect, state);

        if changed {
            ui.ctx().request_repaint();
        }
        response
    }

    fn handle_input(&mut self, ui: &Ui, response: &Response, state: &mut ViewerState) -> bool {
        let rect = response.rect;
        let (pressed, released, moved, latest, scroll) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.delta() != Vec2::ZERO,
                i.pointer.latest_pos(),
                i.raw_scroll_delta.y,
            )
        });
        let local = latest
            .filter(|pos| rect.contains(*pos))
            .map(|pos| to_local(rect, pos));
        let under = local.and_then(|pixel| self.marker_at(state, pixel));
        self.hovered = under;
        let mut changed = false;

        if pressed {
            if let Some(key) = under {
                changed |= state.on_press_start(key).is_handled();
            }
        }

        if state.drag().is_pressed() {
            if let (true, Some(key), Some(pixel)) = (moved, under, local) {
                let position = self.viewport.pixel_to_lat_lng(&pixel);
                changed |= state.on_hover_while_pressed(key, position).is_handled();
            }
        } else if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.viewport.pan(Point::new(delta.x as f64, delta.y as f64));
            changed = true;
        }

        if released {
            state.on_release();
            changed = true;
        }

        if response.hovered() && scroll.abs() > 0.1 {
            let focus = local.unwrap_or_else(|| self.viewport.size.multiply(0.5));
            self.viewport.zoom_around(focus, scroll as f64 * SCROLL_ZOOM_RATE);
            changed = true;
        }

        changed
    }

    fn paint(&self, painter: &Painter, rect: Rect, state: &ViewerState) {
        painter.rect_filled(rect, 0.0, self.background_color);

        let style = state.roads().style();
        let stroke = Stroke::new(style.width, Color32::from(style.color).gamma_multiply(style.opacity));
        for segment in state.roads().segments() {
            let points: Vec<Pos2> = segment
                .coordinates()
                .iter()
                .map(|coord| to_screen(rect, self.viewport.lat_lng_to_pixel(coord)))
                .collect();
            if Rect::from_points(&points).intersects(rect) {
                painter.add(Shape::line(points, stroke));
            }
        }

        for marker in state.markers().iter() {
            self.paint_marker(painter, rect, marker);
        }

        if let Some(marker) = self.hovered.and_then(|key| state.markers().get(key)) {
            self.paint_popup(painter, rect, marker);
        }

        if !self.attribution.is_empty() {
            painter.text(
                rect.left_bottom() + Vec2::new(5.0, -5.0),
                Align2::LEFT_BOTTOM,
                &self.attribution,
                FontId::proportional(10.0),
                Color32::from_gray(120),
            );
        }
    }

    /// Pin: round head over a point that touches the coordinate
    fn paint_marker(&self, painter: &Painter, rect: Rect, marker: &Marker) {
        let (min, max) = self.icon_bounds(marker);
        let min = to_screen(rect, min);
        let max = to_screen(rect, max);
        let tip = to_screen(rect, self.viewport.lat_lng_to_pixel(&marker.position()));

        let fill = match marker.role() {
            MarkerRole::Start => Color32::from_rgb(40, 160, 70),
            MarkerRole::Finish => Color32::from_rgb(210, 50, 50),
            MarkerRole::None => Color32::from_rgb(90, 90, 90),
        };
        let width = max.x - min.x;
        let radius = width * 0.35;
        let head = Pos2::new((min.x + max.x) / 2.0, min.y + radius + 1.0);

        painter.add(Shape::convex_polygon(
            vec![
                Pos2::new(head.x - radius * 0.8, head.y + radius * 0.5),
                Pos2::new(head.x + radius * 0.8, head.y + radius * 0.5),
                tip,
            ],
            fill,
            Stroke::NONE,
        ));
        painter.circle(head, radius, fill, Stroke::new(1.5, Color32::WHITE));
        painter.circle_filled(head, radius * 0.35, Color32::WHITE);
    }

    fn paint_popup(&self, painter: &Painter, rect: Rect, marker: &Marker) {
        if marker.popup_text().is_empty() {
            return;
        }
        let tip = to_screen(rect, self.viewport.lat_lng_to_pixel(&marker.position()));
        let anchor = tip + Vec2::new(self.icon.popup_anchor.0 as f32, self.icon.popup_anchor.1 as f32);

        let font = FontId::proportional(12.0);
        let text_size = painter
            .layout_no_wrap(marker.popup_text().to_string(), font.clone(), Color32::BLACK)
            .size();
        let size = text_size + Vec2::splat(12.0);
        let frame = Rect::from_min_size(anchor - Vec2::new(size.x / 2.0, size.y + 4.0), size);

        painter.rect(frame, 4.0, Color32::WHITE, Stroke::new(1.0, Color32::from_gray(160)));
        painter.text(frame.center(), Align2::CENTER_CENTER, marker.popup_text(), font, Color32::BLACK);
    }
}

fn to_local(rect: Rect, pos: Pos2) -> Point {
    Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
}

fn to_screen(rect: Rect, pixel: Point) -> Pos2 {
    Pos2::new(rect.min.x + pixel.x as f32, rect.min.y + pixel.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> MapWidget {
        MapWidget::new(&ViewerConfig::paris())
    }

    #[test]
    fn test_marker_hit_uses_icon_anchor() {
        let widget = widget();
        let state = ViewerState::default();
        let start = state.markers().start();
        let tip = widget.viewport().lat_lng_to_pixel(&start.position());

        // Icon sits above its coordinate
        assert_eq!(widget.marker_at(&state, tip.add(&Point::new(0.0, -20.0))), Some(start.key()));
        assert_eq!(widget.marker_at(&state, tip.add(&Point::new(0.0, 5.0))), None);
        assert_eq!(widget.marker_at(&state, tip.add(&Point::new(25.0, -20.0))), None);
    }

    #[test]
    fn test_marker_hit_finish() {
        let widget = widget();
        let state = ViewerState::default();
        let finish = state.markers().finish();
        let tip = widget.viewport().lat_lng_to_pixel(&finish.position());
        assert_eq!(widget.marker_at(&state, tip.add(&Point::new(-10.0, -30.0))), Some(finish.key()));
    }

    #[test]
    fn test_screen_conversions() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(100.0, 100.0));
        let local = to_local(rect, Pos2::new(15.0, 30.0));
        assert_eq!(local, Point::new(5.0, 10.0));
        assert_eq!(to_screen(rect, local), Pos2::new(15.0, 30.0));
    }

    #[test]
    fn test_set_view() {
        let mut widget = widget();
        widget.set_view(LatLng::new(51.5, -0.12), 40.0);
        assert_eq!(widget.viewport().zoom, 18.0);
        assert_eq!(widget.viewport().center, LatLng::new(51.5, -0.12));
    }
}
