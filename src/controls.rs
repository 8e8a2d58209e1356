use raylib::prelude::*;

use crate::constants::*;
use crate::pagination::{MarkerId, Pagination};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Control {
    Previous,
    Next,
    Dot(MarkerId),
    Canvas,
}

struct Dot {
    id: MarkerId,
    center: Vector2,
    hit_box: Rectangle,
}

/// Layout of the row under the canvas: previous button, one dot per image,
/// next button.
pub struct ControlsBar {
    canvas: Rectangle,
    bar: Rectangle,
    previous: Rectangle,
    next: Rectangle,
    dots: Vec<Dot>,
}

impl ControlsBar {
    pub fn new(canvas_width: i32, canvas_height: i32, pagination: &Pagination) -> Self {
        let width = canvas_width as f32;
        let top = canvas_height as f32;
        let bar_height = CONTROLS_HEIGHT as f32;
        let button = BUTTON_SIZE as f32;
        let margin = 8.0;
        let button_y = top + (bar_height - button) * 0.5;
        let center_y = top + bar_height * 0.5;

        let span = if pagination.is_empty() {
            0.0
        } else {
            (pagination.len() - 1) as f32 * DOT_SPACING
        };
        let start_x = width * 0.5 - span * 0.5;
        let reach = DOT_RADIUS + 2.0;

        let dots = pagination
            .markers()
            .iter()
            .enumerate()
            .map(|(i, marker)| {
                let center = Vector2::new(start_x + i as f32 * DOT_SPACING, center_y);
                Dot {
                    id: marker.id,
                    center,
                    hit_box: Rectangle::new(center.x - reach, center.y - reach, reach * 2.0, reach * 2.0),
                }
            })
            .collect();

        Self {
            canvas: Rectangle::new(0.0, 0.0, width, top),
            bar: Rectangle::new(0.0, top, width, bar_height),
            previous: Rectangle::new(margin, button_y, button, button),
            next: Rectangle::new(width - margin - button, button_y, button, button),
            dots,
        }
    }

    pub fn hit(&self, point: Vector2) -> Option<Control> {
        if self.previous.check_collision_point_rec(point) {
            return Some(Control::Previous);
        }
        if self.next.check_collision_point_rec(point) {
            return Some(Control::Next);
        }
        if let Some(dot) = self.dots.iter().find(|d| d.hit_box.check_collision_point_rec(point)) {
            return Some(Control::Dot(dot.id));
        }
        if self.canvas.check_collision_point_rec(point) {
            return Some(Control::Canvas);
        }
        None
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, pagination: &Pagination) {
        d.draw_rectangle_rec(self.bar, Color::RAYWHITE);

        for (rect, label) in [(self.previous, "<"), (self.next, ">")] {
            d.draw_rectangle_rec(rect, Color::LIGHTGRAY);
            d.draw_text(label, rect.x as i32 + 11, rect.y as i32 + 6, 20, Color::DARKGRAY);
        }

        for (dot, marker) in self.dots.iter().zip(pagination.markers()) {
            let color = if marker.active { Color::DARKGRAY } else { Color::LIGHTGRAY };
            d.draw_circle_v(dot.center, DOT_RADIUS, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(count: usize) -> (ControlsBar, Pagination) {
        let pagination = Pagination::new(count);
        (ControlsBar::new(640, 360, &pagination), pagination)
    }

    #[test]
    fn buttons_sit_at_both_ends_of_the_bar() {
        let (bar, _) = bar(3);
        assert_eq!(bar.hit(Vector2::new(20.0, 384.0)), Some(Control::Previous));
        assert_eq!(bar.hit(Vector2::new(620.0, 384.0)), Some(Control::Next));
    }

    #[test]
    fn dots_are_centered_and_map_to_their_marker() {
        let (bar, pagination) = bar(3);
        let ids: Vec<_> = pagination.markers().iter().map(|m| m.id).collect();
        assert_eq!(bar.hit(Vector2::new(300.0, 384.0)), Some(Control::Dot(ids[0])));
        assert_eq!(bar.hit(Vector2::new(320.0, 384.0)), Some(Control::Dot(ids[1])));
        assert_eq!(bar.hit(Vector2::new(340.0, 384.0)), Some(Control::Dot(ids[2])));
    }

    #[test]
    fn canvas_and_empty_bar_space() {
        let (bar, _) = bar(3);
        assert_eq!(bar.hit(Vector2::new(100.0, 100.0)), Some(Control::Canvas));
        assert_eq!(bar.hit(Vector2::new(200.0, 384.0)), None);
        assert_eq!(bar.hit(Vector2::new(100.0, 500.0)), None);
    }

    #[test]
    fn no_dots_without_images() {
        let (bar, _) = bar(0);
        assert_eq!(bar.hit(Vector2::new(320.0, 384.0)), None);
    }
}
