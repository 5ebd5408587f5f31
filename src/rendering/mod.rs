use macroquad::prelude::*;

use crate::config::CELL_SIZE;
use crate::domain::Rgb;

/// Opaque macroquad color for a cell
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

/// Screen rectangle `(x, y, size)` covered by grid cell (x, y)
pub fn cell_rect(x: usize, y: usize) -> (f32, f32, f32) {
    let size = CELL_SIZE as f32;
    (x as f32 * size, y as f32 * size, size)
}

/// Clear to black and fill one square per live cell
pub fn draw_cells(live: &mut dyn Iterator<Item = (usize, usize, Rgb)>) {
    clear_background(BLACK);
    for (x, y, rgb) in live {
        let (screen_x, screen_y, size) = cell_rect(x, y);
        draw_rectangle(screen_x, screen_y, size, size, to_color(rgb));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rect_scales_by_cell_size() {
        assert_eq!(cell_rect(0, 0), (0.0, 0.0, 10.0));
        assert_eq!(cell_rect(79, 59), (790.0, 590.0, 10.0));
    }

    #[test]
    fn test_to_color_is_opaque() {
        let color = to_color(Rgb::new(255, 0, 51));
        assert_eq!(color, Color::from_rgba(255, 0, 51, 255));
        assert_eq!(color.a, 1.0);
    }
}
