/// Window sizing state: raw pixel dimensions plus the GUI scale factor.
///
/// The logical canvas size is derived by dividing the raw dimensions by the
/// scale, so all widget math runs in GUI-scaled units and SDL's logical-size
/// scaling handles the pixel magnification. A new `GameWindow` is built from
/// scratch on every resize event; nothing is diffed against previous state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameWindow {
    raw_width: u32,
    raw_height: u32,
    scale: u32,
}

impl GameWindow {
    pub fn new(raw_width: u32, raw_height: u32, scale: u32) -> Self {
        GameWindow {
            raw_width,
            raw_height,
            scale: scale.max(1),
        }
    }

    pub fn scaled_width(&self) -> u32 {
        self.raw_width / self.scale
    }

    pub fn scaled_height(&self) -> u32 {
        self.raw_height / self.scale
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_dimensions() {
        let window = GameWindow::new(1280, 720, 2);
        assert_eq!(window.scaled_width(), 640);
        assert_eq!(window.scaled_height(), 360);
    }

    #[test]
    fn test_scale_of_one_passes_through() {
        let window = GameWindow::new(800, 600, 1);
        assert_eq!(window.scaled_width(), 800);
        assert_eq!(window.scaled_height(), 600);
    }

    #[test]
    fn test_integer_division_truncates() {
        let window = GameWindow::new(1279, 719, 2);
        assert_eq!(window.scaled_width(), 639);
        assert_eq!(window.scaled_height(), 359);
    }

    #[test]
    fn test_zero_scale_clamped_to_one() {
        let window = GameWindow::new(640, 360, 0);
        assert_eq!(window.scale(), 1);
        assert_eq!(window.scaled_width(), 640);
    }
}
