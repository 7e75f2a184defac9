use std::collections::HashMap;

use crate::config::DEFAULT_COLOR;

/// Sparse grid of color tokens. Only explicitly painted coordinates are
/// stored; every other coordinate reads as the default color. Coordinates
/// are 1-based.
#[derive(Clone, Debug)]
pub struct Board {
    pub width: i64,
    pub height: i64,
    colors: HashMap<(i64, i64), String>,
}

impl Board {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            colors: HashMap::new(),
        }
    }

    pub fn has_coordinates(&self, x: i64, y: i64) -> bool {
        x > 0 && y > 0 && x <= self.width && y <= self.height
    }

    /// Pure read: a miss returns the default without inserting anything.
    pub fn color_at(&self, x: i64, y: i64) -> &str {
        self.colors
            .get(&(x, y))
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR)
    }

    /// Stores unconditionally. Bounds are a command-level concern; writes
    /// outside the current dimensions are kept but never rendered.
    pub fn set_color(&mut self, x: i64, y: i64, color: &str) {
        self.colors.insert((x, y), color.to_owned());
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Rows y = 1..=height, each the concatenation of the colors at
    /// x = 1..=width, every row (including the last) newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for y in 1..=self.height {
            for x in 1..=self.width {
                out.push_str(self.color_at(x, y));
            }
            out.push('\n');
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn stored(&self) -> &HashMap<(i64, i64), String> {
        &self.colors
    }
}
