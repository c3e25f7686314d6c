use crate::board::Square;

/// Rect is an axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Left and top edges are inside, right and bottom edges are not, so
    /// neighbouring cells never both claim a point.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Geometry places the board in the window: the top-left corner of the
/// drawn board and the side length of one cell. White sits at the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::STANDARD
    }
}

impl Geometry {
    /// 480x480 board at (20, 20).
    pub const STANDARD: Geometry = Geometry {
        origin_x: 20.0,
        origin_y: 20.0,
        cell: 60.0,
    };

    pub fn board_rect(&self) -> Rect {
        Rect::new(self.origin_x, self.origin_y, self.cell * 8.0, self.cell * 8.0)
    }

    /// Maps a pointer position to the square under it, or `None` outside
    /// the board.
    pub fn pointer_to_square(&self, x: f32, y: f32) -> Option<Square> {
        if !self.board_rect().contains(x, y) {
            return None;
        }
        let col = ((x - self.origin_x) / self.cell).floor() as u8;
        let row = ((y - self.origin_y) / self.cell).floor() as u8;
        // Float rounding can land exactly on 8 just inside the far edge.
        let col = col.min(7);
        let row = row.min(7);
        Square::new(8 - row, col + 1).ok()
    }

    pub fn square_to_rect(&self, square: Square) -> Rect {
        let col = f32::from(square.file() - 1);
        let row = f32::from(8 - square.rank());
        Rect::new(
            self.origin_x + col * self.cell,
            self.origin_y + row * self.cell,
            self.cell,
            self.cell,
        )
    }
}
