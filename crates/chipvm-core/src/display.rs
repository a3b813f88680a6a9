use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// A 2d array of booleans, indexed as `[row][column]`, true meaning the pixel is on
pub type Framebuffer = [[bool; DISPLAY_WIDTH as usize]; DISPLAY_HEIGHT as usize];

/// The monochrome 64x32 screen. Only ever changed by clearing it or by xor-ing a sprite on to it.
#[derive(Debug, Clone)]
pub struct Display {
    pixels: Framebuffer,
}

impl Display {
    pub fn new() -> Self {
        Self {
            pixels: [[false; DISPLAY_WIDTH as usize]; DISPLAY_HEIGHT as usize],
        }
    }

    /// Turns all the pixels off
    pub fn clear(&mut self) {
        self.pixels
            .iter_mut()
            .for_each(|row| *row = [false; DISPLAY_WIDTH as usize]);
    }

    /// Xors a sprite on to the screen with its top left corner at (x, y).
    ///
    /// Every byte of `rows` is one 8 pixel wide row, most significant bit on the left. The
    /// starting position wraps around the screen, but whatever sticks out past the right or
    /// bottom edge is clipped. Returns true if any pixel got switched from on to off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8]) -> bool {
        let start_x = (x % DISPLAY_WIDTH) as usize;
        let start_y = (y % DISPLAY_HEIGHT) as usize;
        let mut collision = false;

        for (sprite_row, &sprite) in rows.iter().enumerate() {
            let pixel_row = start_y + sprite_row;
            if pixel_row >= DISPLAY_HEIGHT as usize {
                break;
            }
            for sprite_column in 0..8 {
                let pixel_column = start_x + sprite_column;
                if pixel_column >= DISPLAY_WIDTH as usize {
                    break;
                }
                if sprite >> (7 - sprite_column) & 1 == 0 {
                    continue;
                }
                let pixel = &mut self.pixels[pixel_row][pixel_column];
                collision |= *pixel;
                *pixel = !*pixel;
            }
        }
        collision
    }

    #[cfg(test)]
    fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// A copy of the current screen contents, safe to hand to a renderer
    pub fn snapshot(&self) -> Framebuffer {
        self.pixels
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
