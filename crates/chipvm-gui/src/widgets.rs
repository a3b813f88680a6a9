use iced::mouse::Cursor;
use iced::widget::canvas;
use iced::{Element, Fill, Point, Rectangle, Renderer, Size, Theme};

use chipvm_core::{DISPLAY_HEIGHT, DISPLAY_WIDTH, Framebuffer};

use crate::Message;
use crate::constants::{BACKGROUND, FOREGROUND};

/// A custom widget based on Canvas, which draws *pixels* over a black screen in the native CHIP-8
/// resolution. It holds its own copy of the last published frame.
pub struct Display {
    frame: Framebuffer,
}

impl Display {
    pub fn new(frame: Framebuffer) -> Self {
        Self { frame }
    }

    /// Replaces the frame that gets drawn next
    pub fn publish(&mut self, frame: Framebuffer) {
        self.frame = frame;
    }

    #[cfg(test)]
    pub fn frame(&self) -> &Framebuffer {
        &self.frame
    }

    /// Construct a canvas based on custom drawing logic
    pub fn view(&self) -> Element<'_, Message> {
        canvas::Canvas::new(self).width(Fill).height(Fill).into()
    }
}

impl canvas::Program<Message> for Display {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let columns = DISPLAY_WIDTH as usize;
        let rows = DISPLAY_HEIGHT as usize;
        let cell_size = Size::new(
            bounds.width / columns as f32,
            bounds.height / rows as f32,
        );
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let background = canvas::Path::rectangle(Point::ORIGIN, bounds.size());
        frame.fill(&background, BACKGROUND);

        // Only the lit pixels get a rectangle of their own
        for (row, pixels) in self.frame.iter().enumerate() {
            for (column, &lit) in pixels.iter().enumerate() {
                if !lit {
                    continue;
                }

                let x = column as f32 * cell_size.width;
                let y = row as f32 * cell_size.height;
                let cell = canvas::Path::rectangle(Point::new(x, y), cell_size);
                frame.fill(&cell, FOREGROUND);
            }
        }

        vec![frame.into_geometry()]
    }
}
