//! Software renderer - presents a `Surface` tree through softbuffer

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use softbuffer::Context;
use winit::window::Window;

use splitview::view::{Frame, Surface};

/// Window background, visible wherever truncated panel widths leave a gap
pub const BACKGROUND: u32 = 0xFF1E1E1E;

pub struct Renderer {
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();

        let surface = softbuffer::Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;

        let mut renderer = Self {
            surface,
            width: 0,
            height: 0,
        };
        renderer.resize(size.width, size.height)?;
        Ok(renderer)
    }

    /// Resize the backing buffer to the window's physical size
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (width, height) = (width.max(1), height.max(1));
        self.surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Clear the buffer, draw `root` into it and present
    pub fn render<S: Surface>(&mut self, root: &S) -> Result<()> {
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, self.width as usize, self.height as usize);
            frame.clear(BACKGROUND);
            root.render(&mut frame);
        }

        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}
