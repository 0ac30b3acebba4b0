use std::rc::Rc;

use anyhow::{anyhow, Result};
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::Window;

use splitview::cli::StartupConfig;
use splitview::commands::Cmd;
use splitview::messages::{ContainerMsg, Msg};
use splitview::panels::{placeholder_for, PlaceholderPanel};
use splitview::update::update;
use splitview::view::{PointerEvent, Surface};
use splitview::SplitContainer;

use super::input::{key_action, KeyAction};
use super::mouse::PointerTracker;
use super::renderer::Renderer;

pub struct App {
    container: SplitContainer<PlaceholderPanel>,
    window_size: (u32, u32),
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    pointer: PointerTracker,
    /// Number of placeholders created so far, used for labels and colors
    placeholders_created: usize,
}

impl App {
    pub fn new(startup: StartupConfig) -> Self {
        let mut container = SplitContainer::with_config(startup.split);
        for n in 0..startup.panels {
            container.add(placeholder_for(n));
        }

        Self {
            container,
            window_size: startup.window_size,
            renderer: None,
            window: None,
            context: None,
            pointer: PointerTracker::new(),
            placeholders_created: startup.panels,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.window_size;
        let window_attributes = Window::default_attributes()
            .with_title("splitview")
            .with_inner_size(LogicalSize::new(width, height));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create softbuffer context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        let size = window.inner_size();
        self.resize(size.width, size.height);

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Option<Cmd> {
        update(
            &mut self.container,
            Msg::Container(ContainerMsg::Resized {
                width: i32::try_from(width).unwrap_or(i32::MAX),
                height: i32::try_from(height).unwrap_or(i32::MAX),
            }),
        )
    }

    /// Route a pointer event through the container and on into `update`
    fn dispatch_pointer(&mut self, event: PointerEvent) -> Option<Cmd> {
        let msg = self.container.on_pointer(event)?;
        update(&mut self.container, msg)
    }

    /// Refresh the hover cursor at the last known pointer position
    fn refresh_hover(&mut self) -> Option<Cmd> {
        let (x, y) = self.pointer.position()?;
        update(
            &mut self.container,
            Msg::Container(ContainerMsg::PointerMoved { x, y }),
        )
    }

    fn handle_key(&mut self, action: KeyAction) -> Option<Cmd> {
        match action {
            KeyAction::AddPanel => {
                let id = self
                    .container
                    .add(placeholder_for(self.placeholders_created));
                self.placeholders_created += 1;
                tracing::info!(?id, panels = self.container.len(), "Panel added");
            }
            KeyAction::RemoveLastPanel => {
                let id = self.container.panel_ids().last().copied()?;
                let removed = self.container.remove(id)?;
                tracing::info!(
                    label = %removed.label,
                    panels = self.container.len(),
                    "Panel removed"
                );
            }
            KeyAction::Quit => return None,
        }
        Cmd::merge(Some(Cmd::Redraw), self.refresh_hover())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::error!("{:#}", e);
                    }
                }
                self.resize(size.width, size.height)
            }

            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.render(&self.container) {
                        tracing::error!("Render failed: {:#}", e);
                    }
                }
                None
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.pointer.moved(*position);
                self.dispatch_pointer(event)
            }

            WindowEvent::CursorLeft { .. } => {
                self.pointer.left_window();
                None
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.pointer.button(*state, *button)?;
                let cmd = self.dispatch_pointer(event);
                // Press shows the resize cursor; release falls back to whatever is under the pointer
                Cmd::merge(cmd, self.refresh_hover())
            }

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                self.handle_key(key_action(code)?)
            }

            _ => None,
        }
    }

    fn process_cmd(&self, cmd: Cmd) {
        match cmd {
            Cmd::Redraw => {}
            Cmd::SetCursor(icon) => {
                if let Some(window) = &self.window {
                    window.set_cursor(icon);
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    fn is_quit(event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => true,
            WindowEvent::KeyboardInput { event, .. } => {
                event.state == ElementState::Pressed
                    && matches!(
                        event.physical_key,
                        PhysicalKey::Code(code) if key_action(code) == Some(KeyAction::Quit)
                    )
            }
            _ => false,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to open window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = Self::is_quit(&event);
        let is_ours = self
            .window
            .as_ref()
            .is_some_and(|window| window.id() == window_id);

        let should_redraw = if is_ours && !should_exit {
            match self.handle_event(&event) {
                Some(cmd) => {
                    let needs_redraw = cmd.needs_redraw();
                    self.process_cmd(cmd);
                    needs_redraw
                }
                None => false,
            }
        } else {
            false
        };

        if should_exit {
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
