//! splitview demo - a window of placeholder panels with draggable dividers
//!
//! Keys: `N` adds a panel, `Backspace` removes the last one, `Escape` quits.

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use splitview::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    splitview::tracing::init();

    let startup = CliArgs::parse().into_config()?;
    tracing::info!(
        panels = startup.panels,
        width = startup.window_size.0,
        height = startup.window_size.1,
        "Starting"
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup);

    event_loop.run_app(&mut app)?;

    Ok(())
}
