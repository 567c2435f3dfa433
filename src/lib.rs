mod config;
mod file_loader;
mod instruction;
mod process;
mod sign_extend;
mod state;
mod swap16;
mod terminal;
mod trap_vector;

pub use crate::config::Config;
pub(crate) use crate::sign_extend::SignExtend;
pub(crate) use crate::swap16::Swap16;

use crate::file_loader::load_image;
use crate::process::run as run_processor;
use crate::state::State;
use crate::terminal::Terminal;
use std::error::Error;

/// Loads the configured program images and runs the machine until it halts.
///
/// The terminal enters raw mode only after every image has loaded; usage
/// and load errors never touch the host terminal.
pub fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let mut state = State::new();

    for path in &config.image_paths {
        load_image(path, &mut state.memory)
            .map_err(|_| format!("failed to load image: {}", path))?;
    }

    let _terminal = Terminal::raw()?;
    run_processor(state);

    Ok(())
}
