use lazy_static::lazy_static;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use nix::sys::termios::{tcgetattr, tcsetattr, LocalFlags, SetArg, Termios};
use std::process;
use std::sync::Mutex;

lazy_static! {
    // Saved so the SIGINT handler can reach it.
    static ref ORIGINAL_TERMIOS: Mutex<Option<Termios>> = Mutex::new(None);
}

/// Holds STDIN in raw mode for the lifetime of the guard. Dropping it
/// restores the saved terminal attributes, including during a panic unwind.
pub struct Terminal;

impl Terminal {
    /// Saves the current attributes, switches STDIN to unbuffered no-echo
    /// input and installs a SIGINT handler that restores the terminal
    /// before exiting.
    pub fn raw() -> Result<Terminal, nix::Error> {
        let original = tcgetattr(libc::STDIN_FILENO)?;
        *ORIGINAL_TERMIOS.lock().unwrap() = Some(original.clone());

        let mut termios = original;
        termios.local_flags &= !(LocalFlags::ICANON | LocalFlags::ECHO);
        tcsetattr(libc::STDIN_FILENO, SetArg::TCSANOW, &termios)?;

        let action = SigAction::new(
            SigHandler::Handler(handle_interrupt),
            SaFlags::empty(),
            SigSet::empty(),
        );
        unsafe { sigaction(Signal::SIGINT, &action) }?;

        Ok(Terminal)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore();
    }
}

fn restore() {
    if let Ok(mut original) = ORIGINAL_TERMIOS.lock() {
        if let Some(termios) = original.take() {
            let _ = tcsetattr(libc::STDIN_FILENO, SetArg::TCSANOW, &termios);
        }
    }
}

extern "C" fn handle_interrupt(_signal: libc::c_int) {
    restore();
    println!();
    process::exit(-2);
}
