//! Destination for `print` statement output.
//!
//! - `Stdout`: the default, writes each line to standard output
//! - `Buffer`: captures output for tests and embedding hosts
//! - `Silent`: discards everything
//!
//! Uses enum dispatch rather than a trait object; the set of destinations
//! is closed.

use std::sync::Arc;

use parking_lot::Mutex;

/// Where `print` output goes.
pub enum PrintHandler {
    Stdout,
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandler {
    /// Write `msg` followed by a newline.
    pub fn println(&self, msg: &str) {
        match self {
            PrintHandler::Stdout => println!("{msg}"),
            PrintHandler::Buffer(buffer) => {
                let mut buf = buffer.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            PrintHandler::Silent => {}
        }
    }

    /// Everything captured so far; empty for handlers that don't capture.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(buffer) => buffer.lock().clone(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }

    /// Drop captured output.
    pub fn clear(&self) {
        if let PrintHandler::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

/// Print handler shared between the interpreter and its host.
///
/// The host keeps a clone to read captured output after running code.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}

#[cfg(test)]
mod tests;
