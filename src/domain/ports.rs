use crate::utils::error::Result;

/// Line-oriented terminal the menus talk through.
pub trait Console {
    /// Reads one line without its terminator. `Ok(None)` means end of input.
    fn read_line(&mut self) -> Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> Result<()>;
}
