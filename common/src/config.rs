/// Runtime options shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Prefix rendered addresses with `0x`.
    pub prefix: bool,
    /// 0 prints everything, 1 drops headers, 2 and above prints bare values only.
    pub quiet: u8,
    /// Enables debug events from the library crates.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: true,
            quiet: 0,
            verbose: false,
        }
    }
}
