pub mod colors;
pub mod detail;
pub mod logging;
pub mod print;
