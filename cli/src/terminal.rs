pub mod colors;
pub mod format;
pub mod logging;
pub mod observer;
pub mod print;
