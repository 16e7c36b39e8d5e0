pub mod check;
mod command_result;
pub mod helper;
pub mod init;
pub mod keys;

pub use command_result::*;
