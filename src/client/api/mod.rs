pub mod helper;
pub mod host;
pub mod panel;
