pub mod hop;
pub mod switch_port;
