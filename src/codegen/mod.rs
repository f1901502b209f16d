mod codegen;
mod monitor_table;

pub use codegen::*;
pub use monitor_table::*;
