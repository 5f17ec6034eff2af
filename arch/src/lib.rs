pub mod inst;
pub mod op;
