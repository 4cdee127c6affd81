pub mod render;
pub mod sine;

pub use render::{render, write_initializer, ARRAY_NAME, ELEMENT_TYPE};
pub use sine::{quantize, SineTable, TABLE_LEN};
