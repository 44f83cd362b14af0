mod assembler;
mod assigned;
mod selector;
mod sink;

pub use assembler::*;
pub use assigned::*;
pub use selector::*;
pub use sink::*;
