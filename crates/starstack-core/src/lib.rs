pub mod align;
pub mod consts;
pub mod error;
pub mod frame;
pub mod io;
pub mod pick;
pub mod pipeline;
pub mod session;
pub mod stack;
