pub mod compositor;

pub use compositor::{mean_stack, CombineMethod, Compositor};
