pub mod frame_list;
pub mod image_io;

pub use frame_list::list_frames;
pub use image_io::{load_image, save_image};
