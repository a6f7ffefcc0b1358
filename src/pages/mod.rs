pub mod input;
pub mod landing;
