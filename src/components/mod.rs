pub mod counter;
pub mod notification;
pub mod reveal;
pub mod slideshow;
