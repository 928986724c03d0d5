pub mod navigation;
pub mod pages;
pub mod system;
