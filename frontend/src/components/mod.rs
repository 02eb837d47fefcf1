pub mod bottom_nav;
pub mod header;
pub mod landing;
pub mod modals;
pub mod tabs;
