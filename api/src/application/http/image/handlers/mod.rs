pub mod delete_image;
pub mod list_images;
pub mod upload_image;
