pub mod camera_feed;
pub mod category_card;
pub mod footer;
pub mod header;
pub mod modal;
pub mod product_card;
pub mod upload_modal;
