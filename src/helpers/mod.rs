pub mod handler_404;
pub mod media_links;
