// Standalone building blocks
pub mod card;
pub mod page_header;
pub mod skeleton;

// Collaborators of the movie cards
pub mod image;
pub mod motion;

// Movie cards
pub mod movie_preview;

// Re-exports for convenience
pub use card::*;
pub use image::*;
pub use motion::*;
pub use movie_preview::*;
pub use page_header::*;
pub use skeleton::*;
