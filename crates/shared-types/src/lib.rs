pub mod error;
pub mod feature_flags;
pub mod layout;
pub mod movie;

pub use error::*;
pub use feature_flags::*;
pub use layout::*;
pub use movie::*;
