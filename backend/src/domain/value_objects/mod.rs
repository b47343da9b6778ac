pub mod email;
pub mod likert;
pub mod relationship;
pub mod token;

pub use email::Email;
pub use likert::{parse_or_midpoint, LikertScale};
pub use relationship::Relationship;
pub use token::AccessToken;
