pub mod invitation;
pub mod report;
pub mod response;
pub mod survey;
pub mod user;

pub use invitation::Invitation;
pub use report::SurveyReport;
pub use response::{Ranking, SurveyResponse};
pub use survey::Survey;
pub use user::AdminUser;
