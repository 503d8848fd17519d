pub use super::button::Entity as Button;
pub use super::user_score::Entity as UserScore;
