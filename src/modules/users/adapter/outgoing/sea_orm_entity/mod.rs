pub mod acts;
pub mod answers;
pub mod brands;
pub mod influencers;
pub mod organizations;
pub mod status;
pub mod user_acts;
pub mod users;
