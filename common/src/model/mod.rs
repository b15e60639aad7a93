pub mod activity;
pub mod channel;
pub mod duration;
pub mod marketing_request;
