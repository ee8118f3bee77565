pub mod messages;

pub use messages::{AppMessage, Notice, NoticeLevel};
