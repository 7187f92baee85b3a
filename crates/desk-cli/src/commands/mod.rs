pub mod dispatch;
pub mod limit;
pub mod show;
pub mod watch;
