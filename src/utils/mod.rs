pub mod log_format;
pub mod logger;

pub use log_format::compress_token_list;
pub use logger::init_activity_log;
