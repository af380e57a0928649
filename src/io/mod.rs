//! 文件读写：原始地址来源与规则输出

pub mod sink;
pub mod source;

pub use sink::{write_output_file, write_stats_file};
pub use source::{read_input_file, split_tokens};
