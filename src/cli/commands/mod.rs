//! 命令实现

pub mod serve;
