//! # Commands Module / 命令模块
//!
//! The user-facing operations of Golden Regen. There is exactly one:
//! regenerating the fixtures of the suite in the current directory.
//!
//! Golden Regen 面向用户的操作。只有一个：
//! 重新生成当前目录下套件的基准文件。

pub mod regenerate;
