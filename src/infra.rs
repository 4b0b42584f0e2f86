//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Golden Regen,
//! including subprocess execution and suite-directory scanning.
//!
//! 此模块为 Golden Regen 提供基础设施服务，
//! 包括子进程执行和套件目录扫描。

pub mod command;
pub mod fs;
