//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Golden Regen,
//! including the report-format catalogue, fixture generation and
//! output normalization logic.
//!
//! 此模块包含 Golden Regen 的核心功能，
//! 包括报告格式目录、基准生成和输出归一化逻辑。

pub mod config;
pub mod execution;
pub mod models;
pub mod normalize;

// Re-exports
pub use config::Format;
pub use execution::generate_test_data;
pub use models::DiscoveredTest;
