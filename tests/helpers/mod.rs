// ==========================================
// 集成测试共享辅助模块
// ==========================================

#![allow(dead_code)]

pub mod project_builder;

pub use project_builder::{date, ProjectBuilder};
