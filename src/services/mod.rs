//! # 设置服务模块
//!
//! - `defaults` - 默认设置表和完整默认设置的生成

pub mod defaults;
