//! # 数据模型模块
//!
//! 定义了与前端 TypeScript 类型一一对应的 Rust 数据结构。
//! 所有结构体均派生 `Serialize` 和 `Deserialize`，字段名使用 camelCase，
//! 与模拟器已有的设置文件格式保持一致。
//! - `settings` - 模拟器设置各部分及 `SettingsImpl` 持久化包装
//! - `bot` - 机器人端点记录
//! - `user` - 用户身份记录

pub mod bot;
pub mod settings;
pub mod user;
