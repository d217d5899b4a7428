//! # Bot Emulator - 应用设置
//!
//! 本 crate 定义模拟器应用设置的数据结构、默认值，以及写盘前的过滤规则：
//! - ngrok 隧道与 OAuth 行为开关（`FrameworkSettings`）
//! - 窗口几何与界面模式（`WindowStateSettings`）
//! - 用户记录与 Azure 登录状态（`UserSettings`、`AzureSettings`）
//!
//! ## 模块结构
//! - `models/` - 数据模型（对应前端 TypeScript 类型）
//! - `services/` - 默认设置表
//!
//! ## 持久化约束
//! 设置文件的读写、默认值合并均由外部持久化存储完成。
//! 本 crate 只保证：通过 `SettingsImpl` 序列化得到的内容不包含 `azure.armToken`。
//!
//! 日志通过 `log` 门面输出，日志后端由宿主应用安装。

pub mod models;
pub mod services;

pub use models::bot::Bot;
pub use models::settings::{
    AzureSettings, DebugMode, FrameworkSettings, PersistentSettings, Settings, SettingsImpl,
    ThemeInfo, UserSettings, WindowStateSettings,
};
pub use models::user::User;
pub use services::defaults::{
    DEFAULT_BOT_URL, framework_default, settings_default, settings_default_with_bot_id,
    window_state_default,
};
