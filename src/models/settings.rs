//! # 模拟器设置数据模型
//!
//! 定义了模拟器应用设置的全部 Rust 结构体：
//! - `FrameworkSettings` - ngrok 隧道、OAuth、语言区域、自动更新等行为开关
//! - `WindowStateSettings` - 窗口几何位置、缩放、主题和调试模式
//! - `UserSettings` / `AzureSettings` - 当前用户和 Azure 登录状态
//! - `PersistentSettings` / `Settings` - 持久化子集和完整的内存配置
//! - `SettingsImpl` - 控制写入磁盘内容的设置包装类型
//!
//! ## 可选字段约定
//! 所有字段均为 `Option`：`None` 表示"未设置"，与默认值不同。
//! 序列化时跳过 `None` 字段，对应前端 `undefined` 字段在 `JSON.stringify` 中消失的行为。
//!
//! ## 持久化约束
//! `SettingsImpl` 的序列化结果中永远不包含 `azure.armToken`（Azure 访问令牌），
//! 无论内存中持有什么值。

use std::collections::HashMap;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::models::bot::Bot;
use crate::models::user::User;

/// 框架设置：隧道、令牌和行为开关
///
/// 对应前端 TypeScript 接口 `FrameworkSettings`，所有字段均可选。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkSettings {
    /// ngrok 可执行文件路径
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngrok_path: Option<String>,

    /// 本机（localhost）上的机器人是否绕过 ngrok
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_ngrok_localhost: Option<bool>,

    /// 模拟器启动时是否自动运行 ngrok
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_ngrok_at_startup: Option<bool>,

    /// 会话状态大小上限（KB），数值原样保存
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_size_limit: Option<f64>,

    /// 使用 1.0 令牌（false 时使用 2.0 令牌）
    #[serde(rename = "use10Tokens", skip_serializing_if = "Option::is_none")]
    pub use_10_tokens: Option<bool>,

    /// OAuthCard 是否使用验证码
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_code_validation: Option<bool>,

    /// 替代 localhost 的主机名，默认 `localhost`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localhost: Option<String>,

    /// 所有端点共用的语言区域
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// 启动时自动更新
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_update: Option<bool>,

    /// 接收预发布版本更新
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_prereleases: Option<bool>,

    /// 是否收集使用数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_usage_data: Option<bool>,

    /// 键值对摘要，用于完整性校验（无默认值）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// 用户设置的 GUID
    #[serde(rename = "userGUID", skip_serializing_if = "Option::is_none")]
    pub user_guid: Option<String>,

    /// 是否使用自定义用户 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_custom_id: Option<bool>,
}

/// 调试界面运行模式
///
/// 持久化为数值：`Normal` = 0，`Sidecar` = 1，与前端数值枚举保持一致。
/// 其他数值保存在 `Other` 中并原样写回，是否接受由调试界面决定。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DebugMode {
    #[default]
    Normal,
    Sidecar,
    Other(Number),
}

impl Serialize for DebugMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DebugMode::Normal => serializer.serialize_u8(0),
            DebugMode::Sidecar => serializer.serialize_u8(1),
            DebugMode::Other(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for DebugMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Number::deserialize(deserializer)?;
        Ok(match raw.as_u64() {
            Some(0) => DebugMode::Normal,
            Some(1) => DebugMode::Sidecar,
            _ => DebugMode::Other(raw),
        })
    }
}

/// 可选主题描述：主题名称和样式表引用
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeInfo {
    pub name: String,
    pub href: String,
}

/// 窗口状态设置
///
/// 由应用窗口管理器读取和回写，记录上次关闭时的窗口几何信息与界面模式。
/// 数值不做范围校验（如负的缩放级别、小数宽度），由使用方自行处理。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowStateSettings {
    /// 窗口所在显示器 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_id: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_level: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// 当前主题名称（如 "Light"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_mode: Option<DebugMode>,

    /// 可选主题列表
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_themes: Option<Vec<ThemeInfo>>,
}

/// 用户设置
///
/// `users_by_id` 和 `users` 是两份并行的 ID → 用户映射，
/// 二者的关系由身份模块决定，这里只负责保存。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// 当前用户 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_by_id: Option<HashMap<String, User>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<HashMap<String, User>>,
}

/// Azure 登录状态
///
/// `arm_token`（Azure Resource Manager 访问令牌）是临时凭据，只存在于内存中，
/// 通过 `SettingsImpl` 序列化时会被移除。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureSettings {
    /// 已登录的 Azure 账户
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_in_user: Option<String>,

    /// ARM 访问令牌
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arm_token: Option<String>,

    /// 重启后是否保持登录
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persist_login: Option<bool>,
}

/// 需要持久化到磁盘的设置子集
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<FrameworkSettings>,

    /// 机器人列表，保持原有顺序
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bots: Option<Vec<Bot>>,

    /// 用户保存过的机器人 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_bot_urls: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_state: Option<WindowStateSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<UserSettings>,
}

/// 完整的内存设置：持久化子集 + Azure 登录状态
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface Settings extends PersistentSettings {
///   azure?: Partial<AzureSettings>;
/// }
/// ```
///
/// 持久化子集通过 `#[serde(flatten)]` 展开，序列化后六个字段处于同一层级。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    pub persistent: PersistentSettings,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure: Option<AzureSettings>,
}

/// 设置包装类型：决定哪些数据写入磁盘
///
/// 生命周期：
/// 1. 由已加载的（部分）设置或空值构造一次（见 [`SettingsImpl::new`]）
/// 2. 由持有者原地修改
/// 3. 写盘前通过序列化（[`SettingsImpl::to_persisted`]）得到过滤后的记录
///
/// 反序列化同样走构造规则，不会用默认值回填缺失字段。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Settings")]
pub struct SettingsImpl {
    pub framework: Option<FrameworkSettings>,
    pub bots: Option<Vec<Bot>>,
    pub saved_bot_urls: Option<Vec<String>>,
    pub window_state: Option<WindowStateSettings>,
    pub users: Option<UserSettings>,
    pub azure: Option<AzureSettings>,
}

impl SettingsImpl {
    /// 由可选的部分设置构造
    ///
    /// 六个顶层字段直接从 `source` 移入（浅拷贝，不合并、不校验）。
    /// `source` 中缺失的字段保持 `None`，默认值由调用方负责应用。
    pub fn new(source: Option<Settings>) -> Self {
        let Settings { persistent, azure } = source.unwrap_or_default();
        let PersistentSettings {
            framework,
            bots,
            saved_bot_urls,
            window_state,
            users,
        } = persistent;

        Self {
            framework,
            bots,
            saved_bot_urls,
            window_state,
            users,
            azure,
        }
    }

    /// 生成写入磁盘的记录
    ///
    /// 五个持久化字段原样复制；`azure` 为去掉 `arm_token` 后的副本，
    /// `azure` 缺失时视为空对象，结果中仍包含 `azure` 键。
    /// 不修改 `self`。
    pub fn to_persisted(&self) -> Settings {
        let azure = self.azure.clone().unwrap_or_default();
        if azure.arm_token.is_some() {
            log::debug!("持久化设置时移除 azure.armToken");
        }

        Settings {
            persistent: self.persistent(),
            azure: Some(AzureSettings {
                arm_token: None,
                ..azure
            }),
        }
    }

    /// 持久化子集（不含 `azure`）
    pub fn persistent(&self) -> PersistentSettings {
        PersistentSettings {
            framework: self.framework.clone(),
            bots: self.bots.clone(),
            saved_bot_urls: self.saved_bot_urls.clone(),
            window_state: self.window_state.clone(),
            users: self.users.clone(),
        }
    }

    /// 序列化为带 2 空格缩进的 JSON 文本，供持久化存储写入设置文件
    ///
    /// # 错误
    /// JSON 序列化失败时返回错误信息
    pub fn to_json_pretty(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("序列化设置失败: {}", e))
    }

    /// 从设置文件内容解析
    ///
    /// 解析结果按构造规则生成，缺失字段保持 `None`。
    ///
    /// # 错误
    /// JSON 格式错误或字段类型不匹配时返回错误信息
    pub fn from_json_str(content: &str) -> Result<Self, String> {
        let settings: SettingsImpl = serde_json::from_str(content).map_err(|e| {
            log::warn!("解析设置文件失败: {}", e);
            format!("解析设置文件失败: {}", e)
        })?;
        log::debug!(
            "已解析设置：{} 个机器人",
            settings.bots.as_ref().map_or(0, Vec::len)
        );
        Ok(settings)
    }
}

impl From<Settings> for SettingsImpl {
    fn from(source: Settings) -> Self {
        Self::new(Some(source))
    }
}

impl Serialize for SettingsImpl {
    /// 序列化内容由 `to_persisted` 决定，任何格式的输出都不含访问令牌
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_persisted().serialize(serializer)
    }
}
