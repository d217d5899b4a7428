//! # 机器人记录数据模型
//!
//! 定义设置文件 `bots` 列表中的单个元素。机器人记录由机器人管理模块创建和维护，
//! 设置模块只把它当作不透明的列表元素保存和转发。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 机器人端点记录
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface Bot {
///   botId?: string;
///   botUrl?: string;
///   msaAppId?: string;
///   msaPassword?: string;
///   locale?: string;
/// }
/// ```
///
/// 设计决策：
/// - 已知字段均可选：缺失或为 `null` 时为 `None`，不会导致整个设置文件解析失败
/// - 其余字段通过 `extra` 原样保留，避免读取后保存时丢失机器人管理模块写入的数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bot {
    /// 机器人唯一标识符（UUID）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<String>,

    /// 机器人消息端点 URL（如 `http://localhost:3978/api/messages`）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_url: Option<String>,

    /// Microsoft App ID，本地调试时为空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msa_app_id: Option<String>,

    /// Microsoft App 密码，本地调试时为空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msa_password: Option<String>,

    /// 与该机器人对话时使用的语言区域，空字符串表示跟随全局设置
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// 未识别的字段，序列化时原样写回
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
