//! # 用户身份数据模型

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 模拟器中的对话用户
///
/// 由账户/身份模块创建，设置模块只负责随 `UserSettings` 一起持久化。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface User {
///   id?: string;
///   name?: string;
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 用户 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// 显示名称
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// 身份模块附加的其他字段
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
