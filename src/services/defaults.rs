//! # 默认设置表
//!
//! 提供模拟器首次启动时使用的基准设置：
//! - `framework_default` - 框架设置默认值
//! - `window_state_default` - 窗口状态默认值
//! - `settings_default` - 由上述默认值和一个本地机器人记录组成的完整默认设置
//!
//! 没有合理默认值的字段（如 `hash`、`displayId`）不在默认表中出现。
//! 默认值与已持久化设置的合并由调用方完成，构造 `SettingsImpl` 时不会自动回填。

use crate::models::bot::Bot;
use crate::models::settings::{
    AzureSettings, FrameworkSettings, PersistentSettings, Settings, SettingsImpl, UserSettings,
    WindowStateSettings,
};

/// 默认机器人记录使用的本地消息端点
pub const DEFAULT_BOT_URL: &str = "http://localhost:3978/api/messages";

/// 框架设置默认值
pub fn framework_default() -> FrameworkSettings {
    FrameworkSettings {
        ngrok_path: Some(String::new()),
        bypass_ngrok_localhost: Some(true),
        run_ngrok_at_startup: Some(false),
        state_size_limit: Some(64.0),
        use_10_tokens: Some(false),
        use_code_validation: Some(false),
        localhost: Some("localhost".to_string()),
        locale: Some("en-US".to_string()),
        use_prereleases: Some(false),
        auto_update: Some(true),
        collect_usage_data: Some(false),
        hash: None,
        user_guid: Some(String::new()),
        use_custom_id: Some(false),
    }
}

/// 窗口状态默认值：800×600，位于 (100, 50)，浅色主题
pub fn window_state_default() -> WindowStateSettings {
    WindowStateSettings {
        display_id: None,
        zoom_level: Some(0.0),
        top: Some(50.0),
        left: Some(100.0),
        width: Some(800.0),
        height: Some(600.0),
        theme: Some("Light".to_string()),
        debug_mode: None,
        available_themes: Some(vec![]),
    }
}

/// 完整默认设置
///
/// 每次调用都会为默认机器人生成新的 UUID v4，因此结果在多次调用之间不相同。
/// 需要固定 `botId` 时使用 [`settings_default_with_bot_id`]。
pub fn settings_default() -> SettingsImpl {
    settings_default_with_bot_id(uuid::Uuid::new_v4().to_string())
}

/// 使用指定 `botId` 生成完整默认设置
pub fn settings_default_with_bot_id(bot_id: impl Into<String>) -> SettingsImpl {
    let bot = Bot {
        bot_id: Some(bot_id.into()),
        bot_url: Some(DEFAULT_BOT_URL.to_string()),
        msa_app_id: Some(String::new()),
        msa_password: Some(String::new()),
        locale: Some(String::new()),
        ..Bot::default()
    };

    SettingsImpl::new(Some(Settings {
        persistent: PersistentSettings {
            framework: Some(framework_default()),
            bots: Some(vec![bot]),
            saved_bot_urls: Some(vec![]),
            window_state: Some(window_state_default()),
            users: Some(UserSettings::default()),
        },
        azure: Some(AzureSettings::default()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_framework_default_document() {
        let value = serde_json::to_value(framework_default()).unwrap();
        assert_eq!(
            value,
            json!({
                "ngrokPath": "",
                "bypassNgrokLocalhost": true,
                "runNgrokAtStartup": false,
                "stateSizeLimit": 64.0,
                "use10Tokens": false,
                "useCodeValidation": false,
                "localhost": "localhost",
                "locale": "en-US",
                "usePrereleases": false,
                "autoUpdate": true,
                "collectUsageData": false,
                "userGUID": "",
                "useCustomId": false
            })
        );
    }

    #[test]
    fn test_window_state_default_document() {
        let value = serde_json::to_value(window_state_default()).unwrap();
        assert_eq!(
            value,
            json!({
                "zoomLevel": 0.0,
                "width": 800.0,
                "height": 600.0,
                "left": 100.0,
                "top": 50.0,
                "theme": "Light",
                "availableThemes": []
            })
        );
    }

    #[test]
    fn test_settings_default_has_one_local_bot() {
        let settings = settings_default();
        let bots = settings.bots.as_ref().unwrap();
        assert_eq!(bots.len(), 1);
        assert_eq!(bots[0].bot_url.as_deref(), Some(DEFAULT_BOT_URL));
        assert!(!bots[0].bot_id.as_deref().unwrap_or_default().is_empty());
    }

    #[test]
    fn test_settings_default_bot_id_is_unique() {
        let first = settings_default();
        let second = settings_default();
        assert_ne!(
            first.bots.unwrap()[0].bot_id,
            second.bots.unwrap()[0].bot_id
        );
    }

    #[test]
    fn test_settings_default_document() {
        let settings = settings_default_with_bot_id("fixed-id");
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            value,
            json!({
                "framework": serde_json::to_value(framework_default()).unwrap(),
                "bots": [{
                    "botId": "fixed-id",
                    "botUrl": "http://localhost:3978/api/messages",
                    "msaAppId": "",
                    "msaPassword": "",
                    "locale": ""
                }],
                "savedBotUrls": [],
                "windowState": serde_json::to_value(window_state_default()).unwrap(),
                "users": {},
                "azure": {}
            })
        );
    }
}
