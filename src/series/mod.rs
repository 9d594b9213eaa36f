//! # 序列类型查询模块（series）
//!
//! ## 设计思路
//!
//! 序列类型清单来自外部主配置服务；网络或解码失败都不应当让表单不可用，
//! 因此查询永不向上抛错：失败时降级为内置的六种缺省序列类型，
//! 并通过 `source` 字段告知前端做一次非致命提示。
//!
//! ## 实现思路
//!
//! - 端点、凭据、超时均可由环境变量覆盖，缺省指向生产主配置服务。
//! - `reqwest` 客户端在构造期设定整体超时，失败同样走降级分支。
//! - 命令层返回 `SeriesCatalog`，没有错误分支。

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 缺省的主配置服务端点。
const DEFAULT_SERIES_URL: &str =
    "http://apollo2.humanbrain.in:8000/masterconfig/Seriestype/?format=json";

/// 查询整体超时（秒）。
const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// 一种成像序列类型（如 T1、FLAIR）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesType {
    pub id: u32,
    pub name: String,
    pub mnemonic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 序列类型清单及其来源。
///
/// `source` 为 `"remote"` 或 `"fallback"`，前端据此决定是否提示降级。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesCatalog {
    pub series_types: Vec<SeriesType>,
    pub source: &'static str,
}

/// 查询配置：端点 + 可选的 Basic 认证 + 超时。
#[derive(Debug, Clone)]
pub struct SeriesLookupConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
}

impl Default for SeriesLookupConfig {
    fn default() -> Self {
        Self {
            url: env::var("SECTION_QR_SERIES_URL").unwrap_or_else(|_| DEFAULT_SERIES_URL.to_string()),
            username: env::var("SECTION_QR_SERIES_USER").ok().or_else(|| Some("admin".to_string())),
            password: env::var("SECTION_QR_SERIES_PASS").ok().or_else(|| Some("admin".to_string())),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// 内置缺省序列类型清单（远端不可用时的降级来源）。
pub fn fallback_series_types() -> Vec<SeriesType> {
    [
        (1, "T1 Weighted", "T1"),
        (2, "T2 Weighted", "T2"),
        (3, "FLAIR", "FLAIR"),
        (4, "Diffusion Weighted Imaging", "DWI"),
        (5, "Susceptibility Weighted Imaging", "SWI"),
        (6, "Diffusion Tensor Imaging", "DTI"),
    ]
    .into_iter()
    .map(|(id, name, mnemonic)| SeriesType {
        id,
        name: name.to_string(),
        mnemonic: mnemonic.to_string(),
        description: None,
    })
    .collect()
}

/// 向主配置服务请求序列类型清单。
async fn fetch_remote(config: &SeriesLookupConfig) -> Result<Vec<SeriesType>, reqwest::Error> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()?;

    let mut request = client.get(&config.url);
    if let Some(username) = &config.username {
        request = request.basic_auth(username, config.password.as_deref());
    }

    request
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<SeriesType>>()
        .await
}

/// 加载序列类型清单，失败时降级为内置缺省值。
pub async fn load_series_types(config: &SeriesLookupConfig) -> SeriesCatalog {
    match fetch_remote(config).await {
        Ok(series_types) if !series_types.is_empty() => {
            log::info!("✅ 已从主配置服务加载 {} 种序列类型", series_types.len());
            SeriesCatalog {
                series_types,
                source: "remote",
            }
        }
        Ok(_) => {
            log::warn!("主配置服务返回空清单，使用内置缺省序列类型");
            SeriesCatalog {
                series_types: fallback_series_types(),
                source: "fallback",
            }
        }
        Err(e) => {
            log::warn!("❌ 序列类型查询失败（{e}），使用内置缺省序列类型");
            SeriesCatalog {
                series_types: fallback_series_types(),
                source: "fallback",
            }
        }
    }
}

/// 查询序列类型清单（含降级），供表单下拉框使用。
#[tauri::command]
pub async fn get_series_types() -> SeriesCatalog {
    load_series_types(&SeriesLookupConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_six_entries() {
        let fallback = fallback_series_types();
        assert_eq!(fallback.len(), 6);
        let mnemonics: Vec<&str> = fallback.iter().map(|s| s.mnemonic.as_str()).collect();
        assert_eq!(mnemonics, vec!["T1", "T2", "FLAIR", "DWI", "SWI", "DTI"]);
    }

    #[test]
    fn test_fallback_ids_are_unique() {
        let fallback = fallback_series_types();
        let mut ids: Vec<u32> = fallback.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_series_type_roundtrips_optional_description() {
        let json = r#"{"id":3,"name":"FLAIR","mnemonic":"FLAIR"}"#;
        let parsed: SeriesType = serde_json::from_str(json).expect("缺少 description 也应当可解析");
        assert_eq!(parsed.description, None);
        assert_eq!(parsed.mnemonic, "FLAIR");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_degrades_to_fallback() {
        let config = SeriesLookupConfig {
            url: "http://127.0.0.1:1/unreachable".to_string(),
            username: None,
            password: None,
            timeout: Duration::from_millis(200),
        };
        let catalog = load_series_types(&config).await;
        assert_eq!(catalog.source, "fallback");
        assert_eq!(catalog.series_types.len(), 6);
    }
}
