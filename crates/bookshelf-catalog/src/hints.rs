//! User-visible hint strings

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the candidate count in [`HintMessages::found`]
const COUNT_PLACEHOLDER: &str = "{count}";

/// Hint text shown under the search box
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HintMessages {
    /// While a lookup is in flight
    pub searching: String,
    /// Candidates found; `{count}` is replaced by their number
    pub found: String,
    /// Lookup returned nothing
    pub empty: String,
    /// Lookup failed
    pub unavailable: String,
}

impl Default for HintMessages {
    fn default() -> Self {
        Self {
            searching: "正在检索豆瓣信息...".to_string(),
            found: "找到 {count} 条结果，点击确认加入。".to_string(),
            empty: "未找到结果，已展示推荐书单。".to_string(),
            unavailable: "豆瓣接口不可用，已展示推荐书单。".to_string(),
        }
    }
}

impl HintMessages {
    /// Hint for `count` candidates
    pub fn found(&self, count: usize) -> String {
        self.found.replace(COUNT_PLACEHOLDER, &count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_fills_count() {
        let hints = HintMessages::default();
        assert_eq!(hints.found(7), "找到 7 条结果，点击确认加入。");
    }

    #[test]
    fn test_override_single_message() {
        let hints: HintMessages =
            serde_json::from_str(r#"{ "found": "{count} results" }"#).unwrap();
        assert_eq!(hints.found(2), "2 results");
        assert_eq!(hints.empty, HintMessages::default().empty);
    }
}
