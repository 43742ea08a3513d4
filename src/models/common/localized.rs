//! 双语字段模型
//!
//! 数据以泰语为主、英语为辅。所有双语字段统一走 `LocalizedString` /
//! `LocalizedName`，语言回退逻辑集中在 `resolve` 一处，不在调用点散落
//! `unwrap_or` 链。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 界面语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub enum Locale {
    #[serde(rename = "th")]
    Th,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Th
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "th" => Ok(Locale::Th),
            "en-US" | "en" => Ok(Locale::EnUs),
            _ => Err(format!("Unsupported locale: {s}")),
        }
    }
}

// 双语文本：泰语必填，英语可选
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub struct LocalizedString {
    pub th: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl LocalizedString {
    pub fn new(th: impl Into<String>, en: Option<String>) -> Self {
        Self { th: th.into(), en }
    }

    /// 按语言解析文本；英语缺失时回退到泰语
    pub fn resolve(&self, locale: Locale) -> &str {
        match locale {
            Locale::Th => &self.th,
            Locale::EnUs => self.en.as_deref().unwrap_or(&self.th),
        }
    }
}

// 人名（单语）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub struct PersonName {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl PersonName {
    /// 拼接显示名（名 [中间名] 姓）
    pub fn full(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

// 双语人名：泰语必填，英语可选
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub struct LocalizedName {
    pub th: PersonName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<PersonName>,
}

impl LocalizedName {
    /// 按语言解析人名；英语缺失时回退到泰语
    pub fn resolve(&self, locale: Locale) -> &PersonName {
        match locale {
            Locale::Th => &self.th,
            Locale::EnUs => self.en.as_ref().unwrap_or(&self.th),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(first: &str, last: &str) -> PersonName {
        PersonName {
            first_name: first.to_string(),
            middle_name: None,
            last_name: last.to_string(),
            nickname: None,
        }
    }

    #[test]
    fn test_resolve_prefers_requested_locale() {
        let s = LocalizedString::new("วิทยาศาสตร์", Some("Science".to_string()));
        assert_eq!(s.resolve(Locale::Th), "วิทยาศาสตร์");
        assert_eq!(s.resolve(Locale::EnUs), "Science");
    }

    #[test]
    fn test_resolve_falls_back_to_thai() {
        let s = LocalizedString::new("ภาษาไทย", None);
        assert_eq!(s.resolve(Locale::EnUs), "ภาษาไทย");
    }

    #[test]
    fn test_name_resolve_falls_back_to_thai() {
        let n = LocalizedName {
            th: name("สมชาย", "ใจดี"),
            en: None,
        };
        assert_eq!(n.resolve(Locale::EnUs).first_name, "สมชาย");
    }

    #[test]
    fn test_full_name_with_middle_name() {
        let mut n = name("John", "Doe");
        n.middle_name = Some("Quincy".to_string());
        assert_eq!(n.full(), "John Quincy Doe");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("th".parse::<Locale>().unwrap(), Locale::Th);
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("fr".parse::<Locale>().is_err());
    }
}
