//! Novel Context - Value Objects

use serde::{Deserialize, Serialize};

use super::NovelError;

/// 章节数输入无效时使用的默认值
pub const DEFAULT_CHAPTER_COUNT: u32 = 5;

/// 小说标题
///
/// 按用户输入原样保存，允许为空
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 第 `index` 章的标题，格式为 `{标题} - 第N章`
    pub fn chapter_title(&self, index: u32) -> String {
        format!("{} - 第{}章", self.0, index)
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 各文字体系中十进制数字 0 的码位：ASCII、阿拉伯-印度、扩展阿拉伯-印度、
/// 天城文、孟加拉文、泰文、全角
const DIGIT_ZEROS: &[u32] = &[0x30, 0x660, 0x6F0, 0x966, 0x9E6, 0xE50, 0xFF10];

/// 单个十进制数字字符的值
fn decimal_value(c: char) -> Option<i64> {
    let code = c as u32;
    DIGIT_ZEROS
        .iter()
        .find_map(|&zero| code.checked_sub(zero).filter(|d| *d < 10))
        .map(i64::from)
}

/// 按整数字面量规则解析：可选正负号，数字之间允许单个 `_` 分隔，
/// 接受全角等非 ASCII 十进制数字
fn parse_integer(input: &str) -> Option<i64> {
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    let mut after_underscore = false;
    for c in digits.chars() {
        if c == '_' {
            if !seen_digit || after_underscore {
                return None;
            }
            after_underscore = true;
            continue;
        }
        let digit = decimal_value(c)?;
        value = value.checked_mul(10)?.checked_add(digit)?;
        seen_digit = true;
        after_underscore = false;
    }

    if !seen_digit || after_underscore {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// 目标章节数
///
/// 保存用户输入解析出的原始值（可能为负数），写入大纲提示词时原样使用；
/// 实际写作的章节数为 `cycles()`，负数按 0 处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterCount(i64);

impl ChapterCount {
    /// 解析用户输入的章节数
    ///
    /// 输入先去除首尾空白再按整数解析；解析失败（空串、非数字、溢出）时
    /// 回退到 `fallback`
    pub fn parse_or(input: &str, fallback: u32) -> Self {
        match parse_integer(input.trim()) {
            Some(n) => Self(n),
            None => Self(i64::from(fallback)),
        }
    }

    /// 使用默认回退值 5 解析
    pub fn parse(input: &str) -> Self {
        Self::parse_or(input, DEFAULT_CHAPTER_COUNT)
    }

    /// 解析出的原始值
    pub fn get(&self) -> i64 {
        self.0
    }

    /// 实际要写的章节数
    pub fn cycles(&self) -> u32 {
        u32::try_from(self.0.max(0)).unwrap_or(u32::MAX)
    }

    /// 章节序号，从 1 开始
    pub fn indices(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.cycles()
    }
}

/// 主要角色：名称 + 简介
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    description: String,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, NovelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(NovelError::InvalidCharacter("角色名称不能为空".to_string()));
        }
        Ok(Self {
            name,
            description: description.into(),
        })
    }

    /// 未配置角色时使用的默认角色表
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                name: "主角".to_string(),
                description: "默认写一个大概的主角信息".to_string(),
            },
            Self {
                name: "配角A".to_string(),
                description: "可自行扩展".to_string(),
            },
        ]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}：{}", self.name, self.description)
    }
}
