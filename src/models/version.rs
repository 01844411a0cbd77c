//! 版本解析与比较
//!
//! 提供集群版本兼容性检查的核心逻辑:
//! - 版本字符串解析 (容忍真实服务器的各种版本格式)
//! - 版本三元组比较 (major/minor/patch 字典序)
//! - 服务器版本信息模型 (`/version` 端点响应)
//!
//! # 解析策略
//!
//! 真实集群的 `gitVersion` 字段形如 `v1.9.2-gke.0`、`v1.10+coreos.0`,
//! 厂商会在 minor/patch 上附加构建元数据。因此解析是非对称的:
//! - major: 严格,必须是纯非负整数,否则解析失败
//! - minor/patch: 宽松,取前导数字,丢弃后缀噪音,缺失按 0 处理
//!
//! 严格化 minor/patch 会拒绝已知有效的真实版本串,不要"修正"这一点。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::models::errors::VersionError;

/// 版本号
///
/// 不可变的 (major, minor, patch) 三元组。
/// 字段顺序即比较顺序: derive 的 `Ord` 按 major、minor、patch 依次比较。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// 创建版本号
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// 从字符串解析版本号
    ///
    /// 接受形如 `v1.9.2-gke.0`、`1.10`、`v2.0+build123` 的版本串:
    /// 可选的单个非数字前缀字符 (如 `v`) 被剥离,
    /// 剩余部分按 `.` 最多切成3段。
    ///
    /// # 参数
    /// - `raw`: 服务器自报的版本字符串 (如 `gitVersion` 字段)
    ///
    /// # 错误
    /// - `VersionError::Empty`: 输入为空或没有可提取的主版本号
    /// - `VersionError::InvalidMajor`: 主版本号段存在但不是纯整数
    ///
    /// # 示例
    /// ```
    /// use kube_access::models::Version;
    ///
    /// let version = Version::parse("v1.9.2-gke.0").unwrap();
    /// assert_eq!(version, Version::new(1, 9, 2));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        let trimmed = raw.trim();

        // 剥离可选的单个非数字前缀字符 (如 "v1.8.0" 的 "v")
        let stripped = match trimmed.chars().next() {
            None => return Err(VersionError::Empty),
            Some(c) if !c.is_ascii_digit() => &trimmed[c.len_utf8()..],
            Some(_) => trimmed,
        };

        if stripped.is_empty() {
            return Err(VersionError::Empty);
        }

        // 最多3段; 第3段保留后续的 '.' 作为后缀噪音 (如 "2-gke.0")
        let mut segments = stripped.splitn(3, '.');

        // major: 严格解析,空段视为没有主版本号
        let major_segment = segments.next().unwrap_or("");
        if major_segment.is_empty() {
            return Err(VersionError::Empty);
        }
        let major: u32 = major_segment
            .parse()
            .map_err(|_| VersionError::InvalidMajor(major_segment.to_string()))?;

        // minor/patch: 宽松解析,缺失与无法解析同样按 0 处理
        let minor = segments.next().map_or(0, leading_digits);
        let patch = segments.next().map_or(0, leading_digits);

        Ok(Self {
            major,
            minor,
            patch,
        })
    }

    /// 比较版本大小
    ///
    /// 标准三元组字典序: 先比较 major,相等再比较 minor,再比较 patch。
    pub fn compare(&self, other: &Version) -> Ordering {
        self.cmp(other)
    }

    /// 是否满足最低版本要求
    ///
    /// 下界是包含的: 与最低版本相等视为满足。
    pub fn satisfies(&self, required: &Version) -> bool {
        self.compare(required) != Ordering::Less
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// 提取段的前导数字串并解析为整数
///
/// `"9-gke"` -> 9, `"0+build123"` -> 0, `"abc"` -> 0。
/// 无前导数字或数字溢出都按 0 处理 (宽松策略仅用于 minor/patch)。
fn leading_digits(segment: &str) -> u32 {
    let digits: String = segment
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// 服务器版本信息
///
/// 集群 `/version` 端点返回的JSON结构。
/// 只有 `git_version` 参与兼容性检查,其余字段用于诊断展示。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    /// 主版本号 (字符串形式,如 "1")
    #[serde(default)]
    pub major: String,

    /// 次版本号 (字符串形式,可能带厂商后缀,如 "9+")
    #[serde(default)]
    pub minor: String,

    /// 完整版本串 (如 "v1.9.2-gke.0"),兼容性检查的输入
    pub git_version: String,

    /// 构建提交哈希
    #[serde(default)]
    pub git_commit: String,

    /// 构建树状态 (clean/dirty)
    #[serde(default)]
    pub git_tree_state: String,

    /// 构建时间
    #[serde(default)]
    pub build_date: String,

    /// Go编译器版本
    #[serde(default)]
    pub go_version: String,

    /// 编译器名称
    #[serde(default)]
    pub compiler: String,

    /// 目标平台 (如 "linux/amd64")
    #[serde(default)]
    pub platform: String,
}
