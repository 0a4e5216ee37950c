//! Catalog Context - Pagination

use serde::Serialize;

/// 默认页码
pub const DEFAULT_PAGE: u32 = 1;

/// 默认每页数量
pub const DEFAULT_LIMIT: u32 = 10;

/// 分页请求
///
/// 不变量: page >= 1, limit >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// 创建分页请求，非法值（0）回退为默认值
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// 从查询字符串参数解析
    ///
    /// 缺失、非数字或小于 1 的值分别回退为 page=1 / limit=10
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(parse_positive(page, DEFAULT_PAGE), parse_positive(limit, DEFAULT_LIMIT))
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// SQL OFFSET
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// 取前导整数部分（"2.5" -> 2, "3abc" -> 3），无数字前缀时回退默认值
fn parse_positive(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|s| {
        let s = s.trim_start();
        let s = s.strip_prefix('+').unwrap_or(s);
        let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        s[..end].parse::<u32>().ok()
    })
    .filter(|v| *v > 0)
    .unwrap_or(default)
}

/// 分页元数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    #[serde(rename = "currentPage")]
    pub current_page: u32,
    pub limit: u32,
}

impl PaginationMeta {
    pub fn new(total: i64, request: PageRequest) -> Self {
        let limit = i64::from(request.limit());
        let total = total.max(0);
        Self {
            total,
            total_pages: (total + limit - 1) / limit,
            current_page: request.page(),
            limit: request.limit(),
        }
    }
}
