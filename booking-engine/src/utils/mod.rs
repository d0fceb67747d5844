//! 工具模块 - 通用工具函数
//!
//! - [`validation`] - 输入校验
//! - [`format`] - 金额显示格式
//! - [`time`] - 日期工具

pub mod format;
pub mod time;
pub mod validation;

pub use format::format_czk;
pub use shared::error::{AppError, AppResult, ErrorCode};
pub use time::{parse_date, today_local};
