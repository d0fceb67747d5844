//! Booking Engine - 赌桌设备租赁订单管理
//!
//! # 架构概述
//!
//! 单用户、同步的订单管理核心：
//!
//! - **定价** (`pricing`): 订单总价与桌台数量合并规则
//! - **订单编辑** (`orders`): 编辑中的订单，保存时冻结总价
//! - **统计** (`stats`): 仪表盘数据 (营收、即将进行、待确认、最受欢迎桌台)
//! - **查询** (`query`): 状态过滤、文本搜索、按日期排序
//! - **日历** (`calendar`): 按月分组，周一为首列
//! - **存储** (`store`): redb 数据集存储，读取失败回退默认值
//! - **应用** (`app`): 应用状态、控制器、视图状态
//!
//! # 模块结构
//!
//! ```text
//! booking-engine/src/
//! ├── core/          # 配置
//! ├── common/        # 日志
//! ├── utils/         # 校验、格式化、日期
//! ├── pricing/       # 定价计算
//! ├── orders/        # 订单编辑器
//! ├── stats/         # 仪表盘统计
//! ├── query/         # 列表查询
//! ├── calendar/      # 日历分组
//! ├── store/         # 持久化
//! └── app/           # 控制器
//! ```

pub mod app;
pub mod calendar;
pub mod common;
pub mod core;
pub mod orders;
pub mod pricing;
pub mod query;
pub mod stats;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use app::{AppState, BookingController, BookingView, ViewContent, ViewMode};
pub use calendar::{CalendarMonth, MonthCursor};
pub use crate::core::Config;
pub use orders::OrderEditor;
pub use query::{OrderQuery, StatusFilter};
pub use stats::DashboardStats;
pub use store::{DatasetKey, KeyValueStore, LocalStore, StorageError};
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use common::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// 设置运行环境: 加载 `.env`、读取配置、创建工作目录、初始化日志
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;

    let json = config.log_json || config.is_production();
    if config.log_to_file {
        let log_dir = config.log_dir();
        init_logger_with_file(&config.log_level, json, Some(log_dir.as_path()))?;
    } else {
        init_logger(&config.log_level, json)?;
    }

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____              __   _
   / __ )____  ____  / /__(_)___  ____ _
  / __  / __ \/ __ \/ //_/ / __ \/ __ `/
 / /_/ / /_/ / /_/ / ,< / / / / / /_/ /
/_____/\____/\____/_/|_/_/_/ /_/\__, /
                               /____/
    "#
    );
}
