use booking_engine::app::report::{render_calendar, render_dashboard, render_order_list};
use booking_engine::utils::today_local;
use booking_engine::{BookingController, LocalStore, print_banner, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 工作目录, 日志)
    let config = setup_environment()?;

    print_banner();

    tracing::info!(
        work_dir = %config.work_dir,
        environment = %config.environment,
        "Booking engine starting..."
    );

    // 2. 打开数据库并加载数据集
    let store = LocalStore::open(config.database_path())?;
    let today = today_local();
    let first_run = store.is_empty()?;
    let controller = BookingController::load(store, config.seed_demo_data, today);
    if first_run {
        tracing::info!("Empty database, writing initial datasets");
        controller.commit_all()?;
    }

    // 3. 输出仪表盘、订单列表和本月日历
    println!("{}", render_dashboard(&controller.dashboard(today)));
    println!(
        "{}",
        render_order_list(&controller.visible_orders(), controller.customers())
    );
    print!("{}", render_calendar(&controller.calendar()));

    Ok(())
}
