// ==========================================
// 复合材料制造 ERP - 命令行入口
// ==========================================
// 用法:
//   composite-erp [--json] efficiency <数量> <开工 HH:MM> <完工 HH:MM> <单件工时> [工位]
//   composite-erp [--json] target <工位> <人数> <工时> [SIMPLE|MEDIUM|COMPLEX]
//   composite-erp [--json] bom <交付物> [物料=数量 ...]
//   composite-erp [--json] norms
// 环境变量:
//   COMPOSITE_ERP_DB_PATH  配置数据库路径
//   COMPOSITE_ERP_LOCALE   输出语言 (zh-CN / en)
// ==========================================

use composite_erp::app::{get_default_db_path, AppState};
use composite_erp::cli::{self, CliArgs};
use composite_erp::i18n::set_locale;
use composite_erp::{logging, ApiResult};

#[tokio::main]
async fn main() {
    logging::init();

    if let Ok(locale) = std::env::var("COMPOSITE_ERP_LOCALE") {
        set_locale(locale.trim());
    }

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(error = %e, "命令执行失败");
            eprintln!("{}", cli::error_message(&e));
            std::process::exit(cli::exit_code(&e));
        }
    }
}

async fn run(args: &[String]) -> ApiResult<String> {
    // 参数先于数据库解析，用法错误不会创建配置库
    let cli_args: CliArgs = cli::parse_args(args)?;
    tracing::info!(version = composite_erp::VERSION, "{}", composite_erp::APP_NAME);

    let state = AppState::new(get_default_db_path()).await?;
    cli::execute(&state.production_api, &cli_args)
}
