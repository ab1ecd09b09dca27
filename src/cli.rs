// ==========================================
// 复合材料制造 ERP - 命令行参数解析与执行
// ==========================================
// 职责: argv → 表单 DTO → ProductionApi → 输出文本
// 说明: main.rs 只负责进程级事务（日志、语言、退出码）
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::{parse_number, require_text};
use crate::api::{availability_label, EfficiencyForm, ProductionApi, TargetForm};
use crate::domain::bom::{InventorySnapshot, SpecSheet};
use crate::i18n::{t, t_with_args};
use anyhow::Context;
use serde::Serialize;

pub const USAGE: &str = "composite-erp [--json] <efficiency|target|bom|norms> [args...]";

/// 用法错误使用的字段名
pub const USAGE_FIELD: &str = "command";

/// 退出码
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

// ==========================================
// 命令定义
// ==========================================

#[derive(Debug, Clone)]
pub enum Command {
    Efficiency(EfficiencyForm),
    Target(TargetForm),
    Bom {
        spec: SpecSheet,
        inventory: InventorySnapshot,
    },
    Norms,
}

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub json: bool,
    pub command: Command,
}

// ==========================================
// 参数解析
// ==========================================

/// 解析命令行参数（不含程序名）
///
/// `--json` 可出现在任意位置
pub fn parse_args(args: &[String]) -> ApiResult<CliArgs> {
    let json = args.iter().any(|a| a == "--json");
    let args: Vec<String> = args.iter().filter(|a| *a != "--json").cloned().collect();

    let Some((command, rest)) = args.split_first() else {
        return Err(ApiError::invalid(USAGE_FIELD, "缺少子命令"));
    };

    let command = match command.as_str() {
        "efficiency" => Command::Efficiency(efficiency_form_from_args(rest)?),
        "target" => Command::Target(target_form_from_args(rest)?),
        "bom" => {
            let deliverables = required_arg(rest, 0, "deliverables")?;
            Command::Bom {
                spec: SpecSheet {
                    spec_id: "CLI".to_string(),
                    part_name: "-".to_string(),
                    customer: None,
                    deliverables: deliverables.to_string(),
                },
                inventory: parse_inventory_args(&rest[1..])?,
            }
        }
        "norms" => Command::Norms,
        other => {
            return Err(ApiError::invalid(
                USAGE_FIELD,
                format!("未知子命令 {:?}", other),
            ))
        }
    };

    Ok(CliArgs { json, command })
}

fn required_arg<'a>(rest: &'a [String], idx: usize, name: &str) -> ApiResult<&'a str> {
    rest.get(idx)
        .map(String::as_str)
        .ok_or_else(|| ApiError::invalid(name, "缺少参数"))
}

/// `<数量> <开工> <完工> <单件工时> [工位]`
pub fn efficiency_form_from_args(rest: &[String]) -> ApiResult<EfficiencyForm> {
    Ok(EfficiencyForm {
        task_id: "cli".to_string(),
        station: rest.get(4).cloned().unwrap_or_default(),
        operator: None,
        quantity: required_arg(rest, 0, "quantity")?.to_string(),
        start_time: required_arg(rest, 1, "start_time")?.to_string(),
        end_time: required_arg(rest, 2, "end_time")?.to_string(),
        standard_min_per_unit: required_arg(rest, 3, "standard_min_per_unit")?.to_string(),
    })
}

/// `<工位> <人数> <工时> [SIMPLE|MEDIUM|COMPLEX]`
pub fn target_form_from_args(rest: &[String]) -> ApiResult<TargetForm> {
    Ok(TargetForm {
        station: required_arg(rest, 0, "station")?.to_string(),
        manpower: required_arg(rest, 1, "manpower")?.to_string(),
        hours: required_arg(rest, 2, "hours")?.to_string(),
        complexity: rest.get(3).cloned(),
    })
}

/// 解析 `物料=数量` 形式的库存参数
pub fn parse_inventory_args(items: &[String]) -> ApiResult<InventorySnapshot> {
    let mut inventory = InventorySnapshot::new();
    for item in items {
        let Some((name, qty)) = item.split_once('=') else {
            return Err(ApiError::invalid(
                "inventory",
                format!("格式应为 物料=数量，实际 {:?}", item),
            ));
        };
        let name = require_text("inventory", name)?;
        let qty = parse_number("inventory", qty)?;
        inventory.insert(name, qty);
    }
    Ok(inventory)
}

// ==========================================
// 执行
// ==========================================

/// 执行命令，返回待打印的文本
pub fn execute(api: &ProductionApi, cli: &CliArgs) -> ApiResult<String> {
    match &cli.command {
        Command::Efficiency(form) => {
            let result = api.compute_efficiency(form)?;
            if cli.json {
                return render_json(&result);
            }
            Ok(t_with_args(
                "efficiency.result",
                &[("pct", result.efficiency_pct.to_string().as_str())],
            ))
        }
        Command::Target(form) => {
            let estimate = api.compute_target(form)?;
            if cli.json {
                return render_json(&estimate);
            }
            Ok(t_with_args(
                "target.result",
                &[("qty", format!("{:.2}", estimate.target_qty).as_str())],
            ))
        }
        Command::Bom { spec, inventory } => {
            let sheet = api.generate_bom(spec, inventory)?;
            if cli.json {
                return render_json(&sheet);
            }

            let mut out = t_with_args(
                "bom.header",
                &[
                    ("spec_id", sheet.spec_id.as_str()),
                    ("part_name", sheet.part_name.as_str()),
                ],
            );
            for line in &sheet.lines {
                out.push_str(&format!(
                    "\n  {:<20} {:>8} {:<6} {}",
                    line.material,
                    line.required_qty,
                    line.unit,
                    availability_label(line)
                ));
            }
            Ok(out)
        }
        Command::Norms => render_json(&api.list_norms()),
    }
}

fn render_json<T: Serialize>(value: &T) -> ApiResult<String> {
    Ok(serde_json::to_string_pretty(value).context("输出序列化失败")?)
}

// ==========================================
// 错误 → 退出码 / 提示
// ==========================================

pub fn exit_code(err: &ApiError) -> i32 {
    match err.field() {
        Some(USAGE_FIELD) => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}

pub fn error_message(err: &ApiError) -> String {
    match err.field() {
        Some(USAGE_FIELD) => format!("{}: {} ({})", t("cli.usage"), USAGE, err),
        Some(_) => format!("{}: {}", t("cli.invalid_input"), err),
        None => format!("{}: {:#}", t("common.failed"), err),
    }
}
