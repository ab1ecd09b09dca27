// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供临时配置数据库与测试配置数据
// ==========================================

#![allow(dead_code)]

use composite_erp::db::{init_config_schema, open_sqlite_connection, GLOBAL_SCOPE_ID};
use rusqlite::{params, Connection};
use std::error::Error;
use tempfile::NamedTempFile;

/// 创建临时测试数据库并初始化配置表
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("临时文件路径不是 UTF-8")?
        .to_string();

    let conn = open_sqlite_connection(&db_path)?;
    init_config_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// 打开测试连接
pub fn open_test_connection(db_path: &str) -> Result<Connection, Box<dyn Error>> {
    Ok(open_sqlite_connection(db_path)?)
}

/// 写入一条 global 配置
pub fn insert_config(conn: &Connection, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "INSERT OR REPLACE INTO config_kv (scope_id, key, value) VALUES (?1, ?2, ?3)",
        params![GLOBAL_SCOPE_ID, key, value],
    )?;
    Ok(())
}

/// 插入一组典型测试配置
pub fn insert_test_config(conn: &Connection) -> Result<(), Box<dyn Error>> {
    insert_config(conn, "efficiency_cap_pct", "500")?;
    insert_config(conn, "default_norm_minutes", "48")?;
    insert_config(
        conn,
        "station_norm_overrides",
        r#"[{"station":"curing","simple_min":150,"medium_min":180,"complex_min":210},
            {"station":"PAINT_SHOP","simple_min":20,"medium_min":30,"complex_min":40,"avg_min":32}]"#,
    )?;
    Ok(())
}
