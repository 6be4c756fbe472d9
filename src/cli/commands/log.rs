use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 48;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Colour of an operation in the log listing
fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        "match_result" => Colour::Yellow,
        other if other.ends_with("_add") => Colour::Green,
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(date);

            let mut op_target = color_for_operation(&operation).paint(operation.as_str()).to_string();
            if !target.is_empty() {
                op_target.push_str(&format!(" ({target})"));
            }

            // pad on the visible width, not on the escape codes
            let visible = strip_ansi(&op_target).chars().count();
            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(visible));

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w
            );
        }
    }

    Ok(())
}
