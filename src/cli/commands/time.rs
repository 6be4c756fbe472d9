use crate::cli::parser::TimeAction;
use crate::config::Config;
use crate::core::clock::{DisplayFormat, local_wall_clock_to_utc, parse_utc, to_zoned_display};
use crate::errors::{AppError, AppResult};
use chrono::SecondsFormat;

pub fn handle(action: &TimeAction, cfg: &Config) -> AppResult<()> {
    match action {
        TimeAction::ToUtc { local } => {
            let utc = local_wall_clock_to_utc(local)
                .ok_or_else(|| AppError::InvalidDateTime(local.clone()))?;
            println!("{}", utc.to_rfc3339_opts(SecondsFormat::Secs, true));
        }

        TimeAction::Show {
            utc,
            locale,
            format,
            pattern,
        } => {
            let instant = parse_utc(utc).ok_or_else(|| AppError::InvalidDateTime(utc.clone()))?;

            let format = match pattern {
                Some(p) => {
                    let format = DisplayFormat::Pattern(p.clone());
                    if !format.is_valid() {
                        return Err(AppError::Other(format!("Invalid display pattern: {}", p)));
                    }
                    format
                }
                None => DisplayFormat::from_name(format)
                    .ok_or_else(|| AppError::Other(format!("Unknown display format: {}", format)))?,
            };
            let locale = locale.as_deref().unwrap_or(&cfg.locale);

            println!("{}", to_zoned_display(instant, locale, &format));
        }
    }

    Ok(())
}
