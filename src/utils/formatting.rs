//! Formatting utilities used for CLI and export outputs.

/// `+3`, `0`, `-2`
pub fn signed(n: i64) -> String {
    if n > 0 { format!("+{}", n) } else { n.to_string() }
}

/// Marks the home club in tables.
pub fn home_club_marker(name: &str, is_home_club: bool) -> String {
    if is_home_club {
        format!("{} ★", name)
    } else {
        name.to_string()
    }
}
