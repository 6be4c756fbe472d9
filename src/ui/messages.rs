//! User-facing status lines. Errors go to stderr, everything else to stdout.

use crate::utils::colors::{BLUE, CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}ℹ️{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}✅{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}⚠️{RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}❌{RESET} {msg}");
}

/// `• label: value`
pub fn detail<L: fmt::Display, V: fmt::Display>(label: L, value: V) {
    println!("{CYAN}• {label}:{RESET} {value}");
}

/// Section header above a table.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{BLUE}{BOLD}=== {msg} ==={RESET}\n");
}
