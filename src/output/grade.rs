//! Grade display

use crate::audit::{Grade, OverallStatus};
use console::style;

/// Print a prominent grade box
pub fn print_grade(grade: Grade, status: OverallStatus) {
    let label = format!("Grade: {}  Status: {}", grade.as_str(), status.as_str());
    let width = label.len() + 6;

    let top = format!("  ╔{}╗", "═".repeat(width));
    let mid = format!("  ║   {}   ║", label);
    let bot = format!("  ╚{}╝", "═".repeat(width));

    println!();
    match grade {
        Grade::A => {
            println!("{}", style(&top).green());
            println!("{}", style(&mid).green().bold());
            println!("{}", style(&bot).green());
        }
        Grade::B => {
            println!("{}", style(&top).cyan());
            println!("{}", style(&mid).cyan().bold());
            println!("{}", style(&bot).cyan());
        }
        Grade::C | Grade::D => {
            println!("{}", style(&top).yellow());
            println!("{}", style(&mid).yellow().bold());
            println!("{}", style(&bot).yellow());
        }
        Grade::E => {
            println!("{}", style(&top).red());
            println!("{}", style(&mid).red().bold());
            println!("{}", style(&bot).red());
        }
    }
    println!();
}

/// Print a compact grade line
pub fn print_grade_compact(grade: Grade, status: OverallStatus) {
    let styled = match grade {
        Grade::A => style(grade.as_str()).green().bold(),
        Grade::B => style(grade.as_str()).cyan().bold(),
        Grade::C | Grade::D => style(grade.as_str()).yellow().bold(),
        Grade::E => style(grade.as_str()).red().bold(),
    };

    println!();
    println!("  Grade: {} ({})", styled, status.as_str());
}
