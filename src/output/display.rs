//! Display functions for command results

use super::formatters::{create_progress_bar, spaced_upper};
use crate::commands::fairness::Z_LIMIT;
use crate::commands::{DrawResult, FairnessReport};
use colored::Colorize;

/// Print the words from a plain draw
pub fn print_draw_result(result: &DrawResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " {} {} ",
        "DRAWN FROM".bright_cyan().bold(),
        format!("{} words", result.catalog_size).bright_black()
    );
    println!("{}", "─".repeat(40).cyan());

    for (i, word) in result.words.iter().enumerate() {
        println!(
            "  {:>3}. {}",
            i + 1,
            spaced_upper(word).bright_green().bold()
        );
    }

    if result.generations > 1 {
        println!(
            "\n{}",
            format!(
                "Pool reshuffled {} times; later words may repeat earlier ones.",
                result.generations - 1
            )
            .yellow()
        );
    }
}

/// Print the outcome of a fairness audit
pub fn print_fairness_report(report: &FairnessReport) {
    let tally = &report.tally;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SHUFFLE FAIRNESS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sample:".bright_cyan().bold());
    println!("   Indices:          {}", tally.size());
    println!("   Shuffles:         {}", tally.trials());
    println!("   Seed:             {}", report.config.seed);
    println!("   Expected/cell:    {:.1}", tally.expected());
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n📈 {}", "Chi-square:".bright_cyan().bold());
    println!(
        "   Statistic:        {:.2} (df = {})",
        tally.chi_square(),
        tally.degrees_of_freedom()
    );
    let z = tally.z_score();
    let bar = create_progress_bar(z.abs(), Z_LIMIT, 30);
    println!(
        "   z-score:          [{}] {}",
        if report.passed() {
            bar.green()
        } else {
            bar.red()
        },
        format!("{z:.2}").bright_yellow()
    );
    println!(
        "   Worst cell:       {:.2}% from expected",
        tally.max_relative_deviation() * 100.0
    );

    println!();
    if report.passed() {
        println!("{}", "✅ No positional bias detected".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ Positional bias detected (z ≥ {Z_LIMIT})")
                .red()
                .bold()
        );
    }
}
