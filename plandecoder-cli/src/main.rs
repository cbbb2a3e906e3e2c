use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use plandecoder_core::AnalysisResult;
use plandecoder_extract::analyze;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "plandecoder",
    version,
    about = "Decode fees, allocation, and holdings from retirement-plan statement text"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze extracted statement text and print a fee/allocation report
    Analyze {
        /// Statement text file; omit or pass "-" to read stdin
        file: Option<PathBuf>,

        /// Emit the raw result model as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { file, json } => {
            let text = read_statement_text(file.as_deref())?;
            let result = analyze(&text)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&result);
            }
        }
    }

    Ok(())
}

/// Read statement text from a file or stdin. Only already-extracted text is
/// accepted here; PDF/image conversion happens upstream.
fn read_statement_text(path: Option<&Path>) -> Result<String> {
    match path {
        None => read_stdin(),
        Some(p) if p.as_os_str() == "-" => read_stdin(),
        Some(p) => {
            let ext = p
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_ascii_lowercase();
            if !matches!(ext.as_str(), "" | "txt" | "text" | "md") {
                bail!(
                    "unsupported file type .{ext}: convert the statement to text first \
                     and pass the .txt file"
                );
            }
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

fn print_report(result: &AnalysisResult) {
    println!(
        "{:<22} {}",
        "Account Value",
        fmt_currency(result.meta.account_value)
    );
    println!(
        "{:<22} {} ({} of assets)",
        "Estimated Annual Cost",
        fmt_currency(result.fees.annual_cost_dollar),
        fmt_pct(result.fees.total_cost_pct)
    );
    println!(
        "{:<22} {}",
        "Blended Expense Ratio",
        fmt_pct(result.fees.blended_er)
    );
    println!(
        "{:<22} {} ({})",
        "Admin Fee",
        fmt_pct(result.fees.admin_fee_pct),
        fmt_currency(result.fees.admin_fee_dollar)
    );

    println!("\nFlags");
    if result.flags.is_empty() {
        println!("  No major issues detected.");
    } else {
        for flag in &result.flags {
            println!("  - {flag}");
        }
    }

    if result.holdings.is_empty() {
        return;
    }

    println!(
        "\n{:<34} {:>9} {:>7} {:>10}  {}",
        "Holding", "Weight %", "ER %", "$ Cost", "Class"
    );
    for h in &result.holdings {
        println!(
            "{:<34} {:>9.2} {:>7.2} {:>10}  {}",
            h.name,
            h.weight,
            h.expense_ratio,
            fmt_currency(h.cost_dollar),
            h.category.label()
        );
    }
}

/// Whole-dollar currency with thousands separators.
fn fmt_currency(v: f64) -> String {
    let dollars = v.round() as i64;
    let digits = dollars.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if dollars < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn fmt_pct(v: f64) -> String {
    format!("{v:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_currency_groups_thousands() {
        assert_eq!(fmt_currency(50_000.0), "$50,000");
        assert_eq!(fmt_currency(1_234_567.49), "$1,234,567");
        assert_eq!(fmt_currency(999.0), "$999");
        assert_eq!(fmt_currency(0.4), "$0");
    }

    #[test]
    fn test_fmt_pct_two_decimals() {
        assert_eq!(fmt_pct(0.125), "0.12%");
        assert_eq!(fmt_pct(1.5), "1.50%");
    }
}
