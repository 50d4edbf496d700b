// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::{OutputFormat, SortKey, SortSpec};
use p8tokens_core::CountedToken;
use p8tokens_shared_kernel::{AggregateReport, FileCount};
use std::cmp::Ordering;

/// ツールチップの件数列の最小ダッシュ数
const MIN_DASHES: usize = 2;

pub fn print_clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

/// Render and print a workspace report.
///
/// # Errors
/// Returns an error if JSON or YAML serialization fails.
pub fn print_report(report: &AggregateReport, format: OutputFormat, sort: &SortSpec) -> Result<()> {
    println!("{}", render(report, format, sort)?);
    Ok(())
}

/// Render a workspace report in the requested format.
///
/// # Errors
/// Returns an error if JSON or YAML serialization fails.
pub fn render(report: &AggregateReport, format: OutputFormat, sort: &SortSpec) -> Result<String> {
    let mut report = report.clone();
    sort_files(&mut report.files, sort);

    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Yaml => serde_yaml::to_string(&report)?,
        OutputFormat::Jsonl => render_jsonl(&report)?,
        OutputFormat::Md => render_markdown(&report),
        OutputFormat::Csv => render_sv(&report, ","),
        OutputFormat::Tsv => render_sv(&report, "\t"),
        OutputFormat::Table => render_table(&report),
    })
}

fn sort_files(files: &mut [FileCount], sort: &SortSpec) {
    files.sort_by(|a, b| {
        for (key, desc) in &sort.0 {
            let order = match key {
                SortKey::Name => a.name.cmp(&b.name),
                SortKey::Tokens => a.tokens.cmp(&b.tokens),
            };
            if order != Ordering::Equal {
                return if *desc { order.reverse() } else { order };
            }
        }
        Ordering::Equal
    });
}

fn render_table(report: &AggregateReport) -> String {
    let mut lines = vec![
        format!("p8tokens v{} · budget={}", crate::VERSION, report.limit),
        String::new(),
        "   TOKENS     FILE".to_string(),
        "----------------------------------------------".to_string(),
    ];

    for file in &report.files {
        lines.push(format!("{:>9}     {}", file.tokens, file.name));
    }

    lines.push("---".to_string());
    lines.push(format!(
        "{:>9}     TOTAL ({} files)",
        report.total,
        report.files.len()
    ));
    lines.push(format!(
        "{:>9}     REMAINING ({}%)",
        report.remaining,
        report.remaining_percent()
    ));
    if report.is_over_budget() {
        lines.push(String::new());
        lines.push(format!(
            "[p8tokens] Over budget by {} tokens.",
            report.remaining.unsigned_abs()
        ));
    }
    lines.join("\n")
}

/// エディタのツールチップと同じ形式の Markdown
///
/// 0 トークンのファイルは出さない。件数列は最長のファイル名に合わせて
/// ダッシュで揃える。
fn render_markdown(report: &AggregateReport) -> String {
    let mut seen = std::collections::BTreeSet::new();
    let files: Vec<&FileCount> = report
        .files
        .iter()
        .filter(|f| !f.tokens.is_zero() && seen.insert(f.name.as_str()))
        .collect();

    let longest = files
        .iter()
        .map(|f| f.name.char_len())
        .fold("TOTAL".len(), usize::max);
    let count_column = longest + 5;

    let mut lines = vec!["**PICO-8 Token Usage**".to_string(), "```".to_string()];
    for file in files {
        let count = file.tokens.to_string();
        let dashes = count_column
            .saturating_sub(file.name.char_len() + count.len())
            .max(MIN_DASHES);
        lines.push(format!("{} {} {count}", file.name, "-".repeat(dashes)));
    }
    lines.push("```".to_string());
    lines.push(String::new());
    lines.push("\n---\n".to_string());
    lines.push(format!(
        "**Total:** {} / {}",
        group_thousands(i64::try_from(report.total.value()).unwrap_or(i64::MAX)),
        group_thousands(i64::try_from(report.limit).unwrap_or(i64::MAX))
    ));
    lines.push(format!(
        "**Remaining:** {} ({}%)",
        group_thousands(report.remaining),
        report.remaining_percent()
    ));
    lines.join("\n")
}

fn render_jsonl(report: &AggregateReport) -> Result<String> {
    let mut lines = Vec::with_capacity(report.files.len() + 1);
    for file in &report.files {
        let mut value = serde_json::to_value(file)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("type".to_string(), "file".into());
        }
        lines.push(serde_json::to_string(&value)?);
    }

    let total = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "files": report.files.len(),
        "tokens": report.total,
        "limit": report.limit,
        "remaining": report.remaining,
    });
    lines.push(total.to_string());
    Ok(lines.join("\n"))
}

fn render_sv(report: &AggregateReport, delimiter: &str) -> String {
    let mut lines = vec![format!("tokens{delimiter}name")];

    for file in &report.files {
        let name = file.name.as_str();
        let needs_quotes = name.contains(',') || name.contains('"') || name.contains('\n');
        let name = if delimiter == "," && needs_quotes {
            format!("\"{}\"", name.replace('"', "\"\""))
        } else {
            name.to_string()
        };
        lines.push(format!("{}{delimiter}{name}", file.tokens));
    }

    lines.push(format!("{}{delimiter}TOTAL", report.total));
    lines.push(format!("{}{delimiter}REMAINING", report.remaining));
    lines.join("\n")
}

/// 行ごとの内訳
#[must_use]
pub fn render_explain(lines: &[(usize, Vec<CountedToken>)], all: bool) -> String {
    let mut out = Vec::with_capacity(lines.len() + 2);
    let mut total = 0;

    for (line_no, tokens) in lines {
        let weight: usize = tokens.iter().map(CountedToken::weight).sum();
        total += weight;

        let shown: Vec<String> = tokens
            .iter()
            .filter(|t| all || t.kind.counts())
            .map(|t| format!("{}[{}]", t.text, t.kind.label()))
            .collect();
        if shown.is_empty() {
            continue;
        }
        out.push(format!("{line_no:>5} {weight:>4}  {}", shown.join(" ")));
    }

    out.push("---".to_string());
    out.push(format!("{total:>10}  TOTAL"));
    out.join("\n")
}

/// 3桁ごとにカンマを入れる (`-1234` → `-1,234`)
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
