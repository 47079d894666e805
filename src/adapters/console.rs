use crate::domain::model::Report;
use crate::domain::ports::ReportPresenter;
use crate::utils::error::Result;
use unicode_width::UnicodeWidthStr;

pub const HEADERS: [&str; 4] = [
    "Programming language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

const UNKNOWN_SALARY: &str = "-";

/// 以 ASCII 邊框輸出報表，標題嵌在上邊框
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiTablePresenter;

impl AsciiTablePresenter {
    pub fn render(&self, report: &Report) -> String {
        let mut rows: Vec<[String; 4]> = Vec::with_capacity(report.len() + 1);
        rows.push(HEADERS.map(str::to_string));
        for (language, stats) in report.iter() {
            rows.push([
                language.to_string(),
                stats.vacancies_found.to_string(),
                stats.vacancies_processed.to_string(),
                stats
                    .average_salary
                    .map(|salary| salary.to_string())
                    .unwrap_or_else(|| UNKNOWN_SALARY.to_string()),
            ]);
        }

        let mut widths = [0usize; 4];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let separator = border(&widths);
        let mut lines = Vec::with_capacity(rows.len() + 3);
        lines.push(title_border(&separator, &report.title));
        for (index, row) in rows.iter().enumerate() {
            lines.push(table_row(&widths, row));
            if index == 0 {
                lines.push(separator.clone());
            }
        }
        lines.push(separator);

        lines.join("\n")
    }
}

impl ReportPresenter for AsciiTablePresenter {
    fn present(&self, report: &Report) -> Result<()> {
        println!("{}", self.render(report));
        Ok(())
    }
}

fn border(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// 標題放不下時只輸出一般邊框
fn title_border(separator: &str, title: &str) -> String {
    let title_width = UnicodeWidthStr::width(title);
    if title.is_empty() || title_width + 2 > separator.len() {
        return separator.to_string();
    }

    // 邊框只含 ASCII，位元組數即欄寬
    let rest = &separator[title_width + 1..];
    format!("+{}{}", title, rest)
}

fn table_row(widths: &[usize; 4], cells: &[String; 4]) -> String {
    let mut line = String::from("|");
    for (width, cell) in widths.iter().zip(cells.iter()) {
        let padding = width - UnicodeWidthStr::width(cell.as_str());
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('|');
    }
    line
}

/// 以 JSON 輸出報表，方便其他工具接手
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPresenter;

impl JsonPresenter {
    pub fn render(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

impl ReportPresenter for JsonPresenter {
    fn present(&self, report: &Report) -> Result<()> {
        println!("{}", self.render(report)?);
        Ok(())
    }
}
