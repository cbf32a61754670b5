//! Report rendering for the conference data.
//!
//! Both reports (vehicle conference and manual index) are first flattened
//! into a [`ReportTable`], then rendered by one of the format backends:
//!
//! - **CSV**: `;`-delimited, UTF-8 BOM, header row, data rows and an optional
//!   signature footer after a blank line
//! - **PDF**: A4 pages with title, summary block and a paginated table
//! - **HTML**: printable page with inline styles
//! - **Excel**: single worksheet with a bold header row
//!
//! Empty inputs are refused with [`ExportError::NothingToExport`] before
//! anything is written.

use super::error::ExportError;
use super::formatter::{escape_html, format_clock, format_date, format_generated_at, format_minutes, weekday_name};
use super::kpi::{newest_first, ManualKpis};
use super::manual::ManualEntry;
use super::record::DayRecord;
use chrono::{DateTime, Local, NaiveDate};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use rust_xlsxwriter::{Color, Format, Workbook};
use std::fs;
use std::path::PathBuf;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 14.0;
const ROW_HEIGHT: f32 = 6.0;
const TABLE_FONT_SIZE: f32 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Semicolon-separated values
    Csv,
    /// Portable Document Format
    Pdf,
    /// Printable HTML page
    Html,
    /// Excel workbook (.xlsx)
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// A report flattened into rows of display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub title: String,
    pub subtitle: Option<String>,
    pub summary: Vec<String>,
    pub headers: Vec<&'static str>,
    /// Header row of the CSV rendering.
    pub csv_headers: Vec<&'static str>,
    /// Relative column widths, one per header.
    pub widths: Vec<f32>,
    pub rows: Vec<Vec<String>>,
    pub signature: Option<String>,
}

impl ReportTable {
    /// Vehicle conference report over `days`, oldest day and record first.
    pub fn vehicles(days: &[DayRecord], signed_by: &str) -> Result<Self, ExportError> {
        if days.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let mut sorted: Vec<&DayRecord> = days.iter().collect();
        sorted.sort_by_key(|d| d.date);

        let mut rows = Vec::new();
        let (mut vehicles, mut invoices) = (0usize, 0u64);
        for day in sorted {
            let date = format_date(day.date);
            for record in day.chronological() {
                rows.push(vec![
                    date.clone(),
                    format_clock(record.timestamp),
                    record.plate.clone(),
                    record.driver.clone(),
                    record.invoice_count.to_string(),
                ]);
            }
            vehicles += day.vehicle_count();
            invoices += day.invoice_count();
        }

        Ok(ReportTable {
            title: "Relatório Geral de Conferência".to_string(),
            subtitle: None,
            summary: vec![
                format!("Total de Veículos: {}", vehicles),
                format!("Total de Notas Fiscais: {}", invoices),
            ],
            headers: vec!["Data", "Hora", "Placa", "Motorista", "Notas"],
            csv_headers: vec!["Data", "Hora", "Placa", "Motorista", "Qtd Notas"],
            widths: vec![1.2, 0.8, 1.1, 2.6, 0.7],
            rows,
            signature: Some(format!("Conferido por: {}", signed_by)),
        })
    }

    /// Manual-index report, newest entry first.
    pub fn manual(entries: &[ManualEntry], generated_at: DateTime<Local>) -> Result<Self, ExportError> {
        if entries.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let kpis = ManualKpis::compute(entries);
        let rows = newest_first(entries)
            .into_iter()
            .map(|entry| {
                vec![
                    format_date(entry.date),
                    entry.driver.clone(),
                    entry.driver_type_label(),
                    entry.plate.clone(),
                    entry.nfs_label(),
                    entry.reason.to_string(),
                    format_minutes(u64::from(entry.rework_time_minutes())),
                ]
            })
            .collect();

        Ok(ReportTable {
            title: "Relatório de Índice de Conferência Manual".to_string(),
            subtitle: Some(format!("Gerado em: {}", format_generated_at(generated_at))),
            summary: vec![
                "RESUMO GERAL".to_string(),
                format!("Total de Ocorrências: {}", kpis.total_occurrences),
                format!("Tempo Total de Retrabalho: {}", format_minutes(kpis.total_rework_minutes)),
            ],
            headers: vec!["Data", "Motorista", "Vínculo", "Placa", "NFs (Man/Tot)", "Motivo", "Tempo"],
            csv_headers: vec!["Data", "Motorista", "Vínculo", "Placa", "NFs (Man/Tot)", "Motivo", "Tempo"],
            widths: vec![1.0, 1.9, 1.6, 1.0, 1.0, 1.3, 0.8],
            rows,
            signature: None,
        })
    }

    pub fn render(&self, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        match format {
            ExportFormat::Csv => self.to_csv(),
            ExportFormat::Pdf => self.to_pdf(),
            ExportFormat::Html => Ok(self.to_html().into_bytes()),
            ExportFormat::Excel => self.to_excel(),
        }
    }

    pub fn to_csv(&self) -> Result<Vec<u8>, ExportError> {
        let mut buf = UTF8_BOM.to_vec();

        let mut wtr = csv_writer(&mut buf);
        wtr.write_record(&self.csv_headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        drop(wtr);

        if let Some(signature) = &self.signature {
            buf.push(b'\n');
            let mut wtr = csv_writer(&mut buf);
            wtr.write_record(["", "", "", signature.as_str()])?;
            wtr.flush()?;
        }

        Ok(buf)
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str(&html_open(&self.title));
        html.push_str(&format!("<h1 style=\"font-size: 24px; margin-bottom: 5px;\">{}</h1>\n", escape_html(&self.title)));
        if let Some(subtitle) = &self.subtitle {
            html.push_str(&format!(
                "<p style=\"font-size: 12px; color: #666; margin-bottom: 20px;\">{}</p>\n",
                escape_html(subtitle)
            ));
        }

        html.push_str("<div style=\"margin-bottom: 30px; border: 1px solid #ddd; background-color: #f9f9f9; padding: 15px;\">\n");
        for line in &self.summary {
            html.push_str(&format!("<div>{}</div>\n", escape_html(line)));
        }
        html.push_str("</div>\n");

        html.push_str("<table style=\"width: 100%; border-collapse: collapse; font-size: 12px;\">\n<thead><tr style=\"background: #e5e7eb;\">");
        for header in &self.headers {
            html.push_str(&format!("<th style=\"border: 1px solid #ccc; padding: 8px; text-align: left;\">{}</th>", escape_html(header)));
        }
        html.push_str("</tr></thead>\n<tbody>\n");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td style=\"border: 1px solid #ccc; padding: 8px;\">{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n");

        if let Some(signature) = &self.signature {
            html.push_str(&signature_html(signature));
        }
        html.push_str(HTML_CLOSE);
        html
    }

    pub fn to_pdf(&self) -> Result<Vec<u8>, ExportError> {
        let (doc, page, layer) = PdfDocument::new(&self.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?;

        let mut pdf = PdfCursor {
            layer: doc.get_page(page).get_layer(layer),
            doc: &doc,
            y: PAGE_HEIGHT - 20.0,
        };

        pdf.text(&self.title, 16.0, MARGIN, &bold);
        pdf.y -= 8.0;
        if let Some(subtitle) = &self.subtitle {
            pdf.text(subtitle, 10.0, MARGIN, &regular);
            pdf.y -= 8.0;
        }
        for line in &self.summary {
            pdf.text(line, 11.0, MARGIN + 4.0, &bold);
            pdf.y -= 6.0;
        }
        pdf.y -= 6.0;

        let columns = column_layout(&self.widths);
        pdf.table_row(&self.headers, &columns, &bold);
        for row in &self.rows {
            if pdf.y < 20.0 {
                pdf.new_page();
                pdf.table_row(&self.headers, &columns, &bold);
            }
            pdf.table_row(row, &columns, &regular);
        }

        if let Some(signature) = &self.signature {
            pdf.y -= ROW_HEIGHT;
            if pdf.y < 20.0 {
                pdf.new_page();
            }
            pdf.text(signature, 10.0, MARGIN, &regular);
        }

        drop(pdf);
        doc.save_to_bytes().map_err(pdf_error)
    }

    pub fn to_excel(&self) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let title_format = Format::new().set_bold().set_font_size(14.0);
        let header_format = Format::new().set_bold().set_background_color(Color::Gray);

        worksheet.write_string_with_format(0, 0, &self.title, &title_format)?;
        let mut row: u32 = 1;
        if let Some(subtitle) = &self.subtitle {
            worksheet.write_string(row, 0, subtitle)?;
            row += 1;
        }
        for line in &self.summary {
            worksheet.write_string(row, 0, line)?;
            row += 1;
        }

        row += 1;
        for (col, header) in self.headers.iter().enumerate() {
            worksheet.write_string_with_format(row, col as u16, *header, &header_format)?;
        }

        for cells in &self.rows {
            row += 1;
            for (col, cell) in cells.iter().enumerate() {
                match cell.parse::<u64>() {
                    Ok(n) => worksheet.write_number(row, col as u16, n as f64)?,
                    Err(_) => worksheet.write_string(row, col as u16, cell)?,
                };
            }
        }

        if let Some(signature) = &self.signature {
            worksheet.write_string(row + 2, 3, signature)?;
        }

        worksheet.autofit();
        Ok(workbook.save_to_buffer()?)
    }
}

/// Printable page for a single day, records oldest first.
pub fn day_html(day: &DayRecord, signed_by: &str) -> String {
    let title = "Relatório de Conferência";
    let mut html = html_open(title);
    html.push_str(&format!("<h1 style=\"font-size: 24px; margin-bottom: 5px;\">{}</h1>\n", title));
    html.push_str(&format!(
        "<h2 style=\"font-size: 18px; color: #555; margin-bottom: 20px;\">{} - {}</h2>\n",
        weekday_name(day.date),
        format_date(day.date)
    ));
    html.push_str(&format!(
        "<div style=\"margin-bottom: 20px; border: 1px solid #000; padding: 15px;\">\n\
         <strong>Resumo do Dia:</strong><br/>\nVeículos: {}<br/>\nNotas Fiscais: {}\n</div>\n",
        day.vehicle_count(),
        day.invoice_count()
    ));

    html.push_str("<table style=\"width: 100%; border-collapse: collapse; margin-bottom: 40px; font-size: 12px;\">\n");
    html.push_str("<thead><tr style=\"background: #f3f4f6;\">");
    for header in ["Hora", "Placa", "Motorista", "Qtd. Notas"] {
        html.push_str(&format!("<th style=\"border: 1px solid #000; padding: 8px; text-align: left;\">{}</th>", header));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for record in day.chronological() {
        html.push_str(&format!(
            "<tr><td style=\"border: 1px solid #000; padding: 8px;\">{}</td>\
             <td style=\"border: 1px solid #000; padding: 8px;\">{}</td>\
             <td style=\"border: 1px solid #000; padding: 8px;\">{}</td>\
             <td style=\"border: 1px solid #000; padding: 8px; text-align: center;\">{}</td></tr>\n",
            format_clock(record.timestamp),
            escape_html(&record.plate),
            escape_html(&record.driver),
            record.invoice_count
        ));
    }
    html.push_str("</tbody>\n</table>\n");
    html.push_str(&format!(
        "<div style=\"padding-top: 20px; border-top: 1px solid #000; text-align: right; font-size: 12px;\">\
         Conferido por: <strong>{}</strong></div>\n",
        escape_html(signed_by)
    ));
    html.push_str(HTML_CLOSE);
    html
}

/// Writes rendered reports to disk.
pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    /// Default file name of the vehicle report.
    pub fn vehicles_file_name(format: ExportFormat) -> String {
        match format {
            ExportFormat::Pdf => "relatorio.pdf".to_string(),
            other => format!("relatorio_geral.{}", other.extension()),
        }
    }

    /// Default file name of the manual-index report.
    pub fn manual_file_name(format: ExportFormat, today: NaiveDate) -> String {
        format!("relatorio_manual_index_{}.{}", today.format("%Y-%m-%d"), format.extension())
    }

    pub fn export_vehicles(&self, days: &[DayRecord], signed_by: &str) -> Result<PathBuf, ExportError> {
        let table = ReportTable::vehicles(days, signed_by)?;
        let path = self
            .output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::vehicles_file_name(self.format)));
        self.write(&table, path)
    }

    pub fn export_manual(&self, entries: &[ManualEntry]) -> Result<PathBuf, ExportError> {
        let now = Local::now();
        let table = ReportTable::manual(entries, now)?;
        let path = self
            .output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::manual_file_name(self.format, now.date_naive())));
        self.write(&table, path)
    }

    fn write(&self, table: &ReportTable, path: PathBuf) -> Result<PathBuf, ExportError> {
        let bytes = table.render(self.format)?;
        fs::write(&path, bytes)?;
        tracing::debug!(path = %path.display(), format = ?self.format, rows = table.rows.len(), "report written");
        Ok(path)
    }
}

fn csv_writer(buf: &mut Vec<u8>) -> csv::Writer<&mut Vec<u8>> {
    csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(buf)
}

fn html_open(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n\
         <body>\n<div style=\"padding: 20px; font-family: sans-serif;\">\n",
        escape_html(title)
    )
}

const HTML_CLOSE: &str = "</div>\n</body>\n</html>\n";

fn signature_html(signature: &str) -> String {
    format!(
        "<div style=\"margin-top: 40px; padding-top: 20px; border-top: 1px solid #000; text-align: right; font-size: 12px;\">{}</div>\n",
        escape_html(signature)
    )
}

fn pdf_error(err: printpdf::Error) -> ExportError {
    ExportError::Pdf(err.to_string())
}

/// Column start offsets and character capacities for the printable width.
fn column_layout(widths: &[f32]) -> Vec<(f32, usize)> {
    let total: f32 = widths.iter().sum();
    let usable = PAGE_WIDTH - 2.0 * MARGIN;
    let mut x = MARGIN;
    widths
        .iter()
        .map(|w| {
            let width = usable * w / total;
            let column = (x, ((width - 2.0) / 1.7).max(1.0) as usize);
            x += width;
            column
        })
        .collect()
}

fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

struct PdfCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl PdfCursor<'_> {
    fn text(&self, text: &str, size: f32, x: f32, font: &IndirectFontRef) {
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn table_row<S: AsRef<str>>(&mut self, cells: &[S], columns: &[(f32, usize)], font: &IndirectFontRef) {
        for (cell, (x, max_chars)) in cells.iter().zip(columns) {
            self.layer.use_text(clip(cell.as_ref(), *max_chars), TABLE_FONT_SIZE, Mm(*x), Mm(self.y), font);
        }
        self.y -= ROW_HEIGHT;
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - 20.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_keeps_short_text() {
        assert_eq!(clip("John", 10), "John");
        assert_eq!(clip("Maximiliano", 5), "Maxi…");
    }

    #[test]
    fn columns_span_printable_width() {
        let columns = column_layout(&[1.0, 1.0]);
        assert_eq!(columns[0].0, MARGIN);
        assert!((columns[1].0 - (MARGIN + (PAGE_WIDTH - 2.0 * MARGIN) / 2.0)).abs() < 0.01);
    }

    #[test]
    fn file_names() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(Exporter::vehicles_file_name(ExportFormat::Csv), "relatorio_geral.csv");
        assert_eq!(Exporter::vehicles_file_name(ExportFormat::Pdf), "relatorio.pdf");
        assert_eq!(
            Exporter::manual_file_name(ExportFormat::Pdf, today),
            "relatorio_manual_index_2025-01-10.pdf"
        );
    }
}
