use chrono::NaiveDateTime;
use rust_xlsxwriter::Workbook;

use crate::domain::report::AttendanceReport;
use crate::errors::{ResultResp, ServerError};
use crate::responses::xlsx_response;

/// Write the classified batch out as a workbook, one row per participant,
/// in the same order as the upload.
pub fn export_report_xlsx(report: &AttendanceReport) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = [
        "Name",
        "Email",
        "Join time",
        "Leave time",
        "Duration (min)",
        "Responded",
        "Feedback",
        "Category",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).map_err(|e| {
            ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
        })?;
    }

    // Rows
    for (i, rec) in report.records.iter().enumerate() {
        let r = (i + 1) as u32;
        let record = &rec.record;

        worksheet
            .write_string(r, 0, &record.name)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write name: {}", e)))?;

        worksheet
            .write_string(r, 1, record.email.as_deref().unwrap_or(""))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write email: {}", e)))?;

        worksheet
            .write_string(r, 2, &format_timestamp(record.join_time))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write join time: {}", e)))?;

        worksheet
            .write_string(r, 3, &format_timestamp(record.leave_time))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write leave time: {}", e)))?;

        // Unparseable timestamps leave the duration cell blank.
        if let Some(minutes) = record.duration_minutes {
            worksheet
                .write_number(r, 4, minutes)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write duration: {}", e)))?;
        }

        worksheet
            .write_string(r, 5, record.responded.as_deref().unwrap_or(""))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write responded: {}", e)))?;

        worksheet
            .write_string(r, 6, record.feedback.as_deref().unwrap_or(""))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write feedback: {}", e)))?;

        worksheet
            .write_string(r, 7, &rec.category)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write category: {}", e)))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))?;

    xlsx_response(buffer, "attendance_report.xlsx")
}

fn format_timestamp(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
