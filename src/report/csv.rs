use crate::models::AttendanceRecord;

pub const FILENAME: &str = "attendance_report.csv";
pub const HEADER: [&str; 3] = ["Event Name", "Date", "Attendees"];

/// Quote a field that contains a comma, quote or newline (RFC 4180).
pub fn escape_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Header plus one row per record, `\n` terminated.
pub fn to_csv(records: &[AttendanceRecord]) -> String {
    let mut out = HEADER.join(",");
    out.push('\n');
    for r in records {
        let row = [
            escape_field(&r.event_name),
            escape_field(&r.date_iso()),
            escape_field(&r.attendees.join(", ")),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}
