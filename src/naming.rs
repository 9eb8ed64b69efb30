use chrono::{DateTime, TimeZone};

/// MIME type to serve rendered exports with
pub const CONTENT_TYPE: &str = "application/pdf";

/// Build a download file name of the form `<slug>-<unix millis>.pdf`.
///
/// Titles that slugify to nothing (empty, or only punctuation) fall back to
/// `export`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use pdf_blocks::export_filename;
///
/// let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
/// assert_eq!(export_filename("Spring Launch!", at), "spring-launch-1700000000123.pdf");
/// ```
pub fn export_filename<Tz: TimeZone>(title: &str, timestamp: DateTime<Tz>) -> String {
    let slug = slug::slugify(title);
    let slug = if slug.is_empty() { "export" } else { slug.as_str() };
    format!("{slug}-{}.pdf", timestamp.timestamp_millis())
}
