use strum::EnumString;

use super::{counts::Counts, template::ReportTemplate};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Renders one `label : count` line per category, in report order.
pub fn format_report(counts: &Counts, template: &ReportTemplate) -> String {
    let mut result = String::new();

    for (category, count) in counts.iter() {
        result.push_str(template.label(category));
        result.push_str(" : ");
        result.push_str(&count.to_string());
        result.push('\n');
    }

    result
}

pub fn format_json(counts: &Counts) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(counts)
}

pub fn render(
    counts: &Counts,
    template: &ReportTemplate,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(format_report(counts, template)),
        ReportFormat::Json => format_json(counts),
    }
}
