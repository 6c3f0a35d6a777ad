//! HTML rendering for the calculator form

use crate::calculator::{
    BandwidthUnit, CalculationRequest, CalculationResult, ImageSizeUnit, ThroughputScope,
    ThroughputTimeUnit,
};
use std::fmt::Display;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Bandwidth Analyzer</title>
<style>
body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
label { display: block; margin-top: 0.75rem; font-weight: bold; }
.results p, .error { font-size: 1rem; }
.error { color: #b00020; }
</style>
</head>
<body>
<h1>Bandwidth Analyzer</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// What to show beneath the form
pub enum Outcome<'a> {
    Empty,
    Computed(&'a CalculationResult),
    Invalid(&'a str),
}

/// Escapes text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn number_field(name: &str, label: &str, value: impl Display, min: &str, step: &str) -> String {
    format!(
        "<label for=\"{name}\">{label}</label>\n<input type=\"number\" id=\"{name}\" name=\"{name}\" value=\"{value}\" min=\"{min}\" step=\"{step}\">\n"
    )
}

fn select_field<T: Copy + PartialEq + Display>(
    name: &str,
    label: &str,
    options: &[T],
    selected: T,
) -> String {
    let mut html = format!("<label for=\"{name}\">{label}</label>\n<select id=\"{name}\" name=\"{name}\">\n");
    for &option in options {
        let marker = if option == selected { " selected" } else { "" };
        html.push_str(&format!("<option value=\"{option}\"{marker}>{option}</option>\n"));
    }
    html.push_str("</select>\n");
    html
}

fn render_form(request: &CalculationRequest) -> String {
    let mut html = String::from("<form action=\"/calculate\" method=\"get\">\n");
    html.push_str(&number_field(
        "image_size",
        "Image Size",
        request.image_size,
        "0",
        "any",
    ));
    html.push_str(&select_field(
        "image_size_unit",
        "Image Size Unit",
        &ImageSizeUnit::ALL,
        request.image_size_unit,
    ));
    html.push_str(&number_field(
        "throughput",
        "Throughput",
        request.throughput,
        "0",
        "any",
    ));
    html.push_str(&select_field(
        "throughput_time_unit",
        "Throughput Time Unit",
        &ThroughputTimeUnit::ALL,
        request.throughput_time_unit,
    ));
    html.push_str(&select_field(
        "throughput_type",
        "Is Throughput Per Machine or All Machines?",
        &ThroughputScope::ALL,
        request.throughput_type,
    ));
    html.push_str(&number_field(
        "num_machines",
        "Number of X-ray Machines",
        request.num_machines,
        "1",
        "1",
    ));
    html.push_str(&number_field(
        "rejection_rate",
        "Rejection Rate (%)",
        request.rejection_rate,
        "0",
        "any",
    ));
    html.push_str(&select_field(
        "output_unit",
        "Output Unit",
        &BandwidthUnit::ALL,
        request.output_unit,
    ));
    html.push_str("<p><button type=\"submit\">Calculate</button></p>\n</form>\n");
    html
}

fn render_results(result: &CalculationResult) -> String {
    let mut html = String::from("<section class=\"results\">\n<h3>Results</h3>\n");
    for line in result.summary() {
        html.push_str(&format!(
            "<p><strong>{}:</strong> {}</p>\n",
            escape_html(line.label),
            escape_html(&line.formatted_value())
        ));
    }
    html.push_str("</section>\n");
    html
}

/// Renders the full calculator page
pub fn render_page(request: &CalculationRequest, outcome: Outcome<'_>) -> String {
    let mut html = String::from(PAGE_HEAD);
    html.push_str(&render_form(request));
    match outcome {
        Outcome::Empty => {}
        Outcome::Computed(result) => html.push_str(&render_results(result)),
        Outcome::Invalid(message) => html.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            escape_html(message)
        )),
    }
    html.push_str(PAGE_TAIL);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_empty_page_has_form_defaults() {
        let html = render_page(&CalculationRequest::default(), Outcome::Empty);

        assert!(html.contains("<h1>Bandwidth Analyzer</h1>"));
        assert!(html.contains("<option value=\"KB\" selected>KB</option>"));
        assert!(html.contains("<option value=\"per month\" selected>per month</option>"));
        assert!(html.contains("<option value=\"All Machines\" selected>All Machines</option>"));
        assert!(html.contains("<option value=\"Mbps\" selected>Mbps</option>"));
        assert!(html.contains("name=\"num_machines\" value=\"1\" min=\"1\" step=\"1\""));
        for field in ["image_size", "throughput", "rejection_rate"] {
            assert!(html.contains(&format!(
                "name=\"{field}\" value=\"0\" min=\"0\" step=\"any\""
            )));
        }
        assert!(!html.contains("Results"));
    }

    #[test]
    fn test_page_with_results() {
        let result = CalculationResult {
            total_bandwidth: 1.5,
            bandwidth_per_machine: 0.75,
            rejected_bags: 10.0,
            total_bags_from_site: 90.0,
            output_unit: BandwidthUnit::Gbps,
        };
        let html = render_page(&CalculationRequest::default(), Outcome::Computed(&result));

        assert!(html.contains("<strong>Total bandwidth required:</strong> 1.5000 Gbps"));
        assert!(html.contains(
            "<strong>Bandwidth required per X-ray Machine (Lane):</strong> 0.7500 Gbps"
        ));
        assert!(html.contains("<strong>Total rejected bags:</strong> 10.0000 bags"));
        assert!(html.contains("<strong>Total bags from site:</strong> 90.0000 bags"));
    }

    #[test]
    fn test_page_with_error_is_escaped() {
        let html = render_page(
            &CalculationRequest::default(),
            Outcome::Invalid("bad <unit>"),
        );
        assert!(html.contains("<p class=\"error\">bad &lt;unit&gt;</p>"));
    }
}
