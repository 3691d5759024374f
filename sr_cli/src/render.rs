use std::fmt;

use sr_core::analyzer::result::AnalysisResult;
use sr_core::chart::chart_data::ChartData;

fn fmt_level(v: Option<f64>) -> String {
    match v {
        Some(v) if v.is_nan() => "n/a".to_string(),
        Some(v) => format!("{:.4}", v),
        None => "-".to_string(),
    }
}

/// Plain text report of one analysis
pub struct Report<'a>(pub &'a AnalysisResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        // Error-class warnings replace the whole report
        if let Some(w) = result.warnings.iter().find(|w| w.kind.is_error()) {
            return writeln!(f, "{}", w.message);
        }

        writeln!(f, "== Current analysis ==")?;
        writeln!(f, "Current value:  {}", fmt_level(result.latest_value))?;
        writeln!(f, "Support:        {}", fmt_level(result.latest_support))?;
        writeln!(f, "Resistance:     {}", fmt_level(result.latest_resistance))?;
        writeln!(f, "Target:         {:.4}", result.target)?;
        writeln!(f, "Threshold:      {:.4}", result.threshold)?;
        if let Some(w) = result.effective_window {
            writeln!(f, "Window:         {}", w)?;
        }

        let alerts: Vec<_> = result.alerts().collect();
        if !alerts.is_empty() {
            writeln!(f, "\n== Alerts ==")?;
            for alert in alerts {
                writeln!(f, "[{}] {}", alert.severity, alert.message)?;
            }
        }

        writeln!(f, "\n== Prediction ==")?;
        writeln!(f, "{}", result.prediction.message)?;

        if let Some(trend) = &result.trend {
            writeln!(f, "\n== Trend ==")?;
            writeln!(f, "{}: {}", trend.label, trend.message)?;
        }

        if !result.warnings.is_empty() {
            writeln!(f, "\n== Warnings ==")?;
            for w in &result.warnings {
                writeln!(f, "[{}] {}", w.kind, w.message)?;
            }
        }
        Ok(())
    }
}

/// One-line summary of what the chart export contains
pub fn render_chart_summary(chart: &ChartData) -> String {
    let lines: Vec<String> = chart
        .reference_lines
        .iter()
        .map(|l| format!("{} ({:.2})", l.label, l.value))
        .collect();
    format!(
        "{} points, short SMA {}, long SMA {}, reference lines: {}",
        chart.prices.len(),
        if chart.short_sma.is_some() { "yes" } else { "no" },
        if chart.long_sma.is_some() { "yes" } else { "no" },
        lines.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_core::{analyze, SrConfig};

    #[test]
    fn test_report_sections() {
        let series = [1.45, 1.48, 1.52, 5.20, 9.80, 10.10];
        let report = Report(&analyze(&series, &SrConfig::default())).to_string();
        assert!(report.contains("== Current analysis =="));
        assert!(report.contains("Current value:  10.1000"));
        assert!(report.contains("[ALERT] MAXIMUM ALERT!"));
        assert!(report.contains("== Prediction =="));
        assert!(report.contains("INSUFFICIENT_DATA"));
        assert!(report.contains("[WINDOW_ADJUSTED]"));
    }

    #[test]
    fn test_no_data_report() {
        let report = Report(&analyze(&[], &SrConfig::default())).to_string();
        assert_eq!(report.trim(), "Error: no data to analyze.");
    }

    #[test]
    fn test_nan_levels_render() {
        let report = Report(&analyze(&[1.0, f64::NAN], &SrConfig::default())).to_string();
        assert!(report.contains("Support:        n/a"));
        assert!(report.contains("Insufficient data or S/R not computable"));
    }

    #[test]
    fn test_chart_summary() {
        let chart = ChartData::build(&[1.0, 2.0], &SrConfig::default());
        let summary = render_chart_summary(&chart);
        assert!(summary.starts_with("2 points"));
        assert!(summary.contains("Alert 10.00 (10.00)"));
    }
}
