use crate::ports::outbound::ResultsFormatter;
use crate::shared::Result;
use crate::tco::domain::{
    BaselineSource, PaybackPeriod, RoiPercentage, TcoResults, VendorResult, NPV_DISCOUNT_RATE,
};

const SUMMARY_HEADER: &str =
    "| # | Vendor | Total Cost | Per Device / Month | Annual Savings | ROI | Payback | Security | Compliance |\n";
const SUMMARY_SEPARATOR: &str =
    "|---|--------|------------|--------------------|----------------|-----|---------|----------|------------|\n";

const BREAKDOWN_HEADER: &str = "| Vendor | Software | Hardware | Services | Operations |\n";
const BREAKDOWN_SEPARATOR: &str = "|--------|----------|----------|----------|------------|\n";

const YEARLY_HEADER: &str = "| Vendor | Year | Months | Software | Hardware | Services | Operations | Total |\n";
const YEARLY_SEPARATOR: &str = "|--------|------|--------|----------|----------|----------|------------|-------|\n";

const OPERATIONS_HEADER: &str =
    "| Vendor | Automation | FTE Saved | Maintenance Windows | MTTR (h) | Breach Reduction | Missing Frameworks |\n";
const OPERATIONS_SEPARATOR: &str =
    "|--------|------------|-----------|---------------------|----------|------------------|--------------------|\n";

const OUTLOOK_HEADER: &str =
    "| Vendor | Innovation | Future Readiness | Time to Value (days) | Implementation (weeks) |\n";
const OUTLOOK_SEPARATOR: &str =
    "|--------|------------|------------------|----------------------|------------------------|\n";

const FAILURE_HEADER: &str = "| Vendor | Kind | Reason |\n";
const FAILURE_SEPARATOR: &str = "|--------|------|--------|\n";

/// MarkdownFormatter adapter rendering the comparison as human-readable tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// `$1,234,567.89`
    fn format_currency(amount: f64) -> String {
        let cents = (amount.abs() * 100.0).round() as u128;
        let whole = (cents / 100).to_string();
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        format!("{}${}.{:02}", sign, grouped, cents % 100)
    }

    fn format_share(part: f64, total: f64) -> String {
        if total > 0.0 {
            format!("{} ({:.1}%)", Self::format_currency(part), part / total * 100.0)
        } else {
            Self::format_currency(part)
        }
    }

    fn format_payback(payback: PaybackPeriod) -> String {
        match payback {
            PaybackPeriod::Months(months) => format!("{:.1} mo", months),
            PaybackPeriod::NotApplicable => "n/a".to_string(),
        }
    }

    fn format_roi(roi: RoiPercentage) -> String {
        match roi {
            RoiPercentage::Percent(percent) => format!("{:.1}%", percent),
            RoiPercentage::NotApplicable => "n/a".to_string(),
        }
    }

    fn vendor_cell(result: &VendorResult) -> String {
        Self::escape_markdown_table_cell(result.vendor_name())
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, results: &TcoResults) {
        let config = results.config();
        output.push_str("# Vendor TCO Comparison\n\n");
        output.push_str(&format!("- **Run:** `{}`\n", results.run_id()));
        output.push_str(&format!("- **Generated:** {}\n", results.timestamp()));
        output.push_str(&format!(
            "- **Deployment:** {}, {} users, {} devices over {} months\n",
            config.industry(),
            config.users(),
            config.devices(),
            config.timeframe()
        ));
        if let Some(current) = config.current_vendor().id() {
            output.push_str(&format!(
                "- **Current vendor:** {}\n",
                Self::escape_markdown_table_cell(current)
            ));
        }
        let requested: Vec<&str> = config
            .requirements()
            .known()
            .into_iter()
            .map(|requirement| requirement.as_str())
            .collect();
        if !requested.is_empty() {
            output.push_str(&format!("- **Requirements:** {}\n", requested.join(", ")));
        }

        let baseline = results.baseline();
        let source = match baseline.source() {
            BaselineSource::CurrentVendor => {
                format!("current vendor `{}`", baseline.vendor_id().unwrap_or_default())
            }
            BaselineSource::IndustryAverage => "industry average".to_string(),
        };
        output.push_str(&format!(
            "- **Baseline:** {} per year ({})\n",
            Self::format_currency(baseline.annual_cost()),
            source
        ));
        output.push_str(&format!("- **Ranking:** {}\n\n", results.ordering()));
    }

    fn render_summary(&self, output: &mut String, results: &[VendorResult]) {
        output.push_str("## Summary\n\n");
        output.push_str(SUMMARY_HEADER);
        output.push_str(SUMMARY_SEPARATOR);
        for (position, result) in results.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {:.0} | {:.0} |\n",
                position + 1,
                Self::vendor_cell(result),
                Self::format_currency(result.total_cost()),
                Self::format_currency(result.per_device_per_month()),
                Self::format_currency(result.roi().annual_savings),
                Self::format_roi(result.roi().roi_percentage),
                Self::format_payback(result.roi().payback_months),
                result.risk().security_score,
                result.risk().compliance_score,
            ));
        }
        output.push('\n');
    }

    fn render_breakdown(&self, output: &mut String, results: &[VendorResult]) {
        output.push_str("## Cost Breakdown\n\n");
        output.push_str(BREAKDOWN_HEADER);
        output.push_str(BREAKDOWN_SEPARATOR);
        for result in results {
            let breakdown = result.breakdown();
            let total = result.total_cost();
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::vendor_cell(result),
                Self::format_share(breakdown.software, total),
                Self::format_share(breakdown.hardware, total),
                Self::format_share(breakdown.services, total),
                Self::format_share(breakdown.operations, total),
            ));
        }
        output.push('\n');

        for result in results {
            if let Some(monthly) = result.breakdown().hardware_amortized_monthly {
                output.push_str(&format!(
                    "- {} hardware is capitalized: {} per month amortized\n",
                    Self::vendor_cell(result),
                    Self::format_currency(monthly)
                ));
            }
        }
        if results
            .iter()
            .any(|result| result.breakdown().hardware_amortized_monthly.is_some())
        {
            output.push('\n');
        }
    }

    fn render_yearly(&self, output: &mut String, results: &[VendorResult]) {
        output.push_str("## Yearly Projection\n\n");
        output.push_str(YEARLY_HEADER);
        output.push_str(YEARLY_SEPARATOR);
        for result in results {
            for year in result.yearly() {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                    Self::vendor_cell(result),
                    year.year,
                    year.months,
                    Self::format_currency(year.software),
                    Self::format_currency(year.hardware),
                    Self::format_currency(year.services),
                    Self::format_currency(year.operations),
                    Self::format_currency(year.total),
                ));
            }
        }
        output.push('\n');

        for result in results {
            output.push_str(&format!(
                "- {} net present value: {} (discounted at {:.0}% a year)\n",
                Self::vendor_cell(result),
                Self::format_currency(result.roi().net_present_value),
                NPV_DISCOUNT_RATE * 100.0
            ));
        }
        output.push('\n');
    }

    fn render_operations(&self, output: &mut String, results: &[VendorResult]) {
        output.push_str("## Operations & Risk\n\n");
        output.push_str(OPERATIONS_HEADER);
        output.push_str(OPERATIONS_SEPARATOR);
        for result in results {
            let operational = result.operational();
            let missing = &result.risk().missing_frameworks;
            output.push_str(&format!(
                "| {} | {:.0}% | {:.2} | {:.1} | {:.1} | {:.0}% | {} |\n",
                Self::vendor_cell(result),
                operational.automation_level,
                operational.fte_saved,
                operational.maintenance_windows,
                operational.mttr,
                result.roi().breach_reduction,
                if missing.is_empty() {
                    "none".to_string()
                } else {
                    missing.join(", ")
                },
            ));
        }
        output.push('\n');
    }

    fn render_outlook(&self, output: &mut String, results: &[VendorResult]) {
        output.push_str("## Outlook & Rollout\n\n");
        output.push_str(OUTLOOK_HEADER);
        output.push_str(OUTLOOK_SEPARATOR);
        for result in results {
            output.push_str(&format!(
                "| {} | {:.0} | {:.0} | {:.0} | {:.1} |\n",
                Self::vendor_cell(result),
                result.competitive().innovation_score,
                result.competitive().future_readiness,
                result.timeline().time_to_value,
                result.timeline().implementation_weeks,
            ));
        }
        output.push('\n');
    }

    fn render_failures(&self, output: &mut String, results: &TcoResults) {
        if !results.has_failures() {
            return;
        }
        output.push_str("## Vendors Not Evaluated\n\n");
        output.push_str(FAILURE_HEADER);
        output.push_str(FAILURE_SEPARATOR);
        for failure in results.failures() {
            let reason = failure.message().lines().next().unwrap_or_default();
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(failure.vendor_id()),
                failure.kind(),
                Self::escape_markdown_table_cell(reason),
            ));
        }
        output.push('\n');
    }
}

impl ResultsFormatter for MarkdownFormatter {
    fn format(&self, results: &TcoResults) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, results);

        if results.results().is_empty() {
            output.push_str("No vendor could be evaluated.\n\n");
        } else {
            self.render_summary(&mut output, results.results());
            self.render_breakdown(&mut output, results.results());
            self.render_yearly(&mut output, results.results());
            self.render_operations(&mut output, results.results());
            self.render_outlook(&mut output, results.results());
        }

        self.render_failures(&mut output, results);
        Ok(output)
    }
}
