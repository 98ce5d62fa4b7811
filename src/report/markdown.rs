use crate::estimator::EmissionsResult;
use crate::quick::QuickResults;
use crate::report::format_kg;

/// Markdown formatter for estimates
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format an estimate as markdown
    pub fn format(result: &EmissionsResult) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str("# Your Carbon Footprint\n\n");
        md.push_str(&format!(
            "**{} kg CO2e** per year\n\n",
            format_kg(result.total_annual_kg_co2)
        ));
        md.push_str(&format!(
            "**{}:** {}\n\n",
            result.rating.label, result.rating.message
        ));

        // Breakdown
        md.push_str("## Emissions Breakdown\n\n");
        md.push_str("| Category | kg CO2e / year | Share |\n");
        md.push_str("|----------|----------------|-------|\n");
        for (category, share) in result.breakdown.shares() {
            md.push_str(&format!(
                "| {} | {} | {:.0}% |\n",
                category.display_name(),
                format_kg(result.breakdown.get(category)),
                share
            ));
        }
        md.push('\n');

        // Suggestions
        md.push_str("## Suggestions\n\n");
        for block in &result.suggestions {
            md.push_str(&format!("### {}\n\n", block.category));
            for tip in &block.tips {
                md.push_str(&format!("- {}\n", tip));
            }
            md.push('\n');
        }

        md
    }

    /// Format a quick estimate and its tips as markdown
    pub fn format_quick(results: &QuickResults, tips: &[&str]) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str("# Quick Carbon Footprint\n\n");
        md.push_str(&format!("**{} kg CO2e** per year\n\n", format_kg(results.total)));

        md.push_str("| Category | kg CO2e / year |\n");
        md.push_str("|----------|----------------|\n");
        for (name, value) in [
            ("Transportation", results.transportation),
            ("Home Energy", results.home),
            ("Food", results.food),
            ("Waste", results.waste),
            ("Flights", results.flights),
        ] {
            md.push_str(&format!("| {} | {} |\n", name, format_kg(value)));
        }
        md.push('\n');

        if !tips.is_empty() {
            md.push_str("## Tips\n\n");
            for tip in tips {
                md.push_str(&format!("- {}\n", tip));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::compute_emissions;
    use crate::input::LifestyleInput;
    use crate::quick::{estimate_quick, quick_reduction_tips, QuickProfile};

    #[test]
    fn test_format_markdown() {
        let result = compute_emissions(&LifestyleInput::default());
        let md = MarkdownFormatter::format(&result);

        assert!(md.contains("**22,752 kg CO2e** per year"));
        assert!(md.contains("**Significantly above average:**"));
        assert!(md.contains("| Food | 11,960 | 53% |"));
        assert!(md.contains("### Diet"));
        assert!(md.contains("### Waste Management"));
        assert!(!md.contains("### General"));
    }

    #[test]
    fn test_format_quick_markdown() {
        let results = estimate_quick(&QuickProfile::default());
        let tips = quick_reduction_tips(&results);
        let md = MarkdownFormatter::format_quick(&results, &tips);

        assert!(md.contains("**8,620 kg CO2e** per year"));
        assert!(md.contains("| Flights | 400 |"));
        assert_eq!(md.matches("\n- ").count(), tips.len());
    }
}
