//! Report generation for launch analytics.

use launch_domain::{Launch, LaunchServiceProvider, Rocket};
use serde::{Deserialize, Serialize};

use crate::engine::LaunchAnalytics;
use crate::error::{AnalyticsError, Result};
use crate::queries::{self, ProviderStats};

/// Parameters shared by every section of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportParams {
    pub k: usize,
    pub orbit: String,
    pub year: i32,
}

/// Every ranking computed from a single snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub generated_at: String,
    pub params: ReportParams,
    pub total_launches: usize,
    pub most_launched_rockets: Vec<Rocket>,
    pub most_reliable_providers: Vec<LaunchServiceProvider>,
    pub most_unreliable_providers: Vec<LaunchServiceProvider>,
    pub most_recent_launches: Vec<Launch>,
    pub most_expensive_launches: Vec<Launch>,
    /// Absent when no launch reached `params.orbit`
    pub dominant_country: Option<String>,
    pub highest_revenue_providers: Vec<LaunchServiceProvider>,
    pub provider_stats: Vec<ProviderStats>,
}

impl LaunchAnalytics {
    /// Generate a comprehensive report from one snapshot.
    ///
    /// k is applied to every ranking unchanged, so a k larger than any one
    /// ranking's candidate count fails the whole report.
    pub fn generate_report(&self, params: &ReportParams) -> Result<AnalyticsReport> {
        let launches = self.snapshot()?;
        let k = params.k;

        let dominant_country = match queries::dominant_country(&launches, &params.orbit) {
            Ok(country) => Some(country),
            Err(AnalyticsError::NotFound { .. }) => None,
            Err(e) => return Err(e),
        };

        Ok(AnalyticsReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            params: params.clone(),
            total_launches: launches.len(),
            most_launched_rockets: queries::most_launched_rockets(&launches, k)?,
            most_reliable_providers: queries::most_reliable_launch_service_providers(&launches, k)?,
            most_unreliable_providers: queries::most_unreliable_launch_service_providers(
                &launches, k,
            )?,
            most_recent_launches: queries::most_recent_launches(&launches, k)?,
            most_expensive_launches: queries::most_expensive_launches(&launches, k)?,
            dominant_country,
            highest_revenue_providers: queries::highest_revenue_launch_service_providers(
                &launches,
                k,
                params.year,
            )?,
            provider_stats: queries::provider_stats(&launches),
        })
    }

    /// Generate report as JSON string.
    pub fn generate_report_json(&self, params: &ReportParams) -> Result<String> {
        let report = self.generate_report(params)?;
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Generate Markdown report.
    pub fn generate_report_markdown(&self, params: &ReportParams) -> Result<String> {
        let report = self.generate_report(params)?;
        Ok(render_markdown(&report))
    }
}

fn provider_rows(md: &mut String, providers: &[LaunchServiceProvider]) {
    md.push_str("| Rank | Provider | Founded | Country |\n");
    md.push_str("|------|----------|---------|---------|\n");
    for (i, p) in providers.iter().enumerate() {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            i + 1,
            p.name,
            p.founded_year,
            p.country
        ));
    }
    md.push('\n');
}

fn launch_rows(md: &mut String, launches: &[Launch]) {
    md.push_str("| Rank | Date | Rocket | Provider | Orbit | Outcome | Price |\n");
    md.push_str("|------|------|--------|----------|-------|---------|-------|\n");
    for (i, l) in launches.iter().enumerate() {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            i + 1,
            l.launch_date,
            l.rocket.name,
            l.provider.name,
            l.orbit,
            l.outcome.as_str(),
            l.price
        ));
    }
    md.push('\n');
}

/// Render a report as Markdown tables.
pub fn render_markdown(report: &AnalyticsReport) -> String {
    let params = &report.params;

    let mut md = String::new();
    md.push_str("# Launch Analytics Report\n\n");
    md.push_str(&format!("**Generated:** {}\n\n", report.generated_at));
    md.push_str(&format!(
        "**Launches:** {} | **k:** {} | **Orbit:** {} | **Year:** {}\n\n",
        report.total_launches, params.k, params.orbit, params.year
    ));

    md.push_str("## Most Launched Rockets\n\n");
    md.push_str("| Rank | Rocket | Country | Manufacturer |\n");
    md.push_str("|------|--------|---------|--------------|\n");
    for (i, r) in report.most_launched_rockets.iter().enumerate() {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            i + 1,
            r.name,
            r.country,
            r.manufacturer.name
        ));
    }
    md.push('\n');

    md.push_str("## Most Reliable Providers\n\n");
    provider_rows(&mut md, &report.most_reliable_providers);

    md.push_str("## Most Unreliable Providers\n\n");
    provider_rows(&mut md, &report.most_unreliable_providers);

    md.push_str("## Most Recent Launches\n\n");
    launch_rows(&mut md, &report.most_recent_launches);

    md.push_str("## Most Expensive Launches\n\n");
    launch_rows(&mut md, &report.most_expensive_launches);

    md.push_str(&format!("## Dominant Country ({})\n\n", params.orbit));
    match report.dominant_country {
        Some(ref country) => md.push_str(&format!("{country}\n\n")),
        None => md.push_str("No launches recorded for this orbit.\n\n"),
    }

    md.push_str(&format!("## Highest Revenue Providers ({})\n\n", params.year));
    provider_rows(&mut md, &report.highest_revenue_providers);

    if !report.provider_stats.is_empty() {
        md.push_str("## Provider Statistics\n\n");
        md.push_str("| Provider | Launches | Successful | Failed | Success Rate |\n");
        md.push_str("|----------|----------|------------|--------|--------------|\n");
        for stat in &report.provider_stats {
            let rate = stat
                .success_rate()
                .map(|r| format!("{:.1}%", r.percentage()))
                .unwrap_or_else(|| "N/A".to_string());
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                stat.provider.name, stat.total_launches, stat.successful, stat.failed, rate
            ));
        }
        md.push('\n');
    }

    md
}
