use crate::model::results::TeamResults;
use crate::report::format_f64_3;

pub fn render_ranking_text(results: &TeamResults) -> String {
    let mut out = String::new();

    out.push_str("Station Score Ranking\n");
    out.push_str("=====================\n");
    out.push_str(&format!(
        "Teams: {}  Stations: {}  Max points: {}\n",
        results.len(),
        results.categories.len(),
        results.max_points
    ));

    let tied: Vec<&str> = results
        .stats
        .iter()
        .filter(|s| s.zero_variance)
        .map(|s| s.name.as_str())
        .collect();
    if !tied.is_empty() {
        out.push_str(&format!("No spread (midpoint): {}\n", tied.join(", ")));
    }
    out.push('\n');

    let width = results
        .teams
        .iter()
        .map(|t| t.team.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    out.push_str(&format!(
        "{:>4}  {:<width$}  {:>10}  {:>10}\n",
        "Rank",
        "Team",
        "Total",
        "Sum",
        width = width
    ));
    for entry in results.ranked() {
        out.push_str(&format!(
            "{:>4}  {:<width$}  {:>10}  {:>10}\n",
            entry.rank,
            entry.result.team,
            format_f64_3(entry.result.total),
            format_f64_3(entry.result.normalized_sum),
            width = width
        ));
    }

    out
}
