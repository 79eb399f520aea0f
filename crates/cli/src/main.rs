use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use controller::{ControllerConfig, ListController, ListView, PresentationMode, QuickFilter};
use filtering::{
    CandidateTab, FilterEdit, FilterState, FlagDimension, MultiSelectDimension, RangeDimension,
    SortKey, SortOrder, SortState,
};
use roster::{Availability, Candidate, CandidateId, Facets, FacetValue, Roster};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Cockpit - Candidate filtering and ranking for the hiring dashboard
#[derive(Parser)]
#[command(name = "cockpit")]
#[command(about = "Filter, rank and page through a candidate roster", long_about = None)]
struct Cli {
    /// Roster JSON file, or a directory of roster files
    #[arg(short, long, default_value = "data/candidates.json")]
    roster: PathBuf,

    /// Controller config JSON (page size, sort, presentation, layout)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Saved filter state JSON to start from
    #[arg(short, long)]
    filters: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List candidates matching the filters, one page at a time
    List {
        /// Case-insensitive search over name, email, position, skills, tools and location
        #[arg(long)]
        search: Option<String>,

        /// Skill to match (repeatable; any one matches)
        #[arg(long = "skill")]
        skills: Vec<String>,

        /// Country to match (repeatable; any one matches)
        #[arg(long = "country")]
        countries: Vec<String>,

        /// Availability to match (repeatable), e.g. immediate, short
        #[arg(long)]
        availability: Vec<String>,

        /// Only verified candidates
        #[arg(long, conflicts_with = "unverified")]
        verified: bool,

        /// Only unverified candidates
        #[arg(long)]
        unverified: bool,

        /// Minimum hourly rate
        #[arg(long)]
        min_rate: Option<f64>,

        /// Maximum hourly rate
        #[arg(long)]
        max_rate: Option<f64>,

        /// Quick filter (repeatable): verified-only, available-now, top-matches, budget-rate
        #[arg(long = "quick")]
        quick: Vec<QuickFilter>,

        /// Tab: all, verified or unverified
        #[arg(long)]
        tab: Option<CandidateTab>,

        /// Sort key: name, date, match or rate
        #[arg(long)]
        sort: Option<SortKey>,

        /// Sort direction: asc or desc
        #[arg(long)]
        order: Option<SortOrder>,

        /// Page to show (clamped to the available pages)
        #[arg(long, default_value = "1")]
        page: usize,

        /// Presentation: grid, list or expandable
        #[arg(long)]
        mode: Option<PresentationMode>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one candidate in full
    Show {
        /// Candidate ID
        #[arg(long)]
        id: CandidateId,
    },

    /// Show the distinct values of each filter dimension with counts
    Facets {
        /// Values to show per dimension
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Show roster statistics
    Stats,

    /// Time repeated filter and sort passes with random searches
    Benchmark {
        /// Number of passes to run
        #[arg(long, default_value = "1000")]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ControllerConfig::load(path)?,
        None => ControllerConfig::default(),
    };
    let saved_filters = cli.filters.as_deref().map(load_filter_state).transpose()?;

    println!("Loading roster from {}...", cli.roster.display());
    let start = Instant::now();
    let roster = Arc::new(Roster::load(&cli.roster).context("Failed to load candidate roster")?);
    println!(
        "{} Loaded {} candidates in {:?}",
        "✓".green(),
        roster.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::List {
            search,
            skills,
            countries,
            availability,
            verified,
            unverified,
            min_rate,
            max_rate,
            quick,
            tab,
            sort,
            order,
            page,
            mode,
            json,
        } => {
            let mut filters = saved_filters.unwrap_or_default();
            if let Some(search) = search {
                filters.apply_edit(FilterEdit::SetSearch(search));
            }
            for (dimension, values) in [
                (MultiSelectDimension::Skills, skills),
                (MultiSelectDimension::Countries, countries),
                (MultiSelectDimension::Availability, availability),
            ] {
                if !values.is_empty() {
                    let values = values.into_iter().collect();
                    filters.apply_edit(FilterEdit::SetValues(dimension, values));
                }
            }
            if verified || unverified {
                filters.apply_edit(FilterEdit::SetFlag(FlagDimension::Verified, Some(verified)));
            }
            if min_rate.is_some() || max_rate.is_some() {
                let current = filters.range(RangeDimension::Rate);
                filters.apply_edit(FilterEdit::SetRange(
                    RangeDimension::Rate,
                    min_rate.unwrap_or(current.min()),
                    max_rate.unwrap_or(current.max()),
                ));
            }

            let mut list = ListController::new(roster, &config).with_filters(filters);
            for shortcut in quick {
                list.apply_quick_filter(shortcut);
            }
            if let Some(tab) = tab {
                list.set_tab(tab);
            }
            if sort.is_some() || order.is_some() {
                let current = list.sort();
                list.set_sort(SortState::new(
                    sort.unwrap_or(current.sort_by),
                    order.unwrap_or(current.sort_order),
                ));
            }
            if let Some(mode) = mode {
                list.set_mode(mode);
            }
            list.set_page(page);

            handle_list(&list, json)?
        }
        Commands::Show { id } => handle_show(&roster, id)?,
        Commands::Facets { limit } => handle_facets(&roster, limit),
        Commands::Stats => handle_stats(&roster),
        Commands::Benchmark { iterations } => handle_benchmark(roster, &config, iterations)?,
    }

    Ok(())
}

/// Read a saved `FilterState`; missing keys fall back to the defaults
fn load_filter_state(path: &Path) -> Result<FilterState> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read filter file {}", path.display()))?;
    let filters: FilterState = serde_json::from_str(&content)
        .with_context(|| format!("Invalid filter state in {}", path.display()))?;
    info!(
        "Loaded {} active filters from {}",
        filters.active_filter_count(),
        path.display()
    );
    Ok(filters)
}

/// Handle the 'list' command
fn handle_list(list: &ListController, json: bool) -> Result<()> {
    match list.view_state() {
        ListView::Empty(empty) => {
            println!("{}", empty.message.yellow());
            if empty.active_filters > 0 {
                println!("{} active filters", empty.active_filters);
            }
            if empty.can_clear {
                println!("Clear the filters to see all {} candidates", list.roster().len());
            }
        }
        ListView::Results(page) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&page.items)?);
                return Ok(());
            }
            println!(
                "{}",
                format!(
                    "{} of {} candidates ({} tab, {} filters, sorted by {} {}):",
                    page.total_visible,
                    page.total_candidates,
                    list.tab(),
                    list.filters().active_filter_count(),
                    list.sort().sort_by,
                    list.sort().sort_order
                )
                .bold()
                .blue()
            );
            let offset = (page.page - 1) * list.page_size();
            for (i, candidate) in page.items.iter().enumerate() {
                print_candidate_row(offset + i + 1, candidate, list.mode());
            }
            println!("Page {} of {}", page.page, page.total_pages);
        }
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(roster: &Roster, id: CandidateId) -> Result<()> {
    let candidate = roster
        .get(id)
        .ok_or_else(|| anyhow!("Candidate {} not found", id))?;

    println!("{}", format!("{} (#{})", candidate.name, candidate.id).bold().blue());
    print_field("Position", &candidate.position);
    print_field("Email", &candidate.email);
    print_field("Location", &candidate.location);
    print_field("Country", &candidate.country);
    print_field("Availability", candidate.availability.as_str());
    print_field("Verified", if candidate.verified { "yes" } else { "no" });
    print_field("Rate", &format_number(candidate.rate));
    print_field("Match score", &format_number(candidate.match_score));
    print_field("Salary expectation", &format_number(candidate.salary_expectation));
    print_field("Experience", candidate.experience.as_deref().unwrap_or("-"));
    print_field("Skills", &candidate.skills.join(", "));
    print_field("Tools", &candidate.tools.join(", "));
    print_field("Languages", &candidate.languages.join(", "));
    print_field("Certifications", &candidate.certifications.join(", "));
    if let Some(updated_at) = candidate.updated_at {
        print_field("Updated", &updated_at.to_rfc3339());
    }
    Ok(())
}

/// Handle the 'facets' command
fn handle_facets(roster: &Roster, limit: usize) {
    let Facets {
        regions,
        countries,
        skills,
        tools,
        languages,
        certifications,
        availability,
        education,
        contract_types,
        notice_periods,
    } = roster.facets();

    for (label, values) in [
        ("Regions", regions),
        ("Countries", countries),
        ("Skills", skills),
        ("Tools", tools),
        ("Languages", languages),
        ("Certifications", certifications),
        ("Availability", availability),
        ("Education", education),
        ("Contract types", contract_types),
        ("Notice periods", notice_periods),
    ] {
        print_facet(label, &values, limit);
    }
}

/// Handle the 'stats' command
fn handle_stats(roster: &Roster) {
    let stats = roster.compute_stats();

    println!("{}", "Roster statistics:".bold().blue());
    println!("{}Candidates: {}", "• ".green(), stats.total);
    println!("{}Verified: {}", "• ".green(), stats.verified);
    println!("{}Average rate: {}", "• ".cyan(), format_number(stats.avg_rate));
    println!(
        "{}Average match score: {}",
        "• ".cyan(),
        format_number(stats.avg_match_score)
    );
    println!("Availability:");
    for availability in Availability::ALL {
        let count = stats.by_availability.get(&availability).copied().unwrap_or(0);
        println!("  - {}: {}", availability, count);
    }
}

/// Handle the 'benchmark' command
fn handle_benchmark(
    roster: Arc<Roster>,
    config: &ControllerConfig,
    iterations: usize,
) -> Result<()> {
    if iterations == 0 {
        return Err(anyhow!("iterations must be at least 1"));
    }
    if roster.is_empty() {
        return Err(anyhow!("Cannot benchmark an empty roster"));
    }

    // Search terms drawn from the roster itself
    let terms: Vec<String> = roster
        .candidates()
        .iter()
        .flat_map(|c| c.skills.iter().chain(std::iter::once(&c.name)))
        .map(|s| s.to_lowercase())
        .collect();
    let sort_keys = [SortKey::Name, SortKey::Date, SortKey::Match, SortKey::Rate];

    let mut list = ListController::new(roster, config);
    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    let mut total_visible = 0usize;

    let started = Instant::now();
    for _ in 0..iterations {
        let term = &terms[rand::random::<u32>() as usize % terms.len()];
        let key = sort_keys[rand::random::<u32>() as usize % sort_keys.len()];

        let start = Instant::now();
        list.set_sort(SortState::new(key, list.sort().sort_order.reversed()));
        list.apply_edit(FilterEdit::SetSearch(term.clone()));
        total_visible += list.page_items().len();
        timings.push(start.elapsed());
    }
    let total_time = started.elapsed();

    let avg_latency = mean_latency(total_time, timings.len());
    timings.sort();
    let p50 = percentile(&timings, 0.50);
    let p95 = percentile(&timings, 0.95);
    let p99 = percentile(&timings, 0.99);
    let throughput = iterations as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Passes: {}", iterations);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} passes/second", throughput);
    println!("Average page fill: {:.2}", total_visible as f32 / iterations as f32);

    Ok(())
}

/// Average time per pass
fn mean_latency(total: Duration, passes: usize) -> Duration {
    if passes == 0 {
        return Duration::ZERO;
    }
    total.div_f64(passes as f64)
}

/// Nearest-rank percentile of sorted, non-empty timings
fn percentile(sorted: &[Duration], quantile: f64) -> Duration {
    let rank = (sorted.len() as f64 * quantile) as usize;
    sorted[rank.min(sorted.len() - 1)]
}

fn print_candidate_row(rank: usize, candidate: &Candidate, mode: PresentationMode) {
    let badge = if candidate.verified {
        "verified".green()
    } else {
        "unverified".dimmed()
    };
    println!(
        "{}. {} - {} [{}] rate {} match {} ({})",
        rank.to_string().green(),
        candidate.name.bold(),
        candidate.position,
        candidate.skills.join(", "),
        format_number(candidate.rate),
        format_number(candidate.match_score),
        badge
    );
    if mode == PresentationMode::Expandable {
        println!(
            "   {} | {} | {}",
            candidate.email,
            candidate.country,
            candidate.availability
        );
    }
}

fn print_field(label: &str, value: &str) {
    let value = if value.is_empty() { "-" } else { value };
    println!("{}{}: {}", "• ".green(), label, value);
}

fn print_facet(label: &str, values: &[FacetValue], limit: usize) {
    if values.is_empty() {
        return;
    }
    println!("{}", format!("{}:", label).bold().blue());
    for facet in values.iter().take(limit) {
        println!("  - {} ({})", facet.value, facet.count);
    }
    if values.len() > limit {
        println!("  ... {} more", values.len() - limit);
    }
}

fn format_number(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_latency_handles_large_counts() {
        let passes = u32::MAX as usize + 1;
        let total = Duration::from_secs(passes as u64);
        assert_eq!(mean_latency(total, passes), Duration::from_secs(1));
        assert_eq!(mean_latency(total, 0), Duration::ZERO);
    }

    #[test]
    fn test_percentile_stays_in_bounds() {
        let timings: Vec<Duration> = (1..=10).map(Duration::from_millis).collect();
        assert_eq!(percentile(&timings, 0.50), Duration::from_millis(6));
        assert_eq!(percentile(&timings, 0.99), Duration::from_millis(10));
        assert_eq!(percentile(&timings[..1], 0.95), Duration::from_millis(1));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(8.5)), "8.5");
        assert_eq!(format_number(None), "-");
    }
}
