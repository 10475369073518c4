//! Heuristic classification of raw repository records into gallery projects.
//!
//! Everything in here is a pure function over one repository record: no I/O,
//! no shared state. The keyword tables are fuzzy by nature and their rule
//! order is load-bearing; changing precedence changes how ambiguous repos
//! get bucketed.

use chrono::Datelike;
use fidos_api::GitHubRepo;

use crate::models::{Category, Project};

/// Repo names whose mechanical title would read badly, mapped to the
/// hand-picked display title instead.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("FidOS", "FidOS - macOS-Inspired Portfolio"),
    ("nyc-taxi-pipeline", "NYC Taxi Data Pipeline"),
    ("sales-insights-dashboard", "Sales Insights Dashboard"),
];

/// Curated repos promoted to the front of the gallery
const FEATURED_REPOS: &[&str] = &["FidOS", "nyc-taxi-pipeline"];

/// Keyword groups tested against the lower-cased name + description.
/// Any hit adds the tag. Evaluated top to bottom; output keeps that order.
const TECH_RULES: &[(&[&str], &str)] = &[
    (&["aws", "glue", "redshift", "s3"], "AWS"),
    (&["airflow"], "Apache Airflow"),
    (&["spark"], "Apache Spark"),
    (&["dbt"], "dbt"),
    (&["python"], "Python"),
    (&["sql", "etl", "pipeline"], "SQL"),
    (&["terraform"], "Terraform"),
    (&["power bi", "powerbi"], "Power BI"),
    (&["pandas"], "Pandas"),
    (&["next.js", "nextjs"], "Next.js"),
    (&["react"], "React"),
    (&["typescript"], "TypeScript"),
    (&["tailwind"], "Tailwind CSS"),
    (&["flask"], "Flask"),
    (&["fastapi"], "FastAPI"),
    (&["postgresql", "postgres"], "PostgreSQL"),
    (&["sqlalchemy"], "SQLAlchemy"),
    (&["vite"], "Vite"),
];

const DATA_DESC_KEYWORDS: &[&str] = &[
    "data platform",
    "data pipeline",
    "etl",
    "dashboard",
    "analytics",
];

/// Turn a repo name into a display title.
///
/// Overrides win; otherwise `my-cool-project` becomes `My Cool Project`.
pub fn format_repo_name(name: &str) -> String {
    if let Some((_, display)) = DISPLAY_NAMES.iter().find(|(repo, _)| *repo == name) {
        return (*display).to_string();
    }

    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bucket a repo into one of the three categories. Total: always returns
/// something, with `Web` as the fallback. First matching rule wins.
pub fn infer_category(name: &str, description: &str) -> Category {
    let name = name.to_lowercase();
    let desc = description.to_lowercase();

    if DATA_DESC_KEYWORDS.iter().any(|k| desc.contains(k))
        || name.contains("data")
        || name.contains("dashboard")
    {
        return Category::Data;
    }

    if desc.contains("full-stack")
        || desc.contains("fullstack")
        || desc.contains("saas")
        || (desc.contains("backend") && desc.contains("frontend"))
    {
        return Category::Fullstack;
    }

    Category::Web
}

/// Derive the technology tag list for a repo.
///
/// Keyword rules run in table order against the lower-cased name and
/// description; the primary language, when known, is always present in the
/// result (the Python/TypeScript rules also fire on the language alone, so
/// dedup keeps each tag once).
pub fn infer_technologies(name: &str, description: &str, language: Option<&str>) -> Vec<String> {
    let haystack = format!("{} {}", name.to_lowercase(), description.to_lowercase());

    let mut tags: Vec<String> = Vec::new();
    let mut push = |tag: &str| {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    };

    for (keywords, tag) in TECH_RULES {
        if keywords.iter().any(|k| haystack.contains(k)) || language == Some(*tag) {
            push(tag);
        }
    }

    if let Some(lang) = language {
        push(lang);
    }

    tags
}

/// True iff the repo name is on the curated featured list
pub fn is_featured(name: &str) -> bool {
    FEATURED_REPOS.contains(&name)
}

/// The complete pure mapping from one raw repository record to one project.
///
/// Calling this twice on the same record yields identical projects; there is
/// no hidden state anywhere in the chain.
pub fn project_from_repo(repo: &GitHubRepo) -> Project {
    let title = format_repo_name(&repo.name);

    let description = match repo.description.as_deref() {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => format!("A {} project.", title),
    };

    let live_url = repo
        .homepage
        .as_deref()
        .filter(|h| !h.is_empty())
        .map(str::to_string);

    Project {
        id: repo.id,
        featured: is_featured(&repo.name),
        category: infer_category(&repo.name, repo.description.as_deref().unwrap_or("")),
        technologies: infer_technologies(
            &repo.name,
            repo.description.as_deref().unwrap_or(""),
            repo.language.as_deref(),
        ),
        // UTC year for determinism; the API hands us ISO-8601 in Zulu time
        year: repo.updated_at.year().to_string(),
        long_description: description.clone(),
        description,
        live_url,
        source_url: repo.html_url.clone(),
        title,
    }
}
