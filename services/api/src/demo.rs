use crate::infra::{load_snapshot, read_answers, resolve_data_dir, scoring_engine};
use career_advisor::catalog::{
    compare_programs, search_snapshot, upcoming_events, CatalogQuery, CatalogSnapshot,
    ComparisonSelection, EventQuery, Institution, InstitutionQuery, Program, ProgramQuery,
    ResourceQuery, SearchResults, StudyResource, TimelineEvent,
};
use career_advisor::config::AppConfig;
use career_advisor::error::AppError;
use career_advisor::quiz::{QuizSession, RecommendationResult, ScoringEngine, SessionStep};
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Answers as a JSON file path or inline JSON
    #[arg(long)]
    pub(crate) answers: String,
    /// Directory holding questionnaire and catalog exports
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Print the recommendation as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CatalogKind {
    Institutions,
    Programs,
    Resources,
    Events,
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Catalog to filter
    #[arg(value_enum)]
    pub(crate) catalog: CatalogKind,
    /// Free-text query
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Exact institution location
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Course an institution must offer
    #[arg(long)]
    pub(crate) course: Option<String>,
    /// Minimum institution rating
    #[arg(long)]
    pub(crate) min_rating: Option<f64>,
    /// Program stream (SCIENCE, COMMERCE, ARTS, VOCATIONAL or ALL)
    #[arg(long)]
    pub(crate) stream: Option<String>,
    /// Resource type or event type
    #[arg(long = "type")]
    pub(crate) kind: Option<String>,
    /// Resource subject
    #[arg(long)]
    pub(crate) subject: Option<String>,
    /// Resource level
    #[arg(long)]
    pub(crate) level: Option<String>,
    /// Directory holding questionnaire and catalog exports
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Print matches and facets as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for upcoming events (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Directory holding questionnaire and catalog exports
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

fn prepare(data_dir: Option<PathBuf>) -> Result<(CatalogSnapshot, ScoringEngine), AppError> {
    let config = AppConfig::load()?;
    let data_dir = resolve_data_dir(data_dir, &config.data);
    let snapshot = load_snapshot(data_dir.as_deref())?;
    Ok((snapshot, scoring_engine(&config.data)))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        answers,
        data_dir,
        json,
    } = args;

    let (snapshot, engine) = prepare(data_dir)?;
    let answers = read_answers(&answers)?;
    let result = engine.recommend(&answers, snapshot.questionnaire.questions());

    if json {
        print_json(&result)
    } else {
        render_recommendation(&result);
        Ok(())
    }
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let (snapshot, _) = prepare(args.data_dir.clone())?;
    let search = args.query.clone().unwrap_or_default();

    match args.catalog {
        CatalogKind::Institutions => {
            let query = InstitutionQuery {
                search,
                location: args.location.clone().unwrap_or_default(),
                course: args.course.clone().unwrap_or_default(),
                min_rating: args.min_rating.unwrap_or_default(),
            };
            emit(&snapshot, &query, args.json, |item: &Institution| {
                format!(
                    "{} ({}) rating {:.1}, {} [{}]",
                    item.name,
                    item.location,
                    item.rating,
                    item.courses.join(", "),
                    item.directions_url()
                )
            })
        }
        CatalogKind::Programs => {
            let query = ProgramQuery {
                search,
                stream: args.stream.clone().unwrap_or_default(),
            };
            emit(&snapshot, &query, args.json, |item: &Program| {
                format!(
                    "{} [{}] {}, {}",
                    item.name,
                    item.stream.label(),
                    item.duration,
                    item.salary_range
                )
            })
        }
        CatalogKind::Resources => {
            let query = ResourceQuery {
                search,
                kind: args.kind.clone().unwrap_or_default(),
                subject: args.subject.clone().unwrap_or_default(),
                level: args.level.clone().unwrap_or_default(),
            };
            emit(&snapshot, &query, args.json, |item: &StudyResource| {
                format!(
                    "{} [{} / {} / {}]",
                    item.title,
                    item.kind.label(),
                    item.subject,
                    item.level.label()
                )
            })
        }
        CatalogKind::Events => {
            let query = EventQuery {
                search,
                kind: args.kind.clone().unwrap_or_default(),
            };
            emit(&snapshot, &query, args.json, |item: &TimelineEvent| {
                format!("{} {} ({})", item.date, item.title, item.kind.label())
            })
        }
    }
}

fn emit<Q>(
    snapshot: &CatalogSnapshot,
    query: &Q,
    json: bool,
    line: impl Fn(&Q::Record) -> String,
) -> Result<(), AppError>
where
    Q: CatalogQuery,
    Q::Record: Serialize,
{
    let results = search_snapshot(snapshot, query);
    if json {
        return print_json(&results);
    }
    render_results(&results, line);
    Ok(())
}

fn render_results<R>(results: &SearchResults<R>, line: impl Fn(&R) -> String) {
    println!("{} match(es)", results.total);
    for item in &results.items {
        println!("- {}", line(item));
    }
    for (name, values) in &results.facets {
        println!("{name}: {}", values.join(" | "));
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, data_dir } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let (snapshot, engine) = prepare(data_dir)?;
    let questionnaire = &snapshot.questionnaire;

    println!("Career advisor demo");
    println!("\nQuestionnaire ({} questions)", questionnaire.len());

    let mut session = QuizSession::new();
    let mut outcome = None;
    while let Some(question) = session.current_question(questionnaire) {
        let Some(option) = question.options.last() else {
            break;
        };
        println!("- {} -> {}", question.text, option.text);
        session.set_answer(question.id, option.id.clone());
        match session.advance(questionnaire, &engine) {
            Some(SessionStep::Next(_)) => continue,
            Some(SessionStep::Finished(result)) => {
                outcome = Some(result);
                break;
            }
            None => break,
        }
    }

    match outcome {
        Some(result) => render_recommendation(&result),
        None => println!("\nQuestionnaire is empty; no recommendation"),
    }

    let colleges = search_snapshot(
        &snapshot,
        &InstitutionQuery {
            location: "Delhi".to_string(),
            min_rating: 4.5,
            ..InstitutionQuery::default()
        },
    );
    println!("\nColleges in Delhi rated 4.5 or higher");
    render_results(&colleges, |item: &Institution| {
        format!("{} rating {:.1}, {}", item.name, item.rating, item.fees)
    });

    let mut selection = ComparisonSelection::new();
    for program in snapshot.programs.iter().take(2) {
        selection.toggle(program.id);
    }
    let comparison = compare_programs(&snapshot.programs, &selection);
    if comparison.is_complete() {
        let names: Vec<&str> = comparison
            .programs
            .iter()
            .map(|program| program.name.as_str())
            .collect();
        println!("\nComparing {}", names.join(" vs "));
        for row in &comparison.rows {
            println!("- {}: {}", row.label, row.values.join(" | "));
        }
    }

    let upcoming = upcoming_events(&snapshot.events, today, 3);
    if upcoming.is_empty() {
        println!("\nUpcoming events from {today}: none");
    } else {
        println!("\nUpcoming events from {today}");
        for event in upcoming {
            println!(
                "- {} {} [{}]",
                event.date,
                event.title,
                event.importance.label()
            );
        }
    }

    Ok(())
}

pub(crate) fn render_recommendation(result: &RecommendationResult) {
    println!("\nRecommended stream: {}", result.recommended_category.label());
    println!("{}", result.recommended_category.description());

    println!("\nScore breakdown");
    for share in result.breakdown() {
        let bar = "#".repeat((share.percent / 10.0).round() as usize);
        println!(
            "- {:<10} {:>5.1} {:<10} {:.0}%",
            share.category.label(),
            share.score,
            bar,
            share.percent
        );
    }

    if result.suggestions.is_empty() {
        println!("\nSuggested programs: none");
    } else {
        println!("\nSuggested programs");
        for suggestion in &result.suggestions {
            println!("- {suggestion}");
        }
    }
}
