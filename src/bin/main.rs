use anyhow::Context;
use catalog_core::config::CatalogConfig;
use catalog_core::persistence::load_index;
use catalog_core::source::DirSyllabusSource;
use catalog_core::{search_index, CourseSearchEntry, SearchHit, SearchIndex, SyllabusCache};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{stdin, stdout, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they do not interleave with the screen redraws.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catalog_core=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CatalogConfig::load().context("Failed to load catalog.toml")?;
    let limit = config.search.limit;

    let external_index;
    let index: &SearchIndex = match &config.index.path {
        Some(path) => {
            external_index = load_index(path)
                .with_context(|| format!("Failed to load search index from {}", path.display()))?;
            &external_index
        }
        None => search_index().context("Bundled search index is invalid")?,
    };
    info!(courses = index.len(), "Catalog ready");

    let source = config.syllabi.dir.as_ref().map(DirSyllabusSource::new);
    let mut cache = SyllabusCache::new();
    let mut query = String::new();
    let mut status = String::new();

    loop {
        let hits = index.search(&query, limit);
        print_ui(&query, &hits, index, &status)?;
        status.clear();

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            s if s.starts_with(':') && s.len() > 1 => {
                // Select a hit with :1, :2 etc
                match s[1..].parse::<usize>() {
                    Ok(n) if n > 0 && n <= hits.len() => {
                        let entry = hits[n - 1].entry;
                        print_course(entry)?;
                        match &source {
                            Some(source) => match cache.get_or_fetch(&entry.course_code, source) {
                                Ok(syllabi) if syllabi.is_empty() => println!("\nNo syllabi on file."),
                                Ok(syllabi) => {
                                    println!("\nSyllabi:");
                                    for syllabus in syllabi {
                                        let section = syllabus.section.as_deref().unwrap_or("-");
                                        let instructor = syllabus.instructor.as_deref().unwrap_or("TBA");
                                        println!(
                                            "  {} (section {}, {}): {}",
                                            syllabus.term, section, instructor, syllabus.url
                                        );
                                    }
                                }
                                Err(e) => {
                                    warn!(course = %entry.course_code, error = %e, "Could not load syllabi");
                                    println!("\n[ERROR] Could not load syllabi: {}", e);
                                }
                            },
                            None => println!("\n(No syllabus directory configured.)"),
                        }
                        print!("\nPress [Enter] to go back.");
                        stdout().flush()?;
                        stdin().read_line(&mut String::new())?;
                    }
                    _ => status = format!("No result {}", s),
                }
            }
            s => {
                query = s.to_string();
            }
        }
    }

    println!("\nCached syllabi for {} course(s) this session.", cache.len());
    Ok(())
}

fn print_ui(query: &str, hits: &[SearchHit<'_>], index: &SearchIndex, status: &str) -> anyhow::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("Course Catalog ({} courses)", index.len());
    println!("---------------------------------------------------------------");
    println!("Type a course code or title words and press [Enter].");
    println!("Open a result with ':1', ':2'. 'exit' to quit.\n");

    println!("Search: [{}]", query);
    if !status.is_empty() {
        println!("{}", status);
    }

    if !hits.is_empty() {
        println!("\nResults:");
        for (i, hit) in hits.iter().enumerate() {
            println!("  :{}: {} {}", i + 1, hit.entry.course_code, hit.entry.course_title);
        }
    } else if !query.trim().is_empty() {
        println!("\nNo courses found.");
        let suggestions = index.suggest_codes(query);
        if !suggestions.is_empty() {
            let codes: Vec<&str> = suggestions.iter().map(|e| e.course_code.as_str()).collect();
            println!("Did you mean: {}?", codes.join(", "));
        }
    }
    print!("\n> ");
    out.flush()?;
    Ok(())
}

fn print_course(entry: &CourseSearchEntry) -> anyhow::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{} - {}", entry.course_code, entry.course_title);
    println!("---------------------------------------------------------------");
    println!("Slug: {}", entry.slug);
    if let Some(context) = &entry.course_context {
        println!("\n{}", context);
    }
    Ok(())
}
