//! Headless check: loads every dashboard widget against the configured API
//! and prints what the GUI would show.

use taskly::api::HttpApiClient;
use taskly::config::TasklyConfig;
use taskly::dashboard::{QuickTasksWidget, Sidebar, TaskCompletionChart};
use taskly::store::{FileBackend, LocalStore};

#[tokio::main]
async fn main() {
    if let Ok(journal) = systemd_journal_logger::JournalLog::new() {
        let _ = journal
            .with_syslog_identifier("taskly-check".to_string())
            .install();
    }
    log::set_max_level(log::LevelFilter::Info);

    let (config, _) = TasklyConfig::load();
    let store = LocalStore::new(FileBackend::open(config.store_path()));

    println!("=== TaskLY check ===\n");
    println!("API:   {}", config.api_base());
    println!("Store: {}", config.store_path().display());

    if store.token().is_none() {
        println!("\nNo token stored. Run `taskly --token <value>` first.");
        return;
    }

    let api = match HttpApiClient::new(&config.api_base(), store.clone()) {
        Ok(api) => api,
        Err(e) => {
            println!("Client error: {}", e);
            return;
        }
    };

    // Families
    println!("\n--- Teams ---");
    let mut sidebar = Sidebar::mount(store.clone());
    if sidebar.needs_fetch() {
        sidebar.load(&api).await;
    } else {
        println!("  (from cache)");
    }
    if let Some(err) = sidebar.error() {
        println!("  ERROR: {}", err);
    }
    for (index, family) in sidebar.families().iter().enumerate() {
        println!("  [{}] {} {}", family.id, sidebar.dot_color(index), family.title);
    }

    // Quick tasks
    println!("\n--- Quick Tasks (daily) ---");
    let mut quick_tasks = QuickTasksWidget::new();
    quick_tasks.load(&api).await;
    if let Some(err) = quick_tasks.error() {
        println!("  ERROR: {}", err);
    }
    for task in quick_tasks.tasks() {
        let mark = if task.completed { "x" } else { " " };
        println!("  [{}] {} (#{})", mark, task.title, task.id);
    }

    // Notes
    println!("\n--- Notes ---");
    match store.notes() {
        Ok(Some(notes)) => {
            for note in notes {
                println!("  - {}", note);
            }
        }
        Ok(None) => println!("  (none)"),
        Err(e) => println!("  ERROR: {}", e),
    }

    // Chart
    println!("\n--- Task Completion ---");
    let mut chart = TaskCompletionChart::new();
    chart.load(&api).await;
    if let Some(err) = chart.error() {
        println!("  ERROR: {}", err);
        return;
    }
    let series = chart.series();
    print!("  {:<8}", "");
    for entry in &series {
        print!("{:>12}", entry.label);
    }
    println!();
    for row in chart.rows() {
        print!("  {:<8}", row.status.as_keyword());
        for (_, count) in &row.counts {
            print!("{:>12}", count);
        }
        println!("   total {}", row.total());
    }
}
