//! Interactive picker: shows random movies from a category and lets the user
//! keep the ones they like.
//!
//! ```text
//! $ pick 1990s_comedy_films
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use movie_picker::{
    api::AppState,
    config::Config,
    error::AppError,
    models::CategoryName,
    services::{fetch_titles, MoviePicker},
};

#[derive(Parser, Debug)]
#[command(name = "pick")]
#[command(version, about = "Pick random movies from a Wikipedia category")]
struct Args {
    /// Wikipedia category to pick from, e.g. 1990s_comedy_films (defaults to DEFAULT_CATEGORY)
    category: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "movie_picker=warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    let category = args
        .category
        .unwrap_or_else(|| config.default_category.clone());
    let category = CategoryName::new(category)?;

    let state = AppState::from_config(&config)?;
    let titles = fetch_titles(state.categories.as_ref(), &category)
        .await
        .with_context(|| format!("Failed to fetch category {}", category))?;
    let mut picker = MoviePicker::new(titles, state.metadata.clone());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while picker.accepted().len() < config.picks_per_session {
        let movie = match picker.draw_next().await {
            Ok(movie) => movie,
            Err(AppError::Exhausted) => {
                println!("No more movies in {}.", category);
                break;
            }
            Err(e) => return Err(e.into()),
        };

        println!("{}", movie);
        println!();
        print!("Add movie to your list? ");
        io::stdout().flush()?;

        let answer = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if answer.trim().to_lowercase().starts_with('y') {
            picker.accept(movie);
        }
    }

    println!("\n== Your movies ==\n");
    for title in picker.accepted_titles() {
        println!("{}", title);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_category_argument() {
        let args = Args::try_parse_from(["pick", "1990s_comedy_films"]).unwrap();
        assert_eq!(args.category.as_deref(), Some("1990s_comedy_films"));
    }

    #[test]
    fn test_category_is_optional() {
        let args = Args::try_parse_from(["pick"]).unwrap();
        assert_eq!(args.category, None);
    }

    #[test]
    fn test_help_is_not_a_category() {
        let err = Args::try_parse_from(["pick", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
