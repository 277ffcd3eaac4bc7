//! Diagnostic CLI for the LearnHub API client.
//!
//! Exercises each resource accessor against a running backend and prints the
//! result as JSON. Intended for poking at an environment, not for end users.

use std::error::Error;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use learnhub_client::api::client::ApiClient;
use learnhub_client::api::{certificates, favorites, placements, settings};
use learnhub_client::storage::KeychainStore;

#[derive(Parser, Debug)]
#[command(name = "learnhub", about = "LearnHub backend API diagnostics")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch certificates derived from completed courses
    Certificates,
    /// Fetch current job placements
    Placements,
    /// Fetch account settings
    Settings,
    /// List a user's favorite courses
    Favorites { user_id: String },
    /// Check whether a course is favorited
    Check { user_id: String, course_id: u64 },
    /// Toggle a favorite relation
    Toggle {
        user_id: String,
        course_id: u64,
        /// Current state as the caller believes it
        #[arg(long)]
        favorited: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let args = Args::parse();

    // Token and display name come from the keychain; sign-in is out of scope
    // here, so populate them with the platform keychain tooling if needed.
    let store = Arc::new(KeychainStore::new());
    let client = ApiClient::from_env(store);

    match args.command {
        Command::Certificates => {
            let certs = certificates::get_user_certificates(&client).await?;
            println!("{}", serde_json::to_string_pretty(&certs)?);
        }
        Command::Placements => {
            let jobs = placements::get_placement_jobs(&client).await?;
            println!("{}", serde_json::to_string_pretty(&jobs)?);
        }
        Command::Settings => {
            let current = settings::get_user_settings(&client).await?;
            println!("{}", serde_json::to_string_pretty(&current)?);
        }
        Command::Favorites { user_id } => {
            let list = favorites::get_user_favorites(&client, &user_id).await?;
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        Command::Check { user_id, course_id } => {
            let favorited = favorites::check_is_favorite(&client, &user_id, course_id).await?;
            println!("{}", favorited);
        }
        Command::Toggle {
            user_id,
            course_id,
            favorited,
        } => {
            let outcome =
                favorites::toggle_favorite(&client, &user_id, course_id, favorited).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}
