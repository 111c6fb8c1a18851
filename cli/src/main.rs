//! posts-cli entry point.
//!
//! Loads the current posts through a `PostStore`, applies one command through
//! the same store, and prints the resulting state.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use posts_core::{
    ClientConfig, Post, PostForm, PostId, PostStore, PostsState, RemoteClient, RequestStatus,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "posts-cli")]
#[command(version)]
#[command(about = "Create, list, edit and delete posts on a REST posts service", long_about = None)]
struct Args {
    /// Base URL of the posts service [default: $POSTS_API_URL]
    #[arg(long)]
    base_url: Option<String>,

    /// How many posts a load fetches [default: $POSTS_LIST_LIMIT]
    #[arg(long)]
    limit: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the loaded posts
    List,

    /// Create a post
    Create {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        body: String,
        #[arg(short, long, default_value = "1")]
        user_id: u32,
    },

    /// Replace an existing post
    Update {
        id: PostId,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        body: Option<String>,
        #[arg(short, long)]
        user_id: Option<u32>,
    },

    /// Delete a post
    Delete { id: PostId },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = resolve_config(&args, |key| std::env::var(key).ok());
    tracing::debug!(base_url = %config.base_url, limit = config.list_limit, "using posts service");

    let store = PostStore::new(RemoteClient::from_config(&config), config.list_limit);
    // A failed load is recorded in the state and shown below.
    let _ = store.load().await;

    match args.command {
        Commands::List => {
            let state = store.state();
            print_state(&state);
            return ensure_loaded(&state);
        }
        Commands::Create {
            title,
            body,
            user_id,
        } => {
            let mut form = PostForm::new();
            form.title = title;
            form.body = body;
            form.user_id = user_id;
            let post = form.submit(&store).await.context("creating post")?;
            println!("created post #{}", post.id);
        }
        Commands::Update {
            id,
            title,
            body,
            user_id,
        } => {
            let state = store.state();
            let loaded = state.items.iter().find(|post| post.id == id);
            let mut form = update_form(
                id,
                loaded,
                Edits {
                    title,
                    body,
                    user_id,
                },
                state.error.as_deref(),
            )?;
            let post = form.submit(&store).await.context("updating post")?;
            println!("updated post #{}", post.id);
        }
        Commands::Delete { id } => {
            store
                .delete(id)
                .await
                .with_context(|| format!("deleting post #{id}"))?;
            println!("deleted post #{id}");
        }
    }

    print_state(&store.state());
    Ok(())
}

/// Turn a failed load into an error so the process exits non-zero.
fn ensure_loaded(state: &PostsState) -> Result<()> {
    if state.status == RequestStatus::Failed {
        bail!(
            "loading posts failed: {}",
            state.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}

/// Environment first (with per-field fallback), then command-line flags.
fn resolve_config(args: &Args, lookup: impl Fn(&str) -> Option<String>) -> ClientConfig {
    let mut config = ClientConfig::from_lookup(lookup);
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(limit) = args.limit {
        config.list_limit = limit;
    }
    config
}

/// Field overrides given on the command line for `update`.
struct Edits {
    title: Option<String>,
    body: Option<String>,
    user_id: Option<u32>,
}

/// Build the edit form for post `id`.
///
/// A loaded post supplies the fields the flags leave out. A post outside the
/// loaded page needs title and body on the command line; the server decides
/// whether the id exists.
fn update_form(
    id: PostId,
    loaded: Option<&Post>,
    edits: Edits,
    load_error: Option<&str>,
) -> Result<PostForm> {
    let current = match (loaded, edits.title.clone(), edits.body.clone()) {
        (Some(post), _, _) => post.clone(),
        (None, Some(title), Some(body)) => Post {
            id,
            title,
            body,
            user_id: 1,
        },
        (None, _, _) => match load_error {
            Some(err) => bail!(
                "post #{id} is not loaded (loading posts failed: {err}); pass --title and --body"
            ),
            None => bail!("post #{id} is not among the loaded posts; pass --title and --body"),
        },
    };

    let mut form = PostForm::new();
    form.edit(&current);
    if let Some(title) = edits.title {
        form.title = title;
    }
    if let Some(body) = edits.body {
        form.body = body;
    }
    if let Some(user_id) = edits.user_id {
        form.user_id = user_id;
    }
    Ok(form)
}

fn print_state(state: &PostsState) {
    println!("status: {} | total: {}", state.status.as_str(), state.items.len());
    if let Some(error) = &state.error {
        println!("error: {error}");
    }
    for post in &state.items {
        println!("#{:<4} user {}  {}", post.id, post.user_id, post.title);
        if !post.body.is_empty() {
            println!("      {}", post.body.replace('\n', "\n      "));
        }
    }
}
