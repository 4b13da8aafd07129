use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use vcs::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "vcs",
    version = "0.1.0",
    about = "A minimal local version-control engine",
    long_about = "A minimal local version-control engine: it snapshots a working \
    directory into immutable images, tracks branch pointers over the commit graph, \
    and reconciles divergent branches through a best-effort merge.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .vcs storage layout in the current \
        directory or at the specified path and activates the default branch."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Add a file or directory to the staging area",
        long_about = "This command mirrors a working-tree file or directory into the \
        staging area, replacing any previously staged version."
    )]
    Add {
        #[arg(index = 1, help = "The working-tree path to stage")]
        path: String,
    },
    #[command(
        name = "commit",
        about = "Create an image of the files in the staging area",
        long_about = "This command snapshots the staging area into a new immutable \
        image and advances HEAD and the active branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
    },
    #[command(
        name = "status",
        about = "Print the commitment status of files",
        long_about = "This command classifies every file as staged, unstaged, \
        untracked, or removed."
    )]
    Status,
    #[command(
        name = "checkout",
        about = "Roll back to a previous image",
        long_about = "This command restores a stored image into the working tree and \
        the staging area. The target is a branch name or a commit id."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch name or commit id to check out")]
        target: String,
    },
    #[command(
        name = "rm",
        about = "Remove a file from the working tree and the staging area"
    )]
    Rm {
        #[arg(index = 1, help = "The working-tree path to remove")]
        path: String,
    },
    #[command(
        name = "branch",
        about = "Label the current commit with a new branch name"
    )]
    Branch {
        #[arg(index = 1, help = "The name of the new branch")]
        name: String,
    },
    #[command(
        name = "merge",
        about = "Merge another branch into the current one",
        long_about = "This command reconciles the staging area with the changes the \
        other branch made since the common ancestor, then takes a merge commit with \
        both tips as parents."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge into the current one")]
        branch: String,
    },
    #[command(
        name = "graph",
        about = "Print the commit inheritance graph",
        long_about = "This command prints the ancestry reachable from HEAD as \
        adjacency lines (commit -> parents) plus branch labels."
    )]
    Graph {
        #[arg(long, help = "Include images not reachable from HEAD")]
        all: bool,
    },
}

fn discover_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::discover(&pwd, Box::new(std::io::stdout()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(Path::new(path), Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd, Box::new(std::io::stdout()))?
                }
            };

            repository.init().await?
        }
        Commands::Add { path } => discover_repository()?.add(path).await?,
        Commands::Commit { message } => discover_repository()?.commit(message.as_deref()).await?,
        Commands::Status => discover_repository()?.status().await?,
        Commands::Checkout { target } => discover_repository()?.checkout(target).await?,
        Commands::Rm { path } => discover_repository()?.rm(path).await?,
        Commands::Branch { name } => discover_repository()?.branch(name)?,
        Commands::Merge { branch } => discover_repository()?.merge(branch).await?,
        Commands::Graph { all } => discover_repository()?.graph(*all)?,
    }

    Ok(())
}
