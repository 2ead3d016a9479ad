use anyhow::Result;
use clap::{Parser, Subcommand};
use etch::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "etch",
    version = "0.1.0",
    about = "A minimal content-addressable version store",
    long_about = "etch records snapshots of a directory as immutable, \
    content-addressed objects and lets you walk and restore them later. \
    It is a learning project in the spirit of git's plumbing, not a \
    replacement for it.",
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
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "hash-object",
        about = "Store a file as a blob object",
        long_about = "This command stores a file's content in the object store as a blob \
        and prints the resulting object id."
    )]
    HashObject {
        #[arg(index = 1, help = "The file to store")]
        file: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the raw payload of an object",
        long_about = "This command prints the raw payload of an object in the store, \
        whatever its kind. It requires the full object id."
    )]
    CatFile {
        #[arg(index = 1, help = "The object id to print")]
        oid: String,
    },
    #[command(
        name = "write-tree",
        about = "Snapshot a directory as a tree object",
        long_about = "This command recursively stores a directory as tree and blob objects \
        and prints the root tree's object id. Without an argument it snapshots the \
        repository root."
    )]
    WriteTree {
        #[arg(index = 1, help = "The directory to snapshot, relative to the repository root")]
        dir: Option<String>,
    },
    #[command(
        name = "read-tree",
        about = "Materialize a tree object into the working area",
        long_about = "This command clears the working area and writes out the files recorded \
        under the given tree object. HEAD is not touched."
    )]
    ReadTree {
        #[arg(index = 1, help = "The tree object id")]
        oid: String,
    },
    #[command(
        name = "commit",
        about = "Record the working area as a new commit",
        long_about = "This command snapshots the working area, records it as a commit on top \
        of the current HEAD and prints the new commit's object id."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command walks the parent chain from HEAD, or from the given commit, \
        and prints each commit, newest first."
    )]
    Log {
        #[arg(index = 1, help = "Start from this commit instead of HEAD")]
        oid: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Restore a commit's snapshot into the working area",
        long_about = "This command replaces the working area with the snapshot recorded by the \
        given commit and moves HEAD to it. If the attempt fails, the previous state is \
        restored."
    )]
    Checkout {
        #[arg(index = 1, help = "The commit object id")]
        oid: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => {
                    std::fs::create_dir_all(path)?;
                    Repository::new(path, Box::new(std::io::stdout()))?
                }
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
                }
            };

            repository.init()?
        }
        Commands::HashObject { file } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.hash_object(file)?
        }
        Commands::CatFile { oid } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.cat_file(oid)?
        }
        Commands::WriteTree { dir } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.write_tree(dir.as_deref())?
        }
        Commands::ReadTree { oid } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.read_tree(oid)?
        }
        Commands::Commit { message } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.commit(message.as_str())?
        }
        Commands::Log { oid } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.log(oid.as_deref())?
        }
        Commands::Checkout { oid } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.checkout(oid)?
        }
    }

    Ok(())
}
