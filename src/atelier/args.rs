use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "atelier")]
#[command(about = "Project file store with tabs, version history, and comments", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the shared global workspace instead of ./.atelier
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Override the workspace directory
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new file (becomes the active tab)
    #[command(alias = "n")]
    Create {
        /// File path, e.g. src/App.tsx
        path: String,

        /// Initial content (defaults to empty)
        #[arg(required = false)]
        content: Option<String>,
    },

    /// List files as a tree
    #[command(alias = "ls")]
    List {
        /// Only show paths containing this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,

        /// Sort siblings by: name, modified, or type
        #[arg(short, long, default_value = "name")]
        sort: String,
    },

    /// Print a file's content
    #[command(alias = "v")]
    View { path: String },

    /// Write new content to a file (from argument or stdin)
    #[command(alias = "w")]
    Write {
        path: String,

        /// New content; omit to read from stdin
        #[arg(required = false)]
        content: Option<String>,
    },

    /// Delete a file
    #[command(alias = "rm")]
    Delete { path: String },

    /// Rename or move a file
    #[command(alias = "mv")]
    Rename { old_path: String, new_path: String },

    /// Make a file the active tab (opens it if needed)
    #[command(alias = "o")]
    Open { path: String },

    /// Close a tab (the file itself is kept)
    Close { path: String },

    /// Show open tabs and the active file
    Tabs,

    /// Show a file's version history
    #[command(alias = "h")]
    History { path: String },

    /// Diff two versions of a file
    Diff {
        path: String,

        /// Older version position (1-based; defaults to the one before newer)
        #[arg(long)]
        older: Option<usize>,

        /// Newer version position (1-based; defaults to the latest)
        #[arg(long)]
        newer: Option<usize>,
    },

    /// Manage line comments
    #[command(subcommand)]
    Comment(CommentCommands),

    /// Bundle all files into a tar.gz archive
    Export {
        /// Output path (defaults to a timestamped name)
        #[arg(required = false)]
        output: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// Add a comment on a line of a file
    Add {
        path: String,
        /// 1-based line number
        line: usize,
        content: String,
    },

    /// Toggle a comment's resolved state
    Resolve { path: String, comment_id: String },

    /// List a file's comments
    List { path: String },
}
