use atelier::api::{CmdMessage, CmdResult, MessageLevel, WorkspaceApi};
use atelier::error::Result;
use atelier::model::{Comment, FileEntry, Version};
use atelier::store::{JsonBackend, ProjectStore};
use atelier::tree::TreeNode;
use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use console::Style;
use directories::ProjectDirs;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, CommentCommands, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: WorkspaceApi<JsonBackend>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Create { path, content }) => {
            handle_create(&mut ctx, &path, content.as_deref().unwrap_or(""))
        }
        Some(Commands::List { filter, sort }) => handle_list(&ctx, filter.as_deref(), &sort),
        Some(Commands::View { path }) => handle_view(&ctx, &path),
        Some(Commands::Write { path, content }) => handle_write(&mut ctx, &path, content),
        Some(Commands::Delete { path }) => handle_delete(&mut ctx, &path),
        Some(Commands::Rename { old_path, new_path }) => {
            handle_rename(&mut ctx, &old_path, &new_path)
        }
        Some(Commands::Open { path }) => handle_open(&mut ctx, &path),
        Some(Commands::Close { path }) => handle_close(&mut ctx, &path),
        Some(Commands::Tabs) => handle_tabs(&ctx),
        Some(Commands::History { path }) => handle_history(&ctx, &path),
        Some(Commands::Diff { path, older, newer }) => handle_diff(&ctx, &path, older, newer),
        Some(Commands::Comment(cmd)) => handle_comment(&mut ctx, cmd),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        None => handle_list(&ctx, None, "name"),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let root = if let Some(dir) = &cli.dir {
        PathBuf::from(dir)
    } else if cli.global {
        let proj_dirs =
            ProjectDirs::from("com", "atelier", "atelier").expect("Could not determine data dir");
        proj_dirs.data_dir().to_path_buf()
    } else {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        cwd.join(".atelier")
    };

    let store = ProjectStore::with_backend(JsonBackend::new(root));
    AppContext {
        api: WorkspaceApi::new(store),
    }
}

fn handle_create(ctx: &mut AppContext, path: &str, content: &str) -> Result<()> {
    let result = ctx.api.create_file(path, content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: Option<&str>, sort: &str) -> Result<()> {
    let result = ctx.api.list_tree(filter, sort)?;
    print_tree(&result.tree, result.active_file.as_deref());
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, path: &str) -> Result<()> {
    let result = ctx.api.view_file(path)?;
    for entry in &result.listed_files {
        print_file(entry);
    }
    Ok(())
}

fn handle_write(ctx: &mut AppContext, path: &str, content: Option<String>) -> Result<()> {
    let content = match content {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = ctx.api.write_file(path, &content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, path: &str) -> Result<()> {
    let result = ctx.api.delete_file(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, old_path: &str, new_path: &str) -> Result<()> {
    let result = ctx.api.rename_file(old_path, new_path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_open(ctx: &mut AppContext, path: &str) -> Result<()> {
    let result = ctx.api.open_file(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_close(ctx: &mut AppContext, path: &str) -> Result<()> {
    let result = ctx.api.close_tab(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_tabs(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.tabs()?;
    print_tabs(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_history(ctx: &AppContext, path: &str) -> Result<()> {
    let result = ctx.api.history(path)?;
    print_versions(&result.versions);
    print_messages(&result.messages);
    Ok(())
}

fn handle_diff(
    ctx: &AppContext,
    path: &str,
    older: Option<usize>,
    newer: Option<usize>,
) -> Result<()> {
    let result = ctx.api.diff(path, older, newer)?;
    print_diff(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_comment(ctx: &mut AppContext, cmd: CommentCommands) -> Result<()> {
    let result = match cmd {
        CommentCommands::Add {
            path,
            line,
            content,
        } => ctx.api.add_comment(&path, line, &content)?,
        CommentCommands::Resolve { path, comment_id } => {
            ctx.api.resolve_comment(&path, &comment_id)?
        }
        CommentCommands::List { path } => {
            let result = ctx.api.comments(&path)?;
            print_comments(&result.comments);
            result
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<String>) -> Result<()> {
    let result = ctx.api.export(output.map(PathBuf::from))?;
    print_messages(&result.messages);
    Ok(())
}

// --- Rendering ---

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const LANG_WIDTH: usize = 12;

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_tree(nodes: &[TreeNode], active: Option<&str>) {
    print_tree_level(nodes, 0, active);
}

fn print_tree_level(nodes: &[TreeNode], depth: usize, active: Option<&str>) {
    for node in nodes {
        let indent = "  ".repeat(depth);
        match node {
            TreeNode::Directory { name, children, .. } => {
                println!("{}  {}", indent, format!("{}/", name).blue().bold());
                print_tree_level(children, depth + 1, active);
            }
            TreeNode::File {
                name,
                path,
                language,
                modified_at,
            } => {
                let is_active = active == Some(path.as_str());
                let marker = if is_active { "» " } else { "  " };
                let label = format!("{}{}{}", indent, marker, name);

                let fixed = LANG_WIDTH + 1 + TIME_WIDTH;
                let padding = LINE_WIDTH.saturating_sub(label.width() + fixed);

                let label_colored = if is_active {
                    label.green().bold()
                } else {
                    label.normal()
                };
                let lang = format!("{:>width$}", language, width = LANG_WIDTH);

                println!(
                    "{}{}{} {}",
                    label_colored,
                    " ".repeat(padding),
                    lang.dimmed(),
                    format_time_ago(*modified_at).dimmed()
                );
            }
        }
    }
}

fn print_file(entry: &FileEntry) {
    let header = Style::new().bold();
    let meta = Style::new().dim();
    println!(
        "{} {}",
        header.apply_to(entry.name()),
        meta.apply_to(format!("({}, {})", entry.path, entry.language))
    );
    println!("--------------------------------");
    println!("{}", entry.content);
}

fn print_tabs(result: &CmdResult) {
    for tab in &result.open_tabs {
        if result.active_file.as_deref() == Some(tab.as_str()) {
            println!("{} {}", "»".green(), tab.green().bold());
        } else {
            println!("  {}", tab);
        }
    }
}

fn print_versions(versions: &[Version]) {
    for (i, version) in versions.iter().enumerate() {
        let pos = format!("{}.", i + 1);
        println!(
            "{} {} {} {}",
            pos.yellow(),
            format_time_ago(version.timestamp).dimmed(),
            version.author_name.bold(),
            version.changes_summary
        );
    }
}

fn print_comments(comments: &[Comment]) {
    for comment in comments {
        let line_tag = format!("L{}", comment.line);
        let body = format!(
            "{} {}: {} {}",
            line_tag.yellow(),
            comment.author_name.bold(),
            comment.content,
            format!("({})", comment.id).dimmed()
        );
        if comment.resolved {
            println!("{} {}", body, "[resolved]".green());
        } else {
            println!("{}", body);
        }
    }
}

fn print_diff(result: &CmdResult) {
    use atelier::diff::DiffKind;
    for line in &result.diff {
        match line.kind {
            DiffKind::Added => println!("{}", format!("+ {}", line.content).green()),
            DiffKind::Removed => println!("{}", format!("- {}", line.content).red()),
            DiffKind::Unchanged => println!("  {}", line.content),
        }
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
