use clap::Subcommand;

/// Note commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NoteCommands {
    List { task: i64 },
    Add { task: i64, content: String },
    Delete { task: i64, note: i64 },
}

/// Comment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CommentCommands {
    List { task: i64 },
    Add { task: i64, content: String },
    Delete { task: i64, comment: i64 },
}
