use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "amani",
    about = "Amani content engine — terminal admin panel",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the local content cache
    #[arg(long, global = true, default_value = ".amani")]
    pub data_dir: PathBuf,

    /// Backend configuration file (TOML); omit to run local-only
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the current document and sync status
    Show,
    /// Update the hero block
    Hero(HeroArgs),
    /// Manage programs
    Program {
        #[command(subcommand)]
        action: ProgramAction,
    },
    /// Manage child profiles
    Child {
        #[command(subcommand)]
        action: ChildAction,
    },
    /// Manage stories
    Story {
        #[command(subcommand)]
        action: StoryAction,
    },
    /// Manage the media gallery
    Gallery {
        #[command(subcommand)]
        action: GalleryAction,
    },
}

#[derive(Args)]
pub struct HeroArgs {
    #[arg(long)]
    pub headline: Option<String>,
    #[arg(long)]
    pub subheadline: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Subcommand)]
pub enum ProgramAction {
    /// List programs
    List,
    /// Add a program
    Add(ProgramAddArgs),
    /// Remove a program by id
    Remove { id: String },
}

#[derive(Args)]
pub struct ProgramAddArgs {
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub image: String,
    /// Short impact line shown on the program card
    #[arg(long, default_value = "")]
    pub impact: String,
    /// Mark the media reference as a video
    #[arg(long)]
    pub video: bool,
}

#[derive(Subcommand)]
pub enum ChildAction {
    /// List child profiles
    List,
    /// Add a child profile
    Add(ChildAddArgs),
    /// Remove a child profile by id
    Remove { id: String },
}

#[derive(Args)]
pub struct ChildAddArgs {
    pub name: String,
    #[arg(long)]
    pub age: u8,
    #[arg(long, default_value = "")]
    pub dream: String,
    #[arg(long, default_value = "")]
    pub bio: String,
    #[arg(long, default_value = "")]
    pub image: String,
    /// Profile only; the child is not seeking a sponsor
    #[arg(long)]
    pub sponsored: bool,
}

#[derive(Subcommand)]
pub enum StoryAction {
    /// List stories
    List,
    /// Add a story dated today
    Add(StoryAddArgs),
    /// Remove a story by id
    Remove { id: String },
}

#[derive(Args)]
pub struct StoryAddArgs {
    pub title: String,
    #[arg(long, default_value = "Amani Staff")]
    pub author: String,
    #[arg(long, default_value = "")]
    pub excerpt: String,
    #[arg(long, default_value = "")]
    pub body: String,
    #[arg(long, default_value = "")]
    pub image: String,
    #[arg(long, value_enum, default_value_t = StoryCategoryArg::Community)]
    pub category: StoryCategoryArg,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum StoryCategoryArg {
    Education,
    Community,
    SuccessStory,
}

#[derive(Subcommand)]
pub enum GalleryAction {
    /// List gallery entries
    List,
    /// Upload a local file into the gallery
    Add(GalleryAddArgs),
    /// Remove a gallery entry by id
    Remove { id: String },
}

#[derive(Args)]
pub struct GalleryAddArgs {
    /// Path of the file to upload
    pub file: PathBuf,
    /// Gallery category: education, community, welfare, or general
    #[arg(long, default_value = "general")]
    pub category: String,
}
