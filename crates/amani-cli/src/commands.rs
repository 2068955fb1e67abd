use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use tracing::{info, warn};

use amani_sdk::{ContentEditor, InlineUploader, MediaBlob, MediaUploader};
use amani_store::{BackendConfig, FileCache};
use amani_sync::{ContentStore, WriteOutcome};
use amani_types::{
    ChildProfile, EntityId, Hero, MediaCategory, MediaKind, Program, SectionPatch, Story,
    StoryCategory,
};

use crate::cli::*;

/// Base URL the inline uploader mints asset URLs under.
const MEDIA_BASE_URL: &str = "https://media.amani-initiative.org";

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let editor = open_session(&cli)?;
    match cli.command {
        Command::Show => cmd_show(&editor),
        Command::Hero(args) => cmd_hero(&editor, args).await,
        Command::Program { action } => match action {
            ProgramAction::List => cmd_program_list(&editor),
            ProgramAction::Add(args) => cmd_program_add(&editor, args).await,
            ProgramAction::Remove { id } => cmd_program_remove(&editor, id).await,
        },
        Command::Child { action } => match action {
            ChildAction::List => cmd_child_list(&editor),
            ChildAction::Add(args) => cmd_child_add(&editor, args).await,
            ChildAction::Remove { id } => cmd_child_remove(&editor, id).await,
        },
        Command::Story { action } => match action {
            StoryAction::List => cmd_story_list(&editor),
            StoryAction::Add(args) => cmd_story_add(&editor, args).await,
            StoryAction::Remove { id } => cmd_story_remove(&editor, id).await,
        },
        Command::Gallery { action } => match action {
            GalleryAction::List => cmd_gallery_list(&editor),
            GalleryAction::Add(args) => cmd_gallery_add(&editor, args).await,
            GalleryAction::Remove { id } => cmd_gallery_remove(&editor, id).await,
        },
    }
}

fn open_session(cli: &Cli) -> anyhow::Result<ContentEditor> {
    let cache = Arc::new(FileCache::open(&cli.data_dir)?);

    let config = match &cli.config {
        Some(path) => BackendConfig::from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => BackendConfig::default(),
    };
    if config.is_configured() {
        // Hosted drivers are deployment-specific; this binary ships none
        // and edits the local tier, which the site app syncs from.
        warn!(project = %config.project_id, "backend configured but no hosted driver in this build; editing locally");
    } else {
        info!("no backend configured; editing locally");
    }

    let store = ContentStore::open(cache, None);
    Ok(ContentEditor::new(Arc::new(store)))
}

fn report(outcome: &WriteOutcome) {
    match outcome {
        WriteOutcome::Synced => println!("{} synced to backend", "✓".green().bold()),
        WriteOutcome::CacheOnly => println!("{} saved locally", "✓".green().bold()),
        WriteOutcome::RemoteFailed { reason } => println!(
            "{} saved locally; backend write failed: {}",
            "!".yellow().bold(),
            reason
        ),
    }
}

fn cmd_show(editor: &ContentEditor) -> anyhow::Result<()> {
    let store = editor.store();
    let content = store.content();
    println!("Phase: {}", store.phase().to_string().cyan());
    println!("\n{}", content.hero.headline.bold());
    println!("  {}", content.hero.subheadline);
    println!("\nSections:");
    println!("  programs: {}", content.programs.len().to_string().bold());
    println!("  children: {}", content.children.len().to_string().bold());
    println!("  stories:  {}", content.stories.len().to_string().bold());
    println!("  gallery:  {}", content.gallery.len().to_string().bold());
    println!("\nContact: {} | {}", content.contact.email, content.contact.phone);
    Ok(())
}

async fn cmd_hero(editor: &ContentEditor, args: HeroArgs) -> anyhow::Result<()> {
    let current = editor.store().content().hero;
    let hero = Hero {
        headline: args.headline.unwrap_or(current.headline),
        subheadline: args.subheadline.unwrap_or(current.subheadline),
        hero_image: args.image.unwrap_or(current.hero_image),
    };
    let outcome = editor
        .store()
        .update_section(SectionPatch::Hero(hero))
        .await?;
    report(&outcome);
    Ok(())
}

// ---- Programs ----

fn cmd_program_list(editor: &ContentEditor) -> anyhow::Result<()> {
    for program in editor.store().content().programs {
        println!(
            "{}  {}  {}",
            program.id.to_string().yellow(),
            program.title.bold(),
            program.impact_stat.dimmed()
        );
    }
    Ok(())
}

async fn cmd_program_add(editor: &ContentEditor, args: ProgramAddArgs) -> anyhow::Result<()> {
    let result = editor
        .upsert_program(Program {
            id: EntityId::nil(),
            title: args.title,
            description: args.description,
            image: args.image,
            media_kind: if args.video {
                MediaKind::Video
            } else {
                MediaKind::Image
            },
            impact_stat: args.impact,
        })
        .await?;
    println!("Added program {}", result.id.to_string().yellow());
    report(&result.outcome);
    Ok(())
}

async fn cmd_program_remove(editor: &ContentEditor, id: String) -> anyhow::Result<()> {
    let outcome = editor.delete_program(&EntityId::new(id)).await?;
    report(&outcome);
    Ok(())
}

// ---- Children ----

fn cmd_child_list(editor: &ContentEditor) -> anyhow::Result<()> {
    for child in editor.store().content().children {
        let badge = if child.needs_sponsorship {
            "needs sponsor".red().to_string()
        } else {
            "sponsored".green().to_string()
        };
        println!(
            "{}  {} ({})  {}",
            child.id.to_string().yellow(),
            child.name.bold(),
            child.age,
            badge
        );
    }
    Ok(())
}

async fn cmd_child_add(editor: &ContentEditor, args: ChildAddArgs) -> anyhow::Result<()> {
    let result = editor
        .upsert_child(ChildProfile {
            id: EntityId::nil(),
            name: args.name,
            age: args.age,
            dream: args.dream,
            bio: args.bio,
            image: args.image,
            needs_sponsorship: !args.sponsored,
        })
        .await?;
    println!("Added child profile {}", result.id.to_string().yellow());
    report(&result.outcome);
    Ok(())
}

async fn cmd_child_remove(editor: &ContentEditor, id: String) -> anyhow::Result<()> {
    let outcome = editor.delete_child(&EntityId::new(id)).await?;
    report(&outcome);
    Ok(())
}

// ---- Stories ----

fn cmd_story_list(editor: &ContentEditor) -> anyhow::Result<()> {
    for story in editor.store().content().stories {
        println!(
            "{}  {}  {}  {}",
            story.id.to_string().yellow(),
            story.date.to_string().dimmed(),
            story.title.bold(),
            story.author.dimmed()
        );
    }
    Ok(())
}

async fn cmd_story_add(editor: &ContentEditor, args: StoryAddArgs) -> anyhow::Result<()> {
    let category = match args.category {
        StoryCategoryArg::Education => StoryCategory::Education,
        StoryCategoryArg::Community => StoryCategory::Community,
        StoryCategoryArg::SuccessStory => StoryCategory::SuccessStory,
    };
    let result = editor
        .upsert_story(Story {
            id: EntityId::nil(),
            title: args.title,
            author: args.author,
            date: chrono::Utc::now().date_naive(),
            excerpt: args.excerpt,
            body: args.body,
            image: args.image,
            media_kind: MediaKind::Image,
            category,
        })
        .await?;
    println!("Added story {}", result.id.to_string().yellow());
    report(&result.outcome);
    Ok(())
}

async fn cmd_story_remove(editor: &ContentEditor, id: String) -> anyhow::Result<()> {
    let outcome = editor.delete_story(&EntityId::new(id)).await?;
    report(&outcome);
    Ok(())
}

// ---- Gallery ----

fn cmd_gallery_list(editor: &ContentEditor) -> anyhow::Result<()> {
    for item in editor.store().content().gallery {
        println!(
            "{}  {}  {}  {}",
            item.id.to_string().yellow(),
            item.category.to_string().cyan(),
            item.kind,
            item.url.dimmed()
        );
    }
    Ok(())
}

async fn cmd_gallery_add(editor: &ContentEditor, args: GalleryAddArgs) -> anyhow::Result<()> {
    let category: MediaCategory = args
        .category
        .parse()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let file_name = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .context("file path has no name")?
        .to_string();
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let content_type = content_type_for(&file_name);

    let uploader = InlineUploader::new(MEDIA_BASE_URL);
    let uploaded = uploader
        .upload(MediaBlob {
            file_name,
            content_type: content_type.into(),
            bytes,
        })
        .await?;

    let result = editor.add_gallery_item(uploaded, category).await?;
    println!("Added gallery item {}", result.id.to_string().yellow());
    report(&result.outcome);
    Ok(())
}

async fn cmd_gallery_remove(editor: &ContentEditor, id: String) -> anyhow::Result<()> {
    let outcome = editor.delete_gallery_item(&EntityId::new(id)).await?;
    report(&outcome);
    Ok(())
}

fn content_type_for(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next() {
        Some("mp4") | Some("mov") | Some("webm") => "video/mp4",
        Some("png") => "image/png",
        _ => "image/jpeg",
    }
}
