//! Fapi CLI - FastAPI project management tool

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use fapi_core::runtime;
use fapi_core::{
    create_model, create_router, init_project, write_license, LicenseChoice, TemplateResolver,
};
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "fapi")]
#[command(about = "FastAPI Project Management Tool")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new FastAPI project
    Init(InitArgs),
    /// Create a new router in an existing project
    Router(AddonArgs),
    /// Create a new Pydantic model in an existing project
    Model(AddonArgs),
    /// Run the development server
    Run(RunArgs),
    /// Show version information
    Version,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Name of the project to create
    pub project_name: String,

    /// Skip git initialization
    #[arg(long = "no-git")]
    pub no_git: bool,
}

#[derive(Parser, Debug)]
pub struct AddonArgs {
    /// Name of the router/model to create
    pub name: String,

    /// Project directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Project directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let exit_code = match dispatch(args.command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            1
        }
    };

    let _ = console::Term::stderr().show_cursor();
    std::process::exit(exit_code);
}

async fn dispatch(command: Command) -> Result<i32> {
    match command {
        Command::Init(args) => {
            let resolver = TemplateResolver::from_env()?;
            run_init(&resolver, &args).await?;
            Ok(0)
        }
        Command::Router(args) => {
            let resolver = TemplateResolver::from_env()?;
            let file = create_router(&resolver, &args.project, &args.name).await?;
            println!("{} {}", "Created router:".green(), file.display());
            println!();
            println!("To use this router, add the following to your app/main.py:");
            println!("  from app.routers import {}", args.name);
            println!("  app.include_router({}.router)", args.name);
            Ok(0)
        }
        Command::Model(args) => {
            let resolver = TemplateResolver::from_env()?;
            let file = create_model(&resolver, &args.project, &args.name).await?;
            println!("{} {}", "Created model:".green(), file.display());
            println!();
            println!("To use this model, add the following import where needed:");
            println!(
                "  from app.models.{} import {}",
                args.name,
                fapi_core::templates::fallback::symbol_name(&args.name)
            );
            Ok(0)
        }
        Command::Run(args) => {
            let status = runtime::run_dev_server(&args.project).await?;
            Ok(status.code().unwrap_or(1))
        }
        Command::Version => {
            println!("Fapi - FastAPI Project Management Tool v{}", CLI_VERSION);
            Ok(0)
        }
    }
}

async fn run_init(resolver: &TemplateResolver, args: &InitArgs) -> Result<()> {
    let project_dir = PathBuf::from(&args.project_name);

    init_project(resolver, &project_dir).await?;

    // License selection is interactive and deliberately non-fatal from here
    // on: the project already exists on disk.
    match prompt_license() {
        Ok(LicenseChoice::None) => {}
        Ok(choice) => {
            let author = prompt_author()?;
            match write_license(resolver, &project_dir, choice, &args.project_name, &author).await {
                Ok(()) => println!(
                    "Created LICENSE with {} license",
                    choice.display_name()
                ),
                Err(e) => println!(
                    "{} failed to create license file: {}",
                    "Warning:".yellow(),
                    e
                ),
            }
        }
        Err(e) => println!("{} license selection skipped: {}", "Warning:".yellow(), e),
    }

    if !args.no_git {
        match runtime::init_repository(&project_dir).await {
            Ok(()) => println!("Initialized git repository"),
            Err(_) => println!("Git initialization skipped (git may not be installed)"),
        }
    }

    println!();
    println!(
        "{}",
        format!("Project '{}' created successfully!", args.project_name)
            .green()
            .bold()
    );

    println!();
    println!("Next steps:");
    println!("  cd {}", args.project_name);
    println!("  python -m venv venv");
    println!("  source venv/bin/activate  # On Windows: venv\\Scripts\\activate");
    println!("  pip install -r requirements.txt");
    println!("  cp .env.example .env  # Update with your configuration");
    println!("  fapi run");

    Ok(())
}

/// Numbered menu over the fixed license set; re-prompts until the input is
/// a valid key
fn prompt_license() -> Result<LicenseChoice> {
    println!();
    println!("Select a license for your project:");
    for (key, choice) in LicenseChoice::MENU {
        println!("  {}. {}", key, choice.display_name());
    }

    let input: String = cliclack::input("Enter your choice (1-6)")
        .validate(|value: &String| match LicenseChoice::from_key(value) {
            Some(_) => Ok(()),
            None => Err("Invalid choice. Enter a number from 1 to 6."),
        })
        .interact()?;

    LicenseChoice::from_key(&input)
        .ok_or_else(|| anyhow::anyhow!("invalid license choice '{}'", input))
}

fn prompt_author() -> Result<String> {
    let author: String = cliclack::input("Enter the author/organization name for the license")
        .interact()?;
    Ok(author)
}
