use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use gradeportal_cli::report;
use gradeportal_core::{PermissionSet, Role};
use gradeportal_observability::init_basic_console_logging;

#[derive(Parser)]
#[command(name = "gradeportal-cli")]
#[command(about = "Grade portal CLI - inspect routing and navigation decisions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path for a principal
    Resolve {
        /// Role of the principal
        #[arg(short = 'r', long, default_value = "student")]
        role: Role,

        /// Comma-separated permission tokens
        #[arg(short = 'p', long, default_value = "")]
        permissions: PermissionSet,

        /// Declared department
        #[arg(short = 'd', long)]
        department: Option<String>,

        /// Path to resolve, e.g. /student/grades
        #[arg(long)]
        path: String,
    },
    /// Print the dashboard home and menu links for a principal
    Links {
        /// Comma-separated permission tokens
        #[arg(short = 'p', long)]
        permissions: PermissionSet,

        /// Role of the principal
        #[arg(short = 'r', long, default_value = "student")]
        role: Role,

        /// Declared department
        #[arg(short = 'd', long)]
        department: Option<String>,
    },
    /// Print the route table
    Routes,
}

fn main() {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Resolve {
            role,
            permissions,
            department,
            path,
        } => report::resolve(&report::principal(role, permissions, department), &path),
        Commands::Links {
            permissions,
            role,
            department,
        } => Ok(report::links(&report::principal(role, permissions, department))),
        Commands::Routes => Ok(report::routes()),
    };

    match output {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
