use clap::{Parser, Subcommand};
use emcode_core::{Determination, EmCodingService, EmLevel, ResolutionMode};

#[derive(Parser)]
#[command(name = "emcode")]
#[command(about = "EMCode E/M coding CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Determine the E/M level for three complexity inputs
    Calculate {
        /// History complexity (problem-focused, expanded-problem-focused,
        /// detailed, comprehensive)
        history: String,
        /// Exam complexity (same levels as history)
        exam: String,
        /// MDM complexity (straightforward, low, moderate, high)
        mdm: String,
        /// Reject unrecognised input instead of coercing to the lowest rank
        #[arg(long)]
        strict: bool,
        /// Print the determination as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the E/M reference table
    Levels,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Calculate {
            history,
            exam,
            mdm,
            strict,
            json,
        }) => {
            let mode = if strict {
                ResolutionMode::Strict
            } else {
                ResolutionMode::Lenient
            };
            let service = EmCodingService::new();
            match service.calculate(&history, &exam, &mdm, mode) {
                Ok(determination) => print_determination(&determination, json),
                Err(e) => {
                    eprintln!("Error determining E/M level: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Levels) => {
            for level in EmLevel::ALL {
                println!("{} ({}): {}", level.code(), level.name(), level.description());
            }
        }
        None => {
            println!("emcode: try `emcode calculate <history> <exam> <mdm>` or `emcode levels`");
        }
    }

    Ok(())
}

fn print_determination(determination: &Determination, json: bool) {
    if json {
        let value = serde_json::json!({
            "code": determination.level.code(),
            "name": determination.level.name(),
            "description": determination.level.description(),
            "reasoning": determination.reasoning,
            "ranks": {
                "history": determination.ranks.history,
                "exam": determination.ranks.exam,
                "mdm": determination.ranks.mdm,
            },
        });
        println!("{}", value);
    } else {
        println!(
            "{} ({}): {}",
            determination.level.code(),
            determination.level.name(),
            determination.level.description()
        );
        println!("{}", determination.reasoning);
        println!(
            "Ranks: history={}, exam={}, mdm={}",
            determination.ranks.history, determination.ranks.exam, determination.ranks.mdm
        );
        for axis in &determination.defaulted {
            println!("Note: {} input was not recognised; lowest rank used", axis);
        }
    }
}
