//! Output formatting for generation results.

use owo_colors::OwoColorize;
use stubgen::GenerationOutcome;

/// Print the user-facing result of a generation run
pub fn print_outcome(outcome: &GenerationOutcome) {
    match outcome {
        GenerationOutcome::Written { output_path, .. } => {
            println!(
                "{} {}",
                "✅ Test file generated at".green(),
                output_path.display()
            );
        }
        GenerationOutcome::NoFunctionsFound => {
            println!(
                "{}",
                "❌ No supported function definitions found to generate tests.".yellow()
            );
        }
        GenerationOutcome::DryRun {
            output_path,
            content,
            bindings,
        } => {
            // listing goes to stderr so stdout can be redirected into a file
            eprintln!(
                "{} {}",
                "📝 Dry run, would write".bright_blue().bold(),
                output_path.display()
            );
            for binding in bindings {
                eprintln!(
                    "   {} ({}, line {})",
                    binding.name.cyan(),
                    binding.kind,
                    binding.span.line
                );
            }
            println!("{content}");
        }
    }
}
