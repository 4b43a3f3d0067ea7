use clap::Parser;
use std::path::Path;

use zipsh::demo;
use zipsh::{Shell, VirtualFs};

#[derive(Parser)]
#[command(name = "zipsh")]
#[command(about = "A shell over a ZIP-backed virtual filesystem")]
#[command(version)]
struct Cli {
    /// Path to the VFS archive (ZIP)
    #[arg(long = "vfs")]
    vfs: Option<String>,

    /// Startup script to execute before the interactive prompt
    #[arg(long = "script")]
    script: Option<String>,

    /// Write demo.zip and demo.sh to the current directory and exit
    #[arg(long = "demo")]
    demo: bool,

    /// Run the script non-interactively and print results as JSON
    #[arg(long = "json")]
    json: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.demo {
        match demo::write_demo_assets(Path::new(".")) {
            Ok((archive, script)) => {
                println!("wrote {} and {}", archive.display(), script.display());
                println!(
                    "try: zipsh --vfs {} --script {}",
                    archive.display(),
                    script.display()
                );
            }
            Err(e) => {
                eprintln!("Error: cannot write demo assets: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // A failed load is reported and leaves the filesystem unloaded; the
    // shell still starts.
    let mut vfs = VirtualFs::new();
    if let Some(path) = &cli.vfs {
        match vfs.load(Path::new(path)) {
            Ok(report) => {
                if !cli.json {
                    println!("VFS '{}' loaded ({} entries)", report.name, report.entry_count);
                }
                if let Some(warning) = report.warning {
                    eprintln!("warning: {}", warning);
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    let script_lines: Option<Vec<String>> = match &cli.script {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => Some(text.lines().map(String::from).collect()),
            Err(e) => {
                eprintln!("cannot read script file '{}': {}", path, e);
                None
            }
        },
        None => None,
    };

    let mut shell = Shell::new(vfs);

    if cli.json {
        let result = shell.run_script(&script_lines.unwrap_or_default()).await;
        println!(
            "{}",
            serde_json::json!({
                "stdout": result.stdout,
                "stderr": result.stderr,
                "exitCode": result.exit_code,
            })
        );
        std::process::exit(result.exit_code);
    }

    if script_lines.is_some() {
        println!("Executing script: {}", cli.script.as_deref().unwrap_or(""));
    }
    println!("Type 'help' for commands, 'exit' or 'quit' to leave.");

    if let Err(e) = shell.run(script_lines.as_deref()).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
