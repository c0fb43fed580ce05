//! Postinstall banner shown once after the package is installed

use colored::Colorize;

const REPOSITORY_URL: &str = "https://github.com/TheGlitchKing/mind-glaive";

/// Render the "installed successfully" banner with next steps
pub fn postinstall_banner() -> String {
    let boxed = "\
╔════════════════════════════════════════════════════════════════╗
║                                                                ║
║              mind-glaive installed successfully!               ║
║                                                                ║
╚════════════════════════════════════════════════════════════════╝";

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{}\n\n", boxed.cyan()));
    out.push_str(&format!(
        "{} Package installed: {}\n\n",
        "✓".green(),
        "@theglitchking/mind-glaive".blue()
    ));

    out.push_str(&format!("{}\n\n", "Next Steps:".yellow()));
    out.push_str("  1. Run the installer to set up the plugin:\n");
    out.push_str(&format!(
        "     {}\n\n",
        "mind-glaive install --scope user --template full-stack".cyan()
    ));
    out.push_str(&format!("     {}\n", "Scopes:".blue()));
    out.push_str("       user    - Install globally (~/.claude/) for all projects\n");
    out.push_str("       project - Install locally (./.claude/) for this project only\n\n");
    out.push_str(&format!("     {}\n", "Templates:".blue()));
    out.push_str("       minimal      - Small projects, learning (1KB)\n");
    out.push_str(&format!(
        "       full-stack   - Web applications (8KB)  {}\n",
        "← Recommended".yellow()
    ));
    out.push_str("       data-science - ML/research projects (6KB)\n\n");

    out.push_str("  2. Check installation status:\n");
    out.push_str(&format!("     {}\n\n", "mind-glaive status".cyan()));

    out.push_str("  3. After installation, use these Claude Code commands:\n");
    for (command, what) in [
        ("/context/status    ", "Show context health metrics"),
        ("/context/optimize  ", "Run maintenance"),
        ("/learn/from-session", "Extract patterns"),
    ] {
        out.push_str(&format!("     {} - {}\n", command.cyan(), what));
    }

    out.push_str(&format!("\n{}\n", "Quick Start:".yellow()));
    out.push_str(&format!("  {}\n\n", "mind-glaive help".cyan()));
    out.push_str(&format!("{}\n", "Documentation:".yellow()));
    out.push_str(&format!("  {}\n", REPOSITORY_URL.blue()));
    out
}
