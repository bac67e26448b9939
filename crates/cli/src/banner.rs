//! Startup banner and welcome hint.

use console::{Color, Style};

const AIRPLANE: &str = r#"
                _
              -=\`\
          |\ ____\_\__
        -=\c`""""""" "`)
     art   `~~~~~/ /~~`
             -==/ /
               '-'
"#;

const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

fn paint(lines: &str, offset: usize) {
    for (index, line) in lines.lines().enumerate() {
        let color = PALETTE[(index + offset) % PALETTE.len()];
        println!("  {}", Style::new().fg(color).apply_to(line));
    }
}

/// Print the airplane and the version line, one palette color per line.
pub fn print_banner() {
    paint(AIRPLANE, 0);
    println!();
    paint(&version_line(), AIRPLANE.lines().count());
    println!();
}

/// Print the greeting shown before the interactive menu.
pub fn print_welcome() {
    println!("{}", Style::new().bold().apply_to("🚀 Welcome to art-gen!"));
    println!(
        "Run {} to see every command, or pick a mode below.",
        Style::new().cyan().apply_to("art-gen --help")
    );
}

fn version_line() -> String {
    format!("✨ art-gen {} ✨", env!("CARGO_PKG_VERSION"))
}
