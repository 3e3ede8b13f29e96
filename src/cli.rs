use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Script files to rate (UTF-8 text)
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Output file path (stdout when absent)
    #[arg(short, long)]
    pub output: Option<String>,

    /// YAML engine configuration
    #[arg(long)]
    pub config: Option<String>,

    /// YAML pattern catalog replacing the built-in one
    #[arg(long)]
    pub catalog: Option<String>,

    /// JSON list of reviewer corrections applied to every script
    #[arg(long)]
    pub corrections: Option<String>,

    /// Lines of context around each line finding
    #[arg(long)]
    pub context_lines: Option<usize>,

    /// Include line-level findings
    #[arg(long)]
    pub lines: bool,

    /// Include per-character statistics
    #[arg(long)]
    pub characters: bool,

    /// Include the parents guide
    #[arg(long)]
    pub parents_guide: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_flags_and_files() {
        let cli = Cli::try_parse_from([
            "script-rating",
            "-o",
            "out.json",
            "--context-lines",
            "5",
            "--lines",
            "--parents-guide",
            "a.txt",
            "b.txt",
        ])
        .unwrap();
        assert_eq!(cli.output.as_deref(), Some("out.json"));
        assert_eq!(cli.context_lines, Some(5));
        assert!(cli.lines);
        assert!(cli.parents_guide);
        assert!(!cli.characters);
        assert_eq!(cli.files, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_requires_files() {
        assert!(Cli::try_parse_from(["script-rating"]).is_err());
    }
}
