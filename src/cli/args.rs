// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// csvscrub - strips embedded HTML and repairs Windows-1252 mojibake in CSV exports
pub struct Args {
    /// path of the input CSV file
    #[argh(option, short = 'i')]
    pub input: Option<String>,

    /// path for the sanitized CSV file
    #[argh(option, short = 'o')]
    pub output: Option<String>,
}

/// One line per flag, matching the CLI contract.
pub fn usage_text() -> String {
    [
        "Usage: csvscrub -i <input> -o <output>",
        "",
        "Required arguments:",
        "  -i, --input      path of the input CSV file",
        "  -o, --output     path for the sanitized CSV file",
        "",
        "Optional arguments:",
        "  -h, --help       show this help message and exit",
    ]
    .join("\n")
}

/// Parse the process arguments. A help flag anywhere wins and exits 0; parse
/// errors print the error plus the usage text to stdout and exit 1.
pub fn read_args() -> Args {
    let argv: Vec<String> = std::env::args().collect();
    let command = argv.first().map(String::as_str).unwrap_or("csvscrub");
    let rest: Vec<&str> = argv.iter().skip(1).map(String::as_str).collect();

    if rest.iter().any(|arg| *arg == "-h" || *arg == "--help") {
        println!("{}", usage_text());
        std::process::exit(0);
    }

    match Args::from_args(&[command], &rest) {
        Ok(args) => args,
        Err(early_exit) => match early_exit.status {
            Ok(()) => {
                println!("{}", early_exit.output);
                std::process::exit(0);
            }
            Err(()) => {
                println!("{}", early_exit.output);
                println!();
                println!("{}", usage_text());
                std::process::exit(1);
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_paths_parse_in_short_and_long_form() {
        let args = Args::from_args(&["csvscrub"], &["-i", "in.csv", "-o", "out.csv"])
            .expect("short flags parse");
        assert_eq!(args.input.as_deref(), Some("in.csv"));
        assert_eq!(args.output.as_deref(), Some("out.csv"));

        let args = Args::from_args(
            &["csvscrub"],
            &["--input", "in.csv", "--output", "out.csv"],
        )
        .expect("long flags parse");
        assert_eq!(args.input.as_deref(), Some("in.csv"));
        assert_eq!(args.output.as_deref(), Some("out.csv"));
    }

    #[test]
    fn test_unknown_flag_is_an_early_exit_with_failure_status() {
        let exit = Args::from_args(&["csvscrub"], &["--frobnicate"])
            .err()
            .expect("unknown flag fails");
        assert!(exit.status.is_err());
    }

    #[test]
    fn test_missing_option_value_is_an_early_exit_with_failure_status() {
        let exit = Args::from_args(&["csvscrub"], &["-i"])
            .err()
            .expect("missing value fails");
        assert!(exit.status.is_err());
    }

    #[test]
    fn test_usage_text_enumerates_each_flag_once() {
        let usage = usage_text();
        assert!(usage.contains("-i, --input"));
        assert!(usage.contains("-o, --output"));
        assert!(usage.contains("-h, --help"));
    }
}
