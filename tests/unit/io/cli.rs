//! Tests for argument parsing, inventory selection and run orchestration

#[cfg(test)]
mod tests {
    use clap::Parser;
    use partridge::PuzzleError;
    use partridge::algorithm::{PieceSet, PruningRule, SearchOrder, SearchStats};
    use partridge::io::cli::{Cli, Runner, mean_elapsed};
    use std::time::Duration;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("partridge").chain(args.iter().copied());
        match Cli::try_parse_from(argv) {
            Ok(cli) => cli,
            Err(error) => unreachable!("arguments {args:?} rejected: {error}"),
        }
    }

    fn rejects(args: &[&str]) -> bool {
        Cli::try_parse_from(std::iter::once("partridge").chain(args.iter().copied())).is_err()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.max_piece_size, 8);
        assert_eq!(cli.runs, 1);
        assert_eq!(cli.order, SearchOrder::Ascending);
        assert_eq!(cli.output.to_str(), Some("output"));
        assert!(!cli.test_data);
        assert!(!cli.no_files);
        assert!(cli.should_show_progress());
    }

    #[test]
    fn test_piece_size_range() {
        assert_eq!(parse(&["-k", "63"]).max_piece_size, 63);
        assert!(rejects(&["-k", "0"]));
        assert!(rejects(&["-k", "64"]));
        assert!(rejects(&["-k", "eight"]));
    }

    #[test]
    fn test_order_parsing() {
        assert_eq!(
            parse(&["--order", "descending"]).order,
            SearchOrder::Descending
        );
        assert!(rejects(&["--order", "sideways"]));
    }

    #[test]
    fn test_inventory_selection() {
        let standard = parse(&["-k", "5"]).inventory();
        assert_eq!(
            standard.map(|inventory| inventory.kind()).ok(),
            Some(PieceSet::Standard)
        );

        let fixture = parse(&["-t", "-k", "3"]).inventory();
        assert_eq!(
            fixture.as_ref().map(|inventory| inventory.counts().to_vec()).ok(),
            Some(vec![5, 1, 3])
        );

        let explicit = parse(&["--counts", "0,9,0,4"]).inventory();
        assert_eq!(
            explicit.map(|inventory| inventory.max_piece_size()).ok(),
            Some(4)
        );
    }

    #[test]
    fn test_inventory_errors() {
        assert!(matches!(
            parse(&["-t", "-k", "8"]).inventory(),
            Err(PuzzleError::InvalidParameter {
                parameter: "max-piece-size",
                ..
            })
        ));
        assert!(matches!(
            parse(&["-t", "--counts", "5,1,3"]).inventory(),
            Err(PuzzleError::InvalidParameter {
                parameter: "counts",
                ..
            })
        ));
        assert!(parse(&["--counts", "1,1"]).inventory().is_err());
    }

    #[test]
    fn test_pruning_selection() {
        let cli = parse(&["-k", "4"]);
        let Ok(inventory) = cli.inventory() else {
            unreachable!("standard inventory is valid");
        };
        assert_eq!(cli.pruning(&inventory), PruningRule::Symmetry);

        let cli = parse(&["-k", "4", "--no-prune"]);
        assert_eq!(cli.pruning(&inventory), PruningRule::Disabled);
    }

    #[test]
    fn test_output_config() {
        let quiet = parse(&["--no-files"]);
        assert!(matches!(quiet.output_config(), Ok(None)));

        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        let head = dir.path().join("head.html");
        assert!(std::fs::write(&head, "<main>").is_ok());
        let head_arg = head.to_string_lossy().into_owned();

        let cli = parse(&["--html-head", &head_arg, "--png-limit", "3"]);
        let config = cli.output_config();
        assert_eq!(
            config
                .as_ref()
                .ok()
                .and_then(Option::as_ref)
                .map(|config| (config.html_head.as_str(), config.png_limit)),
            Some(("<main>", 3))
        );

        let missing = dir.path().join("missing.html").to_string_lossy().into_owned();
        let cli = parse(&["--html-footer", &missing]);
        assert!(matches!(
            cli.output_config(),
            Err(PuzzleError::FileSystem { .. })
        ));
    }

    // Every pass enumerates the same tilings
    #[test]
    fn test_runner_repeats_runs() {
        let runner = Runner::new(parse(&["-t", "-k", "3", "-q", "--no-files", "-r", "3"]));
        let Ok(results) = runner.process() else {
            unreachable!("fixture run succeeds");
        };
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|stats| stats.solutions == 32));
        assert!(results.iter().all(|stats| stats.recursions == 251));
    }

    #[test]
    fn test_runner_writes_verified_files() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        let output = dir.path().join("out").to_string_lossy().into_owned();
        let runner = Runner::new(parse(&["-t", "-k", "2", "-q", "--verify", "-o", &output]));

        let results = runner.process();
        assert_eq!(
            results.map(|stats| stats.iter().map(|run| run.solutions).sum::<u64>()).ok(),
            Some(4)
        );

        let text = std::fs::read_to_string(dir.path().join("out").join("Solutions.txt"));
        assert_eq!(
            text.map(|text| text.matches("Solution number ").count()).ok(),
            Some(4)
        );
        assert!(dir.path().join("out").join("Solutions00000.html").exists());
    }

    #[test]
    fn test_runner_rejects_bad_inventory() {
        let runner = Runner::new(parse(&["-t", "-k", "6", "-q", "--no-files"]));
        assert!(runner.process().is_err());
    }

    #[test]
    fn test_mean_elapsed() {
        assert_eq!(mean_elapsed(&[]), Duration::ZERO);

        let runs = [
            SearchStats {
                elapsed: Duration::from_millis(10),
                ..SearchStats::default()
            },
            SearchStats {
                elapsed: Duration::from_millis(30),
                ..SearchStats::default()
            },
        ];
        assert_eq!(mean_elapsed(&runs), Duration::from_millis(20));
    }
}
