#[cfg(test)]
mod tests {
    use crate::cli::parse_from;
    use crate::collector::FlagOccurrence;
    use clap::error::ErrorKind;
    use std::path::PathBuf;

    fn input(p: &str) -> FlagOccurrence {
        FlagOccurrence::Input(PathBuf::from(p))
    }

    fn output(p: &str) -> FlagOccurrence {
        FlagOccurrence::Output(PathBuf::from(p))
    }

    #[test]
    fn test_occurrences_keep_typed_order() {
        let invocation = parse_from([
            "pairbundle", "-in", "a.js", "-out", "a.out.js", "-in", "b.js", "-out", "b.out.js",
        ])
        .unwrap();

        assert_eq!(
            invocation.occurrences,
            vec![input("a.js"), output("a.out.js"), input("b.js"), output("b.out.js")]
        );
        assert_eq!(invocation.cli.inputs.len(), 2);
        assert!(!invocation.cli.minify);
    }

    #[test]
    fn test_out_of_order_flags_are_preserved_as_typed() {
        let invocation =
            parse_from(["pairbundle", "-in", "a.js", "-out", "a.out.js", "-out", "b.out.js"]).unwrap();

        assert_eq!(
            invocation.occurrences,
            vec![input("a.js"), output("a.out.js"), output("b.out.js")]
        );
    }

    #[test]
    fn test_minify_forms() {
        let on = parse_from(["pairbundle", "-minify", "-in", "a.js", "-out", "b.js"]).unwrap();
        assert!(on.cli.minify);

        let explicit = parse_from(["pairbundle", "-minify=true"]).unwrap();
        assert!(explicit.cli.minify);

        let off = parse_from(["pairbundle", "-minify=false"]).unwrap();
        assert!(!off.cli.minify);

        let last_wins = parse_from(["pairbundle", "-minify", "-minify=false"]).unwrap();
        assert!(!last_wins.cli.minify);
    }

    #[test]
    fn test_minify_does_not_swallow_next_argument() {
        let invocation = parse_from(["pairbundle", "-minify", "-in", "a.js", "-out", "a.out.js"]).unwrap();
        assert!(invocation.cli.minify);
        assert_eq!(invocation.occurrences.len(), 2);
    }

    #[test]
    fn test_double_dash_forms_accepted() {
        let invocation = parse_from(["pairbundle", "--in", "a.js", "--out=a.out.js"]).unwrap();
        assert_eq!(invocation.occurrences, vec![input("a.js"), output("a.out.js")]);
    }

    #[test]
    fn test_no_arguments_parses_to_nothing() {
        let invocation = parse_from(["pairbundle"]).unwrap();
        assert!(invocation.occurrences.is_empty());
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        let err = parse_from(["pairbundle", "-bogus"]).unwrap_err();
        assert_ne!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_trailing_positional_is_an_error() {
        let err = parse_from(["pairbundle", "-in", "a.js", "-out", "a.out.js", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_missing_value_is_an_error() {
        let err = parse_from(["pairbundle", "-in", "a.js", "-out"]).unwrap_err();
        assert_ne!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("--out"));
    }

    #[test]
    fn test_help_forms() {
        for flag in ["-h", "--help", "-help"] {
            let err = parse_from(["pairbundle", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "flag {flag}");
        }
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let err = parse_from(["pairbundle", "-v", "-q"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_usage_mentions_flags() {
        let usage = crate::cli::usage();
        assert!(usage.contains("--in"));
        assert!(usage.contains("--out"));
        assert!(usage.contains("--minify"));
    }
}
