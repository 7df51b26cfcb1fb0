#![allow(clippy::unwrap_used, clippy::expect_used)]

//! The file commands, exercised on in-memory sources.

use monkey_eval::EvalConfig;
use monkeyc::commands::{lex_source, parse_source, read_file, run_source, CliError, Status};
use monkeyc::config::{Config, ConfigError, LOG_FORMAT_VAR};

fn run(source: &str) -> (Status, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = run_source(source, EvalConfig::default(), &mut out, &mut err).unwrap();
    (
        status,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

mod run {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prints_final_value() {
        let source = "let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };\nfib(10)";
        assert_eq!(run(source), (Status::Success, "55\n".to_string(), String::new()));
    }

    #[test]
    fn null_result_is_not_printed() {
        let (status, out, err) = run("puts(\"hello\")");
        assert_eq!(status, Status::Success);
        assert_eq!(out, "hello\n");
        assert_eq!(err, "");
    }

    #[test]
    fn let_only_program_prints_nothing() {
        assert_eq!(run("let x = 1;"), (Status::Success, String::new(), String::new()));
    }

    #[test]
    fn runtime_error_goes_to_stderr() {
        let (status, out, err) = run("puts(1); 5 + true; puts(2)");
        assert_eq!(status, Status::Failure);
        assert_eq!(out, "1\n");
        assert_eq!(err, "Error: type mismatch: INTEGER + BOOLEAN\n");
    }

    #[test]
    fn parse_errors_skip_evaluation() {
        let (status, out, err) = run("puts(1); let = 2;");
        assert_eq!(status, Status::Failure);
        assert_eq!(out, "");
        assert_eq!(
            err,
            "\tMismatch token[expected='IDENT', got='=']\n\
             \tno prefix parse function for token `=` found\n"
        );
    }
}

mod parse {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prints_one_statement_per_line() {
        let mut out = Vec::new();
        let status = parse_source("let x = 1 + 2 * 3; return -x; add(x, 1)", &mut out).unwrap();
        assert_eq!(status, Status::Success);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "let x = (1 + (2 * 3));\nreturn (-x);\nadd(x,1)\n"
        );
    }

    #[test]
    fn prints_diagnostics() {
        let mut out = Vec::new();
        let status = parse_source("let 5;", &mut out).unwrap();
        assert_eq!(status, Status::Failure);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\tMismatch token[expected='IDENT', got='INT']\n"
        );
    }
}

mod lex {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prints_every_token() {
        let mut out = Vec::new();
        let status = lex_source("let a = \"hi\";", &mut out).unwrap();
        assert_eq!(status, Status::Success);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "LET \"let\"\nIDENT \"a\"\n= \"=\"\nSTRING \"hi\"\n; \";\"\nEOF \"\"\n"
        );
    }
}

mod read {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.monkey");
        let path = path.to_str().unwrap();
        let err = read_file(path).unwrap_err();
        assert!(matches!(err, CliError::NotFound(_)));
        assert_eq!(err.to_string(), format!("cannot find file '{path}'"));
    }

    #[test]
    fn invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.monkey");
        std::fs::write(&path, [0x66, 0x6e, 0xff, 0xfe]).unwrap();
        let path = path.to_str().unwrap();
        let err = read_file(path).unwrap_err();
        assert_eq!(err.to_string(), format!("'{path}' contains invalid UTF-8 data"));
    }

    #[test]
    fn reads_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ok.monkey");
        std::fs::write(&path, "1 + 1").unwrap();
        assert_eq!(read_file(path.to_str().unwrap()).unwrap(), "1 + 1");
    }
}

mod config {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_errors_report_through_cli_error() {
        let err = Config::from_lookup(|name| (name == LOG_FORMAT_VAR).then(|| "json".to_string()))
            .map_err(CliError::from)
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::InvalidLogFormat { .. })
        ));
        assert_eq!(
            err.to_string(),
            "invalid MONKEY_LOG_FORMAT value \"json\": expected `tree` or `flat`"
        );
    }
}
