use std::ffi::OsString;

/// Long flag names that may also be written with a single dash.
const LONG_NAMES: &[&str] = &[
    "in", "out", "minify", "verbose", "quiet", "no-color", "help", "version",
];

/// Flags whose value may follow as a separate argument.
const VALUE_FLAGS: &[&str] = &["--in", "--out"];

/// Rewrite single-dash long flags (`-in`, `-minify=false`) to `--in`,
/// `--minify=false`.
///
/// A token that is the value of a preceding `-in`/`-out` is left alone, so
/// `-in -out` keeps `-out` as a path. Everything after `--` is passed through
/// untouched. Non-UTF-8 arguments are never rewritten.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut expecting_value = false;
    let mut passthrough = false;

    for (position, arg) in args.into_iter().enumerate() {
        // Program name.
        if position == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if expecting_value {
            expecting_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let rewritten = rewrite(text);
        let flag = rewritten.as_deref().unwrap_or(text);
        expecting_value = VALUE_FLAGS.contains(&flag);

        match rewritten {
            Some(long) => out.push(OsString::from(long)),
            None => out.push(arg),
        }
    }

    out
}

fn rewrite(text: &str) -> Option<String> {
    let name = text.strip_prefix('-')?;
    if name.starts_with('-') {
        return None;
    }
    let key = name.split_once('=').map_or(name, |(key, _)| key);
    LONG_NAMES.contains(&key).then(|| format!("-{text}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Vec<String> {
        normalize(args.iter().map(OsString::from))
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_single_dash_long_flags() {
        assert_eq!(
            run(&["pairbundle", "-in", "a.js", "-out", "a.out.js", "-minify"]),
            ["pairbundle", "--in", "a.js", "--out", "a.out.js", "--minify"]
        );
    }

    #[test]
    fn test_equals_form() {
        assert_eq!(
            run(&["pairbundle", "-in=a.js", "-minify=false"]),
            ["pairbundle", "--in=a.js", "--minify=false"]
        );
    }

    #[test]
    fn test_double_dash_and_shorts_untouched() {
        assert_eq!(
            run(&["pairbundle", "--in", "a.js", "-v", "-q"]),
            ["pairbundle", "--in", "a.js", "-v", "-q"]
        );
    }

    #[test]
    fn test_value_is_never_rewritten() {
        assert_eq!(
            run(&["pairbundle", "-in", "-out", "-out", "x.js"]),
            ["pairbundle", "--in", "-out", "--out", "x.js"]
        );
    }

    #[test]
    fn test_equals_form_takes_no_separate_value() {
        assert_eq!(
            run(&["pairbundle", "-in=a.js", "-out", "a.out.js"]),
            ["pairbundle", "--in=a.js", "--out", "a.out.js"]
        );
    }

    #[test]
    fn test_stops_after_terminator() {
        assert_eq!(
            run(&["pairbundle", "--", "-in", "a.js"]),
            ["pairbundle", "--", "-in", "a.js"]
        );
    }

    #[test]
    fn test_unknown_single_dash_left_for_clap() {
        assert_eq!(run(&["pairbundle", "-bogus"]), ["pairbundle", "-bogus"]);
    }

    #[test]
    fn test_program_name_untouched() {
        assert_eq!(run(&["-in"]), ["-in"]);
    }
}
